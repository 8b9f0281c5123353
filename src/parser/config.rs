//! The read-only configuration contract the parser consumes.
//!
//! Every type here is a plain, serde-derived struct — the same shape the
//! teacher gives request/response types (`TrainingRequest`, `TableSetup`):
//! public fields, no behavior beyond small accessors, and a `Default` impl
//! that seeds sensible values so the crate is usable without a caller first
//! standing up a dictionary-persistence layer (out of scope per `spec.md`
//! §1). The defaults below are grounded in
//! `original_source/backend/bet_parser.go`'s `getLotteryAlias` /
//! `getBetTypeAlias`, not invented.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::parser::model::{BetMode, BetType, LotteryType};

/// Chinese keyword (e.g. a zodiac, color, or tail name) → ordered digit set.
pub type ZodiacMap = HashMap<String, Vec<u32>>;
/// Chinese color keyword → ordered digit set.
pub type ColorMap = HashMap<String, Vec<u32>>;
/// Chinese tail-digit keyword → ordered digit set.
pub type TailMap = HashMap<String, Vec<u32>>;

/// Alias strings for each canonical bet type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetTypeAliases {
    pub three_of_three: Vec<String>,
    pub three_of_two: Vec<String>,
    pub two_of_two: Vec<String>,
    pub special: Vec<String>,
}

impl BetTypeAliases {
    /// The alias list for one canonical bet type.
    pub fn aliases_for(&self, bet_type: BetType) -> &[String] {
        match bet_type {
            BetType::ThreeOfThree => &self.three_of_three,
            BetType::ThreeOfTwo => &self.three_of_two,
            BetType::TwoOfTwo => &self.two_of_two,
            BetType::Special => &self.special,
        }
    }

    /// Iterate over every `(BetType, alias)` pair across all four tables.
    pub fn iter_all(&self) -> impl Iterator<Item = (BetType, &str)> {
        [
            BetType::ThreeOfThree,
            BetType::ThreeOfTwo,
            BetType::TwoOfTwo,
            BetType::Special,
        ]
        .into_iter()
        .flat_map(move |bt| self.aliases_for(bt).iter().map(move |a| (bt, a.as_str())))
    }
}

/// Alias strings for each canonical lottery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotteryAliases {
    pub new_macau: Vec<String>,
    pub old_macau: Vec<String>,
    pub hong_kong: Vec<String>,
}

impl LotteryAliases {
    pub fn aliases_for(&self, lottery: LotteryType) -> &[String] {
        match lottery {
            LotteryType::NewMacau => &self.new_macau,
            LotteryType::OldMacau => &self.old_macau,
            LotteryType::HongKong => &self.hong_kong,
        }
    }

    pub fn iter_all(&self) -> impl Iterator<Item = (LotteryType, &str)> {
        [LotteryType::NewMacau, LotteryType::OldMacau, LotteryType::HongKong]
            .into_iter()
            .flat_map(move |lt| self.aliases_for(lt).iter().map(move |a| (lt, a.as_str())))
    }
}

/// Alias strings for the two wager modifiers.
///
/// These are consulted only as preserved vocabulary during S3 (§4.3); the
/// actual complex/drag mode activation in S5 is digit- and `拖`-driven, not
/// alias-driven (see `DESIGN.md`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordAliases {
    pub complex: Vec<String>,
    pub drag: Vec<String>,
}

impl KeywordAliases {
    pub fn aliases_for(&self, mode: BetMode) -> &[String] {
        match mode {
            BetMode::Complex => &self.complex,
            BetMode::Drag => &self.drag,
        }
    }

    pub fn iter_all(&self) -> impl Iterator<Item = &str> {
        self.complex.iter().chain(self.drag.iter()).map(|s| s.as_str())
    }
}

/// Canonical end-marker → alias strings (`各`, `每组`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndKeywords {
    pub each: Vec<String>,
    pub per_group: Vec<String>,
}

impl EndKeywords {
    pub fn iter_all(&self) -> impl Iterator<Item = &str> {
        self.each.iter().chain(self.per_group.iter()).map(|s| s.as_str())
    }
}

/// The full read-only configuration a parse round consumes.
///
/// Referenced, never mutated, during a round (§5). A caller that needs to
/// edit dictionaries concurrently with a parse is responsible for
/// snapshotting first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    pub zodiac_map: ZodiacMap,
    pub color_map: ColorMap,
    pub tail_map: TailMap,
    pub bet_type_aliases: BetTypeAliases,
    pub lottery_aliases: LotteryAliases,
    pub keyword_aliases: KeywordAliases,
    pub end_keywords: EndKeywords,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            zodiac_map: default_zodiac_map(),
            color_map: default_color_map(),
            tail_map: default_tail_map(),
            bet_type_aliases: BetTypeAliases {
                three_of_three: vec!["三中三".to_string()],
                three_of_two: vec!["三中二".to_string()],
                two_of_two: vec!["二中二".to_string()],
                special: vec!["特碰".to_string(), "特串".to_string()],
            },
            lottery_aliases: LotteryAliases {
                new_macau: vec![
                    "新澳门".to_string(),
                    "新澳".to_string(),
                    "新".to_string(),
                    "new_macau".to_string(),
                ],
                old_macau: vec![
                    "老澳门".to_string(),
                    "老澳".to_string(),
                    "老".to_string(),
                    "old_macau".to_string(),
                ],
                hong_kong: vec![
                    "香港".to_string(),
                    "港".to_string(),
                    "hongkong".to_string(),
                    "hk".to_string(),
                ],
            },
            keyword_aliases: KeywordAliases {
                complex: vec!["复式".to_string(), "复试".to_string()],
                drag: vec!["拖".to_string()],
            },
            end_keywords: EndKeywords {
                each: vec!["各".to_string()],
                per_group: vec!["每组".to_string(), "每个".to_string(), "分别".to_string()],
            },
        }
    }
}

/// The twelve zodiac number sets, assigned by `offset, offset+12, offset+24,
/// offset+36[, offset+48]` within `[1,49]` — the standard Mark Six grouping.
/// (`Dragon = [5,17,29,41]`, `Rabbit = [4,16,28,40]`, matching `spec.md` §8
/// scenario 4 verbatim.)
fn default_zodiac_map() -> ZodiacMap {
    let names = [
        "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
    ];
    let mut map = ZodiacMap::new();
    for (i, name) in names.iter().enumerate() {
        let offset = (i + 1) as u32;
        let mut numbers = Vec::new();
        let mut n = offset;
        while n <= 49 {
            numbers.push(n);
            n += 12;
        }
        map.insert(name.to_string(), numbers);
    }
    map
}

/// The three "bo-se" (波色) color groups used throughout the domain.
fn default_color_map() -> ColorMap {
    let mut map = ColorMap::new();
    map.insert(
        "红波".to_string(),
        vec![1, 2, 7, 8, 12, 13, 18, 19, 23, 24, 29, 30, 34, 35, 40, 45, 46],
    );
    map.insert(
        "蓝波".to_string(),
        vec![3, 4, 9, 10, 14, 15, 20, 25, 26, 31, 36, 37, 41, 42, 47, 48],
    );
    map.insert(
        "绿波".to_string(),
        vec![5, 6, 11, 16, 17, 21, 22, 27, 28, 32, 33, 38, 39, 43, 44, 49],
    );
    map
}

/// Tail-digit groups: `"<d>尾"` → every number in `[1,49]` ending in digit `d`.
fn default_tail_map() -> TailMap {
    let mut map = TailMap::new();
    for tail in 0..=9u32 {
        let numbers: Vec<u32> = (1..=49).filter(|n| n % 10 == tail).collect();
        map.insert(format!("{}尾", tail), numbers);
    }
    map
}

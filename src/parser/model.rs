//! Runtime entities produced by a parse round (`spec.md` §3).
//!
//! Every type here is a plain, serde-derived value type created fresh per
//! [`crate::parser::parse_bet_string`] call and returned by value — nothing
//! is retained across calls except the round-id counter (`round.rs`). This
//! mirrors the teacher's `TrainingScenario`/`TableSetup`: plain public
//! fields, `Display` impls for every closed-vocabulary enum instead of raw
//! strings, and serde derives on everything so a result can cross an API
//! boundary as JSON untouched.

use std::collections::HashMap;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::parser::error::ParseError;

// ---------------------------------------------------------------------------
// Closed-vocabulary enums
//
// LotteryType / BetType / BetMode carry the canonical spellings `spec.md`
// §6 requires to appear literally in output and in S3 restoration.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LotteryType {
    NewMacau,
    OldMacau,
    HongKong,
}

impl LotteryType {
    pub const ALL: [LotteryType; 3] = [
        LotteryType::NewMacau,
        LotteryType::OldMacau,
        LotteryType::HongKong,
    ];

    /// The literal canonical spelling, e.g. `新澳`.
    pub fn canonical(self) -> &'static str {
        match self {
            LotteryType::NewMacau => "新澳",
            LotteryType::OldMacau => "老澳",
            LotteryType::HongKong => "香港",
        }
    }
}

impl fmt::Display for LotteryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetType {
    ThreeOfThree,
    ThreeOfTwo,
    TwoOfTwo,
    Special,
}

impl BetType {
    pub const ALL: [BetType; 4] = [
        BetType::ThreeOfThree,
        BetType::ThreeOfTwo,
        BetType::TwoOfTwo,
        BetType::Special,
    ];

    /// The literal canonical spelling, e.g. `三中三`.
    pub fn canonical(self) -> &'static str {
        match self {
            BetType::ThreeOfThree => "三中三",
            BetType::ThreeOfTwo => "三中二",
            BetType::TwoOfTwo => "二中二",
            BetType::Special => "特碰",
        }
    }

    /// Numbers required per ticket, r(B) in `spec.md` §3/§4.5.
    pub fn cardinality(self) -> usize {
        match self {
            BetType::ThreeOfThree => 3,
            BetType::ThreeOfTwo => 3,
            BetType::TwoOfTwo => 2,
            BetType::Special => 2,
        }
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetMode {
    Complex,
    Drag,
}

impl fmt::Display for BetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetMode::Complex => write!(f, "complex"),
            BetMode::Drag => write!(f, "drag"),
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One call to [`crate::parser::parse_bet_string`].
///
/// `enabled_types` and `user_settings` are accepted and stored but unused by
/// the core pipeline, per `spec.md` §6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetParseRequest {
    pub input: String,
    #[serde(default)]
    pub enabled_types: Vec<LotteryType>,
    #[serde(default)]
    pub user_settings: HashMap<String, String>,
}

impl BetParseRequest {
    /// A request with just the input text; `enabled_types` and
    /// `user_settings` default to empty.
    pub fn new(input: impl Into<String>) -> Self {
        BetParseRequest {
            input: input.into(),
            enabled_types: Vec::new(),
            user_settings: HashMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Segmentation (S4)
// ---------------------------------------------------------------------------

/// One bet clause produced by segmentation: a substring of the
/// canonicalized text ending at exactly one amount anchor (`spec.md` §4.4).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetSegment {
    pub text: String,
}

impl BetSegment {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

// ---------------------------------------------------------------------------
// Per-bet results (S5)
// ---------------------------------------------------------------------------

/// One concrete ticket: an ordered number tuple under one unit amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetDetail {
    pub numbers: Vec<u32>,
    pub unit_amount: Decimal,
    pub description: String,
}

/// All tickets produced for one (bet type, mode) pair inside one lottery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetModeInfo {
    pub mode: BetMode,
    pub unit_amount: Decimal,
    pub details: Vec<BetDetail>,
    pub groups: usize,
    pub amount: Decimal,
}

impl BetModeInfo {
    pub fn new(mode: BetMode, unit_amount: Decimal, details: Vec<BetDetail>) -> Self {
        let groups = details.len();
        let amount = unit_amount * Decimal::from(groups);
        BetModeInfo {
            mode,
            unit_amount,
            details,
            groups,
            amount,
        }
    }
}

/// One bet type's results inside one lottery, rolled up across modes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BetTypeDetail {
    pub modes: HashMap<BetMode, BetModeInfo>,
    pub total_groups: usize,
    pub total_amount: Decimal,
}

impl BetTypeDetail {
    pub fn from_modes(modes: HashMap<BetMode, BetModeInfo>) -> Self {
        let total_groups = modes.values().map(|m| m.groups).sum();
        let total_amount = modes.values().map(|m| m.amount).sum();
        BetTypeDetail {
            modes,
            total_groups,
            total_amount,
        }
    }
}

/// One lottery's results inside one segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LotteryBetInfo {
    pub active_bet_types: Vec<BetType>,
    pub bet_types: HashMap<BetType, BetTypeDetail>,
    pub total_groups: usize,
    pub total_amount: Decimal,
}

impl LotteryBetInfo {
    pub fn from_bet_types(
        active_bet_types: Vec<BetType>,
        bet_types: HashMap<BetType, BetTypeDetail>,
    ) -> Self {
        let total_groups = bet_types.values().map(|d| d.total_groups).sum();
        let total_amount = bet_types.values().map(|d| d.total_amount).sum();
        LotteryBetInfo {
            active_bet_types,
            bet_types,
            total_groups,
            total_amount,
        }
    }
}

/// `{amount, groups, count}` for one (lottery, bet type) pair (`spec.md` §4.6).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BetTypeStat {
    pub amount: Decimal,
    pub groups: usize,
    pub count: usize,
}

impl BetTypeStat {
    pub fn add(&mut self, other: BetTypeStat) {
        self.amount += other.amount;
        self.groups += other.groups;
        self.count += other.count;
    }
}

/// Statistics rolled up from one segment's lotteries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentStatistics {
    pub total_amount: Decimal,
    pub total_groups: usize,
    pub lottery_bet_type_stats: HashMap<LotteryType, HashMap<BetType, BetTypeStat>>,
}

/// One segment's fully parsed result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedBet {
    pub bet_id: String,
    pub original_segment: String,
    pub lotteries: HashMap<LotteryType, LotteryBetInfo>,
    pub statistics: SegmentStatistics,
    pub has_error: bool,
    #[serde(skip)]
    pub errors: Vec<ParseError>,
    pub error_messages: Vec<String>,
}

// ---------------------------------------------------------------------------
// Round-level results (S6)
// ---------------------------------------------------------------------------

/// Statistics rolled up across all non-erroring bets in a round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundStatistics {
    pub total_amount: Decimal,
    pub total_groups: usize,
    pub total_bets: usize,
    pub lottery_bet_type_stats: HashMap<LotteryType, HashMap<BetType, BetTypeStat>>,
    pub lottery_totals: HashMap<LotteryType, BetTypeStat>,
    pub bet_type_totals: HashMap<BetType, BetTypeStat>,
}

/// The complete output of one [`crate::parser::parse_bet_string`] call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetParsingResult {
    pub round_id: u64,
    pub original_text: String,
    pub parsed_bets: Vec<ParsedBet>,
    pub round_statistics: RoundStatistics,
    pub has_error: bool,
    pub error_messages: Vec<String>,
    pub parsed_at_unix_ms: u64,
}

impl BetParsingResult {
    pub(crate) fn now_unix_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

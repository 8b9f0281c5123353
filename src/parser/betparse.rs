//! S5 — per-segment parsing (`spec.md` §4.5), the core of the pipeline.
//!
//! For one bet segment: identify the active lottery set (with inheritance
//! across segments), identify which of the four canonical bet types are
//! present, then independently enumerate complex and drag combinations for
//! each active bet type.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::parser::combinatorics;
use crate::parser::config::ParserConfig;
use crate::parser::error::ParseError;
use crate::parser::model::{
    BetDetail, BetMode, BetModeInfo, BetSegment, BetType, BetTypeDetail, LotteryBetInfo,
    LotteryType, ParsedBet, SegmentStatistics,
};
use crate::parser::rollup;

static EACH_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"各(\d+)").unwrap());
static PER_GROUP_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"每组(\d+)").unwrap());
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}(?:-\d{1,2})*").unwrap());
static DRAG_GROUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}(?:-\d{1,2})*)拖(\d{1,2}(?:-\d{1,2})*)(?:拖(\d{1,2}(?:-\d{1,2})*))?").unwrap()
});

/// Parse one bet segment into a `ParsedBet`, or `None` if the segment has
/// neither a bet-type keyword nor a digit and should be silently dropped
/// (`spec.md` §8 boundary behaviors).
///
/// `lottery_context` carries the most recently identified lottery set
/// across segments and is updated in place whenever this segment
/// identifies a non-empty set of its own (`spec.md` §4.5.1).
///
/// `bet_type_context` does the same for the bet-type flag set. §4.5.2 reads
/// as if bet-type flags were purely per-segment, but §8 scenario 6 parses
/// a trailing `拖 各5` segment (no bet-type token of its own) as a
/// `NoDragGroups` error against the *previous* segment's `三中三`, which is
/// only possible if the flag set inherits the same way the lottery set
/// does. This implementation follows the worked scenario over the
/// narrower prose (see `DESIGN.md`).
pub fn parse_segment(
    segment: &BetSegment,
    config: &ParserConfig,
    lottery_context: &mut Vec<LotteryType>,
    bet_type_context: &mut Vec<BetType>,
    bet_id: String,
) -> Option<ParsedBet> {
    let text = segment.as_str();
    let literal_types = active_bet_types(text);
    let has_digit = text.chars().any(|c| c.is_ascii_digit());

    let active_types = if !literal_types.is_empty() {
        *bet_type_context = literal_types.clone();
        literal_types
    } else if has_digit && !bet_type_context.is_empty() {
        bet_type_context.clone()
    } else if !has_digit {
        return None;
    } else {
        let error = ParseError::NoBetType { segment: text.to_string() };
        return Some(ParsedBet {
            bet_id,
            original_segment: text.to_string(),
            lotteries: HashMap::new(),
            statistics: SegmentStatistics::default(),
            has_error: true,
            error_messages: vec![error.to_string()],
            errors: vec![error],
        });
    };

    let identified = find_lotteries_in_segment(text, config);
    let lotteries_for_segment = if !identified.is_empty() {
        *lottery_context = identified.clone();
        identified
    } else if !lottery_context.is_empty() {
        lottery_context.clone()
    } else {
        vec![LotteryType::NewMacau]
    };

    let mut shared_errors = Vec::new();
    let mut shared_bet_types: HashMap<BetType, BetTypeDetail> = HashMap::new();
    for &bet_type in &active_types {
        let (detail, errors) = process_bet_type(text, bet_type);
        shared_bet_types.insert(bet_type, detail);
        shared_errors.extend(errors);
    }

    let mut lotteries = HashMap::new();
    for lottery in &lotteries_for_segment {
        lotteries.insert(
            *lottery,
            LotteryBetInfo::from_bet_types(active_types.clone(), shared_bet_types.clone()),
        );
    }

    let statistics = rollup::segment_statistics(&lotteries);
    let has_error = !shared_errors.is_empty();
    let error_messages = shared_errors.iter().map(ToString::to_string).collect();

    Some(ParsedBet {
        bet_id,
        original_segment: text.to_string(),
        lotteries,
        statistics,
        has_error,
        errors: shared_errors,
        error_messages,
    })
}

/// Flags the four canonical bet types by literal substring search — valid
/// only because S3 has already restored every alias to its canonical
/// spelling (`spec.md` §4.5.2, §9).
fn active_bet_types(text: &str) -> Vec<BetType> {
    BetType::ALL.into_iter().filter(|bt| text.contains(bt.canonical())).collect()
}

/// Longest-alias-first, per-lottery, each lottery contributing at most
/// once. Matches are erased from a working copy so a later lottery's
/// alias search can't re-match text already claimed.
fn find_lotteries_in_segment(text: &str, config: &ParserConfig) -> Vec<LotteryType> {
    let mut working = text.to_string();
    let mut identified = Vec::new();
    for lottery in LotteryType::ALL {
        let mut aliases: Vec<&str> = config
            .lottery_aliases
            .aliases_for(lottery)
            .iter()
            .map(String::as_str)
            .collect();
        aliases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        for alias in aliases {
            if !alias.is_empty() && working.contains(alias) {
                identified.push(lottery);
                working = working.replace(alias, "");
                break;
            }
        }
    }
    identified
}

/// Process one active bet type: determine which of complex/drag mode are
/// active, extract the shared unit amount, enumerate, and collect errors.
fn process_bet_type(text: &str, bet_type: BetType) -> (BetTypeDetail, Vec<ParseError>) {
    let r = bet_type.cardinality();
    let mut modes: HashMap<BetMode, BetModeInfo> = HashMap::new();
    let mut errors = Vec::new();

    let complex_active = complex_tokens(text).iter().any(|(_, numbers)| numbers.len() >= r);
    if complex_active {
        match extract_unit_amount(text) {
            Some(amount) => {
                let details = process_complex(text, bet_type, r, amount);
                modes.insert(BetMode::Complex, BetModeInfo::new(BetMode::Complex, amount, details));
            }
            None => errors.push(ParseError::MissingComplexAmount {
                bet_type,
                segment: text.to_string(),
            }),
        }
    }

    if text.contains('拖') {
        match extract_unit_amount(text) {
            Some(amount) => {
                let groups = drag_groups(text);
                if groups.is_empty() {
                    errors.push(ParseError::NoDragGroups { bet_type, segment: text.to_string() });
                } else {
                    let details = process_drag(bet_type, amount, &groups);
                    modes.insert(BetMode::Drag, BetModeInfo::new(BetMode::Drag, amount, details));
                }
            }
            None => errors.push(ParseError::MissingDragAmount {
                bet_type,
                segment: text.to_string(),
            }),
        }
    }

    (BetTypeDetail::from_modes(modes), errors)
}

/// `各(\d+)` first, then `每组(\d+)` — the single amount anchor a segment
/// carries by construction (`spec.md` §4.4, §4.5.3).
fn extract_unit_amount(text: &str) -> Option<Decimal> {
    EACH_AMOUNT
        .captures(text)
        .or_else(|| PER_GROUP_AMOUNT.captures(text))
        .and_then(|c| c.get(1))
        .and_then(|m| Decimal::from_str(m.as_str()).ok())
}

/// Maximal digit-run tokens not touching another digit or `拖` on either
/// side, with their parsed, range-filtered numbers (`spec.md` §4.5.3).
fn complex_tokens(text: &str) -> Vec<(String, Vec<u32>)> {
    let mut tokens = Vec::new();
    for m in DIGIT_RUN.find_iter(text) {
        let before = text[..m.start()].chars().last();
        let after = text[m.end()..].chars().next();
        let blocked = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit() || c == '拖');
        if blocked(before) || blocked(after) {
            continue;
        }
        let numbers = parse_number_list(m.as_str());
        tokens.push((m.as_str().to_string(), numbers));
    }
    tokens
}

fn parse_number_list(text: &str) -> Vec<u32> {
    text.split('-')
        .filter_map(|part| part.parse::<u32>().ok())
        .filter(|&n| (1..=49).contains(&n))
        .collect()
}

/// For each qualifying token: exact match if `k == r`, all `r`-combinations
/// if `k > r`, skipped if `k < r` (`spec.md` §4.5.3 "Complex enumeration").
fn process_complex(text: &str, bet_type: BetType, r: usize, unit_amount: Decimal) -> Vec<BetDetail> {
    let mut details = Vec::new();
    for (token_text, numbers) in complex_tokens(text) {
        let k = numbers.len();
        if k < r {
            continue;
        }
        let combos = if k == r {
            vec![numbers]
        } else {
            combinatorics::combinations(&numbers, r)
        };
        for combo in combos {
            details.push(BetDetail {
                numbers: combo,
                unit_amount,
                description: format!("复式{bet_type}: {token_text}"),
            });
        }
    }
    details
}

/// A maximal `<digit-run>拖<digit-run>(拖<digit-run>)?` expression, split
/// into its pools (`spec.md` §4.5.3 "Drag enumeration").
fn drag_groups(text: &str) -> Vec<(String, Vec<Vec<u32>>)> {
    let mut groups = Vec::new();
    for caps in DRAG_GROUP.captures_iter(text) {
        let whole = caps.get(0).unwrap().as_str().to_string();
        let pools: Vec<Vec<u32>> = (1..=3)
            .filter_map(|i| caps.get(i))
            .map(|m| parse_number_list(m.as_str()))
            .collect();
        groups.push((whole, pools));
    }
    groups
}

/// The Cartesian product of each drag expression's pools, pairwise-distinct
/// tuples only. A tuple's length is its expression's own pool count (2 or
/// 3) rather than the bet type's cardinality — see `DESIGN.md`'s
/// resolution of the drag-arity open question (`spec.md` §9).
fn process_drag(bet_type: BetType, unit_amount: Decimal, groups: &[(String, Vec<Vec<u32>>)]) -> Vec<BetDetail> {
    let mut details = Vec::new();
    for (expr_text, pools) in groups {
        for combo in combinatorics::cartesian_distinct(pools) {
            details.push(BetDetail {
                numbers: combo,
                unit_amount,
                description: format!("{bet_type}拖码: {expr_text}"),
            });
        }
    }
    details
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, lotteries: &mut Vec<LotteryType>, bet_types: &mut Vec<BetType>) -> Option<ParsedBet> {
        let config = ParserConfig::default();
        let segment = BetSegment { text: text.to_string() };
        parse_segment(&segment, &config, lotteries, bet_types, "1_bet_1".to_string())
    }

    #[test]
    fn simple_triple_yields_one_combination() {
        let (mut lotteries, mut bet_types) = (Vec::new(), Vec::new());
        let bet = parse("三中三21-35-49各10", &mut lotteries, &mut bet_types).unwrap();
        assert!(!bet.has_error);
        let info = &bet.lotteries[&LotteryType::NewMacau];
        let detail = &info.bet_types[&BetType::ThreeOfThree];
        assert_eq!(detail.total_groups, 1);
        assert_eq!(detail.total_amount, Decimal::from(10));
    }

    #[test]
    fn complex_expansion_counts_combinations() {
        let (mut lotteries, mut bet_types) = (Vec::new(), Vec::new());
        let bet = parse("三中三10-20-30-40各25", &mut lotteries, &mut bet_types).unwrap();
        let info = &bet.lotteries[&LotteryType::NewMacau];
        let detail = &info.bet_types[&BetType::ThreeOfThree];
        assert_eq!(detail.total_groups, 4);
        assert_eq!(detail.total_amount, Decimal::from(100));
    }

    #[test]
    fn drag_expression_cartesian_products_pools() {
        let (mut lotteries, mut bet_types) = (Vec::new(), Vec::new());
        let bet = parse("三中三1-2-3拖10-11-12各5", &mut lotteries, &mut bet_types).unwrap();
        let info = &bet.lotteries[&LotteryType::NewMacau];
        let detail = &info.bet_types[&BetType::ThreeOfThree];
        assert_eq!(detail.total_groups, 9);
        assert_eq!(detail.total_amount, Decimal::from(45));
    }

    #[test]
    fn missing_bet_type_with_digits_and_no_context_is_an_error() {
        let (mut lotteries, mut bet_types) = (Vec::new(), Vec::new());
        let bet = parse("拖各5", &mut lotteries, &mut bet_types).unwrap();
        assert!(bet.has_error);
        assert!(bet.errors.iter().any(|e| matches!(e, ParseError::NoBetType { .. })));
    }

    #[test]
    fn no_digits_and_no_bet_type_is_silently_dropped() {
        let (mut lotteries, mut bet_types) = (Vec::new(), Vec::new());
        let bet = parse("各10", &mut lotteries, &mut bet_types);
        assert!(bet.is_none());
    }

    #[test]
    fn lottery_inherits_from_context_when_none_named() {
        let mut lotteries = vec![LotteryType::OldMacau];
        let mut bet_types = Vec::new();
        let bet = parse("三中三1-2-3各10", &mut lotteries, &mut bet_types).unwrap();
        assert!(bet.lotteries.contains_key(&LotteryType::OldMacau));
        assert_eq!(lotteries, vec![LotteryType::OldMacau]);
    }

    #[test]
    fn bet_type_inherits_from_context_when_none_named() {
        let mut lotteries = Vec::new();
        let mut bet_types = vec![BetType::ThreeOfThree];
        let bet = parse("拖 各5", &mut lotteries, &mut bet_types).unwrap();
        assert!(bet.has_error);
        assert!(bet.errors.iter().any(|e| matches!(e, ParseError::NoDragGroups { .. })));
    }

    #[test]
    fn drag_without_valid_expression_raises_no_drag_groups() {
        let (mut lotteries, mut bet_types) = (Vec::new(), Vec::new());
        let bet = parse("三中三拖各5", &mut lotteries, &mut bet_types).unwrap();
        assert!(bet.has_error);
        assert!(bet.errors.iter().any(|e| matches!(e, ParseError::NoDragGroups { .. })));
    }
}

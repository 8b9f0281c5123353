//! The `ParseBetString` entry point (`spec.md` §5, §6).
//!
//! Runs S1–S6 synchronously on the calling thread. The only state carried
//! across calls is the round-id counter, a process-global atomic so two
//! concurrent callers never receive the same id.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::parser::betparse;
use crate::parser::config::ParserConfig;
use crate::parser::error::ParseError;
use crate::parser::keywords;
use crate::parser::model::{BetParseRequest, BetParsingResult, BetType, LotteryType, RoundStatistics};
use crate::parser::preprocess;
use crate::parser::rollup;
use crate::parser::segment;
use crate::parser::strip;

static ROUND_ID: AtomicU64 = AtomicU64::new(1);

/// Parse one free-form betting-slip string into a fully itemized,
/// statistics-rolled-up result.
pub fn parse_bet_string(request: BetParseRequest, config: &ParserConfig) -> BetParsingResult {
    let round_id = ROUND_ID.fetch_add(1, Ordering::SeqCst);

    if request.input.trim().is_empty() {
        let error = ParseError::EmptyInput;
        return BetParsingResult {
            round_id,
            original_text: request.input,
            parsed_bets: Vec::new(),
            round_statistics: RoundStatistics::default(),
            has_error: true,
            error_messages: vec![error.to_string()],
            parsed_at_unix_ms: BetParsingResult::now_unix_ms(),
        };
    }

    let expanded = keywords::expand_keywords(&request.input, config);
    let preprocessed = preprocess::preprocess_text(&expanded);
    let stripped = strip::strip_chinese_residue(&preprocessed, config);
    let segments = segment::segment_text(&stripped);

    let mut lottery_context: Vec<LotteryType> = Vec::new();
    let mut bet_type_context: Vec<BetType> = Vec::new();
    let mut parsed_bets = Vec::new();
    let mut bet_counter = 0usize;
    for seg in &segments {
        let candidate_id = format!("{}_bet_{}", round_id, bet_counter + 1);
        if let Some(bet) = betparse::parse_segment(
            seg,
            config,
            &mut lottery_context,
            &mut bet_type_context,
            candidate_id,
        ) {
            bet_counter += 1;
            parsed_bets.push(bet);
        }
    }

    let round_statistics = rollup::round_statistics(&parsed_bets);
    let error_messages: Vec<String> = parsed_bets
        .iter()
        .flat_map(|bet| bet.error_messages.iter().cloned())
        .collect();
    let has_error = !error_messages.is_empty();

    BetParsingResult {
        round_id,
        original_text: request.input,
        parsed_bets,
        round_statistics,
        has_error,
        error_messages,
        parsed_at_unix_ms: BetParsingResult::now_unix_ms(),
    }
}

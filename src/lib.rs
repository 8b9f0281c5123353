//! # mark_six_bet_parser
//!
//! A fully offline, deterministic parser for free-form Chinese Mark-Six-style
//! betting slips.
//!
//! ## Quick start
//!
//! ```rust
//! use mark_six_bet_parser::parser::{parse_bet_string, BetParseRequest, ParserConfig};
//!
//! let config = ParserConfig::default();
//! let request = BetParseRequest::new("21-35-49各10");
//! let result = parse_bet_string(request, &config);
//!
//! assert!(!result.has_error);
//! println!("round {}: {} bets, total {}", result.round_id, result.parsed_bets.len(), result.round_statistics.total_amount);
//! ```

pub mod parser;

// Convenience re-exports at crate root.
pub use parser::{
    parse_bet_string, BetDetail, BetMode, BetModeInfo, BetParseRequest, BetParsingResult,
    BetSegment, BetType, BetTypeDetail, LotteryBetInfo, LotteryType, ParseError, ParsedBet,
    ParserConfig,
};

#[cfg(test)]
mod tests;

//! The recoverable, bet-segment-level error taxonomy (`spec.md` §7).
//!
//! Every variant is attached to the `ParsedBet`/bet type that raised it and
//! does not abort the round — only `EmptyInput` is round-level fatal. This
//! follows the donor idiom for error handling in this corpus
//! (`happybigmtn-bitchat-rust/src/error.rs`): a `thiserror`-derived enum with
//! one `Result<T>` alias, each variant formatting a message meant to be read
//! directly rather than matched on. Unlike that sprawling 70-variant enum
//! this one has exactly the variants the taxonomy names.

use thiserror::Error;

use crate::parser::model::{BetMode, BetType};

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Trimmed input is empty. Round-level fatal; no segments are parsed.
    #[error("输入为空")]
    EmptyInput,

    /// The segment contains digits but none of the four canonical bet-type
    /// tokens.
    #[error("没有识别到任何的下注类型: 「{segment}」")]
    NoBetType { segment: String },

    /// Complex mode is active (a qualifying digit run was found) but
    /// neither `各N` nor `每组N` anchors the unit amount.
    #[error("存在复式下注，但不存在下注金额: {bet_type} 「{segment}」")]
    MissingComplexAmount { bet_type: BetType, segment: String },

    /// Drag mode is active (`拖` present) but neither `各N` nor `每组N`
    /// anchors the unit amount.
    #[error("存在拖类型下注，但不存在下注金额: {bet_type} 「{segment}」")]
    MissingDragAmount { bet_type: BetType, segment: String },

    /// Complex mode was declared active but no qualifying digit-run token
    /// survived filtering. Defined for taxonomy completeness (`spec.md`
    /// §7) but never raised by this implementation — see the "no mode
    /// active" rule in `spec.md` §4.5.3 and `DESIGN.md`'s Open Question
    /// resolution.
    #[error("复式下注未能生成任何组合: {bet_type} 「{segment}」")]
    NoComplexCombinations { bet_type: BetType, segment: String },

    /// `拖` is present but no well-formed drag expression was found.
    #[error("未找到有效的拖码组合: {bet_type} 「{segment}」")]
    NoDragGroups { bet_type: BetType, segment: String },

    /// Internal guard: a bet-type name outside the four canonicals reached
    /// enumeration.
    #[error("不支持的下注类型: {0}")]
    UnsupportedBetType(String),
}

impl ParseError {
    /// Which mode, if any, a given error is about — used when attaching
    /// errors to the right `BetTypeDetail`.
    pub fn mode(&self) -> Option<BetMode> {
        match self {
            ParseError::MissingComplexAmount { .. } | ParseError::NoComplexCombinations { .. } => {
                Some(BetMode::Complex)
            }
            ParseError::MissingDragAmount { .. } | ParseError::NoDragGroups { .. } => {
                Some(BetMode::Drag)
            }
            _ => None,
        }
    }
}

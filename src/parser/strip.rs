//! S3 — Chinese-residue stripping (`spec.md` §4.3).
//!
//! The user's text is mostly free-form Chinese; the parser never tries to
//! understand arbitrary Chinese. It recognizes a closed vocabulary (bet
//! type, lottery, end-keyword, and modifier aliases), preserves it behind
//! placeholders, deletes every other Han code point, then restores the
//! placeholders as their *canonical* spelling so downstream regexes only
//! ever see ASCII plus a fixed set of canonical Chinese tokens.

use std::collections::HashSet;

use crate::parser::config::ParserConfig;
use crate::parser::model::{BetType, LotteryType};
use crate::parser::numerals;

/// Bare domain words preserved regardless of the configured alias tables,
/// grounded in `original_source/backend/intelligent_parser.go`'s
/// `removeChineseChars`, which hardcodes this exact list alongside the
/// alias-table vocabulary (`spec.md` §4.3 only names the four alias
/// tables; this is the `SPEC_FULL.md` §4.1.1 supplement).
const EXTRA_PRESERVED_TOKENS: [&str; 10] = [
    "复式", "拖", "各", "每组", "元", "块", "死活", "硬软", "特串", "特碰",
];

const PLACEHOLDER_SENTINEL: char = '\u{E000}';

/// Run the complete S3 pipeline: end-keyword pre-clean, preserve, strip,
/// restore.
pub fn strip_chinese_residue(text: &str, config: &ParserConfig) -> String {
    let precleaned = end_keyword_preclean(text, config);
    let (placeheld, placeholders) = preserve_pass(&precleaned, config);
    let han_stripped = strip_han_characters(&placeheld);
    restore_pass(&han_stripped, &placeholders, config)
}

/// For each end-keyword alias: delete whitespace/punctuation immediately
/// following it, then convert a leading Chinese-numeral literal (if any)
/// into ASCII digits.
fn end_keyword_preclean(text: &str, config: &ParserConfig) -> String {
    let mut aliases: Vec<&str> = config.end_keywords.iter_all().collect();
    aliases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    let mut result = text.to_string();
    for alias in aliases {
        result = apply_end_keyword_cleanup(&result, alias);
    }
    result
}

fn apply_end_keyword_cleanup(text: &str, alias: &str) -> String {
    if alias.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(alias) {
        out.push_str(&rest[..pos]);
        out.push_str(alias);
        let mut tail = &rest[pos + alias.len()..];
        tail = trim_leading_noise(tail);
        if let Some((value, consumed)) = numerals::parse_leading_numeral(tail) {
            out.push_str(&value.to_string());
            let consumed_bytes: usize = tail.chars().take(consumed).map(char::len_utf8).sum();
            tail = &tail[consumed_bytes..];
        }
        rest = tail;
    }
    out.push_str(rest);
    out
}

fn trim_leading_noise(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_whitespace() || (c.is_ascii_punctuation() && !c.is_ascii_digit()))
}

/// Hide every preserved-vocabulary occurrence behind a private-use-area
/// placeholder token so the Han strip can't see it.
fn preserve_pass(text: &str, config: &ParserConfig) -> (String, Vec<String>) {
    let mut vocab: Vec<&str> = Vec::new();
    vocab.extend(config.bet_type_aliases.iter_all().map(|(_, a)| a));
    vocab.extend(config.lottery_aliases.iter_all().map(|(_, a)| a));
    vocab.extend(config.end_keywords.iter_all());
    vocab.extend(config.keyword_aliases.iter_all());
    vocab.extend(EXTRA_PRESERVED_TOKENS.iter().copied());

    let mut seen = HashSet::new();
    let mut unique: Vec<&str> = Vec::new();
    for v in vocab {
        if !v.is_empty() && seen.insert(v) {
            unique.push(v);
        }
    }
    unique.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    let mut result = text.to_string();
    let mut placeholders: Vec<String> = Vec::new();
    for alias in unique {
        if !result.contains(alias) {
            continue;
        }
        result = strip_adjacent_dashes(&result, alias);
        let idx = placeholders.len();
        result = result.replace(alias, &placeholder_token(idx));
        placeholders.push(alias.to_string());
    }
    (result, placeholders)
}

/// Collapse `-alias-`, `-alias`, `alias-` down to bare `alias` so a dash
/// belonging to a digit run never leaks into a preserved keyword.
fn strip_adjacent_dashes(text: &str, alias: &str) -> String {
    text.replace(&format!("-{}-", alias), alias)
        .replace(&format!("-{}", alias), alias)
        .replace(&format!("{}-", alias), alias)
}

fn placeholder_token(idx: usize) -> String {
    format!("{PLACEHOLDER_SENTINEL}{idx}{PLACEHOLDER_SENTINEL}")
}

fn strip_han_characters(text: &str) -> String {
    text.chars()
        .filter(|&c| !('\u{4e00}'..='\u{9fff}').contains(&c))
        .collect()
}

fn restore_pass(text: &str, placeholders: &[String], config: &ParserConfig) -> String {
    let mut result = text.to_string();
    for (idx, alias) in placeholders.iter().enumerate() {
        let canonical = canonical_for_alias(alias, config);
        result = result.replace(&placeholder_token(idx), &canonical);
    }
    result
}

/// The canonical spelling an alias restores as, or the alias verbatim if
/// it isn't found in any of the four alias tables.
fn canonical_for_alias(alias: &str, config: &ParserConfig) -> String {
    for bet_type in BetType::ALL {
        if config.bet_type_aliases.aliases_for(bet_type).iter().any(|a| a == alias) {
            return bet_type.canonical().to_string();
        }
    }
    for lottery in LotteryType::ALL {
        if config.lottery_aliases.aliases_for(lottery).iter().any(|a| a == alias) {
            return lottery.canonical().to_string();
        }
    }
    if config.end_keywords.each.iter().any(|a| a == alias) {
        return "各".to_string();
    }
    if config.end_keywords.per_group.iter().any(|a| a == alias) {
        return "每组".to_string();
    }
    if config.keyword_aliases.complex.iter().any(|a| a == alias) {
        return "复式".to_string();
    }
    if config.keyword_aliases.drag.iter().any(|a| a == alias) {
        return "拖".to_string();
    }
    alias.to_string()
}

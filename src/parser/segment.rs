//! S4 — segmentation (`spec.md` §4.4).
//!
//! Splits the canonicalized text into one segment per amount anchor
//! (`各<digits>` / `每组<digits>`), each segment running from the previous
//! cut point through the anchor's closing digit. Any trailing,
//! anchor-free remainder becomes one more segment if non-empty.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::model::BetSegment;

static ANCHOR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:各|每组)\d+").unwrap());

/// Split stripped text into bet segments, trimmed and dash-stripped,
/// dropping any that end up empty.
pub fn segment_text(text: &str) -> Vec<BetSegment> {
    let matches: Vec<_> = ANCHOR_PATTERN.find_iter(text).collect();
    let raw_segments = if matches.is_empty() {
        vec![text.to_string()]
    } else {
        let mut segments = Vec::with_capacity(matches.len() + 1);
        let mut cut = 0usize;
        for m in &matches {
            segments.push(text[cut..m.end()].to_string());
            cut = m.end();
        }
        if cut < text.len() {
            segments.push(text[cut..].to_string());
        }
        segments
    };

    raw_segments
        .into_iter()
        .map(|s| trim_segment(&s))
        .filter(|s| !s.is_empty())
        .map(|text| BetSegment { text })
        .collect()
}

fn trim_segment(raw: &str) -> String {
    raw.trim().trim_matches('-').trim().to_string()
}

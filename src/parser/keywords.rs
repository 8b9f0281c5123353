//! S1 — keyword expansion (`spec.md` §4.1).
//!
//! Replaces every zodiac/color/tail keyword occurrence with a dash-joined,
//! zero-padded run of its numbers, longest alias first so a short alias
//! never eats a prefix of a longer one.

use crate::parser::config::ParserConfig;

/// Expand every zodiac/color/tail alias in `text` into its digit run.
pub fn expand_keywords(text: &str, config: &ParserConfig) -> String {
    let mut aliases: Vec<(&str, &[u32])> = Vec::new();
    for map in [&config.zodiac_map, &config.color_map, &config.tail_map] {
        for (keyword, numbers) in map {
            aliases.push((keyword.as_str(), numbers.as_slice()));
        }
    }
    // Longer aliases win over any single-character prefix they share.
    aliases.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));

    let mut result = text.to_string();
    for (alias, numbers) in aliases {
        result = replace_alias_occurrences(&result, alias, numbers);
    }
    result
}

/// Replace every occurrence of `alias` in `text` with `NN-NN-...-NN`,
/// prefixing/suffixing with an extra `-` whenever the occurrence sits
/// directly against an ASCII digit, on either side.
///
/// The adjacency check has to be bidirectional, not just leading: aliases
/// are spliced one at a time, full pass per alias, so a later alias's
/// splice can land immediately in front of an earlier alias's
/// already-spliced digit run (or vice versa). Checking only the preceding
/// character makes the result depend on which alias happens to be
/// processed first among equal-length aliases — checking both sides keeps
/// the output order-independent, per the rationale in `expand_keywords`'s
/// doc comment (continuous digit runs regardless of expansion order).
fn replace_alias_occurrences(text: &str, alias: &str, numbers: &[u32]) -> String {
    if alias.is_empty() {
        return text.to_string();
    }
    let rendering = numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join("-");

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(alias) {
        out.push_str(&rest[..pos]);
        if out.chars().last().is_some_and(|c| c.is_ascii_digit()) {
            out.push('-');
        }
        out.push_str(&rendering);
        rest = &rest[pos + alias.len()..];
        if rest.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            out.push('-');
        }
    }
    out.push_str(rest);
    out
}

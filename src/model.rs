//! Model label resolution and coloring.
//!
//! Two sources for the label: a host-supplied display name (preferred), or
//! a derivation from the raw model id when no display name came through.
//! Coloring is an ordered first-match-wins rule table keyed on
//! case-insensitive keyword sets.

use std::sync::OnceLock;

use regex::Regex;

use crate::theme::{self, palette, Rgb};

/// One entry in the model color table.
pub struct ColorRule {
    /// Every keyword must appear (case-insensitively) in the label.
    pub keywords: &'static [&'static str],
    pub fg: Rgb,
    pub bg: Option<Rgb>,
}

/// Order matters: more specific entries must come first (Opus+1m before
/// Opus). The order is part of the data, not incidental.
pub const COLOR_RULES: &[ColorRule] = &[
    ColorRule {
        keywords: &["opus", "1m"],
        fg: palette::MODEL_OPUS_1M_FG,
        bg: Some(palette::MODEL_OPUS_1M_BG),
    },
    ColorRule {
        keywords: &["sonnet", "1m"],
        fg: palette::MODEL_SONNET_1M,
        bg: None,
    },
    ColorRule {
        keywords: &["opus"],
        fg: palette::MODEL_OPUS,
        bg: None,
    },
    ColorRule {
        keywords: &["sonnet"],
        fg: palette::MODEL_SONNET,
        bg: None,
    },
    ColorRule {
        keywords: &["haiku"],
        fg: palette::MODEL_HAIKU,
        bg: None,
    },
];

/// Context capacity at which the label earns a ` [1M]` badge.
const ONE_MILLION: u64 = 1_000_000;

/// Resolve the display label from a snapshot's model fields.
///
/// A non-empty `display_name` wins, minus any parenthetical context-size
/// clause the host appends (e.g. " (1M context)"). Otherwise the label is
/// derived from the raw id. Either way a ` [1M]` badge is appended for
/// million-token windows unless one is already present.
pub fn resolve_label(id: &str, display_name: Option<&str>, window_size: u64) -> String {
    let mut label = match display_name {
        Some(name) if !name.trim().is_empty() => strip_context_clause(name),
        _ => derive_from_id(id),
    };
    if label != "unknown" && window_size >= ONE_MILLION && !label.contains("[1M]") {
        label.push_str(" [1M]");
    }
    label
}

/// Drop a parenthetical clause mentioning "context" from a supplied display
/// name, e.g. "Claude Sonnet 4.5 (1M context)" -> "Claude Sonnet 4.5".
fn strip_context_clause(name: &str) -> String {
    static CLAUSE: OnceLock<Regex> = OnceLock::new();
    let re = CLAUSE.get_or_init(|| {
        Regex::new(r"(?i)\s*\([^)]*context[^)]*\)").expect("valid context-clause pattern")
    });
    let stripped = re.replace_all(name, "").trim().to_string();
    if stripped.is_empty() {
        "unknown".to_string()
    } else {
        stripped
    }
}

/// Derive a label from a raw model id, e.g.
/// `claude-sonnet-4-5-20250929` -> "Sonnet 4.5",
/// `claude-haiku-4-5-20251001[1m]` -> "Haiku 4.5 [1M]".
///
/// A trailing all-digit segment of 8+ characters is a release date and ends
/// version collection.
fn derive_from_id(id: &str) -> String {
    let id = id.trim();
    if id.is_empty() || id.eq_ignore_ascii_case("unknown") {
        return "unknown".to_string();
    }

    let (base, bracket) = match id.find('[') {
        Some(i) => (&id[..i], Some(&id[i..])),
        None => (id, None),
    };

    let mut segments: Vec<&str> = base.split('-').filter(|s| !s.is_empty()).collect();
    if segments.first() == Some(&"claude") {
        segments.remove(0);
    }
    let Some(family) = segments.first() else {
        return "unknown".to_string();
    };

    let mut label = capitalize(family);
    let version: Vec<&str> = segments[1..]
        .iter()
        .take_while(|seg| !is_date_segment(seg))
        .copied()
        .collect();
    if !version.is_empty() {
        label.push(' ');
        label.push_str(&version.join("."));
    }
    if let Some(bracket) = bracket {
        label.push(' ');
        label.push_str(&bracket.to_uppercase());
    }
    label
}

fn is_date_segment(seg: &str) -> bool {
    seg.len() >= 8 && seg.chars().all(|c| c.is_ascii_digit())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First matching color rule for a label, or the unknown-model gray.
pub fn colors_for(label: &str) -> (Rgb, Option<Rgb>) {
    let lower = label.to_lowercase();
    for rule in COLOR_RULES {
        if rule.keywords.iter().all(|kw| lower.contains(kw)) {
            return (rule.fg, rule.bg);
        }
    }
    (palette::MODEL_UNKNOWN, None)
}

/// Style a resolved label. A background rule implies a bold badge padded
/// with one space on each side; "unknown" renders dimmed with no color.
pub fn style_label(label: &str) -> String {
    if label.is_empty() || label == "unknown" {
        return theme::dim("unknown");
    }
    match colors_for(label) {
        (fg, Some(bg)) => theme::paint_badge(&format!(" {label} "), fg, bg),
        (fg, None) => theme::paint(label, fg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_opus() {
        assert_eq!(derive_from_id("claude-opus-4-6"), "Opus 4.6");
    }

    #[test]
    fn derive_drops_date_segment() {
        assert_eq!(derive_from_id("claude-sonnet-4-5-20250929"), "Sonnet 4.5");
    }

    #[test]
    fn derive_uppercases_bracket_suffix() {
        assert_eq!(derive_from_id("claude-haiku-4-5-20251001[1m]"), "Haiku 4.5 [1M]");
    }

    #[test]
    fn derive_without_claude_prefix() {
        assert_eq!(derive_from_id("opus-4-6"), "Opus 4.6");
    }

    #[test]
    fn derive_unknown_and_empty() {
        assert_eq!(derive_from_id("unknown"), "unknown");
        assert_eq!(derive_from_id(""), "unknown");
        assert_eq!(derive_from_id("  "), "unknown");
    }

    #[test]
    fn short_numeric_segments_are_not_dates() {
        // "4" and "6" are version parts; only 8+ digit runs terminate.
        assert_eq!(derive_from_id("claude-opus-4-6-1"), "Opus 4.6.1");
    }

    #[test]
    fn display_name_wins_over_id() {
        assert_eq!(
            resolve_label("claude-opus-4-6", Some("Claude Opus 4.6"), 0),
            "Claude Opus 4.6"
        );
    }

    #[test]
    fn context_clause_is_stripped() {
        assert_eq!(
            resolve_label("claude-sonnet-4-5", Some("Claude Sonnet 4.5 (1M context)"), 0),
            "Claude Sonnet 4.5"
        );
    }

    #[test]
    fn million_token_window_adds_badge() {
        assert_eq!(
            resolve_label("claude-sonnet-4-5", None, 1_000_000),
            "Sonnet 4.5 [1M]"
        );
    }

    #[test]
    fn badge_is_not_duplicated() {
        assert_eq!(
            resolve_label("claude-haiku-4-5-20251001[1m]", None, 1_000_000),
            "Haiku 4.5 [1M]"
        );
    }

    #[test]
    fn unknown_label_gets_no_badge() {
        assert_eq!(resolve_label("", None, 1_000_000), "unknown");
    }

    #[test]
    fn specific_rules_win_over_general() {
        let (fg, bg) = colors_for("Opus 4.6 [1M]");
        assert_eq!(fg, palette::MODEL_OPUS_1M_FG);
        assert_eq!(bg, Some(palette::MODEL_OPUS_1M_BG));

        let (fg, bg) = colors_for("Opus 4.6");
        assert_eq!(fg, palette::MODEL_OPUS);
        assert_eq!(bg, None);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let (fg, _) = colors_for("SONNET 4.5");
        assert_eq!(fg, palette::MODEL_SONNET);
    }

    #[test]
    fn unmatched_label_falls_back_to_gray() {
        let (fg, bg) = colors_for("gpt-5");
        assert_eq!(fg, palette::MODEL_UNKNOWN);
        assert_eq!(bg, None);
    }

    #[test]
    fn badge_label_is_padded() {
        colored::control::set_override(false);
        // Background rule -> padded with one space either side.
        assert_eq!(style_label("Opus 4.6 [1M]"), " Opus 4.6 [1M] ");
        // No background -> no padding.
        assert_eq!(style_label("Opus 4.6"), "Opus 4.6");
    }

    #[test]
    fn unknown_renders_dimmed_literal() {
        colored::control::set_override(false);
        assert_eq!(style_label("unknown"), "unknown");
        assert_eq!(style_label(""), "unknown");
    }
}

//! Effort-level resolution and bar rendering.
//!
//! The effort level is not part of the stdin snapshot; it is the configured
//! setting, read the same way the host reads it. Priority: env var override,
//! project settings, user settings, then "high". A settings file that is
//! missing, unreadable, or the wrong shape falls through silently.

use std::path::{Path, PathBuf};

use crate::theme::{self, palette};

const SEGMENT: &str = "\u{258C}"; // ▌
const BAR_WIDTH: usize = 3;

pub const ENV_OVERRIDE: &str = "CLAUDE_CODE_EFFORT_LEVEL";

/// Resolve the configured effort level as a lower-cased string.
pub fn resolve_level(current_dir: Option<&Path>) -> String {
    if let Ok(env) = std::env::var(ENV_OVERRIDE) {
        if !env.is_empty() {
            return env.to_lowercase();
        }
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    if let Some(dir) = current_dir {
        paths.push(dir.join(".claude").join("settings.json"));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".claude").join("settings.json"));
    }

    for path in &paths {
        if let Some(level) = settings_level(path) {
            return level;
        }
    }

    "high".to_string()
}

/// `effortLevel` field of a settings file, lower-cased. None on any failure.
fn settings_level(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let value: serde_json::Value = serde_json::from_str(&contents).ok()?;
    let level = value.get("effortLevel")?.as_str()?;
    if level.is_empty() {
        None
    } else {
        Some(level.to_lowercase())
    }
}

/// Whether a model id supports effort levels (Opus 4.6 and later).
pub fn supports_effort(model_id: &str) -> bool {
    let lower = model_id.to_lowercase();
    lower.contains("opus")
        && ["4-6", "4-7", "4-8", "4-9", "5-"]
            .iter()
            .any(|marker| lower.contains(marker))
}

/// Active segment count for a level. Unrecognized levels render full.
fn active_segments(level: &str) -> usize {
    match level {
        "low" => 1,
        "medium" => 2,
        _ => BAR_WIDTH,
    }
}

/// Render the 3-segment effort bar, or None when the model does not support
/// effort levels.
pub fn render_bar(level: &str, model_id: &str) -> Option<String> {
    if !supports_effort(model_id) {
        return None;
    }

    let active = active_segments(level);
    let inactive = BAR_WIDTH - active;

    let mut bar = theme::paint(&SEGMENT.repeat(active), palette::EFFORT_ACTIVE);
    if inactive > 0 {
        bar.push_str(&theme::paint(&SEGMENT.repeat(inactive), palette::EFFORT_INACTIVE));
    }
    Some(bar)
}

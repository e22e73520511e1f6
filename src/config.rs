//! Feature toggles for optional statusline fragments.
//!
//! Built once at startup and passed into the composer; nothing reads ambient
//! globals. Sources, later wins: defaults, an optional TOML file, CLI flags.
//! A missing or unparseable file silently yields defaults -- the statusline
//! must render something no matter what.

use serde::Deserialize;

use crate::cli::Args;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Show the session cost as `$X.XX` when it is above zero.
    pub show_cost: bool,

    /// Show the first 8 characters of the session id.
    pub show_session_id: bool,

    /// Debug: show the raw model id instead of the parsed display name.
    pub show_model_id: bool,

    /// Append a diagnostic line to `~/.claude/statusline-debug.log`.
    pub debug_log: bool,

    /// URI scheme for the "open in editor" link on the branch line.
    pub editor_scheme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_cost: false,
            show_session_id: false,
            show_model_id: false,
            debug_log: false,
            editor_scheme: "cursor".to_string(),
        }
    }
}

impl Config {
    /// CLI flags can only switch toggles on; absent flags leave the file (or
    /// default) value in place.
    pub fn merge_flags(&mut self, args: &Args) {
        if args.show_cost {
            self.show_cost = true;
        }
        if args.show_session_id {
            self.show_session_id = true;
        }
        if args.show_model_id {
            self.show_model_id = true;
        }
        if args.debug_log {
            self.debug_log = true;
        }
    }
}

/// Load the toggle config. Checks `CCLINE_CONFIG` first (for testing), then
/// `~/.config/ccline/config.toml` (platform-appropriate). Returns defaults
/// when the file is missing or unparseable.
pub fn load() -> Config {
    let path = std::env::var("CCLINE_CONFIG")
        .ok()
        .map(std::path::PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("ccline").join("config.toml")));

    match path {
        Some(path) if path.exists() => match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
            Err(_) => Config::default(),
        },
        _ => Config::default(),
    }
}

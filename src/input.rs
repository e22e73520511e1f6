//! Session snapshot deserialization.
//!
//! Claude Code pipes one JSON document per statusline refresh. Every field
//! is optional -- the host may omit any of them -- and unknown fields are
//! ignored so newer hosts do not break older binaries. The two observed
//! spellings of the context capacity field (`context_window_size` and
//! `total`) are both accepted.

use std::io::Read;

use serde::Deserialize;

use crate::error::CclineError;

/// Upper bound on how much stdin we are willing to buffer. Snapshots are a
/// few hundred bytes; anything near this limit is garbage input.
const MAX_INPUT_BYTES: u64 = 256 * 1024;

#[derive(Debug, Deserialize, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub model: ModelInfo,
    pub session_id: Option<String>,
    #[serde(default)]
    pub workspace: Workspace,
    #[serde(default)]
    pub context_window: ContextWindow,
    #[serde(default)]
    pub cost: Cost,
}

#[derive(Debug, Deserialize, Default)]
pub struct ModelInfo {
    pub id: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Workspace {
    pub current_dir: Option<String>,
    pub project_dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ContextWindow {
    pub used_percentage: Option<f64>,
    #[serde(alias = "total")]
    pub context_window_size: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Cost {
    pub total_cost_usd: Option<f64>,
}

impl Snapshot {
    /// Context capacity, 0 when absent.
    pub fn window_size(&self) -> u64 {
        self.context_window.context_window_size.unwrap_or(0)
    }
}

/// Parse a snapshot from raw bytes. Whitespace-only input counts as absent.
pub fn parse_snapshot(bytes: &[u8]) -> Result<Snapshot, CclineError> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(CclineError::EmptyInput);
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Read exactly one snapshot from stdin.
pub fn read_snapshot() -> Result<Snapshot, CclineError> {
    let mut buf = Vec::with_capacity(4096);
    std::io::stdin()
        .lock()
        .take(MAX_INPUT_BYTES)
        .read_to_end(&mut buf)?;
    parse_snapshot(&buf)
}

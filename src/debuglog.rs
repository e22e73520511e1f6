//! Opt-in append-only diagnostic trace.
//!
//! One pipe-separated line per invocation. Stdout is the rendered UI, so
//! this file is the only diagnostic channel; any filesystem error here is
//! swallowed -- logging must never break the statusline.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;

pub fn append(session_id: Option<&str>, model_id: &str, label: &str) {
    let Some(home) = dirs::home_dir() else { return };
    let path = home.join(".claude").join("statusline-debug.log");
    append_to(&path, session_id, model_id, label);
}

fn append_to(path: &Path, session_id: Option<&str>, model_id: &str, label: &str) {
    let sid: String = match session_id {
        Some(sid) if !sid.is_empty() => sid.chars().take(8).collect(),
        _ => "?".to_string(),
    };
    let line = format!(
        "{} | Session: {} | Model ID: {} | Parsed: {}\n",
        Local::now().to_rfc3339(),
        sid,
        model_id,
        label
    );

    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(line.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_one_line_per_call() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("debug.log");

        append_to(&path, Some("0f9a2c41-77aa"), "claude-opus-4-6", "Opus 4.6");
        append_to(&path, None, "claude-opus-4-6", "Opus 4.6");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Session: 0f9a2c41"));
        assert!(lines[0].contains("Model ID: claude-opus-4-6"));
        assert!(lines[0].contains("Parsed: Opus 4.6"));
        assert!(lines[1].contains("Session: ?"));
    }

    #[test]
    fn unwritable_path_is_swallowed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing-subdir").join("debug.log");
        // Parent does not exist; must not panic.
        append_to(&path, Some("abc"), "id", "label");
        assert!(!path.exists());
    }
}

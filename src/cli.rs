//! CLI surface and the always-exit-0 rendering shell.

use anyhow::Result;
use clap::Parser;

use crate::git::GitCli;
use crate::{compose, config, input};

/// Terminal status line for Claude Code sessions
#[derive(Parser)]
#[command(name = "ccline", version, about, long_about = None)]
pub struct Args {
    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,

    /// Show the session cost fragment
    #[arg(long)]
    pub show_cost: bool,

    /// Show the first 8 characters of the session id
    #[arg(long)]
    pub show_session_id: bool,

    /// Show the raw model id instead of the parsed display name
    #[arg(long)]
    pub show_model_id: bool,

    /// Append a diagnostic line to ~/.claude/statusline-debug.log
    #[arg(long)]
    pub debug_log: bool,
}

/// Entry point. Wraps `run_inner` in `catch_unwind`: the host treats this
/// process as infallible, so any failure prints the `error` sentinel and
/// still exits 0.
pub fn run(args: Args) -> Result<()> {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| run_inner(&args)));

    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(_)) | Err(_) => {
            println!("error");
            Ok(())
        }
    }
}

fn run_inner(args: &Args) -> Result<()> {
    // Claude Code pipes stdout (not a TTY), which would normally disable
    // colors. Force them on unless --no-color or NO_COLOR is set.
    if args.no_color || std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    } else {
        colored::control::set_override(true);
    }

    let mut config = config::load();
    config.merge_flags(args);

    let snapshot = input::read_snapshot()?;

    let probe = GitCli::new(snapshot.workspace.project_dir.as_deref());
    let line = compose::compose(&snapshot, &config, &probe);

    println!("{line}");
    Ok(())
}

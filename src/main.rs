mod cli;
mod compose;
mod config;
mod context;
mod debuglog;
mod effort;
mod error;
mod git;
mod input;
mod model;
mod theme;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    cli::run(args)
}

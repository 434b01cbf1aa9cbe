//! # cikit CLI
//!
//! Binary entry point for the `cikit` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initializing logging from the global `--log-level` flag.
//! - Dispatching to the appropriate command implementation.
//!
//! The core helpers live in the `cikit` library crate; the binary is a
//! thin wrapper around them.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute().await
}

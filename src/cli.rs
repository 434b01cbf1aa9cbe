//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// cikit - helpers for CI automation pipelines
#[derive(Parser, Debug)]
#[command(name = "cikit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fingerprint a file or directory with SHA-256
    Hash(commands::hash::HashArgs),
    /// Run a command, capturing its standard output
    Exec(commands::exec::ExecArgs),
    /// Drive the debug cache service
    Cache(commands::cache::CacheArgs),
    /// Drive the debug API client
    Api(commands::api::ApiArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Hash(args) => commands::hash::execute(args).await,
            Commands::Exec(args) => commands::exec::execute(args).await,
            Commands::Cache(args) => commands::cache::execute(args).await,
            Commands::Api(args) => commands::api::execute(args),
        }
    }
}

/// Wire the `log` facade to stderr at the requested level.
fn init_logging(level: &str) {
    let level = level.parse().unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

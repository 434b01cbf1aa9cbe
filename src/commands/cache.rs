//! Cache command implementation
//!
//! Drives the debug cache service from the command line. The debug
//! service answers from local filesystem presence only; nothing is
//! actually stored or retrieved, which is exactly what makes it usable
//! where the real cache service is unreachable.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Subcommand};

use cikit::cache::{CacheService, DebugCache};
use cikit::diag::LogDiagnostics;

/// Arguments for the cache command
#[derive(Args, Debug)]
pub struct CacheArgs {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CacheSubcommand {
    /// Restore artifacts for a cache key
    Restore(RestoreArgs),
    /// Save artifacts under a cache key
    Save(SaveArgs),
}

/// Arguments for the cache restore command
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Artifact paths to restore
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Primary cache key
    #[arg(long, value_name = "KEY")]
    pub key: String,

    /// Fallback keys tried after the primary key
    #[arg(long = "restore-key", value_name = "KEY")]
    pub restore_keys: Vec<String>,
}

/// Arguments for the cache save command
#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Artifact paths to save
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Cache key to save under
    #[arg(long, value_name = "KEY")]
    pub key: String,
}

/// Execute the cache command
pub async fn execute(args: CacheArgs) -> Result<()> {
    let cache = DebugCache::new(Arc::new(LogDiagnostics));

    match args.command {
        CacheSubcommand::Restore(restore) => {
            let fallbacks = (!restore.restore_keys.is_empty()).then_some(restore.restore_keys.as_slice());
            match cache.restore(&restore.paths, &restore.key, fallbacks).await? {
                Some(key) => println!("Restored with key: {key}"),
                None => println!("No cache entry found"),
            }
        }
        CacheSubcommand::Save(save) => {
            let id = cache.save(&save.paths, &save.key).await?;
            println!("Saved cache entry {id}");
        }
    }

    Ok(())
}

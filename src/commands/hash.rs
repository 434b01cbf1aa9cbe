//! Hash command implementation
//!
//! Fingerprints a file (streaming SHA-256 of its bytes) or a directory
//! (shallow digest of its sorted child names), selected automatically by
//! the path type.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

/// Arguments for the hash command
#[derive(Args, Debug)]
pub struct HashArgs {
    /// File or directory to fingerprint
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct HashReport<'a> {
    path: &'a str,
    digest: &'a str,
}

/// Execute the hash command
pub async fn execute(args: HashArgs) -> Result<()> {
    let digest = if args.path.is_dir() {
        cikit::hash::dir_digest(&args.path).await
    } else {
        cikit::hash::file_digest(&args.path).await
    }
    .with_context(|| format!("Failed to hash {}", args.path.display()))?;

    if args.json {
        let path = args.path.display().to_string();
        let report = HashReport {
            path: &path,
            digest: &digest,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{digest}");
    }

    Ok(())
}

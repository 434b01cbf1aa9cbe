//! Api command implementation
//!
//! Drives the debug API client: the request is logged, never sent. Useful
//! for checking what a CI step would report without a network dependency.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use cikit::diag::LogDiagnostics;
use cikit::github::{ApiClientFactory, DebugApiFactory};

/// Arguments for the api command
#[derive(Args, Debug)]
pub struct ApiArgs {
    /// API route, e.g. "GET /rate_limit"
    #[arg(value_name = "ROUTE")]
    pub route: String,

    /// JSON options payload for the request
    #[arg(long, value_name = "JSON", default_value = "{}")]
    pub options: String,

    /// Authentication token (ignored by the debug client)
    #[arg(long, value_name = "TOKEN", env = "CIKIT_TOKEN", default_value = "")]
    pub token: String,
}

/// Execute the api command
pub fn execute(args: ApiArgs) -> Result<()> {
    let options: Value = serde_json::from_str(&args.options)
        .with_context(|| format!("Invalid JSON in --options: {}", args.options))?;

    let factory = DebugApiFactory::new(Arc::new(LogDiagnostics));
    factory.client(&args.token).request(&args.route, &options);

    Ok(())
}

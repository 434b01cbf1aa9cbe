//! Exec command implementation
//!
//! Runs an external command, relaying its captured standard output to the
//! terminal. The child's standard error is forwarded line by line through
//! the logging sink instead of being captured.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use cikit::diag::LogDiagnostics;
use cikit::exec::CommandRunner;

/// Arguments for the exec command
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Working directory for the command
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Command to run
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Arguments passed through to the command
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Execute the exec command
pub async fn execute(args: ExecArgs) -> Result<()> {
    let runner = CommandRunner::new(Arc::new(LogDiagnostics));
    let output = runner
        .run(&args.command, &args.args, args.cwd.as_deref())
        .await?;

    // The captured text already carries the child's newlines.
    print!("{output}");

    Ok(())
}

//! # Subprocess Execution
//!
//! Async wrapper around spawning external tools from CI steps. Standard
//! output is captured and returned as one string; standard error is not
//! captured — each line is forwarded to the injected diagnostics sink as
//! it arrives. The two streams are drained concurrently so neither pipe
//! can fill up and stall the child.
//!
//! There is no timeout, cancellation, or retry: a hung child hangs the
//! call.

use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;

use crate::diag::Diagnostics;
use crate::error::{Error, Result};

/// Runs external commands, capturing stdout and forwarding stderr.
pub struct CommandRunner {
    diag: Arc<dyn Diagnostics>,
}

impl CommandRunner {
    /// Create a runner that forwards child stderr to `diag`.
    pub fn new(diag: Arc<dyn Diagnostics>) -> Self {
        Self { diag }
    }

    /// Run `command` with `args`, optionally in `cwd`, and return its
    /// full standard output as a string.
    ///
    /// Stdout chunks are appended in arrival order with no size limit.
    /// Stderr lines go to the diagnostics sink at error severity and are
    /// not part of the return value. The captured bytes are converted to
    /// a string lossily once the process has exited.
    ///
    /// # Errors
    /// [`Error::Spawn`] if the process cannot be started, and
    /// [`Error::ExitStatus`] if it exits with a non-zero status.
    pub async fn run(&self, command: &str, args: &[String], cwd: Option<&Path>) -> Result<String> {
        let mut invocation = Command::new(command);
        invocation
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            invocation.current_dir(dir);
        }

        let mut child = invocation.spawn().map_err(|error| Error::Spawn {
            command: command.to_string(),
            message: error.to_string(),
        })?;

        // Both pipes were requested above, so take() cannot return None.
        let mut stdout = child.stdout.take().ok_or_else(|| Error::Spawn {
            command: command.to_string(),
            message: "stdout pipe was not created".to_string(),
        })?;
        let stderr = child.stderr.take().ok_or_else(|| Error::Spawn {
            command: command.to_string(),
            message: "stderr pipe was not created".to_string(),
        })?;

        let capture_stdout = async {
            let mut output = Vec::new();
            stdout.read_to_end(&mut output).await?;
            Ok::<_, std::io::Error>(output)
        };

        let forward_stderr = async {
            let mut lines = BufReader::new(stderr).lines();
            while let Some(line) = lines.next_line().await? {
                self.diag.error(&line);
            }
            Ok::<_, std::io::Error>(())
        };

        let (output, forwarded, status) = tokio::join!(capture_stdout, forward_stderr, child.wait());
        let status = status?;
        forwarded?;
        let output = output?;

        if !status.success() {
            return Err(Error::ExitStatus {
                command: command.to_string(),
                status: status.code().unwrap_or(-1),
            });
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

//! # Error Handling
//!
//! Centralized error type for the `cikit` library. Every fallible helper
//! returns the [`Result`] alias defined here, and every failure path
//! propagates immediately to the caller. There is no retry or recovery
//! policy in this crate; it provides mechanism, not policy.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for cikit operations
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error, wrapped from `std::io::Error`.
    ///
    /// Covers missing or unreadable files and directories during hashing,
    /// and stream failures while draining a child process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A subprocess could not be started at all.
    #[error("Failed to spawn {command}: {message}")]
    Spawn { command: String, message: String },

    /// A subprocess ran but exited with a non-zero status.
    ///
    /// The status is `-1` when the process was terminated by a signal and
    /// no exit code is available.
    #[error("Command {command} exited with status {status}")]
    ExitStatus { command: String, status: i32 },

    /// A cache artifact that was supposed to be saved does not exist.
    ///
    /// Only produced by the debug cache stub's save operation; the message
    /// carries the offending path.
    #[error("file not exist: {}", path.display())]
    MissingArtifact { path: PathBuf },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_spawn() {
        let error = Error::Spawn {
            command: "sccache".to_string(),
            message: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to spawn sccache"));
        assert!(display.contains("No such file or directory"));
    }

    #[test]
    fn test_error_display_exit_status() {
        let error = Error::ExitStatus {
            command: "git".to_string(),
            status: 128,
        };
        let display = format!("{}", error);
        assert!(display.contains("git"));
        assert!(display.contains("128"));
    }

    #[test]
    fn test_error_display_missing_artifact() {
        let error = Error::MissingArtifact {
            path: PathBuf::from("/tmp/artifacts/cache.tar"),
        };
        let display = format!("{}", error);
        assert!(display.contains("file not exist"));
        assert!(display.contains("/tmp/artifacts/cache.tar"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }
}

//! # cikit Library
//!
//! Helper routines for CI automation: timestamp formatting, content
//! fingerprinting, path containment, subprocess execution, and debug
//! stand-ins for the remote services a CI run talks to. The library is
//! used by the `cikit` command-line tool but the helpers are independent
//! and can be embedded directly.
//!
//! ## Quick Example
//!
//! ```
//! use std::path::Path;
//!
//! use cikit::{clock, path};
//!
//! // Nanosecond counters format with full precision.
//! assert_eq!(clock::nanos(1_694_535_491_104_939_637), "1694535491.104939637");
//!
//! // Containment is lexical; no filesystem access.
//! assert!(path::contains(Path::new("/work"), Path::new("/work/target/debug")));
//! assert!(!path::contains(Path::new("/work"), Path::new("/work/../etc")));
//! ```
//!
//! ## Modules
//!
//! - **`clock`**: wall-clock, elapsed-seconds, and nanosecond formatting.
//! - **`hash`**: streaming SHA-256 file digests and shallow directory
//!   digests.
//! - **`path`**: lexical path containment.
//! - **`exec`**: async subprocess runner with stdout capture and stderr
//!   forwarding.
//! - **`cache`** / **`github`**: service trait seams with debug
//!   implementations backed by existence checks and log output.
//! - **`diag`**: the injected diagnostics capability the above report
//!   through.
//! - **`error`**: centralized error enum and `Result` alias.

pub mod cache;
pub mod clock;
pub mod diag;
pub mod error;
pub mod exec;
pub mod github;
pub mod hash;
pub mod path;

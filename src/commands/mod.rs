//! # CLI Command Implementations
//!
//! One module per subcommand of the `cikit` command-line tool. Each
//! module contains:
//! - An `Args` struct defining the command-specific arguments, derived
//!   using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into
//!   the `cikit` library to do the work.
//!
//! The commands construct the debug service implementations explicitly;
//! the library traits are the seam where real clients would be injected.

pub mod api;
pub mod cache;
pub mod exec;
pub mod hash;

//! Shared test utilities for E2E tests.
//!
//! Add `mod common;` to a test file, then `use common::prelude::*;` to
//! pull in the binary runner and filesystem/predicate helpers every E2E
//! test needs.

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;
}

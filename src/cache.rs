//! # Cache Service
//!
//! Trait seam for the remote artifact cache a CI run talks to, plus a
//! debug implementation for environments where the real service is
//! unreachable (isolated test runs, local debugging).
//!
//! [`DebugCache`] is not a cache: it stores and retrieves nothing. It
//! approximates hit/miss behavior with a local existence check on the
//! first requested path, which is enough to drive the calling code
//! through both branches.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::diag::Diagnostics;
use crate::error::{Error, Result};

/// Key reported by [`DebugCache`] for every simulated cache hit.
pub const RESTORE_SENTINEL: &str = "restore-key";

/// Remote artifact cache contract.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Restore the artifacts at `paths` using `primary_key`, falling back
    /// to `restore_keys`. Returns the matched key, or `None` on a miss.
    /// A miss is an absence signal, not an error.
    async fn restore(
        &self,
        paths: &[PathBuf],
        primary_key: &str,
        restore_keys: Option<&[String]>,
    ) -> Result<Option<String>>;

    /// Save the artifacts at `paths` under `key`. Returns the cache entry
    /// id on success.
    ///
    /// # Errors
    /// Fails if the artifact to save does not exist.
    async fn save(&self, paths: &[PathBuf], key: &str) -> Result<u64>;
}

/// Filesystem-presence stand-in for a remote cache service.
pub struct DebugCache {
    diag: Arc<dyn Diagnostics>,
}

impl DebugCache {
    /// Create a debug cache reporting through `diag`.
    pub fn new(diag: Arc<dyn Diagnostics>) -> Self {
        Self { diag }
    }
}

#[async_trait]
impl CacheService for DebugCache {
    async fn restore(
        &self,
        paths: &[PathBuf],
        _primary_key: &str,
        _restore_keys: Option<&[String]>,
    ) -> Result<Option<String>> {
        let Some(path) = paths.first() else {
            self.diag.error("Debug cache restore failure: no paths given");
            return Ok(None);
        };

        if exists(path).await {
            self.diag
                .info(&format!("Debug cache restore success: {}", path.display()));
            Ok(Some(RESTORE_SENTINEL.to_string()))
        } else {
            self.diag
                .error(&format!("Debug cache restore failure: {}", path.display()));
            Ok(None)
        }
    }

    async fn save(&self, paths: &[PathBuf], _key: &str) -> Result<u64> {
        let Some(path) = paths.first() else {
            self.diag.error("Debug cache save failure: no paths given");
            return Err(Error::MissingArtifact {
                path: PathBuf::new(),
            });
        };

        if exists(path).await {
            self.diag
                .info(&format!("Debug cache save success: {}", path.display()));
            Ok(0)
        } else {
            self.diag
                .error(&format!("Debug cache save failure: {}", path.display()));
            Err(Error::MissingArtifact { path: path.clone() })
        }
    }
}

/// Existence probe that treats unreadable paths as absent.
async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

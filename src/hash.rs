//! # Content Fingerprinting
//!
//! SHA-256 fingerprints used to key CI artifacts: a streaming digest of a
//! file's bytes, and a shallow digest of a directory's immediate child
//! names. The directory digest is order-independent (names are sorted
//! before hashing) and intentionally ignores child file contents and
//! metadata; it answers "did the set of entries change", nothing more.

use std::path::Path;

use sha2::{Digest, Sha256};
use tokio::fs;
use tokio::io::AsyncReadExt;

use crate::error::Result;

/// Read buffer size for streaming file digests.
const CHUNK_SIZE: usize = 8192;

/// Compute the SHA-256 digest of a file's bytes as lowercase hex.
///
/// The file is streamed through the digest in fixed-size chunks, so
/// arbitrarily large files hash in constant memory. The handle is closed
/// when the function returns, on success and failure alike.
///
/// # Errors
/// Returns an I/O error if the path does not exist or cannot be read.
pub async fn file_digest(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path).await?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let read = file.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute a shallow SHA-256 digest of a directory as lowercase hex.
///
/// Only the names of the immediate children participate: they are listed,
/// sorted lexicographically, and fed into the digest in that order. Two
/// directories with the same set of entry names always hash identically,
/// regardless of the order the filesystem returns them in.
///
/// # Errors
/// Returns an I/O error if the path does not exist or is not readable as
/// a directory.
pub async fn dir_digest(path: &Path) -> Result<String> {
    let mut entries = fs::read_dir(path).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    let mut hasher = Sha256::new();
    for name in &names {
        hasher.update(name.as_bytes());
    }

    Ok(hex::encode(hasher.finalize()))
}

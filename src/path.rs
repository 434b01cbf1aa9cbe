//! # Path Containment
//!
//! Lexical check for whether one path sits beneath another, used to keep
//! CI cache and artifact paths inside their sandbox directories. The
//! check folds `.` and `..` components but never touches the filesystem:
//! symlinks are not resolved.

use std::path::{Component, Path, PathBuf};

/// Returns true if `child` is `parent` itself or lexically beneath it.
///
/// Both paths are normalized before comparison, so `/a/b/../c` is treated
/// as `/a/c`. A relative path is never contained in an absolute one and
/// vice versa. Comparison is component-wise; `/a/bc` is not beneath
/// `/a/b`.
pub fn contains(parent: &Path, child: &Path) -> bool {
    normalize(child).starts_with(normalize(parent))
}

/// Fold `.` and `..` components without consulting the filesystem.
///
/// `..` at the root stays at the root; `..` at the start of a relative
/// path is preserved, since there is nothing to pop.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(parent: &str, child: &str) -> bool {
        contains(Path::new(parent), Path::new(child))
    }

    #[test]
    fn test_contains_direct_descendant() {
        assert!(check("/a/b", "/a/b/c"));
        assert!(check("/a/b", "/a/b/c/d/e"));
    }

    #[test]
    fn test_contains_self() {
        assert!(check("/a/b", "/a/b"));
        assert!(check("relative/dir", "relative/dir"));
    }

    #[test]
    fn test_contains_rejects_siblings() {
        assert!(!check("/a/b", "/a/c"));
        assert!(!check("/a/b", "/a"));
    }

    #[test]
    fn test_contains_is_component_wise() {
        // A shared name prefix is not containment.
        assert!(!check("/a/b", "/a/bc"));
        assert!(!check("/work/cache", "/work/cache2/item"));
    }

    #[test]
    fn test_contains_folds_dot_components() {
        assert!(check("/a/b", "/a/b/./c"));
        assert!(check("/a/./b", "/a/b/c"));
    }

    #[test]
    fn test_contains_folds_parent_traversal() {
        assert!(check("/a/b", "/a/b/c/../d"));
        assert!(!check("/a/b", "/a/b/../c"));
        assert!(!check("/a/b", "/a/b/../../etc/passwd"));
    }

    #[test]
    fn test_contains_parent_traversal_at_root_stays_at_root() {
        assert!(check("/", "/../a"));
    }

    #[test]
    fn test_contains_mixed_absolute_and_relative() {
        assert!(!check("/a/b", "a/b/c"));
        assert!(!check("a/b", "/a/b/c"));
    }

    #[test]
    fn test_contains_relative_paths() {
        assert!(check("work", "work/output"));
        assert!(!check("work", "other/output"));
        assert!(!check("work", "work/../other"));
    }
}

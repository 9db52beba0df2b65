//! Path resolution.
//!
//! Resolution is a pure walk over the tree: it never creates nodes and never
//! returns a partial match.

use super::{NodeId, SEPARATOR, Vfs, VfsError, VfsResult};

/// Resolve `path` starting at `cwd`.
///
/// - empty path or `/` resolves to the root
/// - a leading `/` starts the walk at the root, otherwise at `cwd`
/// - empty segments are ignored, so `a//b` equals `a/b`
/// - `.` stays put; `..` moves to the parent and is a no-op at the root
///
/// Walking through a file fails with [`VfsError::NotADirectory`]; a missing
/// child fails with [`VfsError::NotFound`]. Both carry the original path.
pub fn resolve(vfs: &Vfs, cwd: NodeId, path: &str) -> VfsResult<NodeId> {
    let mut current = if path.is_empty() || path.starts_with(SEPARATOR) {
        vfs.root()
    } else {
        cwd
    };

    for segment in path.split(SEPARATOR).filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                if let Some(parent) = vfs.parent(current) {
                    current = parent;
                }
            }
            name => {
                let node = vfs.node(current);
                if !node.is_dir() {
                    return Err(VfsError::NotADirectory(path.to_string()));
                }
                current = node
                    .child(name)
                    .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
            }
        }
    }

    Ok(current)
}

/// Split a path into its parent part and final segment.
///
/// Trailing separators are ignored. Returns `None` when there is no final
/// segment (`""`, `/`, `///`). A bare name yields an empty parent, which
/// callers treat as "the current directory"; `/name` yields `/`.
///
/// ```
/// use vfsh_kernel::vfs::split_parent;
///
/// assert_eq!(split_parent("a/b/"), Some(("a", "b")));
/// assert_eq!(split_parent("/top"), Some(("/", "top")));
/// assert_eq!(split_parent("name"), Some(("", "name")));
/// assert_eq!(split_parent("/"), None);
/// ```
pub fn split_parent(path: &str) -> Option<(&str, &str)> {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.rfind(SEPARATOR) {
        None => Some(("", trimmed)),
        Some(idx) => {
            let parent = trimmed[..idx].trim_end_matches(SEPARATOR);
            let parent = if parent.is_empty() { "/" } else { parent };
            Some((parent, &trimmed[idx + 1..]))
        }
    }
}

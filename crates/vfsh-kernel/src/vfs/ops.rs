//! Tree mutations: `mkdir` and `chmod`.

use super::{Mode, NodeId, Vfs, VfsError, VfsResult, resolve, split_parent};

/// Create one empty directory at `path`.
///
/// Never creates intermediate directories and never overwrites: the parent
/// must already exist and nothing may be present under the final name.
pub fn mkdir(vfs: &mut Vfs, cwd: NodeId, path: &str) -> VfsResult<NodeId> {
    let (parent_path, name) =
        split_parent(path).ok_or_else(|| VfsError::InvalidPath(path.to_string()))?;

    // `mkdir .` / `mkdir ..` name something that always exists.
    if name == "." || name == ".." {
        return Err(VfsError::AlreadyExists(path.to_string()));
    }

    let parent = if parent_path.is_empty() {
        cwd
    } else {
        resolve(vfs, cwd, parent_path)?
    };

    let id = vfs.add_directory(parent, name)?;
    tracing::debug!(path = %vfs.path_of(id), "created directory");
    Ok(id)
}

/// Relabel the mode of the node at `path`.
///
/// The mode string is parsed before the path is resolved, so a bad mode is
/// reported even when the path is also wrong.
pub fn chmod(vfs: &mut Vfs, cwd: NodeId, mode: &str, path: &str) -> VfsResult<NodeId> {
    let mode = Mode::parse(mode)?;
    let id = resolve(vfs, cwd, path)?;
    vfs.set_mode(id, mode);
    tracing::debug!(path = %vfs.path_of(id), mode = %mode, "changed mode");
    Ok(id)
}

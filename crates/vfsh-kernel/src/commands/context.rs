//! Execution context for commands.

use crate::history::History;
use crate::vfs::{NodeId, Vfs, VfsResult};

/// Execution context passed to commands.
///
/// Borrows the interpreter's state for the duration of one command: the
/// tree, the current-directory cursor, and (read-only) the history.
pub struct ExecContext<'a> {
    /// The tree commands operate on.
    pub vfs: &'a mut Vfs,
    /// Current working directory.
    pub cwd: &'a mut NodeId,
    /// Session history, including the line being executed.
    pub history: &'a History,
}

impl<'a> ExecContext<'a> {
    pub fn new(vfs: &'a mut Vfs, cwd: &'a mut NodeId, history: &'a History) -> Self {
        Self { vfs, cwd, history }
    }

    pub fn cwd(&self) -> NodeId {
        *self.cwd
    }

    /// Resolve a path relative to the current directory.
    pub fn resolve(&self, path: &str) -> VfsResult<NodeId> {
        self.vfs.resolve(*self.cwd, path)
    }

    /// Change the current working directory.
    pub fn set_cwd(&mut self, id: NodeId) {
        *self.cwd = id;
    }

    /// Display path of the current directory.
    pub fn current_path(&self) -> String {
        self.vfs.path_of(*self.cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_to_cwd() {
        let mut vfs = Vfs::new();
        let docs = vfs.add_directory(vfs.root(), "docs").unwrap();
        let notes = vfs.add_directory(docs, "notes").unwrap();
        let history = History::new();
        let mut cwd = docs;
        let mut ctx = ExecContext::new(&mut vfs, &mut cwd, &history);

        assert_eq!(ctx.resolve("notes").unwrap(), notes);
        assert_eq!(ctx.current_path(), "/docs");

        ctx.set_cwd(notes);
        assert_eq!(ctx.cwd(), notes);
        assert_eq!(ctx.current_path(), "/docs/notes");
    }
}

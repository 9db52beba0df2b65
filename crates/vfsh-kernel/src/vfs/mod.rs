//! Virtual Filesystem (VFS) for vfsh.
//!
//! The VFS is a single in-memory tree, loaded once from a real directory by
//! [`crate::ingest`] and mutated only in memory afterwards:
//!
//! - **Vfs**: arena that owns every [`Node`] and hands out [`NodeId`]s
//! - **resolve**: walks `/`-separated paths with `.` and `..` handling
//! - **ops**: `mkdir` and `chmod`, the only mutations a session can perform
//!
//! # Design
//!
//! Nodes are never removed, so a `NodeId` stays valid for the life of the
//! `Vfs` that issued it. Parent links are plain indices, not owning pointers.
//!
//! ```text
//! /                      # root, name "/"
//! ├── docs/              # Directory, mode 0755
//! │   └── readme.txt     # File, mode 0644
//! └── motd               # File
//! ```

mod mode;
mod node;
mod ops;
mod resolve;
mod tree;

pub use mode::Mode;
pub use node::{Node, NodeId, NodeKind};
pub use ops::{chmod, mkdir};
pub use resolve::{resolve, split_parent};
pub use tree::Vfs;

use thiserror::Error;

/// Path separator used by every VFS path.
pub const SEPARATOR: char = '/';

/// Result type for VFS operations.
pub type VfsResult<T> = Result<T, VfsError>;

/// VFS operation errors.
///
/// The resolver keeps `NotFound` and `NotADirectory` apart; commands collapse
/// both into a "cannot access" message for users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("is a directory: {0}")]
    IsADirectory(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("invalid name: {0:?}")]
    InvalidName(String),
    #[error("invalid mode: {0}")]
    InvalidMode(String),
}

impl VfsError {
    /// Short, `ls`-style description without the offending path.
    pub fn reason(&self) -> &'static str {
        match self {
            VfsError::NotFound(_) => "No such file or directory",
            VfsError::NotADirectory(_) => "Not a directory",
            VfsError::IsADirectory(_) => "Is a directory",
            VfsError::AlreadyExists(_) => "File exists",
            VfsError::InvalidPath(_) => "Invalid path",
            VfsError::InvalidName(_) => "Invalid name",
            VfsError::InvalidMode(_) => "Invalid mode",
        }
    }

    /// True for the two resolution failures users see as "cannot access".
    pub fn is_unresolved(&self) -> bool {
        matches!(self, VfsError::NotFound(_) | VfsError::NotADirectory(_))
    }
}

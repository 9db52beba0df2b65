//! vfsh-kernel: the core of the vfsh virtual-filesystem shell.
//!
//! This crate provides:
//!
//! - **VFS**: in-memory directory tree with path resolution, `mkdir` and `chmod`
//! - **Ingest**: one-time snapshot of a real directory into the tree
//! - **Lexer**: shell-style word splitting using logos
//! - **Expand**: `$NAME` environment-variable expansion
//! - **Commands**: the closed builtin command set and its dispatcher
//! - **Interpreter**: runs one line and returns a structured `ExecResult`
//! - **Session**: prompt, rendering and script execution on top of the interpreter
//!
//! ```
//! use vfsh_kernel::{Session, Vfs};
//!
//! let mut vfs = Vfs::new();
//! let root = vfs.root();
//! vfs.add_directory(root, "docs").unwrap();
//!
//! let mut session = Session::new(vfs);
//! assert!(session.submit("cd docs").ok);
//! assert_eq!(session.prompt(), "vfs:/docs> ");
//! ```

pub mod commands;
pub mod config;
pub mod expand;
pub mod history;
pub mod ingest;
pub mod interpreter;
pub mod lexer;
pub mod session;
pub mod vfs;

pub use config::ShellConfig;
pub use history::{History, HistoryCursor};
pub use ingest::{IngestError, load};
pub use interpreter::{Control, ExecResult, Interpreter};
pub use session::{Rendered, ScriptRun, ScriptStep, Session, SessionError};
pub use vfs::{Mode, NodeId, NodeKind, Vfs, VfsError};

//! Disk ingestion: snapshot a real directory into a [`Vfs`].
//!
//! Ingestion runs once at startup. Afterwards the real directory is never
//! read again and never written: later changes on disk are not reflected, and
//! VFS mutations stay in memory.
//!
//! Degradation rules:
//!
//! - unreadable or non-UTF-8 files become empty files
//! - directories that cannot be listed become empty directories
//! - symlinks, sockets, devices and names that are not UTF-8 are skipped
//!
//! Only a missing (or non-directory) source path is an error, plus duplicate
//! names, which a real directory cannot produce.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::vfs::{NodeId, NodeKind, Vfs, VfsError};

/// Ingestion failures. All of them are fatal to session startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("VFS source directory not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("duplicate entry {name:?} in {parent}")]
    Duplicate { parent: String, name: String },
    #[error("cannot ingest {name:?}: {source}")]
    Tree {
        name: String,
        #[source]
        source: VfsError,
    },
}

/// Load the directory at `source` into a fresh [`Vfs`].
#[tracing::instrument(level = "info", skip_all, fields(source = %source.display()))]
pub fn load(source: &Path) -> Result<Vfs, IngestError> {
    if !source.is_dir() {
        return Err(IngestError::NotFound(source.to_path_buf()));
    }

    let mut vfs = Vfs::new();
    let root = vfs.root();
    walk(&mut vfs, source, root)?;

    tracing::info!(
        directories = vfs.count(NodeKind::Directory),
        files = vfs.count(NodeKind::File),
        "VFS loaded"
    );
    Ok(vfs)
}

fn walk(vfs: &mut Vfs, dir: &Path, node: NodeId) -> Result<(), IngestError> {
    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "skipping unlistable directory");
            return Ok(());
        }
    };

    let mut entries: Vec<fs::DirEntry> = listing
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(path = %dir.display(), error = %e, "skipping unreadable entry");
                None
            }
        })
        .collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::debug!(name = ?raw, "skipping non-UTF-8 name");
                continue;
            }
        };

        // DirEntry::file_type does not follow symlinks.
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping entry without type");
                continue;
            }
        };

        if file_type.is_dir() {
            let child = attach(vfs, node, &name, Vfs::add_directory)?;
            walk(vfs, &path, child)?;
        } else if file_type.is_file() {
            let content = read_text(&path);
            attach(vfs, node, &name, |vfs, parent, name| {
                vfs.add_file(parent, name, content)
            })?;
        } else {
            tracing::debug!(path = %path.display(), "skipping special entry");
        }
    }

    Ok(())
}

fn attach<F>(vfs: &mut Vfs, parent: NodeId, name: &str, add: F) -> Result<NodeId, IngestError>
where
    F: FnOnce(&mut Vfs, NodeId, &str) -> Result<NodeId, VfsError>,
{
    add(vfs, parent, name).map_err(|source| match source {
        VfsError::AlreadyExists(_) => IngestError::Duplicate {
            parent: vfs.path_of(parent),
            name: name.to_string(),
        },
        source => IngestError::Tree {
            name: name.to_string(),
            source,
        },
    })
}

/// Read a file as UTF-8 text, degrading to empty content.
fn read_text(path: &Path) -> String {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "unreadable file, using empty content");
            return String::new();
        }
    };
    String::from_utf8(bytes).unwrap_or_else(|_| {
        tracing::debug!(path = %path.display(), "non-text file, using empty content");
        String::new()
    })
}

//! Tree nodes.

use std::collections::BTreeMap;

use super::Mode;

/// Index of a node inside its [`Vfs`](super::Vfs) arena.
///
/// Only the `Vfs` mints ids. Using an id with a different `Vfs` than the one
/// that produced it is a logic error and may panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Kind of node. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

impl NodeKind {
    /// Suffix used in listings: `/` for directories.
    pub fn suffix(self) -> &'static str {
        match self {
            NodeKind::Directory => "/",
            NodeKind::File => "",
        }
    }
}

/// Kind-specific payload.
#[derive(Debug, Clone)]
pub(crate) enum NodeData {
    Directory { children: BTreeMap<String, NodeId> },
    File { content: String },
}

/// One entry in the VFS.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) mode: Mode,
    pub(crate) parent: Option<NodeId>,
    pub(crate) data: NodeData,
}

impl Node {
    pub(crate) fn directory(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            mode: Mode::DIRECTORY,
            parent,
            data: NodeData::Directory {
                children: BTreeMap::new(),
            },
        }
    }

    pub(crate) fn file(name: impl Into<String>, parent: NodeId, content: String) -> Self {
        Self {
            name: name.into(),
            mode: Mode::FILE,
            parent: Some(parent),
            data: NodeData::File { content },
        }
    }

    /// Segment name; `/` for the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Directory { .. } => NodeKind::Directory,
            NodeData::File { .. } => NodeKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == NodeKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind() == NodeKind::File
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Containing directory; `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// File content, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.data {
            NodeData::File { content } => Some(content),
            NodeData::Directory { .. } => None,
        }
    }

    /// Child with the given name. Always `None` for files.
    pub fn child(&self, name: &str) -> Option<NodeId> {
        match &self.data {
            NodeData::Directory { children } => children.get(name).copied(),
            NodeData::File { .. } => None,
        }
    }

    /// Children in name order. Empty for files.
    pub fn children(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        let map = match &self.data {
            NodeData::Directory { children } => Some(children),
            NodeData::File { .. } => None,
        };
        map.into_iter()
            .flat_map(|children| children.iter().map(|(name, id)| (name.as_str(), *id)))
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut BTreeMap<String, NodeId>> {
        match &mut self.data {
            NodeData::Directory { children } => Some(children),
            NodeData::File { .. } => None,
        }
    }
}

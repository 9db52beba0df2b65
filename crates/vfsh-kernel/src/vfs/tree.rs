//! The node arena.

use super::node::{Node, NodeData};
use super::{Mode, NodeId, NodeKind, SEPARATOR, VfsError, VfsResult};

/// In-memory filesystem tree.
///
/// Owns every node; nodes refer to each other through [`NodeId`]s. There is
/// no removal, so ids stay valid as long as the `Vfs` lives.
#[derive(Debug, Clone)]
pub struct Vfs {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Vfs {
    /// Create a tree holding only the root directory.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::directory(SEPARATOR.to_string(), None)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this `Vfs`.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is always present.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes of the given kind.
    pub fn count(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|n| n.kind() == kind).count()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Children of `id` in name order. Empty for files.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.node(id).children()
    }

    /// Create an empty directory under `parent`.
    pub fn add_directory(&mut self, parent: NodeId, name: &str) -> VfsResult<NodeId> {
        self.insert(parent, Node::directory(name, Some(parent)))
    }

    /// Create a file under `parent`.
    pub fn add_file(
        &mut self,
        parent: NodeId,
        name: &str,
        content: impl Into<String>,
    ) -> VfsResult<NodeId> {
        self.insert(parent, Node::file(name, parent, content.into()))
    }

    fn insert(&mut self, parent: NodeId, node: Node) -> VfsResult<NodeId> {
        validate_name(&node.name)?;

        let id = NodeId(self.nodes.len());
        let parent_path = self.path_of(parent);
        let child_path = join(&parent_path, &node.name);
        let children = self.nodes[parent.0]
            .children_mut()
            .ok_or(VfsError::NotADirectory(parent_path))?;
        if children.contains_key(&node.name) {
            return Err(VfsError::AlreadyExists(child_path));
        }
        children.insert(node.name.clone(), id);
        self.nodes.push(node);
        Ok(id)
    }

    /// Relabel a node's mode.
    pub fn set_mode(&mut self, id: NodeId, mode: Mode) {
        self.nodes[id.0].mode = mode;
    }

    /// File content, or `IsADirectory`.
    pub fn read_file(&self, id: NodeId) -> VfsResult<&str> {
        match &self.node(id).data {
            NodeData::File { content } => Ok(content),
            NodeData::Directory { .. } => Err(VfsError::IsADirectory(self.path_of(id))),
        }
    }

    /// Absolute display path: `/` for the root, `/a/b` otherwise.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            parts.push(self.node(current).name.as_str());
            current = parent;
        }
        if parts.is_empty() {
            return SEPARATOR.to_string();
        }
        parts.reverse();
        let mut path = String::new();
        for part in parts {
            path.push(SEPARATOR);
            path.push_str(part);
        }
        path
    }

    /// Resolve `path` relative to `cwd`. See [`super::resolve`].
    pub fn resolve(&self, cwd: NodeId, path: &str) -> VfsResult<NodeId> {
        super::resolve(self, cwd, path)
    }
}

/// Reject names that could never be looked up by the resolver.
fn validate_name(name: &str) -> VfsResult<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(SEPARATOR) {
        return Err(VfsError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn join(parent: &str, name: &str) -> String {
    if parent.ends_with(SEPARATOR) {
        format!("{parent}{name}")
    } else {
        format!("{parent}{SEPARATOR}{name}")
    }
}

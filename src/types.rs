//! Core types shared by the tree and shell components.

use serde::{Deserialize, Serialize};

/// Enum for distinguishing node types at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    File,
    Folder,
}

/// A node in the virtual file hierarchy.
///
/// The tree is constructed once from nested `TreeNode` values and is
/// read-only afterwards; expand/collapse state lives in
/// [`crate::VirtualFileTree`], not on the node. Files structurally cannot
/// carry children. `path` is the node's identity key and must be a canonical
/// absolute path, unique across the whole tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeNode {
    File {
        name: String,
        path: String,
    },
    Folder {
        name: String,
        path: String,
        /// Ordered; rendering never re-sorts. Empty is a valid empty folder.
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        TreeNode::File {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn folder(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        TreeNode::Folder {
            name: name.into(),
            path: path.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } | TreeNode::Folder { name, .. } => name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            TreeNode::File { path, .. } | TreeNode::Folder { path, .. } => path,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            TreeNode::File { .. } => NodeKind::File,
            TreeNode::Folder { .. } => NodeKind::Folder,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, TreeNode::Folder { .. })
    }

    /// Child nodes in declared order; the empty slice for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Folder { children, .. } => children,
        }
    }
}

/// One visible row produced by [`crate::VirtualFileTree::render`].
///
/// `depth` is 0 for the root's direct children. `expanded` is meaningful
/// only for folder rows and is always `false` for files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRow {
    pub path: String,
    pub name: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub expanded: bool,
}

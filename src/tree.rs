//! In-memory virtual file tree with expand/collapse state and lazy rendering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};
use crate::types::{NodeKind, TreeNode, TreeRow};

/// Read-only virtual file hierarchy for UI browsing.
///
/// The node structure is an immutable snapshot; the only mutable state is
/// which folders are expanded and which single file path is "active". Node
/// identity and mutable flags live in side maps keyed by path, so the node
/// tree itself never needs to be borrowed mutably.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualFileTree {
    root: TreeNode,
    kinds: HashMap<String, NodeKind>,
    expanded: HashMap<String, bool>,
    active: Option<String>,
}

impl VirtualFileTree {
    /// Build a tree from a root node, validating structural invariants:
    /// non-empty names, absolute paths, and path uniqueness.
    ///
    /// Folders at depth < 2 (the root counts as depth 0) start expanded;
    /// deeper folders start collapsed. The root itself is never collapsible
    /// and is not tracked in the expanded map.
    pub fn new(root: TreeNode) -> TreeResult<Self> {
        let mut kinds = HashMap::new();
        let mut expanded = HashMap::new();
        index_node(&root, 0, &mut kinds, &mut expanded)?;
        expanded.remove(root.path());

        Ok(Self {
            root,
            kinds,
            expanded,
            active: None,
        })
    }

    /// Flip the expanded flag of the folder at `path`.
    ///
    /// Silent no-op for unknown paths, file paths, and the root: the host UI
    /// may emit events for rows that have since gone stale, and the model
    /// must tolerate them.
    pub fn toggle(&mut self, path: &str) {
        if let Some(flag) = self.expanded.get_mut(path) {
            *flag = !*flag;
        }
    }

    /// Activate the file at `path`, returning it for the host to display.
    ///
    /// Selecting a folder is defined as toggling it, so folder paths flip
    /// their expanded flag and return `None` — folders are never active.
    /// Unknown paths are a no-op returning `None`.
    pub fn select(&mut self, path: &str) -> Option<String> {
        match self.kinds.get(path) {
            Some(NodeKind::File) => {
                self.active = Some(path.to_string());
                self.active.clone()
            }
            Some(NodeKind::Folder) => {
                self.toggle(path);
                None
            }
            None => None,
        }
    }

    /// Currently selected file path, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.kinds.contains_key(path)
    }

    /// Whether the folder at `path` is expanded. The root is always
    /// expanded; unknown and file paths report `false`.
    pub fn is_expanded(&self, path: &str) -> bool {
        if path == self.root.path() {
            return true;
        }
        self.expanded.get(path).copied().unwrap_or(false)
    }

    /// Lazy pre-order traversal over the visible rows.
    ///
    /// Yields the root's direct children at depth 0 (the root is an implicit
    /// container, not a row), children in declared insertion order. The
    /// subtree of a collapsed folder is skipped, but the collapsed folder
    /// row itself is still yielded. Each call returns a fresh iterator over
    /// the current expand state.
    pub fn render(&self) -> RenderIter<'_> {
        RenderIter {
            tree: self,
            stack: self.root.children().iter().rev().map(|c| (c, 0)).collect(),
        }
    }
}

fn index_node(
    node: &TreeNode,
    depth: usize,
    kinds: &mut HashMap<String, NodeKind>,
    expanded: &mut HashMap<String, bool>,
) -> TreeResult<()> {
    if node.name().is_empty() {
        return Err(TreeError::EmptyName(node.path().to_string()));
    }
    if !node.path().starts_with('/') {
        return Err(TreeError::RelativePath(node.path().to_string()));
    }
    if kinds.insert(node.path().to_string(), node.kind()).is_some() {
        return Err(TreeError::DuplicatePath(node.path().to_string()));
    }

    if node.is_folder() {
        expanded.insert(node.path().to_string(), depth < 2);
        for child in node.children() {
            index_node(child, depth + 1, kinds, expanded)?;
        }
    }
    Ok(())
}

/// Iterator over visible `(node, depth)` rows; see [`VirtualFileTree::render`].
#[derive(Debug)]
pub struct RenderIter<'a> {
    tree: &'a VirtualFileTree,
    stack: Vec<(&'a TreeNode, usize)>,
}

impl Iterator for RenderIter<'_> {
    type Item = TreeRow;

    fn next(&mut self) -> Option<TreeRow> {
        let (node, depth) = self.stack.pop()?;
        let expanded = node.is_folder() && self.tree.is_expanded(node.path());
        if expanded {
            for child in node.children().iter().rev() {
                self.stack.push((child, depth + 1));
            }
        }

        Some(TreeRow {
            path: node.path().to_string(),
            name: node.name().to_string(),
            kind: node.kind(),
            depth,
            expanded,
        })
    }
}

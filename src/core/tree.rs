//! Key tree construction.
//!
//! The flat key table is expanded into a tree of named groups by splitting
//! each key on the configured delimiter. Children keep first-insertion order
//! so generated code is stable across runs for the same input ordering.

use super::entry::{LocalizationEntry, split_key_path};

/// A node in the key tree: either one translation or a named group of
/// children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Leaf(Leaf),
    Group(Group),
}

/// One translation key and its base-language value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// The full original key, as written in the input table.
    pub key: String,
    /// The base translation string.
    pub value: String,
}

/// A named collection of child nodes, ordered by first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    children: Vec<(String, TreeNode)>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut TreeNode> {
        self.children
            .iter_mut()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    /// Insert or replace a child, keeping an existing child's slot.
    fn set(&mut self, name: &str, node: TreeNode) {
        match self.get_mut(name) {
            Some(existing) => *existing = node,
            None => self.children.push((name.to_string(), node)),
        }
    }
}

/// The outcome of building a tree: the root group plus the keys that were
/// skipped because they collapsed to an empty path.
#[derive(Debug, Default)]
pub struct BuiltTree {
    pub root: Group,
    /// Keys consisting only of delimiters (no usable segments).
    pub skipped_keys: Vec<String>,
}

/// Build the key tree from a flat entry list.
///
/// Empty path segments are dropped, intermediate groups are created on
/// demand, and on any shape conflict the later entry wins: a leaf blocking an
/// intermediate segment becomes a group, and a group at a final segment is
/// replaced by the leaf.
pub fn build_tree(entries: &[LocalizationEntry], delimiter: &str) -> BuiltTree {
    let mut tree = BuiltTree::default();

    for entry in entries {
        let path = split_key_path(&entry.key, delimiter);
        let Some((last, intermediate)) = path.split_last() else {
            tree.skipped_keys.push(entry.key.clone());
            continue;
        };

        let mut current = &mut tree.root;
        for segment in intermediate {
            // A leaf in the way of a deeper path is replaced by a group.
            if !matches!(current.get(segment), Some(TreeNode::Group(_))) {
                current.set(segment, TreeNode::Group(Group::new()));
            }
            let Some(TreeNode::Group(group)) = current.get_mut(segment) else {
                unreachable!("segment was just set to a group");
            };
            current = group;
        }

        current.set(
            last,
            TreeNode::Leaf(Leaf {
                key: entry.key.clone(),
                value: entry.value.clone(),
            }),
        );
    }

    tree
}

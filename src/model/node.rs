use serde::{Deserialize, Serialize};

/// A checklist entry in tree form. Children are owned exclusively by their
/// parent; the root of the document is an ordered `Vec<TreeNode>`.
///
/// Wire format is camelCase (`isChecked`) so seed files written for the
/// web original load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Opaque identifier, unique across the whole list and stable across
    /// all conversions.
    pub id: String,
    /// Display label
    pub label: String,
    /// Named color tag (resolved to RGB by the theme)
    pub color: String,
    /// Checkbox state
    pub is_checked: bool,
    /// Ordered subtree
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

/// One row of the flat rendering sequence: every `TreeNode` attribute plus
/// the parent link and nesting depth.
///
/// The sequence's *order* is itself meaningful — it is a pre-order
/// traversal of the tree, and sibling order is encoded purely by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatItem {
    pub id: String,
    pub label: String,
    pub color: String,
    pub is_checked: bool,
    /// Owning node's id; `None` for top-level items
    pub parent_id: Option<String>,
    /// Nesting depth (0 = top-level)
    pub depth: usize,
}

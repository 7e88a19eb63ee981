use indexmap::IndexMap;

use crate::model::{FlatItem, TreeNode};

// ---------------------------------------------------------------------------
// Tree → flat
// ---------------------------------------------------------------------------

/// Flatten a tree into its pre-order sequence. Each node becomes one
/// `FlatItem` carrying its parent's id and depth, immediately followed by
/// the flattening of its children at depth + 1. Child order is preserved;
/// output length equals total node count.
pub fn flatten(nodes: &[TreeNode]) -> Vec<FlatItem> {
    let mut items = Vec::new();
    flatten_into(nodes, None, 0, &mut items);
    items
}

fn flatten_into(
    nodes: &[TreeNode],
    parent_id: Option<&str>,
    depth: usize,
    items: &mut Vec<FlatItem>,
) {
    for node in nodes {
        items.push(FlatItem {
            id: node.id.clone(),
            label: node.label.clone(),
            color: node.color.clone(),
            is_checked: node.is_checked,
            parent_id: parent_id.map(str::to_string),
            depth,
        });
        flatten_into(&node.children, Some(&node.id), depth + 1, items);
    }
}

// ---------------------------------------------------------------------------
// Flat → tree
// ---------------------------------------------------------------------------

/// Rebuild the tree from a flat sequence. Children attach to their parent
/// in flat-sequence order; top-level items are those with no parent.
///
/// Items whose `parent_id` names no id in the sequence are dropped rather
/// than rejected: the flat sequence is allowed to be briefly inconsistent
/// during an in-progress drag, and rebuilding must not fail on it. A
/// subtree hanging off a dropped item is unreachable and vanishes with it.
pub fn build(items: &[FlatItem]) -> Vec<TreeNode> {
    let mut by_id: IndexMap<&str, &FlatItem> = IndexMap::with_capacity(items.len());
    for item in items {
        by_id.insert(item.id.as_str(), item);
    }

    let mut children: IndexMap<&str, Vec<&str>> = IndexMap::new();
    let mut roots: Vec<&str> = Vec::new();
    for item in items {
        match item.parent_id.as_deref() {
            None => roots.push(&item.id),
            Some(parent) if by_id.contains_key(parent) => {
                children.entry(parent).or_default().push(&item.id);
            }
            // Orphaned: parent no longer exists in the sequence
            Some(_) => {}
        }
    }

    roots
        .iter()
        .map(|id| assemble(id, &by_id, &children))
        .collect()
}

fn assemble(
    id: &str,
    by_id: &IndexMap<&str, &FlatItem>,
    children: &IndexMap<&str, Vec<&str>>,
) -> TreeNode {
    let item = by_id[id];
    TreeNode {
        id: item.id.clone(),
        label: item.label.clone(),
        color: item.color.clone(),
        is_checked: item.is_checked,
        children: children
            .get(id)
            .map(|kids| kids.iter().map(|kid| assemble(kid, by_id, children)).collect())
            .unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Canonicalize a flat sequence: rebuild the tree strictly from the stored
/// parent links, then re-flatten so depth comes from actual traversal
/// position. Corrects any residual drift from incremental drag arithmetic
/// (orphans dropped, depths recomputed). Idempotent.
pub fn normalize(items: &[FlatItem]) -> Vec<FlatItem> {
    flatten(&build(items))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use crate::model::FlatItem;

/// Find an item by id in the flat sequence.
pub fn find_item<'a>(items: &'a [FlatItem], id: &str) -> Option<&'a FlatItem> {
    items.iter().find(|item| item.id == id)
}

/// Find an item by id, returning a mutable reference.
pub fn find_item_mut<'a>(items: &'a mut [FlatItem], id: &str) -> Option<&'a mut FlatItem> {
    items.iter_mut().find(|item| item.id == id)
}

/// All ids in sequence order.
pub fn item_ids(items: &[FlatItem]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}

/// Every id transitively reachable below `id`, in pre-order: a child, then
/// that child's descendants, then the next child. Empty for leaves and
/// unknown ids.
///
/// Re-derived from the current `parent_id` fields on every call — callers
/// reorder the sequence freely, so a cached subtree boundary would go
/// stale.
pub fn descendant_ids(items: &[FlatItem], id: &str) -> Vec<String> {
    let mut descendants = Vec::new();
    for child in items.iter().filter(|item| item.parent_id.as_deref() == Some(id)) {
        descendants.push(child.id.clone());
        descendants.extend(descendant_ids(items, &child.id));
    }
    descendants
}

use crate::model::{FlatItem, ListConfig};
use crate::ops::query::descendant_ids;

/// Error type for drop reconciliation. Every failure aborts the whole
/// operation; the caller keeps its sequence untouched.
#[derive(Debug, thiserror::Error)]
pub enum DropError {
    #[error("drop landed outside any droppable row")]
    NoDropTarget,
    #[error("unknown item: {0}")]
    UnknownItem(String),
    #[error("cannot drop {active} into its own subtree (target {over})")]
    DropOntoDescendant { active: String, over: String },
}

/// JS-style rounding: ties go toward positive infinity, so an offset
/// sitting exactly between two levels resolves to the deeper one.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Reconcile a completed drag against the current flat sequence.
///
/// `drag_offset` is the signed horizontal pixel distance from the drag's
/// origin; each `indent_unit` of it is one depth level of indent/outdent
/// intent. Returns the reordered sequence with the active item's subtree
/// re-parented, depth-shifted and spliced back in as one contiguous block.
///
/// Pure: no hidden state, safe to re-invoke, and the input is never
/// partially mutated — failures return `Err` with nothing committed.
pub fn apply_drop(
    items: &[FlatItem],
    active_id: &str,
    over_id: Option<&str>,
    drag_offset: i32,
    config: &ListConfig,
) -> Result<Vec<FlatItem>, DropError> {
    let over_id = over_id.ok_or(DropError::NoDropTarget)?;

    let old_index = items
        .iter()
        .position(|it| it.id == active_id)
        .ok_or_else(|| DropError::UnknownItem(active_id.to_string()))?;
    let new_index = items
        .iter()
        .position(|it| it.id == over_id)
        .ok_or_else(|| DropError::UnknownItem(over_id.to_string()))?;

    let active = &items[old_index];
    let over = &items[new_index];
    let original_parent_id = active.parent_id.clone();

    let projected =
        active.depth as i64 + round_half_up(drag_offset as f64 / config.indent_unit as f64);
    let mut new_depth = projected.max(0) as usize;
    let is_indenting = new_depth != active.depth;

    let descendants = descendant_ids(items, active_id);

    // A target inside the moving subtree would turn the active item into
    // its own ancestor; the normalizer would then discard the whole block
    // as orphaned. Abort instead.
    if descendants.iter().any(|id| id == over_id) {
        return Err(DropError::DropOntoDescendant {
            active: active_id.to_string(),
            over: over_id.to_string(),
        });
    }

    let mut new_parent_id: Option<String>;
    let mut depth_diff: i64;

    if is_indenting {
        // The nearest item before the drop target that is shallower than
        // the projected depth becomes the parent; none means top-level.
        // The moving block itself is skipped so it can never self-parent.
        let new_parent = items[..new_index]
            .iter()
            .rev()
            .filter(|it| it.id != active_id && !descendants.contains(&it.id))
            .find(|it| it.depth < new_depth);
        let parent_depth = new_parent.map_or(-1, |p| p.depth as i64);
        if new_depth as i64 > parent_depth + 1 {
            // No depth gaps: a child sits exactly one level below its parent
            new_depth = (parent_depth + 1) as usize;
        }
        new_parent_id = new_parent.map(|p| p.id.clone());
        depth_diff = new_depth as i64 - active.depth as i64;
    } else {
        // Pure vertical reorder: adopt the target's parent and depth
        new_parent_id = over.parent_id.clone();
        new_depth = over.depth;
        depth_diff = over.depth as i64 - active.depth as i64;
    }

    // Depth cap: if the shift would push the deepest descendant past
    // max_depth, discard the re-parent decision entirely. The positional
    // move still happens.
    let deepest_descendant_depth = descendants
        .iter()
        .filter_map(|id| items.iter().find(|it| &it.id == id))
        .map(|it| it.depth)
        .max()
        .unwrap_or(active.depth);
    if deepest_descendant_depth as i64 + depth_diff > config.max_depth as i64 {
        new_parent_id = active.parent_id.clone();
        new_depth = active.depth;
        depth_diff = 0;
    }

    let mut updated: Vec<FlatItem> = items.to_vec();
    for item in &mut updated {
        if item.id == active_id {
            item.parent_id = new_parent_id.clone();
            item.depth = new_depth;
        } else if descendants.contains(&item.id) {
            // Descendants keep their relative parent chain; only absolute
            // depth shifts
            item.depth = (item.depth as i64 + depth_diff) as usize;
        }
    }

    // The moved block: active item first, then its descendants in their
    // existing relative order
    let mut block: Vec<FlatItem> = Vec::with_capacity(descendants.len() + 1);
    block.push(updated[old_index].clone());
    for id in &descendants {
        if let Some(item) = updated.iter().find(|it| &it.id == id) {
            block.push(item.clone());
        }
    }

    let mut remaining: Vec<FlatItem> = updated
        .into_iter()
        .filter(|it| it.id != active_id && !descendants.contains(&it.id))
        .collect();

    let is_moving_down = old_index < new_index;
    let is_outdenting = is_indenting && depth_diff < 0;

    let insertion = match remaining.iter().position(|it| it.id == over_id) {
        Some(idx) if is_moving_down || is_outdenting => idx + 1,
        Some(idx) => idx,
        None if is_outdenting => {
            // Removing the block invalidated the target index; land the
            // subtree just after its original parent to keep the outdent's
            // visual intent. With no surviving parent, head of list.
            match remaining
                .iter()
                .position(|it| Some(it.id.as_str()) == original_parent_id.as_deref())
            {
                Some(idx) => idx + 1,
                None => 0,
            }
        }
        None => {
            let idx = old_index.min(remaining.len());
            if is_moving_down { idx + 1 } else { idx }
        }
    };
    let insertion = insertion.min(remaining.len());

    remaining.splice(insertion..insertion, block);
    Ok(remaining)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TreeNode;
    use crate::ops::tree::{flatten, normalize};
    use pretty_assertions::assert_eq;

    fn node(id: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode {
            id: id.to_string(),
            label: format!("item {}", id),
            color: "blue".to_string(),
            is_checked: false,
            children,
        }
    }

    fn config() -> ListConfig {
        ListConfig::default()
    }

    fn ids(items: &[FlatItem]) -> Vec<&str> {
        items.iter().map(|it| it.id.as_str()).collect()
    }

    fn item<'a>(items: &'a [FlatItem], id: &str) -> &'a FlatItem {
        items.iter().find(|it| it.id == id).unwrap()
    }

    // --- Pure vertical reorder ---

    #[test]
    fn reorder_up_inserts_before_target() {
        let items = flatten(&[node("A", vec![]), node("B", vec![]), node("C", vec![])]);
        let result = apply_drop(&items, "C", Some("B"), 0, &config()).unwrap();
        assert_eq!(ids(&result), vec!["A", "C", "B"]);
        assert_eq!(item(&result, "C").parent_id, None);
        assert_eq!(item(&result, "C").depth, 0);
    }

    #[test]
    fn reorder_down_inserts_after_target() {
        let items = flatten(&[node("A", vec![]), node("B", vec![]), node("C", vec![])]);
        let result = apply_drop(&items, "A", Some("B"), 0, &config()).unwrap();
        assert_eq!(ids(&result), vec!["B", "A", "C"]);
    }

    #[test]
    fn reorder_adopts_target_parent_and_depth() {
        // Dropping D next to C (a child of B) pulls D into B even with no
        // horizontal movement
        let items = flatten(&[
            node("A", vec![]),
            node("B", vec![node("C", vec![])]),
            node("D", vec![]),
        ]);
        let result = apply_drop(&items, "D", Some("C"), 0, &config()).unwrap();
        assert_eq!(ids(&result), vec!["A", "B", "D", "C"]);
        assert_eq!(item(&result, "D").parent_id.as_deref(), Some("B"));
        assert_eq!(item(&result, "D").depth, 1);
    }

    #[test]
    fn subtree_moves_as_contiguous_block() {
        let items = flatten(&[
            node("A", vec![]),
            node("B", vec![node("C", vec![]), node("D", vec![])]),
            node("E", vec![]),
        ]);
        let result = apply_drop(&items, "B", Some("A"), 0, &config()).unwrap();
        assert_eq!(ids(&result), vec!["B", "C", "D", "A", "E"]);
        assert_eq!(item(&result, "C").depth, 1);
        assert_eq!(item(&result, "D").depth, 1);
    }

    // --- Indenting ---

    #[test]
    fn indent_by_one_unit_reparents_under_preceding_item() {
        let items = flatten(&[node("B", vec![]), node("D", vec![])]);
        let result = apply_drop(&items, "D", Some("D"), 24, &config()).unwrap();
        assert_eq!(ids(&result), vec!["B", "D"]);
        assert_eq!(item(&result, "D").parent_id.as_deref(), Some("B"));
        assert_eq!(item(&result, "D").depth, 1);
    }

    #[test]
    fn indent_onto_parents_first_child_selects_the_parent() {
        // The backward scan only looks strictly before the drop target, so
        // hovering A's first child while indenting picks A itself
        let items = flatten(&[
            node("A", vec![node("B", vec![]), node("C", vec![])]),
            node("E", vec![]),
        ]);
        let result = apply_drop(&items, "E", Some("B"), 24, &config()).unwrap();
        assert_eq!(item(&result, "E").parent_id.as_deref(), Some("A"));
        assert_eq!(item(&result, "E").depth, 1);
        assert_eq!(ids(&result), vec!["A", "E", "B", "C"]);
    }

    #[test]
    fn indent_clamps_to_one_below_parent() {
        // Three units of offset cannot skip levels
        let items = flatten(&[node("A", vec![]), node("B", vec![])]);
        let result = apply_drop(&items, "B", Some("B"), 72, &config()).unwrap();
        assert_eq!(item(&result, "B").parent_id.as_deref(), Some("A"));
        assert_eq!(item(&result, "B").depth, 1);
    }

    #[test]
    fn indent_shifts_descendant_depths() {
        let items = flatten(&[
            node("A", vec![]),
            node("B", vec![node("C", vec![node("D", vec![])])]),
        ]);
        let result = apply_drop(&items, "B", Some("B"), 24, &config()).unwrap();
        assert_eq!(item(&result, "B").parent_id.as_deref(), Some("A"));
        assert_eq!(item(&result, "B").depth, 1);
        assert_eq!(item(&result, "C").depth, 2);
        assert_eq!(item(&result, "D").depth, 3);
        // Parent links inside the subtree are untouched
        assert_eq!(item(&result, "C").parent_id.as_deref(), Some("B"));
        assert_eq!(item(&result, "D").parent_id.as_deref(), Some("C"));
    }

    #[test]
    fn projected_depth_never_goes_negative() {
        let items = flatten(&[node("A", vec![]), node("B", vec![])]);
        let result = apply_drop(&items, "B", Some("B"), -200, &config()).unwrap();
        assert_eq!(item(&result, "B").depth, 0);
        assert_eq!(ids(&result), vec!["A", "B"]);
    }

    // --- Outdenting ---

    #[test]
    fn outdent_lands_after_original_parent() {
        let items = flatten(&[node("A", vec![node("B", vec![node("C", vec![])])])]);
        let result = apply_drop(&items, "C", Some("C"), -24, &config()).unwrap();
        assert_eq!(ids(&result), vec!["A", "B", "C"]);
        assert_eq!(item(&result, "C").parent_id.as_deref(), Some("A"));
        assert_eq!(item(&result, "C").depth, 1);
    }

    #[test]
    fn outdent_to_top_level() {
        let items = flatten(&[node("A", vec![node("B", vec![])]), node("E", vec![])]);
        let result = apply_drop(&items, "B", Some("B"), -24, &config()).unwrap();
        assert_eq!(item(&result, "B").parent_id, None);
        assert_eq!(item(&result, "B").depth, 0);
        assert_eq!(ids(&result), vec!["A", "B", "E"]);
    }

    #[test]
    fn outdent_carries_subtree() {
        let items = flatten(&[node("A", vec![node("B", vec![node("C", vec![])])])]);
        let result = apply_drop(&items, "B", Some("B"), -24, &config()).unwrap();
        assert_eq!(item(&result, "B").parent_id, None);
        assert_eq!(item(&result, "B").depth, 0);
        assert_eq!(item(&result, "C").parent_id.as_deref(), Some("B"));
        assert_eq!(item(&result, "C").depth, 1);
        assert_eq!(ids(&result), vec!["A", "B", "C"]);
    }

    // --- Depth cap ---

    #[test]
    fn cap_rejects_indent_that_pushes_descendants_too_deep() {
        let mut cfg = config();
        cfg.max_depth = 2;
        // C has a child D at depth 1; indenting C to depth 2 would push D
        // to 3
        let items = flatten(&[
            node("A", vec![node("B", vec![])]),
            node("C", vec![node("D", vec![])]),
        ]);
        let result = apply_drop(&items, "C", Some("C"), 48, &cfg).unwrap();
        assert_eq!(result, items);
    }

    #[test]
    fn cap_allows_indent_exactly_at_limit() {
        let mut cfg = config();
        cfg.max_depth = 3;
        let items = flatten(&[
            node("A", vec![node("B", vec![])]),
            node("C", vec![node("D", vec![])]),
        ]);
        let result = apply_drop(&items, "C", Some("C"), 48, &cfg).unwrap();
        assert_eq!(item(&result, "C").parent_id.as_deref(), Some("B"));
        assert_eq!(item(&result, "C").depth, 2);
        assert_eq!(item(&result, "D").depth, 3);
    }

    #[test]
    fn cap_rejection_keeps_the_positional_move() {
        let mut cfg = config();
        cfg.max_depth = 1;
        // Indenting C under A would push D to depth 2; only the re-parent
        // is discarded, the vertical move to after E still happens
        let items = flatten(&[
            node("A", vec![node("B", vec![])]),
            node("C", vec![node("D", vec![])]),
            node("E", vec![]),
        ]);
        let result = apply_drop(&items, "C", Some("E"), 24, &cfg).unwrap();
        assert_eq!(ids(&result), vec!["A", "B", "E", "C", "D"]);
        assert_eq!(item(&result, "C").parent_id, None);
        assert_eq!(item(&result, "C").depth, 0);
        assert_eq!(item(&result, "D").parent_id.as_deref(), Some("C"));
        assert_eq!(item(&result, "D").depth, 1);
    }

    #[test]
    fn cap_rejects_deep_subtree_at_reference_scale() {
        // The reference scenario: a node with 5 descendants whose deepest
        // sits at depth 95; a six-level indent would reach 101 with the
        // default max_depth of 100.
        fn rail(from: usize) -> Vec<TreeNode> {
            if from > 95 {
                return vec![];
            }
            vec![node(&format!("r{from}"), rail(from + 1))]
        }
        let mut roots = rail(0);

        // X (with chain X1..X5 below it) becomes r89's second child, so in
        // pre-order it lands right after r95 at depth 90 with its deepest
        // descendant X5 at 95.
        let mut x = node("X5", vec![]);
        for id in ["X4", "X3", "X2", "X1", "X"] {
            x = node(id, vec![x]);
        }
        let mut cursor = &mut roots[0];
        for _ in 0..89 {
            cursor = &mut cursor.children[0];
        }
        assert_eq!(cursor.id, "r89");
        cursor.children.push(x);

        let items = flatten(&roots);
        assert_eq!(item(&items, "X").depth, 90);
        assert_eq!(item(&items, "X5").depth, 95);

        let result = apply_drop(&items, "X", Some("X"), 6 * 24, &config()).unwrap();
        assert_eq!(result, items);
    }

    // --- Rounding ---

    #[test]
    fn offset_rounding_matches_pointer_ties() {
        let items = flatten(&[node("A", vec![]), node("B", vec![])]);
        // Exactly half a unit rightward rounds toward the deeper level
        let result = apply_drop(&items, "B", Some("B"), 12, &config()).unwrap();
        assert_eq!(item(&result, "B").depth, 1);
        // Exactly half a unit leftward rounds back to no change
        let items = flatten(&[node("A", vec![node("B", vec![])])]);
        let result = apply_drop(&items, "B", Some("B"), -12, &config()).unwrap();
        assert_eq!(item(&result, "B").depth, 1);
    }

    #[test]
    fn sub_threshold_offset_is_a_pure_reorder() {
        let items = flatten(&[node("A", vec![]), node("B", vec![])]);
        let result = apply_drop(&items, "B", Some("B"), 11, &config()).unwrap();
        assert_eq!(result, items);
    }

    // --- Failure policy ---

    #[test]
    fn missing_target_aborts() {
        let items = flatten(&[node("A", vec![]), node("B", vec![])]);
        assert!(matches!(
            apply_drop(&items, "A", None, 0, &config()),
            Err(DropError::NoDropTarget)
        ));
    }

    #[test]
    fn drop_onto_own_descendant_aborts() {
        let items = flatten(&[node("A", vec![node("B", vec![])]), node("E", vec![])]);
        assert!(matches!(
            apply_drop(&items, "A", Some("B"), 24, &config()),
            Err(DropError::DropOntoDescendant { .. })
        ));
        // Deeper descendants abort too
        let items = flatten(&[node("A", vec![node("B", vec![node("C", vec![])])])]);
        assert!(matches!(
            apply_drop(&items, "A", Some("C"), 0, &config()),
            Err(DropError::DropOntoDescendant { .. })
        ));
    }

    #[test]
    fn indent_past_own_subtree_never_self_parents() {
        // Moving C (with child D) down over E while indenting: the parent
        // scan must skip the moving block, not pick C for itself
        let items = flatten(&[
            node("A", vec![]),
            node("C", vec![node("D", vec![])]),
            node("E", vec![]),
        ]);
        let result = apply_drop(&items, "C", Some("E"), 24, &config()).unwrap();
        assert_eq!(item(&result, "C").parent_id.as_deref(), Some("A"));
        assert_eq!(item(&result, "C").depth, 1);
        assert_eq!(item(&result, "D").depth, 2);
    }

    #[test]
    fn unknown_ids_abort() {
        let items = flatten(&[node("A", vec![]), node("B", vec![])]);
        assert!(matches!(
            apply_drop(&items, "ghost", Some("B"), 0, &config()),
            Err(DropError::UnknownItem(_))
        ));
        assert!(matches!(
            apply_drop(&items, "A", Some("ghost"), 0, &config()),
            Err(DropError::UnknownItem(_))
        ));
    }

    // --- Consistency with normalization ---

    #[test]
    fn result_survives_normalization_unchanged() {
        let items = flatten(&[
            node("A", vec![node("B", vec![])]),
            node("C", vec![node("D", vec![])]),
        ]);
        let result = apply_drop(&items, "C", Some("C"), 48, &{
            let mut c = config();
            c.max_depth = 5;
            c
        })
        .unwrap();
        assert_eq!(normalize(&result), result);
    }
}

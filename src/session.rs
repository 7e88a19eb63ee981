use crate::model::{FlatItem, ListConfig};
use crate::ops::query::{descendant_ids, find_item, find_item_mut};
use crate::ops::reorder::apply_drop;
use crate::ops::tree::normalize;

/// Events emitted by the drag-sensing collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// An item was picked up
    Start { active_id: String },
    /// The pointer moved; `delta_x` is the total signed horizontal
    /// distance from the drag origin, not an increment
    Move { delta_x: i32 },
    /// The item was released, over a droppable row or outside all of them
    End { over_id: Option<String> },
    /// The drag was abandoned
    Cancel,
}

/// Owns the committed flat sequence plus the in-flight drag state, and
/// feeds drag events through the reconciliation engine.
///
/// Single-threaded by design: events are handled strictly in arrival
/// order, move events only record the latest offset, and only an `End`
/// commits a structural change. Everything a renderer needs is exposed
/// read-only: the sequence itself, the ids hidden mid-drag, and the
/// floating preview's indentation.
pub struct Session {
    items: Vec<FlatItem>,
    config: ListConfig,
    active_id: Option<String>,
    drag_offset: i32,
}

impl Session {
    /// Seed data may carry stale parent links or depths; normalize once on
    /// the way in so every later operation starts from a consistent
    /// sequence.
    pub fn new(items: Vec<FlatItem>, config: ListConfig) -> Self {
        Session {
            items: normalize(&items),
            config,
            active_id: None,
            drag_offset: 0,
        }
    }

    pub fn items(&self) -> &[FlatItem] {
        &self.items
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active_id.is_some()
    }

    pub fn drag_offset(&self) -> i32 {
        self.drag_offset
    }

    pub fn handle_event(&mut self, event: DragEvent) {
        match event {
            DragEvent::Start { active_id } => {
                // Unknown ids never start a drag
                if find_item(&self.items, &active_id).is_some() {
                    self.active_id = Some(active_id);
                    self.drag_offset = 0;
                }
            }
            DragEvent::Move { delta_x } => {
                // Latest offset wins; moves never touch the sequence
                if self.active_id.is_some() {
                    self.drag_offset = delta_x;
                }
            }
            DragEvent::End { over_id } => {
                if let Some(active_id) = self.active_id.take() {
                    let offset = std::mem::take(&mut self.drag_offset);
                    // A failed drop (no target, vanished ids, a target
                    // inside the moving subtree) is a no-op transaction;
                    // the committed sequence stays as-is
                    if let Ok(next) =
                        apply_drop(&self.items, &active_id, over_id.as_deref(), offset, &self.config)
                    {
                        self.items = next;
                    }
                    self.settle();
                }
            }
            DragEvent::Cancel => {
                self.active_id = None;
                self.drag_offset = 0;
                self.settle();
            }
        }
    }

    /// Rebuild-on-settle: once no item is being dragged, the interim
    /// arithmetic's parent/depth fields are treated as provisional and
    /// re-derived canonically from nesting order. Idempotent.
    fn settle(&mut self) {
        self.items = normalize(&self.items);
    }

    /// Ids hidden while a drag is in flight — the dragged subtree renders
    /// once, in the floating preview, not inline.
    pub fn hidden_ids(&self) -> Vec<String> {
        match &self.active_id {
            Some(id) => descendant_ids(&self.items, id),
            None => Vec::new(),
        }
    }

    /// The dragged item and its preview indentation in pixels
    /// (`depth * indent_unit + offset`).
    pub fn drag_preview(&self) -> Option<(&FlatItem, i32)> {
        let id = self.active_id.as_deref()?;
        let item = find_item(&self.items, id)?;
        let indent = item.depth as i32 * self.config.indent_unit as i32 + self.drag_offset;
        Some((item, indent))
    }

    /// Toggle an item's checkbox. Returns false for unknown ids.
    pub fn toggle_checked(&mut self, id: &str) -> bool {
        match find_item_mut(&mut self.items, id) {
            Some(item) => {
                item.is_checked = !item.is_checked;
                true
            }
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use crossterm::event::{KeyCode, KeyEvent};

use crate::session::DragEvent;

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Drag => handle_drag(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.cursor = app.cursor.saturating_add(1);
            app.clamp_cursor();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.cursor = 0;
        }
        KeyCode::Char('G') => {
            app.cursor = usize::MAX;
            app.clamp_cursor();
        }
        KeyCode::Char(' ') => {
            if let Some(id) = app.cursor_item_id() {
                app.session.toggle_checked(&id);
            }
        }
        KeyCode::Char('m') => {
            // Pick up the item under the cursor
            if let Some(id) = app.cursor_item_id() {
                app.session.handle_event(DragEvent::Start { active_id: id.clone() });
                if app.session.is_dragging() {
                    app.mode = Mode::Drag;
                    // Descendants just folded away; re-find the row
                    app.move_cursor_to(&id);
                }
            }
        }
        _ => {}
    }
}

fn handle_drag(app: &mut App, key: KeyEvent) {
    let indent = app.session.config().indent_unit as i32;
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.cursor = app.cursor.saturating_add(1);
            app.clamp_cursor();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.session.handle_event(DragEvent::Move {
                delta_x: app.session.drag_offset() - indent,
            });
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.session.handle_event(DragEvent::Move {
                delta_x: app.session.drag_offset() + indent,
            });
        }
        KeyCode::Enter | KeyCode::Char('m') => {
            // Drop onto the cursor row
            let active = app.session.active_id().map(str::to_string);
            let over_id = app.cursor_item_id();
            app.session.handle_event(DragEvent::End { over_id });
            app.mode = Mode::Navigate;
            if let Some(id) = active {
                app.move_cursor_to(&id);
            }
        }
        KeyCode::Esc => {
            let active = app.session.active_id().map(str::to_string);
            app.session.handle_event(DragEvent::Cancel);
            app.mode = Mode::Navigate;
            if let Some(id) = active {
                app.move_cursor_to(&id);
            }
        }
        _ => {}
    }
}

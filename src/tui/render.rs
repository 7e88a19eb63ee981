use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;

use super::app::{App, Mode};

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title | list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_status(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let count = app.session.items().len();
    let line = Line::from(vec![
        Span::styled(
            " sprig",
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} items", count),
            Style::default().fg(app.theme.dim),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme.background)),
        area,
    );
}

fn render_list(frame: &mut Frame, app: &mut App, area: ratatui::layout::Rect) {
    let visible_height = area.height as usize;

    // Clamp cursor and scroll before borrowing rows for rendering
    app.clamp_cursor();
    let row_count = app.visible_items().len();
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor.saturating_sub(visible_height - 1);
    }
    let scroll = app.scroll_offset.min(row_count.saturating_sub(1));

    let dragging = app.mode == Mode::Drag;
    let active_id = app.session.active_id().map(str::to_string);
    let preview_cols = app.session.drag_preview().map(|(_, px)| {
        let unit = app.session.config().indent_unit.max(1) as usize;
        (px.max(0) as usize * 2) / unit
    });

    let visible = app.visible_items();
    let end = visible.len().min(scroll + visible_height);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);

    for (row, item) in (scroll..end).zip(visible[scroll..end].iter()) {
        let is_cursor = row == app.cursor;
        let is_active = dragging && active_id.as_deref() == Some(item.id.as_str());

        // The dragged row floats: its indentation comes from the preview
        // offset, not its committed depth
        let indent_cols = if is_active {
            preview_cols.unwrap_or(item.depth * 2)
        } else {
            item.depth * 2
        };

        let row_bg = if is_active {
            app.theme.preview_bg
        } else if is_cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };

        let marker = if is_active {
            "⇅ "
        } else if is_cursor && dragging {
            "▸ "
        } else if is_cursor {
            "› "
        } else {
            "  "
        };

        let checkbox_color = if item.is_checked {
            app.theme.tag_color(&item.color)
        } else {
            app.theme.checkbox_off
        };
        let checkbox = if item.is_checked { "[x]" } else { "[ ]" };

        let label_style = if is_cursor || is_active {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let used = 2 + indent_cols + 4; // marker + indent + checkbox + space
        let label = truncate_to_width(&item.label, (area.width as usize).saturating_sub(used));

        lines.push(Line::from(vec![
            Span::styled(
                marker,
                Style::default().fg(app.theme.selection_marker).bg(row_bg),
            ),
            Span::styled(" ".repeat(indent_cols), Style::default().bg(row_bg)),
            Span::styled(checkbox, Style::default().fg(checkbox_color).bg(row_bg)),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(label, label_style),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}

fn render_status(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let hint = match app.mode {
        Mode::Navigate => " j/k move · space toggle · m pick up · q quit".to_string(),
        Mode::Drag => {
            let unit = app.session.config().indent_unit.max(1) as i32;
            let levels = app.session.drag_offset() / unit;
            format!(
                " j/k choose target · h/l indent ({:+}) · enter drop · esc cancel",
                levels
            )
        }
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(app.theme.dim).bg(app.theme.background)),
        area,
    );
}

/// Cut a label to the given display width (unicode-aware)
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

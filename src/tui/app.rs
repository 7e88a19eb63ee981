use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{FlatItem, ListConfig, TreeNode};
use crate::ops::tree::flatten;
use crate::session::Session;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// An item is picked up; the cursor row is the drop target
    Drag,
}

/// Main application state
pub struct App {
    pub session: Session,
    pub theme: Theme,
    pub mode: Mode,
    /// Cursor index into the visible rows
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(tree: Vec<TreeNode>, config: ListConfig) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            session: Session::new(flatten(&tree), config),
            theme,
            mode: Mode::Navigate,
            cursor: 0,
            scroll_offset: 0,
            should_quit: false,
        }
    }

    /// Rows currently on screen. During a drag the dragged item's
    /// descendants are hidden — they travel inside the floating preview —
    /// while the active row itself stays in place as the drop slot.
    pub fn visible_items(&self) -> Vec<&FlatItem> {
        let hidden = self.session.hidden_ids();
        self.session
            .items()
            .iter()
            .filter(|item| !hidden.contains(&item.id))
            .collect()
    }

    /// Id of the item under the cursor
    pub fn cursor_item_id(&self) -> Option<String> {
        self.visible_items().get(self.cursor).map(|item| item.id.clone())
    }

    /// Put the cursor on the row showing `id`, if it is visible
    pub fn move_cursor_to(&mut self, id: &str) {
        if let Some(idx) = self.visible_items().iter().position(|item| item.id == id) {
            self.cursor = idx;
        }
        self.clamp_cursor();
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

/// Run the TUI application
pub fn run(tree: Vec<TreeNode>, config: ListConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(tree, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

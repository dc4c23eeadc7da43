//! Interactive dashboard application and main loop.

use super::{dashboard, events, Theme, View};
use crate::config::Config;
use crate::services::{build_snapshot, MarketDataService};
use crate::types::MarketSnapshot;
use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::{io, sync::Arc, time::Duration};
use tracing::warn;

/// Longest symbol the input line accepts, suffix included.
const MAX_INPUT_LEN: usize = 12;

/// Work the event loop must perform outside the handler.
enum Action {
    Fetch(String),
}

/// Dashboard state: the typed symbol, the last snapshot, and view toggles.
pub struct App {
    config: Config,
    market: Arc<MarketDataService>,
    /// Symbol entry buffer.
    input: String,
    /// Last successful snapshot; kept on fetch errors.
    snapshot: Option<MarketSnapshot>,
    /// Status line message and whether it reports an error.
    status: String,
    status_is_error: bool,
    view: View,
    show_bands: bool,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Create a new TUI application.
    pub fn new(config: Config, market: Arc<MarketDataService>) -> Self {
        let input = config.default_symbol.clone();
        Self {
            config,
            market,
            input,
            snapshot: None,
            status: String::new(),
            status_is_error: false,
            view: View::Intraday,
            show_bands: false,
            theme: Theme::default(),
            should_quit: false,
        }
    }

    /// Handle an event; returns follow-up work for the outer loop.
    fn handle_event(&mut self, event: events::Event) -> Option<Action> {
        match event {
            events::Event::Key(key) => self.handle_key(&key),
            events::Event::Tick => None,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<Action> {
        if events::is_quit(key) {
            self.should_quit = true;
            return None;
        }
        if events::is_ctrl(key, 'b') {
            self.show_bands = !self.show_bands;
            return None;
        }
        if events::is_key(key, KeyCode::Tab) {
            self.view = self.view.toggled();
            return None;
        }
        if events::is_key(key, KeyCode::Backspace) {
            self.input.pop();
            return None;
        }
        if events::is_key(key, KeyCode::Enter) {
            let symbol = if self.input.trim().is_empty() {
                self.config.default_symbol.clone()
            } else {
                self.input.trim().to_string()
            };
            return Some(Action::Fetch(symbol));
        }
        if let KeyCode::Char(c) = key.code {
            if (c.is_ascii_alphanumeric() || c == '.') && self.input.len() < MAX_INPUT_LEN {
                self.input.push(c.to_ascii_uppercase());
            }
        }
        None
    }

    /// Fetch and recompute for `symbol`, updating status either way.
    async fn fetch(&mut self, symbol: &str) {
        match build_snapshot(&self.market, &self.config, symbol).await {
            Ok(snapshot) => {
                self.status = format!("{} loaded", snapshot.instrument);
                self.status_is_error = false;
                self.snapshot = Some(snapshot);
            }
            Err(err) => {
                warn!("Fetch failed for {}: {}", symbol, err);
                self.status = err.to_string();
                self.status_is_error = true;
            }
        }
    }

    fn set_fetching(&mut self, symbol: &str) {
        self.status = format!("Fetching {}...", symbol);
        self.status_is_error = false;
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render the TUI.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Symbol input
                Constraint::Min(0),    // Dashboard
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        self.render_input(frame, chunks[0]);
        dashboard::render(
            frame,
            chunks[1],
            self.snapshot.as_ref(),
            self.view,
            self.show_bands,
            &self.theme,
        );
        self.render_status_bar(frame, chunks[2]);
    }

    /// Render the symbol entry line.
    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let text = Line::from(vec![
            Span::styled("Symbol: ", self.theme.muted()),
            Span::styled(&self.input, self.theme.title()),
            Span::styled("▏", self.theme.muted()),
            Span::raw("   "),
            Span::styled(format!("view: {}", self.view.name()), self.theme.muted()),
            Span::styled(
                if self.show_bands { "  bands: on" } else { "  bands: off" },
                self.theme.muted(),
            ),
        ]);
        let block = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" CDP Pivot Watch ")
                .border_style(self.theme.border()),
        );
        frame.render_widget(block, area);
    }

    /// Render status bar.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status_style = if self.status_is_error {
            self.theme.error()
        } else {
            self.theme.muted()
        };
        let text = Line::from(vec![
            Span::styled(&self.status, status_style),
            Span::raw(if self.status.is_empty() { "" } else { " | " }),
            Span::styled("Enter", self.theme.muted()),
            Span::raw(" fetch | "),
            Span::styled("Tab", self.theme.muted()),
            Span::raw(" view | "),
            Span::styled("Ctrl+B", self.theme.muted()),
            Span::raw(" bands | "),
            Span::styled("Esc", self.theme.muted()),
            Span::raw(" quit"),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border());

        frame.render_widget(block, area);

        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: 1,
        };

        frame.render_widget(Paragraph::new(text), inner);
    }
}

/// Run the TUI application.
pub async fn run_tui(config: Config, market: Arc<MarketDataService>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and event handler
    let mut app = App::new(config, market);
    let mut event_handler = events::EventHandler::new(Duration::from_millis(250));

    // Load the default symbol before the first frame
    let initial = app.config.default_symbol.clone();
    app.set_fetching(&initial);
    terminal.draw(|f| app.render(f))?;
    app.fetch(&initial).await;

    // Main loop
    loop {
        // Render
        terminal.draw(|f| app.render(f))?;

        // Handle events; a closed pump means the terminal is gone
        let Some(event) = event_handler.next().await else {
            break;
        };
        if let Some(Action::Fetch(symbol)) = app.handle_event(event) {
            app.set_fetching(&symbol);
            terminal.draw(|f| app.render(f))?;
            app.fetch(&symbol).await;
        }

        // Check if should quit
        if app.should_quit() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

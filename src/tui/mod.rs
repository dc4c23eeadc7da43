//! Terminal dashboard for a single symbol.

mod app;
mod dashboard;
mod events;
mod theme;

pub use app::{run_tui, App};
pub use theme::Theme;

/// Which price series the chart panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Daily,
    Intraday,
}

impl View {
    pub fn name(&self) -> &str {
        match self {
            Self::Daily => "Daily",
            Self::Intraday => "Intraday",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Daily => Self::Intraday,
            Self::Intraday => Self::Daily,
        }
    }
}

//! Pivotwatch - CDP pivot point dashboard core for Taiwan equities.
//!
//! Fetches daily and intraday OHLCV history for a TWSE/TPEx ticker,
//! derives the five CDP levels from the last completed session, and
//! decorates them with a Bollinger envelope, a range-projection breakout
//! target, and moving-average deduction points. The terminal dashboard in
//! [`tui`] is one consumer; the library works headless as well.

pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod tui;
pub mod types;

// Re-export commonly used items
pub use config::Config;
pub use error::{AppError, Result};
pub use services::{build_snapshot, Cache, MarketDataService, MARKET_SUFFIXES};
pub use sources::{HistoryProvider, YahooChartClient};
pub use types::*;

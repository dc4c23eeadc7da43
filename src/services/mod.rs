//! Core services: fetch-and-memoize market data plus the pure computation
//! passes that turn a price series into dashboard values.

pub mod cache;
pub mod indicators;
pub mod market_data;
pub mod pivots;
pub mod snapshot;

pub use cache::Cache;
pub use market_data::{MarketDataService, MARKET_SUFFIXES};
pub use snapshot::build_snapshot;

//! Derived-series indicators computed over a [`PriceSeries`](crate::types::PriceSeries).
//!
//! Everything here is pure: no I/O, no shared state. Series too short for
//! an indicator's window yield an empty result or `None`, never an error.

pub mod bollinger;
pub mod breakout;

pub use bollinger::{compute_bands, BOLLINGER_MULTIPLIER, BOLLINGER_WINDOW};
pub use breakout::{
    breakout_target, deduction_point, deduction_points, BREAKOUT_MULTIPLIER, BREAKOUT_WINDOW,
    DEDUCTION_OFFSETS,
};

//! Pure analytics routines.
//!
//! Reduction functions with no state of their own; the portfolio layer
//! feeds them and interprets their results.

pub mod cvar;

pub use cvar::{conditional_value_at_risk, weighted_return_series};

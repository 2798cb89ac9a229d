//! Portfolio state and portal-backed analytics.
//!
//! - [`portfolio`]: aggregate valuation state and the weighting property
//! - [`risk`]: the data-portal extension and expected shortfall

#[allow(clippy::module_inception)]
pub mod portfolio;
pub mod risk;

pub use portfolio::Portfolio;
pub use risk::{RiskPortfolio, CVAR_CUTOFF, CVAR_LOOKBACK_DAYS, TRADING_DAYS_PER_YEAR};

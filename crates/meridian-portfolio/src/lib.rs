//! # Meridian Portfolio
//!
//! Simulated account state and tail-risk analytics for the Meridian
//! backtest engine.
//!
//! This crate models the financial state of a trading account as a
//! simulation runs — cash, open positions, broker account metrics — and
//! derives two analytics from that state:
//!
//! - **Portfolio weights**: each asset's held market value (contract
//!   multiplier included) as a fraction of total portfolio value
//! - **Expected shortfall**: historical CVaR of the portfolio's daily
//!   returns at a 5% cutoff over up to two trading years, with benchmark
//!   substitution for recently listed equities and continuous-series
//!   resolution for futures contracts
//!
//! ## Design Philosophy
//!
//! - **State is driven from outside**: the simulation driver mutates
//!   [`Portfolio`] and [`Position`] fields between analytics reads; this
//!   crate never locks and assumes reads and writes do not overlap
//! - **Data access is injected**: expected shortfall reaches history,
//!   calendar, and asset metadata only through the
//!   [`DataPortal`](meridian_core::DataPortal) contract
//! - **Legacy paths stay visible**: bracket-style field lookups and raw-sid
//!   position lookups still work, warn on the `tracing` channel, and are
//!   frozen — see [`fields`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meridian_portfolio::prelude::*;
//!
//! let mut risk = RiskPortfolio::new(portal).with_benchmark(spy);
//! risk.portfolio.start_date = Some(start);
//! risk.set_current_date(today);
//!
//! let weights = risk.portfolio.current_portfolio_weights();
//! match risk.expected_shortfall()? {
//!     Some(es) => println!("CVaR(5%): {es:.4}"),
//!     None => println!("under one year of history"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod analytics;
pub mod error;
pub mod fields;
pub mod portfolio;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use fields::{DeprecatedFields, FieldValue};
pub use portfolio::{
    Portfolio, RiskPortfolio, CVAR_CUTOFF, CVAR_LOOKBACK_DAYS, TRADING_DAYS_PER_YEAR,
};
pub use types::{Account, LegacySidPosition, Position, PositionBook, PositionEntry, PositionKey};

// Re-export analytics functions
pub use analytics::{conditional_value_at_risk, weighted_return_series};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use meridian_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analytics::{conditional_value_at_risk, weighted_return_series};
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::fields::{DeprecatedFields, FieldValue};
    pub use crate::portfolio::{
        Portfolio, RiskPortfolio, CVAR_CUTOFF, CVAR_LOOKBACK_DAYS, TRADING_DAYS_PER_YEAR,
    };
    pub use crate::types::{
        Account, LegacySidPosition, Position, PositionBook, PositionEntry, PositionKey,
    };

    // Re-export commonly used types from the core crate
    pub use meridian_core::prelude::*;
}

//! # Meridian Core
//!
//! Core types and collaborator contracts for the Meridian backtest
//! analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Meridian:
//!
//! - **Asset model**: [`Asset`], [`Equity`], [`FuturesContract`], and the
//!   [`ContinuousFuture`] handle used for derivative price histories
//! - **Contract chains**: [`OrderedContracts`] with roll-offset inference
//! - **History windows**: [`HistoryWindow`], a date-indexed price table
//!   with simple-return math
//! - **Traits**: the [`TradingCalendar`], [`AssetFinder`], and
//!   [`DataPortal`] seams behind which calendar arithmetic, asset metadata,
//!   and price storage live
//!
//! ## Design Philosophy
//!
//! - **Pure contracts**: this crate does no I/O; data access is injected
//!   through the traits by the owning simulation
//! - **Explicit over implicit**: asset kind dispatch is an exhaustive
//!   `match` on a two-variant union, never runtime downcasting
//! - **Synchronous**: every contract call is a plain blocking call; the
//!   consuming analytics layer never suspends
//!
//! ## Example
//!
//! ```rust
//! use meridian_core::{Asset, Equity};
//! use chrono::NaiveDate;
//!
//! let asset = Asset::Equity(Equity::new(
//!     1,
//!     "AAPL",
//!     NaiveDate::from_ymd_opt(2010, 1, 4).unwrap(),
//! ));
//! assert_eq!(asset.multiplier(), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export error types at crate root
pub use error::{MeridianError, MeridianResult};

// Re-export main types
pub use types::{
    Adjustment, Asset, BarFrequency, ContinuousFuture, ContractEntry, DataFrequency, Equity,
    FuturesContract, HistoryAsset, HistoryWindow, OrderedContracts, PriceField, RollStyle, Sid,
};

// Re-export collaborator contracts
pub use traits::{AssetFinder, DataPortal, TradingCalendar};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MeridianError, MeridianResult};
    pub use crate::traits::{AssetFinder, DataPortal, TradingCalendar};
    pub use crate::types::{
        Adjustment, Asset, BarFrequency, ContinuousFuture, DataFrequency, Equity, FuturesContract,
        HistoryAsset, HistoryWindow, OrderedContracts, PriceField, RollStyle, Sid,
    };
}

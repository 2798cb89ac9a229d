//! Core domain types.
//!
//! - [`asset`]: equities, futures contracts, continuous futures, and
//!   ordered contract chains
//! - [`history`]: history-window tables and bar/field enumerations

pub mod asset;
pub mod history;

pub use asset::{
    Adjustment, Asset, ContinuousFuture, ContractEntry, Equity, FuturesContract, HistoryAsset,
    OrderedContracts, RollStyle, Sid,
};
pub use history::{BarFrequency, DataFrequency, HistoryWindow, PriceField};

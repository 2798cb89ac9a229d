//! Error types for the Meridian core library.
//!
//! This module defines the error types raised by the asset model and by
//! implementations of the data-collaborator contracts.

use chrono::NaiveDate;
use thiserror::Error;

/// A specialized Result type for Meridian core operations.
pub type MeridianResult<T> = Result<T, MeridianError>;

/// The main error type for Meridian core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeridianError {
    /// No futures chain exists for the requested root symbol.
    #[error("Unknown futures root symbol: {root_symbol}")]
    UnknownRootSymbol {
        /// The unrecognized root symbol.
        root_symbol: String,
    },

    /// The contract is not a member of its root's ordered chain.
    #[error("Contract sid {sid} is not in the '{root_symbol}' chain")]
    UnknownContract {
        /// The root symbol whose chain was searched.
        root_symbol: String,
        /// The sid that was not found.
        sid: u64,
    },

    /// Every contract in the chain has already auto-closed.
    #[error("No active contract in the '{root_symbol}' chain as of {as_of}")]
    NoActiveContract {
        /// The root symbol whose chain was searched.
        root_symbol: String,
        /// The as-of date of the query.
        as_of: NaiveDate,
    },

    /// The contract auto-closed before the as-of date, so it has no
    /// forward roll offset.
    #[error("Contract sid {sid} in the '{root_symbol}' chain rolled past before {as_of}")]
    ContractRolledPast {
        /// The root symbol whose chain was searched.
        root_symbol: String,
        /// The sid of the expired contract.
        sid: u64,
        /// The as-of date of the query.
        as_of: NaiveDate,
    },

    /// Price history could not be supplied for a requested asset.
    #[error("History unavailable for {symbol}: {reason}")]
    HistoryUnavailable {
        /// Symbol of the asset whose history was requested.
        symbol: String,
        /// Description of what was missing.
        reason: String,
    },

    /// A history window's dimensions are inconsistent.
    #[error("Malformed history window: {reason}")]
    MalformedWindow {
        /// Description of the shape violation.
        reason: String,
    },

    /// Error in date arithmetic or an invalid date range.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl MeridianError {
    /// Create an unknown root symbol error.
    #[must_use]
    pub fn unknown_root(root_symbol: impl Into<String>) -> Self {
        Self::UnknownRootSymbol {
            root_symbol: root_symbol.into(),
        }
    }

    /// Create a history unavailable error.
    #[must_use]
    pub fn history_unavailable(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::HistoryUnavailable {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed window error.
    #[must_use]
    pub fn malformed_window(reason: impl Into<String>) -> Self {
        Self::MalformedWindow {
            reason: reason.into(),
        }
    }

    /// Create an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}

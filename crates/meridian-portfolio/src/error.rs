//! Error types for portfolio state and analytics.

use meridian_core::MeridianError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Bracket-style lookup named a field outside the record's frozen set.
    #[error("No field {field:?} on {record}")]
    UnknownField {
        /// The record kind that was accessed.
        record: &'static str,
        /// The unrecognized field name.
        field: String,
    },

    /// An analytics property was read before its as-of dates were set.
    #[error("Missing {field}; analytics require both start and current dates")]
    MissingAsOfDate {
        /// Which date was missing (`start_date` or `current_date`).
        field: &'static str,
    },

    /// The external data layer failed to resolve an asset or a history
    /// window.
    #[error("Data access failed: {0}")]
    DataAccess(#[from] MeridianError),

    /// Calculation failed.
    #[error("Calculation failed: {reason}")]
    CalculationFailed {
        /// The reason the calculation failed.
        reason: String,
    },
}

impl PortfolioError {
    /// Create an unknown field error.
    #[must_use]
    pub fn unknown_field(record: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            record,
            field: field.into(),
        }
    }

    /// Create a calculation failed error.
    #[must_use]
    pub fn calculation_failed(reason: impl Into<String>) -> Self {
        Self::CalculationFailed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::unknown_field("portfolio", "not_a_field");
        assert!(err.to_string().contains("not_a_field"));
        assert!(err.to_string().contains("portfolio"));

        let err = PortfolioError::MissingAsOfDate {
            field: "current_date",
        };
        assert!(err.to_string().contains("current_date"));
    }

    #[test]
    fn test_data_access_conversion() {
        let core_err = MeridianError::unknown_root("CL");
        let err = PortfolioError::from(core_err);
        assert!(matches!(
            err,
            PortfolioError::DataAccess(MeridianError::UnknownRootSymbol { .. })
        ));
    }
}

//! History-window tables and bar enumerations.
//!
//! A [`HistoryWindow`] is the table returned by a data portal for a
//! trailing price query: one row per session, one column per requested
//! asset. The analytics layer reduces it to simple daily returns; it never
//! mutates it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MeridianError, MeridianResult};
use crate::types::asset::HistoryAsset;

/// Bar frequency of a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarFrequency {
    /// One bar per session.
    Daily,
    /// One bar per minute.
    Minute,
}

/// Frequency at which the underlying data was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataFrequency {
    /// Daily bars.
    Daily,
    /// Minute bars.
    Minute,
}

/// Bar field of a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceField {
    /// Last traded / closing price, forward-filled by the portal.
    Price,
    /// Open price.
    Open,
    /// High price.
    High,
    /// Low price.
    Low,
    /// Close price without forward fill.
    Close,
    /// Traded volume.
    Volume,
}

/// A date-indexed price table: one row per session, one column per asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryWindow {
    dates: Vec<NaiveDate>,
    assets: Vec<HistoryAsset>,
    /// Row-major: `rows[r][c]` is the price of `assets[c]` on `dates[r]`.
    rows: Vec<Vec<f64>>,
}

impl HistoryWindow {
    /// Creates a window, validating that the table is rectangular.
    ///
    /// # Errors
    ///
    /// Returns [`MeridianError::MalformedWindow`] if row and date counts
    /// disagree or any row's width differs from the asset count.
    pub fn new(
        dates: Vec<NaiveDate>,
        assets: Vec<HistoryAsset>,
        rows: Vec<Vec<f64>>,
    ) -> MeridianResult<Self> {
        if rows.len() != dates.len() {
            return Err(MeridianError::malformed_window(format!(
                "{} rows for {} dates",
                rows.len(),
                dates.len()
            )));
        }
        if let Some(row) = rows.iter().find(|row| row.len() != assets.len()) {
            return Err(MeridianError::malformed_window(format!(
                "row of width {} for {} assets",
                row.len(),
                assets.len()
            )));
        }
        Ok(Self {
            dates,
            assets,
            rows,
        })
    }

    /// Returns the session index of the window.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the assets, in column order.
    #[must_use]
    pub fn assets(&self) -> &[HistoryAsset] {
        &self.assets
    }

    /// Returns the number of rows (sessions).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the window holds no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the price rows, oldest session first.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Converts prices to simple daily percentage returns, column-wise.
    ///
    /// The first row has no prior session and is defined as zero; any
    /// non-finite ratio (an artifact of undefined prior data) is likewise
    /// mapped to zero so it contributes nothing to a weighted sum.
    #[must_use]
    pub fn pct_change(&self) -> Vec<Vec<f64>> {
        let mut returns = Vec::with_capacity(self.rows.len());
        for (r, row) in self.rows.iter().enumerate() {
            if r == 0 {
                returns.push(vec![0.0; row.len()]);
                continue;
            }
            let prev = &self.rows[r - 1];
            returns.push(
                row.iter()
                    .zip(prev)
                    .map(|(&p, &p_prev)| {
                        let ret = p / p_prev - 1.0;
                        if ret.is_finite() { ret } else { 0.0 }
                    })
                    .collect(),
            );
        }
        returns
    }
}

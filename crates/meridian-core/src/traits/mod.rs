//! Collaborator contracts for the external data layer.
//!
//! These traits define the seams behind which the owning simulation keeps
//! its calendar arithmetic, asset metadata, and price-history storage:
//!
//! - [`TradingCalendar`]: session counting on the governing calendar
//! - [`AssetFinder`]: futures-chain lookup and continuous-future
//!   construction
//! - [`DataPortal`]: trailing price-history windows, plus access to the
//!   calendar and finder it is backed by
//!
//! Every call is synchronous and potentially slow (a portal may reach into
//! a store); the analytics layer treats them as plain blocking calls and
//! never caches on its own.

use chrono::NaiveDate;

use crate::error::MeridianResult;
use crate::types::{
    Adjustment, BarFrequency, ContinuousFuture, DataFrequency, HistoryAsset, HistoryWindow,
    OrderedContracts, PriceField, RollStyle,
};

/// Session counting on the governing trading calendar.
pub trait TradingCalendar {
    /// Returns the number of sessions between two dates, start inclusive.
    ///
    /// Negative when `end` precedes `start`.
    fn session_distance(&self, start: NaiveDate, end: NaiveDate) -> i64;
}

/// Asset metadata resolution: futures chains and continuous futures.
pub trait AssetFinder {
    /// Returns the ordered contract chain for a futures root symbol.
    ///
    /// # Errors
    ///
    /// Returns [`MeridianError::UnknownRootSymbol`] for an unrecognized
    /// root.
    ///
    /// [`MeridianError::UnknownRootSymbol`]: crate::MeridianError::UnknownRootSymbol
    fn ordered_contracts(&self, root_symbol: &str) -> MeridianResult<OrderedContracts>;

    /// Builds a continuous-future handle for the given chain position.
    ///
    /// # Errors
    ///
    /// Returns [`MeridianError::UnknownRootSymbol`] for an unrecognized
    /// root.
    ///
    /// [`MeridianError::UnknownRootSymbol`]: crate::MeridianError::UnknownRootSymbol
    fn create_continuous_future(
        &self,
        root_symbol: &str,
        offset: u32,
        roll_style: RollStyle,
        adjustment: Adjustment,
    ) -> MeridianResult<ContinuousFuture>;
}

/// Price-history access for a set of assets.
pub trait DataPortal {
    /// Returns the calendar governing this portal's sessions.
    fn trading_calendar(&self) -> &dyn TradingCalendar;

    /// Returns the asset finder backing this portal.
    fn asset_finder(&self) -> &dyn AssetFinder;

    /// Returns a trailing window of `bar_count` bars ending at `end_date`,
    /// one column per requested asset.
    ///
    /// # Errors
    ///
    /// Returns [`MeridianError::HistoryUnavailable`] when data for any
    /// requested asset is missing; gaps must never be silently
    /// zero-filled.
    ///
    /// [`MeridianError::HistoryUnavailable`]: crate::MeridianError::HistoryUnavailable
    fn get_history_window(
        &self,
        assets: &[HistoryAsset],
        end_date: NaiveDate,
        bar_count: usize,
        frequency: BarFrequency,
        field: PriceField,
        data_frequency: DataFrequency,
    ) -> MeridianResult<HistoryWindow>;
}

impl<T: TradingCalendar + ?Sized> TradingCalendar for &T {
    fn session_distance(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        (**self).session_distance(start, end)
    }
}

impl<T: AssetFinder + ?Sized> AssetFinder for &T {
    fn ordered_contracts(&self, root_symbol: &str) -> MeridianResult<OrderedContracts> {
        (**self).ordered_contracts(root_symbol)
    }

    fn create_continuous_future(
        &self,
        root_symbol: &str,
        offset: u32,
        roll_style: RollStyle,
        adjustment: Adjustment,
    ) -> MeridianResult<ContinuousFuture> {
        (**self).create_continuous_future(root_symbol, offset, roll_style, adjustment)
    }
}

impl<T: DataPortal + ?Sized> DataPortal for &T {
    fn trading_calendar(&self) -> &dyn TradingCalendar {
        (**self).trading_calendar()
    }

    fn asset_finder(&self) -> &dyn AssetFinder {
        (**self).asset_finder()
    }

    fn get_history_window(
        &self,
        assets: &[HistoryAsset],
        end_date: NaiveDate,
        bar_count: usize,
        frequency: BarFrequency,
        field: PriceField,
        data_frequency: DataFrequency,
    ) -> MeridianResult<HistoryWindow> {
        (**self).get_history_window(assets, end_date, bar_count, frequency, field, data_frequency)
    }
}

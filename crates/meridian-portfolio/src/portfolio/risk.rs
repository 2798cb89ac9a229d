//! Portal-backed risk analytics over portfolio state.

use chrono::NaiveDate;
use meridian_core::{
    Adjustment, Asset, BarFrequency, DataFrequency, DataPortal, HistoryAsset, PriceField,
    RollStyle,
};
use tracing::debug;

use crate::analytics::{conditional_value_at_risk, weighted_return_series};
use crate::error::{PortfolioError, PortfolioResult};
use crate::portfolio::Portfolio;

/// Sessions in one trading year.
pub const TRADING_DAYS_PER_YEAR: i64 = 252;

/// Maximum expected-shortfall lookback: two trading years.
pub const CVAR_LOOKBACK_DAYS: i64 = TRADING_DAYS_PER_YEAR * 2;

/// Tail cutoff for the expected-shortfall estimate.
pub const CVAR_CUTOFF: f64 = 0.05;

/// A portfolio extended with the analytics that need historical data.
///
/// Owns the same valuation state as [`Portfolio`] plus a data portal for
/// price-history retrieval, an optional benchmark asset used as a proxy
/// for recently listed equities, and the as-of date for analytics. The
/// simulation driver mutates `portfolio` and advances `current_date`
/// between analytics reads; nothing here locks, so reads and writes must
/// not overlap.
#[derive(Debug)]
pub struct RiskPortfolio<P> {
    /// The underlying valuation state.
    pub portfolio: Portfolio,

    portal: P,
    benchmark: Option<Asset>,
    current_date: Option<NaiveDate>,
}

impl<P: DataPortal> RiskPortfolio<P> {
    /// Creates an empty risk portfolio over a data portal.
    pub fn new(portal: P) -> Self {
        Self {
            portfolio: Portfolio::new(),
            portal,
            benchmark: None,
            current_date: None,
        }
    }

    /// Sets the benchmark asset substituted for too-young equities.
    #[must_use]
    pub fn with_benchmark(mut self, benchmark: Asset) -> Self {
        self.benchmark = Some(benchmark);
        self
    }

    /// Returns the configured benchmark, if any.
    #[must_use]
    pub fn benchmark(&self) -> Option<&Asset> {
        self.benchmark.as_ref()
    }

    /// Returns the as-of date for analytics.
    #[must_use]
    pub fn current_date(&self) -> Option<NaiveDate> {
        self.current_date
    }

    /// Advances the as-of date for analytics.
    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = Some(date);
    }

    /// Estimates the portfolio's expected shortfall (CVaR) at a 5% cutoff
    /// from up to two trading years of daily history.
    ///
    /// With less than one trading year of sessions between the portfolio's
    /// start date and the as-of date the estimate is statistically
    /// unreliable and `Ok(None)` is returned; between one and two years,
    /// whatever is available is used.
    ///
    /// # Errors
    ///
    /// - [`PortfolioError::MissingAsOfDate`] if the start or current date
    ///   is unset.
    /// - [`PortfolioError::DataAccess`] if a held contract cannot be
    ///   resolved to a continuous series or the history window cannot be
    ///   supplied; missing price data is never zero-filled.
    pub fn expected_shortfall(&self) -> PortfolioResult<Option<f64>> {
        let start_date = self
            .portfolio
            .start_date
            .ok_or(PortfolioError::MissingAsOfDate {
                field: "start_date",
            })?;
        let current_date = self.current_date.ok_or(PortfolioError::MissingAsOfDate {
            field: "current_date",
        })?;

        let available_days = self
            .portal
            .trading_calendar()
            .session_distance(start_date, current_date);
        if available_days < TRADING_DAYS_PER_YEAR {
            return Ok(None);
        }
        let lookback_days = available_days.min(CVAR_LOOKBACK_DAYS) as usize;

        let weights = self.portfolio.current_portfolio_weights();
        if weights.is_empty() {
            // Zero columns dot anything is the all-zero return series.
            return Ok(Some(0.0));
        }

        let assets = weights
            .keys()
            .map(|asset| self.history_asset_for(asset, current_date))
            .collect::<PortfolioResult<Vec<_>>>()?;
        debug!(
            lookback_days,
            assets = assets.len(),
            "fetching history window for expected shortfall"
        );

        let prices = self.portal.get_history_window(
            &assets,
            current_date,
            lookback_days,
            BarFrequency::Daily,
            PriceField::Price,
            DataFrequency::Daily,
        )?;

        let asset_returns = prices.pct_change();
        let weight_values: Vec<f64> = weights.values().copied().collect();
        let portfolio_returns = weighted_return_series(&asset_returns, &weight_values);

        Ok(Some(conditional_value_at_risk(
            &portfolio_returns,
            CVAR_CUTOFF,
        )))
    }

    /// Resolves the effective asset whose history stands in for a held
    /// asset.
    ///
    /// An equity listed less than a trading year before the as-of date has
    /// no estimable idiosyncratic risk; when a benchmark is configured it
    /// substitutes as a conservative proxy. A futures contract's own
    /// short-lived history is never used: the contract maps to the
    /// volume-rolled, multiplicatively adjusted continuous series of its
    /// root, anchored at the contract's offset from the front contract.
    fn history_asset_for(
        &self,
        asset: &Asset,
        current_date: NaiveDate,
    ) -> PortfolioResult<HistoryAsset> {
        match asset {
            Asset::Equity(equity) => {
                let listed_days = self
                    .portal
                    .trading_calendar()
                    .session_distance(equity.start_date, current_date);
                if listed_days < TRADING_DAYS_PER_YEAR {
                    if let Some(benchmark) = &self.benchmark {
                        return Ok(HistoryAsset::Listed(benchmark.clone()));
                    }
                }
                Ok(HistoryAsset::Listed(asset.clone()))
            }
            Asset::Future(contract) => {
                let finder = self.portal.asset_finder();
                let chain = finder.ordered_contracts(&contract.root_symbol)?;
                let offset = chain.offset_of_contract(contract.sid, current_date)?;
                let continuous = finder.create_continuous_future(
                    &contract.root_symbol,
                    offset,
                    RollStyle::Volume,
                    Adjustment::Multiplicative,
                )?;
                Ok(HistoryAsset::Continuous(continuous))
            }
        }
    }
}

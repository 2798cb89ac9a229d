//! Aggregate portfolio valuation state.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use meridian_core::Asset;
use serde::{Deserialize, Serialize};

use crate::fields::{DeprecatedFields, FieldValue};
use crate::types::PositionBook;

/// Aggregate account valuation at a point in simulated time.
///
/// The simulation driver maintains every field as fills and market data
/// arrive, including the `portfolio_value ~= cash + positions_value`
/// relationship; this module only reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Cash used so far (negative once the account is net long).
    pub capital_used: f64,

    /// Cash at the start of the simulation.
    pub starting_cash: f64,

    /// Total account value: cash plus positions value.
    pub portfolio_value: f64,

    /// Profit and loss since the start of the simulation.
    pub pnl: f64,

    /// Cumulative return since the start of the simulation.
    pub returns: f64,

    /// Cash currently available.
    pub cash: f64,

    /// Open positions.
    pub positions: PositionBook,

    /// First session of the simulation.
    pub start_date: Option<NaiveDate>,

    /// Market value of all open positions.
    pub positions_value: f64,
}

impl Portfolio {
    /// Creates an all-zero portfolio with an empty position book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes each asset's weight in the portfolio: its held market
    /// value divided by the total portfolio value.
    ///
    /// An equity's value is its price times the number of shares held; a
    /// futures contract's value additionally scales by the contract unit
    /// multiplier. Short positions carry negative weight, and cash is not
    /// a key, so the weights need not sum to one.
    ///
    /// With a zero portfolio value the division yields non-finite weights;
    /// that degenerate case is not trapped here and callers must guard.
    #[must_use]
    pub fn current_portfolio_weights(&self) -> BTreeMap<Asset, f64> {
        self.positions
            .iter()
            .map(|(asset, position)| (asset.clone(), position.market_value() / self.portfolio_value))
            .collect()
    }
}

impl DeprecatedFields for Portfolio {
    const RECORD: &'static str = "portfolio";

    // Frozen: the valuation fields as of the deprecation.
    const FIELDS: &'static [&'static str] = &[
        "capital_used",
        "starting_cash",
        "portfolio_value",
        "pnl",
        "returns",
        "cash",
        "positions",
        "start_date",
        "positions_value",
    ];

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "capital_used" => Some(FieldValue::Float(self.capital_used)),
            "starting_cash" => Some(FieldValue::Float(self.starting_cash)),
            "portfolio_value" => Some(FieldValue::Float(self.portfolio_value)),
            "pnl" => Some(FieldValue::Float(self.pnl)),
            "returns" => Some(FieldValue::Float(self.returns)),
            "cash" => Some(FieldValue::Float(self.cash)),
            "positions" => Some(FieldValue::Positions(&self.positions)),
            "start_date" => Some(FieldValue::Date(self.start_date)),
            "positions_value" => Some(FieldValue::Float(self.positions_value)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;
    use approx::assert_relative_eq;
    use meridian_core::{Equity, FuturesContract};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn equity(sid: u64, symbol: &str) -> Asset {
        Asset::Equity(Equity::new(sid, symbol, date(2010, 1, 4)))
    }

    fn held(asset: Asset, amount: f64, price: f64) -> Position {
        let mut position = Position::new(asset);
        position.amount = amount;
        position.last_sale_price = price;
        position
    }

    #[test]
    fn test_empty_book_has_empty_weights() {
        let portfolio = Portfolio {
            portfolio_value: 10_000.0,
            ..Portfolio::default()
        };
        assert!(portfolio.current_portfolio_weights().is_empty());
    }

    #[test]
    fn test_single_equity_weight() {
        let mut portfolio = Portfolio {
            portfolio_value: 10_000.0,
            ..Portfolio::default()
        };
        portfolio.positions.insert(held(equity(1, "AAPL"), 100.0, 50.0));

        let weights = portfolio.current_portfolio_weights();
        // (100 x 50 x 1) / 10,000
        assert_relative_eq!(weights[&equity(1, "AAPL")], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_futures_weight_uses_multiplier() {
        let contract = Asset::Future(FuturesContract::new(
            10,
            "CLF16",
            "CL",
            50.0,
            date(2016, 1, 20),
        ));
        let mut portfolio = Portfolio {
            portfolio_value: 10_000.0,
            ..Portfolio::default()
        };
        portfolio.positions.insert(held(contract.clone(), 2.0, 10.0));

        let weights = portfolio.current_portfolio_weights();
        // Market value 10 x 2 x 50 = 1,000, not 20.
        assert_relative_eq!(weights[&contract], 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_short_position_has_negative_weight() {
        let mut portfolio = Portfolio {
            portfolio_value: 10_000.0,
            ..Portfolio::default()
        };
        portfolio.positions.insert(held(equity(1, "AAPL"), -100.0, 50.0));

        let weights = portfolio.current_portfolio_weights();
        assert_relative_eq!(weights[&equity(1, "AAPL")], -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_weights_scale_back_to_market_values() {
        let mut portfolio = Portfolio {
            portfolio_value: 25_000.0,
            ..Portfolio::default()
        };
        portfolio.positions.insert(held(equity(1, "AAPL"), 100.0, 50.0));
        portfolio.positions.insert(held(equity(2, "MSFT"), -30.0, 200.0));

        let weights = portfolio.current_portfolio_weights();
        let scaled_back: f64 = weights.values().map(|w| w * portfolio.portfolio_value).sum();
        let market_values: f64 = portfolio
            .positions
            .iter()
            .map(|(_, p)| p.market_value())
            .sum();
        assert_relative_eq!(scaled_back, market_values, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_portfolio_value_yields_non_finite_weights() {
        let mut portfolio = Portfolio::default();
        portfolio.positions.insert(held(equity(1, "AAPL"), 100.0, 50.0));

        let weights = portfolio.current_portfolio_weights();
        assert!(!weights[&equity(1, "AAPL")].is_finite());
    }

    #[test]
    fn test_deprecated_lookup_matches_attribute() {
        let portfolio = Portfolio {
            cash: 1_234.5,
            ..Portfolio::default()
        };

        let value = portfolio.get_item("cash").unwrap();
        assert_eq!(value.as_float(), Some(portfolio.cash));
        assert!(portfolio.get_item("not_a_field").is_err());

        match portfolio.get_item("positions").unwrap() {
            FieldValue::Positions(book) => assert!(book.is_empty()),
            other => panic!("expected positions, got {other:?}"),
        }
    }
}

//! Property-based tests for portfolio invariants.
//!
//! These tests verify properties that should hold for any inputs:
//! - Weights scale back to market values exactly
//! - CVaR is bounded by the sample minimum and mean
//! - CVaR widens monotonically with the cutoff

use chrono::NaiveDate;
use meridian_portfolio::prelude::*;
use proptest::prelude::*;

fn equity(sid: u64) -> Asset {
    Asset::Equity(Equity::new(
        sid,
        format!("EQ{sid}"),
        NaiveDate::from_ymd_opt(2010, 1, 4).unwrap(),
    ))
}

/// (amount, price) pairs for up to eight positions.
fn holdings_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-1_000.0..1_000.0f64, 0.1..500.0f64), 1..8)
}

fn returns_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-0.5..0.5f64, 1..400)
}

proptest! {
    #[test]
    fn weights_scale_back_to_market_values(
        holdings in holdings_strategy(),
        portfolio_value in 1.0..1_000_000.0f64,
    ) {
        let mut portfolio = Portfolio {
            portfolio_value,
            ..Portfolio::default()
        };
        for (sid, (amount, price)) in holdings.iter().enumerate() {
            let mut position = Position::new(equity(sid as u64));
            position.amount = *amount;
            position.last_sale_price = *price;
            portfolio.positions.insert(position);
        }

        let weights = portfolio.current_portfolio_weights();
        prop_assert_eq!(weights.len(), holdings.len());

        let scaled_back: f64 = weights.values().map(|w| w * portfolio_value).sum();
        let market_values: f64 = portfolio
            .positions
            .iter()
            .map(|(_, p)| p.market_value())
            .sum();
        prop_assert!(
            (scaled_back - market_values).abs() <= 1e-6 * market_values.abs().max(1.0),
            "scaled {scaled_back} vs market {market_values}"
        );
    }

    #[test]
    fn cvar_is_bounded_by_min_and_mean(returns in returns_strategy()) {
        let cvar = conditional_value_at_risk(&returns, CVAR_CUTOFF);
        let min = returns.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = returns.iter().sum::<f64>() / returns.len() as f64;

        prop_assert!(cvar >= min - 1e-12, "cvar {cvar} below min {min}");
        prop_assert!(cvar <= mean + 1e-12, "cvar {cvar} above mean {mean}");
    }

    #[test]
    fn cvar_widens_with_cutoff(returns in returns_strategy()) {
        // Averaging a wider worst tail can only raise the estimate.
        let narrow = conditional_value_at_risk(&returns, 0.05);
        let wide = conditional_value_at_risk(&returns, 0.5);
        prop_assert!(narrow <= wide + 1e-12, "narrow {narrow} vs wide {wide}");
    }
}

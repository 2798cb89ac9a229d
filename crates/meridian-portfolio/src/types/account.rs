//! Broker-reported account metrics.

use serde::{Deserialize, Serialize};

use crate::fields::{DeprecatedFields, FieldValue};

/// Flat record of trading-account metrics as a broker reports them.
///
/// The values are consumed, not computed, by this module: a live broker
/// connection overwrites them as the simulation runs, and the defaults
/// describe an unconstrained paper account (notably infinite buying power,
/// Reg-T margin, and day trades remaining). The key set never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Account {
    pub settled_cash: f64,
    pub accrued_interest: f64,
    pub buying_power: f64,
    pub equity_with_loan: f64,
    pub total_positions_value: f64,
    pub total_positions_exposure: f64,
    pub regt_equity: f64,
    pub regt_margin: f64,
    pub initial_margin_requirement: f64,
    pub maintenance_margin_requirement: f64,
    pub available_funds: f64,
    pub excess_liquidity: f64,
    pub cushion: f64,
    pub day_trades_remaining: f64,
    pub leverage: f64,
    pub net_leverage: f64,
    pub net_liquidation: f64,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            settled_cash: 0.0,
            accrued_interest: 0.0,
            buying_power: f64::INFINITY,
            equity_with_loan: 0.0,
            total_positions_value: 0.0,
            total_positions_exposure: 0.0,
            regt_equity: 0.0,
            regt_margin: f64::INFINITY,
            initial_margin_requirement: 0.0,
            maintenance_margin_requirement: 0.0,
            available_funds: 0.0,
            excess_liquidity: 0.0,
            cushion: 0.0,
            day_trades_remaining: f64::INFINITY,
            leverage: 0.0,
            net_leverage: 0.0,
            net_liquidation: 0.0,
        }
    }
}

impl Account {
    /// Creates an account with the unconstrained defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeprecatedFields for Account {
    const RECORD: &'static str = "account";

    // Frozen: matches the broker-reported key set as of the deprecation.
    const FIELDS: &'static [&'static str] = &[
        "settled_cash",
        "accrued_interest",
        "buying_power",
        "equity_with_loan",
        "total_positions_value",
        "total_positions_exposure",
        "regt_equity",
        "regt_margin",
        "initial_margin_requirement",
        "maintenance_margin_requirement",
        "available_funds",
        "excess_liquidity",
        "cushion",
        "day_trades_remaining",
        "leverage",
        "net_leverage",
        "net_liquidation",
    ];

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "settled_cash" => self.settled_cash,
            "accrued_interest" => self.accrued_interest,
            "buying_power" => self.buying_power,
            "equity_with_loan" => self.equity_with_loan,
            "total_positions_value" => self.total_positions_value,
            "total_positions_exposure" => self.total_positions_exposure,
            "regt_equity" => self.regt_equity,
            "regt_margin" => self.regt_margin,
            "initial_margin_requirement" => self.initial_margin_requirement,
            "maintenance_margin_requirement" => self.maintenance_margin_requirement,
            "available_funds" => self.available_funds,
            "excess_liquidity" => self.excess_liquidity,
            "cushion" => self.cushion,
            "day_trades_remaining" => self.day_trades_remaining,
            "leverage" => self.leverage,
            "net_leverage" => self.net_leverage,
            "net_liquidation" => self.net_liquidation,
            _ => return None,
        };
        Some(FieldValue::Float(value))
    }
}

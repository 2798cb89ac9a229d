//! Per-asset holding records.

use chrono::NaiveDate;
use meridian_core::Asset;
use serde::{Deserialize, Serialize};

use crate::fields::{DeprecatedFields, FieldValue};

/// One held quantity of one tradable instrument.
///
/// A freshly constructed position holds nothing: zero amount, zero cost
/// basis, zero last sale price, no last sale date. The fill-processing
/// logic of the owning simulation mutates everything except the asset,
/// which is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    asset: Asset,

    /// Signed held quantity: positive long, negative short.
    pub amount: f64,

    /// Average entry price per unit.
    pub cost_basis: f64,

    /// Most recent observed price.
    pub last_sale_price: f64,

    /// Session of the most recent price observation.
    pub last_sale_date: Option<NaiveDate>,
}

impl Position {
    /// Creates an empty position for an asset.
    #[must_use]
    pub fn new(asset: Asset) -> Self {
        Self {
            asset,
            amount: 0.0,
            cost_basis: 0.0,
            last_sale_price: 0.0,
            last_sale_date: None,
        }
    }

    /// Returns the held asset.
    #[must_use]
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// Returns the held asset, under its historical name.
    ///
    /// Retained for backwards compatibility with strategy code written
    /// against sid-based records.
    #[must_use]
    pub fn sid(&self) -> &Asset {
        &self.asset
    }

    /// Returns the position's market value: last sale price times amount
    /// times the instrument's price multiplier.
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.last_sale_price * self.amount * self.asset.multiplier()
    }
}

impl DeprecatedFields for Position {
    const RECORD: &'static str = "position";

    // Frozen: `asset` postdates this access path and is deliberately
    // absent; `sid` answers with the asset.
    const FIELDS: &'static [&'static str] = &[
        "sid",
        "amount",
        "cost_basis",
        "last_sale_price",
        "last_sale_date",
    ];

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "sid" => Some(FieldValue::Asset(&self.asset)),
            "amount" => Some(FieldValue::Float(self.amount)),
            "cost_basis" => Some(FieldValue::Float(self.cost_basis)),
            "last_sale_price" => Some(FieldValue::Float(self.last_sale_price)),
            "last_sale_date" => Some(FieldValue::Date(self.last_sale_date)),
            _ => None,
        }
    }
}

/// Compatibility record returned when a position book is keyed with a raw
/// integer instead of an asset.
///
/// Carries the raw key where a position carries its asset; otherwise the
/// same zero-valued shape as a fresh [`Position`]. It never enters the
/// book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacySidPosition {
    /// The raw integer key the caller used.
    pub sid: u64,

    /// Signed held quantity; always zero for a record that was never held.
    pub amount: f64,

    /// Average entry price per unit.
    pub cost_basis: f64,

    /// Most recent observed price.
    pub last_sale_price: f64,

    /// Session of the most recent price observation.
    pub last_sale_date: Option<NaiveDate>,
}

impl LegacySidPosition {
    /// Creates an empty compatibility record for a raw sid.
    #[must_use]
    pub fn new(sid: u64) -> Self {
        Self {
            sid,
            amount: 0.0,
            cost_basis: 0.0,
            last_sale_price: 0.0,
            last_sale_date: None,
        }
    }
}

impl DeprecatedFields for LegacySidPosition {
    const RECORD: &'static str = "position";

    const FIELDS: &'static [&'static str] = &[
        "sid",
        "amount",
        "cost_basis",
        "last_sale_price",
        "last_sale_date",
    ];

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "sid" => Some(FieldValue::Sid(self.sid)),
            "amount" => Some(FieldValue::Float(self.amount)),
            "cost_basis" => Some(FieldValue::Float(self.cost_basis)),
            "last_sale_price" => Some(FieldValue::Float(self.last_sale_price)),
            "last_sale_date" => Some(FieldValue::Date(self.last_sale_date)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::{Equity, FuturesContract};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn aapl() -> Asset {
        Asset::Equity(Equity::new(1, "AAPL", date(2010, 1, 4)))
    }

    #[test]
    fn test_new_position_is_empty() {
        let position = Position::new(aapl());
        assert_eq!(position.amount, 0.0);
        assert_eq!(position.cost_basis, 0.0);
        assert_eq!(position.last_sale_price, 0.0);
        assert_eq!(position.last_sale_date, None);
        assert_eq!(position.asset().sid(), 1);
    }

    #[test]
    fn test_equity_market_value() {
        let mut position = Position::new(aapl());
        position.amount = 100.0;
        position.last_sale_price = 50.0;
        assert_eq!(position.market_value(), 5_000.0);
    }

    #[test]
    fn test_futures_market_value_uses_multiplier() {
        let contract = Asset::Future(FuturesContract::new(
            10,
            "CLF16",
            "CL",
            50.0,
            date(2016, 1, 20),
        ));
        let mut position = Position::new(contract);
        position.amount = 2.0;
        position.last_sale_price = 10.0;

        // 10 x 2 x 50, not 10 x 2.
        assert_eq!(position.market_value(), 1_000.0);
    }

    #[test]
    fn test_sid_alias_returns_asset() {
        let position = Position::new(aapl());
        assert_eq!(position.sid(), position.asset());
    }

    #[test]
    fn test_deprecated_fields() {
        let mut position = Position::new(aapl());
        position.amount = 5.0;

        let value = position.get_item("amount").unwrap();
        assert_eq!(value.as_float(), Some(5.0));

        let value = position.get_item("sid").unwrap();
        assert_eq!(value.as_asset().map(Asset::sid), Some(1));

        // `asset` is not in the frozen set.
        assert!(position.get_item("asset").is_err());
    }

    #[test]
    fn test_legacy_record_fields() {
        let legacy = LegacySidPosition::new(100);
        assert_eq!(legacy.amount, 0.0);

        let value = legacy.get_item("sid").unwrap();
        assert_eq!(value, FieldValue::Sid(100));
        assert!(legacy.get_item("asset").is_err());
    }
}

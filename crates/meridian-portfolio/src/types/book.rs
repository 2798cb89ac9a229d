//! The position book: a sid-ordered mapping from asset to position.

use std::collections::btree_map::{self, BTreeMap};

use meridian_core::Asset;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::position::{LegacySidPosition, Position};

/// Key for a position lookup.
///
/// Strategy code is expected to key the book by asset; the raw-integer
/// variant survives for legacy callers that still pass a bare sid.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionKey {
    /// A recognized asset identifier.
    Asset(Asset),
    /// A raw integer sid (deprecated access path).
    Sid(u64),
}

/// Result of a [`PositionBook::get_or_create`] lookup.
///
/// The compatibility path is a separate variant so callers (and tests) can
/// see exactly when it was taken.
#[derive(Debug)]
pub enum PositionEntry<'a> {
    /// A position held in the book (freshly created if absent).
    Held(&'a mut Position),
    /// A zero-valued stand-in for a raw-integer key; never inserted.
    Legacy(LegacySidPosition),
}

/// Keyed collection of positions, ordered by sid.
///
/// Reading a position for an asset with no current holding is not an
/// error: the book creates a zero-valued position on first reference so
/// valuation code never special-cases "absent".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionBook {
    positions: BTreeMap<Asset, Position>,
}

impl PositionBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the position for an asset, if one is in the book.
    #[must_use]
    pub fn get(&self, asset: &Asset) -> Option<&Position> {
        self.positions.get(asset)
    }

    /// Returns a mutable position for an asset, if one is in the book.
    pub fn get_mut(&mut self, asset: &Asset) -> Option<&mut Position> {
        self.positions.get_mut(asset)
    }

    /// Inserts a position, keyed by its asset. Returns the displaced
    /// position, if any.
    pub fn insert(&mut self, position: Position) -> Option<Position> {
        self.positions.insert(position.asset().clone(), position)
    }

    /// Looks up a position by key, creating it when necessary.
    ///
    /// An asset key always yields a held position: absent assets get a
    /// zero-valued position inserted into the book. A raw-integer key is
    /// the deprecated compatibility path: it emits a warning and yields a
    /// detached zero-valued record carrying the key, without touching the
    /// book. Neither path fails.
    pub fn get_or_create(&mut self, key: PositionKey) -> PositionEntry<'_> {
        match key {
            PositionKey::Asset(asset) => {
                let entry = self
                    .positions
                    .entry(asset.clone())
                    .or_insert_with(|| Position::new(asset));
                PositionEntry::Held(entry)
            }
            PositionKey::Sid(sid) => {
                warn!(
                    sid,
                    "Referencing positions by integer is deprecated. Use an asset instead.",
                );
                PositionEntry::Legacy(LegacySidPosition::new(sid))
            }
        }
    }

    /// Iterates positions in sid order.
    pub fn iter(&self) -> btree_map::Iter<'_, Asset, Position> {
        self.positions.iter()
    }

    /// Returns the number of positions in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the book holds no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Keeps only the positions for which the predicate holds.
    ///
    /// Whether flat (zero-amount) positions persist or get pruned is the
    /// caller's policy.
    pub fn retain(&mut self, f: impl FnMut(&Asset, &mut Position) -> bool) {
        self.positions.retain(f);
    }
}

impl<'a> IntoIterator for &'a PositionBook {
    type Item = (&'a Asset, &'a Position);
    type IntoIter = btree_map::Iter<'a, Asset, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use meridian_core::Equity;

    fn equity(sid: u64, symbol: &str) -> Asset {
        Asset::Equity(Equity::new(
            sid,
            symbol,
            NaiveDate::from_ymd_opt(2010, 1, 4).unwrap(),
        ))
    }

    #[test]
    fn test_missing_asset_vivifies_zero_position() {
        let mut book = PositionBook::new();
        let asset = equity(1, "AAPL");

        match book.get_or_create(PositionKey::Asset(asset.clone())) {
            PositionEntry::Held(position) => {
                assert_eq!(position.amount, 0.0);
                assert_eq!(position.cost_basis, 0.0);
            }
            PositionEntry::Legacy(_) => panic!("asset key must yield a held position"),
        }

        // The fresh position was inserted.
        assert_eq!(book.len(), 1);
        assert!(book.get(&asset).is_some());
    }

    #[test]
    fn test_existing_position_is_returned() {
        let mut book = PositionBook::new();
        let asset = equity(1, "AAPL");

        let mut position = Position::new(asset.clone());
        position.amount = 100.0;
        book.insert(position);

        match book.get_or_create(PositionKey::Asset(asset)) {
            PositionEntry::Held(position) => assert_eq!(position.amount, 100.0),
            PositionEntry::Legacy(_) => panic!("asset key must yield a held position"),
        }
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_sid_key_yields_detached_legacy_record() {
        let mut book = PositionBook::new();

        match book.get_or_create(PositionKey::Sid(100)) {
            PositionEntry::Legacy(legacy) => {
                assert_eq!(legacy.sid, 100);
                assert_eq!(legacy.amount, 0.0);
            }
            PositionEntry::Held(_) => panic!("sid key must take the compatibility path"),
        }

        // The compatibility record never enters the book.
        assert!(book.is_empty());
    }

    #[test]
    fn test_iteration_is_sid_ordered() {
        let mut book = PositionBook::new();
        book.insert(Position::new(equity(3, "C")));
        book.insert(Position::new(equity(1, "A")));
        book.insert(Position::new(equity(2, "B")));

        let sids: Vec<u64> = book.iter().map(|(asset, _)| asset.sid()).collect();
        assert_eq!(sids, vec![1, 2, 3]);
    }

    #[test]
    fn test_retain_prunes_flat_positions() {
        let mut book = PositionBook::new();
        let mut held = Position::new(equity(1, "A"));
        held.amount = 10.0;
        book.insert(held);
        book.insert(Position::new(equity(2, "B")));

        book.retain(|_, position| position.amount != 0.0);
        assert_eq!(book.len(), 1);
        assert!(book.get(&equity(1, "A")).is_some());
    }
}

//! Asset model: equities, futures contracts, and continuous futures.
//!
//! Assets are identified by an integer security id ([`Sid`]); equality,
//! ordering, and hashing of [`Asset`] are all by sid so that assets can key
//! ordered maps deterministically. The kind split (equity vs. futures
//! contract) is a two-variant union dispatched with `match`, which keeps
//! kind-specific rules (contract multipliers, history substitution,
//! continuous-series resolution) exhaustive.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MeridianError, MeridianResult};

/// Integer security identifier.
pub type Sid = u64;

/// A listed equity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equity {
    /// Security identifier.
    pub sid: Sid,

    /// Ticker symbol.
    pub symbol: String,

    /// Listing date: the first session on which the equity traded.
    pub start_date: NaiveDate,
}

impl Equity {
    /// Creates a new equity.
    #[must_use]
    pub fn new(sid: Sid, symbol: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            sid,
            symbol: symbol.into(),
            start_date,
        }
    }
}

/// A single expiring futures contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuturesContract {
    /// Security identifier.
    pub sid: Sid,

    /// Contract symbol (e.g., `CLF26`).
    pub symbol: String,

    /// Root symbol shared by the contract's chain (e.g., `CL`).
    pub root_symbol: String,

    /// Contract unit multiplier applied to the quoted price.
    pub multiplier: f64,

    /// Session after which the contract is no longer tradable.
    pub auto_close_date: NaiveDate,
}

impl FuturesContract {
    /// Creates a new futures contract.
    #[must_use]
    pub fn new(
        sid: Sid,
        symbol: impl Into<String>,
        root_symbol: impl Into<String>,
        multiplier: f64,
        auto_close_date: NaiveDate,
    ) -> Self {
        Self {
            sid,
            symbol: symbol.into(),
            root_symbol: root_symbol.into(),
            multiplier,
            auto_close_date,
        }
    }
}

/// A tradable instrument: either an equity or a futures contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Asset {
    /// A listed equity.
    Equity(Equity),
    /// An expiring futures contract.
    Future(FuturesContract),
}

impl Asset {
    /// Returns the security identifier.
    #[must_use]
    pub fn sid(&self) -> Sid {
        match self {
            Self::Equity(eq) => eq.sid,
            Self::Future(fc) => fc.sid,
        }
    }

    /// Returns the ticker or contract symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Equity(eq) => &eq.symbol,
            Self::Future(fc) => &fc.symbol,
        }
    }

    /// Returns the price multiplier: the contract unit multiplier for a
    /// futures contract, 1 for everything else.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Equity(_) => 1.0,
            Self::Future(fc) => fc.multiplier,
        }
    }

    /// Returns true if this asset is an equity.
    #[must_use]
    pub fn is_equity(&self) -> bool {
        matches!(self, Self::Equity(_))
    }

    /// Returns true if this asset is a futures contract.
    #[must_use]
    pub fn is_future(&self) -> bool {
        matches!(self, Self::Future(_))
    }
}

// Asset identity is the sid; symbols and metadata are descriptive only.
impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.sid() == other.sid()
    }
}

impl Eq for Asset {}

impl PartialOrd for Asset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Asset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sid().cmp(&other.sid())
    }
}

impl Hash for Asset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sid().hash(state);
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.symbol(), self.sid())
    }
}

/// Roll rule for stitching a continuous futures series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollStyle {
    /// Roll when volume migrates to the next contract.
    Volume,
    /// Roll on a fixed calendar schedule.
    Calendar,
}

/// Price adjustment applied across rolls of a continuous series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Adjustment {
    /// Multiplicative back-adjustment (ratio splice).
    Multiplicative,
    /// Additive back-adjustment (difference splice).
    Additive,
    /// No adjustment across rolls.
    Unadjusted,
}

/// Handle for a synthetic continuous futures series.
///
/// Constructed by an [`AssetFinder`](crate::traits::AssetFinder); the
/// offset selects how many contracts out from the front contract the series
/// tracks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContinuousFuture {
    /// Root symbol of the underlying chain.
    pub root_symbol: String,

    /// Number of contracts out from the front contract.
    pub offset: u32,

    /// Roll rule.
    pub roll_style: RollStyle,

    /// Price adjustment across rolls.
    pub adjustment: Adjustment,
}

impl fmt::Display for ContinuousFuture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.root_symbol, self.offset)
    }
}

/// An asset as used for a price-history fetch: either a listed instrument
/// or a continuous futures series standing in for one contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HistoryAsset {
    /// A listed equity or futures contract, used as-is.
    Listed(Asset),
    /// A continuous futures series resolved for a held contract.
    Continuous(ContinuousFuture),
}

impl HistoryAsset {
    /// Returns a display symbol for diagnostics.
    #[must_use]
    pub fn symbol(&self) -> String {
        match self {
            Self::Listed(asset) => asset.symbol().to_string(),
            Self::Continuous(cf) => cf.to_string(),
        }
    }
}

/// One entry of an ordered futures chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractEntry {
    /// Security identifier of the contract.
    pub sid: Sid,

    /// Session after which the contract is no longer tradable.
    pub auto_close_date: NaiveDate,
}

/// The contracts of one root symbol, ordered by expiry.
///
/// Used to infer a held contract's roll offset: how many contracts out it
/// sits from the chain's front contract as of a given session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedContracts {
    /// Root symbol shared by every contract in the chain.
    pub root_symbol: String,

    contracts: Vec<ContractEntry>,
}

impl OrderedContracts {
    /// Creates a chain from its entries, ordering them by auto-close date.
    #[must_use]
    pub fn new(root_symbol: impl Into<String>, mut contracts: Vec<ContractEntry>) -> Self {
        contracts.sort_by_key(|c| (c.auto_close_date, c.sid));
        Self {
            root_symbol: root_symbol.into(),
            contracts,
        }
    }

    /// Returns the entries, front contract first.
    #[must_use]
    pub fn contracts(&self) -> &[ContractEntry] {
        &self.contracts
    }

    /// Returns the index of the front contract as of `as_of`: the first
    /// contract that has not yet auto-closed.
    fn front_index(&self, as_of: NaiveDate) -> MeridianResult<usize> {
        self.contracts
            .iter()
            .position(|c| c.auto_close_date > as_of)
            .ok_or_else(|| MeridianError::NoActiveContract {
                root_symbol: self.root_symbol.clone(),
                as_of,
            })
    }

    /// Returns how many contracts out from the front contract the given
    /// contract sits as of `as_of`.
    ///
    /// # Errors
    ///
    /// - [`MeridianError::UnknownContract`] if the sid is not in the chain.
    /// - [`MeridianError::NoActiveContract`] if the whole chain has
    ///   auto-closed.
    /// - [`MeridianError::ContractRolledPast`] if the contract sits before
    ///   the front contract (it auto-closed before `as_of`).
    pub fn offset_of_contract(&self, sid: Sid, as_of: NaiveDate) -> MeridianResult<u32> {
        let position = self
            .contracts
            .iter()
            .position(|c| c.sid == sid)
            .ok_or_else(|| MeridianError::UnknownContract {
                root_symbol: self.root_symbol.clone(),
                sid,
            })?;

        let front = self.front_index(as_of)?;
        position
            .checked_sub(front)
            .map(|offset| offset as u32)
            .ok_or_else(|| MeridianError::ContractRolledPast {
                root_symbol: self.root_symbol.clone(),
                sid,
                as_of,
            })
    }
}

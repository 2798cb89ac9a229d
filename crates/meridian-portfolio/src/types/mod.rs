//! Account-state record types.
//!
//! - [`position`]: per-asset holdings and the legacy sid stand-in
//! - [`book`]: the sid-ordered position collection
//! - [`account`]: broker-reported account metrics

pub mod account;
pub mod book;
pub mod position;

pub use account::Account;
pub use book::{PositionBook, PositionEntry, PositionKey};
pub use position::{LegacySidPosition, Position};

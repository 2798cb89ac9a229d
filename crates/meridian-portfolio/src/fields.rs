//! Deprecated bracket-style field access with frozen field sets.
//!
//! Legacy strategy code reads record fields with a string key
//! (`portfolio["cash"]`) instead of attribute access. The records keep
//! supporting that path through one shared accessor: every use emits a
//! deprecation warning on the `tracing` channel, recognized names still
//! return the correct value, and anything else is a hard
//! [`UnknownField`](crate::PortfolioError::UnknownField) error.
//!
//! The recognized sets are frozen. If you are adding new attributes to a
//! record, don't update its `FIELDS` set; this access path exists for old
//! callers only and new usages should not be encouraged.

use chrono::NaiveDate;
use meridian_core::Asset;
use tracing::warn;

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::PositionBook;

/// A value returned from a bracket-style field lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// A numeric field.
    Float(f64),
    /// A nullable date field.
    Date(Option<NaiveDate>),
    /// An asset-valued field (a position's `sid` compatibility alias).
    Asset(&'a Asset),
    /// A raw integer identifier (legacy sid-keyed records).
    Sid(u64),
    /// The portfolio's position book.
    Positions(&'a PositionBook),
}

impl<'a> FieldValue<'a> {
    /// Returns the numeric value, if this field is numeric.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the date value, if this field is a date.
    #[must_use]
    pub fn as_date(&self) -> Option<Option<NaiveDate>> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the asset, if this field is asset-valued.
    #[must_use]
    pub fn as_asset(&self) -> Option<&'a Asset> {
        match *self {
            Self::Asset(a) => Some(a),
            _ => None,
        }
    }
}

/// Bracket-style access to a frozen set of record fields.
///
/// Implementors supply the record name, the frozen field set, and the
/// field-to-value mapping; the deprecation warning and the unknown-field
/// error live in the provided [`get_item`](DeprecatedFields::get_item).
pub trait DeprecatedFields {
    /// Record name used in warnings and errors (e.g. `"portfolio"`).
    const RECORD: &'static str;

    /// The frozen set of recognized field names. Do not widen this set
    /// when new attributes are added to the record.
    const FIELDS: &'static [&'static str];

    /// Returns the value of a recognized field, `None` otherwise.
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Looks up a field by name, the deprecated way.
    ///
    /// Emits exactly one deprecation warning per call, whether or not the
    /// name is recognized.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::UnknownField`] for names outside the
    /// frozen set.
    fn get_item(&self, name: &str) -> PortfolioResult<FieldValue<'_>> {
        warn!(
            record = Self::RECORD,
            field = name,
            "'{0}[{1:?}]' is deprecated, please use '{0}.{1}' instead",
            Self::RECORD,
            name,
        );
        self.field_value(name)
            .ok_or_else(|| PortfolioError::unknown_field(Self::RECORD, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::span;

    struct Probe;

    impl DeprecatedFields for Probe {
        const RECORD: &'static str = "probe";
        const FIELDS: &'static [&'static str] = &["answer"];

        fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "answer" => Some(FieldValue::Float(42.0)),
                _ => None,
            }
        }
    }

    /// Counts warn-level events so tests can assert on the deprecation
    /// channel.
    struct WarnCounter {
        count: Arc<AtomicUsize>,
    }

    impl tracing::Subscriber for WarnCounter {
        fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
            *metadata.level() <= tracing::Level::WARN
        }

        fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

        fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

        fn event(&self, _event: &tracing::Event<'_>) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }

        fn enter(&self, _span: &span::Id) {}

        fn exit(&self, _span: &span::Id) {}
    }

    fn count_warns<T>(f: impl FnOnce() -> T) -> (T, usize) {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = WarnCounter {
            count: Arc::clone(&count),
        };
        let out = tracing::subscriber::with_default(subscriber, f);
        let warns = count.load(Ordering::SeqCst);
        (out, warns)
    }

    #[test]
    fn test_recognized_field_warns_once_and_returns_value() {
        let probe = Probe;

        let (value, warns) = count_warns(|| probe.get_item("answer"));
        assert_eq!(value.unwrap().as_float(), Some(42.0));
        assert_eq!(warns, 1);
    }

    #[test]
    fn test_unrecognized_field_warns_once_and_errors() {
        let probe = Probe;

        let (value, warns) = count_warns(|| probe.get_item("not_a_field"));
        assert_eq!(
            value.unwrap_err(),
            PortfolioError::unknown_field("probe", "not_a_field")
        );
        assert_eq!(warns, 1);
    }

    #[test]
    fn test_field_value_accessors() {
        let v = FieldValue::Float(1.5);
        assert_eq!(v.as_float(), Some(1.5));
        assert_eq!(v.as_date(), None);

        let v = FieldValue::Date(None);
        assert_eq!(v.as_date(), Some(None));
        assert_eq!(v.as_float(), None);
    }
}

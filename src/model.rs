//! Filter model types exchanged with the grid engine.
//!
//! A [`FilterModel`] is the canonical description of one column's active
//! constraint and the only artifact crossing the controller/engine boundary.
//! The engine treats received models as immutable messages.
//!
//! The wire shape follows the grid engine's native filter models: the `Empty`
//! model serializes to a bare `{}` with no type tag, numeric range models
//! carry `filter`/`filterTo` keys, and date range models carry
//! `dateFrom`/`dateTo` keys with `YYYY-M-D` date strings (not zero-padded).
//! A derived serializer cannot express those key rules, so serialization is
//! implemented by hand.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single bound value carried by a range model.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOperand {
    /// A numeric bound.
    Number(f64),
    /// A date bound, already formatted as a `YYYY-M-D` model string.
    Date(String),
}

/// The canonical filter model consumed by the grid's row-filtering pass.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterModel {
    /// No constraint.
    Empty,
    /// Substring/pattern match (text and selector columns).
    Contains { filter: String },
    /// Lower bound only, inclusive.
    GreaterOrEqual { filter: FilterOperand },
    /// Upper bound only, inclusive.
    LessOrEqual { filter: FilterOperand },
    /// Both bounds, inclusive.
    InRange {
        filter: FilterOperand,
        filter_to: FilterOperand,
    },
}

impl FilterModel {
    /// Build a `Contains` model.
    pub fn contains<S: Into<String>>(filter: S) -> Self {
        FilterModel::Contains {
            filter: filter.into(),
        }
    }
}

/// Write one bound under the numeric key or the date key, depending on the
/// operand. Date models use `dateFrom` even for an upper-bound-only model.
fn serialize_bound<M: SerializeMap>(
    map: &mut M,
    operand: &FilterOperand,
    number_key: &'static str,
    date_key: &'static str,
) -> Result<(), M::Error> {
    match operand {
        FilterOperand::Number(n) => map.serialize_entry(number_key, n),
        FilterOperand::Date(d) => map.serialize_entry(date_key, d),
    }
}

impl Serialize for FilterModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FilterModel::Empty => serializer.serialize_map(Some(0))?.end(),
            FilterModel::Contains { filter } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "contains")?;
                map.serialize_entry("filter", filter)?;
                map.end()
            }
            FilterModel::GreaterOrEqual { filter } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "greaterThanOrEqual")?;
                serialize_bound(&mut map, filter, "filter", "dateFrom")?;
                map.end()
            }
            FilterModel::LessOrEqual { filter } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "lessThanOrEqual")?;
                serialize_bound(&mut map, filter, "filter", "dateFrom")?;
                map.end()
            }
            FilterModel::InRange { filter, filter_to } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "inRange")?;
                serialize_bound(&mut map, filter, "filter", "dateFrom")?;
                serialize_bound(&mut map, filter_to, "filterTo", "dateTo")?;
                map.end()
            }
        }
    }
}

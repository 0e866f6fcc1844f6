//! Column filter setup.
//!
//! One-time wiring invoked once per column at grid setup: binds the correct
//! floating filter controller to the column descriptor, selects the grid-
//! native filter family, and installs the comparator closures the grid
//! engine calls during its own filtering pass and during quick-filter text
//! search. No state machine lives here.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde_json::Value;

use crate::error::{GridFilterError, Result};
use crate::filter::date::{parse_date, parse_date_time};
use crate::filter::{
    DateFloatingFilter, FilterChangedCallback, FloatingFilter, FloatingFilterParams,
    NumberFloatingFilter, SelectorFloatingFilter, TextFloatingFilter,
};
use crate::normalize::{WildcardPattern, fold_accents};
use crate::view::ViewBinder;

/// Compares a cell's entry against the filter date during the engine's date
/// filtering pass. `Greater` means the entry is after the filter date.
pub type DateComparator = Arc<dyn Fn(NaiveDate, &Value) -> Ordering + Send + Sync>;

/// Normalizes text on both sides of the engine's text comparison.
pub type TextFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Custom text match: `(cell value, filter text) -> matches`. Both arguments
/// arrive already normalized by the text formatter, when one is installed.
pub type TextCustomComparator = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Per-column text extraction for the global quick-filter search.
pub type QuickFilterText = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Renders a cell value to display markup.
pub type CellRenderer = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Grid-native filter family a column is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFamily {
    /// Range-capable numeric filter.
    Number,
    /// Date filter.
    Date,
    /// Text filter.
    Text,
}

/// Engine-facing filter parameters attached to a column.
#[derive(Clone, Default)]
pub struct FilterParamsOptions {
    /// Treat both range bounds as inclusive.
    pub in_range_inclusive: bool,
    /// Date comparison override.
    pub comparator: Option<DateComparator>,
    /// Text normalization applied to both comparison sides.
    pub text_formatter: Option<TextFormatter>,
    /// Text match override.
    pub text_custom_comparator: Option<TextCustomComparator>,
}

/// Which floating filter controller a column is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatingFilterKind {
    Number,
    Date,
    Text,
    Selector,
}

/// A column's floating filter binding: controller kind, initialization
/// parameters and, for the selector, the row-data snapshot.
#[derive(Clone)]
pub struct FloatingFilterBinding {
    pub kind: FloatingFilterKind,
    pub params: FloatingFilterParams,
    /// Row snapshot the selector scans once for its distinct-value universe.
    pub rows: Option<Arc<Vec<Value>>>,
}

/// Column descriptor with the explicit optional fields the setup layer
/// mutates. Validated at setup time rather than duck-typed at use time.
#[derive(Clone, Default)]
pub struct ColumnDescriptor {
    /// Header name; also the row key the selector scans.
    pub header_name: String,
    pub filter: Option<FilterFamily>,
    pub filter_params: FilterParamsOptions,
    pub floating_filter: Option<FloatingFilterBinding>,
    pub cell_renderer: Option<CellRenderer>,
    pub get_quick_filter_text: Option<QuickFilterText>,
    pub min_width: Option<u32>,
}

impl ColumnDescriptor {
    /// Create a bare descriptor for a column.
    pub fn new<S: Into<String>>(header_name: S) -> Self {
        ColumnDescriptor {
            header_name: header_name.into(),
            ..Default::default()
        }
    }
}

/// Set up a numeric floating filter on a column.
pub fn setup_number_filter(
    col: &mut ColumnDescriptor,
    is_static: bool,
    default_value: Option<String>,
) {
    // Column should filter numbers properly
    col.filter = Some(FilterFamily::Number);
    col.filter_params.in_range_inclusive = true;
    col.floating_filter = Some(FloatingFilterBinding {
        kind: FloatingFilterKind::Number,
        params: FloatingFilterParams {
            is_static,
            default_value,
        },
        rows: None,
    });
}

/// Set up a date floating filter on a column, including the cell renderer
/// and quick-filter text producer that format stored values through the
/// fixed long-form display rule.
pub fn setup_date_filter(
    col: &mut ColumnDescriptor,
    is_static: bool,
    default_value: Option<String>,
) {
    col.min_width = Some(423);
    // Column should render and filter dates properly
    col.filter = Some(FilterFamily::Date);
    col.filter_params.comparator = Some(Arc::new(|filter_date, entry| {
        match parse_date(&cell_text(entry)) {
            Some(entry_date) => entry_date.cmp(&filter_date),
            // Unparseable entries compare equal and stay visible.
            None => Ordering::Equal,
        }
    }));
    col.cell_renderer = Some(Arc::new(|value| {
        format!("<span>{}</span>", display_date_string(value))
    }));
    col.get_quick_filter_text = Some(Arc::new(display_date_string));
    col.floating_filter = Some(FloatingFilterBinding {
        kind: FloatingFilterKind::Date,
        params: FloatingFilterParams {
            is_static,
            default_value,
        },
        rows: None,
    });
}

/// Set up a text floating filter on a column.
///
/// Unless `strict_match` is enabled, accent folding is installed as both the
/// column text formatter and the quick-filter text producer, so folding is
/// consistent across both filtering paths. Unless `lazy_filter` is enabled,
/// filter text is compiled to an anchored wildcard pattern; with it, the
/// engine's default substring match applies.
pub fn setup_text_filter(
    col: &mut ColumnDescriptor,
    is_static: bool,
    lazy_filter: bool,
    strict_match: bool,
    default_value: Option<String>,
) {
    col.filter = Some(FilterFamily::Text);

    if !strict_match {
        // for individual columns
        col.filter_params.text_formatter = Some(Arc::new(|s| fold_accents(s)));
        // for global search
        col.get_quick_filter_text = Some(Arc::new(|value| fold_accents(&cell_text(value))));
    }

    if !lazy_filter {
        col.filter_params.text_custom_comparator =
            Some(Arc::new(|value, filter_text| {
                match WildcardPattern::compile(filter_text) {
                    Ok(pattern) => pattern.matches(value),
                    Err(_) => false,
                }
            }));
    }

    col.floating_filter = Some(FloatingFilterBinding {
        kind: FloatingFilterKind::Text,
        params: FloatingFilterParams {
            is_static,
            default_value,
        },
        rows: None,
    });
}

/// Set up a selector floating filter on a column.
///
/// Replaces the column's filter parameters wholesale: the only surviving
/// parameter is the membership comparator, which tests whether the cell
/// value is contained in the concatenated selection.
pub fn setup_selector_filter(
    col: &mut ColumnDescriptor,
    is_static: bool,
    default_value: Option<String>,
    rows: Vec<Value>,
) {
    col.filter = Some(FilterFamily::Text);
    col.filter_params = FilterParamsOptions {
        text_custom_comparator: Some(Arc::new(|value, filter_text| filter_text.contains(value))),
        ..Default::default()
    };
    col.floating_filter = Some(FloatingFilterBinding {
        kind: FloatingFilterKind::Selector,
        params: FloatingFilterParams {
            is_static,
            default_value,
        },
        rows: Some(Arc::new(rows)),
    });
}

/// Instantiate the floating filter controller a column was bound to.
///
/// This is the factory the grid engine calls when it materializes a column's
/// floating filter widget.
pub fn create_floating_filter(
    col: &ColumnDescriptor,
    binder: &dyn ViewBinder,
    on_changed: FilterChangedCallback,
) -> Result<Box<dyn FloatingFilter>> {
    let binding = col
        .floating_filter
        .as_ref()
        .ok_or_else(|| GridFilterError::config("column has no floating filter binding"))?;

    match binding.kind {
        FloatingFilterKind::Number => Ok(Box::new(NumberFloatingFilter::new(
            binding.params.clone(),
            binder,
            on_changed,
        )?)),
        FloatingFilterKind::Date => Ok(Box::new(DateFloatingFilter::new(
            binding.params.clone(),
            binder,
            on_changed,
        )?)),
        FloatingFilterKind::Text => Ok(Box::new(TextFloatingFilter::new(
            binding.params.clone(),
            binder,
            on_changed,
        )?)),
        FloatingFilterKind::Selector => {
            let rows = binding.rows.as_ref().ok_or_else(|| {
                GridFilterError::config("selector filter requires a row snapshot")
            })?;
            Ok(Box::new(SelectorFloatingFilter::new(
                binding.params.clone(),
                &col.header_name,
                rows,
                binder,
                on_changed,
            )?))
        }
    }
}

/// Stringify a cell value the way it reads in the grid.
pub(crate) fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fixed long-form display rule for date cells: `YYYY-MM-DD, h:mm:ss
/// a.m./p.m. UTC`. Unparseable values display as-is.
fn display_date_string(value: &Value) -> String {
    let text = cell_text(value);
    match parse_date_time(&text) {
        Some(dt) => format_display_date(dt),
        None => text,
    }
}

fn format_display_date(dt: NaiveDateTime) -> String {
    let (is_pm, hour) = dt.time().hour12();
    let meridiem = if is_pm { "p.m." } else { "a.m." };
    format!(
        "{}, {}:{:02}:{:02} {} UTC",
        dt.format("%Y-%m-%d"),
        hour,
        dt.minute(),
        dt.second(),
        meridiem
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_setup_wires_family_and_binding() {
        let mut col = ColumnDescriptor::new("Population");
        setup_number_filter(&mut col, false, Some("5,10".to_string()));

        assert_eq!(col.filter, Some(FilterFamily::Number));
        assert!(col.filter_params.in_range_inclusive);

        let binding = col.floating_filter.unwrap();
        assert_eq!(binding.kind, FloatingFilterKind::Number);
        assert_eq!(binding.params.default_value.as_deref(), Some("5,10"));
    }

    #[test]
    fn test_date_setup_wires_comparator_renderer_and_width() {
        let mut col = ColumnDescriptor::new("Observed");
        setup_date_filter(&mut col, true, None);

        assert_eq!(col.filter, Some(FilterFamily::Date));
        assert_eq!(col.min_width, Some(423));
        assert!(col.filter_params.comparator.is_some());
        assert!(col.cell_renderer.is_some());
        assert!(col.get_quick_filter_text.is_some());
        assert_eq!(
            col.floating_filter.unwrap().kind,
            FloatingFilterKind::Date
        );
    }

    #[test]
    fn test_date_comparator_orders_entries_against_filter_date() {
        let mut col = ColumnDescriptor::new("Observed");
        setup_date_filter(&mut col, false, None);
        let comparator = col.filter_params.comparator.unwrap();

        let filter_date = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
        assert_eq!(comparator(filter_date, &json!("2019-06-02")), Ordering::Greater);
        assert_eq!(comparator(filter_date, &json!("2019-05-31")), Ordering::Less);
        // Same day, later time: truncation makes them equal.
        assert_eq!(
            comparator(filter_date, &json!("2019-06-01T18:30:00")),
            Ordering::Equal
        );
        // Unparseable entries compare equal.
        assert_eq!(comparator(filter_date, &json!("not a date")), Ordering::Equal);
    }

    #[test]
    fn test_date_display_rule() {
        assert_eq!(
            display_date_string(&json!("2019-06-01T13:45:12Z")),
            "2019-06-01, 1:45:12 p.m. UTC"
        );
        assert_eq!(
            display_date_string(&json!("2019-06-01")),
            "2019-06-01, 12:00:00 a.m. UTC"
        );
        assert_eq!(display_date_string(&json!("garbled")), "garbled");
    }

    #[test]
    fn test_date_cell_renderer_wraps_display_text() {
        let mut col = ColumnDescriptor::new("Observed");
        setup_date_filter(&mut col, false, None);
        let renderer = col.cell_renderer.unwrap();
        assert_eq!(
            renderer(&json!("2019-06-01")),
            "<span>2019-06-01, 12:00:00 a.m. UTC</span>"
        );
    }

    #[test]
    fn test_text_setup_installs_folding_on_both_paths() {
        let mut col = ColumnDescriptor::new("Name");
        setup_text_filter(&mut col, false, false, false, None);

        let formatter = col.filter_params.text_formatter.as_ref().unwrap();
        assert_eq!(formatter("Café"), "cafe");

        let quick = col.get_quick_filter_text.as_ref().unwrap();
        assert_eq!(quick(&json!("Œuf")), "oeuf");
    }

    #[test]
    fn test_strict_match_disables_folding() {
        let mut col = ColumnDescriptor::new("Name");
        setup_text_filter(&mut col, false, false, true, None);

        assert!(col.filter_params.text_formatter.is_none());
        assert!(col.get_quick_filter_text.is_none());
        // Wildcard comparator is independent of strict match.
        assert!(col.filter_params.text_custom_comparator.is_some());
    }

    #[test]
    fn test_lazy_filter_omits_wildcard_comparator() {
        let mut col = ColumnDescriptor::new("Name");
        setup_text_filter(&mut col, false, true, false, None);
        assert!(col.filter_params.text_custom_comparator.is_none());
    }

    #[test]
    fn test_wildcard_comparator_anchors_at_start() {
        let mut col = ColumnDescriptor::new("Name");
        setup_text_filter(&mut col, false, false, false, None);
        let comparator = col.filter_params.text_custom_comparator.unwrap();

        assert!(comparator("riverside", "riv*side"));
        assert!(comparator("riverside", "riv"));
        assert!(!comparator("east riverside", "riv"));
    }

    #[test]
    fn test_selector_setup_replaces_filter_params_wholesale() {
        let mut col = ColumnDescriptor::new("Province");
        // Pre-existing numeric wiring must not survive.
        setup_number_filter(&mut col, false, None);
        setup_selector_filter(&mut col, false, None, vec![json!({"Province": "Ontario"})]);

        assert!(!col.filter_params.in_range_inclusive);
        assert!(col.filter_params.comparator.is_none());
        assert!(col.filter_params.text_formatter.is_none());

        let comparator = col.filter_params.text_custom_comparator.unwrap();
        // Membership: is the cell value one of the selected options?
        assert!(comparator("Ontario", "OntarioQuebec"));
        assert!(!comparator("Alberta", "OntarioQuebec"));

        let binding = col.floating_filter.unwrap();
        assert_eq!(binding.kind, FloatingFilterKind::Selector);
        assert!(binding.rows.is_some());
    }

    #[test]
    fn test_create_floating_filter_requires_binding() {
        let col = ColumnDescriptor::new("Unbound");
        let callback: FilterChangedCallback = Arc::new(|_| {});
        let result = create_floating_filter(&col, &crate::view::PlainViewBinder, callback);
        assert!(result.is_err());
    }

    #[test]
    fn test_cell_text_stringifies_scalars() {
        assert_eq!(cell_text(&json!("abc")), "abc");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(true)), "true");
    }
}

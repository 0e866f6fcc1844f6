//! Floating filter controller for date range columns.
//!
//! Same two-bound shape as the numeric controller, but values are calendar
//! dates at day precision and the neither-present case yields the null model
//! (`None`) instead of `Empty`. The asymmetry matches the grid engine's
//! native date filter and is preserved deliberately.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::error::Result;
use crate::filter::{FilterChangedCallback, FloatingFilter, FloatingFilterParams, readonly_attr};
use crate::model::{FilterModel, FilterOperand};
use crate::view::{ViewBinder, ViewHandle};

const DATE_FILTER_TEMPLATE: &str = "<div class=\"gf-date-picker\">\
<input class=\"gf-date-min\" type=\"date\" value=\"{min}\"{readonly}/>\
<input class=\"gf-date-max\" type=\"date\" value=\"{max}\"{readonly}/></div>";

/// Floating filter with min and max date pickers.
pub struct DateFloatingFilter {
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    view: ViewHandle,
    on_changed: FilterChangedCallback,
    attached: bool,
}

impl DateFloatingFilter {
    /// Create a controller, parsing an optional `"from,to"` default.
    pub fn new(
        params: FloatingFilterParams,
        binder: &dyn ViewBinder,
        on_changed: FilterChangedCallback,
    ) -> Result<Self> {
        let (min, max) = parse_default(params.default_value.as_deref());

        let template = DATE_FILTER_TEMPLATE
            .replace("{min}", &picker_text(min))
            .replace("{max}", &picker_text(max))
            .replace("{readonly}", readonly_attr(params.is_static));
        let view = binder.render(&template)?;

        Ok(DateFloatingFilter {
            min,
            max,
            view,
            on_changed,
            attached: false,
        })
    }

    /// Update the lower bound from a picker value and emit. Time-of-day is
    /// discarded.
    pub fn on_min_changed(&mut self, value: Option<NaiveDateTime>) {
        self.min = value.map(|dt| dt.date());
        self.emit();
    }

    /// Update the upper bound from a picker value and emit.
    pub fn on_max_changed(&mut self, value: Option<NaiveDateTime>) {
        self.max = value.map(|dt| dt.date());
        self.emit();
    }

    /// Current bounds.
    pub fn bounds(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.min, self.max)
    }

    fn emit(&self) {
        (self.on_changed)(self.model());
    }
}

impl FloatingFilter for DateFloatingFilter {
    fn model(&self) -> Option<FilterModel> {
        derive_model(self.min, self.max)
    }

    fn on_attached(&mut self) {
        if !self.attached {
            self.attached = true;
            self.emit();
        }
    }

    fn on_parent_model_changed(&mut self, parent: Option<FilterModel>) {
        if parent.is_none() {
            self.min = None;
            self.max = None;
        }
    }

    fn view(&self) -> &ViewHandle {
        &self.view
    }
}

/// Model selection over the two optional bounds. Neither present is the null
/// model, not `Empty`.
fn derive_model(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Option<FilterModel> {
    match (min, max) {
        (Some(min), Some(max)) => Some(FilterModel::InRange {
            filter: FilterOperand::Date(model_date_string(min)),
            filter_to: FilterOperand::Date(model_date_string(max)),
        }),
        (Some(min), None) => Some(FilterModel::GreaterOrEqual {
            filter: FilterOperand::Date(model_date_string(min)),
        }),
        (None, Some(max)) => Some(FilterModel::LessOrEqual {
            filter: FilterOperand::Date(model_date_string(max)),
        }),
        (None, None) => None,
    }
}

/// Model date strings are `YYYY-M-D`, not zero-padded, for wire
/// compatibility with the engine's date filter.
fn model_date_string(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Lenient date parsing for serialized defaults and cell values. Accepts
/// RFC 3339, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` and plain
/// `YYYY-MM-DD`. Anything else is silently absent.
pub(crate) fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_date_time(raw).map(|dt| dt.date())
}

fn parse_default(default: Option<&str>) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match default {
        None => (None, None),
        Some(s) => {
            let mut parts = s.splitn(2, ',');
            let min = parts.next().and_then(parse_date);
            let max = parts.next().and_then(parse_date);
            (min, max)
        }
    }
}

fn picker_text(bound: Option<NaiveDate>) -> String {
    bound.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::PlainViewBinder;
    use std::sync::{Arc, Mutex};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_filter(default: Option<&str>) -> (DateFloatingFilter, Arc<Mutex<Vec<Option<FilterModel>>>>) {
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&emitted);
        let callback: FilterChangedCallback =
            Arc::new(move |model| sink.lock().unwrap().push(model));
        let params = FloatingFilterParams {
            is_static: false,
            default_value: default.map(String::from),
        };
        let filter = DateFloatingFilter::new(params, &PlainViewBinder, callback).unwrap();
        (filter, emitted)
    }

    #[test]
    fn test_model_truth_table() {
        let min = date(2019, 1, 5);
        let max = date(2019, 11, 20);

        assert_eq!(derive_model(None, None), None);
        assert_eq!(
            derive_model(Some(min), None),
            Some(FilterModel::GreaterOrEqual {
                filter: FilterOperand::Date("2019-1-5".to_string())
            })
        );
        assert_eq!(
            derive_model(None, Some(max)),
            Some(FilterModel::LessOrEqual {
                filter: FilterOperand::Date("2019-11-20".to_string())
            })
        );
        assert_eq!(
            derive_model(Some(min), Some(max)),
            Some(FilterModel::InRange {
                filter: FilterOperand::Date("2019-1-5".to_string()),
                filter_to: FilterOperand::Date("2019-11-20".to_string())
            })
        );
    }

    #[test]
    fn test_model_date_strings_are_not_zero_padded() {
        assert_eq!(model_date_string(date(2020, 3, 7)), "2020-3-7");
        assert_eq!(model_date_string(date(2020, 12, 25)), "2020-12-25");
    }

    #[test]
    fn test_default_value_parsed_into_bounds() {
        let (filter, _) = new_filter(Some("2019-01-05,2019-03-09"));
        assert_eq!(filter.bounds(), (Some(date(2019, 1, 5)), Some(date(2019, 3, 9))));
    }

    #[test]
    fn test_malformed_default_falls_to_empty() {
        let (filter, _) = new_filter(Some("yesterday,tomorrow"));
        assert_eq!(filter.bounds(), (None, None));
        assert_eq!(filter.model(), None);
    }

    #[test]
    fn test_time_of_day_is_discarded() {
        let (mut filter, emitted) = new_filter(None);
        filter.on_min_changed(parse_date_time("2019-06-01T13:45:12"));

        assert_eq!(filter.bounds().0, Some(date(2019, 6, 1)));
        assert_eq!(
            emitted.lock().unwrap()[0],
            Some(FilterModel::GreaterOrEqual {
                filter: FilterOperand::Date("2019-6-1".to_string())
            })
        );
    }

    #[test]
    fn test_clearing_both_bounds_emits_null_model() {
        let (mut filter, emitted) = new_filter(Some("2019-01-05,2019-03-09"));
        filter.on_min_changed(None);
        filter.on_max_changed(None);

        let emitted = emitted.lock().unwrap();
        // Min cleared first: a max-only model, then the null model.
        assert_eq!(
            emitted[0],
            Some(FilterModel::LessOrEqual {
                filter: FilterOperand::Date("2019-3-9".to_string())
            })
        );
        assert_eq!(emitted[1], None);
    }

    #[test]
    fn test_attach_emits_once() {
        let (mut filter, emitted) = new_filter(Some("2019-01-05,2019-03-09"));
        filter.on_attached();
        filter.on_attached();

        let emitted = emitted.lock().unwrap();
        assert_eq!(emitted.len(), 1);
        assert_eq!(
            emitted[0],
            Some(FilterModel::InRange {
                filter: FilterOperand::Date("2019-1-5".to_string()),
                filter_to: FilterOperand::Date("2019-3-9".to_string())
            })
        );
    }

    #[test]
    fn test_parent_clear_resets_without_emitting() {
        let (mut filter, emitted) = new_filter(Some("2019-01-05,2019-03-09"));
        filter.on_parent_model_changed(None);

        assert_eq!(filter.bounds(), (None, None));
        assert_eq!(filter.model(), None);
        assert!(emitted.lock().unwrap().is_empty());
    }

    #[test]
    fn test_parse_date_time_formats() {
        assert_eq!(
            parse_date_time("2019-06-01T13:45:12Z").map(|dt| dt.date()),
            Some(date(2019, 6, 1))
        );
        assert_eq!(parse_date("2019-06-01"), Some(date(2019, 6, 1)));
        assert_eq!(parse_date("06/01/2019"), None);
        assert_eq!(parse_date(""), None);
    }
}

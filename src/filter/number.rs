//! Floating filter controller for numeric range columns.
//!
//! Tracks `{min, max}`, both optionally absent, and collapses them into a
//! range model: both present -> `InRange`, min only -> `GreaterOrEqual`,
//! max only -> `LessOrEqual`, neither -> `Empty`.

use crate::error::Result;
use crate::filter::{FilterChangedCallback, FloatingFilter, FloatingFilterParams, readonly_attr};
use crate::model::{FilterModel, FilterOperand};
use crate::view::{ViewBinder, ViewHandle};

const NUMBER_FILTER_TEMPLATE: &str = "<div class=\"gf-min-max\">\
<input class=\"gf-min\" type=\"number\" value=\"{min}\"{readonly}/>\
<input class=\"gf-max\" type=\"number\" value=\"{max}\"{readonly}/></div>";

/// Floating filter with separate min and max input boxes.
pub struct NumberFloatingFilter {
    min: Option<f64>,
    max: Option<f64>,
    view: ViewHandle,
    on_changed: FilterChangedCallback,
    attached: bool,
}

impl NumberFloatingFilter {
    /// Create a controller, parsing an optional `"min,max"` default.
    pub fn new(
        params: FloatingFilterParams,
        binder: &dyn ViewBinder,
        on_changed: FilterChangedCallback,
    ) -> Result<Self> {
        let (min, max) = parse_default(params.default_value.as_deref());

        let template = NUMBER_FILTER_TEMPLATE
            .replace("{min}", &bound_text(min))
            .replace("{max}", &bound_text(max))
            .replace("{readonly}", readonly_attr(params.is_static));
        let view = binder.render(&template)?;

        Ok(NumberFloatingFilter {
            min,
            max,
            view,
            on_changed,
            attached: false,
        })
    }

    /// Update the filter minimum from raw input text and emit.
    pub fn on_min_changed(&mut self, raw: &str) {
        self.min = parse_bound(raw);
        self.emit();
    }

    /// Update the filter maximum from raw input text and emit.
    pub fn on_max_changed(&mut self, raw: &str) {
        self.max = parse_bound(raw);
        self.emit();
    }

    /// Current bounds.
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        (self.min, self.max)
    }

    fn emit(&self) {
        (self.on_changed)(self.model());
    }
}

impl FloatingFilter for NumberFloatingFilter {
    fn model(&self) -> Option<FilterModel> {
        Some(derive_model(self.min, self.max))
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

/// Model selection as a pure function of the two-valued state.
fn derive_model(min: Option<f64>, max: Option<f64>) -> FilterModel {
    match (min, max) {
        (Some(min), Some(max)) => FilterModel::InRange {
            filter: FilterOperand::Number(min),
            filter_to: FilterOperand::Number(max),
        },
        (Some(min), None) => FilterModel::GreaterOrEqual {
            filter: FilterOperand::Number(min),
        },
        (None, Some(max)) => FilterModel::LessOrEqual {
            filter: FilterOperand::Number(max),
        },
        (None, None) => FilterModel::Empty,
    }
}

/// Empty input means "no bound". Unparseable or non-finite input also maps
/// to "no bound" instead of carrying NaN into the model.
fn parse_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_default(default: Option<&str>) -> (Option<f64>, Option<f64>) {
    match default {
        None => (None, None),
        Some(s) => {
            let mut parts = s.splitn(2, ',');
            let min = parts.next().and_then(parse_bound);
            let max = parts.next().and_then(parse_bound);
            (min, max)
        }
    }
}

fn bound_text(bound: Option<f64>) -> String {
    bound.map(|v| v.to_string()).unwrap_or_default()
}

//! Floating filter controller for multi-select ("selector") columns.
//!
//! The selectable options are the distinct values observed for the column in
//! the row-data snapshot taken at construction time. The universe is a
//! snapshot, not reactive: rows added later do not appear as new options.
//!
//! The derived model concatenates every selected option in selection order
//! with NO separator. That loses option boundaries (selecting `["AB","C"]`
//! and `["A","BC"]` produce the same filter string) and is preserved for
//! compatibility with the engine-side membership comparator, which only ever
//! asks `filter_text.contains(value)`.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::Result;
use crate::filter::{FilterChangedCallback, FloatingFilter, FloatingFilterParams, readonly_attr};
use crate::model::FilterModel;
use crate::setup::cell_text;
use crate::view::{ViewBinder, ViewHandle};

const SELECTOR_FILTER_TEMPLATE: &str =
    "<div class=\"gf-selector\"><select multiple{readonly}>{options}</select></div>";

/// Floating filter with a multi-select drop-down.
pub struct SelectorFloatingFilter {
    selected: Vec<String>,
    options: Vec<String>,
    view: ViewHandle,
    on_changed: FilterChangedCallback,
    attached: bool,
}

impl SelectorFloatingFilter {
    /// Create a controller for `column_key`, scanning `rows` once for the
    /// distinct-value universe and parsing an optional quoted-list default.
    pub fn new(
        params: FloatingFilterParams,
        column_key: &str,
        rows: &[Value],
        binder: &dyn ViewBinder,
        on_changed: FilterChangedCallback,
    ) -> Result<Self> {
        let selected = parse_default_selection(params.default_value.as_deref());
        let options = distinct_values(rows, column_key);

        let rendered_options: String = options
            .iter()
            .map(|o| format!("<option>{o}</option>"))
            .collect();
        let template = SELECTOR_FILTER_TEMPLATE
            .replace("{options}", &rendered_options)
            .replace("{readonly}", readonly_attr(params.is_static));
        let view = binder.render(&template)?;

        Ok(SelectorFloatingFilter {
            selected,
            options,
            view,
            on_changed,
            attached: false,
        })
    }

    /// Replace the selection and emit. Fires when the user closes the
    /// drop-down after changing their choices.
    pub fn on_selection_changed(&mut self, selected: Vec<String>) {
        self.selected = selected;
        (self.on_changed)(self.model());
    }

    /// Currently selected options, in selection order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// The distinct-value universe computed at construction.
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl FloatingFilter for SelectorFloatingFilter {
    fn model(&self) -> Option<FilterModel> {
        Some(FilterModel::contains(self.selected.concat()))
    }

    fn on_attached(&mut self) {
        if !self.attached {
            self.attached = true;
            (self.on_changed)(self.model());
        }
    }

    fn on_parent_model_changed(&mut self, parent: Option<FilterModel>) {
        if parent.is_none() {
            self.selected.clear();
        }
    }

    fn view(&self) -> &ViewHandle {
        &self.view
    }
}

/// Distinct stringified values for `column_key` across the snapshot, in
/// first-seen order. Rows without the key contribute nothing.
fn distinct_values(rows: &[Value], column_key: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for row in rows {
        let Some(value) = row.get(column_key) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        let text = cell_text(value);
        if seen.insert(text.clone()) {
            values.push(text);
        }
    }
    values
}

/// A default selection arrives as a quoted list (`["A", "B"]`). Tokens are
/// split on `"`; the bracket/separator artifacts and empty fragments are
/// discarded, leaving the run of option tokens.
fn parse_default_selection(default: Option<&str>) -> Vec<String> {
    match default {
        None => Vec::new(),
        Some(s) => s
            .split('"')
            .filter(|t| !matches!(*t, "[" | "]" | ", ") && !t.is_empty())
            .map(String::from)
            .collect(),
    }
}

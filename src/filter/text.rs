//! Floating filter controller for text columns.
//!
//! Single-string state. The model is always `Contains`, even for the empty
//! string (which matches as a substring of everything). Accent folding and
//! wildcard compilation are NOT applied here: they live in the setup layer
//! so the quick-filter path, which bypasses this controller entirely, shares
//! them.

use crate::error::Result;
use crate::filter::{FilterChangedCallback, FloatingFilter, FloatingFilterParams, readonly_attr};
use crate::model::FilterModel;
use crate::view::{ViewBinder, ViewHandle};

const TEXT_FILTER_TEMPLATE: &str =
    "<div class=\"gf-input\"><input type=\"text\" value=\"{value}\"{readonly}/></div>";

/// Floating filter with a single text input box.
pub struct TextFloatingFilter {
    input: String,
    view: ViewHandle,
    on_changed: FilterChangedCallback,
    attached: bool,
}

impl TextFloatingFilter {
    /// Create a controller; an absent default means the empty string.
    pub fn new(
        params: FloatingFilterParams,
        binder: &dyn ViewBinder,
        on_changed: FilterChangedCallback,
    ) -> Result<Self> {
        let input = params.default_value.unwrap_or_default();

        let template = TEXT_FILTER_TEMPLATE
            .replace("{value}", &input)
            .replace("{readonly}", readonly_attr(params.is_static));
        let view = binder.render(&template)?;

        Ok(TextFloatingFilter {
            input,
            view,
            on_changed,
            attached: false,
        })
    }

    /// Replace the input text and emit.
    pub fn on_input_changed(&mut self, raw: &str) {
        self.input = raw.to_string();
        (self.on_changed)(self.model());
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FloatingFilter for TextFloatingFilter {
    fn model(&self) -> Option<FilterModel> {
        Some(FilterModel::contains(self.input.clone()))
    }

    fn on_attached(&mut self) {
        if !self.attached {
            self.attached = true;
            (self.on_changed)(self.model());
        }
    }

    fn on_parent_model_changed(&mut self, parent: Option<FilterModel>) {
        if parent.is_none() {
            self.input.clear();
        }
    }

    fn view(&self) -> &ViewHandle {
        &self.view
    }
}

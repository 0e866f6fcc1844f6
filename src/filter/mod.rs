//! Floating filter controllers.
//!
//! Each controller is a small state machine owning the state of one widget
//! instance for one column. On every user edit it recomputes its state,
//! derives the canonical [`FilterModel`] and notifies the grid engine through
//! a single fire-and-forget callback. The engine's clear-all action flows
//! back through [`FloatingFilter::on_parent_model_changed`] with `None`.

pub mod date;
pub mod number;
pub mod selector;
pub mod text;

pub use self::date::DateFloatingFilter;
pub use self::number::NumberFloatingFilter;
pub use self::selector::SelectorFloatingFilter;
pub use self::text::TextFloatingFilter;

use std::sync::Arc;

use crate::model::FilterModel;
use crate::view::ViewHandle;

/// Callback through which a controller notifies the grid engine of a model
/// change. `None` is the date controller's "no constraint" sentinel; the
/// other controllers always pass `Some`.
pub type FilterChangedCallback = Arc<dyn Fn(Option<FilterModel>) + Send + Sync>;

/// Initialization parameter bundle shared by all floating filters.
#[derive(Debug, Clone, Default)]
pub struct FloatingFilterParams {
    /// Render the input read-only (statically typed column).
    pub is_static: bool,
    /// Serialized default value; format depends on the filter family
    /// (comma-joined for ranges, quoted-list for the selector). Malformed
    /// defaults silently yield the empty state.
    pub default_value: Option<String>,
}

/// Uniform capability contract for floating filter controllers.
pub trait FloatingFilter {
    /// Derive the current canonical filter model. `None` means the null
    /// model (date controller with both bounds absent).
    fn model(&self) -> Option<FilterModel>;

    /// One-shot attach signal from the host view layer, invoked exactly once
    /// after first paint. Emits the initial model so a supplied default takes
    /// effect without user interaction. Repeat calls are ignored.
    fn on_attached(&mut self);

    /// Parent filter change hook. `None` clears to the empty default state
    /// without re-emitting (the engine has already cleared); any `Some`
    /// model is ignored.
    fn on_parent_model_changed(&mut self, parent: Option<FilterModel>);

    /// The rendered view handle for this widget.
    fn view(&self) -> &ViewHandle;
}

/// Read-only attribute fragment for statically typed columns.
pub(crate) fn readonly_attr(is_static: bool) -> &'static str {
    if is_static { " readonly" } else { "" }
}

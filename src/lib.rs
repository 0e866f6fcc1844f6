//! # gridfilter
//!
//! Floating filter controllers for tabular data grids.
//!
//! A floating filter is the small input control sitting beneath a grid column
//! header. Each controller in this crate owns the state of one such control
//! and collapses partial user input (one or two numbers, one or two dates,
//! free text, or a multi-selection) into a canonical [`model::FilterModel`]
//! that the grid's row-filtering engine consumes.
//!
//! ## Features
//!
//! - Four controllers behind a uniform [`filter::FloatingFilter`] contract
//! - Deterministic filter-model derivation for every value-present/absent case
//! - Accent folding and wildcard pattern compilation shared between column
//!   filtering and the global quick-filter search
//! - Column setup layer that wires controllers, comparators and quick-filter
//!   text producers onto a column descriptor

pub mod error;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod setup;
pub mod view;

pub mod prelude {
    pub use crate::error::{GridFilterError, Result};
    pub use crate::filter::{
        DateFloatingFilter, FilterChangedCallback, FloatingFilter, FloatingFilterParams,
        NumberFloatingFilter, SelectorFloatingFilter, TextFloatingFilter,
    };
    pub use crate::model::{FilterModel, FilterOperand};
    pub use crate::setup::{
        ColumnDescriptor, FilterFamily, create_floating_filter, setup_date_filter,
        setup_number_filter, setup_selector_filter, setup_text_filter,
    };
    pub use crate::view::{PlainViewBinder, ViewBinder, ViewHandle};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

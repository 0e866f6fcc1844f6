//! Text normalization shared by column filtering and the quick-filter search.
//!
//! Both the per-column text comparator and the global quick-filter text
//! producer run cell values and filter text through the same pipeline, so a
//! folded filter matches a folded value on either path.
//!
//! # Available normalizers
//!
//! - [`accent::fold_accents`] - lower-casing plus Latin diacritic folding
//! - [`wildcard::WildcardPattern`] - anchored-at-start wildcard compilation

pub mod accent;
pub mod wildcard;

pub use self::accent::fold_accents;
pub use self::wildcard::WildcardPattern;

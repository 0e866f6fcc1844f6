//! View binding between controllers and the host UI layer.
//!
//! Controllers do not talk to a DOM or a templating engine. They hand a
//! widget template to a constructor-injected [`ViewBinder`] and keep the
//! returned [`ViewHandle`] for the lifetime of the widget. The host view
//! layer owns actual rendering and event wiring, and signals attachment by
//! calling the controller's `on_attached` hook exactly once after first
//! paint, before any user-driven change event on the same widget.

use crate::error::Result;

/// Opaque handle to a rendered widget view.
///
/// What "rendered" means is up to the binder; the controllers only ever hold
/// and expose the handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHandle {
    markup: String,
}

impl ViewHandle {
    /// Create a handle over rendered markup.
    pub fn new<S: Into<String>>(markup: S) -> Self {
        ViewHandle {
            markup: markup.into(),
        }
    }

    /// Get the rendered markup.
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

/// Capability the controllers need from the host view layer.
pub trait ViewBinder {
    /// Render a widget template into a view handle.
    fn render(&self, template: &str) -> Result<ViewHandle>;
}

/// Default binder that takes the template as the rendered markup verbatim.
///
/// Sufficient for hosts that do their own templating downstream, and for
/// tests.
#[derive(Debug, Default, Clone)]
pub struct PlainViewBinder;

impl ViewBinder for PlainViewBinder {
    fn render(&self, template: &str) -> Result<ViewHandle> {
        Ok(ViewHandle::new(template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_binder_passes_markup_through() {
        let binder = PlainViewBinder;
        let view = binder.render("<div class=\"gf-input\"></div>").unwrap();
        assert_eq!(view.markup(), "<div class=\"gf-input\"></div>");
    }
}

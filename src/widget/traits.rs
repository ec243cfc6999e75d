//! Widget trait: style interning, child hand-off, markup rendering.
//!
//! The `Widget` trait is the core abstraction for every node in the tree. A
//! widget knows its type name, how to intern its visual configuration as a
//! shared class, which child widgets it owns (by slot), and how to render
//! itself to markup once its children have been rendered.

use std::any::Any;

use crate::css::{ClassName, StyleRegistry};
use crate::dom::{Slot, WidgetId};

use super::context::RenderContext;

// ---------------------------------------------------------------------------
// RenderError
// ---------------------------------------------------------------------------

/// A node could not produce markup. Aborts the publish that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("{widget} {id} requires a {slot} child")]
    MissingChild {
        widget: &'static str,
        id: WidgetId,
        slot: Slot,
    },
    #[error("widget {0} is not mounted")]
    NotMounted(WidgetId),
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
///
/// Widget is object-safe; builder helpers that need `Self: Sized` live on
/// [`WidgetExt`].
pub trait Widget: Any {
    /// The type name for this widget (e.g. "Text", "Column").
    fn widget_type(&self) -> &'static str;

    /// Intern this widget's style key and return its shared class.
    ///
    /// Defaults to `None` for widgets without shared styling.
    fn intern_style(&self, _styles: &mut StyleRegistry) -> Option<ClassName> {
        None
    }

    /// Hand the owned child widgets over for mounting.
    ///
    /// Called exactly once, when the widget is mounted; afterwards the children
    /// live in the registry under this widget's id. Defaults to no children.
    fn take_children(&mut self) -> Vec<(Slot, Box<dyn Widget>)> {
        Vec::new()
    }

    /// Produce this widget's markup. Child markup is available through
    /// `cx`, keyed by slot.
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError>;

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ---------------------------------------------------------------------------
// WidgetExt
// ---------------------------------------------------------------------------

/// Extension trait providing builder-style conveniences for widgets.
///
/// Automatically implemented for all types that implement `Widget`.
pub trait WidgetExt: Widget {
    /// Box this widget as a trait object.
    fn boxed(self) -> Box<dyn Widget>
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

impl<T: Widget> WidgetExt for T {}

/// Append `widget` under `slot` to a child list.
pub(crate) fn push_child(
    children: &mut Vec<(Slot, Box<dyn Widget>)>,
    slot: Slot,
    widget: Option<Box<dyn Widget>>,
) {
    if let Some(widget) = widget {
        children.push((slot, widget));
    }
}

// ===========================================================================
// Tests
// ===========================================================================

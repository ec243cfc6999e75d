//! Widget system: trait, render context, markup helpers.

pub mod context;
pub mod markup;
pub mod traits;

pub use context::{RenderContext, SlotMarkup};
pub use markup::{escape_attr, escape_text, js_string, onclick_attr};
pub use traits::{RenderError, Widget, WidgetExt};

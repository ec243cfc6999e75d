//! Testing helpers: an in-memory surface, a markup scanner, and one-shot
//! rendering of widget trees.
//!
//! Use [`MemorySurface`] to watch what a [`Framework`](crate::Framework)
//! publishes without a webview, and [`render_to_markup`] to mount and render
//! a single widget tree for assertions.

pub mod markup;
pub mod surface;

pub use markup::{class_names, element_ids, elements, find_element, root_id, text_content, Element};
pub use surface::MemorySurface;

use crate::dom::WidgetTree;
use crate::error::FrameworkError;
use crate::widget::Widget;

/// Mount `widget` into a fresh tree and render it. Ids start at `id_1`.
pub fn render_to_markup(widget: impl Widget) -> Result<(String, WidgetTree), FrameworkError> {
    let mut tree = WidgetTree::new();
    let root = tree.mount(Box::new(widget), None)?;
    let markup = tree.render(root)?;
    Ok((markup, tree))
}

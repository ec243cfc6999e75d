//! Subtree serialization: render every node bottom-up and hand each widget
//! its children's markup grouped by slot.

use crate::dom::{NodeRegistry, WidgetId};
use crate::widget::{RenderContext, RenderError, SlotMarkup};

/// Markup for the subtree rooted at `root`.
///
/// Rendering is a pure function of each node's own fields and its children's
/// markup, so the same mounted tree always serializes identically.
pub fn render_subtree(registry: &NodeRegistry, root: WidgetId) -> Result<String, RenderError> {
    let node = registry.get(root).ok_or(RenderError::NotMounted(root))?;

    let mut slots = SlotMarkup::new();
    for child in registry.children(root) {
        let slot = registry
            .get(child)
            .map(|n| n.slot())
            .ok_or(RenderError::NotMounted(child))?;
        slots.push(slot, render_subtree(registry, child)?);
    }

    let cx = RenderContext::new(node.id(), node.class(), &slots);
    node.widget().render(&cx)
}

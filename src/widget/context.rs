//! RenderContext: what a widget sees while producing markup.

use crate::css::ClassName;
use crate::dom::{Slot, WidgetId};

use super::markup::escape_attr;
use super::traits::RenderError;

/// Already-rendered child markup, in registration order, tagged by slot.
#[derive(Debug, Default, Clone)]
pub struct SlotMarkup {
    entries: Vec<(Slot, String)>,
}

impl SlotMarkup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slot: Slot, markup: String) {
        self.entries.push((slot, markup));
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, slot: Slot, markup: impl Into<String>) -> Self {
        self.push(slot, markup.into());
        self
    }

    /// The first markup in `slot`.
    pub fn first(&self, slot: Slot) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, markup)| markup.as_str())
    }

    /// All markup in `slot`, in order.
    pub fn all(&self, slot: Slot) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(s, _)| *s == slot)
            .map(|(_, markup)| markup.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-node render input: identity, shared class, and child markup.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    id: WidgetId,
    class: Option<&'a ClassName>,
    slots: &'a SlotMarkup,
}

impl<'a> RenderContext<'a> {
    pub fn new(id: WidgetId, class: Option<&'a ClassName>, slots: &'a SlotMarkup) -> Self {
        Self { id, class, slots }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn class(&self) -> Option<&'a ClassName> {
        self.class
    }

    /// ` class='shared-x-n'`, or empty when the node has no shared class.
    pub fn class_attr(&self) -> String {
        match self.class {
            Some(class) => format!(" class='{}'", escape_attr(class.as_str())),
            None => String::new(),
        }
    }

    /// The child markup in `slot`, if any.
    pub fn slot(&self, slot: Slot) -> Option<&'a str> {
        self.slots.first(slot)
    }

    /// The child markup in `slot`, or the empty string.
    pub fn slot_or_empty(&self, slot: Slot) -> &'a str {
        self.slots.first(slot).unwrap_or("")
    }

    /// Every child in `slot`, concatenated.
    pub fn joined(&self, slot: Slot) -> String {
        self.slots.all(slot).collect()
    }

    /// Whether `slot` holds at least one child.
    pub fn has(&self, slot: Slot) -> bool {
        self.slots.first(slot).is_some()
    }

    /// The child markup in `slot`, or [`RenderError::MissingChild`].
    pub fn required(&self, slot: Slot, widget: &'static str) -> Result<&'a str, RenderError> {
        self.slots.first(slot).ok_or(RenderError::MissingChild {
            widget,
            id: self.id,
            slot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slot_lookup() {
        let slots = SlotMarkup::new()
            .with(Slot::CHILDREN, "<a/>")
            .with(Slot::LEADING, "<i/>")
            .with(Slot::CHILDREN, "<b/>");
        let cx = RenderContext::new(WidgetId::from_raw(1), None, &slots);
        assert_eq!(cx.slot(Slot::CHILDREN), Some("<a/>"));
        assert_eq!(cx.joined(Slot::CHILDREN), "<a/><b/>");
        assert_eq!(cx.slot_or_empty(Slot::TITLE), "");
        assert!(cx.has(Slot::LEADING));
        assert!(!cx.has(Slot::ACTIONS));
        assert_eq!(cx.class_attr(), "");
    }

    #[test]
    fn required_reports_slot() {
        let slots = SlotMarkup::new();
        let cx = RenderContext::new(WidgetId::from_raw(9), None, &slots);
        assert!(matches!(
            cx.required(Slot::BODY, "Scaffold"),
            Err(RenderError::MissingChild { slot, .. }) if slot == Slot::BODY
        ));
    }
}

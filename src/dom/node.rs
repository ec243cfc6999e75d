//! Node types: Slot, Node.

use std::fmt;

use crate::css::ClassName;
use crate::widget::Widget;

use super::id::WidgetId;

/// Names the ownership edge between a parent and a child.
///
/// Single-child widgets use [`Slot::CHILD`], list widgets use
/// [`Slot::CHILDREN`], and composite widgets expose named slots such as
/// [`Slot::LEADING`] or [`Slot::APP_BAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(&'static str);

impl Slot {
    pub const CHILD: Slot = Slot("child");
    pub const CHILDREN: Slot = Slot("children");
    pub const LEADING: Slot = Slot("leading");
    pub const TITLE: Slot = Slot("title");
    pub const SUBTITLE: Slot = Slot("subtitle");
    pub const ACTIONS: Slot = Slot("actions");
    pub const CONTENT: Slot = Slot("content");
    pub const ACTION: Slot = Slot("action");
    pub const APP_BAR: Slot = Slot("app_bar");
    pub const BODY: Slot = Slot("body");
    pub const DRAWER: Slot = Slot("drawer");
    pub const END_DRAWER: Slot = Slot("end_drawer");
    pub const FLOATING_ACTION_BUTTON: Slot = Slot("floating_action_button");
    pub const SNACK_BAR: Slot = Slot("snack_bar");
    pub const BOTTOM_SHEET: Slot = Slot("bottom_sheet");
    pub const DIALOG: Slot = Slot("dialog");

    /// A custom slot name for widgets outside the built-in catalogue.
    pub const fn named(name: &'static str) -> Self {
        Slot(name)
    }

    /// The slot name.
    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A mounted widget: identity, the slot it occupies under its parent, its
/// interned shared class, and the widget value itself.
pub struct Node {
    id: WidgetId,
    slot: Slot,
    class: Option<ClassName>,
    widget: Box<dyn Widget>,
}

impl Node {
    pub(crate) fn new(
        id: WidgetId,
        slot: Slot,
        class: Option<ClassName>,
        widget: Box<dyn Widget>,
    ) -> Self {
        Self {
            id,
            slot,
            class,
            widget,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Slot under the parent. Roots report [`Slot::CHILD`].
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// The shared style class this node references, if it has styling.
    pub fn class(&self) -> Option<&ClassName> {
        self.class.as_ref()
    }

    pub fn widget_type(&self) -> &'static str {
        self.widget.widget_type()
    }

    pub fn widget(&self) -> &dyn Widget {
        self.widget.as_ref()
    }

    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        self.widget.as_mut()
    }

    /// Downcast the widget to a concrete type.
    pub fn downcast_ref<W: Widget>(&self) -> Option<&W> {
        self.widget.as_any().downcast_ref::<W>()
    }

    /// Mutably downcast the widget to a concrete type.
    pub fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W> {
        self.widget.as_any_mut().downcast_mut::<W>()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("type", &self.widget.widget_type())
            .field("slot", &self.slot)
            .field("class", &self.class)
            .finish()
    }
}

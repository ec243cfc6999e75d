//! ListTile widget: a row with leading, title and subtitle slots.

use std::any::Any;

use crate::css::{ClassName, DeclarationBlock, EdgeInsets, StyleKey, StyleRegistry};
use crate::dom::Slot;
use crate::widget::traits::push_child;
use crate::widget::{onclick_attr, RenderContext, RenderError, Widget};

/// A clickable list row.
pub struct ListTile {
    leading: Option<Box<dyn Widget>>,
    title: Option<Box<dyn Widget>>,
    subtitle: Option<Box<dyn Widget>>,
    on_tap: Option<String>,
    key: ListTileKey,
}

/// Style key for [`ListTile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListTileKey {
    pub padding: EdgeInsets,
}

impl StyleKey for ListTileKey {
    const KIND: &'static str = "list-tile";

    fn declarations(&self) -> DeclarationBlock {
        DeclarationBlock::new()
            .with("display", "flex")
            .with("align-items", "center")
            .with("padding", self.padding)
            .with("cursor", "pointer")
    }
}

impl ListTile {
    pub fn new() -> Self {
        Self {
            leading: None,
            title: None,
            subtitle: None,
            on_tap: None,
            key: ListTileKey {
                padding: EdgeInsets::all(10),
            },
        }
    }

    pub fn leading(mut self, leading: impl Widget) -> Self {
        self.leading = Some(Box::new(leading));
        self
    }

    pub fn title(mut self, title: impl Widget) -> Self {
        self.title = Some(Box::new(title));
        self
    }

    pub fn subtitle(mut self, subtitle: impl Widget) -> Self {
        self.subtitle = Some(Box::new(subtitle));
        self
    }

    /// Name of the callback invoked on tap.
    pub fn on_tap(mut self, callback: impl Into<String>) -> Self {
        self.on_tap = Some(callback.into());
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.key.padding = padding;
        self
    }

    pub fn callback(&self) -> Option<&str> {
        self.on_tap.as_deref()
    }
}

impl Default for ListTile {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ListTile {
    fn widget_type(&self) -> &'static str {
        "ListTile"
    }

    fn intern_style(&self, styles: &mut StyleRegistry) -> Option<ClassName> {
        Some(styles.intern(&self.key))
    }

    fn take_children(&mut self) -> Vec<(Slot, Box<dyn Widget>)> {
        let mut children = Vec::new();
        push_child(&mut children, Slot::LEADING, self.leading.take());
        push_child(&mut children, Slot::TITLE, self.title.take());
        push_child(&mut children, Slot::SUBTITLE, self.subtitle.take());
        children
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        Ok(format!(
            "<div id='{}'{}{}>\
             <div style='margin-right: 10px;'>{}</div>\
             <div><div>{}</div><div style='color: grey;'>{}</div></div>\
             </div>",
            cx.id(),
            cx.class_attr(),
            onclick_attr(self.callback()),
            cx.slot_or_empty(Slot::LEADING),
            cx.slot_or_empty(Slot::TITLE),
            cx.slot_or_empty(Slot::SUBTITLE),
        ))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//! SizedBox widget: fixed-size spacer or wrapper.

use std::any::Any;

use crate::css::{px, ClassName, DeclarationBlock, StyleKey, StyleRegistry};
use crate::dom::Slot;
use crate::widget::traits::push_child;
use crate::widget::{RenderContext, RenderError, Widget};

/// A box with an exact width and/or height.
pub struct SizedBox {
    child: Option<Box<dyn Widget>>,
    key: SizedBoxKey,
}

/// Style key for [`SizedBox`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SizedBoxKey {
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl StyleKey for SizedBoxKey {
    const KIND: &'static str = "sized-box";

    fn declarations(&self) -> DeclarationBlock {
        let mut block = DeclarationBlock::new();
        block.push_opt("height", self.height.map(px));
        block.push_opt("width", self.width.map(px));
        block
    }
}

impl SizedBox {
    pub fn new(width: Option<i32>, height: Option<i32>) -> Self {
        Self {
            child: None,
            key: SizedBoxKey { width, height },
        }
    }

    /// Vertical gap of `height` pixels.
    pub fn height(height: i32) -> Self {
        Self::new(None, Some(height))
    }

    /// Horizontal gap of `width` pixels.
    pub fn width(width: i32) -> Self {
        Self::new(Some(width), None)
    }

    pub fn child(mut self, child: impl Widget) -> Self {
        self.child = Some(Box::new(child));
        self
    }
}

impl Widget for SizedBox {
    fn widget_type(&self) -> &'static str {
        "SizedBox"
    }

    fn intern_style(&self, styles: &mut StyleRegistry) -> Option<ClassName> {
        Some(styles.intern(&self.key))
    }

    fn take_children(&mut self) -> Vec<(Slot, Box<dyn Widget>)> {
        let mut children = Vec::new();
        push_child(&mut children, Slot::CHILD, self.child.take());
        children
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        Ok(format!(
            "<div id='{}'{}>{}</div>",
            cx.id(),
            cx.class_attr(),
            cx.slot_or_empty(Slot::CHILD)
        ))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//! Container widget: a decorated box around an optional child.

use std::any::Any;

use crate::css::{
    px, Alignment, BoxConstraints, BoxDecoration, ClassName, Color, DeclarationBlock,
    EdgeInsets, StyleKey, StyleRegistry,
};
use crate::dom::Slot;
use crate::widget::traits::push_child;
use crate::widget::{RenderContext, RenderError, Widget};

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// A box with padding, margin, size, colour and decoration.
///
/// The child is optional; an empty container renders an empty `div`.
pub struct Container {
    child: Option<Box<dyn Widget>>,
    key: ContainerKey,
}

/// Style key for [`Container`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContainerKey {
    pub padding: Option<EdgeInsets>,
    pub margin: Option<EdgeInsets>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub color: Option<Color>,
    pub decoration: Option<BoxDecoration>,
    pub alignment: Option<Alignment>,
    pub constraints: Option<BoxConstraints>,
}

impl StyleKey for ContainerKey {
    const KIND: &'static str = "container";

    fn declarations(&self) -> DeclarationBlock {
        let mut block = DeclarationBlock::new().with("position", "relative");
        if let Some(constraints) = &self.constraints {
            constraints.declare(&mut block);
        }
        if let Some(alignment) = &self.alignment {
            alignment.declare(&mut block);
        }
        block.push_opt("padding", self.padding);
        block.push_opt("margin", self.margin);
        block.push_opt("width", self.width.map(px));
        block.push_opt("height", self.height.map(px));
        block.push_opt("background-color", self.color.as_ref());
        if let Some(decoration) = &self.decoration {
            decoration.declare(&mut block);
        }
        block
    }
}

impl Container {
    pub fn new() -> Self {
        Self {
            child: None,
            key: ContainerKey::default(),
        }
    }

    /// Set the child widget (builder pattern).
    pub fn child(mut self, child: impl Widget) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.key.padding = Some(padding);
        self
    }

    pub fn margin(mut self, margin: EdgeInsets) -> Self {
        self.key.margin = Some(margin);
        self
    }

    pub fn width(mut self, width: i32) -> Self {
        self.key.width = Some(width);
        self
    }

    pub fn height(mut self, height: i32) -> Self {
        self.key.height = Some(height);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.key.color = Some(color);
        self
    }

    pub fn decoration(mut self, decoration: BoxDecoration) -> Self {
        self.key.decoration = Some(decoration);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.key.alignment = Some(alignment);
        self
    }

    pub fn constraints(mut self, constraints: BoxConstraints) -> Self {
        self.key.constraints = Some(constraints);
        self
    }

    pub fn key(&self) -> &ContainerKey {
        &self.key
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn widget_type(&self) -> &'static str {
        "Container"
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

// ===========================================================================
// Tests
// ===========================================================================

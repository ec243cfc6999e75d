//! Drawer widget: a side panel that slides in from the start or end edge.

use std::any::Any;

use crate::css::{
    px, BorderSide, BorderStyle, ClassName, Color, DeclarationBlock, EdgeInsets, StyleKey,
    StyleRegistry,
};
use crate::dom::Slot;
use crate::widget::traits::push_child;
use crate::widget::{RenderContext, RenderError, Widget};

/// Which edge a drawer is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerSide {
    Start,
    End,
}

/// A side panel. Closed drawers pull themselves out of view with a negative
/// margin equal to their full width, so the body takes the freed space.
pub struct Drawer {
    child: Option<Box<dyn Widget>>,
    key: DrawerKey,
}

/// Style key for [`Drawer`]. The open flag is part of the key, so opening a
/// drawer switches it to a different shared class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrawerKey {
    pub side: DrawerSide,
    pub width: i32,
    pub padding: EdgeInsets,
    pub background: Color,
    pub border: BorderSide,
    pub open: bool,
}

impl DrawerKey {
    /// Width plus horizontal padding plus border.
    pub fn total_width(&self) -> i32 {
        self.width + self.padding.horizontal() + self.border.width_px()
    }
}

impl StyleKey for DrawerKey {
    const KIND: &'static str = "drawer";

    fn declarations(&self) -> DeclarationBlock {
        let (border_edge, margin_edge) = match self.side {
            DrawerSide::Start => ("border-right", "margin-left"),
            DrawerSide::End => ("border-left", "margin-right"),
        };
        let offset = if self.open {
            px(0)
        } else {
            px(-self.total_width())
        };
        DeclarationBlock::new()
            .with("flex", "none")
            .with("width", px(self.width))
            .with("padding", self.padding)
            .with("height", "100%")
            .with("background", &self.background)
            .with("overflow-y", "auto")
            .with(border_edge, self.border.shorthand())
            .with(margin_edge, offset)
            .with("transition", "margin 0.3s ease")
    }
}

impl Drawer {
    fn on_side(side: DrawerSide, child: impl Widget) -> Self {
        Self {
            child: Some(Box::new(child)),
            key: DrawerKey {
                side,
                width: 250,
                padding: EdgeInsets::all(20),
                background: Color::white(),
                border: BorderSide::new().with_width(1).with_style(BorderStyle::Solid),
                open: false,
            },
        }
    }

    /// A drawer on the start edge.
    pub fn new(child: impl Widget) -> Self {
        Self::on_side(DrawerSide::Start, child)
    }

    /// A drawer on the end edge.
    pub fn end(child: impl Widget) -> Self {
        Self::on_side(DrawerSide::End, child)
    }

    pub fn open(mut self, open: bool) -> Self {
        self.key.open = open;
        self
    }

    pub fn width(mut self, width: i32) -> Self {
        self.key.width = width;
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.key.padding = padding;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.key.background = color;
        self
    }

    pub fn border(mut self, border: BorderSide) -> Self {
        self.key.border = border;
        self
    }

    pub fn is_open(&self) -> bool {
        self.key.open
    }

    pub fn side(&self) -> DrawerSide {
        self.key.side
    }

    pub fn key(&self) -> &DrawerKey {
        &self.key
    }
}

impl Widget for Drawer {
    fn widget_type(&self) -> &'static str {
        match self.key.side {
            DrawerSide::Start => "Drawer",
            DrawerSide::End => "EndDrawer",
        }
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

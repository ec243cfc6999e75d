//! BottomSheet widget: a panel that slides up from the bottom edge.

use std::any::Any;

use crate::css::{
    px, BoxShadow, ClassName, Color, DeclarationBlock, EdgeInsets, StyleKey, StyleRegistry,
};
use crate::dom::Slot;
use crate::widget::traits::push_child;
use crate::widget::{RenderContext, RenderError, Widget};

use super::dialog::modal_barrier;

/// A fixed-height sheet pinned to the bottom of the viewport. Closed sheets
/// are translated fully below the edge.
pub struct BottomSheet {
    child: Option<Box<dyn Widget>>,
    barrier: Option<Color>,
    key: BottomSheetKey,
}

/// Style key for [`BottomSheet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BottomSheetKey {
    pub height: i32,
    pub padding: EdgeInsets,
    pub background: Color,
    pub shadow: Option<BoxShadow>,
    pub draggable: bool,
    pub open: bool,
}

impl StyleKey for BottomSheetKey {
    const KIND: &'static str = "bottom-sheet";

    fn declarations(&self) -> DeclarationBlock {
        let mut block = DeclarationBlock::new()
            .with("position", "fixed")
            .with("left", 0)
            .with("bottom", 0)
            .with("z-index", 900)
            .with("box-sizing", "border-box")
            .with("width", "100%")
            .with("height", px(self.height))
            .with("padding", self.padding)
            .with("background-color", &self.background);
        block.push_opt("box-shadow", self.shadow.as_ref());
        block.push(
            "transform",
            if self.open {
                "translateY(0px)"
            } else {
                "translateY(100%)"
            },
        );
        block.push("transition", "transform 0.3s ease");
        if self.draggable {
            block.push("cursor", "grab");
        }
        block
    }
}

impl BottomSheet {
    pub fn new(child: impl Widget) -> Self {
        Self {
            child: Some(Box::new(child)),
            barrier: None,
            key: BottomSheetKey {
                height: 300,
                padding: EdgeInsets::all(20),
                background: Color::white(),
                shadow: None,
                draggable: true,
                open: false,
            },
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.key.open = open;
        self
    }

    /// Dim the page behind an open sheet with `color`.
    pub fn barrier(mut self, color: Color) -> Self {
        self.barrier = Some(color);
        self
    }

    pub fn height(mut self, height: i32) -> Self {
        self.key.height = height;
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

    pub fn shadow(mut self, shadow: BoxShadow) -> Self {
        self.key.shadow = Some(shadow);
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.key.draggable = draggable;
        self
    }

    pub fn is_open(&self) -> bool {
        self.key.open
    }

    pub fn key(&self) -> &BottomSheetKey {
        &self.key
    }
}

impl Widget for BottomSheet {
    fn widget_type(&self) -> &'static str {
        "BottomSheet"
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
        let barrier = match &self.barrier {
            Some(color) if self.key.open => modal_barrier(color, 899),
            _ => String::new(),
        };
        Ok(format!(
            "<div id='{}' style='display: contents;'>{barrier}<div{}>{}</div></div>",
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

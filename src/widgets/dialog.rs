//! Dialog widget: a centred modal box over a dimming barrier.

use std::any::Any;

use crate::css::{
    BorderRadius, ClassName, Color, DeclarationBlock, EdgeInsets, StyleKey, StyleRegistry,
    TextAlign,
};
use crate::dom::Slot;
use crate::widget::traits::push_child;
use crate::widget::{escape_attr, RenderContext, RenderError, Widget};

/// A full-viewport barrier drawn under a modal at `z_index`.
pub(crate) fn modal_barrier(color: &Color, z_index: i32) -> String {
    format!(
        "<div style='position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; \
         background-color: {}; z-index: {z_index};'></div>",
        escape_attr(color.as_str())
    )
}

/// A modal with title, content and action slots.
///
/// The root element is a `display: contents` wrapper carrying the id, so the
/// barrier and the box are replaced together.
pub struct Dialog {
    title: Option<Box<dyn Widget>>,
    content: Option<Box<dyn Widget>>,
    actions: Vec<Box<dyn Widget>>,
    barrier: Color,
    key: DialogKey,
}

/// Style key for [`Dialog`]. Open and closed dialogs use different classes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialogKey {
    pub background: Color,
    pub padding: EdgeInsets,
    pub radius: BorderRadius,
    pub elevation: i32,
    pub title_align: TextAlign,
    pub title_padding: EdgeInsets,
    pub content_padding: EdgeInsets,
    pub open: bool,
}

impl StyleKey for DialogKey {
    const KIND: &'static str = "dialog";

    fn declarations(&self) -> DeclarationBlock {
        DeclarationBlock::new()
            .with("display", if self.open { "block" } else { "none" })
            .with("position", "fixed")
            .with("top", "50%")
            .with("left", "50%")
            .with("transform", "translate(-50%, -50%)")
            .with("border-radius", self.radius)
            .with("background-color", &self.background)
            .with("padding", self.padding)
            .with(
                "box-shadow",
                format!("0 {}px {}px rgba(0, 0, 0, 0.2)", self.elevation, self.elevation * 2),
            )
            .with("max-width", "330px")
            .with("min-width", "180px")
            .with("z-index", 1000)
    }
}

impl Dialog {
    pub fn new() -> Self {
        Self {
            title: None,
            content: None,
            actions: Vec::new(),
            barrier: Color::rgba(0, 0, 0, 50),
            key: DialogKey {
                background: Color::hex("fff"),
                padding: EdgeInsets::all(20),
                radius: BorderRadius::all(10),
                elevation: 8,
                title_align: TextAlign::Center,
                title_padding: EdgeInsets::all(10),
                content_padding: EdgeInsets::all(5),
                open: false,
            },
        }
    }

    pub fn title(mut self, title: impl Widget) -> Self {
        self.title = Some(Box::new(title));
        self
    }

    pub fn content(mut self, content: impl Widget) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    /// Append an action widget (builder pattern).
    pub fn action(mut self, action: impl Widget) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.key.open = open;
        self
    }

    pub fn barrier(mut self, color: Color) -> Self {
        self.barrier = color;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.key.background = color;
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.key.padding = padding;
        self
    }

    pub fn radius(mut self, radius: BorderRadius) -> Self {
        self.key.radius = radius;
        self
    }

    pub fn elevation(mut self, elevation: i32) -> Self {
        self.key.elevation = elevation;
        self
    }

    pub fn title_align(mut self, align: TextAlign) -> Self {
        self.key.title_align = align;
        self
    }

    pub fn is_open(&self) -> bool {
        self.key.open
    }

    pub fn key(&self) -> &DialogKey {
        &self.key
    }
}

impl Default for Dialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Dialog {
    fn widget_type(&self) -> &'static str {
        "Dialog"
    }

    fn intern_style(&self, styles: &mut StyleRegistry) -> Option<ClassName> {
        Some(styles.intern(&self.key))
    }

    fn take_children(&mut self) -> Vec<(Slot, Box<dyn Widget>)> {
        let mut children = Vec::new();
        push_child(&mut children, Slot::TITLE, self.title.take());
        push_child(&mut children, Slot::CONTENT, self.content.take());
        children.extend(self.actions.drain(..).map(|action| (Slot::ACTIONS, action)));
        children
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let barrier = if self.key.open {
            modal_barrier(&self.barrier, 999)
        } else {
            String::new()
        };
        let title = cx
            .slot(Slot::TITLE)
            .map(|title| {
                format!(
                    "<div style='text-align: {}; padding: {};'>{title}</div>",
                    self.key.title_align.as_str(),
                    self.key.title_padding
                )
            })
            .unwrap_or_default();
        let content = cx
            .slot(Slot::CONTENT)
            .map(|content| {
                format!(
                    "<div style='padding: {}; margin-top: 4px;'>{content}</div>",
                    self.key.content_padding
                )
            })
            .unwrap_or_default();
        Ok(format!(
            "<div id='{}' style='display: contents;'>{barrier}<div{}>{title}{content}\
             <div class='dialog-actions' style='margin-top: 20px;'>{}</div></div></div>",
            cx.id(),
            cx.class_attr(),
            cx.joined(Slot::ACTIONS),
        ))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//! SnackBar widget: a transient message pinned to the bottom edge.

use std::any::Any;
use std::time::Duration;

use crate::css::{ClassName, Color, DeclarationBlock, EdgeInsets, StyleKey, StyleRegistry};
use crate::dom::Slot;
use crate::widget::traits::push_child;
use crate::widget::{RenderContext, RenderError, Widget};

/// A bottom message bar with optional action.
///
/// Visibility is carried by the style key (`display: flex` or `none`). The
/// duration is not visual; it tells the owner of the snack bar how long to
/// wait before hiding it again.
pub struct SnackBar {
    content: Option<Box<dyn Widget>>,
    action: Option<Box<dyn Widget>>,
    duration: Duration,
    key: SnackBarKey,
}

/// Style key for [`SnackBar`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnackBarKey {
    pub background: Color,
    pub padding: EdgeInsets,
    pub visible: bool,
}

impl StyleKey for SnackBarKey {
    const KIND: &'static str = "snack-bar";

    fn declarations(&self) -> DeclarationBlock {
        DeclarationBlock::new()
            .with("display", if self.visible { "flex" } else { "none" })
            .with("position", "fixed")
            .with("bottom", 0)
            .with("left", 0)
            .with("width", "calc(100% - 48px)")
            .with("padding", self.padding)
            .with("background-color", &self.background)
            .with("box-shadow", "0px -2px 10px rgba(0, 0, 0, 0.3)")
            .with("z-index", 999)
            .with("justify-content", "space-between")
            .with("align-items", "center")
    }
}

impl SnackBar {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

    pub fn new(content: impl Widget) -> Self {
        Self {
            content: Some(Box::new(content)),
            action: None,
            duration: Self::DEFAULT_DURATION,
            key: SnackBarKey {
                background: Color::grey(),
                padding: EdgeInsets::symmetric(24, 16),
                visible: false,
            },
        }
    }

    pub fn action(mut self, action: impl Widget) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.key.visible = visible;
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

    pub fn is_visible(&self) -> bool {
        self.key.visible
    }

    pub fn display_duration(&self) -> Duration {
        self.duration
    }

    pub fn key(&self) -> &SnackBarKey {
        &self.key
    }
}

impl Widget for SnackBar {
    fn widget_type(&self) -> &'static str {
        "SnackBar"
    }

    fn intern_style(&self, styles: &mut StyleRegistry) -> Option<ClassName> {
        Some(styles.intern(&self.key))
    }

    fn take_children(&mut self) -> Vec<(Slot, Box<dyn Widget>)> {
        let mut children = Vec::new();
        push_child(&mut children, Slot::CONTENT, self.content.take());
        push_child(&mut children, Slot::ACTION, self.action.take());
        children
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let content = cx.required(Slot::CONTENT, self.widget_type())?;
        Ok(format!(
            "<div id='{}'{}><div>{content}</div>{}</div>",
            cx.id(),
            cx.class_attr(),
            cx.slot_or_empty(Slot::ACTION)
        ))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render_to_markup;
    use crate::widgets::{Button, Text};
    use pretty_assertions::assert_eq;

    #[test]
    fn hidden_by_default() {
        let bar = SnackBar::new(Text::new("Saved"));
        assert!(!bar.is_visible());
        assert_eq!(bar.display_duration(), Duration::from_millis(3000));
        assert_eq!(bar.key().declarations().get("display"), Some("none"));
    }

    #[test]
    fn visible_uses_flex() {
        let bar = SnackBar::new(Text::new("Saved")).visible(true);
        assert_eq!(bar.key().declarations().get("display"), Some("flex"));
    }

    #[test]
    fn renders_content_and_action() {
        let bar = SnackBar::new(Text::new("Saved"))
            .action(Button::text().child(Text::new("Undo")).on_pressed("undo"));
        let (markup, _) = render_to_markup(bar).unwrap();
        assert!(markup.starts_with(
            "<div id='id_1' class='shared-snack-bar-0'><div><p id='id_2'"
        ));
        assert!(markup.contains("handleClick(\"undo\")"));
    }
}

//! Button widget: an interactive button invoking a named callback.
//!
//! Buttons render their single child inside a `<button>` element whose
//! `onclick` calls the bridge's `handleClick` with the registered callback
//! name. A button without a child cannot be rendered.

use std::any::Any;

use crate::css::{ButtonStyle, ClassName, DeclarationBlock, StyleKey, StyleRegistry};
use crate::dom::Slot;
use crate::widget::traits::push_child;
use crate::widget::{onclick_attr, RenderContext, RenderError, Widget};

// ---------------------------------------------------------------------------
// ButtonVariant
// ---------------------------------------------------------------------------

/// Visual family of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Raised button with a background.
    Elevated,
    /// Flat, transparent button.
    Text,
    /// Transparent button around an icon.
    Icon,
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// An interactive button.
///
/// # Examples
///
/// ```ignore
/// let btn = Button::elevated()
///     .child(Text::new("Increment"))
///     .on_pressed("increment");
/// ```
pub struct Button {
    child: Option<Box<dyn Widget>>,
    on_pressed: Option<String>,
    key: ButtonKey,
}

/// Style key for [`Button`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ButtonKey {
    pub variant: ButtonVariant,
    pub style: Option<ButtonStyle>,
}

impl StyleKey for ButtonKey {
    const KIND: &'static str = "button";

    fn declarations(&self) -> DeclarationBlock {
        let mut block = DeclarationBlock::new().with("cursor", "pointer");
        if self.variant != ButtonVariant::Elevated {
            block.push("background-color", "transparent");
        }
        if let Some(style) = &self.style {
            style.declare(&mut block);
        }
        block
    }
}

impl Button {
    fn with_variant(variant: ButtonVariant) -> Self {
        Self {
            child: None,
            on_pressed: None,
            key: ButtonKey {
                variant,
                style: None,
            },
        }
    }

    pub fn elevated() -> Self {
        Self::with_variant(ButtonVariant::Elevated)
    }

    pub fn text() -> Self {
        Self::with_variant(ButtonVariant::Text)
    }

    pub fn icon() -> Self {
        Self::with_variant(ButtonVariant::Icon)
    }

    /// Set the child widget (builder pattern).
    pub fn child(mut self, child: impl Widget) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Name of the callback invoked on click (builder pattern).
    pub fn on_pressed(mut self, callback: impl Into<String>) -> Self {
        self.on_pressed = Some(callback.into());
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.key.style = Some(style);
        self
    }

    pub fn variant(&self) -> ButtonVariant {
        self.key.variant
    }

    /// The callback name, if any.
    pub fn callback(&self) -> Option<&str> {
        self.on_pressed.as_deref()
    }

    pub fn key(&self) -> &ButtonKey {
        &self.key
    }
}

impl Widget for Button {
    fn widget_type(&self) -> &'static str {
        match self.key.variant {
            ButtonVariant::Elevated => "ElevatedButton",
            ButtonVariant::Text => "TextButton",
            ButtonVariant::Icon => "IconButton",
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
        let child = cx.required(Slot::CHILD, self.widget_type())?;
        Ok(format!(
            "<button id='{}'{}{}>{child}</button>",
            cx.id(),
            cx.class_attr(),
            onclick_attr(self.callback())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Color;
    use crate::dom::WidgetId;
    use crate::error::FrameworkError;
    use crate::testing::render_to_markup;
    use crate::widgets::Text;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_onclick() {
        let btn = Button::elevated().child(Text::new("Go")).on_pressed("go");
        let (markup, _) = render_to_markup(btn).unwrap();
        assert_eq!(
            markup,
            "<button id='id_1' class='shared-button-0' onclick='handleClick(\"go\")'>\
             <p id='id_2' class='shared-text-0'>Go</p></button>"
        );
    }

    #[test]
    fn no_callback_no_onclick() {
        let (markup, _) = render_to_markup(Button::text().child(Text::new("x"))).unwrap();
        assert!(!markup.contains("onclick"));
    }

    #[test]
    fn missing_child_is_render_error() {
        let err = render_to_markup(Button::elevated().on_pressed("go")).unwrap_err();
        assert!(matches!(
            err,
            FrameworkError::Render(RenderError::MissingChild { widget: "ElevatedButton", id, slot })
                if id == WidgetId::from_raw(1) && slot == Slot::CHILD
        ));
    }

    #[test]
    fn variant_types() {
        assert_eq!(Button::elevated().widget_type(), "ElevatedButton");
        assert_eq!(Button::text().widget_type(), "TextButton");
        assert_eq!(Button::icon().widget_type(), "IconButton");
    }

    #[test]
    fn flat_variants_are_transparent() {
        let block = Button::text().key().declarations();
        assert_eq!(block.get("background-color"), Some("transparent"));
        let block = Button::elevated()
            .style(ButtonStyle::new().with_background(Color::named("blue")))
            .key()
            .declarations();
        assert_eq!(block.get("background-color"), Some("blue"));
        assert_eq!(block.get("border"), Some("none"));
    }
}

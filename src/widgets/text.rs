//! Text widget: a paragraph of styled text.

use std::any::Any;

use crate::css::{ClassName, DeclarationBlock, StyleKey, StyleRegistry, TextAlign, TextStyle};
use crate::widget::{escape_text, RenderContext, RenderError, Widget};

/// A single paragraph of text.
///
/// # Examples
///
/// ```ignore
/// let title = Text::new("Hello").style(TextStyle::new().with_font_size(20));
/// ```
#[derive(Debug, Clone)]
pub struct Text {
    data: String,
    key: TextKey,
}

/// Style key for [`Text`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextKey {
    pub style: Option<TextStyle>,
    pub align: Option<TextAlign>,
}

impl StyleKey for TextKey {
    const KIND: &'static str = "text";

    fn declarations(&self) -> DeclarationBlock {
        let mut block = DeclarationBlock::new();
        if let Some(style) = &self.style {
            style.declare(&mut block);
        }
        block.push_opt("text-align", self.align.map(TextAlign::as_str));
        block.push("margin-top", "0px");
        block.push("margin-bottom", "0px");
        block
    }
}

impl Text {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            key: TextKey::default(),
        }
    }

    /// Set the text style (builder pattern).
    pub fn style(mut self, style: TextStyle) -> Self {
        self.key.style = Some(style);
        self
    }

    /// Set the horizontal alignment (builder pattern).
    pub fn align(mut self, align: TextAlign) -> Self {
        self.key.align = Some(align);
        self
    }

    /// The text content.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn key(&self) -> &TextKey {
        &self.key
    }
}

impl Widget for Text {
    fn widget_type(&self) -> &'static str {
        "Text"
    }

    fn intern_style(&self, styles: &mut StyleRegistry) -> Option<ClassName> {
        Some(styles.intern(&self.key))
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        Ok(format!(
            "<p id='{}'{}>{}</p>",
            cx.id(),
            cx.class_attr(),
            escape_text(&self.data)
        ))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

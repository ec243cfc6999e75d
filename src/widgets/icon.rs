//! Icon widget: a font-awesome glyph.

use std::any::Any;

use crate::css::{px, ClassName, Color, DeclarationBlock, StyleKey, StyleRegistry};
use crate::widget::{escape_attr, RenderContext, RenderError, Widget};

/// A font-awesome icon, e.g. `Icon::new("plus")` renders `fa fa-plus`.
#[derive(Debug, Clone)]
pub struct Icon {
    name: String,
    key: IconKey,
}

/// Style key for [`Icon`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconKey {
    pub size: i32,
    pub color: Option<Color>,
}

impl StyleKey for IconKey {
    const KIND: &'static str = "icon";

    fn declarations(&self) -> DeclarationBlock {
        let mut block = DeclarationBlock::new().with("font-size", px(self.size));
        block.push_opt("color", self.color.as_ref());
        block
    }
}

impl Icon {
    pub const DEFAULT_SIZE: i32 = 24;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: IconKey {
                size: Self::DEFAULT_SIZE,
                color: None,
            },
        }
    }

    pub fn size(mut self, size: i32) -> Self {
        self.key.size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.key.color = Some(color);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Widget for Icon {
    fn widget_type(&self) -> &'static str {
        "Icon"
    }

    fn intern_style(&self, styles: &mut StyleRegistry) -> Option<ClassName> {
        Some(styles.intern(&self.key))
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let shared = cx
            .class()
            .map(|class| format!(" {class}"))
            .unwrap_or_default();
        Ok(format!(
            "<i id='{}' class='fa fa-{}{shared}'></i>",
            cx.id(),
            escape_attr(&self.name)
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
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_fa_classes() {
        let (markup, _) = render_to_markup(Icon::new("plus")).unwrap();
        assert_eq!(markup, "<i id='id_1' class='fa fa-plus shared-icon-0'></i>");
    }

    #[test]
    fn declarations() {
        let icon = Icon::new("bars").size(30).color(Color::white());
        assert_eq!(
            icon.key.declarations().to_inline(),
            "font-size: 30px; color: white;"
        );
    }
}

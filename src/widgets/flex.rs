//! Flex widget: Column and Row.

use std::any::Any;

use crate::css::{
    ClassName, CrossAxisAlignment, DeclarationBlock, EdgeInsets, MainAxisAlignment, MainAxisSize,
    StyleKey, StyleRegistry,
};
use crate::dom::Slot;
use crate::widget::{RenderContext, RenderError, Widget};

/// Main axis of a [`Flex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// A linear list of children laid out with flexbox.
///
/// `Flex::column()` stacks children vertically and reports the widget type
/// `"Column"`; `Flex::row()` lays them out horizontally as `"Row"`.
pub struct Flex {
    children: Vec<Box<dyn Widget>>,
    key: FlexKey,
}

/// Style key for [`Flex`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlexKey {
    pub axis: Axis,
    pub main_axis_alignment: MainAxisAlignment,
    pub cross_axis_alignment: CrossAxisAlignment,
    pub main_axis_size: MainAxisSize,
    pub padding: Option<EdgeInsets>,
    pub spacing: Option<i32>,
}

impl StyleKey for FlexKey {
    const KIND: &'static str = "flex";

    fn declarations(&self) -> DeclarationBlock {
        let (direction, extent) = match self.axis {
            Axis::Vertical => ("column", "height"),
            Axis::Horizontal => ("row", "width"),
        };
        let mut block = DeclarationBlock::new()
            .with("display", "flex")
            .with("flex-direction", direction)
            .with("justify-content", self.main_axis_alignment.as_str())
            .with("align-items", self.cross_axis_alignment.as_str());
        if self.main_axis_size == MainAxisSize::Max {
            block.push(extent, "100%");
        }
        block.push_opt("padding", self.padding);
        block.push_opt("gap", self.spacing.map(crate::css::px));
        block
    }
}

impl Flex {
    fn with_axis(axis: Axis) -> Self {
        Self {
            children: Vec::new(),
            key: FlexKey {
                axis,
                main_axis_alignment: MainAxisAlignment::default(),
                cross_axis_alignment: CrossAxisAlignment::default(),
                main_axis_size: MainAxisSize::default(),
                padding: None,
                spacing: None,
            },
        }
    }

    /// A vertical flex.
    pub fn column() -> Self {
        Self::with_axis(Axis::Vertical)
    }

    /// A horizontal flex.
    pub fn row() -> Self {
        Self::with_axis(Axis::Horizontal)
    }

    /// Append a child (builder pattern).
    pub fn child(mut self, child: impl Widget) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append already boxed children (builder pattern).
    pub fn children(mut self, children: impl IntoIterator<Item = Box<dyn Widget>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn main_axis_alignment(mut self, alignment: MainAxisAlignment) -> Self {
        self.key.main_axis_alignment = alignment;
        self
    }

    pub fn cross_axis_alignment(mut self, alignment: CrossAxisAlignment) -> Self {
        self.key.cross_axis_alignment = alignment;
        self
    }

    pub fn main_axis_size(mut self, size: MainAxisSize) -> Self {
        self.key.main_axis_size = size;
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.key.padding = Some(padding);
        self
    }

    /// Gap between children in pixels.
    pub fn spacing(mut self, spacing: i32) -> Self {
        self.key.spacing = Some(spacing);
        self
    }

    pub fn axis(&self) -> Axis {
        self.key.axis
    }

    pub fn key(&self) -> &FlexKey {
        &self.key
    }
}

impl Widget for Flex {
    fn widget_type(&self) -> &'static str {
        match self.key.axis {
            Axis::Vertical => "Column",
            Axis::Horizontal => "Row",
        }
    }

    fn intern_style(&self, styles: &mut StyleRegistry) -> Option<ClassName> {
        Some(styles.intern(&self.key))
    }

    fn take_children(&mut self) -> Vec<(Slot, Box<dyn Widget>)> {
        self.children
            .drain(..)
            .map(|child| (Slot::CHILDREN, child))
            .collect()
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        Ok(format!(
            "<div id='{}'{}>{}</div>",
            cx.id(),
            cx.class_attr(),
            cx.joined(Slot::CHILDREN)
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
    use crate::widgets::Text;
    use pretty_assertions::assert_eq;

    #[test]
    fn widget_types() {
        assert_eq!(Flex::column().widget_type(), "Column");
        assert_eq!(Flex::row().widget_type(), "Row");
    }

    #[test]
    fn children_in_order() {
        let column = Flex::column().child(Text::new("a")).child(Text::new("b"));
        let (markup, tree) = render_to_markup(column).unwrap();
        assert_eq!(
            markup,
            "<div id='id_1' class='shared-flex-0'>\
             <p id='id_2' class='shared-text-0'>a</p>\
             <p id='id_3' class='shared-text-0'>b</p></div>"
        );
        let root = tree.registry().root().unwrap();
        assert_eq!(tree.registry().children_in(root, Slot::CHILDREN).len(), 2);
    }

    #[test]
    fn column_declarations() {
        let key = Flex::column()
            .main_axis_alignment(MainAxisAlignment::SpaceBetween)
            .key()
            .clone();
        assert_eq!(
            key.declarations().to_inline(),
            "display: flex; flex-direction: column; justify-content: space-between; \
             align-items: center; height: 100%;"
        );
    }

    #[test]
    fn row_min_size_has_no_extent() {
        let key = Flex::row().main_axis_size(MainAxisSize::Min).spacing(8).key().clone();
        let block = key.declarations();
        assert_eq!(block.get("width"), None);
        assert_eq!(block.get("gap"), Some("8px"));
        assert_eq!(block.get("flex-direction"), Some("row"));
    }

    #[test]
    fn rows_and_columns_intern_separately() {
        let mut styles = StyleRegistry::new();
        let column = Flex::column().intern_style(&mut styles);
        let row = Flex::row().intern_style(&mut styles);
        assert_ne!(column, row);
    }
}

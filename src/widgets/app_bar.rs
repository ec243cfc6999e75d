//! AppBar widget: the top bar with leading, title and action slots.

use std::any::Any;

use crate::css::{ClassName, Color, DeclarationBlock, StyleKey, StyleRegistry};
use crate::dom::Slot;
use crate::widget::traits::push_child;
use crate::widget::{RenderContext, RenderError, Widget};

/// A 56px header bar.
pub struct AppBar {
    leading: Option<Box<dyn Widget>>,
    title: Option<Box<dyn Widget>>,
    actions: Vec<Box<dyn Widget>>,
    key: AppBarKey,
}

/// Style key for [`AppBar`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppBarKey {
    pub background: Option<Color>,
    pub elevation: Option<i32>,
    pub shadow_color: Color,
    pub title_spacing: i32,
    pub pinned: bool,
}

impl Default for AppBarKey {
    fn default() -> Self {
        Self {
            background: None,
            elevation: None,
            shadow_color: Color::rgba(0, 0, 0, 20),
            title_spacing: 10,
            pinned: false,
        }
    }
}

impl StyleKey for AppBarKey {
    const KIND: &'static str = "app-bar";

    fn declarations(&self) -> DeclarationBlock {
        let mut block = DeclarationBlock::new();
        block.push_opt("background-color", self.background.as_ref());
        let elevation = self.elevation.unwrap_or(6);
        block.push("box-shadow", format!("0 {elevation}px 5px {}", self.shadow_color));
        block.push("height", "56px");
        block.push("display", "flex");
        block.push("align-items", "center");
        if self.pinned {
            block.push("position", "fixed");
            block.push("width", "100%");
        } else {
            block.push("position", "relative");
        }
        block.push("z-index", 1);
        block
    }
}

impl AppBar {
    pub fn new() -> Self {
        Self {
            leading: None,
            title: None,
            actions: Vec::new(),
            key: AppBarKey::default(),
        }
    }

    pub fn leading(mut self, leading: impl Widget) -> Self {
        self.leading = Some(Box::new(leading));
        self
    }

    pub fn title(mut self, title: impl Widget) -> Self {
        self.title = Some(Box::new(title));
        self
    }

    /// Append an action widget (builder pattern).
    pub fn action(mut self, action: impl Widget) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.key.background = Some(color);
        self
    }

    pub fn elevation(mut self, elevation: i32) -> Self {
        self.key.elevation = Some(elevation);
        self
    }

    pub fn shadow_color(mut self, color: Color) -> Self {
        self.key.shadow_color = color;
        self
    }

    pub fn title_spacing(mut self, spacing: i32) -> Self {
        self.key.title_spacing = spacing;
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.key.pinned = pinned;
        self
    }
}

impl Default for AppBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for AppBar {
    fn widget_type(&self) -> &'static str {
        "AppBar"
    }

    fn intern_style(&self, styles: &mut StyleRegistry) -> Option<ClassName> {
        Some(styles.intern(&self.key))
    }

    fn take_children(&mut self) -> Vec<(Slot, Box<dyn Widget>)> {
        let mut children = Vec::new();
        push_child(&mut children, Slot::LEADING, self.leading.take());
        push_child(&mut children, Slot::TITLE, self.title.take());
        children.extend(self.actions.drain(..).map(|action| (Slot::ACTIONS, action)));
        children
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let leading_css = if cx.has(Slot::LEADING) {
            "margin-left: 16px;"
        } else {
            ""
        };
        let actions_css = if cx.has(Slot::ACTIONS) {
            "margin-right: 16px;"
        } else {
            ""
        };
        Ok(format!(
            "<header id='{}'{}>\
             <div style='{leading_css}'>{}</div>\
             <div style='flex: 1; margin-left: {}px;'>{}</div>\
             <div style='{actions_css}'>{}</div>\
             </header>",
            cx.id(),
            cx.class_attr(),
            cx.slot_or_empty(Slot::LEADING),
            self.key.title_spacing,
            cx.slot_or_empty(Slot::TITLE),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render_to_markup;
    use crate::widgets::{Icon, Text};
    use pretty_assertions::assert_eq;

    #[test]
    fn slots_render_in_place() {
        let bar = AppBar::new()
            .leading(Icon::new("bars"))
            .title(Text::new("Home"))
            .action(Icon::new("search"))
            .action(Icon::new("gear"));
        let (markup, tree) = render_to_markup(bar).unwrap();
        assert!(markup.starts_with("<header id='id_1' class='shared-app-bar-0'>"));
        assert!(markup.contains("<div style='margin-left: 16px;'><i id='id_2'"));
        assert!(markup.contains("<div style='flex: 1; margin-left: 10px;'><p id='id_3'"));
        assert!(markup.contains("fa-search"));
        assert!(markup.contains("fa-gear"));
        let root = tree.registry().root().unwrap();
        assert_eq!(tree.registry().children_in(root, Slot::ACTIONS).len(), 2);
        assert_eq!(tree.registry().children_in(root, Slot::LEADING).len(), 1);
    }

    #[test]
    fn empty_bar_has_no_margins() {
        let (markup, _) = render_to_markup(AppBar::new()).unwrap();
        assert!(markup.contains("<div style=''></div>"));
    }

    #[test]
    fn declarations() {
        let key = AppBar::new().background(Color::named("blue")).pinned(true).key;
        let block = key.declarations();
        assert_eq!(block.get("background-color"), Some("blue"));
        assert_eq!(block.get("box-shadow"), Some("0 6px 5px rgba(0, 0, 0, 0.2)"));
        assert_eq!(block.get("position"), Some("fixed"));
        assert_eq!(block.get("height"), Some("56px"));
    }
}

//! Scaffold widget: page layout with app bar, body, drawers and overlays.

use std::any::Any;

use crate::css::{ClassName, Color, DeclarationBlock, StyleKey, StyleRegistry};
use crate::dom::Slot;
use crate::widget::traits::push_child;
use crate::widget::{RenderContext, RenderError, Widget};

/// Full-height page layout.
///
/// ```text
/// app_bar
/// [drawer][body][end_drawer]
/// floating_action_button, bottom_sheet, snack_bar, dialog
/// ```
pub struct Scaffold {
    app_bar: Option<Box<dyn Widget>>,
    body: Option<Box<dyn Widget>>,
    drawer: Option<Box<dyn Widget>>,
    end_drawer: Option<Box<dyn Widget>>,
    floating_action_button: Option<Box<dyn Widget>>,
    bottom_sheet: Option<Box<dyn Widget>>,
    snack_bar: Option<Box<dyn Widget>>,
    dialog: Option<Box<dyn Widget>>,
    key: ScaffoldKey,
}

/// Style key for [`Scaffold`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaffoldKey {
    pub background: Color,
}

impl StyleKey for ScaffoldKey {
    const KIND: &'static str = "scaffold";

    fn declarations(&self) -> DeclarationBlock {
        DeclarationBlock::new()
            .with("flex", 1)
            .with("display", "flex")
            .with("flex-direction", "column")
            .with("height", "100vh")
            .with("background-color", &self.background)
    }
}

impl Scaffold {
    pub fn new() -> Self {
        Self {
            app_bar: None,
            body: None,
            drawer: None,
            end_drawer: None,
            floating_action_button: None,
            bottom_sheet: None,
            snack_bar: None,
            dialog: None,
            key: ScaffoldKey {
                background: Color::white(),
            },
        }
    }

    pub fn app_bar(mut self, app_bar: impl Widget) -> Self {
        self.app_bar = Some(Box::new(app_bar));
        self
    }

    pub fn body(mut self, body: impl Widget) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    pub fn drawer(mut self, drawer: impl Widget) -> Self {
        self.drawer = Some(Box::new(drawer));
        self
    }

    pub fn end_drawer(mut self, drawer: impl Widget) -> Self {
        self.end_drawer = Some(Box::new(drawer));
        self
    }

    pub fn floating_action_button(mut self, button: impl Widget) -> Self {
        self.floating_action_button = Some(Box::new(button));
        self
    }

    pub fn bottom_sheet(mut self, sheet: impl Widget) -> Self {
        self.bottom_sheet = Some(Box::new(sheet));
        self
    }

    pub fn snack_bar(mut self, snack_bar: impl Widget) -> Self {
        self.snack_bar = Some(Box::new(snack_bar));
        self
    }

    pub fn dialog(mut self, dialog: impl Widget) -> Self {
        self.dialog = Some(Box::new(dialog));
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.key.background = color;
        self
    }
}

impl Default for Scaffold {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Scaffold {
    fn widget_type(&self) -> &'static str {
        "Scaffold"
    }

    fn intern_style(&self, styles: &mut StyleRegistry) -> Option<ClassName> {
        Some(styles.intern(&self.key))
    }

    fn take_children(&mut self) -> Vec<(Slot, Box<dyn Widget>)> {
        let mut children = Vec::new();
        push_child(&mut children, Slot::APP_BAR, self.app_bar.take());
        push_child(&mut children, Slot::DRAWER, self.drawer.take());
        push_child(&mut children, Slot::BODY, self.body.take());
        push_child(&mut children, Slot::END_DRAWER, self.end_drawer.take());
        push_child(
            &mut children,
            Slot::FLOATING_ACTION_BUTTON,
            self.floating_action_button.take(),
        );
        push_child(&mut children, Slot::BOTTOM_SHEET, self.bottom_sheet.take());
        push_child(&mut children, Slot::SNACK_BAR, self.snack_bar.take());
        push_child(&mut children, Slot::DIALOG, self.dialog.take());
        children
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        Ok(format!(
            "<div id='{}'{}>{}\
             <div style='flex: 1; display: flex; overflow: hidden; position: relative;'>{}\
             <div style='flex: 1; overflow-y: auto; padding: 20px;'>{}</div>{}\
             </div>{}{}{}{}</div>",
            cx.id(),
            cx.class_attr(),
            cx.slot_or_empty(Slot::APP_BAR),
            cx.slot_or_empty(Slot::DRAWER),
            cx.slot_or_empty(Slot::BODY),
            cx.slot_or_empty(Slot::END_DRAWER),
            cx.slot_or_empty(Slot::FLOATING_ACTION_BUTTON),
            cx.slot_or_empty(Slot::BOTTOM_SHEET),
            cx.slot_or_empty(Slot::SNACK_BAR),
            cx.slot_or_empty(Slot::DIALOG),
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
    use crate::testing::{element_ids, render_to_markup};
    use crate::widgets::{AppBar, BottomSheet, Dialog, Drawer, SnackBar, Text};
    use pretty_assertions::assert_eq;

    #[test]
    fn slots_are_mounted_and_rendered() {
        let page = Scaffold::new()
            .app_bar(AppBar::new().title(Text::new("Title")))
            .drawer(Drawer::new(Text::new("Menu")))
            .body(Text::new("Body"))
            .bottom_sheet(BottomSheet::new(Text::new("Sheet")))
            .snack_bar(SnackBar::new(Text::new("Toast")))
            .dialog(Dialog::new().content(Text::new("Modal")));
        let (markup, tree) = render_to_markup(page).unwrap();
        let registry = tree.registry();
        let root = registry.root().unwrap();
        assert_eq!(registry.children_in(root, Slot::BODY).len(), 1);
        assert_eq!(registry.children_in(root, Slot::DRAWER).len(), 1);
        assert_eq!(registry.children_in(root, Slot::SNACK_BAR).len(), 1);
        assert_eq!(registry.children_in(root, Slot::BOTTOM_SHEET).len(), 1);
        assert_eq!(registry.children_in(root, Slot::DIALOG).len(), 1);

        let mut ids = element_ids(&markup);
        ids.sort();
        let mut mounted = registry.walk_depth_first(root);
        mounted.sort();
        assert_eq!(ids, mounted);
    }

    #[test]
    fn drawer_precedes_body() {
        let page = Scaffold::new()
            .body(Text::new("Body"))
            .drawer(Drawer::new(Text::new("Menu")));
        let (markup, _) = render_to_markup(page).unwrap();
        let menu = markup.find("Menu").unwrap();
        let body = markup.find("Body").unwrap();
        assert!(menu < body);
    }

    #[test]
    fn overlays_follow_body() {
        let page = Scaffold::new()
            .dialog(Dialog::new().content(Text::new("Modal")))
            .snack_bar(SnackBar::new(Text::new("Toast")))
            .bottom_sheet(BottomSheet::new(Text::new("Sheet")))
            .body(Text::new("Body"));
        let (markup, _) = render_to_markup(page).unwrap();
        let positions: Vec<_> = ["Body", "Sheet", "Toast", "Modal"]
            .iter()
            .map(|needle| markup.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn background_declaration() {
        let block = Scaffold::new().background(Color::hex("fafafa")).key.declarations();
        assert_eq!(block.get("background-color"), Some("#fafafa"));
        assert_eq!(block.get("height"), Some("100vh"));
    }
}

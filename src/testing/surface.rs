//! MemorySurface: an in-memory document that applies patches.

use std::cell::RefCell;
use std::rc::Rc;

use crate::sync::{Patch, Surface, SurfaceError};

use super::markup::find_element;

#[derive(Debug, Default)]
struct Document {
    markup: String,
    stylesheet_href: Option<String>,
    patches: Vec<Patch>,
}

/// Applies patches to a markup string the way a browser would apply their
/// scripts. Clones share the document, so a test keeps one clone and hands
/// the other to the framework.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    document: Rc<RefCell<Document>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(markup: &str) -> Self {
        let surface = Self::new();
        surface.set_document(markup);
        surface
    }

    /// Replace the whole document, as a page load would.
    pub fn set_document(&self, markup: &str) {
        self.document.borrow_mut().markup = markup.to_owned();
    }

    pub fn document(&self) -> String {
        self.document.borrow().markup.clone()
    }

    /// Href of the last stylesheet repoint.
    pub fn stylesheet_href(&self) -> Option<String> {
        self.document.borrow().stylesheet_href.clone()
    }

    /// Every patch received, applied or not.
    pub fn patches(&self) -> Vec<Patch> {
        self.document.borrow().patches.clone()
    }
}

impl Surface for MemorySurface {
    fn apply(&mut self, patch: &Patch) -> Result<(), SurfaceError> {
        let mut document = self.document.borrow_mut();
        document.patches.push(patch.clone());
        match patch {
            Patch::RepointStylesheet { href } => {
                document.stylesheet_href = Some(href.clone());
                Ok(())
            }
            Patch::ReplaceElement { target, markup } => {
                let range = find_element(&document.markup, *target)
                    .ok_or(SurfaceError::ElementNotFound(*target))?;
                document.markup.replace_range(range, markup);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::WidgetId;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_outer_element() {
        let mut surface = MemorySurface::with_document("<body><div id='id_2'><p id='id_3'>old</p></div></body>");
        surface
            .apply(&Patch::ReplaceElement {
                target: WidgetId::from_raw(2),
                markup: "<p id='id_9'>new</p>".into(),
            })
            .unwrap();
        assert_eq!(surface.document(), "<body><p id='id_9'>new</p></body>");
    }

    #[test]
    fn missing_target() {
        let mut surface = MemorySurface::new();
        let target = WidgetId::from_raw(2);
        let patch = Patch::ReplaceElement {
            target,
            markup: String::new(),
        };
        assert_eq!(surface.apply(&patch), Err(SurfaceError::ElementNotFound(target)));
        assert_eq!(surface.patches(), vec![patch]);
    }

    #[test]
    fn clones_share_document() {
        let surface = MemorySurface::new();
        let mut writer = surface.clone();
        writer
            .apply(&Patch::RepointStylesheet {
                href: "styles.css?v=4".into(),
            })
            .unwrap();
        assert_eq!(surface.stylesheet_href().as_deref(), Some("styles.css?v=4"));
    }
}

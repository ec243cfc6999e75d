//! SyncProtocol: turn a freshly mounted subtree into stylesheet and markup
//! patches for the remote surface.
//!
//! A publish runs in a fixed order:
//!
//! 1. collect the shared classes live in the document,
//! 2. regenerate the whole stylesheet from them,
//! 3. render the new subtree,
//! 4. write the stylesheet and, if that worked, bump the version and repoint
//!    the surface's stylesheet link,
//! 5. replace the old root's element with the new markup.
//!
//! Rendering happens before anything observable so a [`RenderError`] leaves
//! the version, the sink and the surface untouched. Sink and surface failures
//! are logged and swallowed.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::css::{ClassName, StyleRegistry};
use crate::dom::{NodeRegistry, WidgetId};
use crate::widget::RenderError;

use super::document::html_document;
use super::patch::Patch;
use super::render::render_subtree;
use super::sink::StylesheetSink;
use super::surface::{Surface, SurfaceError};

/// What a publish did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    /// Version token after the publish.
    pub version: u64,
    /// Whether the sink accepted the regenerated stylesheet.
    pub stylesheet_written: bool,
    /// Whether the surface found and replaced the old root's element.
    pub element_replaced: bool,
    /// Markup of the new subtree.
    pub markup: String,
}

pub struct SyncProtocol {
    version: u64,
    stylesheet_name: String,
    surface: Box<dyn Surface>,
    sink: Box<dyn StylesheetSink>,
}

impl SyncProtocol {
    pub fn new(
        stylesheet_name: impl Into<String>,
        surface: Box<dyn Surface>,
        sink: Box<dyn StylesheetSink>,
    ) -> Self {
        Self {
            version: 0,
            stylesheet_name: stylesheet_name.into(),
            surface,
            sink,
        }
    }

    /// Current cache-busting version token.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Href of the current stylesheet, e.g. `styles.css?v=3`.
    pub fn stylesheet_href(&self) -> String {
        format!("{}?v={}", self.stylesheet_name, self.version)
    }

    /// Shared classes a publish of `new_root` keeps alive.
    ///
    /// The stylesheet is rewritten as a whole, so classes used elsewhere in
    /// the mounted document stay live. The outgoing subtree under `old_root`
    /// is still registered at this point and is skipped.
    pub fn active_classes(
        registry: &NodeRegistry,
        old_root: WidgetId,
        new_root: WidgetId,
    ) -> HashSet<ClassName> {
        let mut active = registry.active_classes(new_root);
        let Some(document_root) = registry.root() else {
            return active;
        };
        let outgoing: HashSet<WidgetId> = if old_root == new_root {
            HashSet::new()
        } else {
            registry.walk_depth_first(old_root).into_iter().collect()
        };
        let mut stack = vec![document_root];
        while let Some(id) = stack.pop() {
            if outgoing.contains(&id) {
                continue;
            }
            if let Some(class) = registry.get(id).and_then(|node| node.class()) {
                active.insert(class.clone());
            }
            stack.extend(registry.children(id));
        }
        active
    }

    /// Publish `new_root` in place of the element `old_root`.
    pub fn publish(
        &mut self,
        registry: &NodeRegistry,
        styles: &StyleRegistry,
        old_root: WidgetId,
        new_root: WidgetId,
    ) -> Result<PublishReport, RenderError> {
        let active = Self::active_classes(registry, old_root, new_root);
        let css = styles.stylesheet(&active);
        let markup = render_subtree(registry, new_root)?;

        let stylesheet_written = self.write_stylesheet(&css);
        if stylesheet_written {
            let repoint = Patch::RepointStylesheet {
                href: self.stylesheet_href(),
            };
            if let Err(err) = self.surface.apply(&repoint) {
                warn!(error = %err, "stylesheet repoint failed");
            }
        }

        let replace = Patch::ReplaceElement {
            target: old_root,
            markup: markup.clone(),
        };
        let element_replaced = match self.surface.apply(&replace) {
            Ok(()) => true,
            Err(SurfaceError::ElementNotFound(target)) => {
                warn!(target = %target, "element not found on surface, ui may be stale");
                false
            }
            Err(err) => {
                warn!(error = %err, "element replace failed");
                false
            }
        };

        debug!(
            old = %old_root,
            new = %new_root,
            version = self.version,
            classes = active.len(),
            "published"
        );
        Ok(PublishReport {
            version: self.version,
            stylesheet_written,
            element_replaced,
            markup,
        })
    }

    /// Render the full document for `root` and write its stylesheet.
    ///
    /// Used for the first load, before the surface holds any element to
    /// patch.
    pub fn publish_document(
        &mut self,
        registry: &NodeRegistry,
        styles: &StyleRegistry,
        root: WidgetId,
        title: &str,
    ) -> Result<String, RenderError> {
        let css = styles.stylesheet(&registry.active_classes(root));
        let body = render_subtree(registry, root)?;
        self.write_stylesheet(&css);
        debug!(root = %root, version = self.version, "document published");
        Ok(html_document(title, &self.stylesheet_href(), &body))
    }

    /// Rewind the version token.
    pub fn reset(&mut self) {
        self.version = 0;
    }

    fn write_stylesheet(&mut self, css: &str) -> bool {
        let next = self.version + 1;
        match self.sink.write(next, css) {
            Ok(()) => {
                self.version = next;
                true
            }
            Err(err) => {
                warn!(error = %err, version = self.version, "stylesheet write failed, keeping previous");
                false
            }
        }
    }
}

impl std::fmt::Debug for SyncProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncProtocol")
            .field("version", &self.version)
            .field("stylesheet_name", &self.stylesheet_name)
            .finish_non_exhaustive()
    }
}

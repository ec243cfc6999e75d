//! WidgetTree: id allocation, node registry and style tables together, plus
//! the mount walk that turns a widget value into registered nodes.

use tracing::debug;

use crate::css::StyleRegistry;
use crate::state::{Lifecycle, StateError, Stateful};
use crate::widget::{RenderError, Widget};

use super::id::{IdAllocator, WidgetId};
use super::node::Slot;
use super::registry::{NodeRegistry, RegistryError};

/// The mounted tree and the services every mount consults.
#[derive(Debug, Default)]
pub struct WidgetTree {
    pub(crate) ids: IdAllocator,
    pub(crate) registry: NodeRegistry,
    pub(crate) styles: StyleRegistry,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Mount `widget` and its whole subtree.
    ///
    /// Each node gets a fresh id, interns its style, and is registered under
    /// `parent` (or as the root). Stateful nodes are built immediately and
    /// their tree is mounted under [`Slot::CHILD`]. On failure the partially
    /// mounted subtree is removed again.
    pub fn mount(
        &mut self,
        mut widget: Box<dyn Widget>,
        parent: Option<(WidgetId, Slot)>,
    ) -> Result<WidgetId, RegistryError> {
        let id = self.ids.next();
        let class = widget.intern_style(&mut self.styles);
        let children = widget.take_children();
        self.registry.register(id, widget, class, parent)?;

        let mounted = children
            .into_iter()
            .try_for_each(|(slot, child)| self.mount(child, Some((id, slot))).map(drop))
            .and_then(|()| self.ensure_built(id).map(drop));
        if let Err(err) = mounted {
            self.registry.delete(id);
            return Err(err);
        }
        Ok(id)
    }

    /// Build a stateful node's first tree if it has not been built yet.
    ///
    /// Returns the tracked root for stateful nodes and `None` for anything
    /// else.
    pub fn ensure_built(&mut self, id: WidgetId) -> Result<Option<WidgetId>, RegistryError> {
        let Some(stateful) = self
            .registry
            .get(id)
            .and_then(|node| node.downcast_ref::<Stateful>())
        else {
            return Ok(None);
        };
        if stateful.lifecycle() != Lifecycle::Unbuilt {
            return Ok(stateful.tracked_root());
        }
        let Some(tree) = stateful.build() else {
            return Ok(None);
        };

        let root = self.mount(tree, Some((id, Slot::CHILD)))?;
        if let Ok(stateful) = self.stateful_mut(id) {
            stateful.set_tracked_root(Some(root));
            stateful.set_lifecycle(Lifecycle::Built);
        }
        debug!(state = %id, root = %root, "initial build");
        Ok(Some(root))
    }

    /// Markup for the subtree rooted at `root`.
    pub fn render(&self, root: WidgetId) -> Result<String, RenderError> {
        crate::sync::render_subtree(&self.registry, root)
    }

    /// The stateful node registered under `id`.
    pub fn stateful(&self, id: WidgetId) -> Result<&Stateful, StateError> {
        self.registry
            .get(id)
            .ok_or(StateError::NotMounted(id))?
            .downcast_ref::<Stateful>()
            .ok_or(StateError::NotStateful(id))
    }

    pub(crate) fn stateful_mut(&mut self, id: WidgetId) -> Result<&mut Stateful, StateError> {
        self.registry
            .get_mut(id)
            .ok_or(StateError::NotMounted(id))?
            .downcast_mut::<Stateful>()
            .ok_or(StateError::NotStateful(id))
    }

    /// Forget every node, id and interned style.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.ids.reset();
        self.styles.clear();
    }
}

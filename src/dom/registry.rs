//! NodeRegistry: the live map from widget id to mounted node.
//!
//! Nodes live in a `SlotMap` arena. Parent/child relationships are stored in
//! secondary maps so that subtree removal is O(subtree size) and lookup is
//! O(1). A hash index translates the public `WidgetId` into arena keys.

use std::collections::{HashMap, VecDeque};

use slotmap::{new_key_type, SecondaryMap, SlotMap};
use tracing::{debug, warn};

use crate::css::ClassName;
use crate::widget::Widget;

use super::id::WidgetId;
use super::node::{Node, Slot};

new_key_type! {
    /// Arena key for a registered node.
    struct NodeKey;
}

/// Errors from registry mutation. Both variants are caller defects.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("parent {0} is not registered")]
    InvalidParent(WidgetId),
    #[error("widget {0} is already registered")]
    DuplicateId(WidgetId),
}

/// The process-wide mounted set.
///
/// Registering under a parent both inserts the node and attaches it as a
/// child of that parent; registering without a parent makes it *the* root.
#[derive(Default)]
pub struct NodeRegistry {
    nodes: SlotMap<NodeKey, Node>,
    children: SecondaryMap<NodeKey, Vec<NodeKey>>,
    parent: SecondaryMap<NodeKey, NodeKey>,
    index: HashMap<WidgetId, NodeKey>,
    root: Option<WidgetId>,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `widget` under `id`.
    ///
    /// With `parent = Some((p, slot))` the node is appended to `p`'s children
    /// in `slot`; `p` must already be registered. With `parent = None` the node
    /// replaces the current root (the previous root's nodes stay registered
    /// until deleted).
    pub fn register(
        &mut self,
        id: WidgetId,
        widget: Box<dyn Widget>,
        class: Option<ClassName>,
        parent: Option<(WidgetId, Slot)>,
    ) -> Result<(), RegistryError> {
        if self.index.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        let parent_key = match parent {
            Some((parent_id, _)) => Some(
                *self
                    .index
                    .get(&parent_id)
                    .ok_or(RegistryError::InvalidParent(parent_id))?,
            ),
            None => None,
        };
        let slot = parent.map(|(_, slot)| slot).unwrap_or(Slot::CHILD);

        debug!(id = %id, widget = widget.widget_type(), slot = %slot, "registering node");
        let key = self.nodes.insert(Node::new(id, slot, class, widget));
        self.children.insert(key, Vec::new());
        self.index.insert(id, key);

        match parent_key {
            Some(pk) => {
                self.parent.insert(key, pk);
                if let Some(siblings) = self.children.get_mut(pk) {
                    siblings.push(key);
                }
            }
            None => self.root = Some(id),
        }
        Ok(())
    }

    /// Remove a node and all its descendants.
    ///
    /// The node is detached from its parent's child list first. Returns the
    /// number of nodes removed; deleting an unknown id logs and returns 0.
    pub fn delete(&mut self, id: WidgetId) -> usize {
        let Some(&key) = self.index.get(&id) else {
            warn!(id = %id, "delete of unregistered widget ignored");
            return 0;
        };

        if let Some(parent_key) = self.parent.remove(key) {
            if let Some(siblings) = self.children.get_mut(parent_key) {
                siblings.retain(|&child| child != key);
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        let mut removed = 0;
        let mut queue = VecDeque::from([key]);
        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                queue.extend(kids);
            }
            self.parent.remove(current);
            if let Some(node) = self.nodes.remove(current) {
                self.index.remove(&node.id());
                removed += 1;
            }
        }
        debug!(id = %id, removed, "deleted subtree");
        removed
    }

    /// Immutable access to a mounted node.
    pub fn get(&self, id: WidgetId) -> Option<&Node> {
        self.index.get(&id).and_then(|&key| self.nodes.get(key))
    }

    /// Mutable access to a mounted node.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Node> {
        let key = *self.index.get(&id)?;
        self.nodes.get_mut(key)
    }

    /// Whether `id` is currently registered.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The current root, if set.
    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    /// The parent of a node, if it has one.
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        let key = *self.index.get(&id)?;
        let parent_key = *self.parent.get(key)?;
        self.nodes.get(parent_key).map(Node::id)
    }

    /// Children of a node across all slots, in registration order. Empty if
    /// the node has none or does not exist.
    pub fn children(&self, id: WidgetId) -> Vec<WidgetId> {
        self.child_keys(id)
            .iter()
            .filter_map(|&key| self.nodes.get(key))
            .map(Node::id)
            .collect()
    }

    /// Children of a node that occupy `slot`.
    pub fn children_in(&self, id: WidgetId, slot: Slot) -> Vec<WidgetId> {
        self.child_keys(id)
            .iter()
            .filter_map(|&key| self.nodes.get(key))
            .filter(|node| node.slot() == slot)
            .map(Node::id)
            .collect()
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let Some(&start_key) = self.index.get(&start) else {
            return result;
        };
        let mut stack = vec![start_key];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            result.push(node.id());
            if let Some(kids) = self.children.get(current) {
                // Reverse so the first child is visited first.
                stack.extend(kids.iter().rev());
            }
        }
        result
    }

    /// Drop every node and forget the root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.children.clear();
        self.parent.clear();
        self.index.clear();
        self.root = None;
    }

    fn child_keys(&self, id: WidgetId) -> &[NodeKey] {
        self.index
            .get(&id)
            .and_then(|&key| self.children.get(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl std::fmt::Debug for NodeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRegistry")
            .field("len", &self.nodes.len())
            .field("root", &self.root)
            .finish()
    }
}

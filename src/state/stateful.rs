//! Stateful widgets: the `State` trait, the `Stateful` node that owns one,
//! and typed handles for reaching it later.
//!
//! A `Stateful` node owns exactly one boxed `State`. Its subtree is the last
//! tree the state built, mounted under the node's [`Slot::CHILD`]; the node
//! remembers that subtree's root id (the *tracked root*) across rebuilds.

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use crate::dom::{Slot, WidgetId};
use crate::widget::{RenderContext, RenderError, Widget};

// ---------------------------------------------------------------------------
// State trait
// ---------------------------------------------------------------------------

/// Blanket `Any` access for trait objects.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Application state that knows how to describe its UI.
///
/// `build` returns a fresh tree on every call; the framework mounts it,
/// publishes it, and deregisters the previous one.
pub trait State: AsAny {
    fn build(&self) -> Box<dyn Widget>;
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Build lifecycle of a stateful node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created but never built.
    Unbuilt,
    /// Built; the tracked root is mounted.
    Built,
    /// A rebuild is in flight.
    Rebuilding,
    /// Torn down; can no longer be rebuilt.
    Disposed,
}

/// Caller errors when addressing a stateful node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("state {0} is not mounted")]
    NotMounted(WidgetId),
    #[error("widget {0} is not stateful")]
    NotStateful(WidgetId),
    #[error("state {id} is not a {expected}")]
    TypeMismatch { id: WidgetId, expected: &'static str },
    #[error("state {0} is already rebuilding")]
    Reentrant(WidgetId),
}

// ---------------------------------------------------------------------------
// Stateful
// ---------------------------------------------------------------------------

/// The node that owns a [`State`].
///
/// Renders as a `display: contents` wrapper carrying its own id around the
/// tracked subtree, so the wrapper never affects layout.
pub struct Stateful {
    state: Option<Box<dyn State>>,
    lifecycle: Lifecycle,
    tracked_root: Option<WidgetId>,
    state_type: &'static str,
}

impl Stateful {
    pub fn new<S: State>(state: S) -> Self {
        Self {
            state: Some(Box::new(state)),
            lifecycle: Lifecycle::Unbuilt,
            tracked_root: None,
            state_type: type_name::<S>(),
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Root id of the currently mounted subtree.
    pub fn tracked_root(&self) -> Option<WidgetId> {
        self.tracked_root
    }

    /// Type name of the owned state, for diagnostics.
    pub fn state_type(&self) -> &'static str {
        self.state_type
    }

    /// Borrow the state as `S`.
    pub fn state<S: State>(&self) -> Option<&S> {
        let state: &dyn State = self.state.as_deref()?;
        state.as_any().downcast_ref::<S>()
    }

    /// Mutably borrow the state as `S`.
    pub fn state_mut<S: State>(&mut self) -> Option<&mut S> {
        let state: &mut dyn State = self.state.as_deref_mut()?;
        state.as_any_mut().downcast_mut::<S>()
    }

    /// Build a fresh tree from the owned state.
    pub(crate) fn build(&self) -> Option<Box<dyn Widget>> {
        self.state.as_deref().map(State::build)
    }

    pub(crate) fn set_lifecycle(&mut self, lifecycle: Lifecycle) {
        self.lifecycle = lifecycle;
    }

    pub(crate) fn set_tracked_root(&mut self, root: Option<WidgetId>) {
        self.tracked_root = root;
    }

    /// Drop the state and mark the node disposed.
    pub(crate) fn dispose(&mut self) -> Option<WidgetId> {
        self.state = None;
        self.lifecycle = Lifecycle::Disposed;
        self.tracked_root.take()
    }
}

impl fmt::Debug for Stateful {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stateful")
            .field("state", &self.state_type)
            .field("lifecycle", &self.lifecycle)
            .field("tracked_root", &self.tracked_root)
            .finish()
    }
}

impl Widget for Stateful {
    fn widget_type(&self) -> &'static str {
        "Stateful"
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        // A disposed state keeps an empty placeholder in its parent.
        let child = match self.lifecycle {
            Lifecycle::Disposed => "",
            _ => cx.required(Slot::CHILD, self.widget_type())?,
        };
        Ok(format!(
            "<div id='{}' style='display: contents;'>{child}</div>",
            cx.id()
        ))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// StateHandle
// ---------------------------------------------------------------------------

/// Typed reference to a mounted stateful node.
///
/// Handles are plain ids: `Copy`, `Send`, and valid only while the node is
/// mounted. Using a stale handle yields [`StateError::NotMounted`].
pub struct StateHandle<S> {
    id: WidgetId,
    _state: PhantomData<fn() -> S>,
}

impl<S> StateHandle<S> {
    pub(crate) fn new(id: WidgetId) -> Self {
        Self {
            id,
            _state: PhantomData,
        }
    }

    /// Id of the stateful node (not of its tracked root).
    pub fn id(&self) -> WidgetId {
        self.id
    }
}

impl<S> Clone for StateHandle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StateHandle<S> {}

impl<S> PartialEq for StateHandle<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S> Eq for StateHandle<S> {}

impl<S> fmt::Debug for StateHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateHandle").field(&self.id).finish()
    }
}

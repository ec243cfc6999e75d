//! Named callbacks invoked from the surface.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::error::FrameworkError;
use crate::framework::Framework;

/// A callback body. Receives the framework and the JSON arguments sent by the
/// page.
pub type Callback = Box<dyn FnMut(&mut Framework, &[Value]) -> Result<(), FrameworkError>>;

/// Callbacks by name.
///
/// A running callback is taken out of its slot for the duration of the call
/// (it needs `&mut Framework`, which owns this registry) and put back
/// afterwards unless it was replaced or removed in the meantime.
#[derive(Default)]
pub struct CallbackRegistry {
    slots: HashMap<String, Option<Callback>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: FnMut(&mut Framework, &[Value]) -> Result<(), FrameworkError> + 'static,
    {
        let name = name.into();
        debug!(callback = %name, "callback registered");
        self.slots.insert(name, Some(Box::new(callback)));
    }

    /// Remove a callback. Returns whether it existed.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.slots.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Take `name` out for a call. `None` if unknown or already running.
    pub(crate) fn take(&mut self, name: &str) -> Option<Callback> {
        self.slots.get_mut(name)?.take()
    }

    /// Return a callback taken with [`take`](Self::take).
    pub(crate) fn restore(&mut self, name: &str, callback: Callback) {
        if let Some(slot @ None) = self.slots.get_mut(name) {
            *slot = Some(callback);
        }
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("names", &self.names())
            .finish()
    }
}

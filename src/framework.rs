//! Framework: the context object owning the tree, the style tables, the sync
//! protocol, the callbacks and the UI queue.
//!
//! Everything that mutates the tree goes through `&mut Framework`, which is
//! what keeps all mutation on one context. Other threads and timers reach it
//! through [`UiHandle`].

use std::any::type_name;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::bridge::{BridgeRequest, BridgeResponse, CallbackRegistry};
use crate::config::FrameworkConfig;
use crate::css::StyleRegistry;
use crate::dom::{NodeRegistry, Slot, WidgetId, WidgetTree};
use crate::error::FrameworkError;
use crate::state::{HasOverlays, Lifecycle, State, StateError, StateHandle, Stateful};
use crate::sync::{
    FileSink, MemorySink, NullSurface, PublishReport, StylesheetSink, Surface, SyncProtocol,
};
use crate::ui::{UiHandle, UiQueue, UiTask};
use crate::widget::Widget;

pub struct Framework {
    config: FrameworkConfig,
    tree: WidgetTree,
    sync: SyncProtocol,
    callbacks: CallbackRegistry,
    ui: UiQueue,
}

impl Framework {
    /// Create a framework publishing to `surface` and writing stylesheets to
    /// `sink`.
    pub fn new(
        config: FrameworkConfig,
        surface: impl Surface + 'static,
        sink: impl StylesheetSink + 'static,
    ) -> Self {
        let sync = SyncProtocol::new(
            config.stylesheet_name.clone(),
            Box::new(surface),
            Box::new(sink),
        );
        Self {
            config,
            tree: WidgetTree::new(),
            sync,
            callbacks: CallbackRegistry::new(),
            ui: UiQueue::new(),
        }
    }

    /// Publish to `surface`, writing the stylesheet into the configured web
    /// directory.
    pub fn with_surface(config: FrameworkConfig, surface: impl Surface + 'static) -> Self {
        let sink = FileSink::new(&config.web_dir, &config.stylesheet_name);
        Self::new(config, surface, sink)
    }

    /// No surface, stylesheets kept in memory. For tests and tooling.
    pub fn headless(config: FrameworkConfig) -> Self {
        Self::new(config, NullSurface, MemorySink::new())
    }

    pub fn config(&self) -> &FrameworkConfig {
        &self.config
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn registry(&self) -> &NodeRegistry {
        self.tree.registry()
    }

    pub fn styles(&self) -> &StyleRegistry {
        self.tree.styles()
    }

    /// Current stylesheet version token.
    pub fn version(&self) -> u64 {
        self.sync.version()
    }

    pub fn stylesheet_href(&self) -> String {
        self.sync.stylesheet_href()
    }

    // -----------------------------------------------------------------------
    // Mounting
    // -----------------------------------------------------------------------

    /// Mount `state` as the document root and build it.
    pub fn mount_root<S: State>(&mut self, state: S) -> Result<StateHandle<S>, FrameworkError> {
        let id = self.tree.mount(Box::new(Stateful::new(state)), None)?;
        Ok(StateHandle::new(id))
    }

    /// Mount `state` under `parent` in `slot` and build it.
    pub fn mount_under<S: State>(
        &mut self,
        parent: WidgetId,
        slot: Slot,
        state: S,
    ) -> Result<StateHandle<S>, FrameworkError> {
        let id = self
            .tree
            .mount(Box::new(Stateful::new(state)), Some((parent, slot)))?;
        Ok(StateHandle::new(id))
    }

    /// Mount an arbitrary widget tree. `None` makes it the root.
    pub fn mount_widget(
        &mut self,
        widget: impl Widget,
        parent: Option<(WidgetId, Slot)>,
    ) -> Result<WidgetId, FrameworkError> {
        Ok(self.tree.mount(Box::new(widget), parent)?)
    }

    /// A typed handle for a stateful node mounted as part of a larger tree.
    pub fn handle<S: State>(&self, id: WidgetId) -> Result<StateHandle<S>, StateError> {
        let stateful = self.tree.stateful(id)?;
        if stateful.lifecycle() == Lifecycle::Disposed {
            return Err(StateError::NotMounted(id));
        }
        stateful.state::<S>().ok_or(StateError::TypeMismatch {
            id,
            expected: type_name::<S>(),
        })?;
        Ok(StateHandle::new(id))
    }

    /// Borrow the state behind `handle`.
    pub fn state<S: State>(&self, handle: StateHandle<S>) -> Result<&S, StateError> {
        let id = handle.id();
        let stateful = self.tree.stateful(id)?;
        if stateful.lifecycle() == Lifecycle::Disposed {
            return Err(StateError::NotMounted(id));
        }
        stateful.state::<S>().ok_or(StateError::TypeMismatch {
            id,
            expected: type_name::<S>(),
        })
    }

    /// Root id of the subtree `handle` currently tracks.
    pub fn tracked_root<S: State>(&self, handle: StateHandle<S>) -> Result<WidgetId, StateError> {
        let id = handle.id();
        self.tree
            .stateful(id)?
            .tracked_root()
            .ok_or(StateError::NotMounted(id))
    }

    // -----------------------------------------------------------------------
    // set_state
    // -----------------------------------------------------------------------

    /// Rebuild and publish the state behind `handle`.
    pub fn set_state<S: State>(
        &mut self,
        handle: StateHandle<S>,
    ) -> Result<PublishReport, FrameworkError> {
        self.set_state_with(handle, |_| ())
    }

    /// Apply `update` to the state, then rebuild and publish it.
    ///
    /// The new tree is mounted next to the old one, published in its place,
    /// and the old subtree is deregistered only once the publish succeeded.
    /// On failure the new subtree is removed and the old one stays tracked.
    pub fn set_state_with<S: State>(
        &mut self,
        handle: StateHandle<S>,
        update: impl FnOnce(&mut S),
    ) -> Result<PublishReport, FrameworkError> {
        let id = handle.id();
        let stateful = self.tree.stateful_mut(id)?;
        match stateful.lifecycle() {
            Lifecycle::Built => {}
            Lifecycle::Rebuilding => return Err(StateError::Reentrant(id).into()),
            Lifecycle::Unbuilt | Lifecycle::Disposed => {
                return Err(StateError::NotMounted(id).into())
            }
        }
        let old_root = stateful.tracked_root().ok_or(StateError::NotMounted(id))?;
        let state = stateful.state_mut::<S>().ok_or(StateError::TypeMismatch {
            id,
            expected: type_name::<S>(),
        })?;
        update(state);
        self.rebuild(id, old_root)
    }

    fn rebuild(&mut self, id: WidgetId, old_root: WidgetId) -> Result<PublishReport, FrameworkError> {
        self.tree
            .stateful_mut(id)?
            .set_lifecycle(Lifecycle::Rebuilding);
        let mut guard = RebuildGuard {
            framework: &mut *self,
            id,
        };
        let built = guard.framework.tree.stateful_mut(id)?.build();
        let result = match built {
            Some(tree) => guard.framework.mount_and_publish(id, old_root, tree),
            None => Err(StateError::NotMounted(id).into()),
        };
        drop(guard);

        let (new_root, report) = result?;
        let stateful = self.tree.stateful_mut(id)?;
        stateful.set_tracked_root(Some(new_root));
        if old_root != new_root {
            self.tree.registry.delete(old_root);
        }
        debug!(state = %id, old = %old_root, new = %new_root, "state rebuilt");
        Ok(report)
    }

    fn mount_and_publish(
        &mut self,
        id: WidgetId,
        old_root: WidgetId,
        tree: Box<dyn Widget>,
    ) -> Result<(WidgetId, PublishReport), FrameworkError> {
        let new_root = self.tree.mount(tree, Some((id, Slot::CHILD)))?;
        match self
            .sync
            .publish(&self.tree.registry, &self.tree.styles, old_root, new_root)
        {
            Ok(report) => Ok((new_root, report)),
            Err(err) => {
                self.tree.registry.delete(new_root);
                Err(err.into())
            }
        }
    }

    /// Drop the state behind `handle` and deregister its subtree. The node
    /// stays as an empty placeholder; further `set_state` calls fail with
    /// [`StateError::NotMounted`].
    pub fn dispose<S: State>(&mut self, handle: StateHandle<S>) -> Result<(), FrameworkError> {
        let id = handle.id();
        let stateful = self.tree.stateful_mut(id)?;
        if stateful.lifecycle() == Lifecycle::Rebuilding {
            return Err(StateError::Reentrant(id).into());
        }
        if let Some(root) = stateful.dispose() {
            self.tree.registry.delete(root);
        }
        debug!(state = %id, "state disposed");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Overlays
    // -----------------------------------------------------------------------

    pub fn open_drawer<S: HasOverlays>(
        &mut self,
        handle: StateHandle<S>,
    ) -> Result<PublishReport, FrameworkError> {
        self.set_state_with(handle, |s| s.overlays_mut().set_drawer(true))
    }

    pub fn close_drawer<S: HasOverlays>(
        &mut self,
        handle: StateHandle<S>,
    ) -> Result<PublishReport, FrameworkError> {
        self.set_state_with(handle, |s| s.overlays_mut().set_drawer(false))
    }

    pub fn toggle_drawer<S: HasOverlays>(
        &mut self,
        handle: StateHandle<S>,
    ) -> Result<PublishReport, FrameworkError> {
        self.set_state_with(handle, |s| s.overlays_mut().toggle_drawer())
    }

    pub fn open_end_drawer<S: HasOverlays>(
        &mut self,
        handle: StateHandle<S>,
    ) -> Result<PublishReport, FrameworkError> {
        self.set_state_with(handle, |s| s.overlays_mut().set_end_drawer(true))
    }

    pub fn close_end_drawer<S: HasOverlays>(
        &mut self,
        handle: StateHandle<S>,
    ) -> Result<PublishReport, FrameworkError> {
        self.set_state_with(handle, |s| s.overlays_mut().set_end_drawer(false))
    }

    pub fn show_bottom_sheet<S: HasOverlays>(
        &mut self,
        handle: StateHandle<S>,
    ) -> Result<PublishReport, FrameworkError> {
        self.set_state_with(handle, |s| s.overlays_mut().set_bottom_sheet(true))
    }

    pub fn hide_bottom_sheet<S: HasOverlays>(
        &mut self,
        handle: StateHandle<S>,
    ) -> Result<PublishReport, FrameworkError> {
        self.set_state_with(handle, |s| s.overlays_mut().set_bottom_sheet(false))
    }

    pub fn open_dialog<S: HasOverlays>(
        &mut self,
        handle: StateHandle<S>,
    ) -> Result<PublishReport, FrameworkError> {
        self.set_state_with(handle, |s| s.overlays_mut().set_dialog(true))
    }

    pub fn close_dialog<S: HasOverlays>(
        &mut self,
        handle: StateHandle<S>,
    ) -> Result<PublishReport, FrameworkError> {
        self.set_state_with(handle, |s| s.overlays_mut().set_dialog(false))
    }

    /// Show the snack bar and schedule its dismissal after its duration.
    ///
    /// Showing again before the timer fires starts a new generation, so the
    /// older timer finds itself stale and does nothing.
    pub fn show_snack_bar<S: HasOverlays>(
        &mut self,
        handle: StateHandle<S>,
    ) -> Result<PublishReport, FrameworkError> {
        let mut shown = None;
        let report = self.set_state_with(handle, |s| shown = s.overlays_mut().show_snack_bar())?;
        if let Some((generation, duration)) = shown {
            self.ui.handle().post_after(duration, move |framework| {
                framework.dismiss_snack_bar(handle, generation)
            });
        }
        Ok(report)
    }

    pub fn hide_snack_bar<S: HasOverlays>(
        &mut self,
        handle: StateHandle<S>,
    ) -> Result<PublishReport, FrameworkError> {
        self.set_state_with(handle, |s| s.overlays_mut().hide_snack_bar())
    }

    fn dismiss_snack_bar<S: HasOverlays>(
        &mut self,
        handle: StateHandle<S>,
        generation: u64,
    ) -> Result<(), FrameworkError> {
        let current = self
            .state(handle)
            .is_ok_and(|s| s.overlays().snack_bar_current(generation));
        if !current {
            debug!(state = %handle.id(), generation, "stale snack bar dismiss skipped");
            return Ok(());
        }
        self.hide_snack_bar(handle).map(drop)
    }

    // -----------------------------------------------------------------------
    // Callbacks
    // -----------------------------------------------------------------------

    /// Register a callback widgets can reference by `name`.
    pub fn register_callback<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: FnMut(&mut Framework, &[Value]) -> Result<(), FrameworkError> + 'static,
    {
        self.callbacks.register(name, callback);
    }

    pub fn unregister_callback(&mut self, name: &str) -> bool {
        self.callbacks.unregister(name)
    }

    pub fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }

    /// Run the callback `name`.
    pub fn invoke_callback(&mut self, name: &str, args: &[Value]) -> Result<(), FrameworkError> {
        let Some(mut callback) = self.callbacks.take(name) else {
            return Err(FrameworkError::UnknownCallback(name.to_owned()));
        };
        let result = callback(self, args);
        self.callbacks.restore(name, callback);
        result
    }

    /// Run the callback `name` and describe the outcome for the page.
    pub fn dispatch_callback(&mut self, name: &str, args: &[Value]) -> String {
        self.dispatch(name, args).message
    }

    fn dispatch(&mut self, name: &str, args: &[Value]) -> BridgeResponse {
        match self.invoke_callback(name, args) {
            Ok(()) => BridgeResponse::ok(format!("Callback '{name}' executed successfully.")),
            Err(FrameworkError::UnknownCallback(_)) => {
                warn!(callback = %name, "callback not found");
                BridgeResponse::failed(format!("Callback '{name}' not found."))
            }
            Err(err) => {
                error!(callback = %name, error = %err, "callback failed");
                BridgeResponse::failed(format!("Callback '{name}' failed: {err}"))
            }
        }
    }

    /// Decode a bridge request, run it, and encode the response.
    pub fn handle_bridge_message(&mut self, json: &str) -> Result<String, FrameworkError> {
        let request = BridgeRequest::parse(json)?;
        let response = self.dispatch(&request.callback, &request.args);
        Ok(response.to_json()?)
    }

    // -----------------------------------------------------------------------
    // UI queue
    // -----------------------------------------------------------------------

    /// A handle for posting work onto this framework's UI context.
    pub fn ui_handle(&self) -> UiHandle {
        self.ui.handle()
    }

    /// Run every task that is ready now. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.ui.try_next() {
            self.run_task(task);
            ran += 1;
        }
        ran
    }

    /// Wait for the next task and run it. The framework keeps the queue
    /// open, so this only returns once a task has run.
    pub async fn run_ui_once(&mut self) {
        let task = self.ui.next().await;
        self.run_task(task);
    }

    fn run_task(&mut self, task: UiTask) {
        if let Err(err) = task(self) {
            error!(error = %err, "ui task failed");
        }
    }

    // -----------------------------------------------------------------------
    // Document
    // -----------------------------------------------------------------------

    /// Render the full initial document for the mounted root and write its
    /// stylesheet.
    pub fn publish_document(&mut self) -> Result<String, FrameworkError> {
        let root = self.tree.registry.root().ok_or(FrameworkError::NoRoot)?;
        Ok(self.sync.publish_document(
            &self.tree.registry,
            &self.tree.styles,
            root,
            &self.config.title,
        )?)
    }

    /// Forget every node, style, callback and pending task, and rewind the
    /// version and id counters. Timers scheduled before teardown are dropped
    /// when they fire, so they never reach states mounted afterwards.
    pub fn teardown(&mut self) {
        self.tree.reset();
        self.sync.reset();
        self.callbacks.clear();
        let dropped = self.ui.invalidate();
        debug!(dropped, "framework torn down");
    }
}

/// Returns a rebuilding state to `Built` when the rebuild ends, including by
/// unwinding out of user `build` or `render` code.
struct RebuildGuard<'a> {
    framework: &'a mut Framework,
    id: WidgetId,
}

impl Drop for RebuildGuard<'_> {
    fn drop(&mut self) {
        if let Ok(stateful) = self.framework.tree.stateful_mut(self.id) {
            if stateful.lifecycle() == Lifecycle::Rebuilding {
                stateful.set_lifecycle(Lifecycle::Built);
            }
        }
    }
}

impl std::fmt::Debug for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Framework")
            .field("config", &self.config)
            .field("nodes", &self.tree.registry().len())
            .field("sync", &self.sync)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}

//! # weft
//!
//! A retained widget tree published to a webview as HTML and CSS patches.
//!
//! Applications describe their UI as [`State`]s whose `build` returns a tree
//! of widgets. The framework mounts that tree, interns every widget's visual
//! parameters into shared CSS classes, and publishes markup plus a
//! regenerated stylesheet to a remote [`Surface`]. A `set_state` rebuilds the
//! tree, replaces the old root's element on the surface, and deregisters the
//! old subtree.
//!
//! ## Core Systems
//!
//! - **[`css`]**: style value objects, per-kind interning tables, stylesheet output
//! - **[`dom`]**: widget ids, the slotmap-backed node registry, the mount walk
//! - **[`widget`]**: Widget trait, render context, markup escaping
//! - **[`widgets`]**: Text, Container, Column/Row, Button, Icon, SizedBox, AppBar,
//!   Scaffold, Drawer, BottomSheet, SnackBar, Dialog, ListTile
//! - **[`state`]**: State trait, stateful nodes, typed handles, overlays
//! - **[`sync`]**: publish protocol, patches, surfaces and stylesheet sinks
//! - **[`bridge`]**: named callbacks and their JSON messages
//! - **[`ui`]**: task queue marshaling timers back onto the UI context
//! - **[`framework`]**: the context object tying everything together
//! - **[`testing`]**: in-memory surface and markup scanner
//!
//! ## Example
//!
//! ```
//! use weft::prelude::*;
//!
//! struct Counter {
//!     count: u32,
//! }
//!
//! impl State for Counter {
//!     fn build(&self) -> Box<dyn Widget> {
//!         Box::new(Text::new(format!("Count: {}", self.count)))
//!     }
//! }
//!
//! let mut framework = Framework::headless(FrameworkConfig::new());
//! let counter = framework.mount_root(Counter { count: 0 }).unwrap();
//! let report = framework.set_state_with(counter, |c| c.count += 1).unwrap();
//! assert!(report.markup.contains("Count: 1"));
//! ```

// Core systems
pub mod css;
pub mod dom;

// Widget system
pub mod state;
pub mod widget;
pub mod widgets;

// Publishing
pub mod bridge;
pub mod sync;
pub mod ui;

// Application
pub mod config;
pub mod error;
pub mod framework;

// Testing
pub mod testing;

pub use config::{ConfigError, FrameworkConfig};
pub use error::FrameworkError;
pub use framework::Framework;
pub use state::{HasOverlays, Overlays, State, StateError, StateHandle, Stateful};
pub use sync::{PublishReport, Surface, SurfaceError};
pub use widget::{RenderError, Widget, WidgetExt};

/// Everything an application module usually needs.
pub mod prelude {
    pub use crate::config::FrameworkConfig;
    pub use crate::css::*;
    pub use crate::dom::{Slot, WidgetId};
    pub use crate::error::FrameworkError;
    pub use crate::framework::Framework;
    pub use crate::state::{HasOverlays, Overlays, State, StateHandle, Stateful};
    pub use crate::widget::{Widget, WidgetExt};
    pub use crate::widgets::*;
}

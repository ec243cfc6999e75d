//! Stateful widgets: State trait, lifecycle, handles, overlay bookkeeping.

pub mod overlays;
pub mod stateful;

pub use overlays::{HasOverlays, Overlays, PanelState, SnackBarState};
pub use stateful::{AsAny, Lifecycle, State, StateError, StateHandle, Stateful};

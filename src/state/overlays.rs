//! Overlay bookkeeping for states that own drawers, a bottom sheet, a dialog
//! and a snack bar.
//!
//! The state holds plain flags; its `build` reads them when constructing
//! `Drawer`, `BottomSheet`, `Dialog` and `SnackBar` widgets. The framework's
//! overlay mutators flip the flags and rebuild.

use std::time::Duration;

use super::stateful::State;
use crate::widgets::SnackBar;

/// Open flag of a drawer, bottom sheet or dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    pub open: bool,
}

/// Visibility of a snack bar plus its auto-dismiss bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnackBarState {
    pub visible: bool,
    pub duration: Duration,
    /// Incremented on every show; a dismiss timer only hides the snack bar
    /// if the generation it was scheduled for is still current.
    pub generation: u64,
}

impl SnackBarState {
    pub fn new(duration: Duration) -> Self {
        Self {
            visible: false,
            duration,
            generation: 0,
        }
    }
}

impl Default for SnackBarState {
    fn default() -> Self {
        Self::new(SnackBar::DEFAULT_DURATION)
    }
}

/// The overlays a state may own. Absent overlays are `None`; mutators that
/// target them do nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlays {
    pub drawer: Option<PanelState>,
    pub end_drawer: Option<PanelState>,
    pub bottom_sheet: Option<PanelState>,
    pub dialog: Option<PanelState>,
    pub snack_bar: Option<SnackBarState>,
}

fn set_panel(panel: &mut Option<PanelState>, open: bool) {
    if let Some(panel) = panel.as_mut() {
        panel.open = open;
    }
}

impl Overlays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drawer(mut self) -> Self {
        self.drawer = Some(PanelState::default());
        self
    }

    pub fn with_end_drawer(mut self) -> Self {
        self.end_drawer = Some(PanelState::default());
        self
    }

    pub fn with_bottom_sheet(mut self) -> Self {
        self.bottom_sheet = Some(PanelState::default());
        self
    }

    pub fn with_dialog(mut self) -> Self {
        self.dialog = Some(PanelState::default());
        self
    }

    pub fn with_snack_bar(mut self, duration: Duration) -> Self {
        self.snack_bar = Some(SnackBarState::new(duration));
        self
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer.is_some_and(|d| d.open)
    }

    pub fn end_drawer_open(&self) -> bool {
        self.end_drawer.is_some_and(|d| d.open)
    }

    pub fn bottom_sheet_open(&self) -> bool {
        self.bottom_sheet.is_some_and(|s| s.open)
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some_and(|d| d.open)
    }

    pub fn snack_bar_visible(&self) -> bool {
        self.snack_bar.is_some_and(|s| s.visible)
    }

    pub(crate) fn set_drawer(&mut self, open: bool) {
        set_panel(&mut self.drawer, open);
    }

    pub(crate) fn toggle_drawer(&mut self) {
        if let Some(drawer) = self.drawer.as_mut() {
            drawer.open = !drawer.open;
        }
    }

    pub(crate) fn set_end_drawer(&mut self, open: bool) {
        set_panel(&mut self.end_drawer, open);
    }

    pub(crate) fn set_bottom_sheet(&mut self, open: bool) {
        set_panel(&mut self.bottom_sheet, open);
    }

    pub(crate) fn set_dialog(&mut self, open: bool) {
        set_panel(&mut self.dialog, open);
    }

    /// Make the snack bar visible and start a new generation. Returns the
    /// generation and how long it should stay up.
    pub(crate) fn show_snack_bar(&mut self) -> Option<(u64, Duration)> {
        let snack_bar = self.snack_bar.as_mut()?;
        snack_bar.visible = true;
        snack_bar.generation += 1;
        Some((snack_bar.generation, snack_bar.duration))
    }

    pub(crate) fn hide_snack_bar(&mut self) {
        if let Some(snack_bar) = self.snack_bar.as_mut() {
            snack_bar.visible = false;
        }
    }

    /// Whether a dismiss scheduled for `generation` still applies.
    pub(crate) fn snack_bar_current(&self, generation: u64) -> bool {
        self.snack_bar
            .is_some_and(|s| s.visible && s.generation == generation)
    }
}

/// A [`State`] exposing its overlays to the framework's mutators.
pub trait HasOverlays: State {
    fn overlays(&self) -> &Overlays;
    fn overlays_mut(&mut self) -> &mut Overlays;
}

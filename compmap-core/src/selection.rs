//! Selection state machine shared by grid, overlay and detail panel.
//!
//! The grid highlight (`selected_main`) is a breadcrumb of the last opened
//! main, not a presence flag: closing the overlay leaves it in place.

use serde::Serialize;
use tracing::debug;

/// Transient selection state. Mutated only through [`SelectionController`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    /// Main highlighted in the grid and shown in the overlay.
    pub selected_main: Option<String>,
    /// Sub drilled into inside the overlay.
    pub drill_sub: Option<String>,
    /// Sub whose usage the side detail panel shows.
    pub detail_sub: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    state: SelectionState,
    overlay_open: bool,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Main currently presented by the overlay, if it is open.
    pub fn overlay_main(&self) -> Option<&str> {
        if self.overlay_open {
            self.state.selected_main.as_deref()
        } else {
            None
        }
    }

    /// Drilled sub, only while the overlay is open.
    pub fn overlay_drill(&self) -> Option<&str> {
        if self.overlay_open {
            self.state.drill_sub.as_deref()
        } else {
            None
        }
    }

    /// Open `main` in the overlay. Always resets the drill view; leaves the
    /// detail panel alone.
    pub fn open_main(&mut self, main: impl Into<String>) {
        let main = main.into();
        debug!(%main, "open main");
        self.state.selected_main = Some(main);
        self.state.drill_sub = None;
        self.overlay_open = true;
    }

    /// Drill into `sub` inside the open overlay and mirror it in the detail
    /// panel. Ignored (returns false) when no main is open.
    pub fn drill_into_sub(&mut self, sub: impl Into<String>) -> bool {
        let sub = sub.into();
        if self.overlay_main().is_none() {
            debug!(%sub, "drill ignored: overlay closed");
            return false;
        }
        self.state.drill_sub = Some(sub.clone());
        self.show_sub_detail(sub);
        true
    }

    /// Show `sub` in the detail panel, independent of the overlay.
    pub fn show_sub_detail(&mut self, sub: impl Into<String>) {
        let sub = sub.into();
        debug!(%sub, "show sub detail");
        self.state.detail_sub = Some(sub);
    }

    /// Open a main listed as a user of the drilled sub. Closes the drill view,
    /// keeps `detail_sub`.
    pub fn open_main_from_drill(&mut self, main: impl Into<String>) {
        self.open_main(main);
    }

    /// Hide the overlay. The grid keeps `selected_main` highlighted.
    pub fn close_overlay(&mut self) {
        debug!("close overlay");
        self.overlay_open = false;
    }
}

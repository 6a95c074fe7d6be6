//! Application state — single-owner, main-thread only.
//!
//! Explorer state (selection, overlay, chart focus) lives in
//! [`Explorer`]; this struct only adds what the terminal needs on top:
//! which panel has focus, list cursors, the grid filter, and status text.

use std::sync::mpsc::Receiver;

use compmap_core::{
    CustomSet, DataOrigin, Dataset, DocLinks, Explorer, ExplorerEvent, RelationIndex,
};
use tracing::info;

use crate::worker::LoaderResponse;

/// Which panel has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Grid,
    Chart,
    Detail,
}

impl Panel {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            Panel::Grid => 0,
            Panel::Chart => 1,
            Panel::Detail => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Grid),
            1 => Some(Panel::Chart),
            2 => Some(Panel::Detail),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Grid => "Components",
            Panel::Chart => "Shared subcomponents",
            Panel::Detail => "Details",
        }
    }

    pub fn next(self) -> Panel {
        match self {
            Panel::Grid => Panel::Chart,
            Panel::Chart => Panel::Detail,
            Panel::Detail => Panel::Grid,
        }
    }

    pub fn prev(self) -> Panel {
        match self {
            Panel::Grid => Panel::Detail,
            Panel::Chart => Panel::Grid,
            Panel::Detail => Panel::Chart,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Grid panel state.
#[derive(Debug, Clone, Default)]
pub struct GridPanelState {
    pub cursor: usize,
    pub filter: String,
    /// True while keystrokes go to the filter input.
    pub editing_filter: bool,
}

/// Which list inside the overlay has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPane {
    #[default]
    Subs,
    Users,
}

#[derive(Debug, Clone, Default)]
pub struct OverlayCursor {
    pub pane: OverlayPane,
    pub sub: usize,
    pub user: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready(DataOrigin),
}

/// Top-level application state.
pub struct AppState {
    pub active_panel: Panel,
    pub running: bool,
    pub explorer: Explorer,
    pub load: LoadState,

    pub grid: GridPanelState,
    pub detail_cursor: usize,
    pub overlay: OverlayCursor,
    pub show_help: bool,

    pub status_message: Option<(String, StatusLevel)>,
    pub loader_rx: Option<Receiver<LoaderResponse>>,
    links: DocLinks,
}

impl AppState {
    pub fn new(links: DocLinks, loader_rx: Option<Receiver<LoaderResponse>>) -> Self {
        let explorer = Explorer::new(RelationIndex::default(), CustomSet::new(), links.clone());
        Self {
            active_panel: Panel::Grid,
            running: true,
            explorer,
            load: LoadState::Loading,
            grid: GridPanelState::default(),
            detail_cursor: 0,
            overlay: OverlayCursor::default(),
            show_help: false,
            status_message: None,
            loader_rx,
            links,
        }
    }

    /// State over an already-loaded dataset. Used by tests and demos.
    pub fn with_dataset(dataset: Dataset, links: DocLinks) -> Self {
        let mut app = Self::new(links, None);
        app.apply_dataset(dataset);
        app
    }

    /// Replace the explorer with one built from `dataset`.
    pub fn apply_dataset(&mut self, dataset: Dataset) {
        let origin = dataset.origin;
        let warnings = dataset.warnings.clone();
        self.explorer = Explorer::from_dataset(dataset, self.links.clone());
        self.load = LoadState::Ready(origin);
        self.grid.cursor = 0;
        self.detail_cursor = 0;
        self.overlay = OverlayCursor::default();
        if self.active_panel == Panel::Chart {
            self.explorer.dispatch(ExplorerEvent::ChartFocusGained);
        }

        let index = self.explorer.index();
        info!(
            origin = origin.label(),
            mains = index.main_count(),
            subs = index.sub_count(),
            "dataset applied"
        );
        let summary = format!(
            "Loaded {} components, {} subcomponents ({})",
            index.main_count(),
            index.sub_count(),
            origin.label()
        );
        match (origin, warnings.first()) {
            (DataOrigin::Empty, Some(w)) => self.set_error(format!("No data loaded: {w}")),
            (_, Some(w)) => self.set_warning(format!("{summary}; {w}")),
            (_, None) => self.set_status(summary),
        }
    }

    /// Drain the loader channel without blocking.
    pub fn poll_loader(&mut self) {
        let Some(rx) = &self.loader_rx else {
            return;
        };
        if let Ok(LoaderResponse::Loaded(dataset)) = rx.try_recv() {
            self.loader_rx = None;
            self.apply_dataset(*dataset);
        }
    }

    /// Move input focus, emitting chart region focus changes.
    pub fn focus_panel(&mut self, panel: Panel) {
        if self.active_panel == panel {
            return;
        }
        if self.active_panel == Panel::Chart {
            self.explorer.dispatch(ExplorerEvent::ChartFocusLost);
        }
        if panel == Panel::Chart {
            self.explorer.dispatch(ExplorerEvent::ChartFocusGained);
        }
        self.active_panel = panel;
    }

    /// Forward an event to the explorer and keep list cursors valid.
    pub fn dispatch(&mut self, event: ExplorerEvent) {
        let resets_overlay = matches!(
            event,
            ExplorerEvent::OpenMain(_) | ExplorerEvent::OpenMainFromDrill(_)
        );
        let drilled = matches!(event, ExplorerEvent::DrillIntoSub(_));
        let detail_changes = matches!(
            event,
            ExplorerEvent::ShowSubDetail(_)
                | ExplorerEvent::DrillIntoSub(_)
                | ExplorerEvent::ChartActivate
        );

        self.explorer.dispatch(event);

        if resets_overlay {
            self.overlay = OverlayCursor::default();
        }
        if drilled {
            self.overlay.user = 0;
        }
        if detail_changes {
            self.detail_cursor = 0;
        }
    }

    /// Main names visible in the grid under the current filter.
    pub fn visible_mains(&self) -> Vec<&str> {
        self.explorer
            .cards(&self.grid.filter)
            .into_iter()
            .map(|c| c.name)
            .collect()
    }

    pub fn grid_cursor_main(&self) -> Option<String> {
        self.visible_mains()
            .get(self.grid.cursor)
            .map(|s| s.to_string())
    }

    pub fn detail_cursor_main(&self) -> Option<String> {
        self.explorer
            .detail_usage()
            .get(self.detail_cursor)
            .cloned()
    }

    pub fn overlay_cursor_sub(&self) -> Option<String> {
        self.explorer.overlay_subs().get(self.overlay.sub).cloned()
    }

    pub fn overlay_cursor_user(&self) -> Option<String> {
        self.explorer.drill_users().get(self.overlay.user).cloned()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

/// Move a list cursor down, stopping at the last row.
pub fn cursor_down(cursor: &mut usize, len: usize) {
    if len > 0 && *cursor + 1 < len {
        *cursor += 1;
    }
}

/// Move a list cursor up, stopping at the first row.
pub fn cursor_up(cursor: &mut usize) {
    *cursor = cursor.saturating_sub(1);
}

//! Explorer session — the single owner of index, selection and chart focus.
//!
//! Views read through accessors and change state only by dispatching
//! [`ExplorerEvent`]s. Every transition is synchronous and total.

use tracing::debug;

use crate::catalog::{grid_cards, GridCard};
use crate::chart::{ChartFocusModel, ChartKey, ChartPoint};
use crate::custom::CustomSet;
use crate::data::Dataset;
use crate::index::RelationIndex;
use crate::link::{self, DocLinks};
use crate::selection::{SelectionController, SelectionState};

/// Events accepted from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerEvent {
    OpenMain(String),
    DrillIntoSub(String),
    ShowSubDetail(String),
    OpenMainFromDrill(String),
    CloseOverlay,
    ChartAdvance,
    ChartRetreat,
    ChartJumpFirst,
    ChartJumpLast,
    ChartActivate,
    ChartFocusGained,
    ChartFocusLost,
}

pub struct Explorer {
    index: RelationIndex,
    customs: CustomSet,
    links: DocLinks,
    selection: SelectionController,
    chart: ChartFocusModel,
}

impl Explorer {
    pub fn new(index: RelationIndex, customs: CustomSet, links: DocLinks) -> Self {
        let chart = ChartFocusModel::from_index(&index);
        Self {
            index,
            customs,
            links,
            selection: SelectionController::new(),
            chart,
        }
    }

    /// Build the index from a loaded dataset.
    pub fn from_dataset(dataset: Dataset, links: DocLinks) -> Self {
        Self::new(RelationIndex::build(&dataset.mapping), dataset.customs, links)
    }

    /// An explorer over nothing; used until the first load completes.
    pub fn empty() -> Self {
        Self::new(RelationIndex::default(), CustomSet::new(), DocLinks::default())
    }

    pub fn dispatch(&mut self, event: ExplorerEvent) {
        debug!(?event, "dispatch");
        match event {
            ExplorerEvent::OpenMain(main) => self.selection.open_main(main),
            ExplorerEvent::DrillIntoSub(sub) => {
                self.selection.drill_into_sub(sub);
            }
            ExplorerEvent::ShowSubDetail(sub) => self.selection.show_sub_detail(sub),
            ExplorerEvent::OpenMainFromDrill(main) => self.selection.open_main_from_drill(main),
            ExplorerEvent::CloseOverlay => self.selection.close_overlay(),
            ExplorerEvent::ChartAdvance => self.chart_key(ChartKey::Advance),
            ExplorerEvent::ChartRetreat => self.chart_key(ChartKey::Retreat),
            ExplorerEvent::ChartJumpFirst => self.chart_key(ChartKey::First),
            ExplorerEvent::ChartJumpLast => self.chart_key(ChartKey::Last),
            ExplorerEvent::ChartActivate => self.chart_key(ChartKey::Activate),
            ExplorerEvent::ChartFocusGained => self.chart.focus_gained(),
            ExplorerEvent::ChartFocusLost => self.chart.focus_lost(),
        }
    }

    /// The only bridge from chart keyboard input into the selection.
    fn chart_key(&mut self, key: ChartKey) {
        if let Some(point) = self.chart.apply(key) {
            let sub = point.name.clone();
            self.selection.show_sub_detail(sub);
        }
    }

    /// Pointer hover over chart point `i`.
    pub fn hover_chart(&mut self, i: usize) {
        self.chart.hover(i);
    }

    pub fn index(&self) -> &RelationIndex {
        &self.index
    }

    pub fn customs(&self) -> &CustomSet {
        &self.customs
    }

    pub fn links(&self) -> &DocLinks {
        &self.links
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    pub fn is_overlay_open(&self) -> bool {
        self.selection.is_overlay_open()
    }

    pub fn chart(&self) -> &ChartFocusModel {
        &self.chart
    }

    pub fn chart_points(&self) -> &[ChartPoint] {
        self.chart.points()
    }

    /// Main shown by the overlay, if open.
    pub fn overlay_main(&self) -> Option<&str> {
        self.selection.overlay_main()
    }

    /// Subs listed by the overlay; empty when closed or the main is unknown.
    pub fn overlay_subs(&self) -> &[String] {
        self.overlay_main()
            .map(|main| self.index.subs_of(main))
            .unwrap_or_default()
    }

    /// Sub drilled into inside the open overlay.
    pub fn drill_sub(&self) -> Option<&str> {
        self.selection.overlay_drill()
    }

    /// Mains using the drilled sub.
    pub fn drill_users(&self) -> &[String] {
        self.drill_sub()
            .map(|sub| self.index.mains_using(sub))
            .unwrap_or_default()
    }

    /// Mains using the detail panel's sub; empty for unknown subs.
    pub fn detail_usage(&self) -> &[String] {
        self.selection()
            .detail_sub
            .as_deref()
            .map(|sub| self.index.mains_using(sub))
            .unwrap_or_default()
    }

    /// Heading text of the detail panel.
    pub fn detail_message(&self) -> String {
        match self.selection().detail_sub.as_deref() {
            Some(sub) => format!(
                "\u{201c}{}\u{201d} appears in {} main components:",
                sub,
                self.detail_usage().len()
            ),
            None => "Select a subcomponent from the chart to see all main components that include it."
                .to_string(),
        }
    }

    /// Resolved page key for `sub`, in the context of the selected main.
    pub fn link_key<'a>(&'a self, sub: &'a str) -> &'a str {
        link::resolve(&self.index, sub, self.selection().selected_main.as_deref())
    }

    /// Full doc reference for `sub`, in the context of the selected main.
    pub fn link_for(&self, sub: &str) -> String {
        self.links.href(self.link_key(sub))
    }

    /// Grid cards for `query`, highlighting the selected main.
    pub fn cards(&self, query: &str) -> Vec<GridCard<'_>> {
        grid_cards(
            &self.index,
            &self.customs,
            query,
            self.selection().selected_main.as_deref(),
        )
    }
}

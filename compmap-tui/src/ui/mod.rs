//! Top-level UI layout — grid on the left, chart over detail on the right, status bar below.

pub mod chart_panel;
pub mod detail_panel;
pub mod grid_panel;
pub mod overlays;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};

use crate::app::{AppState, LoadState, Panel};
use crate::theme;

/// Screen regions of the three panels and the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelAreas {
    pub main: Rect,
    pub grid: Rect,
    pub chart: Rect,
    pub detail: Rect,
    pub status: Rect,
}

impl PanelAreas {
    pub fn area(&self, panel: Panel) -> Rect {
        match panel {
            Panel::Grid => self.grid,
            Panel::Chart => self.chart,
            Panel::Detail => self.detail,
        }
    }

    /// Panel whose outer rect contains the cell.
    pub fn panel_at(&self, column: u16, row: u16) -> Option<Panel> {
        let pos = Position::new(column, row);
        [Panel::Grid, Panel::Chart, Panel::Detail]
            .into_iter()
            .find(|&p| self.area(p).contains(pos))
    }
}

/// Split the screen. Drawing and mouse hit-testing both go through here.
pub fn panel_areas(screen: Rect) -> PanelAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(screen);
    let main = chunks[0];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    PanelAreas {
        main,
        grid: columns[0],
        chart: right[0],
        detail: right[1],
        status: chunks[1],
    }
}

/// Content rect of a panel, inside its border.
pub fn panel_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let areas = panel_areas(f.area());

    for panel in [Panel::Grid, Panel::Chart, Panel::Detail] {
        draw_panel(f, areas.area(panel), app, panel);
    }

    status_bar::render(f, areas.status, app);

    // Overlays on top, most recent last.
    if app.load == LoadState::Loading {
        overlays::render_loading(f, areas.main);
    }
    if app.explorer.is_overlay_open() {
        overlays::render_component(f, areas.main, app);
    }
    if app.show_help {
        overlays::render_help(f, areas.main);
    }
}

fn draw_panel(f: &mut Frame, area: Rect, app: &AppState, panel: Panel) {
    let is_active = app.active_panel == panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(is_active))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(is_active));

    let inner = panel_inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Grid => grid_panel::render(f, inner, app),
        Panel::Chart => chart_panel::render(f, inner, app),
        Panel::Detail => detail_panel::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// First row to draw so that `cursor` stays inside a window of `height` rows.
pub fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return cursor;
    }
    cursor.saturating_sub(height - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn render(app: &AppState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn scroll_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(7, 5), 3);
        assert_eq!(scroll_offset(3, 0), 3);
    }

    #[test]
    fn panel_areas_cover_screen() {
        let areas = panel_areas(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.status, Rect::new(0, 29, 100, 1));
        assert_eq!(areas.grid.x, 0);
        assert_eq!(areas.chart.x, areas.grid.width);
        assert_eq!(areas.detail.y, areas.chart.bottom());
        assert_eq!(areas.panel_at(1, 1), Some(Panel::Grid));
        assert_eq!(areas.panel_at(areas.chart.x + 1, 1), Some(Panel::Chart));
        assert_eq!(areas.panel_at(areas.detail.x + 1, areas.detail.y + 1), Some(Panel::Detail));
        assert_eq!(areas.panel_at(5, 29), None);
    }

    #[test]
    fn draws_all_three_panels() {
        let app = sample_app();
        let screen = text(&render(&app));
        assert!(screen.contains("Components [1]"));
        assert!(screen.contains("Shared subcomponents [2]"));
        assert!(screen.contains("Details [3]"));
        assert!(screen.contains("TextField"));
    }

    #[test]
    fn open_overlay_is_drawn() {
        let mut app = sample_app();
        app.dispatch(compmap_core::ExplorerEvent::OpenMain("TextField".into()));
        let screen = text(&render(&app));
        assert!(screen.contains("TextField: 3 subcomponents"));
    }
}

//! Panel 2 — subcomponents used by two or more mains, one horizontal bar each.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph, Wrap};

use compmap_core::ChartPoint;

use crate::app::{AppState, Panel};
use crate::theme;
use crate::ui::scroll_offset;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let points = app.explorer.chart_points();
    if points.is_empty() {
        render_empty(f, area);
        return;
    }

    let chunks = split(area);

    let focused = app.explorer.chart().focused();
    let height = chunks[0].height as usize;
    let start = first_visible(app, height);
    let max = points.iter().map(|p| p.count).max().unwrap_or(0);

    let bars: Vec<Bar> = points
        .iter()
        .skip(start)
        .take(height)
        .map(|p| bar(p, focused == Some(p.x), max))
        .collect();

    let chart = BarChart::default()
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(max as u64)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, chunks[0]);

    render_footer(f, chunks[1], app);
}

fn split(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(area)
}

/// Index of the first bar drawn; keeps the focused bar on screen.
fn first_visible(app: &AppState, height: usize) -> usize {
    scroll_offset(app.explorer.chart().focused().unwrap_or(0), height)
}

/// Chart point drawn at a screen cell, given the panel's inner rect.
pub fn point_at(app: &AppState, inner: Rect, column: u16, row: u16) -> Option<usize> {
    let bars = split(inner)[0];
    if !bars.contains(Position::new(column, row)) {
        return None;
    }
    let i = first_visible(app, bars.height as usize) + (row - bars.y) as usize;
    (i < app.explorer.chart_points().len()).then_some(i)
}

fn bar(point: &ChartPoint, is_focused: bool, max: usize) -> Bar<'_> {
    let style = if is_focused {
        theme::focused()
    } else {
        theme::usage(point.count, max)
    };
    Bar::default()
        .value(point.count as u64)
        .text_value(point.count.to_string())
        .label(Line::from(point.name.as_str()))
        .style(style)
}

fn render_footer(f: &mut Frame, area: Rect, app: &AppState) {
    let line = match app.explorer.chart().announcement() {
        Some(text) => Line::from(Span::styled(text, theme::accent())),
        None if app.active_panel == Panel::Chart => Line::from(Span::styled(
            "No point focused. Use arrows or h/j/k/l to move.",
            theme::muted(),
        )),
        None => Line::from(Span::styled(
            "Press 2 or Tab to focus the chart.",
            theme::muted(),
        )),
    };
    f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No subcomponent is shared by two or more components.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

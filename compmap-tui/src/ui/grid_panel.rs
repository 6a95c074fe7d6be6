//! Panel 1 — main component grid with a type-to-filter line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, LoadState, Panel};
use crate::theme;
use crate::ui::scroll_offset;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    render_filter(f, chunks[0], app);

    let cards = app.explorer.cards(&app.grid.filter);
    if cards.is_empty() {
        let msg = match app.load {
            LoadState::Loading => "Loading components...",
            LoadState::Ready(_) if app.grid.filter.is_empty() => "No components loaded.",
            LoadState::Ready(_) => "No components match the filter.",
        };
        f.render_widget(Paragraph::new(Span::styled(msg, theme::muted())), chunks[1]);
        return;
    }

    let is_active = app.active_panel == Panel::Grid;
    let height = chunks[1].height as usize;
    let start = scroll_offset(app.grid.cursor, height);

    let lines: Vec<Line> = cards
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(i, card)| {
            let marker = if card.selected { "● " } else { "  " };
            let name_style = if is_active && i == app.grid.cursor {
                theme::cursor()
            } else if card.custom {
                theme::custom()
            } else {
                theme::text()
            };
            let mut spans = vec![
                Span::styled(marker, theme::accent()),
                Span::styled(card.name, name_style),
                Span::styled(format!("  {} subcomponents", card.sub_count), theme::muted()),
            ];
            if card.custom {
                spans.push(Span::styled("  custom", theme::neutral()));
            }
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), chunks[1]);
}

fn render_filter(f: &mut Frame, area: Rect, app: &AppState) {
    let line = if app.grid.editing_filter {
        Line::from(vec![
            Span::styled("/", theme::accent_bold()),
            Span::styled(app.grid.filter.as_str(), theme::text()),
            Span::styled("_", theme::accent()),
        ])
    } else if app.grid.filter.is_empty() {
        Line::from(Span::styled("/ to filter", theme::muted()))
    } else {
        Line::from(vec![
            Span::styled("filter: ", theme::muted()),
            Span::styled(app.grid.filter.as_str(), theme::accent()),
            Span::styled("  [Esc]clear", theme::muted()),
        ])
    };
    f.render_widget(Paragraph::new(line), area);
}

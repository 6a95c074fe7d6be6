//! Panel 3 — which mains use the detail subcomponent.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::{AppState, Panel};
use crate::theme;
use crate::ui::scroll_offset;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let explorer = &app.explorer;
    let heading_style = if explorer.selection().detail_sub.is_some() {
        theme::accent_bold()
    } else {
        theme::muted()
    };
    let mut lines = vec![
        Line::from(Span::styled(explorer.detail_message(), heading_style)),
        Line::from(""),
    ];

    let usage = explorer.detail_usage();
    let is_active = app.active_panel == Panel::Detail;
    let height = (area.height as usize).saturating_sub(lines.len());
    let start = scroll_offset(app.detail_cursor, height);

    for (i, main) in usage.iter().enumerate().skip(start).take(height) {
        let style = if is_active && i == app.detail_cursor {
            theme::cursor()
        } else if explorer.customs().contains(main) {
            theme::custom()
        } else {
            theme::text()
        };
        lines.push(Line::from(vec![
            Span::styled("  ", theme::muted()),
            Span::styled(main.as_str(), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

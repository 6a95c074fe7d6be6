//! Bottom status bar — panel hints, last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, Panel, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    let hints = if app.explorer.is_overlay_open() {
        " j/k:move d:drill Tab:users Esc:close"
    } else {
        match app.active_panel {
            Panel::Grid => " 1:Grid 2:Chart 3:Details /:filter Enter:open ?:help",
            Panel::Chart => " 1:Grid 2:Chart 3:Details arrows:move Enter:select ?:help",
            Panel::Detail => " 1:Grid 2:Chart 3:Details Enter:open ?:help",
        }
    };
    spans.push(Span::styled(hints, theme::muted()));
    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

//! Overlay widgets — component dialog with drill view, help, loading.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{AppState, OverlayPane};
use crate::theme;
use crate::ui::{centered_rect, scroll_offset};

/// The open main's subcomponents, and the users of the drilled one.
pub fn render_component(f: &mut Frame, area: Rect, app: &AppState) {
    let explorer = &app.explorer;
    let Some(main) = explorer.overlay_main() else {
        return;
    };
    let subs = explorer.overlay_subs();

    let popup = centered_rect(80, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(
            " {main}: {} subcomponents [Esc]close [d]drill [Tab]users ",
            subs.len()
        ))
        .title_style(theme::accent_bold());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let drill = explorer.drill_sub();
    let chunks = if drill.is_some() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(100)])
            .split(inner)
    };

    render_sub_list(f, chunks[0], app);
    if let Some(sub) = drill {
        render_drill(f, chunks[1], app, sub);
    }
}

fn render_sub_list(f: &mut Frame, area: Rect, app: &AppState) {
    let explorer = &app.explorer;
    let subs = explorer.overlay_subs();
    if subs.is_empty() {
        let msg = Paragraph::new(Span::styled(
            "This component has no subcomponents.",
            theme::muted(),
        ));
        f.render_widget(msg, area);
        return;
    }

    let active = app.overlay.pane == OverlayPane::Subs;
    let height = area.height as usize;
    let start = scroll_offset(app.overlay.sub, height);
    let drilled = explorer.drill_sub();

    let lines: Vec<Line> = subs
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(i, sub)| {
            let name_style = if active && i == app.overlay.sub {
                theme::cursor()
            } else if drilled == Some(sub.as_str()) {
                theme::accent_bold()
            } else if explorer.customs().contains(sub) {
                theme::custom()
            } else {
                theme::text()
            };
            let users = explorer.index().mains_using(sub).len();
            Line::from(vec![
                Span::styled(sub.as_str(), name_style),
                Span::styled(format!("  ({users})  "), theme::neutral()),
                Span::styled(explorer.link_for(sub), theme::muted()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn render_drill(f: &mut Frame, area: Rect, app: &AppState, sub: &str) {
    let users = app.explorer.drill_users();
    let active = app.overlay.pane == OverlayPane::Users;

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::panel_border(active))
        .title(format!(" \u{201c}{sub}\u{201d} is used by {} components ", users.len()))
        .title_style(theme::panel_title(active));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let height = inner.height as usize;
    let start = scroll_offset(app.overlay.user, height);
    let current = app.explorer.overlay_main();

    let lines: Vec<Line> = users
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(i, user)| {
            let style = if active && i == app.overlay.user {
                theme::cursor()
            } else if current == Some(user.as_str()) {
                theme::accent().add_modifier(Modifier::ITALIC)
            } else {
                theme::text()
            };
            Line::from(Span::styled(user.as_str(), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

/// Keyboard reference.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys [Esc]close ")
        .title_style(theme::accent_bold());

    let row = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<18}"), theme::accent()),
            Span::styled(what, theme::muted()),
        ])
    };

    let text = vec![
        Line::from(Span::styled("Global", theme::accent_bold())),
        row("Tab / Shift+Tab", "cycle panels"),
        row("1 2 3", "jump to panel"),
        row("?", "toggle this help"),
        row("q", "quit"),
        Line::from(""),
        Line::from(Span::styled("Components", theme::accent_bold())),
        row("j / k", "move"),
        row("/", "filter by name"),
        row("Enter", "open component"),
        Line::from(""),
        Line::from(Span::styled("Shared subcomponents", theme::accent_bold())),
        row("l j Right Down", "next point"),
        row("h k Left Up", "previous point"),
        row("g Home / G End", "first / last point"),
        row("Enter Space", "show usage in details"),
        Line::from(""),
        Line::from(Span::styled("Component dialog", theme::accent_bold())),
        row("j / k", "move"),
        row("d Enter", "drill into subcomponent"),
        row("Tab", "switch to users list"),
        row("Enter (users)", "open that component"),
        row("Esc", "close"),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

pub fn render_loading(f: &mut Frame, area: Rect) {
    let popup = centered_rect(40, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::neutral());
    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Loading component data...", theme::neutral())),
    ])
    .block(block);
    f.render_widget(para, popup);
}

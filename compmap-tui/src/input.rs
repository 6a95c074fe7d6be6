//! Keyboard input dispatch — help → overlay → filter input → global keys → panel handlers.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use compmap_core::ExplorerEvent;

use crate::app::{cursor_down, cursor_up, AppState, LoadState, OverlayPane, Panel};
use crate::ui::{chart_panel, panel_areas, panel_inner};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    // 1. Help and the component overlay consume input first.
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }
    if app.explorer.is_overlay_open() {
        handle_overlay_key(app, key);
        return;
    }
    if app.grid.editing_filter {
        handle_filter_key(app, key);
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Char('1') => {
            app.focus_panel(Panel::Grid);
            return;
        }
        KeyCode::Char('2') => {
            app.focus_panel(Panel::Chart);
            return;
        }
        KeyCode::Char('3') => {
            app.focus_panel(Panel::Detail);
            return;
        }
        KeyCode::Tab => {
            let next = if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel.prev()
            } else {
                app.active_panel.next()
            };
            app.focus_panel(next);
            return;
        }
        KeyCode::BackTab => {
            app.focus_panel(app.active_panel.prev());
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Grid => handle_grid_key(app, key),
        Panel::Chart => {
            if let Some(event) = chart_event(key.code) {
                app.dispatch(event);
            }
        }
        Panel::Detail => handle_detail_key(app, key),
    }
}

/// Handle a mouse event over a terminal of size `screen`.
///
/// Hovering a chart bar focuses it; clicking it also shows its usage.
/// Clicking elsewhere in a panel gives that panel focus. Ignored while a
/// dialog or the loading screen covers the panels.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, screen: Rect) {
    if app.show_help || app.explorer.is_overlay_open() || app.load == LoadState::Loading {
        return;
    }

    let areas = panel_areas(screen);
    let point = chart_panel::point_at(app, panel_inner(areas.chart), mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved => {
            if let Some(i) = point {
                app.explorer.hover_chart(i);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(panel) = areas.panel_at(mouse.column, mouse.row) {
                app.focus_panel(panel);
            }
            if let Some(i) = point {
                app.explorer.hover_chart(i);
                app.dispatch(ExplorerEvent::ChartActivate);
            }
        }
        _ => {}
    }
}

/// Chart region key map: both arrow axes and vim keys step through points.
pub fn chart_event(code: KeyCode) -> Option<ExplorerEvent> {
    match code {
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            Some(ExplorerEvent::ChartAdvance)
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            Some(ExplorerEvent::ChartRetreat)
        }
        KeyCode::Home | KeyCode::Char('g') => Some(ExplorerEvent::ChartJumpFirst),
        KeyCode::End | KeyCode::Char('G') => Some(ExplorerEvent::ChartJumpLast),
        KeyCode::Enter | KeyCode::Char(' ') => Some(ExplorerEvent::ChartActivate),
        _ => None,
    }
}

fn handle_overlay_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.dispatch(ExplorerEvent::CloseOverlay);
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.overlay.pane = match app.overlay.pane {
                OverlayPane::Subs if !app.explorer.drill_users().is_empty() => OverlayPane::Users,
                _ => OverlayPane::Subs,
            };
            return;
        }
        _ => {}
    }

    match app.overlay.pane {
        OverlayPane::Subs => {
            let len = app.explorer.overlay_subs().len();
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => cursor_down(&mut app.overlay.sub, len),
                KeyCode::Char('k') | KeyCode::Up => cursor_up(&mut app.overlay.sub),
                KeyCode::Enter | KeyCode::Char('d') | KeyCode::Char('l') | KeyCode::Right => {
                    if let Some(sub) = app.overlay_cursor_sub() {
                        app.dispatch(ExplorerEvent::DrillIntoSub(sub));
                    }
                }
                _ => {}
            }
        }
        OverlayPane::Users => {
            let len = app.explorer.drill_users().len();
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => cursor_down(&mut app.overlay.user, len),
                KeyCode::Char('k') | KeyCode::Up => cursor_up(&mut app.overlay.user),
                KeyCode::Char('h') | KeyCode::Left => app.overlay.pane = OverlayPane::Subs,
                KeyCode::Enter => {
                    if let Some(main) = app.overlay_cursor_user() {
                        app.dispatch(ExplorerEvent::OpenMainFromDrill(main));
                    }
                }
                _ => {}
            }
        }
    }
}

fn handle_filter_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.grid.filter.clear();
            app.grid.editing_filter = false;
        }
        KeyCode::Enter => app.grid.editing_filter = false,
        KeyCode::Backspace => {
            app.grid.filter.pop();
        }
        KeyCode::Char(c) => app.grid.filter.push(c),
        _ => return,
    }
    app.grid.cursor = 0;
}

fn handle_grid_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible_mains().len();
            cursor_down(&mut app.grid.cursor, len);
        }
        KeyCode::Char('k') | KeyCode::Up => cursor_up(&mut app.grid.cursor),
        KeyCode::Char('g') | KeyCode::Home => app.grid.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.grid.cursor = app.visible_mains().len().saturating_sub(1);
        }
        KeyCode::Char('/') => app.grid.editing_filter = true,
        KeyCode::Esc => {
            app.grid.filter.clear();
            app.grid.cursor = 0;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(main) = app.grid_cursor_main() {
                app.dispatch(ExplorerEvent::OpenMain(main));
            }
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut AppState, key: KeyEvent) {
    let len = app.explorer.detail_usage().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => cursor_down(&mut app.detail_cursor, len),
        KeyCode::Char('k') | KeyCode::Up => cursor_up(&mut app.detail_cursor),
        KeyCode::Enter => {
            if let Some(main) = app.detail_cursor_main() {
                app.dispatch(ExplorerEvent::OpenMain(main));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{press, sample_app};

    #[test]
    fn chart_key_map() {
        assert_eq!(chart_event(KeyCode::Right), Some(ExplorerEvent::ChartAdvance));
        assert_eq!(chart_event(KeyCode::Char('j')), Some(ExplorerEvent::ChartAdvance));
        assert_eq!(chart_event(KeyCode::Up), Some(ExplorerEvent::ChartRetreat));
        assert_eq!(chart_event(KeyCode::Home), Some(ExplorerEvent::ChartJumpFirst));
        assert_eq!(chart_event(KeyCode::Char('G')), Some(ExplorerEvent::ChartJumpLast));
        assert_eq!(chart_event(KeyCode::Char(' ')), Some(ExplorerEvent::ChartActivate));
        assert_eq!(chart_event(KeyCode::Char('x')), None);
    }

    #[test]
    fn q_quits() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = sample_app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.running);
    }

    #[test]
    fn tab_into_chart_focuses_first_point() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_panel, Panel::Chart);
        assert_eq!(app.explorer.chart().focused(), Some(0));

        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_panel, Panel::Detail);
        assert_eq!(app.explorer.chart().focused(), None);
    }

    #[test]
    fn q_in_overlay_closes_it_instead_of_quitting() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.explorer.is_overlay_open());

        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.explorer.is_overlay_open());
        assert!(app.running);
    }

    #[test]
    fn filter_input_captures_keys() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Char('/')));
        for c in "tex".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert!(app.running);
        assert_eq!(app.grid.filter, "tex");
        assert_eq!(app.visible_mains(), vec!["TextField"]);

        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.grid.filter, "te");
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.grid.filter.is_empty());
        assert!(!app.grid.editing_filter);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_panel, Panel::Grid);
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.show_help);
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Cell of chart bar `i` on a 100x30 screen.
    fn chart_cell(i: u16) -> (u16, u16) {
        let inner = panel_inner(panel_areas(SCREEN).chart);
        (inner.x + 2, inner.y + i)
    }

    const SCREEN: Rect = Rect::new(0, 0, 100, 30);

    #[test]
    fn hover_moves_chart_focus() {
        let mut app = sample_app();
        let (col, row) = chart_cell(1);
        handle_mouse(&mut app, mouse(MouseEventKind::Moved, col, row), SCREEN);
        assert_eq!(app.explorer.chart().focused(), Some(1));
        assert_eq!(app.explorer.selection().detail_sub, None);
    }

    #[test]
    fn click_on_bar_activates_it() {
        let mut app = sample_app();
        let (col, row) = chart_cell(1);
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), col, row), SCREEN);
        assert_eq!(app.active_panel, Panel::Chart);
        assert_eq!(app.explorer.chart().focused(), Some(1));
        assert_eq!(app.explorer.selection().detail_sub.as_deref(), Some("Label"));
    }

    #[test]
    fn click_outside_chart_moves_panel_focus() {
        let mut app = sample_app();
        app.focus_panel(Panel::Chart);
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 1, 1), SCREEN);
        assert_eq!(app.active_panel, Panel::Grid);
        assert_eq!(app.explorer.chart().focused(), None);
        assert_eq!(app.explorer.selection().detail_sub, None);
    }

    #[test]
    fn mouse_ignored_under_dialog() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Enter));
        let (col, row) = chart_cell(0);
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), col, row), SCREEN);
        assert_eq!(app.active_panel, Panel::Grid);
        assert_eq!(app.explorer.selection().detail_sub, None);
    }

    #[test]
    fn users_pane_needs_a_drill() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.overlay.pane, OverlayPane::Subs);
    }
}

//! Keyboard and mouse sessions driven through the public TUI API.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use compmap_core::{DataOrigin, Dataset, DocLinks, SourceMapping};
use compmap_tui::app::OverlayPane;
use compmap_tui::ui::{panel_areas, panel_inner};
use compmap_tui::{handle_key, handle_mouse, AppState, Panel};

fn dataset() -> Dataset {
    let mut mapping = SourceMapping::new();
    mapping.insert("Button".into(), vec!["Label".into(), "Icon".into()]);
    mapping.insert("ComboBox".into(), vec!["Input".into(), "Label".into(), "ListBox".into(), "Popover".into()]);
    mapping.insert("Select".into(), vec!["Label".into(), "ListBox".into(), "Popover".into(), "Popover".into()]);
    mapping.insert("Tooltip".into(), vec![]);
    Dataset {
        mapping,
        customs: Default::default(),
        origin: DataOrigin::Json,
        warnings: Vec::new(),
    }
}

fn app() -> AppState {
    AppState::with_dataset(dataset(), DocLinks::new("https://docs.example/", ".html"))
}

fn keys(app: &mut AppState, codes: &[KeyCode]) {
    for &code in codes {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }
}

#[test]
fn drill_from_overlay_into_another_component() {
    let mut app = app();

    // Grid: Button, ComboBox, Select, Tooltip. Open Select.
    keys(&mut app, &[KeyCode::Char('j'), KeyCode::Char('j'), KeyCode::Enter]);
    assert_eq!(app.explorer.overlay_main(), Some("Select"));
    assert_eq!(app.explorer.overlay_subs(), ["Label", "ListBox", "Popover"]);

    // Drill into ListBox.
    keys(&mut app, &[KeyCode::Char('j'), KeyCode::Char('d')]);
    assert_eq!(app.explorer.drill_sub(), Some("ListBox"));
    assert_eq!(app.explorer.drill_users(), ["ComboBox", "Select"]);
    assert_eq!(app.explorer.selection().detail_sub.as_deref(), Some("ListBox"));

    // Users list → open ComboBox.
    keys(&mut app, &[KeyCode::Tab, KeyCode::Enter]);
    assert_eq!(app.overlay.pane, OverlayPane::Subs);
    assert_eq!(app.explorer.overlay_main(), Some("ComboBox"));
    assert_eq!(app.explorer.drill_sub(), None);
    assert_eq!(app.explorer.selection().detail_sub.as_deref(), Some("ListBox"));

    keys(&mut app, &[KeyCode::Esc]);
    assert!(!app.explorer.is_overlay_open());
    assert_eq!(app.explorer.selection().selected_main.as_deref(), Some("ComboBox"));
    assert!(app.running);
}

#[test]
fn chart_keys_feed_detail_panel() {
    let mut app = app();

    // Shared: Label (3), ListBox (2), Popover (2).
    keys(&mut app, &[KeyCode::Tab]);
    assert_eq!(app.active_panel, Panel::Chart);
    assert_eq!(app.explorer.chart().focused(), Some(0));

    keys(&mut app, &[KeyCode::End, KeyCode::Enter]);
    assert_eq!(app.explorer.selection().detail_sub.as_deref(), Some("Popover"));
    assert_eq!(app.explorer.detail_usage(), ["ComboBox", "Select"]);

    keys(&mut app, &[KeyCode::Right, KeyCode::Char(' ')]);
    assert_eq!(app.explorer.selection().detail_sub.as_deref(), Some("Label"));

    // Detail panel: open the second user of Label.
    keys(&mut app, &[KeyCode::Tab]);
    assert_eq!(app.explorer.chart().focused(), None);
    keys(&mut app, &[KeyCode::Char('j'), KeyCode::Enter]);
    assert_eq!(app.explorer.overlay_main(), Some("ComboBox"));
}

#[test]
fn link_in_overlay_uses_open_component() {
    let mut app = app();
    keys(&mut app, &[KeyCode::Char('j'), KeyCode::Enter]);
    assert_eq!(app.explorer.overlay_main(), Some("ComboBox"));
    assert_eq!(app.explorer.link_for("Popover"), "https://docs.example/ComboBox.html");
    assert_eq!(app.explorer.link_for("ListBox"), "https://docs.example/ComboBox.html");
    assert_eq!(app.explorer.link_for("Icon"), "https://docs.example/Button.html");
}

#[test]
fn empty_component_overlay() {
    let mut app = app();
    keys(&mut app, &[KeyCode::Char('G'), KeyCode::Enter]);
    assert_eq!(app.explorer.overlay_main(), Some("Tooltip"));
    assert!(app.explorer.overlay_subs().is_empty());

    // Nothing to drill into.
    keys(&mut app, &[KeyCode::Char('d')]);
    assert_eq!(app.explorer.drill_sub(), None);
}

#[test]
fn mouse_hover_then_click_on_chart() {
    let mut app = app();
    let screen = Rect::new(0, 0, 120, 40);
    let bars = panel_inner(panel_areas(screen).chart);
    let at = |kind: MouseEventKind, row: u16| MouseEvent {
        kind,
        column: bars.x + 1,
        row: bars.y + row,
        modifiers: KeyModifiers::NONE,
    };

    // Shared: Label, ListBox, Popover.
    handle_mouse(&mut app, at(MouseEventKind::Moved, 1), screen);
    assert_eq!(app.explorer.chart().focused(), Some(1));
    assert_eq!(app.active_panel, Panel::Grid);

    handle_mouse(&mut app, at(MouseEventKind::Down(MouseButton::Left), 2), screen);
    assert_eq!(app.active_panel, Panel::Chart);
    assert_eq!(app.explorer.selection().detail_sub.as_deref(), Some("Popover"));
    assert_eq!(app.explorer.detail_usage(), ["ComboBox", "Select"]);
}

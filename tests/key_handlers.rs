use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use serde_json::json;

use tackleBox::app::settings::Settings;
use tackleBox::app::view::Source;
use tackleBox::app::{App, Focus, View};
use tackleBox::data::{DataManager, EquipmentKind, Record};
use tackleBox::runner::handlers::{handle_key, handle_mouse};
use tackleBox::ui::NAV_HEIGHT;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn app() -> App {
    let rods = (0..12)
        .map(|i| {
            let v = json!({"name": format!("Rod {}", i), "type": "spinning", "category": "SpinningReel&Lure"});
            Record::new(EquipmentKind::Rod, v.as_object().cloned().unwrap())
        })
        .collect();
    App::new(Settings::default(), DataManager::from_records(rods, vec![], vec![], vec![]), (80, 24))
}

#[test]
fn quit_and_interrupt_end_the_loop() {
    let mut app = app();
    assert!(handle_key(&mut app, key(KeyCode::Char('q'))));
    assert!(handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!handle_key(&mut app, key(KeyCode::Down)));
}

#[test]
fn tab_cycles_views_and_digits_jump() {
    let mut app = app();
    assert_eq!(app.visible_view(), Some(View::Rods));
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.visible_view(), Some(View::Reels));
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.visible_view(), Some(View::Fish));
    handle_key(&mut app, key(KeyCode::Char('2')));
    assert_eq!(app.visible_view(), Some(View::Lakes));
    // no ninth button: nothing changes
    handle_key(&mut app, key(KeyCode::Char('9')));
    assert_eq!(app.visible_view(), Some(View::Lakes));
}

#[test]
fn typing_in_search_then_enter_filters() {
    let mut app = app();
    handle_key(&mut app, key(KeyCode::Char('/')));
    assert_eq!(app.focus, Focus::Search);
    for c in "rod 11x".chars() {
        // 'q' and digits are plain text while searching
        handle_key(&mut app, key(KeyCode::Char(c)));
    }
    handle_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.search.text, "rod 11");
    assert!(!handle_key(&mut app, key(KeyCode::Enter)));
    assert_eq!(app.focus, Focus::Cards);
    let c = app.visible_container().unwrap();
    assert_eq!(c.source, Source::Search("rod 11".into()));
    assert_eq!(c.card_count(), 1);
}

#[test]
fn esc_leaves_search_without_running_it() {
    let mut app = app();
    app.focus = Focus::Search;
    handle_key(&mut app, key(KeyCode::Char('q')));
    assert_eq!(app.search.text, "q");
    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.focus, Focus::Cards);
    assert_eq!(app.visible_container().unwrap().source, Source::Full);
}

#[test]
fn scroll_keys_move_within_bounds() {
    let mut app = app();
    handle_key(&mut app, key(KeyCode::End));
    let last = app.visible_container().unwrap().blocks.len() - 1;
    assert_eq!(app.visible_container().unwrap().scroll, last);
    handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.visible_container().unwrap().scroll, last);
    handle_key(&mut app, key(KeyCode::Home));
    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.visible_container().unwrap().scroll, 0);
}

#[test]
fn mouse_click_on_nav_and_search_button() {
    let mut app = app();
    let lakes_x = app.nav.buttons[1].x;
    handle_mouse(&mut app, click(lakes_x + 1, 1));
    assert_eq!(app.visible_view(), Some(View::Lakes));

    app.search.text = "nothing".into();
    let button_x = app.search.button_x();
    handle_mouse(&mut app, click(button_x, NAV_HEIGHT + 1));
    assert!(matches!(
        app.visible_container().unwrap().source,
        Source::Search(ref t) if t == "nothing"
    ));
}

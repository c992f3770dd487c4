//! Key and mouse dispatch. Each handler mutates `App` and reports whether
//! the loop should exit.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::core::PAGE_BLOCKS;
use crate::app::{App, Focus};
use crate::input::keyboard::{is_interrupt, is_printable_key};
use crate::input::{KeyCode, KeyEvent};

/// Top-level key handler. Returns `true` when the user asked to quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if is_interrupt(&key) {
        return true;
    }
    match app.focus {
        Focus::Search => {
            handle_search_key(app, key);
            false
        }
        Focus::Cards => handle_cards_key(app, key.code),
    }
}

/// Keys while the search input has focus: typing edits the text, Enter runs
/// the search, Esc returns focus to the cards.
fn handle_search_key(app: &mut App, key: KeyEvent) {
    let code = key.code;
    if app.keys.is_enter(&code) {
        app.run_search();
        app.focus = Focus::Cards;
    } else if app.keys.is_esc(&code) {
        app.focus = Focus::Cards;
    } else if app.keys.is_backspace(&code) {
        app.search.pop_char();
    } else if let KeyCode::Char(c) = code {
        if is_printable_key(&key) {
            app.search.push_char(c);
        }
    }
}

fn handle_cards_key(app: &mut App, code: KeyCode) -> bool {
    let keys = &app.keys;
    if keys.is_quit(&code) {
        return true;
    }
    if keys.is_next_view(&code) {
        app.next_view();
    } else if keys.is_prev_view(&code) {
        app.prev_view();
    } else if keys.is_focus_search(&code) {
        app.focus = Focus::Search;
    } else if keys.is_enter(&code) {
        app.run_search();
    } else if keys.is_down(&code) {
        app.scroll(1);
    } else if keys.is_up(&code) {
        app.scroll(-1);
    } else if keys.is_page_down(&code) {
        app.scroll(PAGE_BLOCKS);
    } else if keys.is_page_up(&code) {
        app.scroll(-PAGE_BLOCKS);
    } else if keys.is_top(&code) {
        app.scroll_to_top();
    } else if keys.is_bottom(&code) {
        app.scroll_to_bottom();
    } else if keys.is_toggle_details(&code) {
        app.toggle_details();
    } else if let KeyCode::Char(c @ '1'..='9') = code {
        let n = c as usize - '1' as usize;
        match app.nav.nth(n) {
            Some(view) => app.switch_to(view),
            None => tracing::debug!("no navigation button {}", n + 1),
        }
    }
    false
}

/// Clicks hit the bars or move focus back to the cards; the wheel scrolls.
pub fn handle_mouse(app: &mut App, me: MouseEvent) {
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_click(me.column, me.row),
        MouseEventKind::ScrollDown => app.scroll(1),
        MouseEventKind::ScrollUp => app.scroll(-1),
        _ => {}
    }
}

// Keyboard input helpers and type aliases.
pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// True for a plain character the search input should take: no Ctrl or Alt
/// held (Shift is fine, it is already folded into the char).
pub fn is_printable_key(ev: &KeyEvent) -> bool {
    matches!(ev.code, KeyCode::Char(_))
        && !ev.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Ctrl+C always quits, whatever has focus.
pub fn is_interrupt(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_excludes_control_chords() {
        let plain = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(is_printable_key(&plain));
        assert!(is_printable_key(&shifted));
        assert!(!is_printable_key(&ctrl_c));
        assert!(!is_printable_key(&enter));
        assert!(is_interrupt(&ctrl_c));
        assert!(!is_interrupt(&plain));
    }
}

// Centralised keybind predicates for the application.
//
// Handlers and the viewport refer to key actions by name (`is_down`,
// `is_quit`) instead of matching raw `KeyCode` patterns inline, which keeps
// the command tables readable and the bindings in one place.

use crate::input::{KeyCode, KeyEvent, KeyModifiers};

fn plain(key: &KeyEvent, want: char) -> bool {
    matches!(key.code, KeyCode::Char(c) if c == want)
        && !key.modifiers.contains(KeyModifiers::CONTROL)
}

fn ctrl(key: &KeyEvent, want: char) -> bool {
    matches!(key.code, KeyCode::Char(c) if c == want)
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

pub fn is_down(key: &KeyEvent) -> bool {
    plain(key, 'j') || key.code == KeyCode::Down
}

pub fn is_up(key: &KeyEvent) -> bool {
    plain(key, 'k') || key.code == KeyCode::Up
}

pub fn is_top(key: &KeyEvent) -> bool {
    plain(key, 'g') || key.code == KeyCode::Home
}

pub fn is_bottom(key: &KeyEvent) -> bool {
    plain(key, 'G') || key.code == KeyCode::End
}

pub fn is_page_down(key: &KeyEvent) -> bool {
    ctrl(key, 'f') || key.code == KeyCode::PageDown
}

pub fn is_page_up(key: &KeyEvent) -> bool {
    ctrl(key, 'b') || key.code == KeyCode::PageUp
}

pub fn is_scroll_down(key: &KeyEvent) -> bool {
    ctrl(key, 'e')
}

pub fn is_scroll_up(key: &KeyEvent) -> bool {
    ctrl(key, 'y')
}

pub fn is_quit(key: &KeyEvent) -> bool {
    plain(key, 'q')
}

pub fn is_select(key: &KeyEvent) -> bool {
    plain(key, ' ')
}

pub fn is_ascend(key: &KeyEvent) -> bool {
    plain(key, 'h') || key.code == KeyCode::Left
}

pub fn is_descend(key: &KeyEvent) -> bool {
    plain(key, 'l') || key.code == KeyCode::Right
}

pub fn is_enter(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter
}

pub fn is_esc(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

pub fn is_backspace(key: &KeyEvent) -> bool {
    key.code == KeyCode::Backspace
}

pub fn is_char(key: &KeyEvent, want: char) -> bool {
    plain(key, want)
}

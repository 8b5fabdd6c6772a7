// Centralised keybind predicates. Handlers ask about actions rather
// than matching raw `KeyCode` patterns, so the bindings live in one
// place and can later be made user-configurable without touching the
// handlers.

use crate::input::KeyCode;

pub fn is_quit(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('q'))
}

pub fn is_search(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('/'))
}

pub fn is_down(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab)
}

pub fn is_up(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab)
}

pub fn is_toggle_live(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('l') | KeyCode::Enter)
}

pub fn is_retry(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('r'))
}

pub fn is_open_external(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('o'))
}

pub fn is_auto_refresh(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('a'))
}

pub fn is_export(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('e'))
}

pub fn is_theme(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('t'))
}

pub fn is_info(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('i'))
}

pub fn is_enter(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Enter)
}

pub fn is_esc(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Esc)
}

pub fn is_backspace(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Backspace)
}

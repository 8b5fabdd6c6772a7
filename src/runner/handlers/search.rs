use crate::app::settings::keybinds;
use crate::app::{Action, App, Mode};
use crate::input::KeyCode;

/// Search-prompt keys. The filter is re-applied on every edit, so the
/// panel set tracks the buffer live. Enter keeps the query; Esc clears
/// it and restores the full dashboard.
pub fn handle_search(app: &mut App, code: KeyCode) -> anyhow::Result<Action> {
    let mut buffer = match &app.mode {
        Mode::Search { buffer } => buffer.clone(),
        _ => return Ok(Action::None),
    };

    if keybinds::is_enter(&code) {
        app.mode = Mode::Normal;
    } else if keybinds::is_esc(&code) {
        app.set_query(String::new());
        app.mode = Mode::Normal;
    } else if keybinds::is_backspace(&code) {
        buffer.pop();
        app.set_query(buffer.clone());
        app.mode = Mode::Search { buffer };
    } else if let KeyCode::Char(c) = code {
        buffer.push(c);
        app.set_query(buffer.clone());
        app.mode = Mode::Search { buffer };
    }

    Ok(Action::None)
}

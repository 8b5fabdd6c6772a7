use crate::app::settings::keybinds;
use crate::app::{Action, App};
use crate::input::KeyCode;

/// Message-dialog keys: Enter, Esc or any character dismisses.
pub fn handle_message(app: &mut App, code: KeyCode) -> anyhow::Result<Action> {
    if keybinds::is_enter(&code) || keybinds::is_esc(&code) || matches!(code, KeyCode::Char(_)) {
        app.dismiss_dialog();
    }
    Ok(Action::None)
}

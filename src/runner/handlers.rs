//! Key handling, split per interaction mode.

pub mod message;
pub mod normal;
pub mod search;

pub use message::handle_message;
pub use normal::handle_normal;
pub use search::handle_search;

use crate::app::{Action, App, Mode};
use crate::input::KeyCode;

/// Top-level key handler that dispatches into the mode submodules.
pub fn handle_key(app: &mut App, code: KeyCode) -> anyhow::Result<Action> {
    match &app.mode {
        Mode::Normal => handle_normal(app, code),
        Mode::Search { .. } => handle_search(app, code),
        Mode::Message { .. } => handle_message(app, code),
    }
}

pub mod keyboard;

pub use keyboard::{poll, read_event, InputEvent, KeyCode, KeyEvent, KeyModifiers};

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{App, Mode};

pub mod themes;
pub mod widgets;

pub use themes::Theme;

/// Draw one frame: header, metrics strip, panel grid, help bar, and any
/// open dialog on top.
pub fn ui(f: &mut Frame, app: &App) {
    let theme = Theme::for_app(app.dark_theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    widgets::header::render(f, chunks[0], app, &theme);
    widgets::metrics::render(f, chunks[1], &app.metrics, &theme);
    widgets::grid::render(f, chunks[2], app, &theme);
    widgets::footer::render(f, chunks[3], app, &theme);

    if let Mode::Message { title, content } = &app.mode {
        widgets::dialogs::render_message(f, f.area(), title, content, &theme);
    }
}

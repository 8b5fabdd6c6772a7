use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Mode};
use crate::ui::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let help = match app.mode {
        Mode::Search { .. } => "type to filter · ⏎ keep · esc clear",
        Mode::Message { .. } => "⏎/esc close",
        Mode::Normal => {
            "q quit · / search · ↑/↓ select · ⏎ live/demo · r retry · a auto-refresh · e export · o open · t theme · i info"
        }
    };
    f.render_widget(Paragraph::new(help).style(theme.dimmed()), area);
}

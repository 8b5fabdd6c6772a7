use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::panel_card;
use crate::app::App;
use crate::ui::Theme;

/// Rows of panel cards, two columns wide, mirroring the original
/// dashboard grid.
pub const CARD_HEIGHT: u16 = 12;

/// Render the mounted panels. The selected panel's row is always kept
/// inside the viewport; rows scroll as a unit.
pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    if app.panels.is_empty() {
        let msg = format!("no visualizations match “{}”", app.query.trim());
        f.render_widget(
            Paragraph::new(msg).style(theme.dimmed()).centered(),
            area,
        );
        return;
    }

    let rows = app.panels.len().div_ceil(2);
    let rows_fit = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = app.selected / 2;
    let first_row = if selected_row >= rows_fit {
        selected_row + 1 - rows_fit
    } else {
        0
    };

    for (screen_row, row) in (first_row..rows).take(rows_fit).enumerate() {
        let y = area.y + (screen_row as u16) * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, height);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row_area);

        for column in 0..2 {
            let index = row * 2 + column;
            if let Some(controller) = app.panels.get(index) {
                panel_card::render(f, columns[column], controller, index == app.selected, theme);
            }
        }
    }
}

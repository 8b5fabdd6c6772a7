use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::Theme;

/// Centered modal with a title and wrapped body text.
pub fn render_message(f: &mut Frame, area: Rect, title: &str, content: &str, theme: &Theme) {
    let dialog = centered_rect(60, 50, area);
    f.render_widget(Clear, dialog);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accented())
        .title(format!(" {title} "))
        .style(theme.base());
    let inner = block.inner(dialog);
    f.render_widget(block, dialog);
    f.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: true }),
        inner,
    );
}

/// Rect covering `percent_x` × `percent_y` of `r`, centered.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_contained_and_centered() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert!(inner.width <= 60);
        assert!(inner.height <= 20);
        let left = inner.x - outer.x;
        let right = outer.right() - inner.right();
        assert!(left.abs_diff(right) <= 1);
    }
}

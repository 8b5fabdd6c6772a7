use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::metrics::MetricsBoard;
use crate::ui::Theme;

/// Real-time metrics strip: one cell per headline metric plus the
/// component status column on the right.
pub fn render(f: &mut Frame, area: Rect, board: &MetricsBoard, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" real-time metrics ")
        .style(theme.base());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cell_count = board.metrics().len() + 1;
    let constraints: Vec<Constraint> = (0..cell_count)
        .map(|_| Constraint::Ratio(1, cell_count as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (metric, cell) in board.metrics().iter().zip(cells.iter()) {
        let value_style = if metric.critical {
            theme.base().fg(theme.crit).add_modifier(Modifier::BOLD)
        } else {
            theme.base().add_modifier(Modifier::BOLD)
        };
        let change_style = if metric.change >= 0.0 {
            theme.base().fg(theme.ok)
        } else {
            theme.base().fg(theme.crit)
        };
        let arrow = if metric.change >= 0.0 { "▲" } else { "▼" };
        let lines = vec![
            Line::styled(metric.label, theme.dimmed()),
            Line::styled(metric.formatted_value(), value_style),
            Line::from(Span::styled(
                format!("{arrow} {}", metric.formatted_change()),
                change_style,
            )),
        ];
        f.render_widget(Paragraph::new(lines), *cell);
    }

    if let Some(cell) = cells.last() {
        let lines: Vec<Line> = board
            .components()
            .iter()
            .map(|c| {
                let color = if c.online { theme.ok } else { theme.crit };
                Line::from(vec![
                    Span::styled("● ", theme.base().fg(color)),
                    Span::styled(c.name, theme.dimmed()),
                ])
            })
            .collect();
        f.render_widget(Paragraph::new(lines), *cell);
    }
}

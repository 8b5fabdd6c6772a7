use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::core::panel::PanelController;
use crate::app::registry::DemoContent;
use crate::app::types::{LoadStatus, PanelView};
use crate::ui::Theme;

/// One visualization card: bordered, mode badge in the corner, wrapped
/// description, then either the demo visualization or the live status
/// surface.
pub fn render(
    f: &mut Frame,
    area: Rect,
    controller: &PanelController,
    selected: bool,
    theme: &Theme,
) {
    let d = controller.descriptor();

    let border_style = if selected {
        theme.accented().add_modifier(Modifier::BOLD)
    } else {
        theme.dimmed()
    };
    let badge = if controller.is_live() {
        Span::styled(" LIVE ", theme.base().fg(theme.ok).add_modifier(Modifier::BOLD))
    } else {
        Span::styled(" DEMO ", theme.dimmed())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(format!(" {} {} ", d.icon, d.title)))
        .title(Line::from(badge).right_aligned())
        .style(theme.base());
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let description = textwrap::wrap(&d.description, usize::from(parts[0].width.max(1)))
        .into_iter()
        .take(2)
        .map(|l| Line::styled(l.into_owned(), theme.dimmed()))
        .collect::<Vec<_>>();
    f.render_widget(Paragraph::new(description), parts[0]);

    match controller.view() {
        PanelView::Demo => render_demo(f, parts[1], &d.demo, theme),
        PanelView::Live { status, .. } => render_live(f, parts[1], d, status, theme),
    }
}

fn render_live(
    f: &mut Frame,
    area: Rect,
    descriptor: &crate::app::registry::PanelDescriptor,
    status: &LoadStatus,
    theme: &Theme,
) {
    let host = descriptor
        .external_url
        .host_str()
        .unwrap_or("external host")
        .to_string();

    let lines = match status {
        LoadStatus::Loading => vec![
            Line::default(),
            Line::styled("⟳ loading dashboard…", theme.accented()).centered(),
            Line::styled(host, theme.dimmed()).centered(),
        ],
        LoadStatus::Loaded(_) => vec![
            Line::from(vec![
                Span::styled("● ", theme.base().fg(theme.ok)),
                Span::styled("live data", theme.base().fg(theme.ok)),
            ]),
            Line::styled(status.brief(), theme.dimmed()),
            Line::default(),
            Line::styled("o: open full view", theme.dimmed()),
        ],
        LoadStatus::Failed(reason) => {
            let mut lines = vec![Line::styled(
                "⚠ failed to load dashboard",
                theme.base().fg(theme.crit).add_modifier(Modifier::BOLD),
            )];
            lines.extend(
                textwrap::wrap(reason, usize::from(area.width.max(1)))
                    .into_iter()
                    .take(2)
                    .map(|l| Line::styled(l.into_owned(), theme.dimmed())),
            );
            lines.push(Line::default());
            lines.push(Line::styled("r: retry · o: open in browser", theme.accented()));
            lines
        }
    };

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_demo(f: &mut Frame, area: Rect, demo: &DemoContent, theme: &Theme) {
    match demo {
        DemoContent::ThreatMap { severities, hotspots } => {
            let counts = Line::from(
                severities
                    .iter()
                    .flat_map(|(sev, n)| {
                        vec![
                            Span::styled(
                                format!("{} {} ", sev.marker(), n),
                                theme.base().fg(theme.severity(*sev)),
                            ),
                            Span::raw(" "),
                        ]
                    })
                    .collect::<Vec<_>>(),
            );
            let mut lines = vec![counts, Line::default()];
            lines.extend(hotspots.iter().map(|(region, sev)| {
                Line::from(vec![
                    Span::styled("▣ ", theme.base().fg(theme.severity(*sev))),
                    Span::raw(region.clone()),
                    Span::styled(format!("  {}", sev.label()), theme.dimmed()),
                ])
            }));
            f.render_widget(Paragraph::new(lines), area);
        }
        DemoContent::Distribution { slices } => {
            let palette = [theme.crit, theme.warn, theme.accent, theme.ok];
            let lines: Vec<Line> = slices
                .iter()
                .zip(palette.iter().cycle())
                .map(|((name, pct), color)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:<9}", name),
                            theme.base().fg(*color),
                        ),
                        Span::styled(share_bar(*pct, 20), theme.base().fg(*color)),
                        Span::styled(format!(" {pct}%"), theme.dimmed()),
                    ])
                })
                .collect();
            f.render_widget(Paragraph::new(lines), area);
        }
        DemoContent::Gauge { level, percent, caption } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(area);
            let gauge = Gauge::default()
                .ratio(f64::from(*percent) / 100.0)
                .label(level.clone())
                .gauge_style(theme.base().fg(theme.warn));
            f.render_widget(gauge, parts[0]);
            f.render_widget(
                Paragraph::new(Line::styled(caption.clone(), theme.dimmed())),
                parts[2],
            );
        }
        DemoContent::Trend { bars } => {
            let data: Vec<(&str, u64)> = bars.iter().map(|(m, n)| (m.as_str(), *n)).collect();
            let chart = BarChart::default()
                .data(&data)
                .bar_width(3)
                .bar_gap(1)
                .bar_style(theme.accented())
                .value_style(theme.base().add_modifier(Modifier::BOLD))
                .label_style(theme.dimmed());
            f.render_widget(chart, area);
        }
        DemoContent::Regions { markers } => {
            let lines: Vec<Line> = markers
                .iter()
                .map(|(region, sev)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", sev.marker()),
                            theme.base().fg(theme.severity(*sev)),
                        ),
                        Span::raw(region.clone()),
                        Span::styled(format!("  {}", sev.label()), theme.dimmed()),
                    ])
                })
                .collect();
            f.render_widget(Paragraph::new(lines), area);
        }
    }
}

/// Horizontal share bar scaled to `width` cells at 100%.
pub fn share_bar(percent: u8, width: u16) -> String {
    let filled = (usize::from(percent.min(100)) * usize::from(width)).div_ceil(100);
    "█".repeat(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_bar_scales_with_percent() {
        assert_eq!(share_bar(100, 20).chars().count(), 20);
        assert_eq!(share_bar(50, 20).chars().count(), 10);
        assert_eq!(share_bar(0, 20), "");
        // Tiny shares still show one cell.
        assert_eq!(share_bar(1, 20).chars().count(), 1);
    }

    #[test]
    fn share_bar_clamps_above_hundred() {
        assert_eq!(share_bar(250, 10).chars().count(), 10);
    }
}

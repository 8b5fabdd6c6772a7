use chrono::Local;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Mode};
use crate::ui::Theme;

/// Two-line header: product title, then the live status line (search
/// query or prompt, auto-refresh state, visible panel count, clock).
pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let title = Line::from(vec![
        Span::styled("🛡 threatdeck", theme.title()),
        Span::styled(
            " — national cyber threat intelligence",
            theme.dimmed(),
        ),
    ]);

    let refresh = if app.scheduler.is_enabled() {
        Span::styled(
            format!("auto-refresh {}s", app.scheduler.period().as_secs()),
            theme.accented(),
        )
    } else {
        Span::styled("auto-refresh off", theme.dimmed())
    };

    let query = match &app.mode {
        Mode::Search { buffer } => Span::styled(format!("/{buffer}▏"), theme.accented()),
        _ if !app.query.is_empty() => {
            Span::styled(format!("filter: {}", app.query), theme.accented())
        }
        _ => Span::styled("no filter", theme.dimmed()),
    };

    let status = Line::from(vec![
        query,
        Span::raw("  ·  "),
        refresh,
        Span::raw("  ·  "),
        Span::styled(
            format!("{}/{} panels", app.panels.len(), app.registry().len()),
            theme.dimmed(),
        ),
        Span::raw("  ·  "),
        Span::styled(Local::now().format("%H:%M:%S").to_string(), theme.dimmed()),
    ]);

    f.render_widget(Paragraph::new(vec![title, status]).style(theme.base()), area);
}

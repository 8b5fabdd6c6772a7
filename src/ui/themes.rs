use ratatui::style::{Color, Modifier, Style};

use crate::app::registry::Severity;

#[derive(Clone, Debug)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub dim: Color,
    pub ok: Color,
    pub warn: Color,
    pub crit: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(11, 12, 13),
            fg: Color::Gray,
            accent: Color::Cyan,
            dim: Color::DarkGray,
            ok: Color::Green,
            warn: Color::Yellow,
            crit: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            dim: Color::Gray,
            ok: Color::Green,
            warn: Color::Rgb(180, 120, 0),
            crit: Color::Red,
        }
    }

    pub fn for_app(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn accented(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn severity(&self, sev: Severity) -> Color {
        match sev {
            Severity::Critical => self.crit,
            Severity::High => Color::Rgb(255, 140, 0),
            Severity::Medium => self.warn,
            Severity::Low => self.ok,
        }
    }
}

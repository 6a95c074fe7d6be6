//! Neon-on-charcoal palette and the style helpers every panel draws with.
//!
//! - **Accent**: electric cyan (focus, highlights)
//! - **Custom**: neon green (components built in-house rather than library-provided)
//! - **Warning**: neon orange (load fallbacks, partial data)
//! - **Negative**: hot pink (load failures)
//! - **Neutral**: cool purple (secondary info, hints)
//! - **Muted**: steel blue (disabled, secondary text)

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub custom: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    pub const fn neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            custom: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
        }
    }

    /// Bar color for a shared sub used by `count` mains, relative to the busiest.
    pub fn usage_color(&self, count: usize, max: usize) -> Color {
        if max == 0 {
            return self.muted;
        }
        match count * 100 / max {
            p if p >= 75 => self.negative,
            p if p >= 50 => self.warning,
            p if p >= 25 => self.neutral,
            _ => self.muted,
        }
    }
}

const THEME: Theme = Theme::neon();

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

/// Names of custom components.
pub fn custom() -> Style {
    Style::default().fg(THEME.custom)
}

/// The row under a list cursor.
pub fn cursor() -> Style {
    Style::default()
        .fg(THEME.background)
        .bg(THEME.accent)
        .add_modifier(Modifier::BOLD)
}

/// The chart point holding keyboard focus.
pub fn focused() -> Style {
    Style::default()
        .fg(THEME.accent)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub fn usage(count: usize, max: usize) -> Style {
    Style::default().fg(THEME.usage_color(count, max))
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

use ratatui::{prelude::*, widgets::Gauge};

use crate::core::config::Theme;

/// Color palette derived from the configured theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub dimmed: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            text: Color::White,
            dimmed: Color::DarkGray,
            accent: Color::Magenta,
            border: Color::Gray,
            highlight_bg: Color::Magenta,
            highlight_fg: Color::White,
        },
        Theme::Light => Palette {
            text: Color::Black,
            dimmed: Color::Gray,
            accent: Color::Blue,
            border: Color::DarkGray,
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,
        },
    }
}

/// Create a gauge with color based on utilization thresholds
pub fn usage_gauge<'a>(percent: f32, label: String) -> Gauge<'a> {
    let color = match percent {
        p if p < 50.0 => Color::Cyan,
        p if p < 75.0 => Color::LightYellow,
        p if p < 90.0 => Color::LightRed,
        _ => Color::Red,
    };

    Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio((percent as f64 / 100.0).clamp(0.0, 1.0))
        .label(label)
}

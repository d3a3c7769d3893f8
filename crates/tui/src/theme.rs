//! Theme and styling for the Flowdeck TUI.
//!
//! Dark theme with a blue accent; the chart palette mirrors the dashboard's
//! four series colors and is cycled modulo its length.

use ratatui::style::{Color, Modifier, Style};

/// Accent color for the active view tab and focused elements.
pub const ACCENT: Color = Color::Rgb(96, 165, 250);

/// Primary foreground color for normal text.
pub const FG: Color = Color::Rgb(224, 224, 230);

/// Muted foreground color for hints, labels, and secondary text.
pub const FG_MUTED: Color = Color::Rgb(168, 168, 175);

/// Default border color for unfocused panels.
pub const BORDER: Color = Color::Rgb(72, 72, 80);

/// Success color for completed stages and available stock.
pub const OK: Color = Color::Rgb(52, 211, 153);

/// Warning color for failed steps and unpurchased stock.
pub const WARN: Color = Color::Rgb(248, 113, 113);

/// Amber highlight, third chart series.
pub const AMBER: Color = Color::Rgb(251, 191, 36);

/// Chart series palette; segments cycle through it modulo 4.
pub const CHART: [Color; 4] = [OK, ACCENT, AMBER, WARN];

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn title_style() -> Style {
    Style::default().fg(FG_MUTED).add_modifier(Modifier::BOLD)
}

pub fn text_style() -> Style {
    Style::default().fg(FG)
}

pub fn text_muted() -> Style {
    Style::default().fg(FG_MUTED)
}

pub fn ok_style() -> Style {
    Style::default().fg(OK)
}

pub fn warn_style() -> Style {
    Style::default().fg(WARN)
}

pub fn accent_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

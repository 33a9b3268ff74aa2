//! Style definitions for the console panels.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Panel borders
// =============================================================================

/// Border of the focused field or panel.
pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Output border when the last result was an error.
pub fn error_panel_border_style() -> Style {
    Style::default().fg(Color::Red)
}

// =============================================================================
// Form
// =============================================================================

pub fn field_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

pub fn toggle_on_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

pub fn toggle_off_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Status line
// =============================================================================

/// Function key labels like "F1".
pub fn key_hint_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn status_text_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn demo_badge_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn status_error_style() -> Style {
    Style::default().fg(Color::Red)
}

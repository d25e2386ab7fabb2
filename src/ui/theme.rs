//! Color theme constants for the demo UI
//!
//! Minimal dark palette plus one accent per view state.

use ratatui::style::Color;

use crate::view_state::ViewState;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text, also used for panels mid-fade
pub const COLOR_DIM: Color = Color::DarkGray;

/// Accent color for a view state.
pub fn state_color(state: ViewState) -> Color {
    match state {
        ViewState::Content => Color::LightGreen,
        ViewState::Empty => Color::Gray,
        ViewState::Error => Color::Red,
        ViewState::Loading => Color::Yellow,
        ViewState::Undefined => Color::Magenta,
    }
}

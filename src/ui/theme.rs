use crate::frame::HighlightState;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub changing: Color,  // Violet
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

impl Theme {
    /// Colour for an element in the given highlight state
    pub fn state_color(&self, state: HighlightState) -> Color {
        match state {
            HighlightState::Default => self.primary,
            HighlightState::Changing => self.changing,
            HighlightState::Modified => self.success,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    changing: Color::Rgb(203, 166, 247),       // Violet for elements in flight
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for status bar
};

use crate::trace::StepKind;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color, // Cyan for type names
    pub bar: Color,       // Bars not involved in the current step
    pub compare: Color,   // Cyan
    pub swap: Color,      // Yellow
    pub found: Color,     // Green
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    string: Color::Rgb(250, 179, 135),         // Orange for strings
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type names
    bar: Color::Rgb(88, 91, 152),
    compare: Color::Rgb(137, 220, 235),
    swap: Color::Rgb(249, 226, 175),
    found: Color::Rgb(166, 227, 161),
};

impl Theme {
    /// Color for bars highlighted by a step of `kind`
    pub fn highlight_for(&self, kind: StepKind) -> Color {
        match kind {
            StepKind::Swap => self.swap,
            StepKind::Found => self.found,
            StepKind::Info => self.primary,
            StepKind::Compare | StepKind::NotFound | StepKind::Done => self.compare,
        }
    }

    /// Color of a log line of `kind`
    pub fn log_color(&self, kind: StepKind) -> Color {
        match kind {
            StepKind::Info => self.primary,
            StepKind::Compare => self.comment,
            StepKind::Swap => self.swap,
            StepKind::Found => self.found,
            StepKind::NotFound => self.error,
            StepKind::Done => self.fg,
        }
    }
}

use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub error: Color,     // Red
    pub digit: Color,
    pub operator: Color,
    pub control: Color, // Clear / backspace
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub pressed_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(243, 139, 168),
    digit: Color::Rgb(205, 214, 244),
    operator: Color::Rgb(137, 180, 250),       // Blue for operators
    control: Color::Rgb(243, 139, 168),        // Red for clear / backspace
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the pressed button
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    pressed_bg: Color::Rgb(69, 71, 90),
};

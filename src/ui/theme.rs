use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue: highlighted cell/node
    pub secondary: Color, // Orange: shifting cells, detached node
    pub comment: Color,   // Grey
    pub success: Color,   // Green: selected / found
    pub error: Color,     // Red: marked for deletion
    pub border_focused: Color,
    pub border_normal: Color,
    pub panel_bg: Color,
    pub cell_bg: Color,
    pub scanned: Color, // Muted blue for visited cells
    pub title: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow
    border_normal: Color::Rgb(108, 112, 134),
    panel_bg: Color::Rgb(50, 50, 70),
    cell_bg: Color::Rgb(69, 71, 90),
    scanned: Color::Rgb(116, 140, 190),
    title: Color::Rgb(148, 226, 213), // Teal
};

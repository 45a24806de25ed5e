use ratatui::style::Color;

/// Color theme for the tableau
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const BG: Color = Color::Rgb(13, 17, 23);

    // Card colors
    pub const CARD_BORDER: Color = Color::Rgb(108, 117, 125);
    pub const CARD_BACK: Color = Color::Rgb(60, 60, 120);
    pub const CARD_FACE: Color = Color::Rgb(240, 240, 240);

    // Suit colors
    pub const RED_SUIT: Color = Color::Rgb(230, 57, 70);
    pub const BLACK_SUIT: Color = Color::Rgb(224, 224, 224);

    // UI elements
    pub const GOLD: Color = Color::Rgb(255, 183, 3);
    pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
    pub const MUTED_TEXT: Color = Color::Rgb(160, 160, 180);
}

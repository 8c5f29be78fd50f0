//! Color palettes - light and dark

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_highlight: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub error: Color,
}

impl Palette {
    pub const LIGHT: Self = Self {
        bg_primary: Color::Rgb(255, 255, 255),   // #ffffff
        bg_highlight: Color::Rgb(236, 230, 250), // #ece6fa pale violet
        fg_primary: Color::Rgb(26, 26, 26),      // #1a1a1a
        fg_secondary: Color::Rgb(102, 102, 102), // #666666
        accent: Color::Rgb(98, 0, 238),          // #6200ee
        accent_alt: Color::Rgb(140, 82, 255),    // #8c52ff
        border: Color::Rgb(221, 221, 221),       // #dddddd
        error: Color::Rgb(176, 0, 32),           // #b00020
    };

    pub const DARK: Self = Self {
        bg_primary: Color::Rgb(26, 26, 26),      // #1a1a1a
        bg_highlight: Color::Rgb(51, 51, 51),    // #333333
        fg_primary: Color::Rgb(255, 255, 255),   // #ffffff
        fg_secondary: Color::Rgb(153, 153, 153), // #999999
        accent: Color::Rgb(187, 134, 252),       // #bb86fc
        accent_alt: Color::Rgb(3, 218, 198),     // #03dac6
        border: Color::Rgb(68, 68, 68),          // #444444
        error: Color::Rgb(207, 102, 121),        // #cf6679
    };
}

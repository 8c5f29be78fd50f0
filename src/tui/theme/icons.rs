//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    pub search: &'static str,
    pub lyrics: &'static str,
    pub video: &'static str,
    pub music: &'static str,
    pub artist: &'static str,
    pub link: &'static str,
    pub help: &'static str,
    pub moon: &'static str,
    pub sun: &'static str,

    pub error: &'static str,

    pub marker: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            search: "\u{f002}",  // nf-fa-search
            lyrics: "\u{f15c}",  // nf-fa-file_text_o
            video: "\u{f16a}",   // nf-fa-youtube_play
            music: "\u{f001}",   // nf-fa-music
            artist: "\u{f007}",  // nf-fa-user
            link: "\u{f0c1}",    // nf-fa-link
            help: "\u{f059}",    // nf-fa-question_circle
            moon: "\u{f186}",    // nf-fa-moon_o
            sun: "\u{f185}",     // nf-fa-sun_o

            error: "\u{f00d}",   // nf-fa-times

            marker: "♪",
        }
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = tick as usize % Self::BRAILLE.len();
        Self::BRAILLE[idx]
    }
}

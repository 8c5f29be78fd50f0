use super::Config;
use crate::lyrics::snippet::DEFAULT_CONTEXT_RADIUS;

pub const CONTEXT_RADIUS: usize = DEFAULT_CONTEXT_RADIUS;
pub const LRCLIB_BASE_URL: &str = "https://lrclib.net/api";
pub const YOUTUBE_BASE_URL: &str = "https://www.youtube.com";
pub const HTTP_TIMEOUT_SECS: u64 = 10;
pub const MAX_LYRICS_RESULTS: usize = 20;
pub const MAX_VIDEO_RESULTS: usize = 10;

/// Config written on first run
pub fn defaults() -> Config {
    Config::default()
}

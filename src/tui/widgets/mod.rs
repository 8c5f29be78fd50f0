pub mod clip_preview;
pub mod help;
pub mod results;
pub mod root;

pub mod api;
pub mod models;

pub use api::YoutubeClient;
pub use models::Video;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub video_id: String,
    pub title: String,
    pub channel: Option<String>,
    pub duration_seconds: Option<u32>,
}

impl Video {
    /// Watch link, optionally starting `start_secs` into the video
    pub fn watch_url(&self, start_secs: Option<u64>) -> String {
        let mut url = format!(
            "https://www.youtube.com/watch?v={}",
            urlencoding::encode(&self.video_id)
        );
        if let Some(t) = start_secs.filter(|t| *t > 0) {
            url.push_str(&format!("&t={t}s"));
        }
        url
    }

    pub fn label(&self) -> String {
        match &self.channel {
            Some(c) if !c.is_empty() => format!("{} - {}", self.title, c),
            _ => self.title.clone(),
        }
    }
}

/// Format seconds as "m:ss" or "h:mm:ss"
pub fn format_duration(secs: u32) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

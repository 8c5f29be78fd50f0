//! Two-step lookup: lyrics first, then videos for the top lyrics hit.

use crate::lyrics::{LrclibClient, LyricsRecord};
use crate::youtube::{Video, YoutubeClient};
use std::future::Future;

pub trait LyricsSource {
    fn search_lyrics(
        &self,
        query: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<LyricsRecord>>> + Send;
}

pub trait VideoSource {
    fn search_videos(&self, query: &str) -> impl Future<Output = anyhow::Result<Vec<Video>>> + Send;
}

impl LyricsSource for LrclibClient {
    async fn search_lyrics(&self, query: &str) -> anyhow::Result<Vec<LyricsRecord>> {
        self.search(query).await
    }
}

impl VideoSource for YoutubeClient {
    async fn search_videos(&self, query: &str) -> anyhow::Result<Vec<Video>> {
        YoutubeClient::search_videos(self, query).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub query: String,
    pub lyrics: Vec<LyricsRecord>,
    /// Videos for the first lyrics hit; empty when there were no lyrics
    pub videos: Vec<Video>,
    /// Set when the video lookup failed after lyrics succeeded
    pub video_error: Option<String>,
}

/// Run the lyrics search, then (only if it found something) the video search.
pub async fn run<L, V>(lyrics: &L, videos: &V, query: &str) -> anyhow::Result<SearchOutcome>
where
    L: LyricsSource + Sync,
    V: VideoSource + Sync,
{
    let query = query.trim().to_string();
    let records = lyrics.search_lyrics(&query).await?;

    let mut outcome = SearchOutcome {
        query,
        lyrics: records,
        ..SearchOutcome::default()
    };

    let Some(first) = outcome.lyrics.first() else {
        tracing::info!("no lyrics for {:?}, skipping video search", outcome.query);
        return Ok(outcome);
    };

    let video_query = first.video_query();
    match videos.search_videos(&video_query).await {
        Ok(v) => outcome.videos = v,
        Err(e) => {
            tracing::warn!("video search for {video_query:?} failed: {e:#}");
            outcome.video_error = Some(format!("{e:#}"));
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Calls(Mutex<Vec<String>>);

    impl Calls {
        fn push(&self, s: String) {
            self.0.lock().unwrap().push(s);
        }
        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    struct FakeLyrics<'a> {
        calls: &'a Calls,
        records: Vec<LyricsRecord>,
        fail: bool,
    }

    impl LyricsSource for FakeLyrics<'_> {
        async fn search_lyrics(&self, query: &str) -> anyhow::Result<Vec<LyricsRecord>> {
            self.calls.push(format!("lyrics:{query}"));
            if self.fail {
                anyhow::bail!("lrclib down");
            }
            Ok(self.records.clone())
        }
    }

    struct FakeVideos<'a> {
        calls: &'a Calls,
        fail: bool,
    }

    impl VideoSource for FakeVideos<'_> {
        async fn search_videos(&self, query: &str) -> anyhow::Result<Vec<Video>> {
            self.calls.push(format!("videos:{query}"));
            if self.fail {
                anyhow::bail!("youtube down");
            }
            Ok(vec![Video {
                video_id: "vid1".into(),
                title: query.to_string(),
                channel: None,
                duration_seconds: None,
            }])
        }
    }

    fn record(track: &str, artist: &str) -> LyricsRecord {
        LyricsRecord {
            id: 1,
            track_name: track.into(),
            artist_name: artist.into(),
            album_name: None,
            duration: None,
            instrumental: false,
            plain_lyrics: Some("la la".into()),
            synced_lyrics: None,
        }
    }

    #[tokio::test]
    async fn test_video_query_uses_first_lyrics_hit() {
        let calls = Calls::default();
        let lyrics = FakeLyrics {
            calls: &calls,
            records: vec![record("Night Song", "The Walkers"), record("Other", "Band")],
            fail: false,
        };
        let videos = FakeVideos { calls: &calls, fail: false };

        let out = run(&lyrics, &videos, "  walk alone ").await.unwrap();
        assert_eq!(out.query, "walk alone");
        assert_eq!(out.lyrics.len(), 2);
        assert_eq!(out.videos.len(), 1);
        assert_eq!(out.videos[0].title, "Night Song The Walkers");
        assert_eq!(
            calls.take(),
            vec!["lyrics:walk alone", "videos:Night Song The Walkers"]
        );
    }

    #[tokio::test]
    async fn test_no_lyrics_means_no_video_request() {
        let calls = Calls::default();
        let lyrics = FakeLyrics { calls: &calls, records: vec![], fail: false };
        let videos = FakeVideos { calls: &calls, fail: false };

        let out = run(&lyrics, &videos, "nothing").await.unwrap();
        assert!(out.lyrics.is_empty());
        assert!(out.videos.is_empty());
        assert_eq!(calls.take(), vec!["lyrics:nothing"]);
    }

    #[tokio::test]
    async fn test_lyrics_failure_fails_search() {
        let calls = Calls::default();
        let lyrics = FakeLyrics { calls: &calls, records: vec![], fail: true };
        let videos = FakeVideos { calls: &calls, fail: false };

        assert!(run(&lyrics, &videos, "q").await.is_err());
        assert_eq!(calls.take(), vec!["lyrics:q"]);
    }

    #[tokio::test]
    async fn test_video_failure_keeps_lyrics() {
        let calls = Calls::default();
        let lyrics = FakeLyrics {
            calls: &calls,
            records: vec![record("A", "B")],
            fail: false,
        };
        let videos = FakeVideos { calls: &calls, fail: true };

        let out = run(&lyrics, &videos, "q").await.unwrap();
        assert_eq!(out.lyrics.len(), 1);
        assert!(out.videos.is_empty());
        assert!(out.video_error.unwrap().contains("youtube down"));
    }
}

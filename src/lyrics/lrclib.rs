//! LRCLIB API client
//!
//! LRCLIB is a free lyrics API with full-text search over track names,
//! artists and lyrics. API Documentation: https://lrclib.net/docs

use super::parser::LyricsDocument;
use crate::config::LyricsConfig;
use anyhow::Context;
use serde::Deserialize;

/// One LRCLIB search hit
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LyricsRecord {
    pub id: i64,
    pub track_name: String,
    pub artist_name: String,
    #[serde(default)]
    pub album_name: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub instrumental: bool,
    #[serde(default)]
    pub plain_lyrics: Option<String>,
    #[serde(default)]
    pub synced_lyrics: Option<String>,
}

impl LyricsRecord {
    /// Lyrics as lines, preferring synced lyrics so clips can be timed
    pub fn document(&self) -> LyricsDocument {
        if let Some(synced) = &self.synced_lyrics
            && !synced.trim().is_empty() {
                return LyricsDocument::parse(synced, true);
            }
        if let Some(plain) = &self.plain_lyrics
            && !plain.trim().is_empty() {
                return LyricsDocument::parse(plain, false);
            }
        LyricsDocument::default()
    }

    /// Query used to find a video for this track
    pub fn video_query(&self) -> String {
        format!("{} {}", self.track_name, self.artist_name)
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.track_name, self.artist_name)
    }
}

/// LRCLIB API client
#[derive(Debug, Clone)]
pub struct LrclibClient {
    client: reqwest::Client,
    base_url: String,
    max_results: usize,
}

impl LrclibClient {
    const USER_AGENT: &'static str = "lyric-clip/0.1.0 (https://github.com/lyric-clip)";

    pub fn new(cfg: &LyricsConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(std::time::Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("build lrclib client")?;
        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            max_results: cfg.max_results,
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/search?q={}", self.base_url, urlencoding::encode(query))
    }

    /// Full-text lyrics search
    pub async fn search(&self, query: &str) -> anyhow::Result<Vec<LyricsRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.search_url(query);
        tracing::debug!("lrclib search: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("send lyrics search request")?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            anyhow::bail!("LRCLIB search error: {}", response.status());
        }

        let mut results: Vec<LyricsRecord> =
            response.json().await.context("parse lyrics search json")?;
        results.truncate(self.max_results);
        tracing::info!("lrclib returned {} result(s) for {query:?}", results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(plain: Option<&str>, synced: Option<&str>) -> LyricsRecord {
        serde_json::from_value(json!({
            "id": 7,
            "trackName": "Night Song",
            "artistName": "The Walkers",
            "albumName": null,
            "duration": 201.0,
            "instrumental": false,
            "plainLyrics": plain,
            "syncedLyrics": synced,
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_search_response() {
        let v = json!([
            {
                "id": 1,
                "trackName": "A",
                "artistName": "B",
                "albumName": "C",
                "duration": 180.5,
                "instrumental": false,
                "plainLyrics": "one\ntwo",
                "syncedLyrics": null
            },
            { "id": 2, "trackName": "Tune", "artistName": "Band", "instrumental": true }
        ]);
        let records: Vec<LyricsRecord> = serde_json::from_value(v).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].album_name.as_deref(), Some("C"));
        assert_eq!(records[0].document().texts(), vec!["one", "two"]);
        assert!(records[1].instrumental);
        assert!(records[1].document().is_empty());
    }

    #[test]
    fn test_document_prefers_synced() {
        let r = record(Some("plain one"), Some("[00:05.00]synced one"));
        let doc = r.document();
        assert!(doc.synced);
        assert_eq!(doc.texts(), vec!["synced one"]);
    }

    #[test]
    fn test_document_falls_back_to_plain() {
        let r = record(Some("plain one\nplain two"), Some("  "));
        let doc = r.document();
        assert!(!doc.synced);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_video_query() {
        let r = record(None, None);
        assert_eq!(r.video_query(), "Night Song The Walkers");
        assert_eq!(r.label(), "Night Song - The Walkers");
    }

    #[test]
    fn test_search_url_encodes_query() {
        let cfg = LyricsConfig {
            base_url: "http://localhost:9/api/".into(),
            ..LyricsConfig::default()
        };
        let client = LrclibClient::new(&cfg).unwrap();
        assert_eq!(
            client.search_url("love & rain"),
            "http://localhost:9/api/search?q=love%20%26%20rain"
        );
    }

    #[tokio::test]
    async fn test_blank_query_skips_request() {
        let cfg = LyricsConfig {
            base_url: "http://127.0.0.1:9".into(),
            ..LyricsConfig::default()
        };
        let client = LrclibClient::new(&cfg).unwrap();
        assert!(client.search("   ").await.unwrap().is_empty());
    }
}

use crate::config::YoutubeConfig;
use crate::youtube::models::Video;
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::OnceCell;

#[derive(Debug)]
struct Inner {
    http: reqwest::Client,
    base_url: String,
    max_results: usize,
    bootstrap: OnceCell<Bootstrap>,
}

#[derive(Debug, Clone)]
pub struct YoutubeClient {
    inner: Arc<Inner>,
}

#[derive(Debug, Clone)]
struct Bootstrap {
    api_key: String,
    client_version: String,
    visitor_data: Option<String>,
}

impl YoutubeClient {
    pub fn new(cfg: &YoutubeConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("build reqwest client")?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url: cfg.base_url.trim_end_matches('/').to_string(),
                max_results: cfg.max_results,
                bootstrap: OnceCell::new(),
            }),
        })
    }

    pub async fn search_videos(&self, query: &str) -> anyhow::Result<Vec<Video>> {
        let v = self.search_raw(query).await?;
        let mut videos = extract_videos(&v);
        videos.truncate(self.inner.max_results);
        tracing::info!("youtube returned {} video(s) for {query:?}", videos.len());
        Ok(videos)
    }

    pub async fn search_raw(&self, query: &str) -> anyhow::Result<serde_json::Value> {
        let b = self.bootstrap().await?;

        let body = json!({
            "context": {
                "client": {
                    "clientName": "WEB",
                    "clientVersion": b.client_version,
                    "hl": "en",
                }
            },
            "query": query,
            // Restricts results to videos (no channels/playlists).
            "params": "EgIQAQ%3D%3D"
        });

        tracing::debug!("youtube search: {query:?}");
        let v: serde_json::Value = self
            .innertube_post("search", &b)
            .json(&body)
            .send()
            .await
            .context("send search request")?
            .error_for_status()
            .context("search http status")?
            .json()
            .await
            .context("parse search json")?;
        Ok(v)
    }

    async fn bootstrap(&self) -> anyhow::Result<Bootstrap> {
        self.inner
            .bootstrap
            .get_or_try_init(|| async {
                let html = self
                    .inner
                    .http
                    .get(format!("{}/", self.inner.base_url))
                    .send()
                    .await
                    .context("fetch youtube home page for bootstrap")?
                    .error_for_status()
                    .context("bootstrap http status")?
                    .text()
                    .await
                    .context("read bootstrap html")?;

                let api_key = parse_ytcfg_value(&html, "INNERTUBE_API_KEY")
                    .context("parse INNERTUBE_API_KEY")?;
                let client_version = parse_ytcfg_value(&html, "INNERTUBE_CLIENT_VERSION")
                    .context("parse INNERTUBE_CLIENT_VERSION")?;
                let visitor_data = parse_ytcfg_value(&html, "VISITOR_DATA");
                tracing::debug!("innertube bootstrap ok (client {client_version})");

                Ok(Bootstrap {
                    api_key,
                    client_version,
                    visitor_data,
                })
            })
            .await
            .cloned()
    }

    fn innertube_post(&self, path: &str, b: &Bootstrap) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/youtubei/v1/{path}?key={}&prettyPrint=false",
            self.inner.base_url, b.api_key
        );

        let mut rb = self
            .inner
            .http
            .post(url)
            .header("X-Youtube-Client-Name", "1")
            .header("X-Youtube-Client-Version", b.client_version.as_str());

        if let Some(v) = b.visitor_data.as_deref() {
            rb = rb.header("X-Goog-Visitor-Id", v);
        }

        rb
    }
}

/// Collect `videoRenderer` nodes anywhere in a search response, first occurrence wins
pub fn extract_videos(v: &serde_json::Value) -> Vec<Video> {
    let mut out = Vec::new();
    scan_value(v, &mut |node| {
        let r = node.get("videoRenderer")?;
        let video_id = r.get("videoId").and_then(|x| x.as_str())?.to_string();

        let title = text_of(r.get("title")?).unwrap_or_else(|| "Unknown title".to_string());
        let channel = r
            .get("ownerText")
            .or_else(|| r.get("longBylineText"))
            .and_then(text_of);
        let duration_seconds = r
            .get("lengthText")
            .and_then(text_of)
            .and_then(|t| parse_duration_text(&t));

        Some(Video {
            video_id,
            title,
            channel,
            duration_seconds,
        })
    }, &mut out);

    let mut seen = HashSet::new();
    out.retain(|v| seen.insert(v.video_id.clone()));
    out
}

/// Text of a `{"runs":[{"text":..}]}` or `{"simpleText":..}` node
fn text_of(node: &serde_json::Value) -> Option<String> {
    if let Some(s) = node.get("simpleText").and_then(|x| x.as_str()) {
        return Some(s.to_string());
    }
    let runs = node.get("runs")?.as_array()?;
    let joined: String = runs
        .iter()
        .filter_map(|r| r.get("text").and_then(|t| t.as_str()))
        .collect();
    (!joined.is_empty()).then_some(joined)
}

/// Parse duration text like "3:45" or "1:23:45" into seconds
pub fn parse_duration_text(text: &str) -> Option<u32> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    match parts.len() {
        2 => {
            let mins: u32 = parts[0].parse().ok()?;
            let secs: u32 = parts[1].parse().ok()?;
            mins.checked_mul(60)?.checked_add(secs)
        }
        3 => {
            let hours: u32 = parts[0].parse().ok()?;
            let mins: u32 = parts[1].parse().ok()?;
            let secs: u32 = parts[2].parse().ok()?;
            hours
                .checked_mul(3600)?
                .checked_add(mins.checked_mul(60)?)?
                .checked_add(secs)
        }
        _ => None,
    }
}

fn parse_ytcfg_value(html: &str, key: &str) -> Option<String> {
    // We look for `"KEY":"value"` occurrences in the initial HTML ytcfg payload.
    let needle = format!("{key}\":\"");
    let idx = html.find(&needle)?;
    let start = idx + needle.len();
    let rest = &html[start..];
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}

fn scan_value<F>(v: &serde_json::Value, f: &mut F, out: &mut Vec<Video>)
where
    F: FnMut(&serde_json::Value) -> Option<Video>,
{
    if let Some(t) = f(v) {
        out.push(t);
    }
    match v {
        serde_json::Value::Array(a) => {
            for x in a {
                scan_value(x, f, out);
            }
        }
        serde_json::Value::Object(o) => {
            for (_, x) in o {
                scan_value(x, f, out);
            }
        }
        _ => {}
    }
}

use super::{CursorLookup, PageCursors, SearchBackend};
use crate::types::VideoHit;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quick_xml::escape::{resolve_html5_entity, unescape_with};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Deepest page we are willing to walk to for a single query.
pub const MAX_PAGE: u32 = 20;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchListItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchListItem {
    id: ResourceId,
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    published_at: DateTime<Utc>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl Thumbnails {
    fn best_url(self) -> String {
        self.high
            .or(self.medium)
            .or(self.default)
            .map(|t| t.url)
            .unwrap_or_default()
    }
}

impl SearchListResponse {
    fn into_hits(self) -> Vec<VideoHit> {
        self.items
            .into_iter()
            .filter_map(SearchListItem::into_hit)
            .collect()
    }
}

impl SearchListItem {
    // Channel and playlist results carry no videoId.
    fn into_hit(self) -> Option<VideoHit> {
        let id = self.id.video_id?;
        let snippet = self.snippet?;
        Some(VideoHit {
            id,
            title: unescape_html(&snippet.title),
            channel_title: unescape_html(&snippet.channel_title),
            thumbnail_url: snippet.thumbnails.best_url(),
            published_at: snippet.published_at,
        })
    }
}

/// The search endpoint returns titles HTML-escaped. Text with a malformed
/// or unknown entity is kept as-is.
fn unescape_html(s: &str) -> String {
    match unescape_with(s, resolve_html5_entity) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            debug!("youtube.unescape_html: keeping raw text: {}", e);
            s.to_string()
        }
    }
}

/// YouTube Data API v3 `search.list` backend (production)
pub struct YoutubeSearch {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    page_size: u32,
    cursors: PageCursors,
}

impl YoutubeSearch {
    pub fn new(api_key: &str, base_url: &str, page_size: u32, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size,
            cursors: PageCursors::default(),
        })
    }

    async fn fetch_page(&self, query: &str, token: Option<&str>) -> Result<SearchListResponse> {
        let url = format!("{}/search", self.base_url);
        let max_results = self.page_size.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("type", "video"),
            ("maxResults", max_results.as_str()),
            ("q", query),
            ("key", self.api_key.as_str()),
        ];
        if let Some(token) = token {
            params.push(("pageToken", token));
        }

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .context("YouTube search request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(200).collect();
            anyhow::bail!("YouTube search returned {status}: {excerpt}");
        }

        resp.json()
            .await
            .context("Failed to parse YouTube search response")
    }
}

#[async_trait]
impl SearchBackend for YoutubeSearch {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<VideoHit>> {
        if page > MAX_PAGE {
            debug!("youtube.search: page={} beyond max={}", page, MAX_PAGE);
            return Ok(Vec::new());
        }

        // Bounded: the cache can be cleared under us by other queries.
        for _ in 0..=MAX_PAGE {
            let token = match self.cursors.lookup(query, page) {
                CursorLookup::First => None,
                CursorLookup::Token(token) => Some(token),
                CursorLookup::Ended => {
                    debug!("youtube.search: results ended before page={}", page);
                    return Ok(Vec::new());
                }
                CursorLookup::Missing { frontier, token } => {
                    // Walk forward to learn the token for the requested page.
                    debug!("youtube.search: walking page={} toward page={}", frontier, page);
                    let response = self.fetch_page(query, token.as_deref()).await?;
                    self.cursors
                        .record(query, frontier, response.next_page_token);
                    continue;
                }
            };

            let response = self.fetch_page(query, token.as_deref()).await?;
            self.cursors
                .record(query, page, response.next_page_token.clone());
            let hits = response.into_hits();
            info!("youtube.search: page={} count={}", page, hits.len());
            return Ok(hits);
        }

        anyhow::bail!("could not reach page {page} for this query")
    }
}

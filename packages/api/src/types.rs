use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single video returned by the search service, before any display
/// formatting is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoHit {
    pub id: String,
    pub title: String,
    pub channel_title: String,
    pub thumbnail_url: String,
    pub published_at: DateTime<Utc>,
}

impl VideoHit {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

/// A search hit annotated with its relative upload time, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub video: VideoHit,
    pub time_ago: String,
}

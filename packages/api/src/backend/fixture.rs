use super::SearchBackend;
use crate::types::VideoHit;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration as Age, Utc};
use std::time::Duration;
use tracing::debug;

const CHANNELS: &[&str] = &[
    "Ferris Talks",
    "Borrow Checked",
    "Zero Cost Cooking",
    "The Async Hour",
    "Lifetimes & Co",
];

/// Query that returns nothing, for exercising the empty state locally.
pub const EMPTY_QUERY: &str = "nothing";

/// Deterministic search results (local development and tests)
pub struct FixtureSearch {
    page_size: u32,
    pages: u32,
    latency: Duration,
    anchor: DateTime<Utc>,
}

impl FixtureSearch {
    /// `anchor` is the upload time of the newest hit; older hits step back
    /// from it.
    pub fn new(page_size: u32, pages: u32, latency: Duration, anchor: DateTime<Utc>) -> Self {
        Self {
            page_size: page_size.max(1),
            pages,
            latency,
            anchor,
        }
    }

    /// `None` when the hit's upload time would fall outside chrono's range.
    fn hit(&self, query: &str, n: u32) -> Option<VideoHit> {
        let slug: String = query
            .chars()
            .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        let id = format!("fx-{slug}-{n}");

        let title = if n % 2 == 0 {
            format!("{query} #{n}")
        } else {
            format!("{query} #{n}: the complete walkthrough, every step explained from scratch")
        };

        // Every seventh thumbnail is unreachable so the fallback image shows up.
        let thumbnail_url = if n % 7 == 6 {
            format!("https://thumbnails.invalid/{id}.jpg")
        } else {
            format!("https://picsum.photos/seed/{id}/480/360")
        };

        let n = i64::from(n);
        let published_at = n
            .checked_mul(n + 7)
            .and_then(Age::try_hours)
            .and_then(|age| self.anchor.checked_sub_signed(age))?;

        Some(VideoHit {
            title,
            channel_title: CHANNELS[(n as usize) % CHANNELS.len()].to_string(),
            thumbnail_url,
            published_at,
            id,
        })
    }
}

#[async_trait]
impl SearchBackend for FixtureSearch {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<VideoHit>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if page == 0 || page > self.pages || query.eq_ignore_ascii_case(EMPTY_QUERY) {
            return Ok(Vec::new());
        }

        let hits = (page - 1)
            .checked_mul(self.page_size)
            .and_then(|start| Some(start..start.checked_add(self.page_size)?))
            .and_then(|range| range.map(|n| self.hit(query, n)).collect::<Option<Vec<_>>>());

        match hits {
            Some(hits) => Ok(hits),
            None => {
                debug!("fixture.search: page={} out of range", page);
                Ok(Vec::new())
            }
        }
    }
}

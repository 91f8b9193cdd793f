use anyhow::Result;
use async_trait::async_trait;

use crate::types::VideoHit;

mod cursors;
pub mod fixture;
pub mod youtube;

pub use cursors::{CursorLookup, PageCursors};

/// Trait for search service implementations
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    /// Fetch one page (1-based) of hits for `query`. An empty list means
    /// there is nothing more to show.
    async fn search(&self, query: &str, page: u32) -> Result<Vec<VideoHit>>;
}

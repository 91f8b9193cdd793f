use crate::types::VideoHit;
use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::{debug, info, warn};

/// Fetch one page of hits for `query`. Page 1 starts a search, later pages
/// continue it.
#[dioxus::prelude::post("/api/search")]
pub async fn search_videos(query: String, page: u32) -> Result<Vec<VideoHit>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (query, page);
        Err(ServerFnError::new("search_videos is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let query = query.trim();
        debug!("search.search_videos: query_len={} page={}", query.len(), page);

        if page == 0 {
            return Err(ServerFnError::new("invalid page"));
        }
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let state = crate::state::AppState::try_global()
            .ok_or_else(|| ServerFnError::new("server state not initialized"))?;

        match state.search.search(query, page).await {
            Ok(hits) => {
                info!(
                    "search.search_videos: backend={} page={} count={}",
                    state.search.name(),
                    page,
                    hits.len()
                );
                Ok(hits)
            }
            Err(e) => {
                warn!(
                    "search.search_videos: backend={} page={} failed: {e:#}",
                    state.search.name(),
                    page
                );
                Err(ServerFnError::new(e.to_string()))
            }
        }
    }
}

//! Page bookkeeping for the infinite-scroll result list.
//!
//! `ResultFeed` holds no async machinery. The component asks it for a
//! [`FetchTicket`], runs the fetch, and hands the outcome back through
//! [`ResultFeed::settle`]. Each query change starts a new generation, and
//! tickets from an older generation are dropped on arrival, so a slow
//! response for a previous query can never leak into the current one.

use std::fmt::Display;

use api::types::SearchResult;
use dioxus::logger::tracing::{debug, warn};

use crate::viewport::ViewportProvider;

/// How close to the end of the content (in px) a scroll must get before the
/// next page is requested.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Identifies one fetch: which query, which page, which query session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub query: String,
    pub page: u32,
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ResultFeed {
    query: Option<String>,
    items: Vec<SearchResult>,
    page: u32,
    loading: bool,
    exhausted: bool,
    generation: u64,
}

impl ResultFeed {
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn items(&self) -> &[SearchResult] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Start a new query session at page 1.
    ///
    /// Current items stay visible until the first page settles and replaces
    /// them.
    pub fn reset(&mut self, query: &str) -> FetchTicket {
        self.generation += 1;
        self.query = Some(query.to_string());
        self.page = 1;
        self.loading = true;
        self.exhausted = false;
        self.ticket()
    }

    /// Advance to the next page if the viewport is near the bottom and
    /// nothing is in flight.
    pub fn on_scroll(&mut self, viewport: &impl ViewportProvider) -> Option<FetchTicket> {
        if self.loading || self.exhausted || self.query.is_none() {
            return None;
        }
        if !viewport.metrics().near_bottom(SCROLL_THRESHOLD_PX) {
            return None;
        }

        self.page += 1;
        self.loading = true;
        Some(self.ticket())
    }

    /// True once a page has landed and nothing is pending, which is when the
    /// rendered list should be measured again.
    pub fn can_top_up(&self) -> bool {
        !self.loading && !self.exhausted && !self.items.is_empty()
    }

    /// Request the next page when the rendered list does not reach past the
    /// viewport. Such a list cannot scroll, so no scroll event would ever
    /// ask for more.
    pub fn top_up(&mut self, viewport: &impl ViewportProvider) -> Option<FetchTicket> {
        if !self.can_top_up() {
            return None;
        }
        self.on_scroll(viewport)
    }

    /// Apply the outcome of a fetch. Returns false when the ticket belongs to
    /// an earlier query session and was ignored.
    pub fn settle<E: Display>(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<Vec<SearchResult>, E>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                page = ticket.page,
                stale_generation = ticket.generation,
                generation = self.generation,
                "dropping stale search response"
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(items) if ticket.page <= 1 => {
                self.items = items;
            }
            Ok(items) => {
                if items.is_empty() {
                    self.exhausted = true;
                }
                self.items.extend(items);
            }
            Err(e) => {
                warn!(page = ticket.page, "search fetch failed: {e}");
            }
        }
        true
    }

    fn ticket(&self) -> FetchTicket {
        FetchTicket {
            query: self.query.clone().unwrap_or_default(),
            page: self.page,
            generation: self.generation,
        }
    }
}

//! This crate contains the shared types and fullstack server functions.
use dioxus::prelude::*;

pub mod config;
pub mod time_ago;
pub mod types;

#[cfg(feature = "server")]
pub mod backend;

#[cfg(feature = "server")]
pub mod state;

mod search;


#[cfg(feature = "server")]
pub mod test_utils;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

pub use search::search_videos;

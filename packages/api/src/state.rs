use crate::backend::{fixture::FixtureSearch, youtube::YoutubeSearch, SearchBackend};
use crate::config::{AppConfig, AppMode, SearchConfig};
use anyhow::Result;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// Global application state containing all service implementations
pub struct AppState {
    pub search: Arc<dyn SearchBackend>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("search", &self.search.name())
            .field("mode", &self.config.mode)
            .field("page_size", &self.config.page_size)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create AppState from configuration
    ///
    /// Local mode serves fixture results; production talks to the YouTube
    /// Data API.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }

        let search: Arc<dyn SearchBackend> = match &config.search {
            SearchConfig::YouTube {
                api_key,
                base_url,
                timeout_secs,
            } => {
                tracing::info!("   Search: YouTube Data API ({})", base_url);
                Arc::new(YoutubeSearch::new(
                    api_key,
                    base_url,
                    config.page_size,
                    Duration::from_secs(*timeout_secs),
                )?)
            }
            SearchConfig::Fixture { pages, latency_ms } => {
                tracing::info!(
                    "   Search: fixtures ({} pages, {}ms latency)",
                    pages,
                    latency_ms
                );
                Arc::new(FixtureSearch::new(
                    config.page_size,
                    *pages,
                    Duration::from_millis(*latency_ms),
                    chrono::Utc::now(),
                ))
            }
        };
        tracing::info!("   Page size: {}", config.page_size);

        if config.mode == AppMode::Local {
            tracing::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            tracing::info!("🔧 LOCAL MODE ACTIVE");
            tracing::info!("   No external dependencies required");
            tracing::info!("   Search \"nothing\" to see the empty state");
            tracing::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        }

        Ok(Self { search, config })
    }

    /// Set the global AppState instance
    ///
    /// This should be called once at server startup.
    /// Panics if called more than once.
    pub fn set_global(state: Arc<Self>) {
        STATE
            .set(state)
            .expect("AppState::set_global called more than once");
    }

    /// Get the global AppState instance, preferring a test override on the
    /// current thread.
    pub fn try_global() -> Option<Arc<Self>> {
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return Some(test_state);
        }
        STATE.get().cloned()
    }

    /// Get the global AppState instance
    ///
    /// Panics if called before set_global.
    pub fn global() -> Arc<Self> {
        Self::try_global().expect("AppState::global called before set_global")
    }
}

/// Global state storage using OnceLock for thread-safe initialization
pub(crate) static STATE: OnceLock<Arc<AppState>> = OnceLock::new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}

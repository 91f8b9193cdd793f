use crate::backend::fixture::FixtureSearch;
use crate::backend::SearchBackend;
use crate::config::{AppConfig, AppMode, SearchConfig};
use crate::state::AppState;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;

pub const TEST_PAGE_SIZE: u32 = 5;
pub const TEST_PAGES: u32 = 3;

/// Upload time of the newest fixture hit in tests.
pub fn test_anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Installs an `AppState` for the current thread and removes it on drop.
pub struct TestContext {
    pub state: Arc<AppState>,
}

impl TestContext {
    /// Fixture-backed state with small, predictable pages.
    pub fn new() -> Self {
        let backend = FixtureSearch::new(TEST_PAGE_SIZE, TEST_PAGES, Duration::ZERO, test_anchor());
        Self::with_backend(Arc::new(backend))
    }

    pub fn with_backend(search: Arc<dyn SearchBackend>) -> Self {
        let config = AppConfig {
            mode: AppMode::Local,
            search: SearchConfig::Fixture {
                pages: TEST_PAGES,
                latency_ms: 0,
            },
            page_size: TEST_PAGE_SIZE,
        };

        Self {
            state: Arc::new(AppState { search, config }),
        }
    }

    pub fn set_global(&self) {
        // For tests, set thread-local state instead of global state
        // This allows each test to have its own isolated AppState
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = Some(self.state.clone());
        });
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = None;
        });
    }
}

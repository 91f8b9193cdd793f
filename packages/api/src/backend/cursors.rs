use std::collections::HashMap;
use std::sync::Mutex;

const DEFAULT_CAPACITY: usize = 256;

/// What the cache knows about reaching a given page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorLookup {
    /// Page 1: no token needed.
    First,
    /// Token that fetches the requested page.
    Token(String),
    /// The result set ended before the requested page.
    Ended,
    /// The requested page is beyond what has been walked so far. `frontier`
    /// is the next page that can be fetched, using `token`.
    Missing {
        frontier: u32,
        token: Option<String>,
    },
}

#[derive(Debug, Default)]
struct Cursor {
    /// `tokens[i]` fetches page `i + 2`.
    tokens: Vec<String>,
    ended: bool,
}

impl Cursor {
    fn frontier(&self) -> u32 {
        self.tokens.len() as u32 + 1
    }

    fn token_for(&self, page: u32) -> Option<String> {
        if page <= 1 {
            return None;
        }
        self.tokens.get(page as usize - 2).cloned()
    }
}

/// Page-token cache for APIs that paginate with opaque continuation tokens.
///
/// Keyed by query. The lock is only held for map access, never across a
/// request.
pub struct PageCursors {
    inner: Mutex<HashMap<String, Cursor>>,
    capacity: usize,
}

impl Default for PageCursors {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl PageCursors {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn lookup(&self, query: &str, page: u32) -> CursorLookup {
        if page <= 1 {
            return CursorLookup::First;
        }

        let map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let Some(cursor) = map.get(query) else {
            return CursorLookup::Missing {
                frontier: 1,
                token: None,
            };
        };

        if let Some(token) = cursor.token_for(page) {
            return CursorLookup::Token(token);
        }
        if cursor.ended {
            return CursorLookup::Ended;
        }

        let frontier = cursor.frontier();
        CursorLookup::Missing {
            frontier,
            token: cursor.token_for(frontier),
        }
    }

    /// Record the continuation token returned when `page` was fetched.
    /// `None` marks the end of the result set. Pages behind the frontier
    /// are already known and ignored.
    pub fn record(&self, query: &str, page: u32, next_token: Option<String>) {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());

        if !map.contains_key(query) && map.len() >= self.capacity {
            map.clear();
        }

        let cursor = map.entry(query.to_string()).or_default();
        if cursor.ended || page != cursor.frontier() {
            return;
        }

        match next_token {
            Some(token) if !token.is_empty() => cursor.tokens.push(token),
            _ => cursor.ended = true,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

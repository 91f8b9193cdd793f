#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        match std::env::var("APP_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_PAGE_SIZE: u32 = 12;
/// YouTube caps `maxResults` at 50.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Which search backend serves `search_videos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchConfig {
    YouTube {
        api_key: String,
        base_url: String,
        timeout_secs: u64,
    },
    Fixture {
        pages: u32,
        latency_ms: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub search: SearchConfig,
    pub page_size: u32,
}

#[cfg(feature = "server")]
impl AppConfig {
    /// Build configuration from the process environment.
    ///
    /// Local mode serves fixture results and needs nothing else; production
    /// requires `YOUTUBE_API_KEY`.
    pub fn from_env() -> anyhow::Result<Self> {
        let mode = AppMode::from_env();

        let page_size = env_parse("SEARCH_PAGE_SIZE", DEFAULT_PAGE_SIZE)?.clamp(1, MAX_PAGE_SIZE);

        let search = match mode {
            AppMode::Local => SearchConfig::Fixture {
                pages: env_parse("FIXTURE_PAGES", 5)?,
                latency_ms: env_parse("FIXTURE_LATENCY_MS", 0)?,
            },
            AppMode::Production => {
                let api_key = std::env::var("YOUTUBE_API_KEY")
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .ok_or_else(|| anyhow::anyhow!("YOUTUBE_API_KEY must be set in production"))?;
                SearchConfig::YouTube {
                    api_key,
                    base_url: std::env::var("YOUTUBE_API_BASE_URL")
                        .unwrap_or_else(|_| DEFAULT_YOUTUBE_BASE_URL.to_string()),
                    timeout_secs: env_parse("SEARCH_TIMEOUT_SECS", 10)?,
                }
            }
        };

        Ok(Self {
            mode,
            search,
            page_size,
        })
    }
}

#[cfg(feature = "server")]
fn env_parse<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{key}={raw:?} is not valid: {e}")),
        _ => Ok(default),
    }
}

/// Load `.env` if present. Missing files are fine.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("config: loaded {}", path.display());
    }
}

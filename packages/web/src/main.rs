use dioxus::prelude::*;
use std::env;

use views::{Home, Search};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/search/:query")]
    Search { query: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    #[cfg(feature = "server")]
    init_server_state();

    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(feature = "server")]
fn init_server_state() {
    use std::sync::Arc;

    api::config::load_dotenv();

    let config = match api::config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = match api::state::AppState::from_config(config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            eprintln!("Failed to initialize AppState: {}", e);
            eprintln!("Failed to initialize AppState (debug): {e:?}");
            std::process::exit(1);
        }
    };

    api::state::AppState::set_global(state);
    eprintln!("✓ Server initialization complete");
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let mode = env::var("APP_MODE").unwrap_or_else(|_| "production".to_string());
    let api_key = env::var("YOUTUBE_API_KEY").unwrap_or_else(|_| "<missing>".to_string());

    eprintln!("startup: IP={ip} PORT={port} APP_MODE={mode}");
    eprintln!("startup: YOUTUBE_API_KEY={}", redact_secret(&api_key));

    if !mode.eq_ignore_ascii_case("local") {
        log_missing_envs("search", &["YOUTUBE_API_KEY"]);
    }
}

fn redact_secret(value: &str) -> String {
    if value == "<missing>" {
        return value.to_string();
    }

    let visible: String = value.chars().take(4).collect();
    format!("{visible}*** (len={})", value.len())
}

fn log_missing_envs(group: &str, keys: &[&str]) {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| env::var(key).ok().is_none())
        .collect();
    if missing.is_empty() {
        return;
    }

    eprintln!(
        "startup: WARNING missing {group} envs: {}",
        missing.join(", ")
    );
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::AppTheme {}
        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `SearchBar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    let nav = use_navigator();
    let current_query = match use_route::<Route>() {
        Route::Search { query } => Some(query),
        _ => None,
    };

    rsx! {
        div { class: "app_nav",
            div { class: "app_nav_inner",
                Link { class: "brand", to: Route::Home {},
                    span { class: "brand_mark" }
                    span { class: "brand_name", "Vidscroll" }
                }
                ui::SearchBar {
                    initial: current_query,
                    on_search: move |query: String| {
                        nav.push(Route::Search { query });
                    },
                }
            }
        }
        div { class: "app_container route_view", Outlet::<Route> {} }
    }
}

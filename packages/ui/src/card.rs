use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use api::types::SearchResult;

const FALLBACK_THUMBNAIL: Asset = asset!("/assets/fallback_thumbnail.svg");

/// Titles longer than this many characters are cut and get an ellipsis.
pub const TITLE_LIMIT: usize = 60;

pub fn display_title(title: &str) -> String {
    match title.char_indices().nth(TITLE_LIMIT) {
        Some((cut, _)) => format!("{}...", &title[..cut]),
        None => title.to_string(),
    }
}

/// Image source that swaps to a fallback the first time loading fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailSource {
    primary: String,
    fallback: String,
    failed: bool,
}

impl ThumbnailSource {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            failed: false,
        }
    }

    pub fn current(&self) -> &str {
        if self.failed || self.primary.is_empty() {
            &self.fallback
        } else {
            &self.primary
        }
    }

    /// Record a load error. Returns true only for the first one; a broken
    /// fallback must not trigger another swap.
    pub fn fail(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        true
    }

    pub fn is_fallback(&self) -> bool {
        self.failed || self.primary.is_empty()
    }
}

#[component]
pub fn ResultCard(result: SearchResult) -> Element {
    let primary = result.video.thumbnail_url.clone();
    let mut thumbnail =
        use_signal(move || ThumbnailSource::new(primary, FALLBACK_THUMBNAIL.to_string()));

    let src = thumbnail.read().current().to_string();
    let title = display_title(&result.video.title);
    let href = result.video.watch_url();
    let video_id = result.video.id.clone();

    rsx! {
        a {
            class: "result_card",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            img {
                class: "result_thumb",
                src: "{src}",
                alt: "Video thumbnail",
                onerror: move |_| {
                    if thumbnail.with_mut(|t| t.fail()) {
                        debug!(video_id = %video_id, "thumbnail failed, using fallback");
                    }
                },
            }
            div { class: "result_body",
                h3 { class: "result_title", title: "{result.video.title}", "{title}" }
                p { class: "result_channel", "{result.video.channel_title}" }
                p { class: "result_age", "{result.time_ago}" }
            }
        }
    }
}

use chrono::Utc;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use std::rc::Rc;

use crate::card::ResultCard;
use crate::pagination::{FetchTicket, ResultFeed, SCROLL_THRESHOLD_PX};
use crate::viewport;

const SEARCH_RESULTS_CSS: Asset = asset!("/assets/styling/search_results.css");

pub const NO_DATA_MESSAGE: &str = "No data available.";

/// Whether the no-data message applies: nothing to show and nothing coming.
fn shows_no_data(feed: &ResultFeed) -> bool {
    feed.query().is_some() && feed.items().is_empty() && !feed.is_loading()
}

/// What to show under the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Footer {
    Nothing,
    Loading,
    End,
}

fn footer(feed: &ResultFeed) -> Footer {
    if feed.is_loading() {
        Footer::Loading
    } else if feed.is_exhausted() && !feed.items().is_empty() {
        Footer::End
    } else {
        Footer::Nothing
    }
}

/// Infinite-scroll list of search results for `query`.
///
/// The list is its own scroll container; scrolling within 20px of its end
/// loads the next page. A list too short to scroll keeps loading pages until
/// it fills the container or the results run out.
#[component]
pub fn SearchResults(query: String) -> Element {
    let mut feed = use_signal(ResultFeed::default);
    let mut container = use_signal(|| None::<Rc<MountedData>>);

    use_effect(use_reactive((&query,), move |(query,)| {
        let ticket = feed.with_mut(|f| f.reset(&query));
        debug!(generation = ticket.generation, "search query changed");
        fetch_page(feed, ticket);
    }));

    // Runs after each render that changed the feed, so the new cards are
    // already laid out when the container is measured.
    use_effect(move || {
        let ready = feed.read().can_top_up();
        let Some(element) = container() else {
            return;
        };
        if !ready {
            return;
        }
        spawn(async move {
            let Some(metrics) = viewport::measure(&element).await else {
                return;
            };
            // Only touch the signal when a fetch is due; writing would re-run
            // this effect.
            if !metrics.near_bottom(SCROLL_THRESHOLD_PX) {
                return;
            }
            if let Some(ticket) = feed.with_mut(|f| f.top_up(&metrics)) {
                debug!(page = ticket.page, "list shorter than its container");
                fetch_page(feed, ticket);
            }
        });
    });

    let on_scroll = move |evt: ScrollEvent| {
        let data = evt.data();
        if let Some(ticket) = feed.with_mut(|f| f.on_scroll(&*data)) {
            debug!(page = ticket.page, "scrolled near bottom");
            fetch_page(feed, ticket);
        }
    };

    let (items, no_data, tail) = {
        let f = feed.read();
        (f.items().to_vec(), shows_no_data(&f), footer(&f))
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SEARCH_RESULTS_CSS }

        div {
            class: "search_results",
            onscroll: on_scroll,
            onmounted: move |evt: MountedEvent| container.set(Some(evt.data())),
            if no_data {
                p { class: "no_data", {NO_DATA_MESSAGE} }
            } else if !items.is_empty() {
                div { class: "result_grid",
                    for (idx, result) in items.into_iter().enumerate() {
                        ResultCard {
                            key: "{idx}-{result.video.id}",
                            result: result,
                        }
                    }
                }
            }

            match tail {
                Footer::Loading => rsx! { p { class: "hint", "Loading…" } },
                Footer::End => rsx! { p { class: "hint", "End of results." } },
                Footer::Nothing => rsx! {},
            }
        }
    }
}

fn fetch_page(mut feed: Signal<ResultFeed>, ticket: FetchTicket) {
    spawn(async move {
        let outcome = api::search_videos(ticket.query.clone(), ticket.page)
            .await
            .map(|hits| api::time_ago::annotate(hits, Utc::now()));
        feed.with_mut(|f| f.settle(&ticket, outcome));
    });
}

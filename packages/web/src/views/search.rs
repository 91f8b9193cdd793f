use dioxus::prelude::*;

#[component]
pub fn Search(query: String) -> Element {
    rsx! {
        div { class: "panel",
            h2 { class: "search_heading", "Results for “{query}”" }
        }
        ui::SearchResults { query: query.clone() }
    }
}

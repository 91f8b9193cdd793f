use dioxus::prelude::*;

/// Trimmed query, or `None` when there is nothing to search for.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn SearchBar(initial: Option<String>, on_search: EventHandler<String>) -> Element {
    let mut text = use_signal(move || initial.unwrap_or_default());

    rsx! {
        form {
            class: "search_bar",
            role: "search",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if let Some(query) = normalize_query(&text()) {
                    on_search.call(query);
                }
            },
            input {
                r#type: "search",
                name: "q",
                placeholder: "Search videos",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
            }
            button { class: "btn primary", r#type: "submit", "Search" }
        }
    }
}

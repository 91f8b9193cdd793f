use dioxus::prelude::*;
use ui::Hero;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        Hero {
            ui::SearchBar {
                initial: None,
                on_search: move |query: String| {
                    nav.push(Route::Search { query });
                },
            }
        }
    }
}

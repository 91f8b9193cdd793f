use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        div {
            id: "hero",
            div { id: "links",
                h1 { "Vidscroll" }
                p { "Search videos and keep scrolling. More results load as you reach the bottom." }
                {children}
                p { class: "hint", "Tip: results open on YouTube in a new tab." }
            }
        }
    }
}

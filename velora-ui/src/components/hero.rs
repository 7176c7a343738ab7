//! Empty dashboard with one-click region questions.

use crate::state::AppState;
use dioxus::prelude::*;
use velora_chat::suggestions::quick_region_query;
use velora_ocean::region::REGIONS;

#[component]
pub fn Hero() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            class: "hero-empty",
            div { class: "hero-icon", "🌐" }
            h2 { class: "hero-title", "Select a Region to Explore" }
            p {
                class: "hero-desc",
                "Type a natural language question in the chat panel. Velora will parse your intent and visualize the ARGO float data instantly."
            }
            div {
                class: "quick-pills",
                for (region, emoji) in REGIONS.iter() {
                    button {
                        key: "{region}",
                        class: "quick-pill",
                        onclick: move |_| state.send_query(quick_region_query(region)),
                        "{emoji} {region}"
                    }
                }
            }
        }
    }
}

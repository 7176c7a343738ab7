//! Loading placeholder shown while a query is in flight.

use dioxus::prelude::*;

#[component]
pub fn LoadingCard() -> Element {
    rsx! {
        div {
            class: "glass loading-card",
            div {
                class: "loading-state",
                div { class: "spinner" }
                "Analyzing query & fetching ocean data…"
            }
        }
    }
}

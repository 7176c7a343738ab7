//! Header status dot for backend reachability.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn StatusBadge() -> Element {
    let state = use_context::<AppState>();
    let status = (state.connection)();
    let dot_class = if status.is_connected() {
        "status-dot connected"
    } else {
        "status-dot"
    };

    rsx! {
        div {
            class: "header-status",
            div { class: "{dot_class}" }
            "{status.label()}"
        }
    }
}

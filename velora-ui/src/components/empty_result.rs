//! Notice for an answer that matched no records.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyResultProps {
    /// Backend notice, if it sent one
    #[props(default)]
    pub message: Option<String>,
}

/// Shown in place of the chart and table when an answer has no rows.
#[component]
pub fn EmptyResult(props: EmptyResultProps) -> Element {
    let hint = props
        .message
        .clone()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "Try adjusting your region or year range.".to_string());

    rsx! {
        div {
            class: "glass",
            style: "padding: 40px; text-align: center;",
            div { style: "font-size: 2.5rem; margin-bottom: 12px;", "🔍" }
            div { style: "color: var(--text-secondary); font-weight: 600;", "No data found" }
            div {
                style: "color: var(--text-muted); font-size: 0.85rem; margin-top: 6px;",
                "{hint}"
            }
        }
    }
}

//! Narrative insight with its source badge.

use dioxus::prelude::*;
use velora_data::presentation::insight_badge;
use velora_ocean::Insight;

#[derive(Props, Clone, PartialEq)]
pub struct InsightCardProps {
    pub insight: Insight,
}

#[component]
pub fn InsightCard(props: InsightCardProps) -> Element {
    let insight = &props.insight;
    let source = String::from(insight.source);
    let badge = insight_badge(Some(insight.source));

    rsx! {
        div {
            class: "glass insight-card",
            div {
                class: "insight-header",
                div { class: "insight-title", "🧠 AI Insight" }
                span { class: "ai-badge {source}", "{badge}" }
            }
            p { class: "insight-text", "{insight.text}" }
        }
    }
}

//! Min / max / mean / record cards plus the trend card.

use dioxus::prelude::*;
use std::rc::Rc;
use velora_data::presentation::{stat_cards, trend_card};
use velora_ocean::AnalysisResult;

#[derive(Props, Clone, PartialEq)]
pub struct StatsRowProps {
    pub result: Rc<AnalysisResult>,
}

#[component]
pub fn StatsRow(props: StatsRowProps) -> Element {
    let cards = stat_cards(&props.result);
    let trend = trend_card(&props.result);
    let direction = props
        .result
        .trend
        .as_ref()
        .map(|t| t.direction.to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "stats-row",
            for card in cards.iter() {
                div {
                    key: "{card.label}",
                    class: "glass stat-card",
                    div { class: "stat-value", "{card.value}" }
                    div { class: "stat-label", "{card.label}" }
                }
            }
            if let Some((value, label)) = trend {
                div {
                    class: "glass stat-card trend-card {direction}",
                    div { class: "stat-value", "{value}" }
                    div { class: "stat-label", "{label}" }
                }
            }
        }
    }
}

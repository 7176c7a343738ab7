//! Marine risk index card.

use dioxus::prelude::*;
use velora_data::presentation::{risk_class, risk_factor_chips, risk_score_label};
use velora_ocean::Risk;

#[derive(Props, Clone, PartialEq)]
pub struct RiskCardProps {
    pub risk: Risk,
}

#[component]
pub fn RiskCard(props: RiskCardProps) -> Element {
    let risk = &props.risk;
    let class = risk_class(Some(risk));
    let chips = risk_factor_chips(&risk.factors);
    let score = risk_score_label(risk);

    rsx! {
        div {
            class: "glass risk-card {class}",
            div {
                class: "risk-header",
                div { class: "risk-title", "🌡 Marine Risk Index" }
                div { class: "risk-level {class}", "{risk.level}" }
            }
            div { class: "risk-score", "{score}" }
            div {
                class: "risk-factors",
                for chip in chips.iter() {
                    span {
                        key: "{chip.label}",
                        class: if chip.active { "risk-factor active" } else { "risk-factor" },
                        "{chip.label}"
                    }
                }
            }
        }
    }
}

//! Forecast chart card: title, subtitle and the D3 container.

use dioxus::prelude::*;
use std::rc::Rc;
use velora_data::presentation::{chart_subtitle, parameter_title};
use velora_ocean::region::region_emoji;
use velora_ocean::AnalysisResult;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    pub result: Rc<AnalysisResult>,
    /// Minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
}

#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    let result = &props.result;
    let emoji = region_emoji(&result.region).unwrap_or_default();
    let title = parameter_title(&result.parameter);
    let subtitle = chart_subtitle(result);
    let style = format!(
        "width: 100%; height: {0}px; min-height: {0}px; display: flex;",
        props.min_height
    );

    rsx! {
        div {
            class: "glass chart-card",
            div {
                class: "chart-header",
                div {
                    div { class: "chart-title", "{emoji} {result.region} — {title}" }
                    div { class: "chart-subtitle", "{subtitle}" }
                }
                div { class: "chart-badge", "ARGO Floats" }
            }
            div {
                class: "chart-wrapper",
                style: "{style}",
                div {
                    id: "{props.id}",
                    style: "width: 100%;",
                }
            }
        }
    }
}

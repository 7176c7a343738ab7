//! "Parsed as" chips: region, parameter and, when read, the year span.

use dioxus::prelude::*;
use std::rc::Rc;
use velora_data::presentation::parsed_span;
use velora_ocean::region::region_emoji;
use velora_ocean::AnalysisResult;

#[derive(Props, Clone, PartialEq)]
pub struct ParsedBadgeProps {
    pub result: Rc<AnalysisResult>,
}

#[component]
pub fn ParsedBadge(props: ParsedBadgeProps) -> Element {
    let result = &props.result;
    let parsed = result.parsed.clone().unwrap_or_default();
    let region = parsed.region.clone().unwrap_or_else(|| result.region.clone());
    let emoji = region_emoji(&region).unwrap_or_default();
    let parameter = parsed
        .parameter
        .clone()
        .unwrap_or_else(|| result.parameter.clone());
    let span = parsed_span(result.parsed.as_ref());

    rsx! {
        div {
            class: "parsed-badge glass",
            span { class: "parsed-label", "Parsed as" }
            span { class: "parsed-chip", "{emoji} {region}" }
            span { class: "parsed-chip", "{parameter}" }
            if let Some(span) = span {
                span { class: "parsed-chip", "{span}" }
            }
        }
    }
}

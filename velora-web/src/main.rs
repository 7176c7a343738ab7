//! Velora AI ocean intelligence dashboard
//!
//! Data flow:
//! 1. On mount: probe the backend once and load the D3 chart scripts.
//! 2. A question from the chat panel (or a quick-region pill) goes through
//!    the dispatcher: cache first, then `POST /query` in a spawned task.
//! 3. Whenever the conversation holds an answer, the historical and forecast
//!    series are merged and re-rendered via D3.js.

use dioxus::prelude::*;
use velora_cache::DEFAULT_CAPACITY;
use velora_data::timeline::chart_points;
use velora_ocean::ApiConfig;
use velora_ui::components::{
    ChartCard, ChatPanel, DataTable, EmptyResult, Hero, InsightCard, LoadingCard, ParsedBadge,
    RiskCard, StatsRow, StatusBadge,
};
use velora_ui::js_bridge;
use velora_ui::state::AppState;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "forecast-chart";

const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";
const STYLE: &str = include_str!("../assets/velora.css");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("velora-root"))
        .launch(App);
}

/// Backend address for the page: a build-time override, else derived from
/// the hostname the page was served from.
fn api_config() -> ApiConfig {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok());
    let config = ApiConfig::resolve(option_env!("VELORA_API_URL"), hostname.as_deref());
    log::info!("Using analysis backend at {}", config.base_url());
    config
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(api_config(), DEFAULT_CAPACITY));

    // ─── Effect 1: liveness probe and chart scripts, once on mount ───
    use_effect(move || {
        state.check_connection();
        js_bridge::init_charts();
    });

    // ─── Effect 2: re-render the chart whenever the answer changes ───
    use_effect(move || {
        let result = state.dispatcher.read().conversation().current_result().cloned();
        match result {
            Some(result) if !result.is_empty() => {
                let points = chart_points(&result);
                let config = js_bridge::chart_config(&result);
                js_bridge::render_forecast_chart(CHART_CONTAINER_ID, &points, &config);
            }
            _ => js_bridge::destroy_chart(CHART_CONTAINER_ID),
        }
    });

    rsx! {
        document::Script { src: D3_SRC }
        document::Style { {STYLE} }

        div {
            class: "app",
            header {
                class: "header",
                div {
                    class: "brand",
                    span { class: "brand-icon", "🌊" }
                    span { class: "brand-name", "Velora AI" }
                    span { class: "brand-tag", "Ocean Intelligence" }
                }
                StatusBadge {}
            }

            main {
                class: "layout",
                ChatPanel {}
                Dashboard {}
            }

            footer {
                class: "footer",
                "Velora AI · ARGO float data · Forecasts are linear projections, not guarantees."
            }
        }
    }
}

/// Right-hand panel: loading card, the current answer, or the region picker.
#[component]
fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let loading = state.is_loading();
    let result = state.dispatcher.read().conversation().current_result().cloned();

    rsx! {
        section {
            class: "dashboard",
            if loading {
                LoadingCard {}
            } else if let Some(result) = result {
                ParsedBadge { result: result.clone() }
                StatsRow { result: result.clone() }
                if result.is_empty() {
                    EmptyResult { message: result.message.clone() }
                } else {
                    if let Some(risk) = result.risk.clone() {
                        RiskCard { risk }
                    }
                    ChartCard {
                        id: CHART_CONTAINER_ID.to_string(),
                        result: result.clone(),
                    }
                    if let Some(insight) = result.insight.clone() {
                        InsightCard { insight }
                    }
                    DataTable { result: result.clone() }
                }
            } else {
                Hero {}
            }
        }
    }
}

//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js forecast chart lives in `assets/js/*.js`. The scripts are
//! evaluated as globals (no ES modules) and exposed via `window.*`. This
//! module serializes chart rows and config and calls those globals.

use serde_json::json;
use velora_data::presentation::{parameter_title, unit_suffix};
use velora_data::timeline::ChartPoint;
use velora_ocean::AnalysisResult;

// Embed the chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static FORECAST_CHART_JS: &str = include_str!("../assets/js/forecast-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Velora JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` and evaluated at global scope via an
/// indirect `eval()` once D3 is ready, then each entry point is promoted to
/// `window.*` explicitly. Safe to call more than once.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, FORECAST_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__veloraChartsReady) {{ window.__veloraChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__veloraChartsReady || window.__veloraChartsPolling) return;
            window.__veloraChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__veloraChartScripts);
                    delete window.__veloraChartScripts;
                    if (typeof renderForecastChart !== 'undefined') window.renderForecastChart = renderForecastChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__veloraChartsReady = true;
                    console.log('Velora charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Chart config for an answer: labels, unit and the mean reference line.
///
/// Gaps need no setting: the chart script breaks a series at every null.
pub fn chart_config(result: &AnalysisResult) -> String {
    json!({
        "title": parameter_title(&result.parameter),
        "unit": unit_suffix(&result.parameter),
        "mean": result.stats.mean,
        "historicalLabel": "Historical",
        "forecastLabel": "Forecast",
        "historicalColor": "#00C2A8",
        "forecastColor": "#a78bfa",
        "showForecast": result.has_forecast(),
    })
    .to_string()
}

/// Render the merged historical + forecast series.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to initialize,
/// and the container DOM element to exist before rendering.
pub fn render_forecast_chart(container_id: &str, points: &[ChartPoint], config_json: &str) {
    let data_json = serde_json::to_string(points).unwrap_or_else(|_| "[]".to_string());
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__veloraChartsReady &&
                    typeof window.renderForecastChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderForecastChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[Velora] renderForecastChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

//! Lookup functions from answer fields to display labels and style keys.
//!
//! All functions are total: absent or unrecognised inputs map to a default.

use velora_ocean::analysis::RISK_SCORE_MAX;
use velora_ocean::{
    AnalysisResult, InsightSource, Parameter, ParsedQuery, Risk, RiskFactors, TrendDirection,
};

/// Style class used when an answer has no risk key.
pub const DEFAULT_RISK_CLASS: &str = "risk-low";

/// Arrow for a trend direction. Anything but rising/falling is flat.
pub fn trend_icon(direction: Option<&TrendDirection>) -> &'static str {
    match direction {
        Some(TrendDirection::Rising) => "↑",
        Some(TrendDirection::Falling) => "↓",
        _ => "→",
    }
}

/// Unit suffix for a parameter. Anything but temperature is salinity.
pub fn unit_suffix(parameter: &Parameter) -> &'static str {
    if parameter.is_temperature() {
        "°C"
    } else {
        "PSU"
    }
}

/// Chart title for a parameter.
pub fn parameter_title(parameter: &Parameter) -> &'static str {
    if parameter.is_temperature() {
        "Temperature (°C)"
    } else {
        "Salinity (PSU)"
    }
}

/// Short insight attribution used inside chat messages.
pub fn insight_source_label(source: Option<InsightSource>) -> &'static str {
    match source {
        Some(InsightSource::Llm) => "🤖 LLaMA-3",
        _ => "📋 Template",
    }
}

/// Insight badge shown on the dashboard insight card.
pub fn insight_badge(source: Option<InsightSource>) -> &'static str {
    match source {
        Some(InsightSource::Llm) => "⚡ LLaMA-3 70B",
        _ => "📋 Template",
    }
}

/// Style class for the risk card: `risk-<level_key>`, or [`DEFAULT_RISK_CLASS`].
pub fn risk_class(risk: Option<&Risk>) -> String {
    match risk.and_then(|r| r.level_key.as_deref()) {
        Some(key) if !key.is_empty() => format!("risk-{}", key),
        _ => DEFAULT_RISK_CLASS.to_string(),
    }
}

/// Risk score as shown next to its maximum, e.g. `"3 / 7"`.
pub fn risk_score_label(risk: &Risk) -> String {
    format!("{} / {}", risk.score, RISK_SCORE_MAX)
}

/// One toggle chip on the risk card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskFactorChip {
    pub label: &'static str,
    pub active: bool,
}

/// The three risk factor chips, in display order.
pub fn risk_factor_chips(factors: &RiskFactors) -> [RiskFactorChip; 3] {
    [
        RiskFactorChip {
            label: "Temp anomaly +2",
            active: factors.temperature_anomaly,
        },
        RiskFactorChip {
            label: "Rapid warming +3",
            active: factors.rapid_warming,
        },
        RiskFactorChip {
            label: "Salinity imbalance +2",
            active: factors.salinity_imbalance,
        },
    ]
}

/// A labelled figure in the stats row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

/// A statistic with its unit, or `?` when no records were measured.
pub fn measured(value: f64, count: u64, unit: &str) -> String {
    if count == 0 {
        "?".to_string()
    } else {
        format!("{}{}", value, unit)
    }
}

/// Min, max, mean (with unit) and record count.
pub fn stat_cards(result: &AnalysisResult) -> Vec<StatCard> {
    let unit = unit_suffix(&result.parameter);
    let stats = &result.stats;
    vec![
        StatCard {
            label: "Min",
            value: measured(stats.min, stats.count, unit),
        },
        StatCard {
            label: "Max",
            value: measured(stats.max, stats.count, unit),
        },
        StatCard {
            label: "Mean",
            value: measured(stats.mean, stats.count, unit),
        },
        StatCard {
            label: "Records",
            value: stats.count.to_string(),
        },
    ]
}

/// Trend card figures: `("↑ 0.0312", "°C/yr · rising")`.
pub fn trend_card(result: &AnalysisResult) -> Option<(String, String)> {
    let trend = result.trend.as_ref()?;
    let value = format!(
        "{} {}",
        trend_icon(Some(&trend.direction)),
        trend.per_year.abs()
    );
    let label = format!(
        "{}/yr · {}",
        unit_suffix(&result.parameter),
        trend.direction
    );
    Some((value, label))
}

/// Year span such as `2020–2022`; unknown ends render as `?`.
pub fn year_span(start: Option<i32>, end: Option<i32>) -> String {
    let show = |year: Option<i32>| year.map_or_else(|| "?".to_string(), |y| y.to_string());
    format!("{}–{}", show(start), show(end))
}

/// Year chip of the "Parsed as" badge: `2020 – 2022`.
///
/// `None` when the backend read no start year from the question.
pub fn parsed_span(parsed: Option<&ParsedQuery>) -> Option<String> {
    let parsed = parsed?;
    let start = parsed.start_year?;
    let end = parsed.end_year.map_or_else(|| "?".to_string(), |y| y.to_string());
    Some(format!("{} – {}", start, end))
}

/// Group digits in threes: `1250` → `"1,250"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Chart subtitle: span, measurement count and forecast length.
pub fn chart_subtitle(result: &AnalysisResult) -> String {
    let mut subtitle = format!(
        "{} · {} measurements",
        year_span(result.start_year, result.end_year),
        group_thousands(result.stats.count)
    );
    if result.has_forecast() {
        subtitle.push_str(&format!(" + {}yr forecast", result.prediction.len()));
    }
    subtitle
}

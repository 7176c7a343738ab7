//! The one-line chat summary of an answer.

use velora_data::presentation::{
    insight_source_label, measured, trend_icon, unit_suffix, year_span,
};
use velora_ocean::{AnalysisResult, TrendDirection};

/// Suffix appended when the answer came from the query cache.
pub const CACHED_SUFFIX: &str = " (cached)";

/// Format an answer as an AI chat message.
///
/// Cache hits and fresh answers share this formatter; they differ only by
/// [`CACHED_SUFFIX`]. An answer without a trend reads as a flat `0` trend;
/// one without records shows its mean as `?`.
pub fn format_summary(result: &AnalysisResult, cached: bool) -> String {
    let unit = unit_suffix(&result.parameter);
    let stable = TrendDirection::Stable;
    let (direction, per_year) = match &result.trend {
        Some(trend) => (&trend.direction, trend.per_year),
        None => (&stable, 0.0),
    };
    let source = result.insight.as_ref().map(|insight| insight.source);

    let mut text = format!(
        "Analysed {} ({}) — {} · Mean: {} · Trend: {} {}{}/yr {} · Insight via {}",
        result.region,
        year_span(result.start_year, result.end_year),
        result.parameter,
        measured(result.stats.mean, result.stats.count, unit),
        trend_icon(Some(direction)),
        per_year.abs(),
        unit,
        direction,
        insight_source_label(source),
    );
    if cached {
        text.push_str(CACHED_SUFFIX);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(body: &str) -> AnalysisResult {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_temperature_summary() {
        let result = answer(
            r#"{"region": "Indian Ocean", "parameter": "temperature", "start_year": 2020, "end_year": 2022,
                "stats": {"min": 1, "max": 2, "mean": 14.35, "count": 10},
                "trend": {"direction": "rising", "per_year": 0.0312},
                "insight": {"source": "llm", "text": "..."}}"#,
        );
        assert_eq!(
            format_summary(&result, false),
            "Analysed Indian Ocean (2020–2022) — temperature · Mean: 14.35°C · Trend: ↑ 0.0312°C/yr rising · Insight via 🤖 LLaMA-3"
        );
    }

    #[test]
    fn test_salinity_falling_cached() {
        let result = answer(
            r#"{"region": "Pacific Ocean", "parameter": "salinity", "start_year": 2021, "end_year": 2021,
                "stats": {"mean": 34.9, "count": 40},
                "trend": {"direction": "falling", "per_year": -0.02},
                "insight": {"source": "template", "text": "..."}}"#,
        );
        assert_eq!(
            format_summary(&result, true),
            "Analysed Pacific Ocean (2021–2021) — salinity · Mean: 34.9PSU · Trend: ↓ 0.02PSU/yr falling · Insight via 📋 Template (cached)"
        );
    }

    #[test]
    fn test_cached_differs_only_by_suffix() {
        let result = answer(r#"{"region": "Arctic Ocean", "parameter": "temperature"}"#);
        let fresh = format_summary(&result, false);
        let cached = format_summary(&result, true);
        assert_eq!(cached, format!("{}{}", fresh, CACHED_SUFFIX));
    }

    #[test]
    fn test_missing_trend_reads_flat() {
        let result = answer(
            r#"{"region": "Arctic Ocean", "parameter": "temperature", "stats": {"mean": -1.5, "count": 3}}"#,
        );
        assert_eq!(
            format_summary(&result, false),
            "Analysed Arctic Ocean (?–?) — temperature · Mean: -1.5°C · Trend: → 0°C/yr stable · Insight via 📋 Template"
        );
    }

    #[test]
    fn test_empty_answer_has_unknown_mean() {
        let result = answer(
            r#"{"region": "Arctic Ocean", "parameter": "salinity", "stats": {},
                "message": "No data found for region: Arctic Ocean"}"#,
        );
        assert_eq!(
            format_summary(&result, false),
            "Analysed Arctic Ocean (?–?) — salinity · Mean: ? · Trend: → 0PSU/yr stable · Insight via 📋 Template"
        );
    }
}

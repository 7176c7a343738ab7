//! The answer to one natural-language ocean query.
//!
//! Several groups (`trend`, `risk`, `insight`, `parsed`) are optional on the
//! wire and are modelled as `Option`s. Sequences that the backend may omit or
//! send as `null` decode to empty vectors.

use crate::parameter::Parameter;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Highest possible marine risk score.
pub const RISK_SCORE_MAX: u32 = 7;

/// Score added by each risk factor when active.
pub const TEMPERATURE_ANOMALY_WEIGHT: u32 = 2;
pub const RAPID_WARMING_WEIGHT: u32 = 3;
pub const SALINITY_IMBALANCE_WEIGHT: u32 = 2;

/// A successful analysis answer.
///
/// This type has no `error` field: rejections decode to
/// [`crate::reply::Rejection`] instead, so an `AnalysisResult` is always a
/// valid answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub region: String,
    pub parameter: Parameter,
    /// First year with data. Absent on empty answers.
    #[serde(default)]
    pub start_year: Option<i32>,
    /// Last year with data. Absent on empty answers.
    #[serde(default)]
    pub end_year: Option<i32>,
    /// Historical yearly means, in year order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub yearly_data: Vec<YearValue>,
    /// Forecast yearly values following the historical series.
    #[serde(default, deserialize_with = "null_as_default")]
    pub prediction: Vec<YearValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Stats,
    #[serde(default)]
    pub trend: Option<Trend>,
    #[serde(default)]
    pub risk: Option<Risk>,
    #[serde(default)]
    pub insight: Option<Insight>,
    /// Display sample of raw records; may be shorter than `stats.count`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<RawRecord>,
    /// What the backend understood from the question text.
    #[serde(default)]
    pub parsed: Option<ParsedQuery>,
    /// Echo of the question as received by the backend.
    #[serde(default)]
    pub question: Option<String>,
    /// Notice attached to an answer without data (e.g. no records in range).
    #[serde(default)]
    pub message: Option<String>,
}

impl AnalysisResult {
    /// True when the answer carries no sample rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_forecast(&self) -> bool {
        !self.prediction.is_empty()
    }
}

/// One `(year, value)` point of the historical or forecast series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

impl YearValue {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Summary statistics over all matching records.
///
/// An empty answer sends `{}`; every field then defaults to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
    #[serde(default)]
    pub mean: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    /// Ground-truth record total.
    #[serde(default)]
    pub count: u64,
}

/// Linear trend over the selected years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    #[serde(default)]
    pub direction: TrendDirection,
    #[serde(default)]
    pub per_year: f64,
}

/// Trend direction as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrendDirection {
    Rising,
    Falling,
    #[default]
    Stable,
    Other(String),
}

impl TrendDirection {
    pub fn as_str(&self) -> &str {
        match self {
            TrendDirection::Rising => "rising",
            TrendDirection::Falling => "falling",
            TrendDirection::Stable => "stable",
            TrendDirection::Other(name) => name.as_str(),
        }
    }
}

impl From<String> for TrendDirection {
    fn from(value: String) -> Self {
        match value.as_str() {
            "rising" => TrendDirection::Rising,
            "falling" => TrendDirection::Falling,
            "stable" => TrendDirection::Stable,
            _ => TrendDirection::Other(value),
        }
    }
}

impl From<TrendDirection> for String {
    fn from(value: TrendDirection) -> Self {
        match value {
            TrendDirection::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marine risk index for the answered region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    /// Human-readable level, e.g. "Moderate".
    #[serde(default)]
    pub level: String,
    /// Machine key used for styling, e.g. "moderate".
    #[serde(default)]
    pub level_key: Option<String>,
    /// Score out of [`RISK_SCORE_MAX`].
    #[serde(default)]
    pub score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub factors: RiskFactors,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactors {
    #[serde(default)]
    pub temperature_anomaly: bool,
    #[serde(default)]
    pub rapid_warming: bool,
    #[serde(default)]
    pub salinity_imbalance: bool,
}

impl RiskFactors {
    /// Sum of the weights of the active factors.
    pub fn weighted_score(&self) -> u32 {
        let mut score = 0;
        if self.temperature_anomaly {
            score += TEMPERATURE_ANOMALY_WEIGHT;
        }
        if self.rapid_warming {
            score += RAPID_WARMING_WEIGHT;
        }
        if self.salinity_imbalance {
            score += SALINITY_IMBALANCE_WEIGHT;
        }
        score
    }
}

/// Narrative insight produced for the answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(default)]
    pub source: InsightSource,
    #[serde(default)]
    pub text: String,
}

/// Where an insight came from. Anything other than `"llm"` is a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InsightSource {
    Llm,
    #[default]
    Template,
}

impl From<String> for InsightSource {
    fn from(value: String) -> Self {
        if value == "llm" {
            InsightSource::Llm
        } else {
            InsightSource::Template
        }
    }
}

impl From<InsightSource> for String {
    fn from(value: InsightSource) -> Self {
        match value {
            InsightSource::Llm => "llm".to_string(),
            InsightSource::Template => "template".to_string(),
        }
    }
}

/// A raw float measurement row from the answer's display sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Observation date as sent; see [`RawRecord::observed_on`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub salinity: Option<f64>,
}

impl RawRecord {
    /// Calendar date of the observation.
    ///
    /// Accepts `YYYY-MM-DD` and ISO timestamps (`2020-01-15T00:00:00`,
    /// `2020-01-15 00:00:00`). Anything else is `None`.
    pub fn observed_on(&self) -> Option<NaiveDate> {
        let date = self.date.trim();
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .or_else(|_| {
                NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
            })
            .or_else(|_| {
                NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date())
            })
            .ok()
    }
}

/// The backend's reading of the question text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub parameter: Option<Parameter>,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_ANSWER: &str = r#"{
        "region": "Indian Ocean",
        "parameter": "temperature",
        "question": "Show temperature trend in Indian Ocean from 2020 to 2022",
        "parsed": {"region": "Indian Ocean", "parameter": "temperature", "start_year": 2020, "end_year": 2022},
        "start_year": 2020,
        "end_year": 2022,
        "yearly_data": [{"year": 2020, "value": 14.2}, {"year": 2021, "value": 14.5}],
        "prediction": [{"year": 2022, "value": 14.913}],
        "stats": {"min": 12.1, "max": 16.4, "mean": 14.35, "std": 0.8, "count": 1250},
        "trend": {"per_year": 0.0312, "direction": "rising"},
        "risk": {"level": "Moderate", "level_key": "moderate", "score": 3,
                 "factors": {"temperature_anomaly": false, "rapid_warming": true, "salinity_imbalance": false}},
        "insight": {"source": "llm", "text": "Warming is steady."},
        "data": [{"date": "2020-01-15", "year": 2020, "latitude": -12.5, "longitude": 70.25,
                  "temperature": 14.1, "salinity": 35.02}]
    }"#;

    #[test]
    fn test_full_answer_decodes() {
        let result: AnalysisResult = serde_json::from_str(FULL_ANSWER).unwrap();
        assert_eq!(result.region, "Indian Ocean");
        assert_eq!(result.parameter, Parameter::Temperature);
        assert_eq!(result.start_year, Some(2020));
        assert_eq!(result.yearly_data.len(), 2);
        assert_eq!(result.prediction, vec![YearValue::new(2022, 14.913)]);
        assert_eq!(result.stats.count, 1250);
        assert_eq!(result.stats.std, Some(0.8));
        let trend = result.trend.as_ref().unwrap();
        assert_eq!(trend.direction, TrendDirection::Rising);
        let risk = result.risk.as_ref().unwrap();
        assert_eq!(risk.level_key.as_deref(), Some("moderate"));
        assert_eq!(risk.factors.weighted_score(), RAPID_WARMING_WEIGHT);
        assert_eq!(result.insight.as_ref().unwrap().source, InsightSource::Llm);
        assert_eq!(
            result.data[0].observed_on(),
            NaiveDate::from_ymd_opt(2020, 1, 15)
        );
        assert!(result.has_forecast());
    }

    #[test]
    fn test_empty_answer_defaults() {
        let body = r#"{
            "region": "Arctic Ocean",
            "parameter": "salinity",
            "parsed": {"region": "Arctic Ocean", "parameter": "salinity", "start_year": 2099, "end_year": null},
            "data": [],
            "stats": {},
            "trend": null,
            "message": "No data found for region: Arctic Ocean"
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.stats, Stats::default());
        assert!(result.trend.is_none());
        assert!(result.prediction.is_empty());
        assert_eq!(result.start_year, None);
        assert_eq!(
            result.message.as_deref(),
            Some("No data found for region: Arctic Ocean")
        );
    }

    #[test]
    fn test_record_dates_are_lenient() {
        let body = r#"{"region": "Indian Ocean", "parameter": "temperature",
            "data": [
                {"date": "2020-01-15T00:00:00", "temperature": 28.1},
                {"date": "2020-02-01 06:30:00"},
                {"date": null},
                {"date": "15/03/2020"}
            ]}"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.data.len(), 4);
        assert_eq!(
            result.data[0].observed_on(),
            NaiveDate::from_ymd_opt(2020, 1, 15)
        );
        assert_eq!(
            result.data[1].observed_on(),
            NaiveDate::from_ymd_opt(2020, 2, 1)
        );
        assert_eq!(result.data[2].date, "");
        assert_eq!(result.data[2].observed_on(), None);
        assert_eq!(result.data[3].observed_on(), None);
    }

    #[test]
    fn test_null_prediction_is_empty() {
        let body = r#"{"region": "Pacific Ocean", "parameter": "temperature", "prediction": null}"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert!(!result.has_forecast());
    }

    #[test]
    fn test_risk_with_score_only() {
        let risk: Risk = serde_json::from_str(r#"{"score": 1}"#).unwrap();
        assert_eq!(risk.level_key, None);
        assert_eq!(risk.factors, RiskFactors::default());
    }

    #[test]
    fn test_unknown_insight_source_is_template() {
        let insight: Insight =
            serde_json::from_str(r#"{"source": "rules", "text": "x"}"#).unwrap();
        assert_eq!(insight.source, InsightSource::Template);
    }

    #[test]
    fn test_other_trend_direction_is_kept() {
        let trend: Trend =
            serde_json::from_str(r#"{"direction": "oscillating", "per_year": 0.0}"#).unwrap();
        assert_eq!(trend.direction.as_str(), "oscillating");
    }
}

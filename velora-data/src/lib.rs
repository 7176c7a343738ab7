//! Data shaping for ocean analysis answers.
//!
//! This crate turns an `AnalysisResult` into forms suitable for charting and
//! display. Everything here is pure: no I/O, no state.

pub mod presentation;
pub mod table;

/// Merging of the historical and forecast series into one chart sequence.
pub mod timeline {
    use serde::Serialize;
    use velora_ocean::{AnalysisResult, YearValue};

    /// A single renderable chart row.
    ///
    /// Exactly one of `value` (observed) and `predicted` (forecast) is set.
    /// A renderer must not interpolate a series across a row where that
    /// series is `None`.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct ChartPoint {
        pub year: i32,
        pub value: Option<f64>,
        pub predicted: Option<f64>,
    }

    /// Round to two decimals from the exact binary value.
    ///
    /// `14.915` is stored as `14.91499…` and rounds down. Exact ties only
    /// occur for multiples of 1/8; those round half away from zero.
    pub fn round2(value: f64) -> f64 {
        if (value * 8.0).fract() == 0.0 {
            return (value * 100.0).round() / 100.0;
        }
        format!("{:.2}", value).parse().unwrap_or(value)
    }

    /// Concatenate historical then forecast points.
    ///
    /// Years are not coalesced: a year present in both inputs yields two
    /// adjacent rows, which keeps the observed and forecast lines disjoint.
    /// Without historical points there is nothing to anchor the chart on and
    /// the result is empty.
    pub fn merge(historical: &[YearValue], forecast: &[YearValue]) -> Vec<ChartPoint> {
        if historical.is_empty() {
            return Vec::new();
        }

        let mut points = Vec::with_capacity(historical.len() + forecast.len());
        points.extend(historical.iter().map(|p| ChartPoint {
            year: p.year,
            value: Some(p.value),
            predicted: None,
        }));
        points.extend(forecast.iter().map(|p| ChartPoint {
            year: p.year,
            value: None,
            predicted: Some(round2(p.value)),
        }));
        points
    }

    /// Chart rows for an answer.
    pub fn chart_points(result: &AnalysisResult) -> Vec<ChartPoint> {
        merge(&result.yearly_data, &result.prediction)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_merge_historical_then_forecast() {
            let historical = vec![YearValue::new(2020, 14.2), YearValue::new(2021, 14.5)];
            let forecast = vec![YearValue::new(2022, 14.913)];
            let merged = merge(&historical, &forecast);
            assert_eq!(
                merged,
                vec![
                    ChartPoint { year: 2020, value: Some(14.2), predicted: None },
                    ChartPoint { year: 2021, value: Some(14.5), predicted: None },
                    ChartPoint { year: 2022, value: None, predicted: Some(14.91) },
                ]
            );
        }

        #[test]
        fn test_overlapping_year_is_not_coalesced() {
            let historical = vec![YearValue::new(2021, 14.5)];
            let forecast = vec![YearValue::new(2021, 14.6), YearValue::new(2022, 14.8)];
            let merged = merge(&historical, &forecast);
            assert_eq!(merged.len(), 3);
            assert_eq!(merged[0].year, 2021);
            assert_eq!(merged[1].year, 2021);
            assert_eq!(merged[0].predicted, None);
            assert_eq!(merged[1].value, None);
        }

        #[test]
        fn test_no_forecast() {
            let historical = vec![YearValue::new(2020, 35.1)];
            let merged = merge(&historical, &[]);
            assert_eq!(merged.len(), 1);
            assert!(merged.iter().all(|p| p.predicted.is_none()));
        }

        #[test]
        fn test_no_history_yields_nothing() {
            let forecast = vec![YearValue::new(2027, 15.0)];
            assert!(merge(&[], &forecast).is_empty());
        }

        #[test]
        fn test_historical_values_are_not_rounded() {
            let merged = merge(&[YearValue::new(2020, 14.12345)], &[]);
            assert_eq!(merged[0].value, Some(14.12345));
        }

        #[test]
        fn test_round2() {
            assert_eq!(round2(14.913), 14.91);
            assert_eq!(round2(14.915), 14.91);
            assert_eq!(round2(2.675), 2.67);
            assert_eq!(round2(-2.675), -2.67);
            assert_eq!(round2(1.005), 1.0);
            assert_eq!(round2(0.375), 0.38);
            assert_eq!(round2(-0.125), -0.13);
            assert_eq!(round2(3.0), 3.0);
        }

        #[test]
        fn test_forecast_rounds_stored_value() {
            let merged = merge(
                &[YearValue::new(2020, 14.0)],
                &[YearValue::new(2021, 14.915), YearValue::new(2022, 2.675)],
            );
            assert_eq!(merged[1].predicted, Some(14.91));
            assert_eq!(merged[2].predicted, Some(2.67));
        }

        #[test]
        fn test_serializes_nulls() {
            let point = ChartPoint { year: 2022, value: None, predicted: Some(14.91) };
            let json = serde_json::to_string(&point).unwrap();
            assert_eq!(json, r#"{"year":2022,"value":null,"predicted":14.91}"#);
        }
    }
}

//! Rows for the raw data records table.

use velora_ocean::{AnalysisResult, RawRecord};

/// Placeholder for a missing measurement.
pub const MISSING_CELL: &str = "—";

/// Column headers, in display order.
pub const HEADERS: [&str; 5] = [
    "Date",
    "Latitude",
    "Longitude",
    "Temperature (°C)",
    "Salinity (PSU)",
];

/// A formatted table row. Dates that do not parse are shown as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub date: String,
    pub latitude: String,
    pub longitude: String,
    pub temperature: String,
    pub salinity: String,
}

/// Two decimals, or [`MISSING_CELL`].
pub fn format_cell(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_CELL.to_string(), |v| format!("{:.2}", v))
}

impl From<&RawRecord> for TableRow {
    fn from(record: &RawRecord) -> Self {
        Self {
            date: record
                .observed_on()
                .map_or_else(|| record.date.clone(), |d| d.format("%Y-%m-%d").to_string()),
            latitude: format_cell(record.latitude),
            longitude: format_cell(record.longitude),
            temperature: format_cell(record.temperature),
            salinity: format_cell(record.salinity),
        }
    }
}

pub fn rows(result: &AnalysisResult) -> Vec<TableRow> {
    result.data.iter().map(TableRow::from).collect()
}

/// `"showing <sample> / <total> records"`; the sample may be shorter than the total.
pub fn record_count_label(result: &AnalysisResult) -> String {
    format!(
        "showing {} / {} records",
        result.data.len(),
        result.stats.count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(Some(14.126)), "14.13");
        assert_eq!(format_cell(Some(-3.0)), "-3.00");
        assert_eq!(format_cell(None), "—");
    }

    #[test]
    fn test_rows_and_count_label() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{
                "region": "Indian Ocean",
                "parameter": "temperature",
                "stats": {"min": 10, "max": 20, "mean": 15, "count": 4200},
                "data": [
                    {"date": "2021-03-04", "latitude": -10.5, "longitude": 75.123,
                     "temperature": 28.456, "salinity": null}
                ]
            }"#,
        )
        .unwrap();

        let rows = rows(&result);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2021-03-04");
        assert_eq!(rows[0].longitude, "75.12");
        assert_eq!(rows[0].temperature, "28.46");
        assert_eq!(rows[0].salinity, MISSING_CELL);
        assert_eq!(record_count_label(&result), "showing 1 / 4200 records");
    }

    #[test]
    fn test_timestamp_and_unparsed_dates() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{
                "region": "Pacific Ocean",
                "parameter": "salinity",
                "data": [
                    {"date": "2020-01-15T00:00:00", "salinity": 34.9},
                    {"date": "early 2020"}
                ]
            }"#,
        )
        .unwrap();

        let rows = rows(&result);
        assert_eq!(rows[0].date, "2020-01-15");
        assert_eq!(rows[1].date, "early 2020");
        assert_eq!(rows[1].salinity, MISSING_CELL);
    }
}

//! CSV export of the merged chart series.

use std::io::Write;
use velora_data::timeline::chart_points;
use velora_ocean::AnalysisResult;

/// Write `year,value,predicted` rows to `path`. Returns the row count.
pub fn write_chart_csv(path: &str, result: &AnalysisResult) -> anyhow::Result<usize> {
    let file = std::fs::File::create(path)?;
    write_chart_rows(file, result)
}

/// Write the chart rows to any writer. Missing values are empty cells.
pub fn write_chart_rows<W: Write>(writer: W, result: &AnalysisResult) -> anyhow::Result<usize> {
    let points = chart_points(result);
    let mut wtr = csv::Writer::from_writer(writer);
    // Header is written explicitly so an empty series still yields one.
    wtr.write_record(["year", "value", "predicted"])?;
    for point in &points {
        wtr.write_record([
            point.year.to_string(),
            point.value.map(|v| v.to_string()).unwrap_or_default(),
            point.predicted.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(points.len())
}

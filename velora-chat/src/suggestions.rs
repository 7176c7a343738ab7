//! Example questions offered before the first message.

/// First year of the backend's dataset.
pub const DATASET_YEAR_START: i32 = 2020;
/// Last year of the backend's dataset.
pub const DATASET_YEAR_END: i32 = 2026;

const FALLBACK_START: i32 = 2018;
const FALLBACK_END: i32 = 2022;

/// Four example questions spanning `start..=end`.
pub fn example_queries(start: Option<i32>, end: Option<i32>) -> [String; 4] {
    let start = start.unwrap_or(FALLBACK_START);
    let end = end.unwrap_or(FALLBACK_END);
    let mid = (start + end).div_euclid(2);
    [
        format!(
            "Show temperature trend in Indian Ocean from {} to {}",
            start, end
        ),
        format!("What is the salinity in Pacific Ocean from {} to {}?", start, end),
        format!("Atlantic Ocean temperature in {}", mid),
        format!("How warm is the Arctic Ocean in {}?", end),
    ]
}

/// Examples for the bundled dataset window.
pub fn dataset_example_queries() -> [String; 4] {
    example_queries(Some(DATASET_YEAR_START), Some(DATASET_YEAR_END))
}

pub fn input_placeholder() -> String {
    format!(
        "e.g. Show temperature in Indian Ocean from {}–{}",
        DATASET_YEAR_START, DATASET_YEAR_END
    )
}

/// Question sent by a quick-region button.
pub fn quick_region_query(region: &str) -> String {
    format!("Show temperature in {}", region)
}

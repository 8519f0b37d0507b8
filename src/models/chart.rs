use chrono::NaiveDate;
use serde::Serialize;

/// One point on the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: String,         // short axis label, "15 Mar"
    pub y: u8,             // pain level
    pub full_time: String, // "15/03/2024 14:30"
}

/// Everything the report view needs, computed from one snapshot of the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub count: usize,
    pub average: f64,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub series: Vec<ChartPoint>,
}

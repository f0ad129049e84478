// Dashboard view model handed to the renderer
use super::metric::{Classification, GoodDirection};
use serde::Serialize;

pub const FOOTNOTE: &str = "* előzetes (2024) · † becsült (2025) · ‡ becsült (2026)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSpec {
    pub label: String,
    pub values: Vec<Option<f64>>,
    pub color: String,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub x_labels: Vec<i32>,
    pub series: Vec<SeriesSpec>,
    pub y_axis_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCell {
    pub label: String,
    pub start_display: String,
    pub end_display: String,
    pub end_year_marker: String,
    pub delta_display: String,
    pub delta_magnitude: String,
    pub arrow: String,
    pub classification: Classification,
    pub good_direction: GoodDirection,
    pub start_value: Option<f64>,
    pub end_value: Option<f64>,
    pub delta: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSpec {
    pub title: String,
    pub cells: Vec<MetricCell>,
    pub footnote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub chart: ChartSpec,
    pub table: TableSpec,
    pub status: String,
}

impl DashboardView {
    pub fn new(chart: ChartSpec, table: TableSpec, status: String) -> Self {
        Self { chart, table, status }
    }
}

// Metric delta engine: change between range endpoints and its classification
use serde::{Deserialize, Serialize};

/// Marker shown wherever a value is missing or not a number.
pub const NOT_AVAILABLE: &str = "NA";

pub const ARROW_UP: &str = "▲";
pub const ARROW_DOWN: &str = "▼";
pub const ARROW_FLAT: &str = "→";

/// Which direction of change counts as favourable for an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoodDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Good,
    Bad,
    Neutral,
}

/// Round to one decimal place, halves away from zero. Negative zero becomes `0.0`.
pub fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0 + 0.0
}

/// `end - start` rounded to one decimal, or `None` if either side is missing.
pub fn compute_delta(start: Option<f64>, end: Option<f64>) -> Option<f64> {
    match (start, end) {
        (Some(a), Some(b)) if a.is_finite() && b.is_finite() => Some(round_tenth(b - a)),
        _ => None,
    }
}

/// No change counts as `Bad` in both directions; only missing data is neutral.
pub fn classify(delta: Option<f64>, good: GoodDirection) -> Classification {
    let Some(d) = delta else {
        return Classification::Neutral;
    };
    let improved = match good {
        GoodDirection::Up => d > 0.0,
        GoodDirection::Down => d < 0.0,
    };
    if improved {
        Classification::Good
    } else {
        Classification::Bad
    }
}

pub fn arrow_for(delta: Option<f64>) -> &'static str {
    match delta {
        Some(d) if d > 0.0 => ARROW_UP,
        Some(d) if d < 0.0 => ARROW_DOWN,
        _ => ARROW_FLAT,
    }
}

pub fn format_value(x: Option<f64>) -> String {
    match x {
        Some(v) if v.is_finite() => format!("{:.1}", round_tenth(v)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Signed one-decimal delta: `+2.5`, `-1.3`, `0.0`.
pub fn format_delta(delta: Option<f64>) -> String {
    match delta {
        Some(d) if d > 0.0 => format!("+{:.1}", d),
        Some(d) => format!("{:.1}", round_tenth(d)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Unsigned delta as shown next to the arrow.
pub fn format_magnitude(delta: Option<f64>) -> String {
    format_value(delta.map(f64::abs))
}

/// Footnote marker for provisional (2024) and estimated (2025, 2026) years.
pub fn year_annotation(year: i32) -> &'static str {
    match year {
        2024 => "*",
        2025 => "†",
        2026 => "‡",
        _ => "",
    }
}

/// Start/end comparison for one indicator over the selected range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub label: String,
    pub start_value: Option<f64>,
    pub end_value: Option<f64>,
    pub delta: Option<f64>,
    pub classification: Classification,
}

impl MetricResult {
    pub fn compute(label: impl Into<String>, start: Option<f64>, end: Option<f64>, good: GoodDirection) -> Self {
        let start_value = start.filter(|v| v.is_finite());
        let end_value = end.filter(|v| v.is_finite());
        let delta = compute_delta(start_value, end_value);
        Self {
            label: label.into(),
            start_value,
            end_value,
            delta,
            classification: classify(delta, good),
        }
    }
}

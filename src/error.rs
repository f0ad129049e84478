// Domain and service errors
use crate::domain::record::DatasetKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to load dataset {dataset}: {source:#}")]
    SourceUnavailable {
        dataset: DatasetKind,
        #[source]
        source: anyhow::Error,
    },

    #[error("year {year} is outside the supported range {min}-{max}")]
    YearOutOfDomain { year: i32, min: i32, max: i32 },

    #[error("range start {from} is after range end {to}")]
    InvertedRange { from: i32, to: i32 },

    #[error("unknown thematic group '{0}'")]
    UnknownGroup(String),

    #[error("invalid cycle preset '{label}': {reason}")]
    InvalidPreset { label: String, reason: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;

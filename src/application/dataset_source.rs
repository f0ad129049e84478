// Source trait for raw dataset text
use crate::domain::record::DatasetKind;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch the raw comma-separated text for one dataset.
    async fn fetch_text(&self, kind: DatasetKind) -> anyhow::Result<String>;

    /// Human-readable location of a dataset, for logs.
    fn describe(&self, kind: DatasetKind) -> String;
}

// Time-series store - all datasets, loaded once and shared read-only
use crate::application::dataset_source::DatasetSource;
use crate::domain::record::{Dataset, DatasetKind};
use crate::error::{DashboardError, Result};
use futures::future::try_join_all;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct TimeSeriesStore {
    datasets: HashMap<DatasetKind, Dataset>,
}

impl TimeSeriesStore {
    /// Fetch every dataset concurrently. The store only exists if all of them
    /// arrive; the first failure is returned and nothing partial is kept.
    pub async fn load_all(source: &dyn DatasetSource) -> Result<Self> {
        let fetches = DatasetKind::ALL.into_iter().map(|kind| async move {
            tracing::debug!(dataset = %kind, location = %source.describe(kind), "Fetching dataset");
            let text = source
                .fetch_text(kind)
                .await
                .map_err(|e| DashboardError::SourceUnavailable { dataset: kind, source: e })?;
            Ok::<_, DashboardError>(Dataset::parse(kind, &text))
        });

        let datasets = try_join_all(fetches).await?;
        for ds in &datasets {
            tracing::info!(dataset = %ds.kind, records = ds.len(), "Loaded dataset");
        }

        Ok(Self::from_datasets(datasets))
    }

    /// Build a store from already parsed datasets. Kinds not supplied are empty.
    pub fn from_datasets(datasets: impl IntoIterator<Item = Dataset>) -> Self {
        let mut map: HashMap<DatasetKind, Dataset> = DatasetKind::ALL
            .into_iter()
            .map(|kind| (kind, Dataset::empty(kind)))
            .collect();
        for ds in datasets {
            map.insert(ds.kind, ds);
        }
        Self { datasets: map }
    }

    pub fn dataset(&self, kind: DatasetKind) -> &Dataset {
        // every kind is inserted at construction
        &self.datasets[&kind]
    }
}

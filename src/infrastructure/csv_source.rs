// CSV dataset sources: local directory or HTTP base URL
use crate::application::dataset_source::DatasetSource;
use crate::domain::record::DatasetKind;
use crate::infrastructure::config::{AppConfig, SourceKind};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Resolved file name for every dataset.
#[derive(Debug, Clone, Default)]
pub struct DatasetFiles {
    names: HashMap<DatasetKind, String>,
}

impl DatasetFiles {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            names: DatasetKind::ALL
                .into_iter()
                .map(|kind| (kind, config.file_name(kind)))
                .collect(),
        }
    }

    pub fn file_name(&self, kind: DatasetKind) -> &str {
        self.names
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_file_name())
    }
}

#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    root: PathBuf,
    files: DatasetFiles,
}

impl FileDatasetSource {
    pub fn new(root: impl Into<PathBuf>, files: DatasetFiles) -> Self {
        Self {
            root: root.into(),
            files,
        }
    }

    fn path_for(&self, kind: DatasetKind) -> PathBuf {
        self.root.join(self.files.file_name(kind))
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch_text(&self, kind: DatasetKind) -> Result<String> {
        let path = self.path_for(kind);
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))
    }

    fn describe(&self, kind: DatasetKind) -> String {
        self.path_for(kind).display().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct HttpDatasetSource {
    base_url: String,
    files: DatasetFiles,
    client: reqwest::Client,
}

impl HttpDatasetSource {
    pub fn new(base_url: String, files: DatasetFiles) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            files,
            client: reqwest::Client::new(),
        }
    }

    fn build_url(&self, kind: DatasetKind) -> String {
        format!(
            "{}/{}",
            self.base_url,
            urlencoding::encode(self.files.file_name(kind))
        )
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch_text(&self, kind: DatasetKind) -> Result<String> {
        let url = self.build_url(kind);

        let response = self
            .client
            .get(&url)
            .header("Accept", "text/csv")
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("Fetching {} failed with status {}", url, status);
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {}", url))
    }

    fn describe(&self, kind: DatasetKind) -> String {
        self.build_url(kind)
    }
}

pub fn source_from_config(config: &AppConfig) -> Arc<dyn DatasetSource> {
    let files = DatasetFiles::from_config(config);
    match config.source.kind {
        SourceKind::Dir => Arc::new(FileDatasetSource::new(&config.source.location, files)),
        SourceKind::Http => Arc::new(HttpDatasetSource::new(config.source.location.clone(), files)),
    }
}

use crate::domain::dataset::entity::DatasetKind;
use crate::domain::dataset::errors::SourceError;
use crate::domain::dataset::source::DatasetSource;
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Serves `{root}/{dataset}.json` from local disk.
pub struct FileDatasetSource {
    root: PathBuf,
}

impl FileDatasetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch(&self, dataset: DatasetKind) -> Result<Value, SourceError> {
        let path = self.root.join(format!("{}.json", dataset.name()));
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SourceError::NotFound(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes).map_err(|e| SourceError::InvalidJson(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("file://{}", self.root.display())
    }
}

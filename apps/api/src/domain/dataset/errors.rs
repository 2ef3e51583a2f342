use super::entity::DatasetKind;
use thiserror::Error;

/// Failure raised by a dataset source while retrieving a document.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("dataset document not found: {0}")]
    NotFound(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("document is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Terminal failure of one dataset load. Never retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to retrieve {dataset} dataset: {source}")]
    Retrieval {
        dataset: DatasetKind,
        #[source]
        source: SourceError,
    },
    #[error("malformed {dataset} dataset: {reason}")]
    Shape { dataset: DatasetKind, reason: String },
}

impl LoadError {
    pub fn dataset(&self) -> DatasetKind {
        match self {
            LoadError::Retrieval { dataset, .. } | LoadError::Shape { dataset, .. } => *dataset,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            LoadError::Retrieval { .. } => "retrieval",
            LoadError::Shape { .. } => "shape",
        }
    }
}

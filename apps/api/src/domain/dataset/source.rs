use super::entity::DatasetKind;
use super::errors::SourceError;
use async_trait::async_trait;
use serde_json::Value;

/// Read-only provider of dataset documents.
///
/// Implementations must be idempotent: fetching the same dataset twice has no side
/// effects. The returned document is expected to look like
/// `{ "<collection key>": [ <record>, ... ] }`, but checking that is the loader's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self, dataset: DatasetKind) -> Result<Value, SourceError>;

    /// Where documents come from, for logs.
    fn describe(&self) -> String;
}

use super::dto::{DatasetOutcome, LoadReport};
use crate::domain::dataset::entity::{DatasetKind, DatasetResult, LoadedLayer, RawRecord};
use crate::domain::dataset::errors::{LoadError, SourceError};
use crate::domain::dataset::profile::DatasetProfile;
use crate::domain::dataset::source::DatasetSource;
use crate::domain::dataset::validator::validate;
use crate::domain::layer::registry::LayerRegistry;
use crate::domain::marker::entity::MapMarker;
use crate::domain::marker::factory;
use crate::domain::notice::channel::NoticeChannel;
use crate::domain::notice::entity::Severity;
use crate::domain::shared::errors::DomainError;
use futures_util::future::join_all;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::instrument;

/// Runs fetch → validate → build → register for each dataset.
///
/// Failures are isolated per dataset: a dataset that cannot be retrieved or parsed
/// produces one error notice and leaves the other datasets untouched. Nothing is
/// retried and in-flight loads cannot be cancelled.
pub struct DatasetLoader {
    source: Arc<dyn DatasetSource>,
    registry: Arc<LayerRegistry>,
    notices: Arc<dyn NoticeChannel>,
    in_flight: Mutex<HashSet<DatasetKind>>,
}

impl DatasetLoader {
    pub fn new(
        source: Arc<dyn DatasetSource>,
        registry: Arc<LayerRegistry>,
        notices: Arc<dyn NoticeChannel>,
    ) -> Self {
        Self {
            source,
            registry,
            notices,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Fetches and assembles one dataset without registering it.
    #[instrument(skip_all, fields(dataset = %dataset))]
    pub async fn load(&self, dataset: DatasetKind) -> DatasetResult {
        let document = self.source.fetch(dataset).await.map_err(|e| match e {
            SourceError::InvalidJson(reason) => LoadError::Shape { dataset, reason },
            source => LoadError::Retrieval { dataset, source },
        })?;
        let records = extract_collection(dataset, document)?;
        Ok(assemble(DatasetProfile::for_kind(dataset), records))
    }

    /// Loads one dataset and applies the result: register on success, notify on failure.
    ///
    /// # Errors
    ///
    /// Returns `ReloadInProgress` if a load for the same dataset has not finished yet.
    /// Load failures are not errors here; they are reported in the outcome.
    #[instrument(skip_all, fields(dataset = %dataset))]
    pub async fn load_and_register(
        &self,
        dataset: DatasetKind,
    ) -> Result<DatasetOutcome, DomainError> {
        let _guard = self
            .begin(dataset)
            .ok_or_else(|| DomainError::ReloadInProgress(dataset.to_string()))?;

        match self.load(dataset).await {
            Ok(layer) => {
                let (markers, rejected) = (layer.markers.len(), layer.rejected);
                self.registry.register(dataset, layer.markers);
                tracing::info!(dataset = %dataset, markers, rejected, "dataset loaded");
                Ok(DatasetOutcome::loaded(dataset, markers, rejected))
            }
            Err(err) => {
                tracing::error!(
                    dataset = %dataset,
                    category = err.category(),
                    error = %err,
                    "dataset load failed"
                );
                let notice = self.notices.notify(
                    Severity::Error,
                    "Error",
                    &format!("Failed to load {} data.", dataset),
                );
                Ok(DatasetOutcome::failed(&err, notice.id))
            }
        }
    }

    /// Issues all dataset loads at once; they complete in any order.
    pub async fn load_all(&self) -> LoadReport {
        tracing::info!(source = %self.source.describe(), "loading all datasets");
        let outcomes = join_all(DatasetKind::ALL.into_iter().map(|dataset| async move {
            match self.load_and_register(dataset).await {
                Ok(outcome) => outcome,
                Err(e) => DatasetOutcome::skipped(dataset, e.to_string()),
            }
        }))
        .await;
        LoadReport { outcomes }
    }

    pub fn is_loading(&self, dataset: DatasetKind) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&dataset)
    }

    fn begin(&self, dataset: DatasetKind) -> Option<InFlightGuard<'_>> {
        let inserted = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(dataset);
        inserted.then_some(InFlightGuard {
            in_flight: &self.in_flight,
            dataset,
        })
    }
}

/// Marks a dataset as loading until dropped.
struct InFlightGuard<'a> {
    in_flight: &'a Mutex<HashSet<DatasetKind>>,
    dataset: DatasetKind,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.dataset);
    }
}

fn extract_collection(dataset: DatasetKind, document: Value) -> Result<Vec<RawRecord>, LoadError> {
    let key = dataset.collection_key();
    let Value::Object(mut top) = document else {
        return Err(LoadError::Shape {
            dataset,
            reason: "top-level document is not an object".to_string(),
        });
    };
    match top.remove(key) {
        Some(Value::Array(records)) => Ok(records),
        Some(_) => Err(LoadError::Shape {
            dataset,
            reason: format!("`{}` is not an array", key),
        }),
        None => Err(LoadError::Shape {
            dataset,
            reason: format!("missing `{}` collection", key),
        }),
    }
}

/// Validates and builds every record; rejected records are counted, never surfaced.
pub fn assemble(profile: &DatasetProfile, records: Vec<RawRecord>) -> LoadedLayer {
    let total = records.len();
    let mut markers: Vec<MapMarker> = records
        .into_iter()
        .filter_map(|record| validate(record, &profile.coordinates))
        .map(|record| factory::build(&record, profile))
        .collect();

    if profile.sort_by_label {
        markers.sort_by(|a, b| compare_labels(&a.label, &b.label));
    }

    LoadedLayer {
        dataset: profile.kind,
        rejected: total - markers.len(),
        markers,
    }
}

/// Case-insensitive ordering with the raw label as tie-break.
fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

use crate::domain::dataset::entity::DatasetKind;
use crate::domain::dataset::errors::LoadError;
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OutcomeStatus {
    Loaded,
    Failed,
    /// Not attempted because a load for the same dataset was still running.
    Skipped,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct DatasetOutcome {
    pub dataset: DatasetKind,
    pub status: OutcomeStatus,
    pub markers: usize,
    pub rejected: usize,
    pub error: Option<String>,
    pub notice_id: Option<Uuid>,
}

impl DatasetOutcome {
    pub fn loaded(dataset: DatasetKind, markers: usize, rejected: usize) -> Self {
        Self {
            dataset,
            status: OutcomeStatus::Loaded,
            markers,
            rejected,
            error: None,
            notice_id: None,
        }
    }

    pub fn failed(error: &LoadError, notice_id: Uuid) -> Self {
        Self {
            dataset: error.dataset(),
            status: OutcomeStatus::Failed,
            markers: 0,
            rejected: 0,
            error: Some(error.to_string()),
            notice_id: Some(notice_id),
        }
    }

    pub fn skipped(dataset: DatasetKind, reason: String) -> Self {
        Self {
            dataset,
            status: OutcomeStatus::Skipped,
            markers: 0,
            rejected: 0,
            error: Some(reason),
            notice_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct LoadReport {
    pub outcomes: Vec<DatasetOutcome>,
}

impl LoadReport {
    pub fn outcome(&self, dataset: DatasetKind) -> Option<&DatasetOutcome> {
        self.outcomes.iter().find(|o| o.dataset == dataset)
    }

    pub fn loaded_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == OutcomeStatus::Loaded)
            .count()
    }
}

/// Registry summary for one layer.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct LayerSummary {
    pub dataset: DatasetKind,
    pub label: String,
    pub icon_url: String,
    pub markers: Option<usize>,
}

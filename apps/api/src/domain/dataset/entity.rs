use crate::domain::dataset::errors::LoadError;
use crate::domain::marker::entity::MapMarker;
use crate::domain::shared::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Untyped record as it arrives from a dataset document.
pub type RawRecord = serde_json::Value;

/// Outcome of a single dataset load attempt.
pub type DatasetResult = Result<LoadedLayer, LoadError>;

/// One of the three record collections rendered on the map.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DatasetKind {
    Mosques,
    Carparks,
    Musollas,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Mosques,
        DatasetKind::Carparks,
        DatasetKind::Musollas,
    ];

    /// Resource name, also used as the file stem of the dataset document.
    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::Mosques => "mosques",
            DatasetKind::Carparks => "carparks",
            DatasetKind::Musollas => "musollas",
        }
    }

    /// Key of the record array inside the dataset document.
    pub fn collection_key(&self) -> &'static str {
        self.name()
    }

    /// Human-readable layer title for the layer-toggle control.
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKind::Mosques => "Mosques",
            DatasetKind::Carparks => "Carparks",
            DatasetKind::Musollas => "Musollas",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::NotFound(format!("dataset `{}`", s)))
    }
}

/// WGS84 point that has passed coordinate validation.
///
/// # Invariants
/// - both components are finite
/// - `latitude` lies in [-90, 90] and `longitude` in [-180, 180]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// Returns `None` when either component is non-finite or out of range.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }
}

/// A raw record whose coordinates have been proven usable.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    record: RawRecord,
    position: Position,
}

impl ValidatedRecord {
    pub(crate) fn new(record: RawRecord, position: Position) -> Self {
        Self { record, position }
    }

    pub fn record(&self) -> &RawRecord {
        &self.record
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Markers assembled from one successful dataset load.
#[derive(Debug, Clone)]
pub struct LoadedLayer {
    pub dataset: DatasetKind,
    pub markers: Vec<MapMarker>,
    /// Records dropped by coordinate validation.
    pub rejected: usize,
}

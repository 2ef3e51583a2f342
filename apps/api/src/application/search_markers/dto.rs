use crate::domain::dataset::entity::{DatasetKind, Position};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SearchRequest {
    pub query: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SearchHit {
    pub dataset: DatasetKind,
    pub label: String,
    pub position: Position,
    /// Zoom the client should fly to when the hit is chosen.
    pub zoom: u8,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct FlyToRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: Option<u8>,
}

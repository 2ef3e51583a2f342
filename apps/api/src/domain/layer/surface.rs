use crate::domain::dataset::entity::{DatasetKind, Position};
use crate::domain::marker::entity::MapMarker;
use serde::Serialize;
use std::sync::Arc;
use ts_rs::TS;

/// Where the map camera was last sent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CameraTarget {
    pub position: Position,
    pub zoom: u8,
}

/// Rendering side of the map: clustering, pan/zoom and the layer control live here.
///
/// The surface only borrows marker sets; the layer registry owns them.
#[cfg_attr(test, mockall::automock)]
pub trait MapSurface: Send + Sync {
    /// Display `markers` for `dataset`, replacing whatever was shown for it before.
    fn show_layer(&self, dataset: DatasetKind, markers: Arc<[MapMarker]>);

    fn remove_layer(&self, dataset: DatasetKind);

    fn fly_to(&self, target: CameraTarget);
}

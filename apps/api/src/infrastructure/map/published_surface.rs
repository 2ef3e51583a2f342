use crate::domain::dataset::entity::DatasetKind;
use crate::domain::layer::surface::{CameraTarget, MapSurface};
use crate::domain::marker::entity::MapMarker;
use crate::infrastructure::feed::{self, FeedEvent, FeedSender};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct DisplayedLayer {
    pub dataset: DatasetKind,
    pub markers: usize,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SurfaceView {
    pub layers: Vec<DisplayedLayer>,
    pub camera: Option<CameraTarget>,
}

#[derive(Default)]
struct SurfaceState {
    displayed: BTreeMap<DatasetKind, Arc<[MapMarker]>>,
    camera: Option<CameraTarget>,
}

/// Map surface whose state is published to browsers instead of drawn locally.
///
/// Clients render with their own map library; this keeps the authoritative view and
/// streams every change on the feed.
pub struct PublishedMapSurface {
    state: RwLock<SurfaceState>,
    feed: FeedSender,
}

impl PublishedMapSurface {
    pub fn new(feed: FeedSender) -> Self {
        Self {
            state: RwLock::new(SurfaceState::default()),
            feed,
        }
    }

    pub fn view(&self) -> SurfaceView {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        SurfaceView {
            layers: state
                .displayed
                .iter()
                .map(|(dataset, markers)| DisplayedLayer {
                    dataset: *dataset,
                    markers: markers.len(),
                })
                .collect(),
            camera: state.camera,
        }
    }

    pub fn is_displayed(&self, dataset: DatasetKind) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .displayed
            .contains_key(&dataset)
    }
}

impl MapSurface for PublishedMapSurface {
    fn show_layer(&self, dataset: DatasetKind, markers: Arc<[MapMarker]>) {
        let count = markers.len();
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .displayed
            .insert(dataset, markers);
        feed::publish(
            &self.feed,
            &FeedEvent::LayerShown {
                dataset,
                markers: count,
            },
        );
    }

    fn remove_layer(&self, dataset: DatasetKind) {
        let removed = self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .displayed
            .remove(&dataset);
        match removed {
            Some(_) => feed::publish(&self.feed, &FeedEvent::LayerRemoved { dataset }),
            None => tracing::debug!(dataset = %dataset, "layer not found on the map"),
        }
    }

    fn fly_to(&self, target: CameraTarget) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .camera = Some(target);
        feed::publish(&self.feed, &FeedEvent::FlyTo { target });
    }
}

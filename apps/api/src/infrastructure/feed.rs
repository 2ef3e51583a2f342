use crate::domain::dataset::entity::DatasetKind;
use crate::domain::layer::surface::CameraTarget;
use crate::domain::notice::entity::Notice;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Fan-out channel behind `/ws/feed`. Payloads are serialized `FeedEvent`s.
pub type FeedSender = Arc<broadcast::Sender<String>>;

pub fn channel(capacity: usize) -> FeedSender {
    let (tx, _) = broadcast::channel(capacity);
    Arc::new(tx)
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedEvent<'a> {
    LayerShown { dataset: DatasetKind, markers: usize },
    LayerRemoved { dataset: DatasetKind },
    FlyTo { target: CameraTarget },
    Notice { notice: &'a Notice },
}

/// Sends `event` to current subscribers. Having none is not an error.
pub fn publish(feed: &FeedSender, event: &FeedEvent<'_>) {
    match serde_json::to_string(event) {
        Ok(payload) => {
            let _ = feed.send(payload);
        }
        Err(e) => tracing::error!(error = %e, "failed to serialize feed event"),
    }
}

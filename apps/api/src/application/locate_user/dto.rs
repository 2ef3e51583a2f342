use crate::domain::dataset::entity::Position;
use crate::domain::marker::entity::IconRef;
use crate::domain::notice::entity::Notice;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What the browser geolocation callback delivered.
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum GeolocationReport {
    Fix {
        latitude: f64,
        longitude: f64,
        /// Accuracy radius in metres.
        accuracy: f64,
    },
    Failure {
        error: String,
    },
}

/// "You are here" marker plus its accuracy circle.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct LocationView {
    pub position: Position,
    pub icon: IconRef,
    pub popup_html: String,
    pub accuracy_radius: f64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct LocateResponse {
    pub location: Option<LocationView>,
    pub notice: Option<Notice>,
}

use super::entity::{DatasetKind, RawRecord};
use super::rules::CoordinateRule;
use crate::domain::marker::popup;

/// Everything the pipeline needs to know to turn one dataset into markers.
#[derive(Debug, Clone, Copy)]
pub struct DatasetProfile {
    pub kind: DatasetKind,
    pub coordinates: CoordinateRule,
    pub icon_url: &'static str,
    /// Field shown as the marker title and indexed by search.
    pub label_field: &'static str,
    pub popup: fn(&RawRecord) -> String,
    /// Sort rendered markers by label before registering them.
    pub sort_by_label: bool,
    /// Open the popup on pointer hover instead of on click.
    pub open_on_hover: bool,
}

const LOCATION_COORDINATES: CoordinateRule = CoordinateRule::Nested {
    object: "location",
    latitude: "latitude",
    longitude: "longitude",
};

static MOSQUES: DatasetProfile = DatasetProfile {
    kind: DatasetKind::Mosques,
    coordinates: LOCATION_COORDINATES,
    icon_url: "images/mosqueicon.png",
    label_field: "mosque",
    popup: popup::mosque_popup,
    sort_by_label: false,
    open_on_hover: false,
};

static CARPARKS: DatasetProfile = DatasetProfile {
    kind: DatasetKind::Carparks,
    coordinates: LOCATION_COORDINATES,
    icon_url: "images/carparkicon.png",
    label_field: "carpark_no",
    popup: popup::carpark_popup,
    sort_by_label: false,
    open_on_hover: true,
};

static MUSOLLAS: DatasetProfile = DatasetProfile {
    kind: DatasetKind::Musollas,
    coordinates: CoordinateRule::Flat {
        latitude: "Latitude",
        longitude: "Longitude",
    },
    icon_url: "images/musollasicon.png",
    label_field: "Location",
    popup: popup::musolla_popup,
    sort_by_label: true,
    open_on_hover: false,
};

impl DatasetProfile {
    pub fn for_kind(kind: DatasetKind) -> &'static DatasetProfile {
        match kind {
            DatasetKind::Mosques => &MOSQUES,
            DatasetKind::Carparks => &CARPARKS,
            DatasetKind::Musollas => &MUSOLLAS,
        }
    }
}

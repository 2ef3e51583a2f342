use crate::domain::dataset::entity::{DatasetKind, Position};
use serde::Serialize;
use ts_rs::TS;

/// Pixel size every map icon is rendered at.
pub const ICON_SIZE: [u32; 2] = [32, 32];

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct IconRef {
    pub url: String,
    pub size: [u32; 2],
}

impl IconRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            size: ICON_SIZE,
        }
    }
}

/// Renderable point for one dataset record.
///
/// Markers are never mutated after the factory builds them; the registry shares
/// them with the map surface behind an `Arc<[MapMarker]>`.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct MapMarker {
    pub dataset: DatasetKind,
    pub position: Position,
    pub icon: IconRef,
    /// Escaped HTML payload bound to the marker popup.
    pub popup_html: String,
    /// Display name, used for ordering and text search.
    pub label: String,
    pub open_on_hover: bool,
}

use super::entity::{IconRef, MapMarker};
use super::popup::field_text;
use crate::domain::dataset::entity::ValidatedRecord;
use crate::domain::dataset::profile::DatasetProfile;

/// Builds the marker for one validated record. Infallible by construction.
pub fn build(record: &ValidatedRecord, profile: &DatasetProfile) -> MapMarker {
    MapMarker {
        dataset: profile.kind,
        position: record.position(),
        icon: IconRef::new(profile.icon_url),
        popup_html: (profile.popup)(record.record()),
        label: field_text(record.record(), profile.label_field),
        open_on_hover: profile.open_on_hover,
    }
}

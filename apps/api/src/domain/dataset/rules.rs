use super::entity::RawRecord;

/// Where a dataset keeps the latitude/longitude of each record.
///
/// Datasets disagree on field names and nesting, so each one is described by a rule
/// instead of per-record branching. A new dataset type only needs a new rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateRule {
    /// Coordinates live in a child object, e.g. `location.latitude`.
    Nested {
        object: &'static str,
        latitude: &'static str,
        longitude: &'static str,
    },
    /// Coordinates live on the record itself, e.g. `Latitude`.
    Flat {
        latitude: &'static str,
        longitude: &'static str,
    },
}

impl CoordinateRule {
    /// Returns the raw (latitude, longitude) values, or `None` if either is absent.
    pub fn extract<'a>(
        &self,
        record: &'a RawRecord,
    ) -> Option<(&'a RawRecord, &'a RawRecord)> {
        let (holder, latitude, longitude) = match *self {
            CoordinateRule::Nested {
                object,
                latitude,
                longitude,
            } => (record.get(object)?, latitude, longitude),
            CoordinateRule::Flat {
                latitude,
                longitude,
            } => (record, latitude, longitude),
        };
        Some((holder.get(latitude)?, holder.get(longitude)?))
    }
}

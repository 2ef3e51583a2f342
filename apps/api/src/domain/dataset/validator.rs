use super::entity::{Position, RawRecord, ValidatedRecord};
use super::rules::CoordinateRule;
use serde_json::Value;

/// Filters a raw record down to one with usable coordinates.
///
/// Coordinates may be JSON numbers or numeric strings. Strings are parsed strictly,
/// so `"1.30abc"` is rejected rather than truncated. A `None` is a filtering outcome,
/// not a fault.
pub fn validate(record: RawRecord, rule: &CoordinateRule) -> Option<ValidatedRecord> {
    let position = {
        let (latitude, longitude) = rule.extract(&record)?;
        Position::new(parse_coordinate(latitude)?, parse_coordinate(longitude)?)?
    };
    Some(ValidatedRecord::new(record, position))
}

fn parse_coordinate(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

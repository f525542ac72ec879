//! Attribute readers. Reading never fails a translation: a present value
//! that can not be used as the needed type is logged and skipped, only that
//! one field goes missing from the result.

use colorconv::CieColor;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::Attributes;

pub(crate) fn number(map: &Attributes, name: &str) -> Option<f64> {
    let json = map.get(name)?;
    let number = json.as_f64();
    if number.is_none() {
        warn!("Ignoring {name}, should be a number, got: {json}");
    }
    number
}

/// An object with numeric keys `x` and `y`
pub(crate) fn xy(map: &Attributes, name: &str) -> Option<CieColor> {
    let json = map.get(name)?;
    CieColor::deserialize(json)
        .inspect_err(|err| warn!("Ignoring {name} ({json}): {err}"))
        .ok()
}

/// Falsy are: `false`, `null`, zero, NaN and the empty string
pub(crate) fn truthy(json: &Value) -> bool {
    match json {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0. && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn attributes(json: Value) -> Attributes {
        let Value::Object(map) = json else {
            panic!("test attributes must be an object");
        };
        map
    }

    #[test]
    fn absent_is_none() {
        let map = attributes(json!({}));
        assert_eq!(number(&map, "brightness"), None);
        assert_eq!(xy(&map, "color"), None);
    }

    #[test]
    fn integers_read_as_numbers() {
        let map = attributes(json!({"brightness": 42}));
        assert_eq!(number(&map, "brightness"), Some(42.));
    }

    #[test]
    fn unreadable_values_are_skipped() {
        let map = attributes(json!({
            "brightness": "high",
            "color": {"x": 0.3},
        }));
        assert_eq!(number(&map, "brightness"), None);
        assert_eq!(xy(&map, "color"), None);
    }

    #[test]
    fn color_object_is_read() {
        let map = attributes(json!({"color": {"x": 0.3, "y": 1, "h": 12}}));
        assert_eq!(xy(&map, "color"), Some(CieColor { x: 0.3, y: 1. }));
    }

    #[test]
    fn truthiness() {
        let falsy_values =
            [json!(false), json!(null), json!(0), json!(0.0), json!("")];
        for falsy in falsy_values {
            assert!(!truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy_json in [json!(true), json!(1), json!("OFF"), json!({})] {
            assert!(truthy(&truthy_json), "{truthy_json} should be truthy");
        }
    }
}

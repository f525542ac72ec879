use serde_json::{json, Value};
use translator::{translate, Attributes, Direction, Error};

fn to_homekit(zigbee: Value) -> Result<Value, Error> {
    let Value::Object(zigbee) = zigbee else {
        panic!("test attributes must be an object");
    };
    translate(Direction::ZigbeeToHomekit, "Motion Sensor", &zigbee, None)
        .map(Value::Object)
}

#[test]
fn empty_report_is_inactive() {
    logger::setup_for_tests();

    assert_eq!(
        to_homekit(json!({})).unwrap(),
        json!({"MotionDetected": false, "StatusActive": false})
    );
}

#[test]
fn occupancy_is_forwarded() {
    assert_eq!(
        to_homekit(json!({"occupancy": true})).unwrap(),
        json!({"MotionDetected": true, "StatusActive": true})
    );
    assert_eq!(
        to_homekit(json!({"occupancy": false})).unwrap(),
        json!({"MotionDetected": false, "StatusActive": true})
    );
}

#[test]
fn occupancy_passes_through_unchanged() {
    assert_eq!(
        to_homekit(json!({"occupancy": 1, "battery": "full"})).unwrap(),
        json!({"MotionDetected": 1, "StatusActive": true})
    );
}

#[test]
fn battery_below_25_is_low() {
    let report = to_homekit(json!({"occupancy": true, "battery": 20})).unwrap();
    assert_eq!(report["StatusLowBattery"], json!(true));

    let report = to_homekit(json!({"battery": 25})).unwrap();
    assert_eq!(
        report,
        json!({
            "MotionDetected": false,
            "StatusActive": false,
            "StatusLowBattery": false,
        })
    );
}

#[test]
fn unrelated_attributes_are_dropped() {
    let report: Attributes = match to_homekit(json!({"linkquality": 60})).unwrap() {
        Value::Object(map) => map,
        _ => unreachable!(),
    };
    assert!(!report.contains_key("linkquality"));
    assert!(!report.contains_key("StatusLowBattery"));
}

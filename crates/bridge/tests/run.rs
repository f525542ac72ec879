use std::io::Cursor;

use serde_json::{json, Value};
use translator::{Direction, Translator};

fn run(direction: Direction, kind: &str, lines: &[Value]) -> Vec<Value> {
    let input: String = lines.iter().map(|line| format!("{line}\n")).collect();
    run_raw(direction, kind, &input)
}

fn run_raw(direction: Direction, kind: &str, input: &str) -> Vec<Value> {
    let translator = Translator::new(direction, kind).unwrap();
    let mut output = Vec::new();
    bridge::run(&translator, Cursor::new(input), &mut output).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn xy(message: &Value) -> (f64, f64) {
    let color = &message["payload"]["color"];
    (color["x"].as_f64().unwrap(), color["y"].as_f64().unwrap())
}

#[test]
fn zigbee_report_becomes_homekit_message() {
    let out = run(
        Direction::ZigbeeToHomekit,
        "Light Bulb",
        &[json!({"payload": {"state": "ON", "brightness": 254}})],
    );
    assert_eq!(
        out,
        vec![json!({"payload": {"On": true, "Brightness": 100}})]
    );
}

#[test]
fn hue_change_combines_with_earlier_saturation() {
    let out = run(
        Direction::HomekitToZigbee,
        "Light Bulb",
        &[
            json!({"payload": {"Hue": 0, "Saturation": 100, "Brightness": 100}}),
            json!({"payload": {"Hue": 120}}),
        ],
    );

    assert_eq!(out.len(), 2);
    assert_eq!(out[1]["payload"].as_object().unwrap().len(), 1);
    let green = colorconv::hsv_to_cie(120., 100., Some(100.));
    assert_eq!(xy(&out[1]), (green.x, green.y));
}

#[test]
fn all_chars_take_precedence_over_history() {
    let out = run(
        Direction::HomekitToZigbee,
        "Light Bulb",
        &[
            json!({"payload": {"Hue": 0, "Saturation": 100}}),
            json!({
                "payload": {"Hue": 240},
                "hap": {"allChars": {"Saturation": 50, "Brightness": 100}},
            }),
        ],
    );

    let expected = colorconv::hsv_to_cie(240., 50., Some(100.));
    assert_eq!(xy(&out[1]), (expected.x, expected.y));
}

#[test]
fn lines_that_are_not_messages_are_skipped() {
    let input = "not json\n\n{\"hap\": {}}\n{\"payload\": {\"On\": true}}\n";
    let out = run_raw(Direction::HomekitToZigbee, "Light Bulb", input);
    assert_eq!(out, vec![json!({"payload": {"state": "ON"}})]);
}

#[test]
fn first_hue_without_history_still_translates() {
    let out = run(
        Direction::HomekitToZigbee,
        "Light Bulb",
        &[json!({"payload": {"On": true, "Hue": 10}})],
    );
    assert_eq!(
        out,
        vec![json!({"payload": {
            "state": "ON",
            "color": {"x": 0.0, "y": 0.0},
        }})]
    );
}

#[test]
fn motion_reports_are_translated() {
    let out = run(
        Direction::ZigbeeToHomekit,
        "Motion Sensor",
        &[
            json!({"payload": {"occupancy": true, "battery": 90}}),
            json!({"payload": {}}),
        ],
    );
    assert_eq!(
        out,
        vec![
            json!({"payload": {
                "MotionDetected": true,
                "StatusActive": true,
                "StatusLowBattery": false,
            }}),
            json!({"payload": {"MotionDetected": false, "StatusActive": false}}),
        ]
    );
}

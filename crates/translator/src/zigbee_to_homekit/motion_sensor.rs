use serde_json::Value;
use tracing::{debug, instrument};

use crate::{parse, Attributes, CharacteristicLookup};

const LOW_BATTERY_PERCENT: f64 = 25.;

/// A report without occupancy marks the sensor inactive
#[instrument(level = "debug", skip_all)]
pub(crate) fn motion_sensor(
    zigbee: &Attributes,
    _: Option<&dyn CharacteristicLookup>,
) -> Attributes {
    let mut homekit = Attributes::new();

    match zigbee.get("occupancy") {
        Some(occupancy) => {
            homekit.insert("MotionDetected".to_owned(), occupancy.clone());
            homekit.insert("StatusActive".to_owned(), Value::Bool(true));
        }
        None => {
            homekit.insert("MotionDetected".to_owned(), Value::Bool(false));
            homekit.insert("StatusActive".to_owned(), Value::Bool(false));
        }
    }

    if let Some(battery) = parse::number(zigbee, "battery") {
        homekit.insert(
            "StatusLowBattery".to_owned(),
            (battery < LOW_BATTERY_PERCENT).into(),
        );
    }

    debug!(?homekit, "translated motion sensor report");
    homekit
}

use tracing::{debug, instrument};

use crate::conversion::level_to_percent;
use crate::{parse, Attributes, CharacteristicLookup, OnState};

/// Brightness is translated before color: the color conversion is fed the
/// translated brightness whenever the report carries one.
#[instrument(level = "debug", skip_all)]
pub(crate) fn light_bulb(
    zigbee: &Attributes,
    _: Option<&dyn CharacteristicLookup>,
) -> Attributes {
    let mut homekit = Attributes::new();

    let on = match zigbee.get("state") {
        Some(state) => OnState::Known(*state == "ON"),
        None => OnState::NoResponse,
    };
    homekit.insert("On".to_owned(), on.into());

    let brightness = parse::number(zigbee, "brightness").map(level_to_percent);
    if let Some(brightness) = brightness {
        homekit.insert("Brightness".to_owned(), brightness.into());
    }

    if let Some(color_temp) = zigbee.get("color_temp") {
        homekit.insert("ColorTemperature".to_owned(), color_temp.clone());
    }

    if let Some(xy) = parse::xy(zigbee, "color") {
        // note: the HomeKit percentage is passed on as is, it is not scaled
        // back to the zigbee range
        let hsv =
            colorconv::cie_to_hsv(xy.x, xy.y, brightness.map(|b| b as f64));
        homekit.insert("Hue".to_owned(), hsv.h.into());
        homekit.insert("Saturation".to_owned(), hsv.s.into());
    }

    debug!(?homekit, "translated light bulb report");
    homekit
}

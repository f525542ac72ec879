use colorconv::CieColor;
use tracing::{debug, instrument, warn};

use crate::characteristic::current;
use crate::conversion::percent_to_level;
use crate::{parse, Attributes, Characteristic, CharacteristicLookup};

#[instrument(level = "debug", skip_all)]
pub(crate) fn light_bulb(
    homekit: &Attributes,
    lookup: Option<&dyn CharacteristicLookup>,
) -> Attributes {
    let mut zigbee = Attributes::new();

    if let Some(on) = homekit.get("On") {
        let state = if parse::truthy(on) { "ON" } else { "OFF" };
        zigbee.insert("state".to_owned(), state.into());
    }

    let brightness = parse::number(homekit, "Brightness");
    if let Some(brightness) = brightness {
        let level = percent_to_level(brightness);
        zigbee.insert("brightness".to_owned(), level.into());
    }

    if let Some(color_temp) = homekit.get("ColorTemperature") {
        zigbee.insert("color_temp".to_owned(), color_temp.clone());
    }

    // HomeKit sends hue and saturation as separate changes, either one
    // means the color changed
    let hue = parse::number(homekit, "Hue");
    let saturation = parse::number(homekit, "Saturation");
    if homekit.contains_key("Hue") || homekit.contains_key("Saturation") {
        let hue = current(hue, Characteristic::Hue, lookup);
        let saturation =
            current(saturation, Characteristic::Saturation, lookup);
        let brightness =
            current(brightness, Characteristic::Brightness, lookup);

        let xy = match (hue, saturation) {
            (Some(hue), Some(saturation)) => {
                if brightness.is_none() {
                    warn!("Brightness unknown, converting at full brightness");
                }
                colorconv::hsv_to_cie(hue, saturation, brightness)
            }
            _ => {
                warn!(
                    "Hue ({hue:?}) or saturation ({saturation:?}) unknown, \
                    sending the degenerate color (0, 0)"
                );
                CieColor { x: 0., y: 0. }
            }
        };
        match serde_json::to_value(xy) {
            Ok(color) => {
                zigbee.insert("color".to_owned(), color);
            }
            Err(err) => warn!("Could not serialize color {xy:?}: {err}"),
        }
    }

    debug!(?zigbee, "translated light bulb change");
    zigbee
}

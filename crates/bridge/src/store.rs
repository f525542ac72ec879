use serde_json::Value;
use strum::IntoEnumIterator;
use tracing::trace;
use translator::{Attributes, Characteristic, CharacteristicLookup};

/// Last color related characteristics seen in HomeKit payloads. HomeKit
/// sends hue and saturation in separate messages, this lets a lone hue
/// change be combined with the saturation from an earlier one.
#[derive(Debug, Default, Clone)]
pub struct CharacteristicStore {
    hue: Option<f64>,
    saturation: Option<f64>,
    brightness: Option<f64>,
}

impl CharacteristicStore {
    fn slot(&mut self, characteristic: Characteristic) -> &mut Option<f64> {
        match characteristic {
            Characteristic::Hue => &mut self.hue,
            Characteristic::Saturation => &mut self.saturation,
            Characteristic::Brightness => &mut self.brightness,
        }
    }

    pub fn remember(&mut self, payload: &Attributes) {
        for characteristic in Characteristic::iter() {
            if let Some(value) =
                payload.get(characteristic.as_ref()).and_then(Value::as_f64)
            {
                trace!("remembering {characteristic}: {value}");
                *self.slot(characteristic) = Some(value);
            }
        }
    }
}

impl CharacteristicLookup for CharacteristicStore {
    fn characteristic(&self, characteristic: Characteristic) -> Option<f64> {
        match characteristic {
            Characteristic::Hue => self.hue,
            Characteristic::Saturation => self.saturation,
            Characteristic::Brightness => self.brightness,
        }
    }
}

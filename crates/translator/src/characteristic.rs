use strum::{AsRefStr, Display, EnumIter};
use tracing::trace;

use crate::Attributes;

/// HomeKit characteristics a translation may need beyond the current message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum Characteristic {
    Hue,
    Saturation,
    Brightness,
}

/// Last known characteristic values, provided by whatever keeps HomeKit
/// state around.
pub trait CharacteristicLookup {
    fn characteristic(&self, characteristic: Characteristic) -> Option<f64>;
}

impl<F> CharacteristicLookup for F
where
    F: Fn(Characteristic) -> Option<f64>,
{
    fn characteristic(&self, characteristic: Characteristic) -> Option<f64> {
        self(characteristic)
    }
}

/// For example the `allChars` map HomeKit hosts attach to messages
impl CharacteristicLookup for Attributes {
    fn characteristic(&self, characteristic: Characteristic) -> Option<f64> {
        self.get(characteristic.as_ref())
            .and_then(serde_json::Value::as_f64)
    }
}

/// Prefers the value from the message, falls back to the lookup.
pub(crate) fn current(
    in_message: Option<f64>,
    characteristic: Characteristic,
    lookup: Option<&dyn CharacteristicLookup>,
) -> Option<f64> {
    in_message.or_else(|| {
        let stored =
            lookup.and_then(|lookup| lookup.characteristic(characteristic));
        trace!("{characteristic} not in message, looked up: {stored:?}");
        stored
    })
}

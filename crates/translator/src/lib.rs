//! Translates device state between the zigbee (zigbee2mqtt) attribute names
//! and HomeKit characteristics.
//!
//! Messages are sparse: only the attributes that changed are sent. A
//! translation therefore only emits the fields it could derive from what was
//! present. Missing is not the same as zero or false.
//!
//! Only resolving the device kind can fail. Once a mapper is found every
//! message translates, values that can not be used are skipped.

use std::str::FromStr;

use serde_json::{Map, Value};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::instrument;

pub use characteristic::{Characteristic, CharacteristicLookup};
pub use error::Error;
pub use on_state::OnState;

mod characteristic;
mod conversion;
mod error;
mod homekit_to_zigbee;
mod on_state;
mod parse;
mod zigbee_to_homekit;

/// Attribute name to value, keys keep their insertion order
pub type Attributes = Map<String, Value>;

type Mapper =
    fn(&Attributes, Option<&dyn CharacteristicLookup>) -> Attributes;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Direction {
    ZigbeeToHomekit,
    HomekitToZigbee,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
pub enum DeviceKind {
    #[strum(serialize = "Light Bulb")]
    LightBulb,
    #[strum(serialize = "Motion Sensor")]
    MotionSensor,
}

impl DeviceKind {
    /// Kinds that have a mapper in the given direction
    pub fn supported(direction: Direction) -> impl Iterator<Item = DeviceKind> {
        DeviceKind::iter()
            .filter(move |kind| mapper(direction, *kind).is_some())
    }
}

fn mapper(direction: Direction, kind: DeviceKind) -> Option<Mapper> {
    match (direction, kind) {
        (Direction::ZigbeeToHomekit, DeviceKind::LightBulb) => {
            Some(zigbee_to_homekit::light_bulb)
        }
        (Direction::ZigbeeToHomekit, DeviceKind::MotionSensor) => {
            Some(zigbee_to_homekit::motion_sensor)
        }
        (Direction::HomekitToZigbee, DeviceKind::LightBulb) => {
            Some(homekit_to_zigbee::light_bulb)
        }
        (Direction::HomekitToZigbee, DeviceKind::MotionSensor) => None,
    }
}

/// A mapper resolved once for a configured device kind. Resolving fails
/// for kinds that have no mapper in the chosen direction.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    direction: Direction,
    kind: DeviceKind,
    mapper: Mapper,
}

impl Translator {
    #[instrument]
    pub fn new(direction: Direction, kind: &str) -> Result<Self, Error> {
        let unknown = || Error::UnknownDeviceKind {
            kind: kind.to_owned(),
            direction,
        };
        let parsed = DeviceKind::from_str(kind).map_err(|_| unknown())?;
        let mapper = mapper(direction, parsed).ok_or_else(unknown)?;

        Ok(Self {
            direction,
            kind: parsed,
            mapper,
        })
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// The lookup is only consulted by homekit to zigbee light bulbs, for
    /// color characteristics the message did not carry.
    #[instrument(
        skip_all,
        fields(direction = %self.direction, kind = %self.kind)
    )]
    pub fn translate(
        &self,
        attributes: &Attributes,
        lookup: Option<&dyn CharacteristicLookup>,
    ) -> Attributes {
        (self.mapper)(attributes, lookup)
    }
}

/// Resolves the mapper then translates. The device kind is checked before
/// any attribute is looked at.
pub fn translate(
    direction: Direction,
    kind: &str,
    attributes: &Attributes,
    lookup: Option<&dyn CharacteristicLookup>,
) -> Result<Attributes, Error> {
    Ok(Translator::new(direction, kind)?.translate(attributes, lookup))
}

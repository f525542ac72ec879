//! HomeKit characteristic changes turned into zigbee set payloads

pub(crate) use light_bulb::light_bulb;

mod light_bulb;

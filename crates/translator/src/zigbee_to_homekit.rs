//! Zigbee state reports turned into HomeKit characteristics

pub(crate) use light_bulb::light_bulb;
pub(crate) use motion_sensor::motion_sensor;

mod light_bulb;
mod motion_sensor;

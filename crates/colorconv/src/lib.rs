//! Conversions between CIE 1931 xy chromaticity, RGB and HSV.
//!
//! Everything here is a pure function. Degenerate input (`y == 0`, black)
//! never produces NaN, affected components are replaced by zero instead.

use serde::{Deserialize, Serialize};

pub use cie::{cie_to_rgb, rgb_to_cie};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};

mod cie;
mod hsv;

/// Brightness assumed by [`cie_to_hsv`] when none is given, on the
/// zigbee 1-255 scale
pub const DEFAULT_BRIGHTNESS: f64 = 255.;
/// Value assumed by [`hsv_to_cie`] when none is given, 0-100
pub const DEFAULT_VALUE: f64 = 100.;

/// Chromaticity coordinates, brightness independent. Serializes as the
/// zigbee `color` payload: `{"x": .., "y": ..}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CieColor {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees (0-360), saturation and value in percent (0-100)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvColor {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

#[must_use]
pub fn cie_to_hsv(x: f64, y: f64, brightness: Option<f64>) -> HsvColor {
    let brightness = brightness.unwrap_or(DEFAULT_BRIGHTNESS);
    rgb_to_hsv(cie_to_rgb(x, y, brightness))
}

/// The value is only used to pick the rgb intermediate, chromaticity does not
/// carry brightness so it is lost.
#[must_use]
pub fn hsv_to_cie(h: f64, s: f64, v: Option<f64>) -> CieColor {
    let v = v.unwrap_or(DEFAULT_VALUE);
    rgb_to_cie(hsv_to_rgb(h, s, v))
}

/// Scales a 0-1 channel to 0-255. NaN becomes zero.
pub(crate) fn to_channel(normalized: f64) -> u8 {
    let scaled = (normalized * 255.).round();
    if scaled.is_nan() {
        0
    } else {
        scaled.clamp(0., 255.) as u8
    }
}

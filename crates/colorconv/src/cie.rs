use crate::{to_channel, CieColor, RgbColor};

/// Highest brightness the conversion distinguishes, anything above is
/// treated as this.
const MAX_BRIGHTNESS: f64 = 254.;

/// Uses the "Wide RGB D65" gamut. Brightness is on the 1-255 scale.
///
/// A channel that ends up above one while being the largest pulls the other
/// two down with it (a soft clip, not proper gamut mapping).
#[must_use]
pub fn cie_to_rgb(x: f64, y: f64, brightness: f64) -> RgbColor {
    let z = 1.0 - x - y;
    let big_y = brightness.min(MAX_BRIGHTNESS) / MAX_BRIGHTNESS;
    let big_x = (big_y / y) * x;
    let big_z = (big_y / y) * z;

    let mut r = big_x * 1.656492 - big_y * 0.354851 - big_z * 0.255038;
    let mut g = -big_x * 0.707196 + big_y * 1.655397 + big_z * 0.036152;
    let mut b = big_x * 0.051713 - big_y * 0.121364 + big_z * 1.011530;

    // order matters, only the first matching branch may run
    if r > b && r > g && r > 1.0 {
        g /= r;
        b /= r;
        r = 1.0;
    } else if g > b && g > r && g > 1.0 {
        r /= g;
        b /= g;
        g = 1.0;
    } else if b > r && b > g && b > 1.0 {
        r /= b;
        g /= b;
        b = 1.0;
    }

    RgbColor {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

/// Drops brightness, black maps to (0, 0).
#[must_use]
pub fn rgb_to_cie(RgbColor { r, g, b }: RgbColor) -> CieColor {
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));

    let big_x = r * 0.664511 + g * 0.154324 + b * 0.162028;
    let big_y = r * 0.283881 + g * 0.668433 + b * 0.047685;
    let big_z = r * 0.000088 + g * 0.072310 + b * 0.986039;

    let sum = big_x + big_y + big_z;
    CieColor {
        x: zero_if_nan(big_x / sum),
        y: zero_if_nan(big_y / sum),
    }
}

fn zero_if_nan(val: f64) -> f64 {
    if val.is_nan() {
        0.0
    } else {
        val
    }
}

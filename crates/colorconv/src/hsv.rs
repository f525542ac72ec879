use crate::{to_channel, HsvColor, RgbColor};

#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> RgbColor {
    let h = h / 360.;
    let s = s / 100.;
    let v = v / 100.;

    let sector = (h * 6.).floor();
    let f = h * 6. - sector;
    let p = v * (1. - s);
    let q = v * (1. - f * s);
    let t = v * (1. - (1. - f) * s);

    // rem_euclid so negative hues wrap around instead of falling through
    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    RgbColor {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

#[must_use]
pub fn rgb_to_hsv(RgbColor { r, g, b }: RgbColor) -> HsvColor {
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let s = if max == 0. { 0. } else { d / max };
    let v = max / 255.;

    // When channels tie for max the first matching guard wins
    #[allow(clippy::float_cmp)]
    let h = if max == min {
        0.
    } else if max == r {
        let wrap = if g < b { 6. } else { 0. };
        ((g - b) + d * wrap) / (6. * d)
    } else if max == g {
        ((b - r) + d * 2.) / (6. * d)
    } else {
        ((r - g) + d * 4.) / (6. * d)
    };

    HsvColor {
        h: h * 360.,
        s: s * 100.,
        v: v * 100.,
    }
}

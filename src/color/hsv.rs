use super::Rgb;

/// Below this chroma a color counts as gray.
const ACHROMATIC_DELTA: f64 = 0.0001;

/// Hue, saturation and value; all three in `[0, 1]` for in-gamut colors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    /// Hue as a fraction of a full turn, `[0, 1)`.
    pub h: f64,
    /// Saturation; exactly `0.0` for grays.
    pub s: f64,
    /// Value (the largest channel).
    pub v: f64,
}

impl Rgb {
    /// Convert to HSV.
    pub fn to_hsv(self) -> Hsv {
        let max = self.max();
        let delta = max - self.min();

        if delta > ACHROMATIC_DELTA {
            let mut h = self.hue_sector(max, delta);
            if h < 0.0 {
                h += 6.0;
            }
            Hsv {
                h: h / 6.0,
                s: delta / max,
                v: max,
            }
        } else {
            Hsv {
                h: 0.0,
                s: 0.0,
                v: max,
            }
        }
    }
}

impl Hsv {
    /// Convert back to RGB.
    pub fn to_rgb(self) -> Rgb {
        let Hsv { h, s, v } = self;
        if s == 0.0 {
            return Rgb::new(v, v, v);
        }

        let hue = if h == 1.0 { 0.0 } else { h } * 6.0;
        let sector = hue.floor();
        let f = hue - sector;
        let w = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match (sector as i64).rem_euclid(6) {
            0 => Rgb::new(v, t, w),
            1 => Rgb::new(q, v, w),
            2 => Rgb::new(w, v, t),
            3 => Rgb::new(w, q, v),
            4 => Rgb::new(t, w, v),
            _ => Rgb::new(v, w, q),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsv.rs"]
mod tests;

use super::Rgb;

/// Hue, saturation and lightness.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    /// Hue as a fraction of a full turn, `[0, 1)`; `0.0` when undefined.
    pub h: f64,
    /// Saturation; exactly `0.0` for grays.
    pub s: f64,
    /// Lightness, the midpoint of the largest and smallest channel.
    pub l: f64,
}

impl Rgb {
    /// Convert to HSL.
    pub fn to_hsl(self) -> Hsl {
        let max = self.max();
        let min = self.min();
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let delta = max - min;
        let s = if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let mut h = self.hue_sector(max, delta) / 6.0;
        if h < 0.0 {
            h += 1.0;
        }
        Hsl { h, s, l }
    }
}

impl Hsl {
    /// Convert back to RGB.
    pub fn to_rgb(self) -> Rgb {
        let Hsl { h, s, l } = self;
        if s == 0.0 {
            return Rgb::new(l, l, l);
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;

        Rgb::new(
            channel(m1, m2, h * 6.0 + 2.0),
            channel(m1, m2, h * 6.0),
            channel(m1, m2, h * 6.0 - 2.0),
        )
    }
}

fn channel(m1: f64, m2: f64, mut hue: f64) -> f64 {
    if hue > 6.0 {
        hue -= 6.0;
    } else if hue < 0.0 {
        hue += 6.0;
    }

    if hue < 1.0 {
        m1 + (m2 - m1) * hue
    } else if hue < 3.0 {
        m2
    } else if hue < 4.0 {
        m1 + (m2 - m1) * (4.0 - hue)
    } else {
        m1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsl.rs"]
mod tests;

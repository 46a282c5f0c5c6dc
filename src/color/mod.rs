//! RGB, HSV and HSL color triples used by the component layer modes.
//!
//! Conversions run in `f64` and follow the legacy host's conventions: hue is normalized to
//! `[0, 1)`, achromatic colors report zero saturation and zero hue.

mod hsl;
mod hsv;

pub use hsl::Hsl;
pub use hsv::Hsv;

/// Red, green and blue channels without alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Build from three channels.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Widen an `f32` triple in `R, G, B` order.
    pub fn from_f32(c: [f32; 3]) -> Self {
        Self {
            r: f64::from(c[0]),
            g: f64::from(c[1]),
            b: f64::from(c[2]),
        }
    }

    /// Channels as an `f32` triple in `R, G, B` order.
    pub fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    pub(crate) fn max(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    pub(crate) fn min(self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Hue sector shared by HSV and HSL: `[0, 6)` before normalization.
    pub(crate) fn hue_sector(self, max: f64, delta: f64) -> f64 {
        if self.r == max {
            (self.g - self.b) / delta
        } else if self.g == max {
            2.0 + (self.b - self.r) / delta
        } else {
            4.0 + (self.r - self.g) / delta
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/rgb.rs"]
mod tests;

//! Component laws: swap one or two HSV/HSL components of the base for the layer's.

use crate::color::Rgb;

use super::channel::Rgb3;

/// Base saturation and value with the layer's hue.
///
/// A gray layer (zero saturation) leaves the base untouched, so black and gray layer pixels
/// never paint the base with hue 0 (red).
pub(crate) fn hue(base: Rgb3, layer: Rgb3) -> Rgb3 {
    let layer_hsv = Rgb::from_f32(layer).to_hsv();
    let mut out = Rgb::from_f32(base).to_hsv();
    if layer_hsv.s != 0.0 {
        out.h = layer_hsv.h;
    }
    out.to_rgb().to_f32()
}

pub(crate) fn saturation(base: Rgb3, layer: Rgb3) -> Rgb3 {
    let layer_hsv = Rgb::from_f32(layer).to_hsv();
    let mut out = Rgb::from_f32(base).to_hsv();
    out.s = layer_hsv.s;
    out.to_rgb().to_f32()
}

pub(crate) fn value(base: Rgb3, layer: Rgb3) -> Rgb3 {
    let layer_hsv = Rgb::from_f32(layer).to_hsv();
    let mut out = Rgb::from_f32(base).to_hsv();
    out.v = layer_hsv.v;
    out.to_rgb().to_f32()
}

/// Layer hue and saturation over base lightness (HSL).
pub(crate) fn color(base: Rgb3, layer: Rgb3) -> Rgb3 {
    let layer_hsl = Rgb::from_f32(layer).to_hsl();
    let mut out = Rgb::from_f32(base).to_hsl();
    out.h = layer_hsl.h;
    out.s = layer_hsl.s;
    out.to_rgb().to_f32()
}

#[cfg(test)]
#[path = "../../tests/unit/modes/component.rs"]
mod tests;

//! Alpha bookkeeping shared by every point layer mode.
//!
//! A mode only decides the blended color. How much of that color reaches the output is fixed
//! here: the overlay's coverage is `min(base.a, layer.a) * opacity * mask`, accumulated "over"
//! the base alpha, and the blended color is mixed back into the base by the ratio of the two.
//!
//! Opacity is `f64`. The opacity product, the over step and the final mix are evaluated in `f64`
//! and rounded back to `f32`; the ratio itself is an `f32` quotient.

/// Effective overlay coverage at one pixel.
#[inline(always)]
pub(crate) fn composite_alpha(base_a: f32, layer_a: f32, opacity: f64, mask: Option<f32>) -> f32 {
    let comp = (f64::from(base_a.min(layer_a)) * opacity) as f32;
    match mask {
        Some(m) => comp * m,
        None => comp,
    }
}

/// Alpha after laying `comp_alpha` over `base_a`.
#[inline(always)]
pub(crate) fn over_alpha(base_a: f32, comp_alpha: f32) -> f32 {
    let base_a = f64::from(base_a);
    (base_a + (1.0 - base_a) * f64::from(comp_alpha)) as f32
}

/// Fraction of the output color taken from the blended result.
///
/// `None` when nothing is composited (either alpha is zero); the base color passes through.
#[inline(always)]
pub(crate) fn mix_ratio(comp_alpha: f32, new_alpha: f32) -> Option<f32> {
    if comp_alpha == 0.0 || new_alpha == 0.0 {
        None
    } else {
        Some(comp_alpha / new_alpha)
    }
}

#[inline(always)]
pub(crate) fn mix(blended: f32, base: f32, ratio: f32) -> f32 {
    let ratio = f64::from(ratio);
    (f64::from(blended) * ratio + f64::from(base) * (1.0 - ratio)) as f32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

//! The point layer-mode compositing kernel.
//!
//! Buffers are flat straight-alpha `f32` RGBA, `4 * samples` values long. For each sample:
//!
//! 1. `comp_alpha = min(in.a, layer.a) * opacity * mask`
//! 2. `new_alpha = in.a + (1 - in.a) * comp_alpha`
//! 3. if either is zero the base color passes through unchanged
//! 4. otherwise `out.rgb = law(in.rgb, layer.rgb) * ratio + in.rgb * (1 - ratio)` with
//!    `ratio = comp_alpha / new_alpha`
//! 5. `out.a = in.a`
//!
//! Samples are independent, so the same span routine backs the sequential entry points here and
//! the chunked rayon driver in [`parallel`].

use crate::foundation::core::{ALPHA, CHANNELS, Pixel, check_spans, pixel_len};
use crate::foundation::error::LayerModeResult;
use crate::foundation::math;
use crate::modes::channel::Rgb3;
use crate::modes::{LayerMode, with_law};

/// Chunked rayon driver over the same span routine.
pub mod parallel;

#[inline(always)]
fn rgb(px: &[f32]) -> Rgb3 {
    [px[0], px[1], px[2]]
}

#[inline(always)]
fn composite_one<F>(base: &[f32], layer: &[f32], mask: Option<f32>, opacity: f64, law: F) -> Pixel
where
    F: Fn(Rgb3, Rgb3) -> Rgb3,
{
    let comp_alpha = math::composite_alpha(base[ALPHA], layer[ALPHA], opacity, mask);
    let new_alpha = math::over_alpha(base[ALPHA], comp_alpha);

    let mut out = [base[0], base[1], base[2], base[ALPHA]];
    if let Some(ratio) = math::mix_ratio(comp_alpha, new_alpha) {
        let blended = law(rgb(base), rgb(layer));
        for c in 0..ALPHA {
            out[c] = math::mix(blended[c], base[c], ratio);
        }
    }
    out
}

/// Composite equal-length spans; callers have already checked the shapes.
#[inline(always)]
pub(crate) fn composite_span<F>(
    base: &[f32],
    layer: &[f32],
    mask: Option<&[f32]>,
    out: &mut [f32],
    opacity: f64,
    law: F,
) where
    F: Fn(Rgb3, Rgb3) -> Rgb3 + Copy,
{
    for (i, ((o, b), l)) in out
        .chunks_exact_mut(CHANNELS)
        .zip(base.chunks_exact(CHANNELS))
        .zip(layer.chunks_exact(CHANNELS))
        .enumerate()
    {
        let m = mask.map(|m| m[i]);
        o.copy_from_slice(&composite_one(b, l, m, opacity, law));
    }
}

/// Same as [`composite_span`] with the base doubling as output.
///
/// Each pixel is read in full before it is overwritten.
#[inline(always)]
pub(crate) fn composite_span_in_place<F>(
    base_out: &mut [f32],
    layer: &[f32],
    mask: Option<&[f32]>,
    opacity: f64,
    law: F,
) where
    F: Fn(Rgb3, Rgb3) -> Rgb3 + Copy,
{
    for (i, (px, l)) in base_out
        .chunks_exact_mut(CHANNELS)
        .zip(layer.chunks_exact(CHANNELS))
        .enumerate()
    {
        let m = mask.map(|m| m[i]);
        let out = composite_one(px, l, m, opacity, law);
        px.copy_from_slice(&out);
    }
}

/// Composite `samples` pixels of `layer` onto `base` into `out` using `mode`.
///
/// `mask`, when present, holds one coverage value per sample; `None` behaves like all ones.
/// `opacity` is used as given, without clamping. Buffers may be longer than needed; only the
/// first `samples` pixels are read and written. `samples == 0` writes nothing.
///
/// Returns [`crate::LayerModeError::Validation`] when a buffer is too short.
pub fn process(
    mode: LayerMode,
    base: &[f32],
    layer: &[f32],
    mask: Option<&[f32]>,
    out: &mut [f32],
    opacity: f64,
    samples: usize,
) -> LayerModeResult<()> {
    check_spans(
        base.len(),
        layer.len(),
        out.len(),
        mask.map(<[f32]>::len),
        samples,
    )?;
    if samples == 0 {
        return Ok(());
    }

    let n = pixel_len(samples)?;
    let mask = mask.map(|m| &m[..samples]);
    with_law!(mode, law => {
        composite_span(&base[..n], &layer[..n], mask, &mut out[..n], opacity, law)
    });
    Ok(())
}

/// [`process`] with `base_out` as both the base input and the output.
pub fn process_in_place(
    mode: LayerMode,
    base_out: &mut [f32],
    layer: &[f32],
    mask: Option<&[f32]>,
    opacity: f64,
    samples: usize,
) -> LayerModeResult<()> {
    check_spans(
        base_out.len(),
        layer.len(),
        base_out.len(),
        mask.map(<[f32]>::len),
        samples,
    )?;
    if samples == 0 {
        return Ok(());
    }

    let n = pixel_len(samples)?;
    let mask = mask.map(|m| &m[..samples]);
    with_law!(mode, law => {
        composite_span_in_place(&mut base_out[..n], &layer[..n], mask, opacity, law)
    });
    Ok(())
}

/// Composite a single pixel; handy for previews and tests.
pub fn composite_pixel(
    mode: LayerMode,
    base: Pixel,
    layer: Pixel,
    mask: Option<f32>,
    opacity: f64,
) -> Pixel {
    with_law!(mode, law => composite_one(&base, &layer, mask, opacity, law))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/process.rs"]
mod tests;

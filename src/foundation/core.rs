use crate::foundation::error::{LayerModeError, LayerModeResult};

/// Number of interleaved channels per pixel (`R, G, B, A`).
pub const CHANNELS: usize = 4;

/// Index of the alpha channel inside a pixel.
pub const ALPHA: usize = 3;

/// One straight-alpha float pixel, channel order `R, G, B, A`.
pub type Pixel = [f32; CHANNELS];

/// Rectangle of interest handed to an operation by the processing graph.
///
/// Kernels never read it; it only travels alongside the buffers so callers can correlate a
/// `process` call with the tile it was scheduled for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Region {
    /// Build a region from its origin and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered; negative extents count as empty.
    pub fn area(self) -> u64 {
        let w = u64::try_from(self.width).unwrap_or(0);
        let h = u64::try_from(self.height).unwrap_or(0);
        w * h
    }
}

/// Number of `f32` values spanned by `samples` pixels.
pub(crate) fn pixel_len(samples: usize) -> LayerModeResult<usize> {
    samples
        .checked_mul(CHANNELS)
        .ok_or_else(|| LayerModeError::validation("sample count overflows buffer length"))
}

/// Check that every buffer covers at least `samples` pixels (and mask values).
pub(crate) fn check_spans(
    base_len: usize,
    layer_len: usize,
    out_len: usize,
    mask_len: Option<usize>,
    samples: usize,
) -> LayerModeResult<()> {
    let need = pixel_len(samples)?;
    for (what, len) in [("base", base_len), ("layer", layer_len), ("out", out_len)] {
        if len < need {
            return Err(LayerModeError::validation(format!(
                "{what} buffer holds {len} floats, {samples} samples need {need}"
            )));
        }
    }
    if let Some(len) = mask_len
        && len < samples
    {
        return Err(LayerModeError::validation(format!(
            "mask buffer holds {len} values, expected {samples}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

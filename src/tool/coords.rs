/// Map a picked pixel coordinate onto the unit conventions of well-known operation parameters.
///
/// `raw` is relative to the selection bounds and `extent` is the bounds' size along the same
/// axis (positive). Ranges are matched exactly:
///
/// - `[0, 1]` and `[-1, 2]`: `raw / extent`
/// - `[-1, 1]`: `raw * 2 / extent - 1`
/// - anything else: `raw` unchanged
pub fn normalize_coord(range_min: f64, range_max: f64, raw: f64, extent: f64) -> f64 {
    let range = (range_min, range_max);
    if range == (0.0, 1.0) || range == (-1.0, 2.0) {
        raw / extent
    } else if range == (-1.0, 1.0) {
        raw * 2.0 / extent - 1.0
    } else {
        raw
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tool/coords.rs"]
mod tests;

//! Per-channel laws: each output channel depends only on the same channel of base and layer.

pub(crate) type Rgb3 = [f32; 3];

#[inline(always)]
fn each(base: Rgb3, layer: Rgb3, f: impl Fn(f32, f32) -> f32) -> Rgb3 {
    [
        f(base[0], layer[0]),
        f(base[1], layer[1]),
        f(base[2], layer[2]),
    ]
}

pub(crate) fn multiply(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| b * l)
}

pub(crate) fn screen(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| 1.0 - (1.0 - b) * (1.0 - l))
}

pub(crate) fn overlay(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| b * (b + 2.0 * l * (1.0 - b)))
}

pub(crate) fn difference(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| (b - l).abs())
}

pub(crate) fn addition(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| (b + l).min(1.0))
}

pub(crate) fn subtract(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| (b - l).max(0.0))
}

pub(crate) fn darken_only(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| b.min(l))
}

pub(crate) fn lighten_only(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| b.max(l))
}

pub(crate) fn divide(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| {
        if l <= 0.0 {
            if b > 0.0 { 1.0 } else { 0.0 }
        } else {
            (b / l).min(1.0)
        }
    })
}

pub(crate) fn dodge(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| {
        if l >= 1.0 {
            1.0
        } else {
            (b / (1.0 - l)).min(1.0)
        }
    })
}

pub(crate) fn burn(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| {
        if l <= 0.0 {
            0.0
        } else {
            1.0 - ((1.0 - b) / l).min(1.0)
        }
    })
}

/// Multiply below mid-gray, screen above; the layer channel picks the branch.
pub(crate) fn hardlight(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| {
        if l > 0.5 {
            let inv = (1.0 - b) * (1.0 - (l - 0.5) * 2.0);
            (1.0 - inv).min(1.0)
        } else {
            (b * l * 2.0).min(1.0)
        }
    })
}

pub(crate) fn softlight(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| {
        let multiply = b * l;
        let screen = 1.0 - (1.0 - b) * (1.0 - l);
        (1.0 - b) * multiply + b * screen
    })
}

pub(crate) fn grain_extract(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| (b - l + 0.5).clamp(0.0, 1.0))
}

pub(crate) fn grain_merge(base: Rgb3, layer: Rgb3) -> Rgb3 {
    each(base, layer, |b, l| (b + l - 0.5).clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/modes/channel.rs"]
mod tests;

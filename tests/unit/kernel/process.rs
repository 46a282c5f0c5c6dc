use super::*;

fn pixels(n: usize, f: impl Fn(usize) -> Pixel) -> Vec<f32> {
    (0..n).flat_map(f).collect()
}

fn base_buf(n: usize) -> Vec<f32> {
    pixels(n, |i| {
        let t = i as f32 / n.max(1) as f32;
        [0.1 + 0.8 * t, 0.6 - 0.5 * t, 0.3, 0.25 + 0.75 * t]
    })
}

fn layer_buf(n: usize) -> Vec<f32> {
    pixels(n, |i| {
        let t = i as f32 / n.max(1) as f32;
        [0.9 - 0.7 * t, 0.2 + 0.3 * t, 0.7, 1.0 - 0.5 * t]
    })
}

#[test]
fn alpha_passes_through_for_every_mode() {
    let n = 16;
    let base = base_buf(n);
    let layer = layer_buf(n);
    let mut out = vec![0.0; n * CHANNELS];
    for mode in LayerMode::ALL {
        process(mode, &base, &layer, None, &mut out, 0.8, n).unwrap();
        for (o, b) in out.chunks_exact(CHANNELS).zip(base.chunks_exact(CHANNELS)) {
            assert_eq!(o[ALPHA], b[ALPHA], "{mode}");
        }
    }
}

#[test]
fn zero_opacity_or_zero_mask_is_identity() {
    let n = 8;
    let base = base_buf(n);
    let layer = layer_buf(n);
    let zeros = vec![0.0; n];
    for mode in LayerMode::ALL {
        let mut out = vec![-1.0; n * CHANNELS];
        process(mode, &base, &layer, None, &mut out, 0.0, n).unwrap();
        assert_eq!(out, base, "{mode} opacity 0");

        let mut out = vec![-1.0; n * CHANNELS];
        process(mode, &base, &layer, Some(&zeros), &mut out, 1.0, n).unwrap();
        assert_eq!(out, base, "{mode} mask 0");
    }
}

#[test]
fn opaque_inputs_at_full_opacity_yield_the_blended_color() {
    let base = [0.2, 0.4, 0.8, 1.0];
    let layer = [0.6, 0.1, 0.3, 1.0];
    for mode in LayerMode::ALL {
        let out = composite_pixel(mode, base, layer, None, 1.0);
        let blended = mode.blend([0.2, 0.4, 0.8], [0.6, 0.1, 0.3]);
        assert_eq!([out[0], out[1], out[2]], blended, "{mode}");
        assert_eq!(out[ALPHA], 1.0);
    }
}

#[test]
fn no_mask_matches_all_ones_mask() {
    let n = 13;
    let base = base_buf(n);
    let layer = layer_buf(n);
    let ones = vec![1.0; n];
    for mode in LayerMode::ALL {
        let mut a = vec![0.0; n * CHANNELS];
        let mut b = vec![0.0; n * CHANNELS];
        process(mode, &base, &layer, None, &mut a, 0.7, n).unwrap();
        process(mode, &base, &layer, Some(&ones), &mut b, 0.7, n).unwrap();
        assert_eq!(a, b, "{mode}");
    }
}

#[test]
fn in_place_matches_separate_output() {
    let layer_src = layer_buf(32);
    let base_src = base_buf(32);
    let mask: Vec<f32> = (0..32).map(|i| (i % 5) as f32 / 4.0).collect();
    for n in [1usize, 2, 7, 32] {
        for mode in LayerMode::ALL {
            let mut out = vec![0.0; n * CHANNELS];
            process(mode, &base_src, &layer_src, Some(&mask), &mut out, 0.9, n).unwrap();

            let mut in_place = base_src[..n * CHANNELS].to_vec();
            process_in_place(mode, &mut in_place, &layer_src, Some(&mask), 0.9, n).unwrap();
            assert_eq!(out, in_place, "{mode} samples {n}");
        }
    }
}

#[test]
fn gray_base_under_red_hue_layer_stays_gray() {
    let base = vec![0.2, 0.2, 0.2, 1.0];
    let layer = vec![1.0, 0.0, 0.0, 1.0];
    let mut out = vec![0.0; 4];
    process(LayerMode::Hue, &base, &layer, None, &mut out, 1.0, 1).unwrap();
    assert_eq!(out, vec![0.2, 0.2, 0.2, 1.0]);
}

#[test]
fn hue_with_gray_layer_leaves_base_unchanged() {
    let base = [0.2, 0.4, 0.8, 1.0];
    for gray in [0.0, 0.35, 1.0] {
        let out = composite_pixel(LayerMode::Hue, base, [gray, gray, gray, 1.0], None, 1.0);
        for c in 0..ALPHA {
            assert!((out[c] - base[c]).abs() < 1e-6, "gray {gray}: {out:?}");
        }
    }
}

#[test]
fn zero_samples_writes_nothing() {
    let mut out = vec![7.0; 8];
    process(LayerMode::Hue, &[], &[], None, &mut out, 1.0, 0).unwrap();
    assert_eq!(out, vec![7.0; 8]);

    let mut buf: Vec<f32> = Vec::new();
    process_in_place(LayerMode::Multiply, &mut buf, &[], Some(&[]), 1.0, 0).unwrap();
}

#[test]
fn transparent_base_passes_through_even_under_opaque_layer() {
    // min(in.a, layer.a) is zero, so nothing is composited.
    let base = [0.3, 0.5, 0.7, 0.0];
    let layer = [1.0, 0.0, 0.0, 1.0];
    for mode in LayerMode::ALL {
        assert_eq!(composite_pixel(mode, base, layer, None, 1.0), base, "{mode}");
    }
}

#[test]
fn partial_coverage_mixes_by_ratio() {
    // in.a = 1, comp_alpha = 0.5 -> new_alpha = 1, ratio = 0.5.
    let base = [0.2, 0.4, 0.6, 1.0];
    let layer = [0.5, 0.5, 0.5, 1.0];
    let out = composite_pixel(LayerMode::Multiply, base, layer, Some(0.5), 1.0);
    let expect = [0.15, 0.3, 0.45, 1.0];
    for c in 0..CHANNELS {
        assert!((out[c] - expect[c]).abs() < 1e-6, "{out:?}");
    }

    // in.a = 0.5, comp_alpha = 0.5 -> new_alpha = 0.75, ratio = 2/3.
    let base = [0.0, 0.0, 0.0, 0.5];
    let layer = [1.0, 1.0, 1.0, 1.0];
    let out = composite_pixel(LayerMode::Screen, base, layer, None, 1.0);
    for c in 0..ALPHA {
        assert!((out[c] - 2.0 / 3.0).abs() < 1e-6, "{out:?}");
    }
    assert_eq!(out[ALPHA], 0.5);
}

#[test]
fn only_the_first_samples_pixels_are_touched() {
    let base = base_buf(4);
    let layer = layer_buf(4);
    let mut out = vec![9.0; 4 * CHANNELS];
    process(LayerMode::Difference, &base, &layer, None, &mut out, 1.0, 2).unwrap();
    assert!(out[..2 * CHANNELS].iter().all(|v| *v != 9.0));
    assert!(out[2 * CHANNELS..].iter().all(|v| *v == 9.0));
}

#[test]
fn short_buffers_are_rejected() {
    let base = base_buf(2);
    let layer = layer_buf(1);
    let mut out = vec![0.0; 2 * CHANNELS];
    let err = process(LayerMode::Hue, &base, &layer, None, &mut out, 1.0, 2).unwrap_err();
    assert!(matches!(err, crate::LayerModeError::Validation(_)));

    let layer = layer_buf(2);
    let err = process(LayerMode::Hue, &base, &layer, Some(&[1.0]), &mut out, 1.0, 2).unwrap_err();
    assert!(err.to_string().contains("mask"));

    let mut short = base_buf(1);
    assert!(process_in_place(LayerMode::Hue, &mut short, &layer, None, 1.0, 2).is_err());
}

#[test]
fn opacity_is_not_clamped() {
    // comp_alpha = 2, new_alpha = 1 + 0 * 2 = 1, ratio = 2: extrapolates past the blended color.
    let base = [0.5, 0.5, 0.5, 1.0];
    let layer = [0.0, 0.0, 0.0, 1.0];
    let out = composite_pixel(LayerMode::Multiply, base, layer, None, 2.0);
    assert!((out[0] - -0.5).abs() < 1e-6, "{out:?}");
}

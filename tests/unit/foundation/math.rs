use super::*;

#[test]
fn composite_alpha_takes_the_smaller_alpha() {
    assert_eq!(composite_alpha(0.5, 1.0, 1.0, None), 0.5);
    assert_eq!(composite_alpha(1.0, 0.25, 1.0, None), 0.25);
    assert_eq!(composite_alpha(1.0, 1.0, 0.5, Some(0.5)), 0.25);
}

#[test]
fn mask_of_one_matches_no_mask() {
    for (a, b, o) in [(0.3, 0.9, 0.7), (1.0, 1.0, 1.0), (0.0, 0.5, 0.5)] {
        assert_eq!(composite_alpha(a, b, o, None), composite_alpha(a, b, o, Some(1.0)));
    }
}

#[test]
fn over_alpha_of_opaque_base_stays_opaque() {
    assert_eq!(over_alpha(1.0, 0.3), 1.0);
    assert_eq!(over_alpha(0.0, 0.3), 0.3);
    assert!((over_alpha(0.5, 0.5) - 0.75).abs() < 1e-6);
}

#[test]
fn mix_ratio_is_none_when_nothing_is_composited() {
    assert_eq!(mix_ratio(0.0, 1.0), None);
    assert_eq!(mix_ratio(0.5, 0.0), None);
    assert_eq!(mix_ratio(0.5, 1.0), Some(0.5));
    assert_eq!(mix_ratio(1.0, 1.0), Some(1.0));
}

#[test]
fn mix_endpoints() {
    assert_eq!(mix(0.8, 0.2, 1.0), 0.8);
    assert_eq!(mix(0.8, 0.2, 0.0), 0.2);
    assert!((mix(1.0, 0.0, 0.25) - 0.25).abs() < 1e-6);
}

#[test]
fn opacity_product_is_taken_in_double() {
    let opacity = 1.0_f64 / 3.0;
    let expected = (f64::from(0.3_f32) * opacity) as f32;
    assert_eq!(composite_alpha(0.3, 0.9, opacity, None), expected);
    assert_eq!(composite_alpha(1.0, 1.0, 0.1, None), 0.1_f64 as f32);
}

#[test]
fn mix_and_over_are_evaluated_in_double() {
    for (blended, base, ratio) in [(0.7_f32, 0.1_f32, 0.3_f32), (0.123, 0.987, 0.6667), (1.0, 0.0, 0.1)] {
        let r = f64::from(ratio);
        let expected = (f64::from(blended) * r + f64::from(base) * (1.0 - r)) as f32;
        assert_eq!(mix(blended, base, ratio), expected);
    }
    let expected = (f64::from(0.35_f32) + (1.0 - f64::from(0.35_f32)) * f64::from(0.45_f32)) as f32;
    assert_eq!(over_alpha(0.35, 0.45), expected);
}

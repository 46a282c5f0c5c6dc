use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn red_is_half_lightness_full_saturation() {
    let hsl = Rgb::new(1.0, 0.0, 0.0).to_hsl();
    assert_eq!(hsl, Hsl { h: 0.0, s: 1.0, l: 0.5 });
}

#[test]
fn magenta_hue_wraps_into_unit_range() {
    let hsl = Rgb::new(1.0, 0.0, 0.5).to_hsl();
    assert!(hsl.h > 0.9 && hsl.h < 1.0);
}

#[test]
fn grays_have_zero_saturation() {
    let hsl = Rgb::new(0.3, 0.3, 0.3).to_hsl();
    assert_eq!(hsl.s, 0.0);
    assert!(approx(hsl.l, 0.3));
    assert_eq!(hsl.to_rgb(), Rgb::new(0.3, 0.3, 0.3));
}

#[test]
fn round_trips_light_and_dark_colors() {
    for rgb in [
        Rgb::new(0.9, 0.8, 0.7),
        Rgb::new(0.1, 0.2, 0.05),
        Rgb::new(0.0, 0.5, 1.0),
        Rgb::new(0.75, 0.25, 0.5),
    ] {
        let back = rgb.to_hsl().to_rgb();
        assert!(
            approx(back.r, rgb.r) && approx(back.g, rgb.g) && approx(back.b, rgb.b),
            "{rgb:?} -> {back:?}"
        );
    }
}

use super::*;

#[test]
fn names_are_unique() {
    let mut short: Vec<_> = LayerMode::ALL.iter().map(|m| m.short_name()).collect();
    let mut ops: Vec<_> = LayerMode::ALL.iter().map(|m| m.operation_name()).collect();
    short.sort_unstable();
    short.dedup();
    ops.sort_unstable();
    ops.dedup();
    assert_eq!(short.len(), LayerMode::ALL.len());
    assert_eq!(ops.len(), LayerMode::ALL.len());
}

#[test]
fn every_mode_resolves_by_short_and_operation_name() {
    for mode in LayerMode::ALL {
        assert_eq!(LayerMode::from_name(mode.short_name()).unwrap(), mode);
        assert_eq!(LayerMode::from_name(mode.operation_name()).unwrap(), mode);
        assert!(mode.operation_name().starts_with("gimp:"));
        assert!(mode.description().starts_with("GIMP "));
    }
}

#[test]
fn from_name_is_lenient_about_case_and_separators() {
    assert_eq!(LayerMode::from_name("Hard_Light").unwrap(), LayerMode::HardLight);
    assert_eq!(LayerMode::from_name("hardlight").unwrap(), LayerMode::HardLight);
    assert_eq!(LayerMode::from_name(" HUE ").unwrap(), LayerMode::Hue);
    assert_eq!(
        "gimp:grain-merge-mode".parse::<LayerMode>().unwrap(),
        LayerMode::GrainMerge
    );
}

#[test]
fn unknown_names_are_rejected() {
    let err = LayerMode::from_name("gimp:normal-mode").unwrap_err();
    assert!(matches!(err, LayerModeError::UnknownMode(_)));
    assert!(LayerMode::from_name("").is_err());
    assert!(LayerMode::from_name("gimp:-mode").is_err());
}

#[test]
fn hue_mode_metadata() {
    assert_eq!(LayerMode::Hue.operation_name(), "gimp:hue-mode");
    assert_eq!(LayerMode::Hue.description(), "GIMP hue mode operation");
    assert_eq!(LayerMode::Hue.to_string(), "hue");
}

#[test]
fn serde_uses_short_names_and_accepts_operation_names() {
    let json = serde_json::to_string(&LayerMode::DarkenOnly).unwrap();
    assert_eq!(json, "\"darken-only\"");

    let m: LayerMode = serde_json::from_str("\"gimp:softlight-mode\"").unwrap();
    assert_eq!(m, LayerMode::SoftLight);

    assert!(serde_json::from_str::<LayerMode>("\"sepia\"").is_err());
}

#[test]
fn blend_dispatches_to_the_mode_law() {
    let base = [0.2, 0.4, 0.8];
    let layer = [0.6, 0.5, 0.1];
    assert_eq!(LayerMode::Multiply.blend(base, layer), channel::multiply(base, layer));
    assert_eq!(LayerMode::Hue.blend(base, layer), component::hue(base, layer));
    assert_eq!(LayerMode::HardLight.blend(base, layer), channel::hardlight(base, layer));
}

#[test]
fn component_modes_are_flagged() {
    let component: Vec<_> = LayerMode::ALL
        .into_iter()
        .filter(|m| m.is_component())
        .collect();
    assert_eq!(
        component,
        vec![
            LayerMode::Hue,
            LayerMode::Saturation,
            LayerMode::Color,
            LayerMode::Value
        ]
    );
}

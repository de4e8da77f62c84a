use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::Elastic { bounciness: 0.7 },
];

#[test]
fn endpoints_are_pinned() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped_and_nan_is_zero() {
    assert_eq!(Ease::Linear.apply(-3.0), 0.0);
    assert_eq!(Ease::Linear.apply(7.0), 1.0);
    assert_eq!(Ease::OutCubic.apply(f64::NAN), 0.0);
}

#[test]
fn elastic_overshoots_and_is_flagged_non_monotonic() {
    let e = Ease::Elastic { bounciness: 0.7 };
    let peak = (1..100)
        .map(|i| e.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
    assert!(!e.is_monotonic());
    assert!(Ease::OutCubic.is_monotonic());
    assert!(Ease::Elastic { bounciness: 0.0 }.is_monotonic());
}

#[test]
fn serde_names_are_snake_case() {
    let json = serde_json::to_string(&Ease::InOutCubic).unwrap();
    assert_eq!(json, "\"in_out_cubic\"");
    let e: Ease = serde_json::from_str(r#"{"elastic":{"bounciness":1.5}}"#).unwrap();
    assert_eq!(e, Ease::Elastic { bounciness: 1.5 });
}

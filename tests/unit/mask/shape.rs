use super::*;

#[test]
fn keep_variants_map_to_their_base_shape() {
    assert_eq!(Shape::RectangleAndKeep.base(), Shape::Rectangle);
    assert_eq!(Shape::CircleAndKeep.base(), Shape::Circle);
    assert_eq!(Shape::Ellipse.base(), Shape::Ellipse);
    assert!(Shape::CircleAndKeep.keeps_previous());
    assert!(!Shape::Circle.keeps_previous());
    assert!(Shape::CircleAndKeep.is_round());
    assert!(!Shape::RectangleAndKeep.is_round());
}

#[test]
fn shape_parses_from_snake_case() {
    let s: Shape = serde_json::from_str("\"circle_and_keep\"").unwrap();
    assert_eq!(s, Shape::CircleAndKeep);
    let s: Shape = serde_json::from_str("\"rectangle_keep\"").unwrap();
    assert_eq!(s, Shape::RectangleAndKeep);
}

#[test]
fn mask_offset_accepts_scalar_or_partial_object() {
    let o: MaskOffset = serde_json::from_str("6").unwrap();
    assert_eq!(o.edges(), EdgeOffsets::uniform(6.0));
    assert_eq!(o.radial(), 6.0);

    let o: MaskOffset = serde_json::from_str(r#"{"top":4,"left":8}"#).unwrap();
    let e = o.edges();
    assert_eq!((e.top, e.bottom, e.left, e.right), (4.0, 0.0, 8.0, 0.0));
    assert_eq!(o.radial(), 3.0);
}

#[test]
fn corner_radii_fall_back_per_corner() {
    let r = CornerRadii {
        top_left: Some(2.0),
        bottom_right: Some(0.0),
        ..CornerRadii::default()
    };
    assert_eq!(r.resolve(9.0), [2.0, 9.0, 0.0, 9.0]);
}

#[test]
fn hole_spec_finiteness_covers_every_input() {
    let ok = HoleSpec::new(Shape::Circle, Point::new(1.0, 2.0), Size::new(3.0, 4.0));
    assert!(ok.is_finite());
    assert!(ok.validate().is_ok());
    assert!(!HoleSpec::new(Shape::Circle, Point::new(f64::NAN, 0.0), Size::ZERO).is_finite());
    assert!(!ok.with_offset(f64::INFINITY).is_finite());
    assert!(!ok.with_border_radius(f64::NAN).is_finite());
    let bad_corner = ok.with_corner_radii(CornerRadii {
        top_right: Some(f64::NAN),
        ..CornerRadii::default()
    });
    assert!(!bad_corner.is_finite());
    assert!(bad_corner.validate().is_err());
}

#[test]
fn negative_size_fails_validation() {
    let spec = HoleSpec::new(Shape::Rectangle, Point::ZERO, Size::new(-1.0, 4.0));
    assert!(spec.validate().is_err());
}

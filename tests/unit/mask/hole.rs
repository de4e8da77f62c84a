use super::*;
use crate::mask::shape::{CornerRadii, EdgeOffsets, MaskOffset};
use kurbo::BezPath;

const SHAPES: [Shape; 5] = [
    Shape::Rectangle,
    Shape::Circle,
    Shape::Ellipse,
    Shape::RectangleAndKeep,
    Shape::CircleAndKeep,
];

fn parsed_bounds(d: &str) -> Rect {
    BezPath::from_svg(d).unwrap().bounding_box()
}

fn approx_rect(a: Rect, b: Rect) {
    let eps = 1e-6;
    assert!(
        (a.x0 - b.x0).abs() < eps
            && (a.y0 - b.y0).abs() < eps
            && (a.x1 - b.x1).abs() < eps
            && (a.y1 - b.y1).abs() < eps,
        "{a:?} != {b:?}"
    );
}

#[test]
fn zero_area_circle_uses_minimum_footprint_centered_on_position() {
    let spec = HoleSpec::new(Shape::Circle, Point::new(50.0, 50.0), Size::ZERO);
    let HoleGeometry::Circle(c) = HoleGeometry::resolve(&spec).unwrap() else {
        panic!("expected circle");
    };
    assert_eq!(c.center, Point::new(50.0, 50.0));
    assert_eq!(c.radius, MIN_CIRCLE_FOOTPRINT / 2.0);
    approx_rect(
        parsed_bounds(static_path(&spec).as_str()),
        Rect::new(10.0, 10.0, 90.0, 90.0),
    );
}

#[test]
fn zero_area_ellipse_uses_minimum_footprint() {
    let spec = HoleSpec::new(Shape::Ellipse, Point::new(100.0, 40.0), Size::new(0.0, 12.0));
    approx_rect(
        hole_bounds(&spec).unwrap(),
        Rect::new(50.0, 10.0, 150.0, 70.0),
    );
}

#[test]
fn zero_area_rectangle_without_padding_gets_footprint() {
    let spec = HoleSpec::new(Shape::Rectangle, Point::new(40.0, 40.0), Size::ZERO);
    approx_rect(hole_bounds(&spec).unwrap(), Rect::new(0.0, 0.0, 80.0, 80.0));
    let padded = spec.with_offset(5.0);
    approx_rect(
        hole_bounds(&padded).unwrap(),
        Rect::new(35.0, 35.0, 45.0, 45.0),
    );
}

#[test]
fn every_shape_is_nan_free_including_origin_and_zero_size() {
    let positions = [Point::ZERO, Point::new(12.5, 900.0)];
    let sizes = [Size::ZERO, Size::new(0.0, 30.0), Size::new(48.0, 48.0)];
    for shape in SHAPES {
        for position in positions {
            for size in sizes {
                let spec = HoleSpec::new(shape, position, size).with_offset(4.0);
                let d = static_path(&spec);
                assert!(!d.is_corrupt(), "{shape:?} {position:?} {size:?}: {d}");
                assert!(BezPath::from_svg(d.as_str()).is_ok());
            }
        }
    }
}

#[test]
fn non_finite_inputs_yield_placeholder() {
    let spec = HoleSpec::new(Shape::Circle, Point::new(f64::NAN, 1.0), Size::new(1.0, 1.0));
    assert_eq!(static_path(&spec).as_str(), PLACEHOLDER_HOLE);
    assert!(hole_bounds(&spec).is_none());
}

#[test]
fn rectangle_applies_per_edge_offsets() {
    let spec = HoleSpec::new(Shape::Rectangle, Point::new(10.0, 20.0), Size::new(30.0, 40.0))
        .with_offset(MaskOffset::Edges(EdgeOffsets {
            top: 1.0,
            bottom: 2.0,
            left: 3.0,
            right: 4.0,
        }));
    approx_rect(
        parsed_bounds(static_path(&spec).as_str()),
        Rect::new(7.0, 19.0, 44.0, 62.0),
    );
}

#[test]
fn circle_radius_grows_by_average_edge_offset() {
    let spec = HoleSpec::new(Shape::Circle, Point::new(0.0, 0.0), Size::new(20.0, 10.0))
        .with_offset(MaskOffset::Edges(EdgeOffsets {
            top: 4.0,
            bottom: 4.0,
            left: 0.0,
            right: 0.0,
        }));
    let HoleGeometry::Circle(c) = HoleGeometry::resolve(&spec).unwrap() else {
        panic!("expected circle");
    };
    assert_eq!(c.center, Point::new(10.0, 5.0));
    assert_eq!(c.radius, 12.0);
}

#[test]
fn negative_offset_past_radius_falls_back_to_footprint() {
    let spec = HoleSpec::new(Shape::Circle, Point::new(10.0, 10.0), Size::new(20.0, 20.0))
        .with_offset(-30.0);
    let HoleGeometry::Circle(c) = HoleGeometry::resolve(&spec).unwrap() else {
        panic!("expected circle");
    };
    assert_eq!(c.center, Point::new(20.0, 20.0));
    assert_eq!(c.radius, MIN_CIRCLE_FOOTPRINT / 2.0);

    let spec = HoleSpec::new(Shape::Ellipse, Point::ZERO, Size::new(40.0, 20.0)).with_offset(-15.0);
    approx_rect(
        hole_bounds(&spec).unwrap(),
        Rect::new(-30.0, -20.0, 70.0, 40.0),
    );
}

#[test]
fn collapsed_rectangle_footprint_centers_on_target() {
    let spec = HoleSpec::new(Shape::Rectangle, Point::new(100.0, 100.0), Size::new(20.0, 20.0))
        .with_offset(-10.0);
    approx_rect(
        hole_bounds(&spec).unwrap(),
        Rect::new(70.0, 70.0, 150.0, 150.0),
    );
}

#[test]
fn rounded_rectangle_uses_corner_overrides() {
    let spec = HoleSpec::new(Shape::Rectangle, Point::ZERO, Size::new(100.0, 50.0))
        .with_border_radius(8.0)
        .with_corner_radii(CornerRadii {
            top_left: Some(0.0),
            ..CornerRadii::default()
        });
    let HoleGeometry::Rect(r) = HoleGeometry::resolve(&spec).unwrap() else {
        panic!("expected rect");
    };
    assert_eq!(r.radii().top_left, 0.0);
    assert_eq!(r.radii().top_right, 8.0);
    assert!(static_path(&spec).as_str().contains('C'));
}

#[test]
fn mask_with_hole_prefixes_canvas_head() {
    let spec = HoleSpec::new(Shape::Rectangle, Point::new(1.0, 1.0), Size::new(2.0, 2.0));
    let mask = mask_with_hole(Size::new(320.0, 480.0), &spec);
    assert!(mask.as_str().starts_with("M0,0H320V480H0V0Z"));
    assert_eq!(mask.holes(), static_path(&spec).as_str());
}

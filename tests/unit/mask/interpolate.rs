use super::*;
use kurbo::{Rect, Shape as _};

const SMALL: &str = "M0,0L10,0L10,10L0,10Z";
const LARGE: &str = "M100,100L120,100L120,120L100,120Z";

fn bounds(d: &str) -> Rect {
    BezPath::from_svg(d).unwrap().bounding_box()
}

fn close(a: Rect, b: Rect, eps: f64) -> bool {
    (a.x0 - b.x0).abs() < eps
        && (a.y0 - b.y0).abs() < eps
        && (a.x1 - b.x1).abs() < eps
        && (a.y1 - b.y1).abs() < eps
}

#[test]
fn rings_split_subpaths_and_drop_closing_duplicate() {
    let r = rings("M0,0L4,0L4,4L0,4L0,0ZM10,10L12,10L12,12Z", 0.25).unwrap();
    assert_eq!(r.len(), 2);
    assert_eq!(r[0].len(), 4);
    assert_eq!(r[1].len(), 3);
}

#[test]
fn rings_reject_unusable_input() {
    assert!(rings("", 0.25).is_err());
    assert!(rings("garbage", 0.25).is_err());
}

#[test]
fn resample_preserves_perimeter() {
    let ring = rings(SMALL, 0.25).unwrap().remove(0);
    let dense = resample(&ring, 40);
    assert_eq!(dense.len(), 40);
    assert!((perimeter(&dense) - 40.0).abs() < 1e-6);
}

#[test]
fn tween_endpoints_match_inputs() {
    let tween = RingInterpolator::default().interpolate(SMALL, LARGE, 7.0);
    assert!(close(bounds(&tween(0.0)), bounds(SMALL), 0.05));
    assert!(close(bounds(&tween(1.0)), bounds(LARGE), 0.05));
    let mid = bounds(&tween(0.5));
    assert!(mid.x0 > 0.0 && mid.x0 < 100.0);
}

#[test]
fn opposite_winding_is_aligned() {
    let reversed = "M100,100L100,120L120,120L120,100Z";
    let tween = RingInterpolator::default().interpolate(SMALL, reversed, 15.0);
    let mid = bounds(&tween(0.5));
    // A twisted pairing collapses the midpoint contour; aligned rings keep it square-ish.
    assert!(mid.width() > 10.0 && mid.height() > 10.0, "{mid:?}");
}

#[test]
fn curved_targets_are_flattened() {
    let circle = kurbo::Circle::new((60.0, 60.0), 40.0).to_path(0.1).to_svg();
    let tween = RingInterpolator::default().interpolate(SMALL, &circle, 7.0);
    for i in 0..=10 {
        let d = tween(i as f64 / 10.0);
        assert!(!d.contains("NaN"));
        assert!(!d.contains('C'));
    }
    assert!(close(bounds(&tween(1.0)), Rect::new(20.0, 20.0, 100.0, 100.0), 0.5));
}

#[test]
fn unparseable_source_snaps_to_target() {
    let tween = RingInterpolator::default().interpolate("not a path", LARGE, 7.0);
    assert_eq!(tween(0.0), LARGE);
    assert_eq!(tween(0.7), LARGE);
}

#[test]
fn separate_produces_one_contour_per_target() {
    let targets = vec![SMALL.to_owned(), LARGE.to_owned()];
    let tween = RingInterpolator::default().separate(SMALL, &targets, 25.0);
    let end = tween(1.0);
    assert_eq!(end.matches('M').count(), 2);
    let r = rings(&end, 0.25).unwrap();
    assert_eq!(r.len(), 2);
    let first = Rect::from_points(r[0][0], r[0][2]);
    assert!(first.width() > 0.0);
}

#[test]
fn separate_keeps_carried_over_hole_in_place() {
    let far = "M300,300L310,300L310,310L300,310Z";
    let from = format!("{SMALL}{LARGE}");
    let targets = vec![LARGE.to_owned(), far.to_owned()];
    let tween = RingInterpolator::default().separate(&from, &targets, 25.0);
    let mid = tween(0.5);
    let r = rings(&mid, 0.25).unwrap();
    assert_eq!(r.len(), 2);
    let kept = Rect::from_points(r[0][0], r[0][0]);
    let kept = r[0].iter().fold(kept, |acc, p| acc.union_pt(*p));
    assert!(close(kept, bounds(LARGE), 0.05), "{kept:?}");
    let grown = r[1].iter().fold(Rect::from_points(r[1][0], r[1][0]), |acc, p| acc.union_pt(*p));
    assert!(grown.x0 > 100.0 && grown.x0 < 300.0, "{grown:?}");
}

#[test]
fn separate_keeps_unparseable_targets_verbatim() {
    let targets = vec!["junk".to_owned(), LARGE.to_owned()];
    let tween = RingInterpolator::default().separate(SMALL, &targets, 25.0);
    assert!(tween(0.5).starts_with("junk"));
}

//! Static hole contours.
//!
//! All functions here are total: non-finite input resolves to [`PLACEHOLDER_HOLE`] and zero-area
//! targets get a minimum footprint instead of a degenerate contour.

use kurbo::{Circle, Ellipse, Rect, RoundedRect, RoundedRectRadii, Shape as _};

use crate::foundation::core::{Point, Size};
use crate::mask::path::{MaskPath, PLACEHOLDER_HOLE, canvas_head, is_corrupt};
use crate::mask::shape::{HoleSpec, Shape};

/// Diameter substituted for zero-area circle targets.
pub const MIN_CIRCLE_FOOTPRINT: f64 = 80.0;
/// Box substituted for zero-area ellipse targets.
pub const MIN_ELLIPSE_FOOTPRINT: Size = Size::new(100.0, 60.0);
/// Box substituted when a rectangle hole would still have no area after padding.
pub const MIN_RECT_FOOTPRINT: Size = Size::new(80.0, 80.0);

const FLATTEN_TOLERANCE: f64 = 0.1;

/// Resolved hole geometry in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoleGeometry {
    /// Rectangle, possibly rounded.
    Rect(RoundedRect),
    /// Circle.
    Circle(Circle),
    /// Axis-aligned ellipse.
    Ellipse(Ellipse),
}

impl HoleGeometry {
    /// Resolve a spec; `None` when any input is non-finite.
    pub fn resolve(spec: &HoleSpec) -> Option<Self> {
        if !spec.is_finite() {
            return None;
        }
        let geometry = match spec.shape.base() {
            Shape::Circle => Self::Circle(circle_for(spec)),
            Shape::Ellipse => Self::Ellipse(ellipse_for(spec)),
            _ => Self::Rect(rounded_rect_for(spec)),
        };
        Some(geometry)
    }

    /// Axis-aligned bounds of the hole.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(r) => r.rect(),
            Self::Circle(c) => c.bounding_box(),
            Self::Ellipse(e) => e.bounding_box(),
        }
    }

    /// Encode the contour as SVG path data.
    pub fn to_svg(&self) -> String {
        match self {
            Self::Rect(r) if r.radii().as_single_radius() == Some(0.0) => {
                r.rect().to_path(FLATTEN_TOLERANCE).to_svg()
            }
            Self::Rect(r) => r.to_path(FLATTEN_TOLERANCE).to_svg(),
            Self::Circle(c) => c.to_path(FLATTEN_TOLERANCE).to_svg(),
            Self::Ellipse(e) => e.to_path(FLATTEN_TOLERANCE).to_svg(),
        }
    }
}

/// Hole contour for `spec`, without the canvas head.
pub fn static_path(spec: &HoleSpec) -> MaskPath {
    let Some(geometry) = HoleGeometry::resolve(spec) else {
        return MaskPath::new(PLACEHOLDER_HOLE);
    };
    let d = geometry.to_svg();
    if is_corrupt(&d) {
        tracing::warn!(?spec, "static hole produced a non-finite token");
        return MaskPath::new(PLACEHOLDER_HOLE);
    }
    MaskPath::new(d)
}

/// Full mask: canvas contour plus the hole for `spec`.
pub fn mask_with_hole(canvas: Size, spec: &HoleSpec) -> MaskPath {
    MaskPath::new(format!("{}{}", canvas_head(canvas), static_path(spec)))
}

/// Bounds of the hole `static_path` draws, if the spec is usable.
pub fn hole_bounds(spec: &HoleSpec) -> Option<Rect> {
    HoleGeometry::resolve(spec).map(|g| g.bounds())
}

fn rounded_rect_for(spec: &HoleSpec) -> RoundedRect {
    let e = spec.mask_offset.edges();
    let mut rect = Rect::new(
        spec.position.x - e.left,
        spec.position.y - e.top,
        spec.position.x + spec.size.width + e.right,
        spec.position.y + spec.size.height + e.bottom,
    )
    .abs();
    if rect.area() == 0.0 {
        rect = Rect::from_center_size(hole_center(spec), MIN_RECT_FOOTPRINT);
    }
    let [tl, tr, br, bl] = match spec.corner_radii {
        Some(radii) => radii.resolve(spec.border_radius),
        None => [spec.border_radius; 4],
    };
    let radii = RoundedRectRadii::new(tl.max(0.0), tr.max(0.0), br.max(0.0), bl.max(0.0));
    RoundedRect::from_rect(rect, radii)
}

fn circle_for(spec: &HoleSpec) -> Circle {
    let grow = spec.mask_offset.radial();
    let base = if spec.is_zero_area() {
        MIN_CIRCLE_FOOTPRINT / 2.0
    } else {
        spec.size.width.max(spec.size.height) / 2.0
    };
    let mut radius = base + grow;
    if radius <= 0.0 {
        radius = MIN_CIRCLE_FOOTPRINT / 2.0;
    }
    Circle::new(hole_center(spec), radius)
}

fn ellipse_for(spec: &HoleSpec) -> Ellipse {
    let grow = spec.mask_offset.radial();
    let base = if spec.is_zero_area() {
        MIN_ELLIPSE_FOOTPRINT
    } else {
        spec.size
    };
    let mut radii = (base.width / 2.0 + grow, base.height / 2.0 + grow);
    if radii.0 <= 0.0 || radii.1 <= 0.0 {
        radii = (MIN_ELLIPSE_FOOTPRINT.width / 2.0, MIN_ELLIPSE_FOOTPRINT.height / 2.0);
    }
    Ellipse::new(hole_center(spec), radii, 0.0)
}

/// Center of the hole: the reported position for zero-area targets, else the center of the
/// target.
fn hole_center(spec: &HoleSpec) -> Point {
    if spec.is_zero_area() {
        return spec.position;
    }
    Point::new(
        spec.position.x + spec.size.width / 2.0,
        spec.position.y + spec.size.height / 2.0,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/mask/hole.rs"]
mod tests;

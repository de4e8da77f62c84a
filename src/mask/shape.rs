use crate::foundation::core::{Point, Size};
use crate::foundation::error::{TourError, TourResult};

/// Geometry of the hole cut through the backdrop.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned rectangle, optionally with rounded corners.
    #[default]
    Rectangle,
    /// Circle enclosing the target.
    Circle,
    /// Ellipse inscribed in the target's box.
    Ellipse,
    /// Rectangle, keeping the previous hole open alongside it.
    #[serde(alias = "rectangle_keep")]
    RectangleAndKeep,
    /// Circle, keeping the previous hole open alongside it.
    #[serde(alias = "circle_keep")]
    CircleAndKeep,
}

impl Shape {
    /// Circle, ellipse and their keep variant.
    pub fn is_round(self) -> bool {
        matches!(self, Self::Circle | Self::Ellipse | Self::CircleAndKeep)
    }

    /// Variants that preserve the prior hole as a second sub-path.
    pub fn keeps_previous(self) -> bool {
        matches!(self, Self::RectangleAndKeep | Self::CircleAndKeep)
    }

    /// The hole geometry this shape draws for the new target.
    pub fn base(self) -> Self {
        match self {
            Self::RectangleAndKeep => Self::Rectangle,
            Self::CircleAndKeep => Self::Circle,
            other => other,
        }
    }
}

/// Per-edge padding around a target.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EdgeOffsets {
    /// Padding above the target.
    pub top: f64,
    /// Padding below the target.
    pub bottom: f64,
    /// Padding left of the target.
    pub left: f64,
    /// Padding right of the target.
    pub right: f64,
}

impl EdgeOffsets {
    /// Same padding on every edge.
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            bottom: v,
            left: v,
            right: v,
        }
    }

    /// Mean of the four edges.
    pub fn average(&self) -> f64 {
        (self.top + self.bottom + self.left + self.right) / 4.0
    }

    fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.bottom.is_finite()
            && self.left.is_finite()
            && self.right.is_finite()
    }
}

/// Padding applied around the target before the hole is cut.
///
/// Deserializes from either a number or a `{top,bottom,left,right}` object; missing edges are 0.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum MaskOffset {
    /// Same padding on all four edges.
    Uniform(f64),
    /// Independent padding per edge.
    Edges(EdgeOffsets),
}

impl Default for MaskOffset {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl MaskOffset {
    /// Normalize to per-edge form.
    pub fn edges(&self) -> EdgeOffsets {
        match *self {
            Self::Uniform(v) => EdgeOffsets::uniform(v),
            Self::Edges(e) => e,
        }
    }

    /// Radius growth for round shapes: the scalar itself, or the mean of the four edges.
    ///
    /// The mean is an approximation and is not geometrically exact for asymmetric padding.
    pub fn radial(&self) -> f64 {
        match *self {
            Self::Uniform(v) => v,
            Self::Edges(e) => e.average(),
        }
    }

    /// No edge is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.edges().is_finite()
    }
}

impl From<f64> for MaskOffset {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

/// Per-corner radii; unset corners fall back to the scalar border radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CornerRadii {
    /// Top-left corner.
    pub top_left: Option<f64>,
    /// Top-right corner.
    pub top_right: Option<f64>,
    /// Bottom-right corner.
    pub bottom_right: Option<f64>,
    /// Bottom-left corner.
    pub bottom_left: Option<f64>,
}

impl CornerRadii {
    /// Resolve to `[top_left, top_right, bottom_right, bottom_left]`.
    pub fn resolve(&self, fallback: f64) -> [f64; 4] {
        [
            self.top_left.unwrap_or(fallback),
            self.top_right.unwrap_or(fallback),
            self.bottom_right.unwrap_or(fallback),
            self.bottom_left.unwrap_or(fallback),
        ]
    }
}

/// Everything needed to cut one hole: shape, placement, padding and corner rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoleSpec {
    /// Hole geometry.
    pub shape: Shape,
    /// Top-left corner of the target.
    pub position: Point,
    /// Target size; zero on either axis triggers the minimum footprint for round shapes.
    pub size: Size,
    /// Padding around the target.
    pub mask_offset: MaskOffset,
    /// Uniform corner radius for rectangles.
    pub border_radius: f64,
    /// Optional per-corner override.
    pub corner_radii: Option<CornerRadii>,
}

impl HoleSpec {
    /// Plain rectangular hole over `position`/`size`.
    pub fn new(shape: Shape, position: Point, size: Size) -> Self {
        Self {
            shape,
            position,
            size,
            ..Self::default()
        }
    }

    /// Builder-style padding setter.
    #[must_use]
    pub fn with_offset(mut self, offset: impl Into<MaskOffset>) -> Self {
        self.mask_offset = offset.into();
        self
    }

    /// Builder-style radius setter.
    #[must_use]
    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = radius;
        self
    }

    /// Builder-style per-corner setter.
    #[must_use]
    pub fn with_corner_radii(mut self, radii: CornerRadii) -> Self {
        self.corner_radii = Some(radii);
        self
    }

    /// Target has zero width or height.
    pub fn is_zero_area(&self) -> bool {
        self.size.width == 0.0 || self.size.height == 0.0
    }

    /// Every numeric input is finite.
    pub fn is_finite(&self) -> bool {
        let radii_ok = self.corner_radii.is_none_or(|r| {
            r.resolve(0.0).iter().all(|v| v.is_finite())
        });
        self.position.is_finite()
            && self.size.is_finite()
            && self.mask_offset.is_finite()
            && self.border_radius.is_finite()
            && radii_ok
    }

    /// Checked variant of [`HoleSpec::is_finite`] for loaders.
    pub fn validate(&self) -> TourResult<()> {
        if !self.is_finite() {
            return Err(TourError::validation(
                "hole position, size, offset and radii must be finite",
            ));
        }
        if self.size.width < 0.0 || self.size.height < 0.0 {
            return Err(TourError::validation("hole size must be non-negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/shape.rs"]
mod tests;

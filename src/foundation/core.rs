pub use kurbo::{BezPath, Point, Rect, Size, Vec2};

/// Tour key used when application code does not name a tour.
pub const DEFAULT_TOUR_KEY: &str = "_default";

/// Identifier of one independently running tour.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TourKey(String);

impl TourKey {
    /// Build a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The implicit `_default` tour.
    pub fn default_key() -> Self {
        Self(DEFAULT_TOUR_KEY.to_owned())
    }

    /// Borrow the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the implicit `_default` tour.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_TOUR_KEY
    }
}

impl Default for TourKey {
    fn default() -> Self {
        Self::default_key()
    }
}

impl From<&str> for TourKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TourKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TourKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A measured on-screen rectangle in logical (unscaled) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layout {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, `0` for elements that only paint through borders.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Layout {
    /// Build a layout from its components.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// All four components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Zero-area layouts (either side is zero).
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Geometric center.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Convert to a kurbo rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Convert from a kurbo rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}

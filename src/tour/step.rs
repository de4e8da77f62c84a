//! Step descriptors and measurable targets.

use std::cell::Cell;
use std::rc::Rc;

use crate::foundation::core::{Layout, Point, Rect, Size, TourKey};
use crate::foundation::error::{TourError, TourResult};
use crate::mask::shape::{CornerRadii, HoleSpec, MaskOffset, Shape};
use crate::overlay::connector::ConnectorOverrides;

/// Something that can report its on-screen rectangle.
///
/// `None` means "not measurable yet" (not mounted, or no layout pass so far).
pub trait Measurable {
    /// Current rectangle in overlay coordinates.
    fn measure(&self) -> Option<Layout>;
}

/// A target at a fixed rectangle, independent of any mounted element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedTarget(pub Layout);

impl FixedTarget {
    /// Target covering `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self(Layout::from_rect(rect))
    }
}

impl Measurable for FixedTarget {
    fn measure(&self) -> Option<Layout> {
        Some(self.0)
    }
}

/// A target whose rectangle is pushed by host layout events.
#[derive(Debug, Default)]
pub struct LayoutSlot {
    layout: Cell<Option<Layout>>,
}

impl LayoutSlot {
    /// Slot with no layout yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest layout of the element.
    pub fn set(&self, layout: Layout) {
        self.layout.set(Some(layout));
    }

    /// Forget the layout, e.g. when the element unmounts.
    pub fn clear(&self) {
        self.layout.set(None);
    }
}

impl Measurable for LayoutSlot {
    fn measure(&self) -> Option<Layout> {
        self.layout.get()
    }
}

/// Tooltip placement strategy.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TooltipPosition {
    /// Above or below the target, whichever side has more room.
    #[default]
    Relative,
    /// Viewport center.
    Centered,
    /// Centered unless that would cover the target.
    Auto,
}

/// Visual configuration of one step.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StepStyle {
    /// Hole geometry.
    pub shape: Shape,
    /// Padding around the target; falls back to the provider's.
    pub mask_offset: Option<MaskOffset>,
    /// Rectangle corner radius; falls back to the provider's.
    pub border_radius: Option<f64>,
    /// Per-corner radius overrides.
    pub corner_radii: Option<CornerRadii>,
    /// Tooltip placement strategy.
    pub tooltip_position: TooltipPosition,
    /// Raises the tooltip by this many pixels.
    pub tooltip_bottom_offset: Option<f64>,
    /// Pins the tooltip's left edge.
    pub tooltip_left_offset: Option<f64>,
    /// Keep the tooltip where it is instead of translating it for this step.
    pub keep_tooltip_position: bool,
    /// Step-level connector overrides.
    pub connector: ConnectorOverrides,
}

impl StepStyle {
    /// Reject values that cannot produce a hole or a placement.
    pub fn validate(&self) -> TourResult<()> {
        if let Some(offset) = self.mask_offset
            && !offset.is_finite()
        {
            return Err(TourError::validation("mask_offset must be finite"));
        }
        if let Some(radius) = self.border_radius
            && !(radius.is_finite() && radius >= 0.0)
        {
            return Err(TourError::validation("border_radius must be finite and >= 0"));
        }
        if let Some(radii) = self.corner_radii
            && radii.resolve(0.0).iter().any(|r| !r.is_finite() || *r < 0.0)
        {
            return Err(TourError::validation("corner radii must be finite and >= 0"));
        }
        for (name, v) in [
            ("tooltip_bottom_offset", self.tooltip_bottom_offset),
            ("tooltip_left_offset", self.tooltip_left_offset),
        ] {
            if v.is_some_and(|v| !v.is_finite()) {
                return Err(TourError::validation(format!("{name} must be finite")));
            }
        }
        self.connector.validate()
    }

    /// Hole for a target at `position`/`size`, with provider fallbacks applied.
    pub fn hole(
        &self,
        position: Point,
        size: Size,
        provider_offset: Option<MaskOffset>,
        provider_radius: Option<f64>,
    ) -> HoleSpec {
        HoleSpec {
            shape: self.shape,
            position,
            size,
            mask_offset: self.mask_offset.or(provider_offset).unwrap_or_default(),
            border_radius: self.border_radius.or(provider_radius).unwrap_or(0.0),
            corner_radii: self.corner_radii,
        }
    }
}

/// One stop of a tour.
#[derive(Clone)]
pub struct Step {
    /// Unique name within its tour.
    pub name: String,
    /// Rank within the tour.
    pub order: i32,
    /// Owning tour.
    pub tour_key: TourKey,
    /// Tooltip body.
    pub text: String,
    /// Measurable element the step highlights.
    pub target: Rc<dyn Measurable>,
    /// Visual configuration.
    pub style: StepStyle,
    /// Opaque payload handed to the tooltip renderer.
    pub data: serde_json::Value,
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("order", &self.order)
            .field("tour_key", &self.tour_key)
            .field("text", &self.text)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Step {
    /// Steps are identified by tour key, name and order; targets are compared by identity.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.order == other.order
            && self.tour_key == other.tour_key
            && Rc::ptr_eq(&self.target, &other.target)
    }
}

impl Step {
    /// Step in the default tour, named after its order.
    pub fn new(order: i32, text: impl Into<String>, target: Rc<dyn Measurable>) -> Self {
        Self {
            name: order.to_string(),
            order,
            tour_key: TourKey::default_key(),
            text: text.into(),
            target,
            style: StepStyle::default(),
            data: serde_json::Value::Null,
        }
    }

    /// Step highlighting a fixed rectangle.
    pub fn at(order: i32, text: impl Into<String>, layout: Layout) -> Self {
        Self::new(order, text, Rc::new(FixedTarget(layout)))
    }

    /// Builder-style name setter.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder-style tour setter.
    #[must_use]
    pub fn in_tour(mut self, key: impl Into<TourKey>) -> Self {
        self.tour_key = key.into();
        self
    }

    /// Builder-style shape setter.
    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.style.shape = shape;
        self
    }

    /// Builder-style style setter.
    #[must_use]
    pub fn with_style(mut self, style: StepStyle) -> Self {
        self.style = style;
        self
    }

    /// Builder-style payload setter.
    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    /// Measure the target, discarding non-finite results.
    pub fn measure(&self) -> Option<Layout> {
        self.target.measure().filter(Layout::is_finite)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tour/step.rs"]
mod tests;

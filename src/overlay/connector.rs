//! Leader line between the highlighted target and the tooltip.
//!
//! Drawing is delegated to a host [`Connector`]. [`ConnectorGate`] decides when to call it: the
//! line is only shown once both endpoints have reported a usable layout for the current step.

use crate::foundation::core::{Layout, Rect};
use crate::foundation::error::{TourError, TourResult};

/// Marker drawn at a connector end.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Plug {
    /// No marker.
    Behind,
    /// Filled circle.
    #[default]
    Disc,
    /// Filled square.
    Square,
    /// Plain arrow head.
    Arrow1,
    /// Swept arrow head.
    Arrow2,
    /// Narrow arrow head.
    Arrow3,
    /// Pointing hand.
    Hand,
    /// Crosshair.
    Crosshair,
}

/// Routing family for the connector line.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CurveFamily {
    /// Straight segment.
    #[default]
    Straight,
    /// Circular arc.
    Arc,
    /// Smooth spline.
    Fluid,
    /// Curve pulled towards the endpoints' facing sides.
    Magnet,
    /// Orthogonal segments.
    Grid,
}

/// Fully resolved connector style.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConnectorStyle {
    /// Whether the line is drawn at all.
    pub enabled: bool,
    /// CSS color string.
    pub color: String,
    /// Stroke width in pixels.
    pub size: f64,
    /// Marker at the target end.
    pub start_plug: Plug,
    /// Marker at the tooltip end.
    pub end_plug: Plug,
    /// Routing family.
    pub path: CurveFamily,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            color: "#FF6B6B".to_owned(),
            size: 4.0,
            start_plug: Plug::Disc,
            end_plug: Plug::Arrow1,
            path: CurveFamily::Straight,
        }
    }
}

impl ConnectorStyle {
    /// Built-in defaults, then provider overrides, then step overrides.
    pub fn merged(provider: &ConnectorOverrides, step: &ConnectorOverrides) -> Self {
        let mut style = Self::default();
        style.apply(provider);
        style.apply(step);
        style
    }

    fn apply(&mut self, o: &ConnectorOverrides) {
        if let Some(v) = o.enabled {
            self.enabled = v;
        }
        if let Some(v) = &o.color {
            self.color.clone_from(v);
        }
        if let Some(v) = o.size {
            self.size = v;
        }
        if let Some(v) = o.start_plug {
            self.start_plug = v;
        }
        if let Some(v) = o.end_plug {
            self.end_plug = v;
        }
        if let Some(v) = o.path {
            self.path = v;
        }
    }
}

/// Partial connector style; unset fields inherit from the level below.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConnectorOverrides {
    /// Override for [`ConnectorStyle::enabled`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Override for [`ConnectorStyle::color`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Override for [`ConnectorStyle::size`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Override for [`ConnectorStyle::start_plug`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_plug: Option<Plug>,
    /// Override for [`ConnectorStyle::end_plug`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_plug: Option<Plug>,
    /// Override for [`ConnectorStyle::path`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<CurveFamily>,
}

impl ConnectorOverrides {
    /// Check the values that are set.
    pub fn validate(&self) -> TourResult<()> {
        if let Some(size) = self.size
            && !(size.is_finite() && size > 0.0)
        {
            return Err(TourError::validation("connector size must be finite and > 0"));
        }
        if let Some(color) = &self.color
            && color.trim().is_empty()
        {
            return Err(TourError::validation("connector color must be non-empty"));
        }
        Ok(())
    }
}

/// Host line-drawing capability.
pub trait Connector {
    /// Create and show a line between the two endpoint rectangles.
    fn show(&mut self, target: Rect, tooltip: Rect, style: &ConnectorStyle);
    /// Move an existing line after an endpoint changed.
    fn reposition(&mut self, target: Rect, tooltip: Rect);
    /// Hide without destroying.
    fn hide(&mut self);
    /// Destroy the line.
    fn remove(&mut self);
}

/// Draws the connector only once both endpoints have a stable layout.
#[derive(Default)]
pub struct ConnectorGate {
    connector: Option<Box<dyn Connector>>,
    style: Option<ConnectorStyle>,
    target: Option<Rect>,
    tooltip: Option<Rect>,
    drawn: bool,
}

impl std::fmt::Debug for ConnectorGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorGate")
            .field("has_connector", &self.connector.is_some())
            .field("style", &self.style)
            .field("target", &self.target)
            .field("tooltip", &self.tooltip)
            .field("drawn", &self.drawn)
            .finish()
    }
}

impl ConnectorGate {
    /// Gate with no drawing capability attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the host drawing capability, removing any line drawn by a previous one.
    pub fn set_connector(&mut self, connector: Box<dyn Connector>) {
        self.clear();
        self.connector = Some(connector);
    }

    /// Start a new step: drop the current line and wait for fresh endpoint layouts.
    pub fn arm(&mut self, style: ConnectorStyle) {
        self.clear();
        self.style = Some(style);
    }

    /// Highlighted target reported a layout.
    pub fn report_target(&mut self, layout: Layout) {
        if let Some(rect) = usable(layout) {
            self.target = Some(rect);
            self.sync();
        }
    }

    /// Tooltip reported a layout.
    pub fn report_tooltip(&mut self, layout: Layout) {
        if let Some(rect) = usable(layout) {
            self.tooltip = Some(rect);
            self.sync();
        }
    }

    /// A line is currently shown.
    pub fn is_drawn(&self) -> bool {
        self.drawn
    }

    /// Style of the current step, once armed.
    pub fn style(&self) -> Option<&ConnectorStyle> {
        self.style.as_ref()
    }

    /// Remove any line and forget both endpoints.
    pub fn clear(&mut self) {
        if self.drawn
            && let Some(c) = self.connector.as_mut()
        {
            c.remove();
        }
        self.drawn = false;
        self.style = None;
        self.target = None;
        self.tooltip = None;
    }

    /// Hide the line, keeping endpoints so a later report can show it again.
    pub fn hide(&mut self) {
        if self.drawn
            && let Some(c) = self.connector.as_mut()
        {
            c.hide();
        }
        self.drawn = false;
    }

    fn sync(&mut self) {
        let (Some(target), Some(tooltip), Some(style)) = (self.target, self.tooltip, &self.style)
        else {
            return;
        };
        if !style.enabled {
            return;
        }
        let Some(connector) = self.connector.as_mut() else {
            return;
        };
        if self.drawn {
            connector.reposition(target, tooltip);
        } else {
            tracing::debug!(?target, ?tooltip, "drawing connector");
            connector.show(target, tooltip, style);
            self.drawn = true;
        }
    }
}

fn usable(layout: Layout) -> Option<Rect> {
    (layout.is_finite() && !layout.is_empty()).then(|| layout.to_rect())
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/connector.rs"]
mod tests;

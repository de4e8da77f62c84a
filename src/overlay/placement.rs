//! Tooltip placement relative to the highlighted target.

use crate::foundation::core::{Layout, Rect, Size};
use crate::tour::step::{StepStyle, TooltipPosition};

/// Gap between the target and the tooltip, and minimum gap to the viewport edge.
pub const MARGIN: f64 = 13.0;
/// Assumed tooltip height when placing it above the target.
pub const TOOLTIP_HEIGHT_ESTIMATE: f64 = 135.0;
/// Width of a centered tooltip as a fraction of the viewport width.
pub const CENTERED_WIDTH_FRACTION: f64 = 0.8;

/// Vertical anchoring of the tooltip box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAnchor {
    /// Top edge at this distance from the viewport top.
    Top(f64),
    /// Bottom edge at this distance from the viewport bottom.
    Bottom(f64),
}

/// Horizontal anchoring of the tooltip box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAnchor {
    /// Left edge at this distance from the viewport left.
    Left(f64),
    /// Right edge at this distance from the viewport right.
    Right(f64),
}

/// Where the tooltip goes for one step.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TooltipPlacement {
    /// Vertical anchor.
    pub vertical: VerticalAnchor,
    /// Horizontal anchor.
    pub horizontal: HorizontalAnchor,
    /// Widest the tooltip may grow without leaving the viewport.
    pub max_width: f64,
    /// Fixed width, set only for centered tooltips.
    pub width: Option<f64>,
    /// Top edge the tooltip translation animates to.
    pub translate_y: f64,
}

impl TooltipPlacement {
    /// Approximate tooltip box, using [`TOOLTIP_HEIGHT_ESTIMATE`] for its height.
    pub fn estimated_rect(&self, viewport: Size) -> Rect {
        let width = self.width.unwrap_or(self.max_width).max(0.0);
        let x0 = match self.horizontal {
            HorizontalAnchor::Left(left) => left,
            HorizontalAnchor::Right(right) => viewport.width - right - width,
        };
        let y0 = match self.vertical {
            VerticalAnchor::Top(top) => top,
            VerticalAnchor::Bottom(bottom) => viewport.height - bottom - TOOLTIP_HEIGHT_ESTIMATE,
        };
        Rect::new(x0, y0, x0 + width, y0 + TOOLTIP_HEIGHT_ESTIMATE)
    }

    /// Whether the tooltip sits below its target.
    pub fn is_below(&self) -> bool {
        matches!(self.vertical, VerticalAnchor::Top(_))
    }
}

/// Place the tooltip for a target at `target` using the step's strategy and offsets.
pub fn place_tooltip(target: Layout, viewport: Size, style: &StepStyle) -> TooltipPlacement {
    match style.tooltip_position {
        TooltipPosition::Relative => relative(target, viewport, style),
        TooltipPosition::Centered => centered(viewport),
        TooltipPosition::Auto => {
            let centered = centered(viewport);
            if overlaps(centered.estimated_rect(viewport), target.to_rect()) {
                relative(target, viewport, style)
            } else {
                centered
            }
        }
    }
}

/// Above or below the target, on the side of the viewport with more room.
pub fn relative(target: Layout, viewport: Size, style: &StepStyle) -> TooltipPlacement {
    let (w, h) = (viewport.width, viewport.height);
    let center = target.center();
    let below = (center.y - h).abs() > center.y;
    let bottom_offset = style.tooltip_bottom_offset.unwrap_or(0.0);

    let (vertical, translate_y) = if below {
        let top = target.y + target.height + MARGIN;
        (VerticalAnchor::Top(top), top)
    } else {
        let bottom = h - (target.y - MARGIN) + bottom_offset;
        let top = target.y - MARGIN - TOOLTIP_HEIGHT_ESTIMATE - bottom_offset;
        (VerticalAnchor::Bottom(bottom), top)
    };

    let (horizontal, max_width) = match style.tooltip_left_offset {
        Some(left) => (HorizontalAnchor::Left(left), w - left - MARGIN),
        None if center.x > (center.x - w).abs() => {
            let right = edge_gap(w - (target.x + target.width));
            (HorizontalAnchor::Right(right), w - right - MARGIN)
        }
        None => {
            let left = edge_gap(target.x);
            (HorizontalAnchor::Left(left), w - left - MARGIN)
        }
    };

    TooltipPlacement {
        vertical,
        horizontal,
        max_width: max_width.max(0.0),
        width: None,
        translate_y,
    }
}

/// Viewport center, [`CENTERED_WIDTH_FRACTION`] of its width.
pub fn centered(viewport: Size) -> TooltipPlacement {
    let width = viewport.width * CENTERED_WIDTH_FRACTION;
    let left = (viewport.width - width) / 2.0;
    let top = ((viewport.height - TOOLTIP_HEIGHT_ESTIMATE) / 2.0).max(0.0);
    TooltipPlacement {
        vertical: VerticalAnchor::Top(top),
        horizontal: HorizontalAnchor::Left(left),
        max_width: width,
        width: Some(width),
        translate_y: top,
    }
}

/// Strict positive-area intersection; touching edges do not overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    let i = a.intersect(b);
    i.width() > 0.0 && i.height() > 0.0
}

// A target flush with (or past) the edge still keeps the tooltip MARGIN away from it.
fn edge_gap(gap: f64) -> f64 {
    let gap = gap.max(0.0);
    if gap == 0.0 { MARGIN } else { gap }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/placement.rs"]
mod tests;

//! Tourguide is an overlay engine for guided product tours.
//!
//! It keeps the state of any number of independently keyed tours, and computes what the overlay
//! shows on every frame. That covers the dimming mask with its animated cut-out, the tooltip
//! placement and the connector between tooltip and target. Rendering stays with the host, which
//! plugs in through small traits:
//!
//! - [`Measurable`]: where a step's target is on screen
//! - [`ScrollContainer`]: scroll a target into view before its step is shown
//! - [`Connector`]: draw the line between tooltip and target
//! - [`PathInterpolator`]: tween between two hole contours
//!
//! The entry point is [`TourGuide`]. See [`guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod mask;
mod overlay;
mod provider;
mod tour;

/// Long-form documentation.
pub mod guide;

pub use crate::foundation::config::{StartAtMount, TimingConfig, TourConfig};
pub use crate::foundation::core::{
    BezPath, DEFAULT_TOUR_KEY, Layout, Point, Rect, Size, TourKey, Vec2,
};
pub use crate::foundation::error::{TourError, TourResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::timeline::{Channel, Cue, Playback, Timeline};

pub use crate::mask::hole::{
    HoleGeometry, MIN_CIRCLE_FOOTPRINT, MIN_ELLIPSE_FOOTPRINT, MIN_RECT_FOOTPRINT, hole_bounds,
    mask_with_hole, static_path,
};
pub use crate::mask::interpolate::{PathInterpolator, PathTween, RingInterpolator};
pub use crate::mask::morph::{MaskMorph, SETTLE_THRESHOLD, max_segment_length, morph};
pub use crate::mask::path::{MaskPath, PLACEHOLDER_HOLE};
pub use crate::mask::shape::{CornerRadii, EdgeOffsets, HoleSpec, MaskOffset, Shape};

pub use crate::tour::controller::{ScrollContainer, TourController};
pub use crate::tour::events::{EventEmitter, EventKind, Handler, SubscriptionId, TourEvent};
pub use crate::tour::ordering::StepMap;
pub use crate::tour::state::TourPhase;
pub use crate::tour::step::{
    FixedTarget, LayoutSlot, Measurable, Step, StepStyle, TooltipPosition,
};

pub use crate::overlay::connector::{
    Connector, ConnectorGate, ConnectorOverrides, ConnectorStyle, CurveFamily, Plug,
};
pub use crate::overlay::coordinator::{OFFSET_WIDTH, OverlayCoordinator, OverlayFrame, move_rect};
pub use crate::overlay::placement::{
    CENTERED_WIDTH_FRACTION, HorizontalAnchor, MARGIN, TOOLTIP_HEIGHT_ESTIMATE, TooltipPlacement,
    VerticalAnchor, place_tooltip,
};

pub use crate::provider::{TourGuide, TourHandle};

//! Turns "current step + measured rectangle" into overlay frames.
//!
//! A move is a [`Timeline`] over four channels: the mask morph progress, the backdrop
//! opacity, the tooltip opacity and the tooltip translation. The host calls
//! [`OverlayCoordinator::frame`] once per display frame and renders the returned
//! [`OverlayFrame`]. Interrupting a move starts the next one from the path last shown.

use std::time::Duration;

use crate::animation::timeline::{Channel, Cue, Playback, Timeline};
use crate::foundation::config::TourConfig;
use crate::foundation::core::{Layout, Point, Size};
use crate::mask::interpolate::{PathInterpolator, RingInterpolator};
use crate::mask::morph::MaskMorph;
use crate::mask::path::MaskPath;
use crate::overlay::connector::{Connector, ConnectorGate, ConnectorStyle};
use crate::overlay::placement::{TooltipPlacement, place_tooltip};
use crate::tour::step::Step;

/// Extra width and height added around every measured target, half on each side.
pub const OFFSET_WIDTH: f64 = 4.0;

/// Target rectangle handed to the mask: widened by [`OFFSET_WIDTH`], rounded, and shifted by
/// the provider's vertical offsets.
pub fn move_rect(measured: Layout, config: &TourConfig) -> Layout {
    let half = OFFSET_WIDTH / 2.0;
    Layout::new(
        measured.x.round() - half,
        measured.y.round() - half + config.vertical_offset - config.status_bar_offset,
        measured.width + OFFSET_WIDTH,
        measured.height + OFFSET_WIDTH,
    )
}

/// Everything the host needs to paint one overlay frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OverlayFrame {
    /// Even-odd mask path: canvas plus holes.
    pub mask_path: MaskPath,
    /// Backdrop opacity in `[0, 1]`.
    pub mask_opacity: f64,
    /// CSS color of the backdrop.
    pub backdrop_color: String,
    /// Tooltip anchoring, once a step has been placed.
    pub tooltip: Option<TooltipPlacement>,
    /// Tooltip opacity.
    pub tooltip_opacity: f64,
    /// Tooltip top edge.
    pub tooltip_translate_y: f64,
    /// Step the overlay is showing or moving to.
    pub step: Option<String>,
    /// True on exactly one frame: the one where the current move completed.
    pub settled: bool,
}

struct Move {
    step: String,
    morph: MaskMorph,
    playback: Playback,
    placement: TooltipPlacement,
}

/// Sequences mask, tooltip and connector animations for one overlay.
pub struct OverlayCoordinator {
    viewport: Size,
    backdrop_color: String,
    interpolator: Box<dyn PathInterpolator>,
    connector: ConnectorGate,
    resting: MaskPath,
    shown: MaskPath,
    mask_opacity: f64,
    tooltip_opacity: f64,
    tooltip_translate_y: f64,
    placement: Option<TooltipPlacement>,
    current: Option<Move>,
}

impl std::fmt::Debug for OverlayCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayCoordinator")
            .field("viewport", &self.viewport)
            .field("resting", &self.resting)
            .field("shown", &self.shown)
            .field("mask_opacity", &self.mask_opacity)
            .field("tooltip_opacity", &self.tooltip_opacity)
            .field("moving_to", &self.current.as_ref().map(|m| &m.step))
            .field("connector", &self.connector)
            .finish_non_exhaustive()
    }
}

impl OverlayCoordinator {
    /// Coordinator for a `viewport`-sized overlay, using [`RingInterpolator`].
    pub fn new(viewport: Size) -> Self {
        let initial = MaskPath::initial(viewport);
        Self {
            viewport,
            backdrop_color: TourConfig::default().backdrop_color,
            interpolator: Box::new(RingInterpolator::default()),
            connector: ConnectorGate::new(),
            resting: initial.clone(),
            shown: initial,
            mask_opacity: 0.0,
            tooltip_opacity: 0.0,
            tooltip_translate_y: 0.0,
            placement: None,
            current: None,
        }
    }

    /// Replace the path interpolation capability.
    pub fn set_interpolator(&mut self, interpolator: Box<dyn PathInterpolator>) {
        self.interpolator = interpolator;
    }

    /// Attach the host line-drawing capability.
    pub fn set_connector(&mut self, connector: Box<dyn Connector>) {
        self.connector.set_connector(connector);
    }

    /// Connector gate, for inspection.
    pub fn connector(&self) -> &ConnectorGate {
        &self.connector
    }

    /// Current overlay size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Path the next move starts from when no move is running.
    pub fn resting_path(&self) -> &MaskPath {
        &self.resting
    }

    /// Whether a move is in progress.
    pub fn is_moving(&self) -> bool {
        self.current.is_some()
    }

    /// Resize the overlay; returns `false` when the size did not change.
    ///
    /// A new size drops any running move and resets the mask to the initial path for that
    /// size. The caller is expected to move to the current step again.
    pub fn set_viewport(&mut self, viewport: Size) -> bool {
        if viewport == self.viewport {
            return false;
        }
        tracing::debug!(?viewport, "viewport resized");
        self.viewport = viewport;
        self.current = None;
        self.resting = MaskPath::initial(viewport);
        self.shown = self.resting.clone();
        true
    }

    /// Start animating to `step`, whose target measured `measured`.
    ///
    /// Non-finite measurements abort the move without touching any state; returns whether a
    /// move was started.
    pub fn animate_move(
        &mut self,
        step: &Step,
        measured: Layout,
        config: &TourConfig,
        now: Duration,
    ) -> bool {
        if !measured.is_finite() {
            tracing::debug!(step = %step.name, "non-finite measurement, move skipped");
            return false;
        }
        let rect = move_rect(measured, config);
        let position = Point::new(rect.x.floor().max(0.0), rect.y.floor().max(0.0));
        let hole = step
            .style
            .hole(position, rect.size(), config.mask_offset, config.border_radius);
        if !hole.is_finite() {
            tracing::debug!(step = %step.name, "non-finite hole, move skipped");
            return false;
        }

        let placement = place_tooltip(rect, self.viewport, &step.style);
        let previous = if self.current.is_some() {
            self.shown.clone()
        } else {
            self.resting.clone()
        };
        let timeline = self.timeline(step, &placement, config);
        tracing::debug!(
            step = %step.name,
            x = position.x,
            y = position.y,
            duration_ms = timeline.duration().as_millis() as u64,
            "overlay move"
        );

        self.backdrop_color.clone_from(&config.backdrop_color);
        self.connector
            .arm(ConnectorStyle::merged(&config.connector, &step.style.connector));
        self.connector.report_target(rect);
        self.current = Some(Move {
            step: step.name.clone(),
            morph: MaskMorph::new(previous, hole),
            playback: Playback::start(timeline, now),
            placement,
        });
        true
    }

    /// Host reported the tooltip's layout.
    pub fn report_tooltip_layout(&mut self, layout: Layout) {
        self.connector.report_tooltip(layout);
    }

    /// Sample every channel at host time `now`.
    pub fn frame(&mut self, now: Duration) -> OverlayFrame {
        let mut settled = false;
        let mut step = None;
        if let Some(mv) = self.current.as_mut() {
            step = Some(mv.step.clone());
            self.placement = Some(mv.placement);
            let playback = &mv.playback;
            if let Some(v) = playback.sample(Channel::MaskOpacity, now) {
                self.mask_opacity = v.clamp(0.0, 1.0);
            }
            if let Some(v) = playback.sample(Channel::TooltipOpacity, now) {
                self.tooltip_opacity = v.clamp(0.0, 1.0);
            }
            if let Some(v) = playback.sample(Channel::TooltipTranslateY, now) {
                self.tooltip_translate_y = v;
            }
            if playback.is_finished(now) {
                self.resting = mv.morph.settled();
                self.shown = self.resting.clone();
                settled = true;
            } else {
                let progress = playback.sample(Channel::MaskMorph, now).unwrap_or(1.0);
                self.shown = mv.morph.sample(progress, self.interpolator.as_ref());
            }
        }
        if settled && let Some(mv) = self.current.take() {
            tracing::trace!(step = %mv.step, "overlay settled");
        }
        OverlayFrame {
            mask_path: self.shown.clone(),
            mask_opacity: self.mask_opacity,
            backdrop_color: self.backdrop_color.clone(),
            tooltip: self.placement,
            tooltip_opacity: self.tooltip_opacity,
            tooltip_translate_y: self.tooltip_translate_y,
            step,
            settled,
        }
    }

    /// Drop the overlay: cancel the move, remove the connector and return to the initial
    /// path.
    pub fn reset(&mut self) {
        self.current = None;
        self.connector.clear();
        self.resting = MaskPath::initial(self.viewport);
        self.shown = self.resting.clone();
        self.mask_opacity = 0.0;
        self.tooltip_opacity = 0.0;
        self.placement = None;
    }

    fn timeline(&self, step: &Step, placement: &TooltipPlacement, config: &TourConfig) -> Timeline {
        let mask = config.animation_duration();
        let tooltip = config.tooltip_duration();
        let mut timeline = Timeline::new()
            .with(Cue::new(Channel::MaskMorph, 0.0, 1.0, mask, config.mask_easing))
            .with(Cue::new(
                Channel::MaskOpacity,
                self.mask_opacity,
                1.0,
                mask,
                config.mask_easing,
            ));

        let translate_delay = if config.persist_tooltip {
            Duration::ZERO
        } else {
            tooltip
        };
        if placement.translate_y != self.tooltip_translate_y && !step.style.keep_tooltip_position {
            timeline.push(
                Cue::new(
                    Channel::TooltipTranslateY,
                    self.tooltip_translate_y,
                    placement.translate_y,
                    tooltip,
                    config.easing,
                )
                .delayed(translate_delay),
            );
        }

        if !config.persist_tooltip {
            timeline.push(
                Cue::new(Channel::TooltipOpacity, 0.0, 1.0, tooltip, config.easing).delayed(tooltip),
            );
        } else if self.tooltip_opacity != 1.0 {
            timeline.push(
                Cue::new(
                    Channel::TooltipOpacity,
                    self.tooltip_opacity,
                    1.0,
                    tooltip,
                    config.easing,
                )
                .delayed(tooltip),
            );
        }
        timeline
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/coordinator.rs"]
mod tests;

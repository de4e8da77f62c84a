//! Provider glue: one controller and one overlay driven from the host frame loop.
//!
//! [`TourGuide::tick`] is the only place where measurement, overlay moves and the `settled`
//! report meet. Per tick it advances the controller, moves the overlay to the active tour's
//! current step once that step's target can be measured, and samples the overlay.

use std::rc::Rc;
use std::time::Duration;

use crate::foundation::config::TourConfig;
use crate::foundation::core::{Layout, Size, TourKey};
use crate::foundation::error::TourResult;
use crate::mask::interpolate::PathInterpolator;
use crate::overlay::connector::Connector;
use crate::overlay::coordinator::{OverlayCoordinator, OverlayFrame};
use crate::tour::controller::{ScrollContainer, TourController};
use crate::tour::events::{EventKind, SubscriptionId, TourEvent};
use crate::tour::step::Step;

/// Root object owning every tour and the overlay that presents them.
#[derive(Debug)]
pub struct TourGuide {
    config: TourConfig,
    controller: TourController,
    overlay: OverlayCoordinator,
    shown: Option<(TourKey, String)>,
}

impl TourGuide {
    /// Provider for a `viewport`-sized overlay; fails when `config` does not validate.
    pub fn new(config: TourConfig, viewport: Size) -> TourResult<Self> {
        config.validate()?;
        Ok(Self {
            controller: TourController::new(config.timing),
            overlay: OverlayCoordinator::new(viewport),
            config,
            shown: None,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    /// Read access to the tour controller.
    pub fn tours(&self) -> &TourController {
        &self.controller
    }

    /// Read access to the overlay.
    pub fn overlay(&self) -> &OverlayCoordinator {
        &self.overlay
    }

    /// Replace the path interpolation capability.
    pub fn set_interpolator(&mut self, interpolator: Box<dyn PathInterpolator>) {
        self.overlay.set_interpolator(interpolator);
    }

    /// Attach the host line-drawing capability.
    pub fn set_connector(&mut self, connector: Box<dyn Connector>) {
        self.overlay.set_connector(connector);
    }

    /// Handle bound to tour `key`.
    pub fn controller(&mut self, key: impl Into<TourKey>) -> TourHandle<'_> {
        TourHandle {
            guide: self,
            key: key.into(),
        }
    }

    /// Handle bound to the `_default` tour.
    pub fn default_controller(&mut self) -> TourHandle<'_> {
        self.controller(TourKey::default_key())
    }

    // -- registry ---------------------------------------------------------------------------

    /// Register `step` in the tour named by its `tour_key`.
    pub fn register_step(&mut self, step: Step) -> TourResult<()> {
        step.style.validate()?;
        let key = step.tour_key.clone();
        self.controller.register_step(&key, step);
        Ok(())
    }

    /// Remove step `name` from tour `key`.
    pub fn unregister_step(&mut self, key: &TourKey, name: &str) {
        self.controller.unregister_step(key, name);
    }

    // -- lifecycle --------------------------------------------------------------------------

    /// The host view tree mounted: start the configured `start_at_mount` tour, if any.
    pub fn mount(&mut self) {
        if let Some(key) = self.config.start_at_mount.tour_key() {
            tracing::debug!(tour = %key, "start at mount");
            self.controller.start(&key, None, None);
        }
    }

    /// The host view tree is going away: cancel pending work and drop the overlay.
    pub fn unmount(&mut self) {
        self.controller.teardown();
        self.hide();
    }

    /// Start tour `key`; see [`TourController::start`].
    pub fn start(
        &mut self,
        key: &TourKey,
        from_order: Option<i32>,
        scroll: Option<Rc<dyn ScrollContainer>>,
    ) {
        self.controller.start(key, from_order, scroll);
    }

    /// Stop tour `key`, hiding the overlay if it was showing that tour.
    pub fn stop(&mut self, key: &TourKey) {
        self.controller.stop(key);
        if self.shown.as_ref().is_some_and(|(k, _)| k == key) {
            self.hide();
        }
    }

    /// Tooltip "next" button.
    pub fn handle_next(&mut self) -> Option<Step> {
        self.controller.next()
    }

    /// Tooltip "previous" button.
    pub fn handle_prev(&mut self) -> Option<Step> {
        self.controller.prev()
    }

    /// Tooltip "stop" button.
    pub fn handle_stop(&mut self) {
        if let Some(key) = self.controller.active_tour().cloned() {
            self.stop(&key);
        }
    }

    /// A press landed on the backdrop; stops the active tour when `dismiss_on_press` is set.
    ///
    /// Returns whether a tour was stopped.
    pub fn press_overlay(&mut self) -> bool {
        if !self.config.dismiss_on_press || self.controller.active_tour().is_none() {
            return false;
        }
        self.handle_stop();
        true
    }

    /// Whether the host should swallow touches outside the tooltip right now.
    pub fn blocks_outside_interaction(&self) -> bool {
        self.config.prevent_outside_interaction && self.shown.is_some()
    }

    // -- host events ------------------------------------------------------------------------

    /// The overlay was resized; the current step is measured and moved to again.
    pub fn resize(&mut self, viewport: Size) {
        if self.overlay.set_viewport(viewport)
            && let Some((key, _)) = self.shown.take()
        {
            tracing::debug!(tour = %key, "re-measuring after resize");
        }
    }

    /// The tooltip reported its layout.
    pub fn report_tooltip_layout(&mut self, layout: Layout) {
        self.overlay.report_tooltip_layout(layout);
    }

    /// Advance to host time `now` and return the overlay frame to paint, if any tour is shown.
    pub fn tick(&mut self, now: Duration) -> Option<OverlayFrame> {
        self.controller.tick(now);
        self.follow_current_step(now);
        let (key, _) = self.shown.clone()?;
        let frame = self.overlay.frame(now);
        if frame.settled {
            self.controller.report_settled(&key);
        }
        Some(frame)
    }

    fn follow_current_step(&mut self, now: Duration) {
        let Some(key) = self.controller.active_tour().cloned() else {
            self.hide();
            return;
        };
        if !self.controller.is_visible(&key) {
            self.hide();
            return;
        }
        let Some(step) = self.controller.current_step(&key).cloned() else {
            self.hide();
            return;
        };
        let already = self
            .shown
            .as_ref()
            .is_some_and(|(k, name)| *k == key && *name == step.name);
        if already {
            return;
        }
        // Unmeasurable targets are polled again on the next tick.
        let Some(layout) = step.measure() else {
            tracing::trace!(tour = %key, step = %step.name, "target not measurable yet");
            return;
        };
        if self.overlay.animate_move(&step, layout, &self.config, now) {
            self.shown = Some((key, step.name));
        }
    }

    fn hide(&mut self) {
        if self.shown.take().is_some() {
            self.overlay.reset();
        }
    }
}

/// [`TourGuide`] operations scoped to one tour key.
#[derive(Debug)]
pub struct TourHandle<'a> {
    guide: &'a mut TourGuide,
    key: TourKey,
}

impl TourHandle<'_> {
    /// Tour this handle is bound to.
    pub fn tour_key(&self) -> &TourKey {
        &self.key
    }

    /// Register `step` in this tour.
    pub fn register_step(&mut self, step: Step) -> TourResult<()> {
        self.guide.register_step(step.in_tour(self.key.clone()))
    }

    /// Remove step `name` from this tour.
    pub fn unregister_step(&mut self, name: &str) {
        self.guide.unregister_step(&self.key, name);
    }

    /// Start this tour at `from_order`, or at its first step.
    pub fn start(&mut self, from_order: Option<i32>, scroll: Option<Rc<dyn ScrollContainer>>) {
        self.guide.start(&self.key, from_order, scroll);
    }

    /// Stop this tour.
    pub fn stop(&mut self) {
        self.guide.stop(&self.key);
    }

    /// Whether this tour has any step.
    pub fn can_start(&self) -> bool {
        self.guide.controller.can_start(&self.key)
    }

    /// Current step of this tour.
    pub fn current_step(&self) -> Option<&Step> {
        self.guide.controller.current_step(&self.key)
    }

    /// Whether this tour is shown.
    pub fn is_visible(&self) -> bool {
        self.guide.controller.is_visible(&self.key)
    }

    /// Subscribe to `kind` events of this tour.
    pub fn on(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&TourEvent) + 'static,
    ) -> SubscriptionId {
        self.guide.controller.on(&self.key, kind, handler)
    }

    /// Unsubscribe from this tour.
    pub fn off(&mut self, id: SubscriptionId) -> bool {
        self.guide.controller.off(&self.key, id)
    }
}

#[cfg(test)]
#[path = "../tests/unit/provider.rs"]
mod tests;

//! Step registry and per-key tour state machine.
//!
//! Every operation is keyed by [`TourKey`] and touches only that key's [`TourState`]. Unknown
//! keys read as empty state; mutations on them are no-ops, except subscriptions, which create
//! the key's emitter on first use.
//!
//! Time only advances through [`TourController::tick`]: start retries run once per tick and
//! deferred step commits fire on the first tick at or after their due time.

use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::foundation::config::TimingConfig;
use crate::foundation::core::{Layout, TourKey};
use crate::tour::events::{EventKind, SubscriptionId, TourEvent};
use crate::tour::ordering;
use crate::tour::state::{PendingCommit, PendingStart, TourPhase, TourState};
use crate::tour::step::Step;

/// Host scroll view the tour's targets live in.
pub trait ScrollContainer {
    /// Layout of the step's target relative to the container content, if measurable.
    fn measure_in_container(&self, step: &Step) -> Option<Layout>;
    /// Height of the visible area.
    fn viewport_height(&self) -> f64;
    /// Scroll so content offset `y` is at the top of the visible area.
    fn scroll_to(&self, y: f64);
}

/// Owns every tour's steps, current step, visibility and event channel.
#[derive(Debug)]
pub struct TourController {
    tours: BTreeMap<TourKey, TourState>,
    active: Option<TourKey>,
    timing: TimingConfig,
    mounted: bool,
    now: Duration,
}

impl Default for TourController {
    fn default() -> Self {
        Self::new(TimingConfig::default())
    }
}

impl TourController {
    /// Empty controller with the given delays and retry budget.
    pub fn new(timing: TimingConfig) -> Self {
        let mut tours = BTreeMap::new();
        tours.insert(TourKey::default_key(), TourState::default());
        Self {
            tours,
            active: None,
            timing,
            mounted: true,
            now: Duration::ZERO,
        }
    }

    /// Delays and retry budget in use.
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Host time of the last [`TourController::tick`].
    pub fn now(&self) -> Duration {
        self.now
    }

    // -- registry ---------------------------------------------------------------------------

    /// Insert or replace `step` (by name) in tour `key`.
    pub fn register_step(&mut self, key: &TourKey, mut step: Step) {
        step.tour_key = key.clone();
        let tour = self.tours.entry(key.clone()).or_default();
        if tour.current.as_ref().is_some_and(|c| c.name == step.name) {
            tour.current = Some(step.clone());
        }
        tracing::trace!(tour = %key, step = %step.name, "register step");
        tour.steps.insert(step.name.clone(), step);
    }

    /// Remove step `name` from tour `key`; a no-op once the controller is torn down.
    pub fn unregister_step(&mut self, key: &TourKey, name: &str) {
        if !self.mounted {
            return;
        }
        if let Some(tour) = self.tours.get_mut(key)
            && tour.steps.remove(name).is_some()
        {
            tracing::trace!(tour = %key, step = name, "unregister step");
        }
    }

    /// Stop all pending work and refuse further registry writes.
    pub fn teardown(&mut self) {
        self.mounted = false;
        for tour in self.tours.values_mut() {
            tour.cancel_pending();
        }
    }

    /// Whether [`TourController::teardown`] has not run.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // -- lifecycle --------------------------------------------------------------------------

    /// Start tour `key` at the step with `from_order`, or at its first step.
    ///
    /// When the step is not registered yet the start is retried on every tick until it appears
    /// or `timing.max_start_tries` attempts have failed, after which it is dropped silently. A
    /// repeated call while retrying replaces the target step but keeps the attempt count.
    #[tracing::instrument(skip(self, scroll))]
    pub fn start(
        &mut self,
        key: &TourKey,
        from_order: Option<i32>,
        scroll: Option<Rc<dyn ScrollContainer>>,
    ) {
        if !self.mounted {
            return;
        }
        let tour = self.tours.entry(key.clone()).or_default();
        if tour.scroll.is_none() {
            tour.scroll = scroll;
        }
        let tries = tour.pending_start.map_or(0, |p| p.tries);
        tour.pending_start = Some(PendingStart { from_order, tries });
        self.attempt_start(key);
    }

    /// Stop tour `key`: emit `stop`, hide it and clear its current step.
    #[tracing::instrument(skip(self))]
    pub fn stop(&mut self, key: &TourKey) {
        let Some(tour) = self.tours.get_mut(key) else {
            return;
        };
        tour.cancel_pending();
        tour.emitter.emit(&TourEvent::Stop);
        tour.visible = false;
        tour.current = None;
        tour.stopped = true;
        if self.active.as_ref() == Some(key) {
            self.active = None;
        }
        tracing::debug!("tour stopped");
    }

    /// Advance the active tour; see [`TourController::next_in`].
    pub fn next(&mut self) -> Option<Step> {
        let key = self.active.clone()?;
        self.next_in(&key)
    }

    /// Retreat the active tour; see [`TourController::prev_in`].
    pub fn prev(&mut self) -> Option<Step> {
        let key = self.active.clone()?;
        self.prev_in(&key)
    }

    /// Stop the active tour.
    pub fn stop_active(&mut self) {
        if let Some(key) = self.active.clone() {
            self.stop(&key);
        }
    }

    /// Move tour `key` to the next step.
    ///
    /// At the last step nothing changes and the current step is returned.
    pub fn next_in(&mut self, key: &TourKey) -> Option<Step> {
        let tour = self.tours.get(key)?;
        let cursor = tour.cursor()?;
        match ordering::next_step(&tour.steps, cursor).cloned() {
            Some(next) => {
                self.set_current_step(key, next.clone());
                Some(next)
            }
            None => Some(cursor.clone()),
        }
    }

    /// Move tour `key` to the previous step; `None` (and no change) when there is none.
    pub fn prev_in(&mut self, key: &TourKey) -> Option<Step> {
        let tour = self.tours.get(key)?;
        let cursor = tour.cursor()?;
        let prev = ordering::prev_step(&tour.steps, cursor).cloned()?;
        self.set_current_step(key, prev.clone());
        Some(prev)
    }

    /// Make `step` current in tour `key`, scrolling it into view first when the tour has a
    /// scroll container.
    pub fn set_current_step(&mut self, key: &TourKey, step: Step) {
        self.change_step(key, step, false);
    }

    /// The overlay finished moving to the current step of `key`; emits `settled`.
    pub fn report_settled(&mut self, key: &TourKey) {
        if let Some(tour) = self.tours.get_mut(key)
            && let Some(step) = tour.current.clone()
        {
            tour.emitter.emit(&TourEvent::Settled(step));
        }
    }

    /// Advance host time: fire due commits, then retry pending starts.
    pub fn tick(&mut self, now: Duration) {
        self.now = now;
        if !self.mounted {
            return;
        }
        let due: Vec<TourKey> = self
            .tours
            .iter()
            .filter(|(_, t)| t.pending_commit.as_ref().is_some_and(|p| p.due <= now))
            .map(|(k, _)| k.clone())
            .collect();
        for key in due {
            let Some(tour) = self.tours.get_mut(&key) else {
                continue;
            };
            if let Some(pending) = tour.pending_commit.take() {
                tracing::debug!(tour = %key, step = %pending.step.name, "deferred commit");
                tour.commit(pending.step, pending.reveal);
                if pending.reveal {
                    self.active = Some(key);
                }
            }
        }
        let starting: Vec<TourKey> = self
            .tours
            .iter()
            .filter(|(_, t)| t.pending_start.is_some())
            .map(|(k, _)| k.clone())
            .collect();
        for key in starting {
            self.attempt_start(&key);
        }
    }

    // -- queries ----------------------------------------------------------------------------

    /// Current step of `key`.
    pub fn current_step(&self, key: &TourKey) -> Option<&Step> {
        self.tours.get(key)?.current.as_ref()
    }

    /// Whether `key` has at least one registered step.
    pub fn can_start(&self, key: &TourKey) -> bool {
        self.tours.get(key).is_some_and(TourState::can_start)
    }

    /// Whether `key` is shown.
    pub fn is_visible(&self, key: &TourKey) -> bool {
        self.tours.get(key).is_some_and(|t| t.visible)
    }

    /// Tour currently owning the overlay.
    pub fn active_tour(&self) -> Option<&TourKey> {
        self.active.as_ref()
    }

    /// Lifecycle phase of `key`.
    pub fn phase(&self, key: &TourKey) -> TourPhase {
        self.tours.get(key).map_or(TourPhase::Idle, TourState::phase)
    }

    /// Lowest-ranked step of `key`.
    pub fn first_step(&self, key: &TourKey) -> Option<&Step> {
        ordering::first_step(&self.tours.get(key)?.steps)
    }

    /// Highest-ranked step of `key`.
    pub fn last_step(&self, key: &TourKey) -> Option<&Step> {
        ordering::last_step(&self.tours.get(key)?.steps)
    }

    /// Whether the current step of `key` is its first.
    pub fn is_first_step(&self, key: &TourKey) -> bool {
        match (self.current_step(key), self.first_step(key)) {
            (Some(c), Some(f)) => c.name == f.name,
            _ => false,
        }
    }

    /// Whether the current step of `key` is its last.
    pub fn is_last_step(&self, key: &TourKey) -> bool {
        match (self.current_step(key), self.last_step(key)) {
            (Some(c), Some(l)) => c.name == l.name,
            _ => false,
        }
    }

    /// 1-based number of the current step of `key`.
    pub fn step_number(&self, key: &TourKey) -> Option<usize> {
        let tour = self.tours.get(key)?;
        let current = tour.current.as_ref()?;
        Some(ordering::step_number(&tour.steps, current))
    }

    /// Registered steps of `key` in tour order.
    pub fn steps(&self, key: &TourKey) -> Vec<&Step> {
        let Some(tour) = self.tours.get(key) else {
            return Vec::new();
        };
        let mut steps: Vec<&Step> = tour.steps.values().collect();
        steps.sort_by(|a, b| (a.order, &a.name).cmp(&(b.order, &b.name)));
        steps
    }

    // -- events -----------------------------------------------------------------------------

    /// Subscribe to `kind` events of `key`, creating the key's channel if needed.
    pub fn on(
        &mut self,
        key: &TourKey,
        kind: EventKind,
        handler: impl FnMut(&TourEvent) + 'static,
    ) -> SubscriptionId {
        self.tours.entry(key.clone()).or_default().emitter.on(kind, handler)
    }

    /// Unsubscribe from `key`; `false` when the subscription is unknown.
    pub fn off(&mut self, key: &TourKey, id: SubscriptionId) -> bool {
        self.tours.get_mut(key).is_some_and(|t| t.emitter.off(id))
    }

    // -- internals --------------------------------------------------------------------------

    fn attempt_start(&mut self, key: &TourKey) {
        let max_tries = self.timing.max_start_tries;
        let Some(tour) = self.tours.get_mut(key) else {
            return;
        };
        let Some(pending) = tour.pending_start else {
            return;
        };
        match tour.resolve_start(pending.from_order) {
            Some(step) => {
                tour.pending_start = None;
                tour.stopped = false;
                tracing::debug!(tour = %key, step = %step.name, tries = pending.tries, "tour started");
                tour.emitter.emit(&TourEvent::Start);
                self.change_step(key, step, true);
            }
            None => {
                let tries = pending.tries + 1;
                if tries >= max_tries {
                    tracing::debug!(tour = %key, tries, "start abandoned: no step registered");
                    tour.pending_start = None;
                } else {
                    tour.pending_start = Some(PendingStart { tries, ..pending });
                }
            }
        }
    }

    fn change_step(&mut self, key: &TourKey, step: Step, reveal: bool) {
        let settle = self.timing.scroll_settle();
        let now = self.now;
        let Some(tour) = self.tours.get_mut(key) else {
            return;
        };
        // A superseded start still owes its reveal.
        let reveal = reveal || tour.pending_commit.as_ref().is_some_and(|p| p.reveal);
        if let Some(scroll) = tour.scroll.clone() {
            if let Some(layout) = scroll.measure_in_container(&step) {
                let viewport = scroll.viewport_height();
                if layout.y + layout.height > viewport {
                    let y = (layout.y + layout.height / 2.0 - viewport / 2.0).max(0.0);
                    tracing::debug!(tour = %key, y, "scrolling target into view");
                    scroll.scroll_to(y);
                }
            }
            tour.pending_commit = Some(PendingCommit {
                step,
                due: now + settle,
                reveal,
            });
            return;
        }
        tour.commit(step, reveal);
        if reveal {
            self.active = Some(key.clone());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tour/controller.rs"]
mod tests;

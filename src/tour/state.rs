//! Isolated state record of one tour key.

use std::rc::Rc;
use std::time::Duration;

use crate::tour::controller::ScrollContainer;
use crate::tour::events::{EventEmitter, TourEvent};
use crate::tour::ordering::{self, StepMap};
use crate::tour::step::Step;

/// Lifecycle state of one tour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourPhase {
    /// No steps registered.
    Idle,
    /// Steps registered; `start` would succeed.
    Ready,
    /// `start` is waiting for steps or for a scroll to settle.
    Starting,
    /// Visible on a current step.
    Active,
    /// Stopped since the last start.
    Stopped,
}

/// A `start` call still waiting for its step to register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PendingStart {
    pub(crate) from_order: Option<i32>,
    pub(crate) tries: u32,
}

/// A step change waiting for a scroll to settle.
#[derive(Clone, Debug)]
pub(crate) struct PendingCommit {
    pub(crate) step: Step,
    pub(crate) due: Duration,
    pub(crate) reveal: bool,
}

/// Everything owned by one tour key.
#[derive(Default)]
pub(crate) struct TourState {
    pub(crate) steps: StepMap,
    pub(crate) current: Option<Step>,
    pub(crate) visible: bool,
    pub(crate) stopped: bool,
    pub(crate) emitter: EventEmitter,
    pub(crate) scroll: Option<Rc<dyn ScrollContainer>>,
    pub(crate) pending_start: Option<PendingStart>,
    pub(crate) pending_commit: Option<PendingCommit>,
}

impl std::fmt::Debug for TourState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TourState")
            .field("steps", &self.steps.keys().collect::<Vec<_>>())
            .field("current", &self.current.as_ref().map(|s| &s.name))
            .field("visible", &self.visible)
            .field("stopped", &self.stopped)
            .field("has_scroll", &self.scroll.is_some())
            .field("pending_start", &self.pending_start)
            .field("pending_commit", &self.pending_commit.as_ref().map(|p| &p.step.name))
            .finish()
    }
}

impl TourState {
    pub(crate) fn can_start(&self) -> bool {
        !self.steps.is_empty()
    }

    pub(crate) fn phase(&self) -> TourPhase {
        let starting = self.pending_start.is_some()
            || self.pending_commit.as_ref().is_some_and(|p| p.reveal);
        if starting {
            TourPhase::Starting
        } else if self.visible && self.current.is_some() {
            TourPhase::Active
        } else if self.steps.is_empty() {
            TourPhase::Idle
        } else if self.stopped {
            TourPhase::Stopped
        } else {
            TourPhase::Ready
        }
    }

    /// Step navigation starts from: a pending commit target, else the current step.
    pub(crate) fn cursor(&self) -> Option<&Step> {
        self.pending_commit
            .as_ref()
            .map(|p| &p.step)
            .or(self.current.as_ref())
    }

    pub(crate) fn resolve_start(&self, from_order: Option<i32>) -> Option<Step> {
        match from_order {
            Some(order) => ordering::step_with_order(&self.steps, order).cloned(),
            None => ordering::first_step(&self.steps).cloned(),
        }
    }

    /// Make `step` current and announce it; `reveal` also makes the tour visible.
    pub(crate) fn commit(&mut self, step: Step, reveal: bool) {
        self.current = Some(step.clone());
        self.emitter.emit(&TourEvent::StepChange(step));
        if reveal {
            self.visible = true;
        }
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_start = None;
        self.pending_commit = None;
    }
}

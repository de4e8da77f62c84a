//! Sequenced animation timelines.
//!
//! A [`Timeline`] is an ordered list of [`Cue`]s, each animating one [`Channel`] from a start
//! value to an end value after a delay. Cues can be chained on the end of another channel with
//! [`Timeline::then_after`], which replaces ad hoc nested timers with explicit dependencies.
//! [`Playback`] anchors a timeline to a host clock.
//!
//! Invariants:
//!
//! 1. Cues are kept sorted by start time (stable for equal starts).
//! 2. A channel samples its first cue's `from` before that cue starts, and the last started
//!    cue's value afterwards.
//! 3. Zero-duration cues jump to `to` at their start time.

use std::time::Duration;

use crate::animation::ease::Ease;

/// Animated quantities driven by the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Mask hole morph progress in `[0, 1]`.
    MaskMorph,
    /// Backdrop opacity.
    MaskOpacity,
    /// Tooltip opacity.
    TooltipOpacity,
    /// Tooltip vertical translation in pixels.
    TooltipTranslateY,
}

/// One animated segment of a channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    /// Animated channel.
    pub channel: Channel,
    /// Value before and at the start of the cue.
    pub from: f64,
    /// Value at and after the end of the cue.
    pub to: f64,
    /// Start offset from the beginning of the timeline.
    pub delay: Duration,
    /// Length of the segment.
    pub duration: Duration,
    /// Easing applied to normalized progress.
    pub ease: Ease,
}

impl Cue {
    /// Cue starting at the beginning of the timeline.
    pub fn new(channel: Channel, from: f64, to: f64, duration: Duration, ease: Ease) -> Self {
        Self {
            channel,
            from,
            to,
            delay: Duration::ZERO,
            duration,
            ease,
        }
    }

    /// Builder-style delay setter.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Time at which the cue reaches `to`.
    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }

    /// Normalized linear progress at `elapsed`, before easing.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed <= self.delay {
            return if self.duration.is_zero() && elapsed == self.delay {
                1.0
            } else {
                0.0
            };
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let local = (elapsed - self.delay).as_secs_f64();
        (local / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Eased value at `elapsed`.
    pub fn sample(&self, elapsed: Duration) -> f64 {
        let t = self.progress(elapsed);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.ease.apply(t)
    }
}

/// Ordered collection of cues.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    cues: Vec<Cue>,
}

impl Timeline {
    /// Empty timeline; complete immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cue at its own delay (builder pattern).
    #[must_use]
    pub fn with(mut self, cue: Cue) -> Self {
        self.push(cue);
        self
    }

    /// Insert a cue that starts `cue.delay` after every cue of `dependency` has ended.
    ///
    /// Without any cue on `dependency` the cue keeps its own delay.
    #[must_use]
    pub fn then_after(mut self, dependency: Channel, mut cue: Cue) -> Self {
        if let Some(end) = self.channel_end(dependency) {
            cue.delay += end;
        }
        self.push(cue);
        self
    }

    /// Insert a cue, keeping start order.
    pub fn push(&mut self, cue: Cue) {
        let idx = self.cues.partition_point(|c| c.delay <= cue.delay);
        self.cues.insert(idx, cue);
    }

    /// All cues in start order.
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// True when no cue is scheduled.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// End time of the latest cue.
    pub fn duration(&self) -> Duration {
        self.cues
            .iter()
            .map(Cue::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// End of the last cue on `channel`.
    pub fn channel_end(&self, channel: Channel) -> Option<Duration> {
        self.cues
            .iter()
            .filter(|c| c.channel == channel)
            .map(Cue::end)
            .max()
    }

    /// Whether any cue animates `channel`.
    pub fn drives(&self, channel: Channel) -> bool {
        self.cues.iter().any(|c| c.channel == channel)
    }

    /// Sample `channel` at `elapsed`; `None` when the channel is not driven.
    pub fn sample(&self, channel: Channel, elapsed: Duration) -> Option<f64> {
        let mut first = None;
        let mut active = None;
        for cue in self.cues.iter().filter(|c| c.channel == channel) {
            if first.is_none() {
                first = Some(cue);
            }
            if cue.delay <= elapsed {
                active = Some(cue);
            }
        }
        match (active, first) {
            (Some(cue), _) => Some(cue.sample(elapsed)),
            (None, Some(cue)) => Some(cue.from),
            (None, None) => None,
        }
    }

    /// All cues have reached their end value.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }
}

/// A timeline anchored to the host clock.
#[derive(Clone, Debug)]
pub struct Playback {
    timeline: Timeline,
    started_at: Duration,
}

impl Playback {
    /// Start `timeline` at host time `now`.
    pub fn start(timeline: Timeline, now: Duration) -> Self {
        Self {
            timeline,
            started_at: now,
        }
    }

    /// The scheduled timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Time since start; clocks running backwards read as zero.
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    /// Sample a channel at host time `now`.
    pub fn sample(&self, channel: Channel, now: Duration) -> Option<f64> {
        self.timeline.sample(channel, self.elapsed(now))
    }

    /// Whether every cue has completed at host time `now`.
    pub fn is_finished(&self, now: Duration) -> bool {
        self.timeline.is_finished(self.elapsed(now))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;

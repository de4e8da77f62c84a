//! # Tourguide guide (v0.1.0)
//!
//! This module is a standalone walkthrough of how Tourguide is put together and how a host
//! application drives it. If you only need the type list, start at the crate root.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Step`](crate::Step): one stop of a tour: a measurable target, tooltip text and a
//!   [`StepStyle`](crate::StepStyle) (hole shape, padding, tooltip strategy, connector overrides)
//! - [`TourKey`](crate::TourKey): names a tour; `"_default"` when none is given
//! - [`TourController`](crate::TourController): the step registry and per-key state machine
//! - [`OverlayCoordinator`](crate::OverlayCoordinator): turns the current step and its measured
//!   rectangle into [`OverlayFrame`](crate::OverlayFrame)s
//! - [`TourGuide`](crate::TourGuide): owns one of each and wires them to the host frame loop
//!
//! ---
//!
//! ## Driving a tour
//!
//! Everything runs on the host's UI thread. The host owns time: it calls
//! [`TourGuide::tick`](crate::TourGuide::tick) once per display frame with a monotonically
//! increasing `now`, and paints the returned frame.
//!
//! ```
//! use std::time::Duration;
//! use tourguide::{Layout, Size, Step, TourConfig, TourGuide};
//!
//! let mut guide = TourGuide::new(TourConfig::default(), Size::new(390.0, 844.0))?;
//! guide.register_step(Step::at(1, "This is your inbox", Layout::new(16.0, 120.0, 358.0, 48.0)))?;
//! guide.register_step(Step::at(2, "Compose from here", Layout::new(300.0, 760.0, 56.0, 56.0)))?;
//!
//! guide.default_controller().start(None, None);
//! let frame = guide.tick(Duration::ZERO).expect("tour is visible");
//! assert_eq!(frame.step.as_deref(), Some("1"));
//!
//! guide.handle_next();
//! let frame = guide.tick(Duration::from_millis(16)).expect("tour is visible");
//! assert_eq!(frame.step.as_deref(), Some("2"));
//! # Ok::<(), tourguide::TourError>(())
//! ```
//!
//! Per tick, in order:
//!
//! 1. The controller fires step commits whose scroll settle delay has passed, then retries
//!    `start` calls still waiting for their first step.
//! 2. If the active tour's current step differs from what the overlay shows, its target is
//!    measured. Unmeasurable targets are polled again next tick. Non-finite measurements are
//!    dropped without touching the overlay.
//! 3. The overlay samples its timeline. On the frame where a move completes, `settled` is set
//!    and the tour emits a `settled` event.
//!
//! ---
//!
//! ## Tours are isolated
//!
//! Each key owns its own steps, current step, visibility flag and event channel. Operations on
//! one key never touch another. Unknown keys read as empty: `can_start` is `false`,
//! `current_step` is `None`, `stop` does nothing. Subscribing to an unknown key creates its
//! channel, so handlers can be attached before the tour's steps exist.
//!
//! Exactly one tour owns the overlay at a time (the "active" tour). `next`, `prev` and the
//! tooltip buttons act on it. Stopping a tour that is not active leaves the active one alone.
//!
//! ---
//!
//! ## Step order
//!
//! Steps are ranked by `(order, name)`. `next` on the last step returns it unchanged and emits
//! nothing. `prev` on the first step returns `None`. Duplicate orders are legal and visited in
//! name order.
//!
//! ---
//!
//! ## Starting late, and giving up
//!
//! `start` can run before any step registered (for example when a screen mounts its targets
//! lazily). It then retries once per tick until a step appears or
//! [`TimingConfig::max_start_tries`](crate::TimingConfig::max_start_tries) attempts failed. An
//! abandoned start is silent: no event is emitted and nothing is shown.
//!
//! ---
//!
//! ## The mask
//!
//! The mask is one even-odd SVG path: a contour covering the canvas followed by hole contours.
//!
//! - [`static_path`](crate::static_path) draws the hole for a [`HoleSpec`](crate::HoleSpec).
//!   Round shapes on zero-size targets get a minimum footprint instead of a zero radius.
//! - [`morph`](crate::morph) interpolates from the previous mask to a new hole. At or beyond
//!   [`SETTLE_THRESHOLD`](crate::SETTLE_THRESHOLD) it returns the exact static hole.
//! - The `*_and_keep` shapes keep earlier holes open and add the new one.
//!
//! No geometry function fails. Anything that would produce a NaN token falls back to the static
//! hole, or to a 1x1 placeholder when even that is impossible.
//!
//! ---
//!
//! ## Timing
//!
//! A move is a [`Timeline`](crate::Timeline) of cues on four channels:
//!
//! - mask morph progress and backdrop opacity, over `animation_duration_ms` with `mask_easing`
//! - tooltip opacity and translation, over `animation_duration_ms + tooltip_extra_ms` with
//!   `easing`, starting once that duration has passed
//!
//! With `persist_tooltip` the tooltip is not faded out between steps and its translation starts
//! immediately. A step with `keep_tooltip_position` leaves the tooltip where it is.
//!
//! `mask_easing` must be monotonic: an overshooting curve would drive morph progress outside
//! `[0, 1]`. [`TourConfig::validate`](crate::TourConfig::validate) rejects elastic easing there.
//!
//! ---
//!
//! ## Host capabilities
//!
//! | Trait | Purpose |
//! |---|---|
//! | [`Measurable`](crate::Measurable) | report a target's rectangle, or `None` while unmounted |
//! | [`ScrollContainer`](crate::ScrollContainer) | measure inside a scroll view and scroll to a target |
//! | [`Connector`](crate::Connector) | show, reposition, hide and remove the leader line |
//! | [`PathInterpolator`](crate::PathInterpolator) | build a tween between two path strings |
//!
//! [`FixedTarget`](crate::FixedTarget) and [`LayoutSlot`](crate::LayoutSlot) cover the common
//! cases of a fixed rectangle and a rectangle pushed from layout callbacks.
//!
//! ---
//!
//! ## Logging
//!
//! Tourguide logs through `tracing`. Lifecycle transitions, abandoned starts, deferred commits
//! and overlay moves are `debug`. Geometry fallbacks are `warn`. Install any subscriber to see
//! them.

//! Provider-level configuration.
//!
//! Every field has a default, so `{}` is a valid configuration. Former magic delays live in
//! [`TimingConfig`].

use std::time::Duration;

use crate::animation::ease::Ease;
use crate::foundation::core::TourKey;
use crate::foundation::error::{TourError, TourResult};
use crate::mask::shape::MaskOffset;
use crate::overlay::connector::ConnectorOverrides;

/// Which tour, if any, starts as soon as the provider mounts.
///
/// Deserializes from `false`, `true` (the default tour) or a tour key string.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum StartAtMount {
    /// `true` starts the default tour; `false` starts nothing.
    Flag(bool),
    /// Start the named tour.
    Tour(TourKey),
}

impl Default for StartAtMount {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl StartAtMount {
    /// Tour to start at mount.
    pub fn tour_key(&self) -> Option<TourKey> {
        match self {
            Self::Flag(true) => Some(TourKey::default_key()),
            Self::Flag(false) => None,
            Self::Tour(key) => Some(key.clone()),
        }
    }
}

/// Delays and retry budgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Frames `start` waits for the tour's first step to register (120 frames, about 2s at 60Hz).
    pub max_start_tries: u32,
    /// Wait between a scroll-into-view and the step commit.
    pub scroll_settle_ms: u64,
    /// Added to the animation duration for tooltip fade and translation.
    pub tooltip_extra_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            max_start_tries: 120,
            scroll_settle_ms: 100,
            tooltip_extra_ms: 200,
        }
    }
}

impl TimingConfig {
    /// [`TimingConfig::scroll_settle_ms`] as a duration.
    pub fn scroll_settle(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_ms)
    }

    /// [`TimingConfig::tooltip_extra_ms`] as a duration.
    pub fn tooltip_extra(&self) -> Duration {
        Duration::from_millis(self.tooltip_extra_ms)
    }
}

/// Settings shared by every tour under one provider.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Mask morph and backdrop fade duration.
    pub animation_duration_ms: u64,
    /// Easing for tooltip opacity and translation.
    pub easing: Ease,
    /// Easing for the mask morph; must be monotonic.
    pub mask_easing: Ease,
    /// CSS color of the backdrop.
    pub backdrop_color: String,
    /// Padding used when a step sets none.
    pub mask_offset: Option<MaskOffset>,
    /// Corner radius used when a step sets none.
    pub border_radius: Option<f64>,
    /// Added to every measured target's top edge.
    pub vertical_offset: f64,
    /// Subtracted from every measured target's top edge.
    pub status_bar_offset: f64,
    /// Tour started by [`crate::TourGuide::mount`].
    pub start_at_mount: StartAtMount,
    /// A press on the backdrop stops the active tour.
    pub dismiss_on_press: bool,
    /// The host should swallow touches outside the tooltip while a tour runs.
    pub prevent_outside_interaction: bool,
    /// Keep the tooltip visible across step changes instead of fading it out and in.
    pub persist_tooltip: bool,
    /// Provider-level connector overrides.
    pub connector: ConnectorOverrides,
    /// Delays and retry budgets.
    pub timing: TimingConfig,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: 400,
            easing: Ease::default(),
            mask_easing: Ease::OutCubic,
            backdrop_color: "rgba(0, 0, 0, 0.4)".to_owned(),
            mask_offset: None,
            border_radius: None,
            vertical_offset: 0.0,
            status_bar_offset: 0.0,
            start_at_mount: StartAtMount::default(),
            dismiss_on_press: false,
            prevent_outside_interaction: false,
            persist_tooltip: false,
            connector: ConnectorOverrides::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl TourConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> TourResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Mask animation duration.
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Tooltip animation duration: the mask duration plus the tooltip extra.
    pub fn tooltip_duration(&self) -> Duration {
        self.animation_duration() + self.timing.tooltip_extra()
    }

    /// Reject values the overlay cannot use.
    pub fn validate(&self) -> TourResult<()> {
        if self.backdrop_color.trim().is_empty() {
            return Err(TourError::config("backdrop_color must be non-empty"));
        }
        if !self.vertical_offset.is_finite() || !self.status_bar_offset.is_finite() {
            return Err(TourError::config(
                "vertical_offset and status_bar_offset must be finite",
            ));
        }
        if let Some(offset) = self.mask_offset
            && !offset.is_finite()
        {
            return Err(TourError::config("mask_offset must be finite"));
        }
        if let Some(radius) = self.border_radius
            && !(radius.is_finite() && radius >= 0.0)
        {
            return Err(TourError::config("border_radius must be finite and >= 0"));
        }
        if !self.mask_easing.is_monotonic() {
            return Err(TourError::config(
                "mask_easing must be monotonic (no elastic overshoot)",
            ));
        }
        if self.timing.max_start_tries == 0 {
            return Err(TourError::config("timing.max_start_tries must be > 0"));
        }
        self.connector
            .validate()
            .map_err(|e| TourError::config(format!("connector: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Spring-like overshoot; `bounciness` of `0` behaves like a soft ease-out.
    ///
    /// Output leaves `[0, 1]` while it oscillates, so it is only suitable for positional
    /// channels, never for morph progress.
    Elastic {
        /// Oscillation strength.
        bounciness: f64,
    },
}

impl Default for Ease {
    fn default() -> Self {
        Self::Elastic { bounciness: 0.7 }
    }
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Elastic { bounciness } => {
                let p = bounciness.max(0.0) * std::f64::consts::PI;
                1.0 - (t * std::f64::consts::FRAC_PI_2).cos().powi(3) * (t * p).cos()
            }
        }
    }

    /// Whether the curve stays inside `[0, 1]` and never moves backwards.
    pub fn is_monotonic(self) -> bool {
        !matches!(self, Self::Elastic { bounciness } if bounciness > 0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

//! Hole morphing between the previous mask and a new target.
//!
//! Output is guarded three times against non-finite tokens: [`static_path`] never emits them,
//! the interpolated hole is checked before composition, and the composed path is checked again.
//! Every rejection falls back to the canvas head plus the static target hole.

use crate::mask::hole::static_path;
use crate::mask::interpolate::{PathInterpolator, PathTween};
use crate::mask::path::{
    MaskPath, PLACEHOLDER_HOLE, canvas_head, is_corrupt, kept_subpaths, split_canvas_head,
};
use crate::mask::shape::{HoleSpec, Shape};

/// Progress at which the morph snaps to the exact final hole.
pub const SETTLE_THRESHOLD: f64 = 0.99;

/// Resampling step for `shape`; round shapes need finer subdivision.
pub fn max_segment_length(shape: Shape) -> f64 {
    match shape {
        Shape::Circle | Shape::Ellipse | Shape::CircleAndKeep => 7.0,
        Shape::RectangleAndKeep => 25.0,
        Shape::Rectangle => 15.0,
    }
}

/// Mask path at `progress` of the move from `previous` towards `target`.
///
/// Total: never fails and never returns a corrupt path.
pub fn morph(
    previous: &MaskPath,
    progress: f64,
    target: &HoleSpec,
    interpolator: &dyn PathInterpolator,
) -> MaskPath {
    if !target.is_finite() {
        return unchanged(previous);
    }
    let parts = Parts::split(previous);
    let progress = normalize(progress);
    if let Some(settled) = parts.settled(progress, target) {
        return settled;
    }
    let tween = parts.tween(target, interpolator);
    parts.compose(tween(progress), target)
}

/// A single move, memoizing the interpolation function across frames.
pub struct MaskMorph {
    previous: MaskPath,
    target: HoleSpec,
    parts: Parts,
    tween: Option<PathTween>,
}

impl std::fmt::Debug for MaskMorph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaskMorph")
            .field("previous", &self.previous)
            .field("target", &self.target)
            .field("tween_ready", &self.tween.is_some())
            .finish()
    }
}

impl MaskMorph {
    /// Prepare a move from `previous` to `target`.
    pub fn new(previous: MaskPath, target: HoleSpec) -> Self {
        let parts = Parts::split(&previous);
        Self {
            previous,
            target,
            parts,
            tween: None,
        }
    }

    /// Path the move started from.
    pub fn previous(&self) -> &MaskPath {
        &self.previous
    }

    /// Hole the move ends on.
    pub fn target(&self) -> &HoleSpec {
        &self.target
    }

    /// Same result as [`morph`], building the interpolation function at most once.
    pub fn sample(&mut self, progress: f64, interpolator: &dyn PathInterpolator) -> MaskPath {
        if !self.target.is_finite() {
            return unchanged(&self.previous);
        }
        let progress = normalize(progress);
        if let Some(settled) = self.parts.settled(progress, &self.target) {
            return settled;
        }
        let tween = self
            .tween
            .get_or_insert_with(|| self.parts.tween(&self.target, interpolator));
        let interpolated = tween(progress);
        self.parts.compose(interpolated, &self.target)
    }

    /// Exact resting path of this move.
    pub fn settled(&self) -> MaskPath {
        if !self.target.is_finite() {
            return unchanged(&self.previous);
        }
        let head = self.parts.head.as_deref().unwrap_or_default();
        self.parts.settled_with(head, &self.target)
    }
}

/// Previous path split into canvas head and cleaned hole contours.
#[derive(Clone, Debug)]
struct Parts {
    head: Option<String>,
    holes: String,
}

impl Parts {
    fn split(previous: &MaskPath) -> Self {
        match split_canvas_head(previous.as_str()) {
            Some((canvas, holes)) => Self {
                head: Some(canvas_head(canvas)),
                holes: holes.to_owned(),
            },
            None => Self {
                head: None,
                holes: previous.as_str().trim().to_owned(),
            },
        }
    }

    fn settled(&self, progress: f64, target: &HoleSpec) -> Option<MaskPath> {
        if progress < SETTLE_THRESHOLD {
            return None;
        }
        let head = self.head.as_deref()?;
        Some(self.settled_with(head, target))
    }

    fn settled_with(&self, head: &str, target: &HoleSpec) -> MaskPath {
        let hole = static_path(target);
        if target.shape.keeps_previous() && !self.holes.is_empty() && !is_corrupt(&self.holes) {
            MaskPath::new(format!("{head}{}{hole}", kept_subpaths(&self.holes)))
        } else {
            MaskPath::new(format!("{head}{hole}"))
        }
    }

    fn tween(&self, target: &HoleSpec, interpolator: &dyn PathInterpolator) -> PathTween {
        let hole = static_path(target).into_string();
        let step = max_segment_length(target.shape);
        if target.shape.keeps_previous() {
            let targets = [kept_subpaths(&self.holes), hole];
            interpolator.separate(&self.holes, &targets, step)
        } else {
            interpolator.interpolate(&self.holes, &hole, step)
        }
    }

    fn compose(&self, interpolated: String, target: &HoleSpec) -> MaskPath {
        let head = self.head.as_deref().unwrap_or_default();
        if is_corrupt(&interpolated) {
            tracing::warn!("interpolated hole is corrupt, using static target hole");
            return fallback(head, target);
        }
        let composed = format!("{head}{interpolated}");
        if is_corrupt(&composed) {
            tracing::warn!("composed mask is corrupt, using static target hole");
            return fallback(head, target);
        }
        MaskPath::new(composed)
    }
}

fn fallback(head: &str, target: &HoleSpec) -> MaskPath {
    MaskPath::new(format!("{head}{}", static_path(target)))
}

fn unchanged(previous: &MaskPath) -> MaskPath {
    if previous.is_corrupt() {
        match split_canvas_head(previous.as_str()) {
            Some((canvas, _)) => MaskPath::new(format!("{}{PLACEHOLDER_HOLE}", canvas_head(canvas))),
            None => MaskPath::new(PLACEHOLDER_HOLE),
        }
    } else {
        previous.clone()
    }
}

fn normalize(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/morph.rs"]
mod tests;

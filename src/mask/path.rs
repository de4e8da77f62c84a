//! String encoding of mask paths.
//!
//! A mask path is a canvas-filling contour (the "head", always `M0,0H{w}V{h}H0V0Z`) followed by
//! one or more hole contours. Filled with the even-odd rule, the holes become transparent.

use crate::foundation::core::Size;
use crate::foundation::error::{TourError, TourResult};

const HEAD_PREFIX: &str = "M0,0H";
const HEAD_SUFFIX: &str = "H0V0Z";

/// Hole contour used whenever inputs are unusable: a 1x1 square at the origin.
pub const PLACEHOLDER_HOLE: &str = "M0,0L1,0L1,1L0,1Z";

/// An encoded mask path: canvas contour plus hole contours.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MaskPath(String);

impl MaskPath {
    /// Wrap an already encoded path.
    pub fn new(d: impl Into<String>) -> Self {
        Self(d.into())
    }

    /// Full canvas with a 1x1 hole at its center; the resting state before the first move.
    pub fn initial(canvas: Size) -> Self {
        let canvas = sanitize_canvas(canvas);
        let cx = canvas.width / 2.0;
        let cy = canvas.height / 2.0;
        Self(format!(
            "{}M{cx},{cy}L{},{cy}L{},{}L{cx},{}Z",
            canvas_head(canvas),
            cx + 1.0,
            cx + 1.0,
            cy + 1.0,
            cy + 1.0
        ))
    }

    /// Borrow the encoded path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the encoded path.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Contains a non-finite numeric token.
    pub fn is_corrupt(&self) -> bool {
        is_corrupt(&self.0)
    }

    /// Canvas size parsed from the head contour.
    pub fn canvas(&self) -> TourResult<Size> {
        split_canvas_head(&self.0)
            .map(|(size, _)| size)
            .ok_or_else(|| TourError::geometry("mask path has no canvas head"))
    }

    /// The hole contours, without the head.
    pub fn holes(&self) -> &str {
        split_canvas_head(&self.0).map_or(self.0.trim(), |(_, rest)| rest)
    }
}

impl std::fmt::Display for MaskPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MaskPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canvas contour covering `(0,0)..(w,h)`.
pub fn canvas_head(canvas: Size) -> String {
    let canvas = sanitize_canvas(canvas);
    format!(
        "{HEAD_PREFIX}{}V{}{HEAD_SUFFIX}",
        canvas.width, canvas.height
    )
}

/// Split `d` into canvas size and trimmed hole contours.
///
/// Returns `None` when `d` does not start with a well-formed, non-negative canvas head.
pub fn split_canvas_head(d: &str) -> Option<(Size, &str)> {
    let rest = d.trim_start().strip_prefix(HEAD_PREFIX)?;
    let (w, rest) = rest.split_once('V')?;
    let suffix_at = rest.find(HEAD_SUFFIX)?;
    let h = &rest[..suffix_at];
    let holes = &rest[suffix_at + HEAD_SUFFIX.len()..];
    let width = parse_canvas_number(w)?;
    let height = parse_canvas_number(h)?;
    Some((Size::new(width, height), holes.trim()))
}

fn parse_canvas_number(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Split a path into its sub-paths, one per move command.
pub fn split_subpaths(d: &str) -> Vec<&str> {
    let bytes = d.as_bytes();
    let mut starts: Vec<usize> = bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| matches!(b, b'M' | b'm'))
        .map(|(i, _)| i)
        .collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }
    let mut out = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(d.len());
        let part = d[start..end].trim();
        if !part.is_empty() {
            out.push(part);
        }
    }
    out
}

/// Everything but the first sub-path; the whole path when it has only one.
pub fn kept_subpaths(d: &str) -> String {
    let parts = split_subpaths(d);
    if parts.len() > 1 {
        parts[1..].concat()
    } else {
        d.trim().to_owned()
    }
}

/// `d` carries a NaN or infinite token.
pub fn is_corrupt(d: &str) -> bool {
    d.contains("NaN") || d.contains("inf")
}

fn sanitize_canvas(canvas: Size) -> Size {
    let fix = |v: f64| if v.is_finite() && v >= 0.0 { v } else { 100.0 };
    Size::new(fix(canvas.width), fix(canvas.height))
}

#[cfg(test)]
#[path = "../../tests/unit/mask/path.rs"]
mod tests;

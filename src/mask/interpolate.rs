//! Path interpolation capability.
//!
//! The morph engine only depends on [`PathInterpolator`]; [`RingInterpolator`] is the bundled
//! implementation. It flattens both contours into polygons, resamples them to a common point
//! count by arc length, aligns winding and start point, and lerps point pairs.

use std::fmt::Write as _;

use kurbo::{BezPath, PathEl, Point};

use crate::foundation::error::{TourError, TourResult};

/// Interpolation function from progress in `[0, 1]` to path data.
pub type PathTween = Box<dyn Fn(f64) -> String>;

/// Builds interpolation functions between path strings.
pub trait PathInterpolator {
    /// Tween from `from` to `to`; `max_segment_length` bounds the resampling step in pixels.
    fn interpolate(&self, from: &str, to: &str, max_segment_length: f64) -> PathTween;

    /// Tween from `from` to several independent contours, joined into one path string.
    fn separate(&self, from: &str, to: &[String], max_segment_length: f64) -> PathTween;
}

/// Polygon-resampling interpolator.
#[derive(Clone, Copy, Debug)]
pub struct RingInterpolator {
    /// Curve flattening tolerance in pixels.
    pub tolerance: f64,
    /// Upper bound on points per ring.
    pub max_points: usize,
}

impl Default for RingInterpolator {
    fn default() -> Self {
        Self {
            tolerance: 0.25,
            max_points: 1024,
        }
    }
}

type Ring = Vec<Point>;

impl RingInterpolator {
    fn pair(&self, from: &Ring, to: &Ring, max_segment_length: f64) -> (Ring, Ring) {
        let longest = perimeter(from).max(perimeter(to));
        let step = if max_segment_length.is_finite() && max_segment_length > 0.0 {
            max_segment_length
        } else {
            longest.max(1.0)
        };
        let n = ((longest / step).ceil() as usize).clamp(3, self.max_points.max(3));
        let a = resample(from, n);
        let mut b = resample(to, n);
        if signed_area(&a) * signed_area(&b) < 0.0 {
            b.reverse();
        }
        let shift = best_rotation(&a, &b);
        b.rotate_left(shift);
        (a, b)
    }
}

impl PathInterpolator for RingInterpolator {
    fn interpolate(&self, from: &str, to: &str, max_segment_length: f64) -> PathTween {
        let (from_rings, to_rings) = match (rings(from, self.tolerance), rings(to, self.tolerance))
        {
            (Ok(a), Ok(b)) => (a, b),
            (Err(err), _) | (_, Err(err)) => {
                tracing::debug!(%err, "interpolation endpoints unusable, snapping to target");
                let to = to.to_owned();
                return Box::new(move |_| to.clone());
            }
        };
        let (a, b) = self.pair(&from_rings[0], &to_rings[0], max_segment_length);
        Box::new(move |t| encode_lerp(&a, &b, t))
    }

    fn separate(&self, from: &str, to: &[String], max_segment_length: f64) -> PathTween {
        let from_rings = match rings(from, self.tolerance) {
            Ok(r) => r,
            Err(err) => {
                tracing::debug!(%err, "separate source unusable, snapping to targets");
                let joined = to.concat();
                return Box::new(move |_| joined.clone());
            }
        };
        let targets: Vec<Result<Vec<Ring>, String>> = to
            .iter()
            .map(|target| rings(target, self.tolerance).map_err(|_| target.clone()))
            .collect();
        let wanted: Vec<&Ring> = targets.iter().flatten().flatten().collect();
        let mut sources = match_sources(&from_rings, &wanted).into_iter();
        let mut pairs: Vec<Result<Vec<(Ring, Ring)>, String>> = Vec::with_capacity(to.len());
        for target in &targets {
            match target {
                Ok(target_rings) => pairs.push(Ok(target_rings
                    .iter()
                    .zip(sources.by_ref())
                    .map(|(t, i)| self.pair(&from_rings[i], t, max_segment_length))
                    .collect())),
                Err(raw) => pairs.push(Err(raw.clone())),
            }
        }
        Box::new(move |t| {
            let mut out = String::new();
            for pair in pairs.iter() {
                match pair {
                    Ok(contours) => {
                        for (a, b) in contours {
                            out.push_str(&encode_lerp(a, b, t));
                        }
                    }
                    Err(raw) => out.push_str(raw),
                }
            }
            out
        })
    }
}

/// Flatten `d` into closed polygons, one per sub-path.
pub(crate) fn rings(d: &str, tolerance: f64) -> TourResult<Vec<Ring>> {
    let path = BezPath::from_svg(d.trim())
        .map_err(|e| TourError::geometry(format!("unparseable path data: {e}")))?;
    let mut out: Vec<Ring> = Vec::new();
    let mut current: Ring = Vec::new();
    kurbo::flatten(path.iter(), tolerance, |el| match el {
        PathEl::MoveTo(p) => {
            if current.len() > 1 {
                out.push(std::mem::take(&mut current));
            }
            current.clear();
            current.push(p);
        }
        PathEl::LineTo(p) => current.push(p),
        PathEl::ClosePath => {
            if current.len() > 1 {
                out.push(std::mem::take(&mut current));
            }
        }
        _ => {}
    });
    if current.len() > 1 {
        out.push(current);
    }
    for ring in &mut out {
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
    }
    out.retain(|r| r.iter().all(|p| p.is_finite()));
    if out.is_empty() {
        return Err(TourError::geometry("path has no usable contour"));
    }
    Ok(out)
}

/// Source ring index for each target ring.
///
/// Closest centroids are paired first and each source is used once while any remain, so a
/// contour carried over unchanged stays in place. Surplus targets grow from their nearest source.
fn match_sources(sources: &[Ring], targets: &[&Ring]) -> Vec<usize> {
    let from: Vec<Point> = sources.iter().map(centroid).collect();
    let to: Vec<Point> = targets.iter().map(|r| centroid(r)).collect();
    let mut candidates: Vec<(f64, usize, usize)> = Vec::with_capacity(from.len() * to.len());
    for (t, c) in to.iter().enumerate() {
        for (s, f) in from.iter().enumerate() {
            candidates.push((c.distance(*f), t, s));
        }
    }
    candidates.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut assigned: Vec<Option<usize>> = vec![None; to.len()];
    let mut used = vec![false; from.len()];
    for &(_, t, s) in &candidates {
        if assigned[t].is_none() && !used[s] {
            assigned[t] = Some(s);
            used[s] = true;
        }
    }
    assigned
        .into_iter()
        .enumerate()
        .map(|(t, s)| {
            s.unwrap_or_else(|| {
                candidates
                    .iter()
                    .find(|c| c.1 == t)
                    .map_or(0, |c| c.2)
            })
        })
        .collect()
}

fn centroid(ring: &Ring) -> Point {
    let n = ring.len().max(1) as f64;
    let sum = ring.iter().fold((0.0, 0.0), |acc, p| (acc.0 + p.x, acc.1 + p.y));
    Point::new(sum.0 / n, sum.1 / n)
}

fn perimeter(ring: &Ring) -> f64 {
    if ring.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for i in 0..ring.len() {
        total += ring[i].distance(ring[(i + 1) % ring.len()]);
    }
    total
}

fn signed_area(ring: &Ring) -> f64 {
    let mut acc = 0.0;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        acc += a.x * b.y - b.x * a.y;
    }
    acc * 0.5
}

fn resample(ring: &Ring, n: usize) -> Ring {
    let total = perimeter(ring);
    if ring.len() < 2 || total == 0.0 {
        return vec![ring[0]; n];
    }
    let spacing = total / n as f64;
    let mut out = Vec::with_capacity(n);
    let mut seg = 0;
    let mut seg_start = 0.0;
    for k in 0..n {
        let target = spacing * k as f64;
        loop {
            let a = ring[seg];
            let b = ring[(seg + 1) % ring.len()];
            let len = a.distance(b);
            if target <= seg_start + len || seg + 1 == ring.len() {
                let t = if len > 0.0 {
                    ((target - seg_start) / len).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                out.push(a.lerp(b, t));
                break;
            }
            seg_start += len;
            seg += 1;
        }
    }
    out
}

fn best_rotation(a: &Ring, b: &Ring) -> usize {
    let n = a.len();
    let mut best = (0, f64::INFINITY);
    for shift in 0..n {
        let mut cost = 0.0;
        for i in 0..n {
            cost += (a[i] - b[(i + shift) % n]).hypot2();
            if cost >= best.1 {
                break;
            }
        }
        if cost < best.1 {
            best = (shift, cost);
        }
    }
    best.0
}

fn encode_lerp(a: &Ring, b: &Ring, t: f64) -> String {
    let mut out = String::with_capacity(a.len() * 16);
    for (i, (p, q)) in a.iter().zip(b).enumerate() {
        let pt = p.lerp(*q, t);
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(out, "{cmd}{},{}", round3(pt.x), round3(pt.y));
    }
    out.push('Z');
    out
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
#[path = "../../tests/unit/mask/interpolate.rs"]
mod tests;

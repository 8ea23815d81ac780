//! Track geometry: sampling the circular path, rotating samples into the
//! slider's frame, and mapping values and pointer positions onto samples.
//!
//! Nothing here touches the DOM. The rendered path is reached through
//! [`TrackPath`], which the web front-end implements over an SVG element and
//! [`CircleTrack`] implements analytically.

use crate::config::SliderConfig;
use glam::Vec2;

/// A position on the track, tagged with its arc length from the path start
/// when it came from sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub d: Option<f32>,
}

impl Point {
    pub fn new(x: f32, y: f32, d: Option<f32>) -> Self {
        Self { x, y, d }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Query primitives of a rendered path.
pub trait TrackPath {
    /// Total arc length, or `None` when the path is not available yet.
    fn total_length(&self) -> Option<f32>;
    /// Point at arc length `d` in the path's own coordinate space.
    fn point_at_length(&self, d: f32) -> Option<Vec2>;
}

/// Analytic stand-in for an SVG `<circle>`: starts at 3 o'clock and runs
/// clockwise in y-down coordinates.
#[derive(Clone, Copy, Debug)]
pub struct CircleTrack {
    pub center: Vec2,
    pub radius: f32,
}

impl TrackPath for CircleTrack {
    fn total_length(&self) -> Option<f32> {
        (self.radius > 0.0).then(|| self.radius * std::f32::consts::TAU)
    }

    fn point_at_length(&self, d: f32) -> Option<Vec2> {
        let total = self.total_length()?;
        let angle = d.clamp(0.0, total) / self.radius;
        Some(self.center + Vec2::new(angle.cos(), angle.sin()) * self.radius)
    }
}

/// Snaps to 1/1000 of a unit. Sampled coordinates and distances are compared
/// at this resolution, so the coincident first and last samples tie exactly.
#[inline]
pub fn round_thousandths(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

#[inline]
pub fn rotate_point(p: Point, center: Vec2, degrees: f32) -> Point {
    let (sin, cos) = degrees_to_radians(degrees).sin_cos();
    let rel = p.pos() - center;
    Point {
        x: rel.x * cos - rel.y * sin + center.x,
        y: rel.x * sin + rel.y * cos + center.y,
        d: p.d,
    }
}

pub fn rotate_points(points: &[Point], center: Vec2, degrees: f32) -> Vec<Point> {
    points
        .iter()
        .map(|p| rotate_point(*p, center, degrees))
        .collect()
}

/// Samples `path` once per step, plus the closing sample at (or just past) the
/// end, then rotates everything about `center`. Coordinates are snapped to
/// thousandths before rotating.
///
/// Returns an empty vector when the path has no usable length or cannot
/// answer a point query.
pub fn sample_path(
    path: &dyn TrackPath,
    step_count: f32,
    center: Vec2,
    rotation_degrees: f32,
) -> Vec<Point> {
    let total = match path.total_length() {
        Some(t) if t.is_finite() && t > 0.0 => t,
        _ => return Vec::new(),
    };
    if !step_count.is_finite() || step_count <= 0.0 {
        return Vec::new();
    }
    if f64::from(step_count) > crate::constants::MAX_STEPS {
        log::warn!("[geometry] {step_count} steps exceeds the sample limit; not sampling");
        return Vec::new();
    }

    let limit = total + crate::constants::SAMPLE_OVERSHOOT;
    let mut points = Vec::with_capacity(step_count.ceil() as usize + 2);
    for i in 0usize.. {
        let d = total * (i as f32 / step_count);
        if d >= limit {
            break;
        }
        let Some(p) = path.point_at_length(d) else {
            log::warn!("[geometry] path gave no point at d={d:.3}; dropping samples");
            return Vec::new();
        };
        points.push(Point::new(round_thousandths(p.x), round_thousandths(p.y), Some(d)));
    }

    // a fractional step count can stop short of the end; close the loop anyway
    if points.last().and_then(|p| p.d).is_some_and(|d| d < total) {
        if let Some(p) = path.point_at_length(total) {
            points.push(Point::new(round_thousandths(p.x), round_thousandths(p.y), Some(total)));
        }
    }

    rotate_points(&points, center, rotation_degrees)
}

/// Sample for `value`, found by walking step thresholds up from `min`.
///
/// Only a value that equals an accumulated threshold exactly moves the index
/// off 0; anything between thresholds resolves to the first sample. Callers
/// relying on in-between values should snap them to the step grid first.
pub fn value_to_point(value: f64, config: &SliderConfig, samples: &[Point]) -> Option<Point> {
    let mut index = 0usize;
    let mut next_value = config.min();
    for i in 0..samples.len() {
        next_value += config.step();
        if value >= next_value && value <= next_value {
            index = i + 1;
        }
    }
    samples.get(index).copied()
}

/// Nearest sample to `position`.
///
/// If the nearest is the first sample and `position` lies left of it, the
/// second-nearest wins so the pointer does not snap across the start seam.
pub fn closest_point(position: Vec2, samples: &[Point]) -> Option<Point> {
    let mut ranked: Vec<(usize, f32)> = samples
        .iter()
        .enumerate()
        .map(|(i, p)| (i, round_thousandths(position.distance(p.pos()))))
        .collect();
    // stable: equal distances keep the lower index first
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let &(best, _) = ranked.first()?;
    if best == 0 && position.x < samples[0].x {
        if let Some(&(second, _)) = ranked.get(1) {
            return Some(samples[second]);
        }
    }
    Some(samples[best])
}

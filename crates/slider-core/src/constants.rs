use glam::Vec2;

// Layout of the slider's SVG surface, shared by the geometry and the markup.

pub const VIEW_BOX_SIZE: f32 = 320.0; // square view box, in SVG user units
pub const TRACK_CENTER: Vec2 = Vec2::new(160.0, 160.0);
pub const TRACK_RADIUS: f32 = 128.0;

// An SVG circle starts at 3 o'clock; the slider starts at 12 o'clock.
pub const START_ROTATION_DEG: f32 = -90.0;

// Sampling keeps going while arc length < total + overshoot, so the last
// sample closes the loop.
pub const SAMPLE_OVERSHOOT: f32 = 1.0;

#[inline]
pub fn track_perimeter() -> f32 {
    TRACK_RADIUS * std::f32::consts::TAU
}

// Upper bound on (max - min) / step; each step is one cached sample.
pub const MAX_STEPS: f64 = 100_000.0;

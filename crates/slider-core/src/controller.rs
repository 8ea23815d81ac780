//! Drag handling and slider state.
//!
//! [`SliderController`] owns everything mutable about one slider: the current
//! value, the drag flag and the sample cache. Each operation returns the
//! [`SliderUpdate`] the front-end should render and announce, or `None` when
//! nothing changed.

use crate::config::{round_half_up, SliderConfig};
use crate::constants::{track_perimeter, START_ROTATION_DEG, TRACK_CENTER};
use crate::geometry::{closest_point, sample_path, value_to_point, Point, TrackPath};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    pub value: f64,
    pub drag: DragState,
}

/// Origin of the slider surface's bounding rectangle, in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
}

impl Rect {
    #[inline]
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        client - Vec2::new(self.left, self.top)
    }
}

/// Render update plus the value to announce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderUpdate {
    pub value: f64,
    /// True for a drag move or an external set; layout passes only re-render.
    pub committed: bool,
    pub thumb: Point,
    pub portion_percentage: f32,
    /// Visible length of the progress arc.
    pub arc_length: f32,
    pub perimeter: f32,
}

#[derive(Clone, Debug)]
pub struct SliderController {
    config: SliderConfig,
    state: SliderState,
    samples: Vec<Point>,
    track_length: Option<f32>,
    perimeter: f32,
    center: Vec2,
    rotation_degrees: f32,
}

impl SliderController {
    pub fn new(config: SliderConfig, value: f64) -> Self {
        Self {
            state: SliderState {
                value: config.clamp(value),
                drag: DragState::Idle,
            },
            config,
            samples: Vec::new(),
            track_length: None,
            perimeter: track_perimeter(),
            center: TRACK_CENTER,
            rotation_degrees: START_ROTATION_DEG,
        }
    }

    /// Overrides the default track placement (center and start rotation).
    pub fn with_placement(mut self, center: Vec2, rotation_degrees: f32) -> Self {
        self.center = center;
        self.rotation_degrees = rotation_degrees;
        self
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn value(&self) -> f64 {
        self.state.value
    }

    pub fn is_dragging(&self) -> bool {
        self.state.drag == DragState::Dragging
    }

    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    pub fn track_length(&self) -> Option<f32> {
        self.track_length
    }

    /// Regenerates the sample cache from `path` and re-renders the current
    /// value. Run on mount and whenever the layout changes.
    pub fn layout(&mut self, path: &dyn TrackPath) -> Option<SliderUpdate> {
        self.track_length = path.total_length().filter(|l| l.is_finite() && *l > 0.0);
        self.samples = sample_path(
            path,
            self.config.steps() as f32,
            self.center,
            self.rotation_degrees,
        );
        if self.samples.is_empty() {
            log::warn!("[slider] track not measurable; interaction disabled until next layout");
        } else {
            log::debug!(
                "[slider] layout: {} samples over length {:.3}",
                self.samples.len(),
                self.track_length.unwrap_or_default()
            );
        }
        self.render_current(false)
    }

    pub fn drag_start(&mut self) {
        self.state.drag = DragState::Dragging;
    }

    pub fn drag_end(&mut self) {
        self.state.drag = DragState::Idle;
    }

    /// Follows the pointer while dragging. `client` is in client coordinates;
    /// `rect` is the slider surface's bounding rectangle.
    pub fn on_move(&mut self, client: Vec2, rect: &Rect) -> Option<SliderUpdate> {
        if !self.is_dragging() {
            return None;
        }
        let track_length = self.track_length?;
        let thumb = closest_point(rect.to_local(client), &self.samples)?;
        let covered = thumb.d.unwrap_or_default() / track_length;

        let value = round_half_up(self.config.min() + self.config.range() * f64::from(covered));
        self.state.value = self.config.clamp(value);
        Some(SliderUpdate {
            value: self.state.value,
            committed: true,
            thumb,
            portion_percentage: covered * 100.0,
            arc_length: covered * self.perimeter,
            perimeter: self.perimeter,
        })
    }

    /// Click on the track: one move bracketed by drag start and end.
    pub fn tap(&mut self, client: Vec2, rect: &Rect) -> Option<SliderUpdate> {
        self.drag_start();
        let update = self.on_move(client, rect);
        self.drag_end();
        update
    }

    /// Value pushed in by the embedding page. Always stored (clamped); the
    /// update is `None` only when no sample matches yet.
    pub fn set_value(&mut self, value: f64) -> Option<SliderUpdate> {
        self.state.value = self.config.clamp(value);
        self.render_current(true)
    }

    fn render_current(&self, committed: bool) -> Option<SliderUpdate> {
        let value = self.state.value;
        let thumb = value_to_point(value, &self.config, &self.samples)?;
        let portion_percentage = self.config.portion_percentage(value) as f32;
        Some(SliderUpdate {
            value,
            committed,
            thumb,
            portion_percentage,
            arc_length: self.perimeter * portion_percentage / 100.0,
            perimeter: self.perimeter,
        })
    }
}

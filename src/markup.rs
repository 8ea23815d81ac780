//! Markup and attribute strings written into the slider's shadow root.

use crate::constants::*;
use slider_core::{track_perimeter, Point, TRACK_CENTER, TRACK_RADIUS, VIEW_BOX_SIZE};

/// `transform` style that moves the thumb (drawn at the origin) onto `p`.
#[inline]
pub fn thumb_transform(p: &Point) -> String {
    format!("translate({}px, {}px)", p.x, p.y)
}

/// `stroke-dasharray` showing `arc_length` of the progress circle.
#[inline]
pub fn dash_array(arc_length: f32, perimeter: f32) -> String {
    format!("{}, {}", arc_length, perimeter)
}

pub fn value_label(value: f64) -> String {
    // whole numbers print without a trailing ".0"
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Shadow-root content: the track, the progress arc (rotated to start at
/// 12 o'clock), the thumb and empty value/units labels.
pub fn slider_markup() -> String {
    let size = VIEW_BOX_SIZE;
    let (cx, cy, r) = (TRACK_CENTER.x, TRACK_CENTER.y, TRACK_RADIUS);
    let perimeter = track_perimeter();
    format!(
        r#"<style>
:host {{ display: inline-block; position: relative; touch-action: none; user-select: none; }}
#{svg} {{ cursor: pointer; }}
#{svg}.{moving} {{ cursor: grabbing; }}
#{track} {{ fill: none; stroke: #ddd; stroke-width: {stroke}; }}
#{progress} {{ fill: none; stroke: currentColor; stroke-width: {stroke}; stroke-linecap: round; }}
#{thumb} {{ fill: #fff; stroke: currentColor; stroke-width: 2; }}
.label {{ position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; pointer-events: none; }}
</style>
<svg id="{svg}" viewBox="0 0 {size} {size}" width="{size}" height="{size}">
  <circle id="{track}" cx="{cx}" cy="{cy}" r="{r}"></circle>
  <circle id="{progress}" cx="{cx}" cy="{cy}" r="{r}" transform="rotate(-90 {cx} {cy})" stroke-dasharray="0, {perimeter}"></circle>
  <circle id="{thumb}" cx="0" cy="0" r="{thumb_r}"></circle>
</svg>
<div class="label"><span id="{value_id}"></span>&nbsp;<span id="{units_id}"></span></div>"#,
        svg = SVG_ID,
        moving = MOVING_CLASS,
        track = TRACK_ID,
        progress = PROGRESS_ID,
        thumb = THUMB_ID,
        stroke = TRACK_STROKE_WIDTH,
        thumb_r = THUMB_RADIUS,
        value_id = VALUE_LABEL_ID,
        units_id = UNITS_LABEL_ID,
    )
}

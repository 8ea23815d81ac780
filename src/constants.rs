// DOM names used by the slider markup and its event wiring.

// Element ids inside the slider's shadow root
pub const SVG_ID: &str = "svg";
pub const TRACK_ID: &str = "track";
pub const PROGRESS_ID: &str = "progress";
pub const THUMB_ID: &str = "thumb";
pub const VALUE_LABEL_ID: &str = "value";
pub const UNITS_LABEL_ID: &str = "units";

// Set on host and svg while a drag is in progress
pub const MOVING_CLASS: &str = "moving";

// Crossing this viewport width re-samples the track
pub const LAYOUT_BREAKPOINT_QUERY: &str = "(max-width: 960px)";

// CustomEvent fired on the host for every committed value; `detail` is the value
pub const CHANGE_EVENT: &str = "change";

// Thumb and stroke sizing (SVG user units)
pub const THUMB_RADIUS: f32 = 12.0;
pub const TRACK_STROKE_WIDTH: f32 = 8.0;

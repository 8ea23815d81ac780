// Pointer capability shared by mouse and touch input.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

impl PointerKind {
    pub const ALL: [PointerKind; 2] = [PointerKind::Mouse, PointerKind::Touch];

    #[inline]
    pub fn event_name(self, phase: PointerPhase) -> &'static str {
        match (self, phase) {
            (PointerKind::Mouse, PointerPhase::Start) => "mousedown",
            (PointerKind::Mouse, PointerPhase::Move) => "mousemove",
            (PointerKind::Mouse, PointerPhase::End) => "mouseup",
            (PointerKind::Touch, PointerPhase::Start) => "touchstart",
            (PointerKind::Touch, PointerPhase::Move) => "touchmove",
            (PointerKind::Touch, PointerPhase::End) => "touchend",
        }
    }
}

// Clicking the track runs a whole drag in one go
pub const TAP_EVENT: &str = "click";

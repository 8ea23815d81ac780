pub mod layout;
pub mod pointer;

pub use layout::wire_breakpoint_relayout;
pub use pointer::{wire_pointer_handlers, SliderWiring};

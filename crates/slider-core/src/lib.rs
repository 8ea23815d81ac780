pub mod config;
pub mod constants;
pub mod controller;
pub mod geometry;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use geometry::*;

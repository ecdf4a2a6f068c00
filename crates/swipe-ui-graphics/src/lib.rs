//! Pure math/data for positions & units used by the swipe crates
//!
//! This crate contains the point type and density-independent unit types
//! shared by the input model, the recognizer and the test harness.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::Point;
    pub use crate::unit::{Dp, Px};
}

#[cfg(test)]
#[path = "tests/graphics_tests.rs"]
mod tests;

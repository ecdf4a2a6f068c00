//! Animation system for swipe gesture feedback
//!
//! Provides time-based value interpolation with easing curves, driven by the
//! runtime's frame clock.

mod animation;

pub use animation::*;

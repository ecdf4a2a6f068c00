//! Test harness for swipe handlers.
//!
//! [`SwipeTestRule`] installs a [`swipe_foundation::SwipeHandler`] against
//! recording collaborators and a manually advanced frame clock, so tests can
//! replay input and inspect every host-visible effect.

pub mod events;
mod testing;

pub use testing::{ScrollCall, SwipeTestRule};

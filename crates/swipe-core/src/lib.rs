//! Core runtime for swipe gesture handling.
//!
//! Everything here runs on one thread: platform events, frame callbacks that
//! drive animations, and deferred UI tasks all execute on the same loop, so
//! state shared between them lives in `Rc`/`RefCell` rather than behind locks.

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;

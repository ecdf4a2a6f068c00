//! Platform abstraction traits for runtime services.
//!
//! These traits let the runtime delegate frame scheduling and timing to the
//! host event loop without depending on a particular windowing stack.

/// Schedules work for the runtime.
///
/// Implementations are responsible for waking the host loop so that it
/// drains frame callbacks and deferred tasks. They must be safe to use from
/// multiple threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;
}

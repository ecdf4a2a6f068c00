//! Wall-clock driver for the swipe runtime.
//!
//! A host builds one [`StdRuntime`], installs gesture handlers against its
//! [`RuntimeHandle`] and, from its event loop, pumps whenever
//! [`StdRuntime::take_frame_request`] reports that animations or deferred
//! tasks are waiting.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use swipe_core::{Clock, Runtime, RuntimeHandle, RuntimeScheduler};
use web_time::Instant;

/// Latches frame requests until the host loop picks them up.
#[derive(Debug, Default)]
pub struct FrameRequests {
    pending: AtomicBool,
}

impl FrameRequests {
    fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

impl RuntimeScheduler for FrameRequests {
    fn schedule_frame(&self) {
        self.pending.store(true, Ordering::Release);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }
}

pub struct StdRuntime {
    runtime: Runtime,
    requests: Arc<FrameRequests>,
    clock: StdClock,
    epoch: Instant,
}

impl StdRuntime {
    pub fn new() -> Self {
        let requests = Arc::new(FrameRequests::default());
        let clock = StdClock;
        Self {
            runtime: Runtime::new(requests.clone()),
            requests,
            epoch: clock.now(),
            clock,
        }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    /// Whether anything asked for a frame since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.requests.take()
    }

    /// Frame timestamp: nanoseconds since the runtime was created.
    pub fn frame_time_nanos(&self) -> u64 {
        self.clock.now().duration_since(self.epoch).as_nanos() as u64
    }

    /// Runs due frame callbacks, then deferred UI tasks. Returns whether the
    /// runtime still wants frames.
    pub fn pump(&self) -> bool {
        let handle = self.runtime.handle();
        let frame_time = self.frame_time_nanos();
        let frames = handle.drain_frame_callbacks(frame_time);
        let tasks = handle.drain_ui();
        if frames > 0 || tasks > 0 {
            log::trace!("frame at {frame_time}ns: {frames} callbacks, {tasks} tasks");
        }
        self.runtime.needs_frame()
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("requests", &self.requests)
            .field("needs_frame", &self.runtime.needs_frame())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::thread::ThreadId;

use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use crate::FrameCallbackId;

type UiTask = Box<dyn FnOnce() + 'static>;
type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    needs_frame: Cell<bool>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<u64>,
    local_tasks: RefCell<VecDeque<UiTask>>,
    ui_thread_id: ThreadId,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            needs_frame: Cell::new(false),
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
            local_tasks: RefCell::new(VecDeque::new()),
            ui_thread_id: std::thread::current().id(),
        }
    }

    fn schedule(&self) {
        self.needs_frame.set(true);
        self.scheduler.schedule_frame();
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    /// Queues a closure on the UI thread's local queue.
    ///
    /// The closure may capture `Rc`/`RefCell` values because it never leaves the
    /// runtime thread. It runs on the next `drain_ui`, never inline.
    fn enqueue_ui_task(&self, task: UiTask) {
        self.local_tasks.borrow_mut().push_back(task);
        self.schedule();
    }

    fn drain_ui(&self) -> usize {
        let mut executed = 0;
        loop {
            let task = {
                let mut local = self.local_tasks.borrow_mut();
                local.pop_front()
            };

            match task {
                Some(task) => {
                    executed += 1;
                    task();
                }
                None => break,
            }
        }
        self.settle_needs_frame();
        executed
    }

    fn has_pending_ui(&self) -> bool {
        self.local_tasks
            .try_borrow()
            .map(|tasks| !tasks.is_empty())
            .unwrap_or(true)
    }

    fn register_frame_callback(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        self.schedule();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
        drop(callbacks);
        self.settle_needs_frame();
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        let mut pending: Vec<FrameCallback> = Vec::with_capacity(callbacks.len());
        while let Some(mut entry) = callbacks.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push(callback);
            }
        }
        drop(callbacks);
        let count = pending.len();
        for callback in pending {
            callback(frame_time_nanos);
        }
        self.settle_needs_frame();
        count
    }

    fn settle_needs_frame(&self) {
        if !self.has_frame_callbacks() && !self.has_pending_ui() {
            self.needs_frame.set(false);
        }
    }
}

/// Owner of the runtime state. Dropping it drops every pending frame
/// callback and deferred task; outstanding [`RuntimeHandle`]s become inert.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
            ui_thread_id: self.inner.ui_thread_id,
        }
    }

    pub fn needs_frame(&self) -> bool {
        self.inner.needs_frame.get()
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(Arc::new(DefaultScheduler))
    }
}

#[derive(Default)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
    ui_thread_id: ThreadId,
}

impl RuntimeHandle {
    pub fn schedule(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.schedule();
        }
    }

    /// Schedules work that must run on the runtime thread after the current
    /// turn completes.
    ///
    /// The closure runs when the host next calls [`RuntimeHandle::drain_ui`],
    /// so it may capture `Rc`/`RefCell` values. When the runtime is already
    /// gone the task is dropped without running.
    pub fn enqueue_ui_task(&self, task: Box<dyn FnOnce() + 'static>) {
        match self.inner.upgrade() {
            Some(inner) => inner.enqueue_ui_task(task),
            None => log::trace!("runtime dropped; discarding deferred task"),
        }
    }

    /// Runs every queued UI task, including tasks queued while draining.
    /// Returns the number of tasks executed.
    pub fn drain_ui(&self) -> usize {
        self.inner
            .upgrade()
            .map(|inner| inner.drain_ui())
            .unwrap_or(0)
    }

    pub fn has_pending_ui(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_pending_ui())
            .unwrap_or(false)
    }

    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    /// Runs the callbacks registered before this call with `frame_time_nanos`.
    /// Callbacks registered while draining wait for the next frame.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        self.inner
            .upgrade()
            .map(|inner| inner.drain_frame_callbacks(frame_time_nanos))
            .unwrap_or(0)
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    pub fn needs_frame(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.needs_frame.get())
            .unwrap_or(false)
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    pub fn assert_ui_thread(&self) {
        debug_assert_eq!(
            std::thread::current().id(),
            self.ui_thread_id,
            "gesture state touched off the runtime's UI thread"
        );
    }
}

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<FrameCallback>,
}

use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct CountingScheduler {
    frames: AtomicUsize,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.frames.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn ui_tasks_run_on_drain_not_inline() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let ran = Rc::new(Cell::new(false));

    {
        let ran = Rc::clone(&ran);
        handle.enqueue_ui_task(Box::new(move || ran.set(true)));
    }

    assert!(!ran.get(), "task must not run inside enqueue");
    assert!(handle.has_pending_ui());
    assert!(runtime.needs_frame());

    assert_eq!(handle.drain_ui(), 1);
    assert!(ran.get());
    assert!(!handle.has_pending_ui());
    assert!(!runtime.needs_frame());
}

#[test]
fn tasks_enqueued_while_draining_run_in_same_drain() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let order = Rc::new(RefCell::new(Vec::new()));

    {
        let order = Rc::clone(&order);
        let inner_handle = handle.clone();
        handle.enqueue_ui_task(Box::new(move || {
            order.borrow_mut().push("outer");
            let order = Rc::clone(&order);
            inner_handle.enqueue_ui_task(Box::new(move || order.borrow_mut().push("inner")));
        }));
    }

    assert_eq!(handle.drain_ui(), 2);
    assert_eq!(order.borrow().as_slice(), &["outer", "inner"]);
}

#[test]
fn scheduler_is_asked_for_a_frame_on_registration() {
    let scheduler = Arc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let handle = runtime.handle();

    let _registration = runtime.frame_clock().with_frame_nanos(|_| {});
    handle.enqueue_ui_task(Box::new(|| {}));

    assert_eq!(scheduler.frames.load(Ordering::SeqCst), 2);
}

#[test]
fn frame_callbacks_receive_frame_time_once() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let registration = {
        let seen = Rc::clone(&seen);
        runtime
            .frame_clock()
            .with_frame_nanos(move |time| seen.borrow_mut().push(time))
    };
    assert!(registration.is_active());
    assert!(handle.has_frame_callbacks());

    assert_eq!(handle.drain_frame_callbacks(16_000_000), 1);
    assert_eq!(handle.drain_frame_callbacks(32_000_000), 0);
    assert_eq!(seen.borrow().as_slice(), &[16_000_000]);
    assert!(!runtime.needs_frame());
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let follow_up = Rc::new(RefCell::new(None));

    {
        let seen = Rc::clone(&seen);
        let follow_up = Rc::clone(&follow_up);
        let clock = runtime.frame_clock();
        handle.register_frame_callback(move |time| {
            seen.borrow_mut().push(time);
            let seen = Rc::clone(&seen);
            let registration = clock.with_frame_nanos(move |time| seen.borrow_mut().push(time));
            follow_up.borrow_mut().replace(registration);
        });
    }

    handle.drain_frame_callbacks(1);
    assert_eq!(seen.borrow().as_slice(), &[1]);
    handle.drain_frame_callbacks(2);
    assert_eq!(seen.borrow().as_slice(), &[1, 2]);
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let fired = Rc::new(Cell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        runtime
            .frame_clock()
            .with_frame_nanos(move |_| fired.set(true))
    };
    drop(registration);

    assert!(!handle.has_frame_callbacks());
    handle.drain_frame_callbacks(1);
    assert!(!fired.get());
    assert!(!runtime.needs_frame());
}

#[test]
fn cancelled_registration_does_not_fire() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let fired = Rc::new(Cell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        runtime
            .frame_clock()
            .with_frame_nanos(move |_| fired.set(true))
    };
    registration.cancel();

    handle.drain_frame_callbacks(1);
    assert!(!fired.get());
}

#[test]
fn work_posted_after_runtime_drop_is_discarded() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let ran = Rc::new(Cell::new(false));
    drop(runtime);

    assert!(!handle.is_alive());
    {
        let ran = Rc::clone(&ran);
        handle.enqueue_ui_task(Box::new(move || ran.set(true)));
    }
    assert_eq!(handle.drain_ui(), 0);
    assert!(!ran.get());

    let registration = handle.frame_clock().with_frame_nanos(|_| {});
    assert!(!registration.is_active());
}

#[test]
fn pending_work_is_dropped_with_runtime() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let ran = Rc::new(Cell::new(false));
    {
        let ran = Rc::clone(&ran);
        handle.enqueue_ui_task(Box::new(move || ran.set(true)));
    }
    drop(runtime);

    assert_eq!(handle.drain_ui(), 0);
    assert!(!ran.get());
    assert_eq!(Rc::strong_count(&ran), 1, "queued closure must be freed");
}

use super::StdRuntime;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn queued_work_raises_one_frame_request() {
    let runtime = StdRuntime::new();
    assert!(!runtime.take_frame_request());

    runtime
        .runtime_handle()
        .enqueue_ui_task(Box::new(|| {}));

    assert!(runtime.take_frame_request());
    assert!(!runtime.take_frame_request(), "request is consumed once");
}

#[test]
fn pump_runs_frames_then_tasks() {
    let runtime = StdRuntime::new();
    let handle = runtime.runtime_handle();
    let order = Rc::new(RefCell::new(Vec::new()));

    {
        let order = Rc::clone(&order);
        handle.enqueue_ui_task(Box::new(move || order.borrow_mut().push("task")));
    }
    let _registration = {
        let order = Rc::clone(&order);
        handle
            .frame_clock()
            .with_frame_nanos(move |_| order.borrow_mut().push("frame"))
    };

    let needs_more = runtime.pump();

    assert_eq!(order.borrow().as_slice(), &["frame", "task"]);
    assert!(!needs_more);
}

#[test]
fn rescheduling_from_a_frame_requests_the_next_one() {
    let runtime = StdRuntime::new();
    let handle = runtime.runtime_handle();
    let times = Rc::new(RefCell::new(Vec::new()));
    let next = Rc::new(RefCell::new(None));

    let first = {
        let times = Rc::clone(&times);
        let next = Rc::clone(&next);
        let clock = handle.frame_clock();
        handle.frame_clock().with_frame_nanos(move |time| {
            times.borrow_mut().push(time);
            let times = Rc::clone(&times);
            *next.borrow_mut() =
                Some(clock.with_frame_nanos(move |time| times.borrow_mut().push(time)));
        })
    };
    assert!(runtime.take_frame_request());

    assert!(runtime.pump(), "a callback is still registered");
    assert!(runtime.take_frame_request());
    assert!(!runtime.pump());
    assert!(!runtime.take_frame_request());

    let times = times.borrow();
    assert_eq!(times.len(), 2);
    assert!(times[1] >= times[0]);
    drop(first);
}

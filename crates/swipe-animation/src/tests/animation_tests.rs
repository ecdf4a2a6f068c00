use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swipe_core::Runtime;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

fn recorder() -> (Rc<RefCell<Vec<f32>>>, impl Fn(f32) + 'static) {
    let samples = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&samples);
    (samples, move |value| sink.borrow_mut().push(value))
}

#[test]
fn simple_animation_interpolates_over_time() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let animation = SimpleAnimation::new(runtime.frame_clock());
    let (samples, callback) = recorder();

    animation.start(callback, 0.0, 1.0, AnimationSpec::linear(100));
    assert!(animation.animating());
    assert_eq!(animation.value(-1.0), 0.0);

    let mut frame_time = 0u64;
    let mut saw_midpoint = false;
    for _ in 0..32 {
        if !handle.has_frame_callbacks() {
            break;
        }
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
        let last = *samples.borrow().last().expect("frame reported a value");
        if last > 0.0 && last < 1.0 {
            saw_midpoint = true;
        }
    }

    let samples = samples.borrow();
    assert_eq!(samples[0], 0.0, "first frame reports the start value");
    assert!(saw_midpoint, "animation should report intermediate values");
    assert_eq!(*samples.last().expect("samples recorded"), 1.0);
    assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(!animation.animating());
    assert!(!runtime.needs_frame());
}

#[test]
fn value_returns_default_when_idle_and_inside_final_callback() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let animation = Rc::new(SimpleAnimation::new(runtime.frame_clock()));
    let observed = Rc::new(RefCell::new(Vec::new()));

    assert_eq!(animation.value(0.25), 0.25);

    {
        let weak = Rc::downgrade(&animation);
        let observed = Rc::clone(&observed);
        animation.start(
            move |value| {
                if let Some(animation) = weak.upgrade() {
                    observed
                        .borrow_mut()
                        .push((value, animation.value(-1.0), animation.animating()));
                }
            },
            0.0,
            1.0,
            AnimationSpec::linear(500),
        );
    }

    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(250_000_000);
    handle.drain_frame_callbacks(500_000_000);

    let observed = observed.borrow();
    assert_eq!(observed.len(), 3);
    assert_eq!(observed[0], (0.0, 0.0, true));
    assert_eq!(observed[1], (0.5, 0.5, true));
    assert_eq!(observed[2], (1.0, -1.0, false));
}

#[test]
fn stop_prevents_further_callbacks() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let animation = SimpleAnimation::new(runtime.frame_clock());
    let (samples, callback) = recorder();

    animation.start(callback, 1.0, 0.0, AnimationSpec::linear(200));
    handle.drain_frame_callbacks(FRAME_NANOS);
    assert_eq!(samples.borrow().len(), 1);

    animation.stop();
    assert!(!animation.animating());
    assert!(!handle.has_frame_callbacks());
    handle.drain_frame_callbacks(2 * FRAME_NANOS);
    assert_eq!(samples.borrow().len(), 1);
    assert_eq!(animation.value(0.0), 0.0);
}

#[test]
fn restart_replaces_running_animation() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let animation = SimpleAnimation::new(runtime.frame_clock());
    let (first, first_callback) = recorder();
    let (second, second_callback) = recorder();

    animation.start(first_callback, 0.0, 1.0, AnimationSpec::linear(100));
    handle.drain_frame_callbacks(0);
    animation.start(second_callback, 1.5, 0.0, AnimationSpec::linear(100));
    handle.drain_frame_callbacks(50_000_000);
    handle.drain_frame_callbacks(150_000_000);

    assert_eq!(first.borrow().as_slice(), &[0.0]);
    assert_eq!(second.borrow().as_slice(), &[1.5, 0.0]);
}

#[test]
fn zero_duration_finishes_on_first_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let animation = SimpleAnimation::new(runtime.frame_clock());
    let (samples, callback) = recorder();

    animation.start(callback, 0.6, 0.0, AnimationSpec::linear(0));
    handle.drain_frame_callbacks(FRAME_NANOS);

    assert_eq!(samples.borrow().as_slice(), &[0.0]);
    assert!(!animation.animating());
}

#[test]
fn dropping_animation_silences_pending_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let calls = Rc::new(Cell::new(0));
    let animation = SimpleAnimation::new(runtime.frame_clock());
    {
        let calls = Rc::clone(&calls);
        animation.start(
            move |_| calls.set(calls.get() + 1),
            0.0,
            1.0,
            AnimationSpec::linear(100),
        );
    }
    drop(animation);

    handle.drain_frame_callbacks(FRAME_NANOS);
    assert_eq!(calls.get(), 0);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!(
            (start - 0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!(
            (end - 1.0).abs() < 0.01,
            "End should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn ease_out_leads_linear_at_midpoint() {
    assert!(Easing::EaseOut.transform(0.5) > 0.5);
    assert!(Easing::EaseIn.transform(0.5) < 0.5);
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowIn);
}

use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swipe_core::Runtime;

#[test]
fn ratio_is_delta_over_threshold() {
    let tracker = ThresholdTracker::new(50.0);
    assert_eq!(tracker.ratio(0.0), 0.0);
    assert_eq!(tracker.ratio(25.0), 0.5);
    assert_eq!(tracker.ratio(100.0), 2.0);
    assert_eq!(tracker.ratio(-10.0), -0.2);
}

#[test]
fn display_values_are_clamped_but_ratio_is_not() {
    let tracker = ThresholdTracker::new(50.0);
    let overshoot = tracker.ratio(120.0);
    assert_eq!(overshoot, 2.4);
    assert_eq!(tracker.display_ratio(overshoot), 1.5);
    assert_eq!(tracker.translation(overshoot), -75);
    assert_eq!(tracker.display_ratio(-0.3), 0.0);
    assert_eq!(tracker.translation(-0.3), 0);
    assert_eq!(tracker.translation(1.1), -55);
    assert_eq!(tracker.translation(0.5), -25);
}

#[test]
fn reach_crosses_once_per_hysteresis_cycle() {
    let mut tracker = ThresholdTracker::new(50.0);
    let ratios = [0.2, 0.99, 1.0, 1.3, 0.97, 1.1, 0.94, 0.96, 1.0];
    let transitions: Vec<_> = ratios.iter().map(|ratio| tracker.track(*ratio)).collect();

    assert_eq!(
        transitions,
        vec![
            ReachTransition::Unchanged,
            ReachTransition::Unchanged,
            ReachTransition::Crossed,
            ReachTransition::Unchanged,
            ReachTransition::Unchanged,
            ReachTransition::Unchanged,
            ReachTransition::Reset,
            ReachTransition::Unchanged,
            ReachTransition::Crossed,
        ]
    );
    assert!(tracker.is_reached());
    tracker.reset();
    assert!(!tracker.is_reached());
}

#[test]
fn reach_bounce_runs_zero_to_one_and_reports_zero_when_idle() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let animator = Rc::new(ThresholdAnimator::new(
        runtime.frame_clock(),
        AnimationSpec::linear(500),
        AnimationSpec::linear(150),
    ));
    let seen = Rc::new(RefCell::new(Vec::new()));

    assert_eq!(animator.reach_ratio(), 0.0);
    {
        let weak = Rc::downgrade(&animator);
        let seen = Rc::clone(&seen);
        animator.start_reach(move || {
            if let Some(animator) = weak.upgrade() {
                seen.borrow_mut().push(animator.reach_ratio());
            }
        });
    }
    assert!(animator.reach_animating());

    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(250_000_000);
    handle.drain_frame_callbacks(500_000_000);

    assert_eq!(seen.borrow().as_slice(), &[0.0, 0.5, 0.0]);
    assert!(!animator.reach_animating());
}

#[test]
fn end_settles_to_zero_and_stop_all_cancels_both() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let animator = ThresholdAnimator::new(
        runtime.frame_clock(),
        AnimationSpec::linear(500),
        AnimationSpec::linear(100),
    );
    let values = Rc::new(RefCell::new(Vec::new()));
    let reach_ticks = Rc::new(Cell::new(0));

    {
        let values = Rc::clone(&values);
        animator.start_end(move |value| values.borrow_mut().push(value), 1.2);
    }
    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(50_000_000);
    handle.drain_frame_callbacks(100_000_000);
    assert_eq!(values.borrow().as_slice(), &[1.2, 0.6, 0.0]);
    assert!(!animator.end_animating());

    {
        let reach_ticks = Rc::clone(&reach_ticks);
        animator.start_reach(move || reach_ticks.set(reach_ticks.get() + 1));
    }
    {
        let values = Rc::clone(&values);
        animator.start_end(move |value| values.borrow_mut().push(value), 0.4);
    }
    animator.stop_all();
    handle.drain_frame_callbacks(200_000_000);

    assert_eq!(reach_ticks.get(), 0);
    assert_eq!(values.borrow().len(), 3);
    assert!(!animator.reach_animating());
    assert!(!animator.end_animating());
}

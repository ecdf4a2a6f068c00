//! Progress toward the swipe threshold and the feedback animations around it.

use swipe_animation::{AnimationSpec, SimpleAnimation};
use swipe_core::FrameClock;

use crate::gesture_constants::{MAX_DISPLAY_RATIO, RESET_REACHED_ON};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReachTransition {
    /// The ratio just crossed 1.0 from below the hysteresis floor.
    Crossed,
    /// The ratio fell below the floor; the next crossing counts again.
    Reset,
    Unchanged,
}

/// Ratio bookkeeping for one horizontal gesture.
///
/// The ratio itself is never clamped here so overshoot keeps feeding the
/// bounce; only the values reported to the host are clamped.
#[derive(Clone, Debug)]
pub struct ThresholdTracker {
    threshold_px: f32,
    reached: bool,
}

impl ThresholdTracker {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px,
            reached: false,
        }
    }

    pub fn threshold_px(&self) -> f32 {
        self.threshold_px
    }

    pub fn ratio(&self, delta_x: f32) -> f32 {
        delta_x / self.threshold_px
    }

    pub fn display_ratio(&self, ratio: f32) -> f32 {
        ratio.clamp(0.0, MAX_DISPLAY_RATIO)
    }

    /// Pixel offset for the swiped item: the clamped ratio scaled back to the
    /// threshold, negated so the item slides left.
    pub fn translation(&self, ratio: f32) -> i32 {
        (-self.display_ratio(ratio) * self.threshold_px).round() as i32
    }

    /// Feed a new ratio through the reach hysteresis.
    pub fn track(&mut self, ratio: f32) -> ReachTransition {
        if !self.reached && ratio >= 1.0 {
            self.reached = true;
            ReachTransition::Crossed
        } else if self.reached && ratio < RESET_REACHED_ON {
            self.reached = false;
            ReachTransition::Reset
        } else {
            ReachTransition::Unchanged
        }
    }

    pub fn is_reached(&self) -> bool {
        self.reached
    }

    pub fn reset(&mut self) {
        self.reached = false;
    }
}

/// The reach bounce and the end settle, two independent animations.
pub struct ThresholdAnimator {
    reach: SimpleAnimation,
    end: SimpleAnimation,
    bounce: AnimationSpec,
    settle: AnimationSpec,
}

impl ThresholdAnimator {
    pub fn new(clock: FrameClock, bounce: AnimationSpec, settle: AnimationSpec) -> Self {
        Self {
            reach: SimpleAnimation::new(clock.clone()),
            end: SimpleAnimation::new(clock),
            bounce,
            settle,
        }
    }

    /// Restart the 0 -> 1 bounce overlay. `on_tick` re-reports the live ratio.
    pub fn start_reach(&self, on_tick: impl Fn() + 'static) {
        self.reach.stop();
        self.reach.start(move |_| on_tick(), 0.0, 1.0, self.bounce);
    }

    /// Settle the displayed ratio from `from` down to zero.
    pub fn start_end(&self, on_tick: impl Fn(f32) + 'static, from: f32) {
        self.end.stop();
        self.end.start(on_tick, from, 0.0, self.settle);
    }

    pub fn stop_all(&self) {
        self.reach.stop();
        self.end.stop();
    }

    /// Bounce progress, or 0 when no bounce is playing.
    pub fn reach_ratio(&self) -> f32 {
        self.reach.value(0.0)
    }

    pub fn reach_animating(&self) -> bool {
        self.reach.animating()
    }

    pub fn end_animating(&self) -> bool {
        self.end.animating()
    }
}

#[cfg(test)]
#[path = "../tests/threshold_tests.rs"]
mod tests;

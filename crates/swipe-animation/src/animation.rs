//! Simple value animations.
//!
//! A [`SimpleAnimation`] interpolates one `f32` from a start value to an end
//! value over a fixed duration and reports every frame to a callback. Several
//! animations may share the state they drive; they never run concurrently
//! because every frame callback executes on the runtime's single loop.

use std::cell::RefCell;
use std::rc::Rc;

use swipe_core::{FrameCallbackRegistration, FrameClock};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing curves applied to the linear time fraction of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Ease in using cubic curve.
    EaseIn,
    /// Ease out using cubic curve.
    EaseOut,
    /// Ease in and out using cubic curve.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching the x fraction, clamped
    // to [0, 1].
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

type ProgressCallback = Rc<dyn Fn(f32)>;

/// One independently stoppable value interpolation.
///
/// `start` replaces any run in progress. The first frame after `start` fixes
/// the start time and reports `from`; later frames report eased values until
/// the duration elapses. The final frame marks the animation finished before
/// invoking the callback, so [`SimpleAnimation::value`] already returns the
/// caller's default inside that last callback.
pub struct SimpleAnimation {
    inner: Rc<RefCell<SimpleInner>>,
    clock: FrameClock,
}

struct SimpleInner {
    value: f32,
    from: f32,
    to: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    callback: Option<ProgressCallback>,
    registration: Option<FrameCallbackRegistration>,
    animating: bool,
    generation: u64,
}

impl SimpleAnimation {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SimpleInner {
                value: 0.0,
                from: 0.0,
                to: 0.0,
                spec: AnimationSpec::default(),
                start_time_nanos: None,
                callback: None,
                registration: None,
                animating: false,
                generation: 0,
            })),
            clock,
        }
    }

    /// Start animating `from -> to`, calling `callback` with the value on each frame.
    pub fn start(
        &self,
        callback: impl Fn(f32) + 'static,
        from: f32,
        to: f32,
        spec: AnimationSpec,
    ) {
        self.stop();
        {
            let mut inner = self.inner.borrow_mut();
            inner.value = from;
            inner.from = from;
            inner.to = to;
            inner.spec = spec;
            inner.start_time_nanos = None;
            inner.callback = Some(Rc::new(callback));
            inner.animating = true;
        }
        Self::schedule_frame(&self.inner, &self.clock);
    }

    /// Cancel the run in progress. No callback fires after this returns.
    pub fn stop(&self) {
        let registration = {
            let mut inner = self.inner.borrow_mut();
            inner.animating = false;
            inner.callback = None;
            inner.start_time_nanos = None;
            inner.generation = inner.generation.wrapping_add(1);
            inner.registration.take()
        };
        if let Some(registration) = registration {
            registration.cancel();
        }
    }

    /// Current value while animating, `default` otherwise.
    pub fn value(&self, default: f32) -> f32 {
        let inner = self.inner.borrow();
        if inner.animating {
            inner.value
        } else {
            default
        }
    }

    pub fn animating(&self) -> bool {
        self.inner.borrow().animating
    }

    fn schedule_frame(this: &Rc<RefCell<SimpleInner>>, clock: &FrameClock) {
        if this.borrow().registration.is_some() {
            return;
        }
        let weak = Rc::downgrade(this);
        let frame_clock = clock.clone();
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, &frame_clock, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<SimpleInner>>, clock: &FrameClock, frame_time_nanos: u64) {
        let (callback, value, finished, generation) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.animating {
                return;
            }

            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = (inner.spec.duration_millis * 1_000_000).max(1);
            let linear_progress =
                (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
            let finished = inner.spec.duration_millis == 0 || linear_progress >= 1.0;
            let value = if finished {
                inner.to
            } else {
                let progress = inner.spec.easing.transform(linear_progress);
                inner.from.lerp(&inner.to, progress)
            };
            inner.value = value;

            let callback = if finished {
                inner.animating = false;
                inner.start_time_nanos = None;
                inner.callback.take()
            } else {
                inner.callback.clone()
            };
            (callback, value, finished, inner.generation)
        };

        if let Some(callback) = callback {
            callback(value);
        }

        if !finished {
            let still_current = {
                let inner = this.borrow();
                inner.animating && inner.generation == generation
            };
            if still_current {
                Self::schedule_frame(this, clock);
            }
        } else {
            log::trace!("animation finished at {value}");
        }
    }
}

impl Drop for SimpleAnimation {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.callback = None;
            inner.registration.take();
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;

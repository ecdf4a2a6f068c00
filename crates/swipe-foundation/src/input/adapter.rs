//! Translation of platform input into swipe samples.
//!
//! Touch points, mouse movement and wheel deltas all reduce to one of three
//! outcomes: a [`GestureSample`] that feeds the recognizer, a cancel that ends
//! the current gesture, or nothing at all.

use swipe_ui_graphics::Point;

use super::types::{
    scroll_delta, FilterResult, InputEvent, ScrollPhase, TouchEvent, TouchEventKind, WheelEvent,
};
use crate::config::{SwipeConfig, TargetPlatform};

/// A uniform update, whatever the input source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub position: Point,
    /// Displacement since gesture start; positive x means "swiped left".
    pub delta: Point,
    pub touch: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AdapterSignal {
    /// End the gesture. `delta` overrides the recognizer's live delta when the
    /// event carried a final position.
    Cancel { delta: Option<Point> },
    Update(GestureSample),
    /// Not relevant to swipe recognition.
    Ignore,
}

/// The parts of the recognizer's state the adapter needs to read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdapterContext {
    /// An orientation (either one) has been chosen for the current gesture.
    pub orientation_decided: bool,
    pub start_position: Point,
    /// Live delta, which wheel samples accumulate onto.
    pub delta: Point,
    pub cursor_top: f32,
}

#[derive(Clone, Debug)]
pub struct EventAdapter {
    platform: TargetPlatform,
    drag_start_distance: f32,
}

impl EventAdapter {
    pub fn new(config: &SwipeConfig) -> Self {
        Self {
            platform: config.platform,
            drag_start_distance: config.drag_start_distance,
        }
    }

    pub fn classify(
        &self,
        event: &InputEvent,
        context: &AdapterContext,
    ) -> (AdapterSignal, FilterResult) {
        let signal = match event {
            InputEvent::Leave if context.orientation_decided => {
                AdapterSignal::Cancel { delta: None }
            }
            InputEvent::MouseMove { position } if context.orientation_decided => {
                if (position.y - context.cursor_top).abs() > self.drag_start_distance {
                    AdapterSignal::Cancel { delta: None }
                } else {
                    AdapterSignal::Ignore
                }
            }
            InputEvent::Touch(touch) => {
                if !self.accepts_touch(touch) {
                    return (AdapterSignal::Ignore, FilterResult::Continue);
                }
                return (self.classify_touch(touch, context), FilterResult::Consume);
            }
            InputEvent::Wheel(wheel) => self.classify_wheel(wheel, context),
            _ => AdapterSignal::Ignore,
        };
        (signal, FilterResult::Continue)
    }

    /// Single-finger touch swipes only make sense on real touchscreens, plus
    /// macOS where trackpad fingers arrive as touch events.
    fn accepts_touch(&self, touch: &TouchEvent) -> bool {
        self.platform.is_mac() || touch.is_touchscreen()
    }

    fn classify_touch(&self, touch: &TouchEvent, context: &AdapterContext) -> AdapterSignal {
        let count = touch.points.len();
        let count_out_of_range = if touch.is_touchscreen() {
            count != 1
        } else {
            count == 0 || count > 2
        };
        let cancel = touch.released(0)
            || touch.released(1)
            || count_out_of_range
            || matches!(touch.kind, TouchEventKind::End | TouchEventKind::Cancel);

        let first = touch.first_point();
        if cancel {
            return AdapterSignal::Cancel {
                delta: first.map(|point| context.start_position - point.position),
            };
        }
        match first {
            Some(point) => AdapterSignal::Update(GestureSample {
                position: point.position,
                delta: context.start_position - point.position,
                touch: true,
            }),
            None => AdapterSignal::Cancel { delta: None },
        }
    }

    fn classify_wheel(&self, wheel: &WheelEvent, context: &AdapterContext) -> AdapterSignal {
        // macOS turns two-finger swipes into touch events, and phase-less
        // wheels are plain mouse wheels; both stay with normal scrolling.
        if self.platform.is_mac() || wheel.phase == ScrollPhase::NoScrollPhase {
            return AdapterSignal::Ignore;
        }
        let cancel = !wheel.buttons.is_empty()
            || matches!(wheel.phase, ScrollPhase::End | ScrollPhase::Momentum);
        if cancel {
            return AdapterSignal::Cancel { delta: None };
        }
        AdapterSignal::Update(GestureSample {
            position: Point::ZERO,
            delta: context.delta - scroll_delta(wheel),
            touch: false,
        })
    }
}

#[cfg(test)]
#[path = "../tests/adapter_tests.rs"]
mod tests;

//! Shorthand constructors for the events a swipe handler consumes.

use swipe_foundation::{
    InputEvent, Point, ScrollPhase, TouchDeviceKind, TouchEvent, TouchEventKind, TouchPoint,
    TouchPointState, WheelEvent,
};

/// Single-finger touchscreen event at `(x, y)`.
pub fn touch(kind: TouchEventKind, x: f32, y: f32, state: TouchPointState) -> InputEvent {
    InputEvent::Touch(
        TouchEvent::new(kind, Some(TouchDeviceKind::TouchScreen))
            .with_point(TouchPoint::new(0, Point::new(x, y), state)),
    )
}

pub fn touch_begin(x: f32, y: f32) -> InputEvent {
    touch(TouchEventKind::Begin, x, y, TouchPointState::Pressed)
}

pub fn touch_move(x: f32, y: f32) -> InputEvent {
    touch(TouchEventKind::Update, x, y, TouchPointState::Moved)
}

pub fn touch_release(x: f32, y: f32) -> InputEvent {
    touch(TouchEventKind::End, x, y, TouchPointState::Released)
}

/// Platform cancel with no points left.
pub fn touch_cancel() -> InputEvent {
    InputEvent::Touch(TouchEvent::new(
        TouchEventKind::Cancel,
        Some(TouchDeviceKind::TouchScreen),
    ))
}

/// Two-finger touchpad event, as macOS reports trackpad swipes.
pub fn trackpad(kind: TouchEventKind, first: Point, second: Point) -> InputEvent {
    let state = match kind {
        TouchEventKind::Begin => TouchPointState::Pressed,
        TouchEventKind::End | TouchEventKind::Cancel => TouchPointState::Released,
        TouchEventKind::Update => TouchPointState::Moved,
    };
    InputEvent::Touch(
        TouchEvent::new(kind, Some(TouchDeviceKind::TouchPad))
            .with_point(TouchPoint::new(0, first, state))
            .with_point(TouchPoint::new(1, second, state)),
    )
}

/// Precise wheel event carrying a pixel delta.
pub fn wheel(dx: f32, dy: f32, phase: ScrollPhase) -> InputEvent {
    InputEvent::Wheel(WheelEvent::new(Point::new(dx, dy), phase))
}

pub fn mouse_move(x: f32, y: f32) -> InputEvent {
    InputEvent::MouseMove {
        position: Point::new(x, y),
    }
}

pub fn leave() -> InputEvent {
    InputEvent::Leave
}

use smallvec::SmallVec;
use swipe_ui_graphics::Point;

pub type TouchPointId = u64;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn remove(&mut self, button: PointerButton) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPointState {
    Pressed,
    Moved,
    Stationary,
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: TouchPointId,
    /// Position in the owning view's coordinates.
    pub position: Point,
    pub state: TouchPointState,
}

impl TouchPoint {
    pub fn new(id: TouchPointId, position: Point, state: TouchPointState) -> Self {
        Self {
            id,
            position,
            state,
        }
    }

    pub fn is_released(&self) -> bool {
        self.state == TouchPointState::Released
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchEventKind {
    Begin,
    Update,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchDeviceKind {
    TouchScreen,
    TouchPad,
}

/// One touch notification with every point the device currently tracks.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub kind: TouchEventKind,
    /// Originating device, when the platform reports one.
    pub device: Option<TouchDeviceKind>,
    pub points: SmallVec<[TouchPoint; 2]>,
}

impl TouchEvent {
    pub fn new(kind: TouchEventKind, device: Option<TouchDeviceKind>) -> Self {
        Self {
            kind,
            device,
            points: SmallVec::new(),
        }
    }

    pub fn with_point(mut self, point: TouchPoint) -> Self {
        self.points.push(point);
        self
    }

    pub fn is_touchscreen(&self) -> bool {
        self.device == Some(TouchDeviceKind::TouchScreen)
    }

    /// Whether the point at `index` exists and was just lifted.
    pub fn released(&self, index: usize) -> bool {
        self.points
            .get(index)
            .map(TouchPoint::is_released)
            .unwrap_or(false)
    }

    pub fn first_point(&self) -> Option<&TouchPoint> {
        self.points.first()
    }
}

/// Phase of a precise (touchpad) scroll sequence. Classic mouse wheels report
/// [`ScrollPhase::NoScrollPhase`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPhase {
    NoScrollPhase,
    Begin,
    Update,
    End,
    /// Inertial continuation generated by the platform after the fingers lift.
    Momentum,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Scroll distance in pixels, zero when the device only reports angles.
    pub pixel_delta: Point,
    /// Raw wheel rotation reported by notched wheels.
    pub angle_delta: Point,
    pub buttons: PointerButtons,
    pub phase: ScrollPhase,
}

impl WheelEvent {
    pub fn new(pixel_delta: Point, phase: ScrollPhase) -> Self {
        Self {
            pixel_delta,
            angle_delta: Point::ZERO,
            buttons: PointerButtons::NONE,
            phase,
        }
    }

    pub fn with_angle_delta(mut self, angle_delta: Point) -> Self {
        self.angle_delta = angle_delta;
        self
    }

    /// Set the buttons state for this event
    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }
}

/// Scroll distance carried by a wheel event: pixels when the device reports
/// them, otherwise the raw angle delta.
pub fn scroll_delta(event: &WheelEvent) -> Point {
    if event.pixel_delta.is_zero() {
        event.angle_delta
    } else {
        event.pixel_delta
    }
}

/// Platform input delivered to the owning view.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The pointer left the view.
    Leave,
    MouseMove { position: Point },
    Touch(TouchEvent),
    Wheel(WheelEvent),
}

/// What the host should do with an event after the swipe handler saw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterResult {
    /// Deliver the event to the view as usual.
    Continue,
    /// The swipe handler owns this event; do not deliver it further.
    Consume,
}

//! Input model and swipe gesture recognition for scrollable views.
//!
//! A [`SwipeHandler`] sits in front of a scroll view's event stream. It turns
//! touch, mouse and wheel events into one gesture model, decides once per
//! gesture whether the user is scrolling vertically or swiping horizontally,
//! and for horizontal swipes reports progress toward a threshold, plays the
//! reach/settle feedback animations and runs the item's completion action
//! when the swipe is released past the threshold.

pub mod config;
pub mod gesture_constants;
pub mod gestures;
pub mod host;
pub mod input;

pub use config::{ConfigError, SwipeConfig, TargetPlatform};
pub use gestures::{
    ItemId, Orientation, ReachTransition, SwipeFinishData, SwipeHandler, SwipeHandlerBuilder,
    SwipeUpdate, ThresholdTracker, WeakSwipeHandler,
};
pub use host::{HapticFeedback, NoHaptics, ScrollController};
pub use input::{
    AdapterSignal, EventAdapter, FilterResult, GestureSample, InputEvent, PointerButton,
    PointerButtons, ScrollPhase, TouchDeviceKind, TouchEvent, TouchEventKind, TouchPoint,
    TouchPointState, WheelEvent,
};
pub use swipe_ui_graphics::{Dp, Point};

pub mod prelude {
    pub use crate::config::{SwipeConfig, TargetPlatform};
    pub use crate::gestures::{Orientation, SwipeFinishData, SwipeHandler, SwipeUpdate};
    pub use crate::host::{HapticFeedback, ScrollController};
    pub use crate::input::{
        FilterResult, InputEvent, ScrollPhase, TouchDeviceKind, TouchEvent, TouchEventKind,
        TouchPoint, TouchPointState, WheelEvent,
    };
}

pub mod adapter;
pub mod types;

pub use adapter::{AdapterContext, AdapterSignal, EventAdapter, GestureSample};
pub use types::{
    scroll_delta, FilterResult, InputEvent, PointerButton, PointerButtons, ScrollPhase,
    TouchDeviceKind, TouchEvent, TouchEventKind, TouchPoint, TouchPointId, TouchPointState,
    WheelEvent,
};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipe_core::{Runtime, RuntimeHandle};
use swipe_foundation::{
    ConfigError, FilterResult, HapticFeedback, InputEvent, ItemId, Point, ScrollController,
    ScrollPhase, SwipeConfig, SwipeFinishData, SwipeHandler, SwipeUpdate, TargetPlatform,
};

use crate::events;

/// One call the handler made on the scroll collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollCall {
    DisableScroll(bool),
    AcceptTouchEvents(bool),
}

#[derive(Default)]
struct RecordingScroll {
    calls: RefCell<Vec<ScrollCall>>,
    disabled: Cell<bool>,
    accepts_touch: Cell<bool>,
}

impl ScrollController for RecordingScroll {
    fn disable_scroll(&self, disabled: bool) {
        self.disabled.set(disabled);
        self.calls.borrow_mut().push(ScrollCall::DisableScroll(disabled));
    }

    fn set_touch_events_accepted(&self, accepted: bool) {
        self.accepts_touch.set(accepted);
        self.calls
            .borrow_mut()
            .push(ScrollCall::AcceptTouchEvents(accepted));
    }
}

#[derive(Default)]
struct RecordingHaptics {
    count: Cell<usize>,
}

impl HapticFeedback for RecordingHaptics {
    fn perform(&self) {
        self.count.set(self.count.get() + 1);
    }
}

/// What the finish resolver hands out for the next gesture.
#[derive(Clone, Copy, Debug)]
struct FinishPlan {
    item_id: ItemId,
    swipeable: bool,
}

const FRAME_INTERVAL_NANOS: u64 = 16_000_000;

/// Headless harness around one installed [`SwipeHandler`].
///
/// The rule owns the runtime, so nothing runs until the test drains it:
/// completion actions wait for [`SwipeTestRule::drain_ui`] and animations
/// advance only through the `advance_*` helpers.
pub struct SwipeTestRule {
    runtime: Runtime,
    handler: Option<SwipeHandler>,
    scroll: Rc<RecordingScroll>,
    haptics: Rc<RecordingHaptics>,
    updates: Rc<RefCell<Vec<SwipeUpdate>>>,
    completions: Rc<RefCell<Vec<ItemId>>>,
    resolved_tops: Rc<RefCell<Vec<i32>>>,
    cursor: Rc<Cell<Point>>,
    plan: Rc<Cell<FinishPlan>>,
    frame_time_nanos: u64,
}

impl SwipeTestRule {
    /// Rule with default settings on a platform that accepts touchscreen
    /// touches and phased wheels.
    pub fn new() -> Self {
        Self::with_config(SwipeConfig::new().with_platform(TargetPlatform::Linux))
            .expect("default swipe config is valid")
    }

    pub fn with_config(config: SwipeConfig) -> Result<Self, ConfigError> {
        let runtime = Runtime::default();
        let scroll = Rc::new(RecordingScroll {
            accepts_touch: Cell::new(true),
            ..RecordingScroll::default()
        });
        let haptics = Rc::new(RecordingHaptics::default());
        let updates = Rc::new(RefCell::new(Vec::new()));
        let completions = Rc::new(RefCell::new(Vec::new()));
        let resolved_tops = Rc::new(RefCell::new(Vec::new()));
        let cursor = Rc::new(Cell::new(Point::ZERO));
        let plan = Rc::new(Cell::new(FinishPlan {
            item_id: 1,
            swipeable: true,
        }));

        let handler = SwipeHandler::builder(runtime.handle())
            .config(config)
            .scroll_controller(scroll.clone())
            .haptics(haptics.clone())
            .on_update({
                let updates = Rc::clone(&updates);
                move |update| updates.borrow_mut().push(update)
            })
            .finish_resolver({
                let plan = Rc::clone(&plan);
                let completions = Rc::clone(&completions);
                let resolved_tops = Rc::clone(&resolved_tops);
                move |top| {
                    resolved_tops.borrow_mut().push(top);
                    let FinishPlan { item_id, swipeable } = plan.get();
                    if swipeable {
                        let completions = Rc::clone(&completions);
                        SwipeFinishData::new(item_id, move || {
                            completions.borrow_mut().push(item_id)
                        })
                    } else {
                        SwipeFinishData::none(item_id)
                    }
                }
            })
            .cursor_locator({
                let cursor = Rc::clone(&cursor);
                move || cursor.get()
            })
            .install()?;

        Ok(Self {
            runtime,
            handler: Some(handler),
            scroll,
            haptics,
            updates,
            completions,
            resolved_tops,
            cursor,
            plan,
            frame_time_nanos: 0,
        })
    }

    /// Rows resolved from now on complete with `item_id`.
    pub fn set_item(&mut self, item_id: ItemId) {
        self.plan.set(FinishPlan {
            item_id,
            swipeable: true,
        });
    }

    /// Rows resolved from now on have no completion action.
    pub fn set_unswipeable_item(&mut self, item_id: ItemId) {
        self.plan.set(FinishPlan {
            item_id,
            swipeable: false,
        });
    }

    pub fn set_cursor(&mut self, position: Point) {
        self.cursor.set(position);
    }

    /// Deliver an event. Returns `Continue` once the handler was dropped.
    pub fn send(&mut self, event: InputEvent) -> FilterResult {
        match &self.handler {
            Some(handler) => handler.handle_event(&event),
            None => FilterResult::Continue,
        }
    }

    /// Press one finger at `(x, y)`; the cursor follows the finger.
    pub fn touch_begin(&mut self, x: f32, y: f32) -> FilterResult {
        self.cursor.set(Point::new(x, y));
        self.send(events::touch_begin(x, y))
    }

    pub fn touch_move(&mut self, x: f32, y: f32) -> FilterResult {
        self.send(events::touch_move(x, y))
    }

    pub fn touch_release(&mut self, x: f32, y: f32) -> FilterResult {
        self.send(events::touch_release(x, y))
    }

    pub fn touch_cancel(&mut self) -> FilterResult {
        self.send(events::touch_cancel())
    }

    pub fn wheel(&mut self, dx: f32, dy: f32, phase: ScrollPhase) -> FilterResult {
        self.send(events::wheel(dx, dy, phase))
    }

    /// Run the frame callbacks due at the current frame time.
    pub fn advance_frame(&mut self) -> usize {
        self.runtime
            .handle()
            .drain_frame_callbacks(self.frame_time_nanos)
    }

    /// Move the frame clock forward and run one frame.
    pub fn advance_millis(&mut self, millis: u64) -> usize {
        self.frame_time_nanos += millis * 1_000_000;
        self.advance_frame()
    }

    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.frame_time_nanos += FRAME_INTERVAL_NANOS;
            self.advance_frame();
        }
    }

    /// Run deferred UI tasks, which is where completion actions execute.
    pub fn drain_ui(&mut self) -> usize {
        self.runtime.handle().drain_ui()
    }

    /// Alternate UI tasks and frames until neither has work left.
    pub fn pump_until_idle(&mut self) {
        let handle = self.runtime.handle();
        let mut iterations = 0;
        loop {
            iterations += 1;
            if iterations > 1_000 {
                panic!("pump_until_idle looped too many times");
            }
            let ran_tasks = handle.drain_ui();
            let ran_frames = if handle.has_frame_callbacks() {
                let ran = handle.drain_frame_callbacks(self.frame_time_nanos);
                self.frame_time_nanos += FRAME_INTERVAL_NANOS;
                ran
            } else {
                0
            };
            if ran_tasks == 0 && ran_frames == 0 {
                break;
            }
        }
        log::trace!("swipe test rule idle after {iterations} iterations");
    }

    /// Release the handler the way a destroyed view would.
    pub fn drop_handler(&mut self) {
        self.handler = None;
    }

    pub fn handler(&self) -> &SwipeHandler {
        self.handler
            .as_ref()
            .expect("swipe handler was dropped by the test")
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn updates(&self) -> Vec<SwipeUpdate> {
        self.updates.borrow().clone()
    }

    pub fn last_update(&self) -> Option<SwipeUpdate> {
        self.updates.borrow().last().copied()
    }

    pub fn clear_updates(&mut self) {
        self.updates.borrow_mut().clear();
    }

    /// Item ids whose completion action has run, in order.
    pub fn completions(&self) -> Vec<ItemId> {
        self.completions.borrow().clone()
    }

    /// Cursor rows passed to the finish resolver, one per gesture start.
    pub fn resolved_tops(&self) -> Vec<i32> {
        self.resolved_tops.borrow().clone()
    }

    pub fn haptic_count(&self) -> usize {
        self.haptics.count.get()
    }

    pub fn scroll_calls(&self) -> Vec<ScrollCall> {
        self.scroll.calls.borrow().clone()
    }

    pub fn scroll_disabled(&self) -> bool {
        self.scroll.disabled.get()
    }

    pub fn touch_accepted(&self) -> bool {
        self.scroll.accepts_touch.get()
    }
}

impl Default for SwipeTestRule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;

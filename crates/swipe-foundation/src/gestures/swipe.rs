//! Swipe gesture recognizer.
//!
//! One [`SwipeHandler`] lives as long as the view it is installed on and
//! reuses its state for every gesture. The lifecycle is
//!
//! ```text
//! Idle -> Tracking(Undetermined) -> Tracking(Horizontal | Vertical) -> Idle
//! ```
//!
//! The first sample of a gesture seeds the start position and resolves the
//! finish data; later samples decide the orientation, and horizontal samples
//! drive the threshold ratio. Every exit goes through `process_end`.
//!
//! All entry points run on the runtime's UI thread. Nothing here holds a
//! `RefCell` borrow while calling out to the host, so host callbacks may
//! re-enter the handler (for example a scroll view that reports scrolling
//! synchronously from `disable_scroll`).

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use swipe_core::RuntimeHandle;
use swipe_ui_graphics::Point;

use super::orientation::Orientation;
use super::swipe_data::{SwipeFinishData, SwipeUpdate};
use super::threshold::{ReachTransition, ThresholdAnimator, ThresholdTracker};
use crate::config::{ConfigError, SwipeConfig};
use crate::host::{HapticFeedback, NoHaptics, ScrollController};
use crate::input::{
    AdapterContext, AdapterSignal, EventAdapter, FilterResult, GestureSample, InputEvent,
};

type UpdateCallback = Box<dyn Fn(SwipeUpdate)>;
type FinishResolver = Box<dyn Fn(i32) -> SwipeFinishData>;
type CursorLocator = Box<dyn Fn() -> Point>;

struct SwipeState {
    orientation: Orientation,
    start_position: Point,
    delta: Point,
    cursor_top: i32,
    finish: SwipeFinishData,
    started: bool,
    touch: bool,
    tracker: ThresholdTracker,
}

struct SwipeShared {
    state: RefCell<SwipeState>,
    animator: ThresholdAnimator,
    adapter: EventAdapter,
    runtime: RuntimeHandle,
    scroll: Rc<dyn ScrollController>,
    haptics: Rc<dyn HapticFeedback>,
    on_update: UpdateCallback,
    resolve_finish: FinishResolver,
    locate_cursor: CursorLocator,
}

impl SwipeShared {
    fn update_ratio(&self, ratio: f32) {
        let update = {
            let state = self.state.borrow();
            SwipeUpdate {
                ratio: state.tracker.display_ratio(ratio),
                reach_ratio: self.animator.reach_ratio(),
                translation: state.tracker.translation(ratio),
                item_id: state.finish.item_id,
                cursor_top: state.cursor_top,
            }
        };
        (self.on_update)(update);
    }

    fn set_orientation(&self, orientation: Orientation) {
        self.state.borrow_mut().orientation = orientation;
        let horizontal = orientation.is_horizontal();
        self.scroll.set_touch_events_accepted(!horizontal);
        self.scroll.disable_scroll(horizontal);
    }

    /// Host callbacks may end the gesture; tracking only continues while
    /// this still holds afterwards.
    fn is_tracking_horizontal(&self) -> bool {
        let state = self.state.borrow();
        state.started && state.orientation.is_horizontal()
    }

    fn adapter_context(&self) -> AdapterContext {
        let state = self.state.borrow();
        AdapterContext {
            orientation_decided: state.orientation.is_decided(),
            start_position: state.start_position,
            delta: state.delta,
            cursor_top: state.cursor_top as f32,
        }
    }
}

/// Ends the current gesture. Releasing a horizontal swipe past the threshold
/// posts the completion action to the next UI turn when `allow_finish` holds.
fn process_end(shared: &Rc<SwipeShared>, delta: Option<Point>, allow_finish: bool) {
    let settle = {
        let state = shared.state.borrow();
        if state.orientation.is_horizontal() {
            let ratio = state.tracker.ratio(delta.unwrap_or(state.delta).x);
            let action = if allow_finish && ratio >= 1.0 {
                state.finish.callback.clone()
            } else {
                None
            };
            Some((ratio, action, state.finish.item_id))
        } else {
            None
        }
    };

    if let Some((ratio, action, item_id)) = settle {
        match action {
            Some(action) => {
                log::debug!("swipe on item {item_id} finished at ratio {ratio:.2}");
                let weak = Rc::downgrade(shared);
                shared.runtime.enqueue_ui_task(Box::new(move || {
                    if weak.upgrade().is_some() {
                        action();
                    }
                }));
            }
            None => log::trace!("swipe on item {item_id} released at ratio {ratio:.2}"),
        }
        shared.animator.stop_all();
        let weak = Rc::downgrade(shared);
        shared.animator.start_end(
            move |value| {
                if let Some(shared) = weak.upgrade() {
                    shared.update_ratio(value);
                }
            },
            ratio,
        );
    }

    shared.set_orientation(Orientation::Undetermined);
    let mut state = shared.state.borrow_mut();
    state.started = false;
    state.tracker.reset();
}

fn update_with(shared: &Rc<SwipeShared>, sample: GestureSample) {
    let (started, touch, orientation) = {
        let state = shared.state.borrow();
        (state.started, state.touch, state.orientation)
    };

    if started && touch != sample.touch {
        log::debug!("input source changed mid-gesture; restarting");
        process_end(shared, None, false);
    }
    if !started || touch != sample.touch {
        begin_gesture(shared, sample);
        return;
    }

    match orientation {
        Orientation::Undetermined => {
            shared.state.borrow_mut().delta = sample.delta;
            match Orientation::classify(sample.delta) {
                Orientation::Undetermined => {}
                Orientation::Vertical => {
                    log::trace!("gesture classified vertical at {:?}", sample.delta);
                    shared.set_orientation(Orientation::Vertical);
                }
                Orientation::Horizontal => {
                    log::trace!("gesture classified horizontal at {:?}", sample.delta);
                    shared.set_orientation(Orientation::Horizontal);
                    if shared.is_tracking_horizontal() {
                        track_horizontal(shared, sample.delta);
                    }
                }
            }
        }
        Orientation::Horizontal => track_horizontal(shared, sample.delta),
        Orientation::Vertical => {}
    }
}

fn begin_gesture(shared: &Rc<SwipeShared>, sample: GestureSample) {
    let cursor_top = (shared.locate_cursor)().y.round() as i32;
    let finish = (shared.resolve_finish)(cursor_top);
    let can_finish = finish.can_finish();
    log::debug!(
        "swipe gesture started at {:?} (cursor top {cursor_top}, item {}, touch {})",
        sample.position,
        finish.item_id,
        sample.touch
    );
    {
        let mut state = shared.state.borrow_mut();
        state.started = true;
        state.touch = sample.touch;
        state.start_position = sample.position;
        state.delta = Point::ZERO;
        state.cursor_top = cursor_top;
        state.finish = finish;
        state.tracker.reset();
    }
    if !can_finish {
        shared.set_orientation(Orientation::Vertical);
    }
}

fn track_horizontal(shared: &Rc<SwipeShared>, delta: Point) {
    let ratio = {
        let mut state = shared.state.borrow_mut();
        state.delta = delta;
        state.tracker.ratio(delta.x)
    };
    shared.update_ratio(ratio);
    if !shared.is_tracking_horizontal() {
        return;
    }

    let transition = shared.state.borrow_mut().tracker.track(ratio);
    match transition {
        ReachTransition::Crossed => {
            log::debug!("swipe threshold reached at ratio {ratio:.2}");
            let weak = Rc::downgrade(shared);
            shared.animator.start_reach(move || {
                if let Some(shared) = weak.upgrade() {
                    let ratio = {
                        let state = shared.state.borrow();
                        state.tracker.ratio(state.delta.x)
                    };
                    shared.update_ratio(ratio);
                }
            });
            shared.haptics.perform();
        }
        ReachTransition::Reset => log::trace!("swipe threshold left at ratio {ratio:.2}"),
        ReachTransition::Unchanged => {}
    }
}

/// Recognizes horizontal swipes over one scrollable view.
///
/// Call counts toward the host: `on_update` many times, the finish resolver
/// once per gesture (at its first sample), a completion action at most once
/// per gesture and always from a later UI turn.
pub struct SwipeHandler {
    shared: Rc<SwipeShared>,
}

impl SwipeHandler {
    pub fn builder(runtime: RuntimeHandle) -> SwipeHandlerBuilder {
        SwipeHandlerBuilder::new(runtime)
    }

    /// Feed one platform event. The result says whether the host should keep
    /// delivering the event to the view.
    pub fn handle_event(&self, event: &InputEvent) -> FilterResult {
        self.shared.runtime.assert_ui_thread();
        let context = self.shared.adapter_context();
        let (signal, filter) = self.shared.adapter.classify(event, &context);
        match signal {
            AdapterSignal::Cancel { delta } => process_end(&self.shared, delta, true),
            AdapterSignal::Update(sample) => update_with(&self.shared, sample),
            AdapterSignal::Ignore => {}
        }
        filter
    }

    /// The scroll view scrolled; a swipe must not coexist with real scrolling.
    pub fn on_scroll(&self) {
        process_end(&self.shared, None, true);
    }

    /// End the current gesture as if it had been released.
    pub fn cancel(&self) {
        process_end(&self.shared, None, true);
    }

    pub fn orientation(&self) -> Orientation {
        self.shared.state.borrow().orientation
    }

    pub fn is_started(&self) -> bool {
        self.shared.state.borrow().started
    }

    pub fn is_reached(&self) -> bool {
        self.shared.state.borrow().tracker.is_reached()
    }

    /// Live, unclamped ratio of the current gesture.
    pub fn ratio(&self) -> f32 {
        let state = self.shared.state.borrow();
        state.tracker.ratio(state.delta.x)
    }

    pub fn threshold_px(&self) -> f32 {
        self.shared.state.borrow().tracker.threshold_px()
    }

    pub fn is_animating(&self) -> bool {
        self.shared.animator.reach_animating() || self.shared.animator.end_animating()
    }
}

impl fmt::Debug for SwipeHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("SwipeHandler")
            .field("orientation", &state.orientation)
            .field("started", &state.started)
            .field("reached", &state.tracker.is_reached())
            .field("delta", &state.delta)
            .field("finish", &state.finish)
            .finish()
    }
}

/// Collects the host collaborators for a [`SwipeHandler`].
pub struct SwipeHandlerBuilder {
    runtime: RuntimeHandle,
    config: SwipeConfig,
    scroll: Option<Rc<dyn ScrollController>>,
    haptics: Rc<dyn HapticFeedback>,
    on_update: Option<UpdateCallback>,
    resolve_finish: Option<FinishResolver>,
    locate_cursor: Option<CursorLocator>,
}

impl SwipeHandlerBuilder {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            runtime,
            config: SwipeConfig::default(),
            scroll: None,
            haptics: Rc::new(NoHaptics),
            on_update: None,
            resolve_finish: None,
            locate_cursor: None,
        }
    }

    pub fn config(mut self, config: SwipeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn scroll_controller(mut self, scroll: Rc<dyn ScrollController>) -> Self {
        self.scroll = Some(scroll);
        self
    }

    pub fn haptics(mut self, haptics: Rc<dyn HapticFeedback>) -> Self {
        self.haptics = haptics;
        self
    }

    /// Receives every ratio change, from samples and from animation ticks.
    pub fn on_update(mut self, on_update: impl Fn(SwipeUpdate) + 'static) -> Self {
        self.on_update = Some(Box::new(on_update));
        self
    }

    /// Maps the cursor row at gesture start to the item and its action.
    pub fn finish_resolver(
        mut self,
        resolve: impl Fn(i32) -> SwipeFinishData + 'static,
    ) -> Self {
        self.resolve_finish = Some(Box::new(resolve));
        self
    }

    /// Current pointer position in the owning view's coordinates.
    pub fn cursor_locator(mut self, locate: impl Fn() -> Point + 'static) -> Self {
        self.locate_cursor = Some(Box::new(locate));
        self
    }

    pub fn install(self) -> Result<SwipeHandler, ConfigError> {
        self.config.validate()?;
        let scroll = self
            .scroll
            .ok_or(ConfigError::MissingCollaborator("scroll controller"))?;
        let on_update = self
            .on_update
            .ok_or(ConfigError::MissingCollaborator("update callback"))?;
        let resolve_finish = self
            .resolve_finish
            .ok_or(ConfigError::MissingCollaborator("finish resolver"))?;
        let locate_cursor = self
            .locate_cursor
            .ok_or(ConfigError::MissingCollaborator("cursor locator"))?;

        let animator = ThresholdAnimator::new(
            self.runtime.frame_clock(),
            self.config.bounce_spec(),
            self.config.end_spec(),
        );
        let shared = SwipeShared {
            state: RefCell::new(SwipeState {
                orientation: Orientation::Undetermined,
                start_position: Point::ZERO,
                delta: Point::ZERO,
                cursor_top: 0,
                finish: SwipeFinishData::default(),
                started: false,
                touch: false,
                tracker: ThresholdTracker::new(self.config.threshold_px()),
            }),
            animator,
            adapter: EventAdapter::new(&self.config),
            runtime: self.runtime,
            scroll,
            haptics: self.haptics,
            on_update,
            resolve_finish,
            locate_cursor,
        };
        log::debug!(
            "swipe handler installed (threshold {}px, platform {:?})",
            self.config.threshold_px(),
            self.config.platform
        );
        Ok(SwipeHandler {
            shared: Rc::new(shared),
        })
    }
}

/// Weak handle for host code that must not keep the handler alive, such as
/// a scroll view's scroll-activity subscription.
#[derive(Clone)]
pub struct WeakSwipeHandler {
    shared: Weak<SwipeShared>,
}

impl WeakSwipeHandler {
    pub fn upgrade(&self) -> Option<SwipeHandler> {
        self.shared.upgrade().map(|shared| SwipeHandler { shared })
    }
}

impl SwipeHandler {
    pub fn downgrade(&self) -> WeakSwipeHandler {
        WeakSwipeHandler {
            shared: Rc::downgrade(&self.shared),
        }
    }
}

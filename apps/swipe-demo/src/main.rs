use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use swipe_foundation::prelude::*;
use swipe_foundation::Point;
use swipe_runtime_std::StdRuntime;

const ROW_HEIGHT: i32 = 40;
const MESSAGES: [&str; 4] = [
    "Are we still on for Friday?",
    "Sure, 7pm works",
    "Alice joined the group",
    "Bring the slides please",
];

/// Stand-in for the message list's scroll area.
struct MessageList {
    scroll_disabled: Cell<bool>,
}

impl ScrollController for MessageList {
    fn disable_scroll(&self, disabled: bool) {
        if self.scroll_disabled.replace(disabled) != disabled {
            log::info!("list scrolling {}", if disabled { "frozen" } else { "released" });
        }
    }

    fn set_touch_events_accepted(&self, accepted: bool) {
        log::debug!("viewport touch delivery: {accepted}");
    }
}

struct ConsoleHaptics;

impl HapticFeedback for ConsoleHaptics {
    fn perform(&self) {
        println!("    *bzz*");
    }
}

fn render(update: &SwipeUpdate) {
    let offset = (-update.translation / 5).max(0) as usize;
    let text = MESSAGES
        .get(update.item_id as usize)
        .copied()
        .unwrap_or_default();
    println!(
        "    {:>3}px |{}{text}  ratio {:.2} bounce {:.2}",
        update.translation,
        " ".repeat(12usize.saturating_sub(offset)),
        update.ratio,
        update.reach_ratio
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipe-to-reply demo ===");
    println!("Each script swipes one message row to the left; rows past the");
    println!("threshold are replied to once the gesture is released.");
    println!();

    let runtime = StdRuntime::new();
    let cursor = Rc::new(Cell::new(Point::ZERO));
    let replies = Rc::new(RefCell::new(Vec::new()));

    let handler = SwipeHandler::builder(runtime.runtime_handle())
        .config(SwipeConfig::new().with_platform(TargetPlatform::Linux))
        .scroll_controller(Rc::new(MessageList {
            scroll_disabled: Cell::new(false),
        }))
        .haptics(Rc::new(ConsoleHaptics))
        .on_update(|update| render(&update))
        .finish_resolver({
            let replies = Rc::clone(&replies);
            move |top| {
                let row = top / ROW_HEIGHT;
                // Service messages cannot be replied to.
                if row == 2 {
                    return SwipeFinishData::none(row.into());
                }
                let replies = Rc::clone(&replies);
                SwipeFinishData::new(row.into(), move || {
                    let text = MESSAGES.get(row as usize).copied().unwrap_or_default();
                    println!("    -> replying to \"{text}\"");
                    replies.borrow_mut().push(row);
                })
            }
        })
        .cursor_locator({
            let cursor = Rc::clone(&cursor);
            move || cursor.get()
        })
        .install();

    let handler = match handler {
        Ok(handler) => handler,
        Err(err) => {
            log::error!("cannot install swipe handler: {err}");
            return;
        }
    };

    let scripts: [(&str, i32, &[f32]); 4] = [
        ("short swipe on row 0", 0, &[10.0, 25.0, 35.0]),
        ("full swipe on row 1", 1, &[10.0, 30.0, 55.0, 70.0]),
        ("swipe on a service message", 2, &[10.0, 40.0, 80.0]),
        ("swipe back and forth on row 3", 3, &[20.0, 52.0, 40.0, 51.0]),
    ];

    for (title, row, deltas) in scripts {
        println!("{title}:");
        let y = (row * ROW_HEIGHT + ROW_HEIGHT / 2) as f32;
        let start_x = 300.0;
        cursor.set(Point::new(start_x, y));

        let mut last_x = start_x;
        handler.handle_event(&touch(TouchEventKind::Begin, start_x, y, TouchPointState::Pressed));
        for delta in deltas {
            last_x = start_x - delta;
            handler.handle_event(&touch(TouchEventKind::Update, last_x, y, TouchPointState::Moved));
            run_for(&runtime, Duration::from_millis(48));
        }
        handler.handle_event(&touch(TouchEventKind::End, last_x, y, TouchPointState::Released));

        run_until_idle(&runtime);
        println!();
    }

    println!("replied to rows {:?}", replies.borrow());
}

fn touch(kind: TouchEventKind, x: f32, y: f32, state: TouchPointState) -> InputEvent {
    InputEvent::Touch(
        TouchEvent::new(kind, Some(TouchDeviceKind::TouchScreen))
            .with_point(TouchPoint::new(0, Point::new(x, y), state)),
    )
}

const FRAME: Duration = Duration::from_millis(16);

/// Keeps frames going for `duration`, pumping only when something asked for
/// a frame.
fn run_for(runtime: &StdRuntime, duration: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < duration {
        if runtime.take_frame_request() {
            runtime.pump();
        }
        thread::sleep(FRAME);
        elapsed += FRAME;
    }
}

fn run_until_idle(runtime: &StdRuntime) {
    while runtime.take_frame_request() {
        runtime.pump();
        thread::sleep(FRAME);
    }
}

use std::fmt;
use std::rc::Rc;

/// Identifier of the item (row) a swipe applies to.
pub type ItemId = i64;

/// State reported to the host on every horizontal sample and animation tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeUpdate {
    /// Progress toward the threshold, clamped to `[0, 1.5]`.
    pub ratio: f32,
    /// Bounce overlay progress; 0 when no bounce is playing.
    pub reach_ratio: f32,
    /// Rounded pixel offset for the swiped item (zero or negative).
    pub translation: i32,
    pub item_id: ItemId,
    /// Vertical cursor position in the owning view at gesture start.
    pub cursor_top: i32,
}

/// What a gesture starting at a given row is allowed to do, resolved once
/// per gesture by the host.
#[derive(Clone, Default)]
pub struct SwipeFinishData {
    pub item_id: ItemId,
    /// Runs at most once, after the event turn, when a swipe is released
    /// past the threshold. `None` makes the gesture a plain vertical scroll.
    pub callback: Option<Rc<dyn Fn()>>,
}

impl SwipeFinishData {
    pub fn new(item_id: ItemId, callback: impl Fn() + 'static) -> Self {
        Self {
            item_id,
            callback: Some(Rc::new(callback)),
        }
    }

    /// Finish data for a row that cannot be swiped.
    pub fn none(item_id: ItemId) -> Self {
        Self {
            item_id,
            callback: None,
        }
    }

    pub fn can_finish(&self) -> bool {
        self.callback.is_some()
    }
}

impl fmt::Debug for SwipeFinishData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeFinishData")
            .field("item_id", &self.item_id)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

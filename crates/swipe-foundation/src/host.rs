//! Collaborators a swipe handler drives on the host side.

/// The scroll view whose native scrolling competes with horizontal swipes.
///
/// A handler calls these when it claims a gesture for itself (horizontal)
/// and again when it hands the gesture back (vertical or gesture end).
pub trait ScrollController {
    /// Freeze or release the view's own scrolling.
    fn disable_scroll(&self, disabled: bool);

    /// Toggle touch delivery to the scroll view's viewport.
    fn set_touch_events_accepted(&self, accepted: bool);
}

/// Platform haptic engine. Fired once each time a swipe crosses its threshold.
pub trait HapticFeedback {
    fn perform(&self);
}

/// Haptics for hosts without a haptic engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn perform(&self) {}
}

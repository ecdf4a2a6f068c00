//! Shared gesture constants for swipe recognition.
//!
//! Distances are in logical pixels unless typed as [`Dp`]; the threshold is
//! scaled by the display density before use.

use swipe_ui_graphics::Dp;

/// Horizontal distance a swipe must travel to reach its completion boundary.
pub const SWIPE_THRESHOLD: Dp = Dp(50.0);

/// Minimum difference between |dx| and |dy| before an orientation is chosen.
pub const ORIENTATION_THRESHOLD: f32 = 1.0;

/// Once reached, the ratio must fall below this before a new crossing counts.
pub const RESET_REACHED_ON: f32 = 0.95;

/// Upper bound of the ratio reported to the host.
pub const MAX_DISPLAY_RATIO: f32 = 1.5;

/// Duration of the bounce played when the threshold is crossed.
pub const BOUNCE_DURATION_MILLIS: u64 = 500;

/// Duration of the settle-back animation when a swipe ends.
pub const SLIDE_WRAP_DURATION_MILLIS: u64 = 150;

/// Vertical mouse drift from the gesture's cursor row that abandons a swipe.
///
/// Matches the common desktop drag-start distance of 10 logical pixels.
pub const DRAG_START_DISTANCE: f32 = 10.0;

//! Horizontal-versus-vertical decision for a gesture.

use swipe_ui_graphics::Point;

use crate::gesture_constants::ORIENTATION_THRESHOLD;

/// Direction a gesture has been classified as. Decided at most once per
/// gesture; only an explicit reset returns it to `Undetermined`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Undetermined,
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Classify a displacement. Within one unit of a tie the answer stays
    /// `Undetermined` and the caller keeps sampling.
    pub fn classify(delta: Point) -> Self {
        let diff = delta.x.abs() - delta.y.abs();
        if diff > ORIENTATION_THRESHOLD {
            Orientation::Horizontal
        } else if diff < -ORIENTATION_THRESHOLD {
            Orientation::Vertical
        } else {
            Orientation::Undetermined
        }
    }

    pub fn is_decided(self) -> bool {
        self != Orientation::Undetermined
    }

    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }
}

#[cfg(test)]
#[path = "../tests/orientation_tests.rs"]
mod tests;

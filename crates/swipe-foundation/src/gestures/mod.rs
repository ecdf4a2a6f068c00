pub mod orientation;
pub mod swipe;
pub mod swipe_data;
pub mod threshold;

pub use orientation::Orientation;
pub use swipe::{SwipeHandler, SwipeHandlerBuilder, WeakSwipeHandler};
pub use swipe_data::{ItemId, SwipeFinishData, SwipeUpdate};
pub use threshold::{ReachTransition, ThresholdAnimator, ThresholdTracker};

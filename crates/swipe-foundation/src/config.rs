//! Configuration for swipe handlers.

use std::fmt;

use swipe_animation::{AnimationSpec, Easing};
use swipe_ui_graphics::Dp;

use crate::gesture_constants::{
    BOUNCE_DURATION_MILLIS, DRAG_START_DISTANCE, SLIDE_WRAP_DURATION_MILLIS, SWIPE_THRESHOLD,
};

/// Host platform, used where touch and wheel semantics differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetPlatform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl TargetPlatform {
    /// The platform this crate was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            TargetPlatform::MacOs
        } else if cfg!(target_os = "windows") {
            TargetPlatform::Windows
        } else if cfg!(target_os = "linux") {
            TargetPlatform::Linux
        } else {
            TargetPlatform::Other
        }
    }

    /// macOS delivers trackpad touches as touch events and handles its own
    /// wheel momentum, which changes how both sources are filtered.
    pub fn is_mac(self) -> bool {
        self == TargetPlatform::MacOs
    }
}

impl Default for TargetPlatform {
    fn default() -> Self {
        Self::current()
    }
}

/// Settings for one swipe handler.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Display density used to scale [`SwipeConfig::threshold`] to pixels.
    pub density: f32,
    /// Horizontal distance to the completion boundary.
    pub threshold: Dp,
    /// Vertical mouse drift (pixels) that abandons a decided gesture.
    pub drag_start_distance: f32,
    /// Duration of the bounce played when the threshold is crossed.
    pub bounce_duration_millis: u64,
    /// Duration of the settle-back animation when a swipe ends.
    pub slide_wrap_duration_millis: u64,
    /// Easing of the settle-back animation.
    pub end_easing: Easing,
    pub platform: TargetPlatform,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            threshold: SWIPE_THRESHOLD,
            drag_start_distance: DRAG_START_DISTANCE,
            bounce_duration_millis: BOUNCE_DURATION_MILLIS,
            slide_wrap_duration_millis: SLIDE_WRAP_DURATION_MILLIS,
            end_easing: Easing::Linear,
            platform: TargetPlatform::current(),
        }
    }
}

impl SwipeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_threshold(mut self, threshold: Dp) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_drag_start_distance(mut self, distance: f32) -> Self {
        self.drag_start_distance = distance;
        self
    }

    pub fn with_bounce_duration(mut self, millis: u64) -> Self {
        self.bounce_duration_millis = millis;
        self
    }

    pub fn with_slide_wrap_duration(mut self, millis: u64) -> Self {
        self.slide_wrap_duration_millis = millis;
        self
    }

    pub fn with_end_easing(mut self, easing: Easing) -> Self {
        self.end_easing = easing;
        self
    }

    pub fn with_platform(mut self, platform: TargetPlatform) -> Self {
        self.platform = platform;
        self
    }

    /// Threshold distance in pixels.
    pub fn threshold_px(&self) -> f32 {
        self.threshold.to_px(self.density)
    }

    pub(crate) fn bounce_spec(&self) -> AnimationSpec {
        AnimationSpec::linear(self.bounce_duration_millis)
    }

    pub(crate) fn end_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.slide_wrap_duration_millis, self.end_easing)
    }

    /// Checks that every distance is usable. NaN counts as invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::NonPositiveDensity(self.density));
        }
        let threshold = self.threshold_px();
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::NonPositiveThreshold(threshold));
        }
        if self.drag_start_distance.is_nan() || self.drag_start_distance < 0.0 {
            return Err(ConfigError::NegativeDragDistance(self.drag_start_distance));
        }
        Ok(())
    }
}

/// Reasons a swipe handler cannot be installed.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonPositiveDensity(f32),
    NonPositiveThreshold(f32),
    NegativeDragDistance(f32),
    MissingCollaborator(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveDensity(density) => {
                write!(f, "display density must be positive, got {density}")
            }
            ConfigError::NonPositiveThreshold(threshold) => {
                write!(f, "swipe threshold must be positive, got {threshold}px")
            }
            ConfigError::NegativeDragDistance(distance) => {
                write!(f, "drag start distance must not be negative, got {distance}px")
            }
            ConfigError::MissingCollaborator(name) => {
                write!(f, "swipe handler requires a {name}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

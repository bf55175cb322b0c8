use serde::{Deserialize, Serialize};

use crate::timing::{FRAME_DURATION_MS_FOR_MIN, MIN_FRAME_DURATION_MS};

/// Frame duration clamping parameters.
///
/// Defaults follow the browser convention for animated GIFs: any frame shorter
/// than 11ms is displayed for 100ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameTimingConfig {
    /// Durations strictly below this are treated as degenerate.
    pub min_frame_duration_ms: i32,
    /// Replacement duration for degenerate frames.
    pub fallback_frame_duration_ms: i32,
}

impl Default for FrameTimingConfig {
    fn default() -> Self {
        Self {
            min_frame_duration_ms: MIN_FRAME_DURATION_MS,
            fallback_frame_duration_ms: FRAME_DURATION_MS_FOR_MIN,
        }
    }
}

impl FrameTimingConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum accepted frame duration.
    pub fn with_min_frame_duration(mut self, ms: i32) -> Self {
        self.min_frame_duration_ms = ms;
        self
    }

    /// Set the duration used in place of degenerate frames.
    pub fn with_fallback_frame_duration(mut self, ms: i32) -> Self {
        self.fallback_frame_duration_ms = ms;
        self
    }
}

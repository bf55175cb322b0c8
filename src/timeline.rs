use serde::{Deserialize, Serialize};

use crate::config::FrameTimingConfig;
use crate::error::{FrameResult, FrameTimingError};
use crate::timing::{fix_frame_durations_with, lookup_frame, timestamps_from_durations};

/// How many times an animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoopCount {
    #[default]
    Infinite,
    Finite(u32),
}

/// Fixed-up frame durations with their precomputed start timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTimeline {
    durations_ms: Vec<i32>,
    /// Sorted by construction; lookups skip the sortedness check.
    timestamps_ms: Vec<i32>,
    total_ms: i32,
}

impl FrameTimeline {
    /// Clamp degenerate durations and derive timestamps.
    pub fn from_durations(
        mut durations_ms: Vec<i32>,
        config: &FrameTimingConfig,
    ) -> FrameResult<Self> {
        if durations_ms.is_empty() {
            return Err(FrameTimingError::EmptyTimeline);
        }
        fix_frame_durations_with(&mut durations_ms, config);
        let timestamps_ms = timestamps_from_durations(&durations_ms)?;
        let last = durations_ms.len() - 1;
        let total_ms = timestamps_ms[last]
            .checked_add(durations_ms[last])
            .ok_or(FrameTimingError::DurationOverflow { index: last })?;
        Ok(Self {
            durations_ms,
            timestamps_ms,
            total_ms,
        })
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.durations_ms.len()
    }

    #[inline]
    pub fn durations(&self) -> &[i32] {
        &self.durations_ms
    }

    #[inline]
    pub fn timestamps(&self) -> &[i32] {
        &self.timestamps_ms
    }

    /// Length of one loop in milliseconds.
    #[inline]
    pub fn total_duration_ms(&self) -> i32 {
        self.total_ms
    }

    #[inline]
    pub fn frame_duration(&self, index: usize) -> Option<i32> {
        self.durations_ms.get(index).copied()
    }

    /// Frame showing at `timestamp_ms` within a single loop.
    #[inline]
    pub fn frame_at(&self, timestamp_ms: i32) -> FrameResult<usize> {
        lookup_frame(&self.timestamps_ms, timestamp_ms)
    }

    /// Frame showing after `elapsed_ms` of playback, or `None` once every loop
    /// has played.
    ///
    /// `Finite(0)` never shows a frame. A zero-length timeline plays its finite
    /// loops in no time, so it is finished as soon as `elapsed_ms > 0`.
    pub fn frame_at_looped(&self, elapsed_ms: i64, loop_count: LoopCount) -> Option<usize> {
        if loop_count == LoopCount::Finite(0) {
            return None;
        }
        if elapsed_ms <= 0 {
            return Some(0);
        }
        let total = i64::from(self.total_ms);
        if total == 0 {
            return match loop_count {
                LoopCount::Infinite => self.frame_at(0).ok(),
                LoopCount::Finite(_) => None,
            };
        }
        let loop_index = elapsed_ms / total;
        if let LoopCount::Finite(loops) = loop_count {
            if loop_index >= i64::from(loops) {
                return None;
            }
        }
        // Remainder is below total, which is an i32.
        let offset = (elapsed_ms % total) as i32;
        self.frame_at(offset).ok()
    }
}

use serde::{Deserialize, Serialize};

use crate::timing::is_outside_range;

/// Sub-loop of frames `[start, end]`, inclusive at both ends.
///
/// `start > end` wraps around the end of the animation. The `-1` sentinel in
/// either bound selects no frames at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRange {
    pub start: i32,
    pub end: i32,
}

impl FrameRange {
    /// Range that contains nothing.
    pub const NONE: FrameRange = FrameRange { start: -1, end: -1 };

    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: clamp_index(start),
            end: clamp_index(end),
        }
    }

    /// Build from raw bounds, `-1` included.
    #[inline]
    pub fn from_raw(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.start == -1 || self.end == -1
    }

    #[inline]
    pub fn wraps(&self) -> bool {
        !self.is_none() && self.start > self.end
    }

    #[inline]
    pub fn contains(&self, frame: usize) -> bool {
        !is_outside_range(self.start, self.end, clamp_index(frame))
    }
}

#[inline]
fn clamp_index(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

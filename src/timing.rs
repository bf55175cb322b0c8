//! Frame timing arithmetic for animated images.
//!
//! Durations and timestamps are milliseconds in the decoder's `i32` domain.
//! Timestamps are exclusive prefix sums of durations: frame `i` starts at
//! `durations[0] + .. + durations[i - 1]`.

use crate::config::FrameTimingConfig;
use crate::error::{FrameResult, FrameTimingError};

/// Frames shorter than this are considered degenerate.
pub const MIN_FRAME_DURATION_MS: i32 = 11;
/// Duration assigned to degenerate frames.
pub const FRAME_DURATION_MS_FOR_MIN: i32 = 100;

/// Replace every duration below 11ms with 100ms, in place.
///
/// Browsers display near-zero GIF delays at 100ms, so animations authored
/// against them expect the same.
#[inline]
pub fn fix_frame_durations(durations_ms: &mut [i32]) {
    fix_frame_durations_with(durations_ms, &FrameTimingConfig::default());
}

/// [`fix_frame_durations`] with explicit thresholds.
pub fn fix_frame_durations_with(durations_ms: &mut [i32], config: &FrameTimingConfig) {
    for duration in durations_ms.iter_mut() {
        if *duration < config.min_frame_duration_ms {
            *duration = config.fallback_frame_duration_ms;
        }
    }
}

/// Sum of all frame durations. Empty input totals 0.
pub fn total_duration(durations_ms: &[i32]) -> FrameResult<i32> {
    let mut total: i32 = 0;
    for (index, &duration) in durations_ms.iter().enumerate() {
        check_duration(index, duration)?;
        total = total
            .checked_add(duration)
            .ok_or(FrameTimingError::DurationOverflow { index })?;
    }
    Ok(total)
}

/// Start timestamp of each frame. Same length as the input, first element 0.
pub fn timestamps_from_durations(durations_ms: &[i32]) -> FrameResult<Vec<i32>> {
    let mut timestamps = Vec::with_capacity(durations_ms.len());
    let mut accumulated: i32 = 0;
    for (index, &duration) in durations_ms.iter().enumerate() {
        check_duration(index, duration)?;
        timestamps.push(accumulated);
        accumulated = accumulated
            .checked_add(duration)
            .ok_or(FrameTimingError::DurationOverflow { index })?;
    }
    Ok(timestamps)
}

/// Index of the frame showing at `timestamp_ms`.
///
/// Returns the latest frame whose start is `<= timestamp_ms`; timestamps past
/// the end resolve to the last frame. A timestamp before the first frame is
/// rejected rather than mapped to a negative index.
///
/// The input is checked for sortedness first, a linear scan ahead of the
/// binary search. Repeated lookups on one animation should go through
/// [`FrameTimeline::frame_at`](crate::timeline::FrameTimeline::frame_at),
/// which validates once at construction.
pub fn frame_for_timestamp(timestamps_ms: &[i32], timestamp_ms: i32) -> FrameResult<usize> {
    if let Some(pos) = timestamps_ms.windows(2).position(|w| w[0] > w[1]) {
        return Err(FrameTimingError::UnsortedTimestamps { index: pos + 1 });
    }
    lookup_frame(timestamps_ms, timestamp_ms)
}

/// Binary search over timestamps already known to be sorted.
pub(crate) fn lookup_frame(timestamps_ms: &[i32], timestamp_ms: i32) -> FrameResult<usize> {
    let first = *timestamps_ms
        .first()
        .ok_or(FrameTimingError::EmptyTimeline)?;
    if timestamp_ms < first {
        return Err(FrameTimingError::TimestampBeforeFirstFrame {
            timestamp: timestamp_ms,
            first,
        });
    }
    // At least one frame starts at or before the timestamp.
    let started = timestamps_ms.partition_point(|&start| start <= timestamp_ms);
    Ok(started - 1)
}

/// Whether `frame` falls outside the inclusive range `[start, end]`.
///
/// `-1` for either bound means nothing is in range. When `start > end` the
/// range wraps: only frames strictly between `end` and `start` are outside.
#[inline]
pub fn is_outside_range(start: i32, end: i32, frame: i32) -> bool {
    if start == -1 || end == -1 {
        return true;
    }
    if start <= end {
        frame < start || frame > end
    } else {
        frame < start && frame > end
    }
}

#[inline]
fn check_duration(index: usize, duration: i32) -> FrameResult<()> {
    if duration < 0 {
        return Err(FrameTimingError::NegativeDuration { index, duration });
    }
    Ok(())
}

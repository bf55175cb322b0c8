//! Error types for frame timing.

use thiserror::Error;

/// Precondition violations on frame duration and timestamp data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameTimingError {
    #[error("Negative frame duration {duration}ms at frame {index}")]
    NegativeDuration { index: usize, duration: i32 },

    #[error("Frame durations overflow at frame {index}")]
    DurationOverflow { index: usize },

    #[error("Frame timestamps are not sorted at index {index}")]
    UnsortedTimestamps { index: usize },

    #[error("Timeline has no frames")]
    EmptyTimeline,

    #[error("Timestamp {timestamp}ms precedes first frame at {first}ms")]
    TimestampBeforeFirstFrame { timestamp: i32, first: i32 },
}

/// Result type for frame timing operations.
pub type FrameResult<T> = Result<T, FrameTimingError>;

pub mod error;
pub mod config;
pub mod timing;
pub mod range;
pub mod timeline;
pub mod bitmap;
pub mod store;
pub mod frame_cache;
pub mod drawable;

// Re-exports
pub use error::{FrameResult, FrameTimingError};
pub use config::FrameTimingConfig;
pub use timing::{
    fix_frame_durations, fix_frame_durations_with, frame_for_timestamp, is_outside_range,
    timestamps_from_durations, total_duration, FRAME_DURATION_MS_FOR_MIN, MIN_FRAME_DURATION_MS,
};
pub use range::FrameRange;
pub use timeline::{FrameTimeline, LoopCount};
pub use bitmap::{Bitmap, BitmapConfig, BitmapRef, FrameMap};
pub use store::{AnimatedCache, InMemoryAnimatedCache};
pub use frame_cache::{
    cache_key_for, AnimatedImage, AnimatedImageResult, BitmapFrameCache, FrameCacheListener,
    FrameType, SharedFrameCache,
};
pub use drawable::{drop_all_caches, AnimatedDrawable, DrawableWithCaches};

//! Frame cache facade over a shared [`AnimatedCache`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bitmap::{BitmapRef, FrameMap};
use crate::store::AnimatedCache;

/// How a frame reached the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameType {
    Cached,
    Reused,
    Created,
    Unknown,
}

/// Notified when frames enter or leave a cache.
pub trait FrameCacheListener: Send {
    fn on_frame_cached(&self, frame_number: usize);
    fn on_frame_evicted(&self, frame_number: usize);
}

/// Per-animation bitmap cache consulted while drawing.
pub trait BitmapFrameCache: Send {
    fn cached_frame(&self, frame_number: usize) -> Option<BitmapRef>;

    /// Closest usable frame when `frame_number` is not ready.
    fn fallback_frame(&self, _frame_number: usize) -> Option<BitmapRef> {
        None
    }

    /// A bitmap the renderer may draw the next frame into.
    fn bitmap_to_reuse_for_frame(
        &self,
        _frame_number: usize,
        _width: u32,
        _height: u32,
    ) -> Option<BitmapRef> {
        None
    }

    fn contains(&self, frame_number: usize) -> bool {
        self.cached_frame(frame_number).is_some()
    }

    /// Bytes retained by this cache itself.
    fn size_in_bytes(&self) -> usize;

    fn clear(&mut self);

    fn on_frame_rendered(&mut self, _frame_number: usize, _bitmap: &BitmapRef, _frame_type: FrameType) {}

    fn on_frame_prepared(&mut self, _frame_number: usize, _bitmap: &BitmapRef, _frame_type: FrameType) {}

    /// All frames of the animation were decoded ahead of playback.
    fn on_animation_prepared(&mut self, frames: FrameMap);

    fn set_frame_cache_listener(&mut self, _listener: Option<Box<dyn FrameCacheListener>>) {}
}

/// Decoded animated image as handed over by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimatedImage {
    pub width: u32,
    pub height: u32,
    pub frame_durations_ms: Vec<i32>,
    /// Encoded source bytes.
    pub encoded: Vec<u8>,
}

/// Decoder output together with the URI it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimatedImageResult {
    pub source: Option<String>,
    pub image: AnimatedImage,
}

impl AnimatedImageResult {
    pub fn new(image: AnimatedImage) -> Self {
        Self {
            source: None,
            image,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Store key for an animation: its source URI, or a CRC32 of the image when
/// the source is unknown.
pub fn cache_key_for(result: &AnimatedImageResult) -> String {
    match &result.source {
        Some(source) => source.clone(),
        None => {
            let image = &result.image;
            let mut hasher = crc32fast::Hasher::new();
            hasher.update(&image.width.to_le_bytes());
            hasher.update(&image.height.to_le_bytes());
            hasher.update(&image.encoded);
            hasher.finalize().to_string()
        }
    }
}

/// [`BitmapFrameCache`] that keeps nothing itself and forwards to a shared
/// store under the animation's key.
pub struct SharedFrameCache {
    key: String,
    store: Arc<dyn AnimatedCache>,
}

impl SharedFrameCache {
    pub fn new(result: &AnimatedImageResult, store: Arc<dyn AnimatedCache>) -> Self {
        Self {
            key: cache_key_for(result),
            store,
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl BitmapFrameCache for SharedFrameCache {
    fn cached_frame(&self, frame_number: usize) -> Option<BitmapRef> {
        let frame = self.store.get_animation_frame(&self.key, frame_number);
        log::trace!(
            "frame {} of {}: {}",
            frame_number,
            self.key,
            if frame.is_some() { "hit" } else { "miss" }
        );
        frame
    }

    fn size_in_bytes(&self) -> usize {
        0
    }

    fn clear(&mut self) {
        log::debug!("clearing frames of {}", self.key);
        self.store.remove_animation(&self.key);
    }

    fn on_animation_prepared(&mut self, frames: FrameMap) {
        self.store.save_animation(&self.key, frames);
    }
}

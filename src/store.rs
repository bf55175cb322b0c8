//! Keyed storage for prepared animation frames.
//!
//! [`AnimatedCache`] is the contract the host's cache engine fulfills; the
//! frame cache facade only forwards to it.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::bitmap::{BitmapRef, FrameMap};

/// Animation frame store addressed by a string key.
pub trait AnimatedCache: Send + Sync {
    /// Frame `frame_index` of animation `key`, if stored.
    fn get_animation_frame(&self, key: &str, frame_index: usize) -> Option<BitmapRef>;

    /// Store the prepared frames of animation `key`, replacing earlier ones.
    fn save_animation(&self, key: &str, frames: FrameMap);

    /// Drop every frame stored for `key`.
    fn remove_animation(&self, key: &str);
}

/// Unbounded in-memory [`AnimatedCache`]. Nothing is evicted until removed.
#[derive(Debug, Default)]
pub struct InMemoryAnimatedCache {
    animations: RwLock<HashMap<String, FrameMap>>,
}

impl InMemoryAnimatedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of animations stored.
    pub fn animation_count(&self) -> usize {
        self.animations.read().len()
    }

    /// Number of frames stored for `key`.
    pub fn frame_count(&self, key: &str) -> usize {
        self.animations.read().get(key).map_or(0, |frames| frames.len())
    }
}

impl AnimatedCache for InMemoryAnimatedCache {
    fn get_animation_frame(&self, key: &str, frame_index: usize) -> Option<BitmapRef> {
        self.animations
            .read()
            .get(key)
            .and_then(|frames| frames.get(&frame_index))
            .cloned()
    }

    fn save_animation(&self, key: &str, frames: FrameMap) {
        log::debug!("storing {} frames for animation {}", frames.len(), key);
        self.animations.write().insert(key.to_owned(), frames);
    }

    fn remove_animation(&self, key: &str) {
        if self.animations.write().remove(key).is_some() {
            log::debug!("removed animation {}", key);
        }
    }
}

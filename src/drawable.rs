use crate::bitmap::BitmapRef;
use crate::frame_cache::BitmapFrameCache;
use crate::range::FrameRange;
use crate::timeline::{FrameTimeline, LoopCount};

/// Drawables that can release cached memory on request.
///
/// Best effort: a memory-pressure handler may call this at any time, or
/// never. Drawing must keep working either way.
pub trait DrawableWithCaches {
    fn drop_caches(&mut self);
}

/// Ask every drawable to drop its caches.
pub fn drop_all_caches(drawables: &mut [&mut dyn DrawableWithCaches]) {
    log::debug!("dropping caches of {} drawables", drawables.len());
    for drawable in drawables.iter_mut() {
        drawable.drop_caches();
    }
}

/// Animated image drawable: picks the frame for the elapsed time and reads it
/// from its frame cache.
pub struct AnimatedDrawable {
    timeline: FrameTimeline,
    frame_cache: Box<dyn BitmapFrameCache>,
    loop_range: Option<FrameRange>,
    loop_count: LoopCount,
}

impl AnimatedDrawable {
    pub fn new(timeline: FrameTimeline, frame_cache: Box<dyn BitmapFrameCache>) -> Self {
        Self {
            timeline,
            frame_cache,
            loop_range: None,
            loop_count: LoopCount::Infinite,
        }
    }

    /// Restrict drawing to a sub-loop of frames.
    pub fn with_loop_range(mut self, range: FrameRange) -> Self {
        self.loop_range = Some(range);
        self
    }

    pub fn with_loop_count(mut self, loop_count: LoopCount) -> Self {
        self.loop_count = loop_count;
        self
    }

    #[inline]
    pub fn timeline(&self) -> &FrameTimeline {
        &self.timeline
    }

    /// Whether `frame` may be drawn under the current sub-loop.
    #[inline]
    pub fn is_frame_in_loop(&self, frame: usize) -> bool {
        self.loop_range.map_or(true, |range| range.contains(frame))
    }

    /// Frame index for `elapsed_ms` of playback; `None` when finished or
    /// outside the sub-loop.
    pub fn frame_index_at(&self, elapsed_ms: i64) -> Option<usize> {
        let frame = self.timeline.frame_at_looped(elapsed_ms, self.loop_count)?;
        self.is_frame_in_loop(frame).then_some(frame)
    }

    /// Cached bitmap to draw after `elapsed_ms`, if one is ready.
    pub fn frame_at(&self, elapsed_ms: i64) -> Option<BitmapRef> {
        let frame = self.frame_index_at(elapsed_ms)?;
        self.frame_cache
            .cached_frame(frame)
            .or_else(|| self.frame_cache.fallback_frame(frame))
    }

    #[inline]
    pub fn frame_cache_mut(&mut self) -> &mut dyn BitmapFrameCache {
        self.frame_cache.as_mut()
    }
}

impl DrawableWithCaches for AnimatedDrawable {
    fn drop_caches(&mut self) {
        self.frame_cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::{Bitmap, BitmapConfig, FrameMap};
    use crate::config::FrameTimingConfig;
    use crate::frame_cache::{AnimatedImage, AnimatedImageResult, SharedFrameCache};
    use crate::store::InMemoryAnimatedCache;
    use std::sync::Arc;

    struct Counter(u32);

    /// Holds frame 0 only and offers it as a stand-in for any other frame.
    struct FirstFrameCache {
        first: BitmapRef,
    }

    impl BitmapFrameCache for FirstFrameCache {
        fn cached_frame(&self, frame_number: usize) -> Option<BitmapRef> {
            (frame_number == 0).then(|| self.first.clone())
        }

        fn fallback_frame(&self, _frame_number: usize) -> Option<BitmapRef> {
            Some(self.first.clone())
        }

        fn size_in_bytes(&self) -> usize {
            self.first.allocation_byte_count()
        }

        fn clear(&mut self) {}

        fn on_animation_prepared(&mut self, _frames: FrameMap) {}
    }

    impl DrawableWithCaches for Counter {
        fn drop_caches(&mut self) {
            self.0 += 1;
        }
    }

    fn drawable(store: Arc<InMemoryAnimatedCache>) -> AnimatedDrawable {
        let image = AnimatedImage {
            width: 2,
            height: 2,
            frame_durations_ms: vec![20, 20, 20, 40],
            encoded: vec![1, 2, 3],
        };
        let timeline = FrameTimeline::from_durations(
            image.frame_durations_ms.clone(),
            &FrameTimingConfig::default(),
        )
        .unwrap();
        let result = AnimatedImageResult::new(image).with_source("drawable");
        let mut cache = SharedFrameCache::new(&result, store);
        let frames: FrameMap = (0..4)
            .map(|i| (i, Arc::new(Bitmap::new(2, 2, BitmapConfig::Argb8888))))
            .collect();
        cache.on_animation_prepared(frames);
        AnimatedDrawable::new(timeline, Box::new(cache))
    }

    #[test]
    fn test_drop_all_caches() {
        let mut a = Counter(0);
        let mut b = Counter(0);
        let mut both: [&mut dyn DrawableWithCaches; 2] = [&mut a, &mut b];
        drop_all_caches(&mut both);
        let mut one: [&mut dyn DrawableWithCaches; 1] = [&mut a];
        drop_all_caches(&mut one);
        assert_eq!(a.0, 2);
        assert_eq!(b.0, 1);
    }

    #[test]
    fn test_frame_index_at() {
        let d = drawable(Arc::new(InMemoryAnimatedCache::new()));
        assert_eq!(d.timeline().total_duration_ms(), 100);
        assert_eq!(d.frame_index_at(0), Some(0));
        assert_eq!(d.frame_index_at(45), Some(2));
        assert_eq!(d.frame_index_at(160), Some(3));
    }

    #[test]
    fn test_loop_range_filters_frames() {
        let d = drawable(Arc::new(InMemoryAnimatedCache::new()))
            .with_loop_range(FrameRange::new(3, 0));
        assert_eq!(d.frame_index_at(0), Some(0));
        assert_eq!(d.frame_index_at(25), None);
        assert_eq!(d.frame_index_at(70), Some(3));
        assert!(!d.is_frame_in_loop(1));
    }

    #[test]
    fn test_finite_loop_ends() {
        let d = drawable(Arc::new(InMemoryAnimatedCache::new()))
            .with_loop_count(LoopCount::Finite(1));
        assert!(d.frame_at(99).is_some());
        assert!(d.frame_at(100).is_none());
    }

    #[test]
    fn test_missing_frame_uses_fallback() {
        let first: BitmapRef = Arc::new(Bitmap::new(2, 2, BitmapConfig::Alpha8));
        let cache = FirstFrameCache {
            first: first.clone(),
        };
        assert!(!cache.contains(2));
        let timeline =
            FrameTimeline::from_durations(vec![20, 20, 20], &FrameTimingConfig::default())
                .unwrap();
        let d = AnimatedDrawable::new(timeline, Box::new(cache));
        let drawn = d.frame_at(45).unwrap();
        assert!(Arc::ptr_eq(&drawn, &first));
    }

    #[test]
    fn test_drop_caches_clears_store() {
        let store = Arc::new(InMemoryAnimatedCache::new());
        let mut d = drawable(store.clone());
        assert!(d.frame_at(10).is_some());
        d.drop_caches();
        assert!(d.frame_at(10).is_none());
        assert_eq!(store.animation_count(), 0);
    }
}

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Pixel layout of a decoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BitmapConfig {
    #[default]
    Argb8888,
    Rgb565,
    Alpha8,
}

impl BitmapConfig {
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            BitmapConfig::Argb8888 => 4,
            BitmapConfig::Rgb565 => 2,
            BitmapConfig::Alpha8 => 1,
        }
    }
}

/// A decoded animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub config: BitmapConfig,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Zero-filled bitmap.
    ///
    /// # Panics
    ///
    /// Panics if the pixel buffer size overflows `usize`. Use [`Bitmap::try_new`]
    /// for sizes taken from untrusted input.
    pub fn new(width: u32, height: u32, config: BitmapConfig) -> Self {
        match Self::try_new(width, height, config) {
            Some(bitmap) => bitmap,
            None => panic!("bitmap {}x{} {:?} overflows usize", width, height, config),
        }
    }

    /// Zero-filled bitmap, or `None` if its byte size overflows `usize`.
    pub fn try_new(width: u32, height: u32, config: BitmapConfig) -> Option<Self> {
        let len = byte_count(width, height, config)?;
        Some(Self {
            width,
            height,
            config,
            pixels: vec![0; len],
        })
    }

    /// Bytes held by the pixel buffer.
    #[inline]
    pub fn allocation_byte_count(&self) -> usize {
        self.pixels.capacity()
    }
}

/// Pixel buffer size in bytes, checked for overflow.
#[inline]
pub fn byte_count(width: u32, height: u32, config: BitmapConfig) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)?
        .checked_mul(config.bytes_per_pixel())
}

/// Shared handle to a cached frame.
pub type BitmapRef = Arc<Bitmap>;

/// Prepared frames of one animation, keyed by frame index.
pub type FrameMap = BTreeMap<usize, BitmapRef>;

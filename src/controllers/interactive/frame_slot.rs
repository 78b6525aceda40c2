use crate::core::data::image_dimensions::ImageDimensions;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use std::sync::{Arc, Mutex, PoisonError};

/// A finished frame together with the viewport it was rendered for.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub viewport: Viewport,
    pub pixels: PixelBuffer,
}

impl RenderedFrame {
    /// An opaque black frame, shown until the first recompute lands.
    #[must_use]
    pub fn blank(viewport: Viewport, dimensions: ImageDimensions) -> Self {
        Self {
            viewport,
            pixels: PixelBuffer::new(dimensions),
        }
    }
}

/// Holds the most recent frame.
///
/// Writers swap in a whole new frame; readers clone the `Arc`. The lock is
/// only held for the pointer swap or clone, so readers never wait on a
/// recompute and never see a half-written frame.
#[derive(Debug)]
pub struct FrameSlot {
    current: Mutex<Arc<RenderedFrame>>,
}

impl FrameSlot {
    #[must_use]
    pub fn new(initial: RenderedFrame) -> Self {
        Self {
            current: Mutex::new(Arc::new(initial)),
        }
    }

    pub fn publish(&self, frame: Arc<RenderedFrame>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = frame;
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<RenderedFrame> {
        Arc::clone(&self.current.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

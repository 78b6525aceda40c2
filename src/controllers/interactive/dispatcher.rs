use crate::controllers::interactive::errors::recompute::RecomputeError;
use crate::controllers::interactive::frame_slot::{FrameSlot, RenderedFrame};
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_fractal::ports::compute_backend::ComputeBackend;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer_cancelable;
use crate::core::data::image_dimensions::ImageDimensions;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_table::ColourTable;
use std::sync::Arc;
use std::time::Instant;

/// Owns everything a recompute needs and publishes finished frames.
///
/// The iteration buffer and colour table are sized once from `dimensions`.
/// A recompute either publishes a complete new frame or leaves the
/// previously published one untouched.
pub struct ComputeDispatcher<B: ComputeBackend> {
    backend: B,
    dimensions: ImageDimensions,
    viewport: Viewport,
    iterations: IterationBuffer,
    colour_table: ColourTable,
    frame_slot: Arc<FrameSlot>,
}

impl<B: ComputeBackend> ComputeDispatcher<B> {
    /// The frame slot starts out holding a black frame for `viewport`.
    pub fn new(backend: B, dimensions: ImageDimensions, viewport: Viewport) -> Self {
        log::info!(
            "dispatcher using {} at {}x{}, iteration cap {}",
            backend.name(),
            dimensions.width_px(),
            dimensions.height_px(),
            dimensions.iteration_cap()
        );

        Self {
            backend,
            dimensions,
            viewport,
            iterations: IterationBuffer::new(dimensions),
            colour_table: ColourTable::build(dimensions.iteration_cap()),
            frame_slot: Arc::new(FrameSlot::new(RenderedFrame::blank(viewport, dimensions))),
        }
    }

    /// Replaces the viewport used by the next recompute. Does not recompute.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        log::info!("viewport set to {}", viewport);
        self.viewport = viewport;
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    #[must_use]
    pub fn frame_slot(&self) -> Arc<FrameSlot> {
        Arc::clone(&self.frame_slot)
    }

    pub fn recompute(&mut self) -> Result<Arc<RenderedFrame>, RecomputeError> {
        self.recompute_cancelable(&NeverCancel)
    }

    /// Computes and publishes a frame for the current viewport.
    ///
    /// Returns [`RecomputeError::Cancelled`] if `cancel` fires first, in which
    /// case nothing is published.
    pub fn recompute_cancelable<C: CancelToken>(
        &mut self,
        cancel: &C,
    ) -> Result<Arc<RenderedFrame>, RecomputeError> {
        let viewport = self.viewport;
        let start = Instant::now();

        self.backend
            .compute_iterations(viewport, self.dimensions, &mut self.iterations, cancel)?;

        let pixels =
            generate_pixel_buffer_cancelable(&self.iterations, &self.colour_table, cancel)?;

        let frame = Arc::new(RenderedFrame { viewport, pixels });
        self.frame_slot.publish(Arc::clone(&frame));

        log::debug!("recomputed {} in {:?}", viewport, start.elapsed());

        Ok(frame)
    }
}

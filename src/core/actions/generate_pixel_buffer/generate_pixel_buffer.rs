use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

/// Error type for cancelable pixel buffer generation.
#[derive(Debug, PartialEq, Eq)]
pub enum GeneratePixelBufferCancelableError {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// A pixel buffer construction error occurred.
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferCancelableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferCancelableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Colours every escape count in `iterations` with `mapper`.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<CMap: ColourMap>(
    iterations: &IterationBuffer,
    mapper: &CMap,
) -> Result<PixelBuffer, PixelBufferError> {
    generate_pixel_buffer_cancelable(iterations, mapper, &NeverCancel).map_err(|e| match e {
        GeneratePixelBufferCancelableError::PixelBuffer(err) => err,
        GeneratePixelBufferCancelableError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Colours every escape count with cancellation support.
///
/// Streams RGBA bytes into a buffer preallocated for the whole frame and
/// polls `cancel` every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels. A cancelled
/// call builds no [`PixelBuffer`] at all.
pub fn generate_pixel_buffer_cancelable<CMap, C>(
    iterations: &IterationBuffer,
    mapper: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferCancelableError>
where
    CMap: ColourMap,
    C: CancelToken,
{
    let dimensions = iterations.dimensions();
    let mut buffer: PixelBufferData = Vec::with_capacity(dimensions.pixel_count() * 4);

    for (i, &count) in iterations.counts().iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferCancelableError::Cancelled(Cancelled));
        }

        buffer.extend_from_slice(&mapper.map(count).to_rgba_bytes());
    }

    PixelBuffer::from_data(dimensions, buffer)
        .map_err(GeneratePixelBufferCancelableError::PixelBuffer)
}

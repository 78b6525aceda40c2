use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::generate_fractal::ports::compute_backend::ComputeError;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferCancelableError;
use crate::core::data::pixel_buffer::PixelBufferError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RecomputeError {
    /// Superseded or shut down before finishing. Not a failure.
    Cancelled(Cancelled),
    /// The backend could not produce iteration counts.
    Compute(ComputeError),
    /// Iteration counts could not be turned into a frame.
    Colour(PixelBufferError),
}

impl RecomputeError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

impl fmt::Display for RecomputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "recompute {}", c),
            Self::Compute(err) => write!(f, "compute failed: {}", err),
            Self::Colour(err) => write!(f, "colouring failed: {}", err),
        }
    }
}

impl Error for RecomputeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Compute(err) => Some(err),
            Self::Colour(err) => Some(err),
        }
    }
}

impl From<ComputeError> for RecomputeError {
    fn from(err: ComputeError) -> Self {
        match err {
            ComputeError::Cancelled(c) => Self::Cancelled(c),
            other => Self::Compute(other),
        }
    }
}

impl From<GeneratePixelBufferCancelableError> for RecomputeError {
    fn from(err: GeneratePixelBufferCancelableError) -> Self {
        match err {
            GeneratePixelBufferCancelableError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferCancelableError::PixelBuffer(err) => Self::Colour(err),
        }
    }
}

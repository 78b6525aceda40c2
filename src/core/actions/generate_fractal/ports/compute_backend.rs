use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::data::image_dimensions::ImageDimensions;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ComputeError {
    /// The caller's token fired before every row was computed.
    Cancelled(Cancelled),
    /// The output buffer was not sized for the requested dimensions.
    DimensionMismatch {
        requested: ImageDimensions,
        buffer: ImageDimensions,
    },
    /// The backend failed to run the kernel.
    Kernel(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::DimensionMismatch { requested, buffer } => write!(
                f,
                "requested {}x{} iterations but buffer is {}x{}",
                requested.width_px(),
                requested.height_px(),
                buffer.width_px(),
                buffer.height_px()
            ),
            Self::Kernel(err) => write!(f, "kernel error: {}", err),
        }
    }
}

impl Error for ComputeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::DimensionMismatch { .. } => None,
            Self::Kernel(err) => Some(err.as_ref()),
        }
    }
}

/// The device that runs the per-pixel iteration kernel.
///
/// Implementations own whatever resources they need (threads, device
/// buffers) and reuse them between calls. Results must be deterministic for
/// identical inputs. Calls arrive one at a time from a single owner.
pub trait ComputeBackend: Send {
    /// Human readable name of the device, for logging.
    fn name(&self) -> &str;

    /// Fills `iterations` with the escape count of every pixel of `viewport`.
    ///
    /// On error the contents of `iterations` are unspecified.
    fn compute_iterations<C: CancelToken>(
        &mut self,
        viewport: Viewport,
        dimensions: ImageDimensions,
        iterations: &mut IterationBuffer,
        cancel: &C,
    ) -> Result<(), ComputeError>;
}

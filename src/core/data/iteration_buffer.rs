use crate::core::data::image_dimensions::ImageDimensions;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationBufferError {
    BoundsMismatch {
        pixel_count: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for IterationBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_count,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel count {} does not match iteration buffer size {}",
                    pixel_count, buffer_size
                )
            }
        }
    }
}

impl Error for IterationBufferError {}

/// Per-pixel escape counts, row-major, one `u32` per pixel.
///
/// A value equal to the iteration cap means the point did not escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationBuffer {
    dimensions: ImageDimensions,
    counts: Vec<u32>,
}

impl IterationBuffer {
    #[must_use]
    pub fn new(dimensions: ImageDimensions) -> Self {
        Self {
            dimensions,
            counts: vec![0; dimensions.pixel_count()],
        }
    }

    pub fn from_data(
        dimensions: ImageDimensions,
        counts: Vec<u32>,
    ) -> Result<Self, IterationBufferError> {
        if counts.len() != dimensions.pixel_count() {
            return Err(IterationBufferError::BoundsMismatch {
                pixel_count: dimensions.pixel_count(),
                buffer_size: counts.len(),
            });
        }

        Ok(Self { dimensions, counts })
    }

    #[must_use]
    pub fn dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn counts_mut(&mut self) -> &mut [u32] {
        &mut self.counts
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.dimensions.width_px() || y >= self.dimensions.height_px() {
            return None;
        }

        let index = y as usize * self.dimensions.width_px() as usize + x as usize;
        self.counts.get(index).copied()
    }
}

use crate::core::data::colour::Colour;
use crate::core::data::image_dimensions::ImageDimensions;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 4;

fn dimensions_to_buffer_size(dimensions: ImageDimensions) -> usize {
    dimensions.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width_px: u32,
        height_px: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of RGBA data but buffer holds {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds {
                x,
                y,
                width_px,
                height_px,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} image",
                    x, y, width_px, height_px
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// A finished RGBA frame, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    dimensions: ImageDimensions,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Creates an opaque black frame.
    #[must_use]
    pub fn new(dimensions: ImageDimensions) -> Self {
        let buffer = Colour::OPAQUE_BLACK
            .to_rgba_bytes()
            .repeat(dimensions.pixel_count());

        Self { dimensions, buffer }
    }

    pub fn from_data(
        dimensions: ImageDimensions,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = dimensions_to_buffer_size(dimensions);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { dimensions, buffer })
    }

    #[must_use]
    pub fn dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.dimensions.width_px()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.dimensions.height_px()
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour, PixelBufferError> {
        let index = self.byte_index(x, y)?;
        let rgba = &self.buffer[index..index + BYTES_PER_PIXEL];

        Ok(Colour {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        })
    }

    fn byte_index(&self, x: u32, y: u32) -> Result<usize, PixelBufferError> {
        if x >= self.width() || y >= self.height() {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width_px: self.width(),
                height_px: self.height(),
            });
        }

        Ok((y as usize * self.width() as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

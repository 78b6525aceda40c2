use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageDimensionsError {
    ZeroSize { width_px: u32, height_px: u32 },
    ZeroIterationCap,
}

impl fmt::Display for ImageDimensionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize {
                width_px,
                height_px,
            } => {
                write!(
                    f,
                    "image dimensions must be non-zero: {}x{}",
                    width_px, height_px
                )
            }
            Self::ZeroIterationCap => {
                write!(f, "iteration cap must be greater than zero")
            }
        }
    }
}

impl Error for ImageDimensionsError {}

/// Pixel grid size and iteration cap, fixed for the lifetime of a dispatcher.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageDimensions {
    width_px: u32,
    height_px: u32,
    iteration_cap: u32,
}

impl ImageDimensions {
    pub fn new(
        width_px: u32,
        height_px: u32,
        iteration_cap: u32,
    ) -> Result<Self, ImageDimensionsError> {
        if width_px == 0 || height_px == 0 {
            return Err(ImageDimensionsError::ZeroSize {
                width_px,
                height_px,
            });
        }

        if iteration_cap == 0 {
            return Err(ImageDimensionsError::ZeroIterationCap);
        }

        Ok(Self {
            width_px,
            height_px,
            iteration_cap,
        })
    }

    #[must_use]
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    #[must_use]
    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    #[must_use]
    pub fn iteration_cap(&self) -> u32 {
        self.iteration_cap
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width_px as usize * self.height_px as usize
    }
}

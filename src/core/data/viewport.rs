use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane mapped onto the pixel grid.
///
/// Always has a strictly positive, finite width and height. A viewport is
/// never edited in place; a zoom produces a new one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    origin: Complex,
    width: f64,
    height: f64,
}

impl Viewport {
    pub const DEFAULT: Self = Self {
        origin: Complex::new(-2.0, -2.0),
        width: 4.0,
        height: 4.0,
    };

    pub fn new(origin: Complex, width: f64, height: f64) -> Result<Self, ViewportError> {
        // written so that NaN fails the check too
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            origin,
            width,
            height,
        })
    }

    /// Builds the viewport spanned by two opposite corners, in any order.
    pub fn from_corners(a: Complex, b: Complex) -> Result<Self, ViewportError> {
        let origin = Complex::new(a.real.min(b.real), a.imag.min(b.imag));

        Self::new(origin, (b.real - a.real).abs(), (b.imag - a.imag).abs())
    }

    #[must_use]
    pub fn origin(&self) -> Complex {
        self.origin
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.origin.real, self.origin.imag, self.width, self.height
        )
    }
}

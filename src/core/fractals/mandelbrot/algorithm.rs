use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;

/// Escape radius squared: |z| > 2.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// The classic `z <- z² + c` escape-time count, starting from `z = 0`.
///
/// Returns the number of iterations applied before `|z|` exceeded 2, or
/// `iteration_cap` if it never did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    iteration_cap: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, c: Complex) -> u32 {
        let mut z = Complex::ZERO;

        for iteration in 0..self.iteration_cap {
            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return iteration;
            }
            z = z.square() + c;
        }

        self.iteration_cap
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(iteration_cap: u32) -> Self {
        Self { iteration_cap }
    }

    #[must_use]
    pub fn iteration_cap(&self) -> u32 {
        self.iteration_cap
    }
}

use crate::core::data::complex::Complex;

/// A per-point escape-time formula.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, c: Complex) -> Self::Success;
}

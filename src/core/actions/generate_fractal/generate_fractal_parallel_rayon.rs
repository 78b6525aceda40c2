use rayon::ThreadPool;
use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::image_dimensions::ImageDimensions;
use crate::core::data::point::PixelPoint;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Fills `output` in parallel on `pool`, one rayon task per row.
///
/// For cancel-aware generation, use
/// [`generate_fractal_parallel_rayon_cancelable`].
///
/// # Panics
/// Panics if `output` is not exactly one slot per pixel.
pub fn generate_fractal_parallel_rayon<Alg>(
    pool: &ThreadPool,
    viewport: Viewport,
    dimensions: ImageDimensions,
    algorithm: &Alg,
    output: &mut [Alg::Success],
) where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    let result = generate_fractal_parallel_rayon_cancelable(
        pool,
        viewport,
        dimensions,
        algorithm,
        output,
        &NeverCancel,
    );

    debug_assert!(result.is_ok(), "NeverCancel token should never signal cancellation");
}

/// Fills `output` in parallel with cancellation support.
///
/// Polls `cancel` at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row. On cancellation
/// the rows already written are left in place and [`Cancelled`] is returned;
/// callers must treat the output as garbage.
///
/// # Panics
/// Panics if `output` is not exactly one slot per pixel.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    pool: &ThreadPool,
    viewport: Viewport,
    dimensions: ImageDimensions,
    algorithm: &Alg,
    output: &mut [Alg::Success],
    cancel: &C,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    C: CancelToken,
{
    assert_eq!(
        output.len(),
        dimensions.pixel_count(),
        "output holds {} slots for {} pixels",
        output.len(),
        dimensions.pixel_count()
    );

    let row_width = dimensions.width_px() as usize;

    pool.install(|| {
        output
            .par_chunks_mut(row_width)
            .enumerate()
            .try_for_each(|(y, row)| {
                for (x, slot) in row.iter_mut().enumerate() {
                    if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                        return Err(Cancelled);
                    }

                    let pixel = PixelPoint::new(x as i32, y as i32);
                    *slot = algorithm.compute(pixel_to_complex_coords(pixel, dimensions, viewport));
                }

                Ok(())
            })
    })
}

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::image_dimensions::ImageDimensions;
use crate::core::data::point::PixelPoint;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Runs `algorithm` for every pixel on the calling thread, row-major.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    viewport: Viewport,
    dimensions: ImageDimensions,
    algorithm: &Alg,
) -> Vec<Alg::Success> {
    let width = dimensions.width_px() as i32;
    let height = dimensions.height_px() as i32;

    (0..height)
        .flat_map(|y| (0..width).map(move |x| PixelPoint::new(x, y)))
        .map(|pixel| algorithm.compute(pixel_to_complex_coords(pixel, dimensions, viewport)))
        .collect()
}

use crate::core::data::complex::Complex;
use crate::core::data::image_dimensions::ImageDimensions;
use crate::core::data::point::PixelPoint;
use crate::core::data::viewport::Viewport;

/// Maps a pixel position onto the complex plane.
///
/// ```text
/// re = px / width_px  * viewport.width  + viewport.origin.real
/// im = py / height_px * viewport.height + viewport.origin.imag
/// ```
///
/// This is the only screen-to-plane transform in the crate: the iteration
/// kernel seeds each pixel's `c` with it and selections are translated with
/// it. Pixel `(0, 0)` lands exactly on the viewport origin; the far edge of
/// the viewport is one pixel beyond the last column/row.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel: PixelPoint,
    dimensions: ImageDimensions,
    viewport: Viewport,
) -> Complex {
    let origin = viewport.origin();
    let real =
        f64::from(pixel.x) / f64::from(dimensions.width_px()) * viewport.width() + origin.real;
    let imag =
        f64::from(pixel.y) / f64::from(dimensions.height_px()) * viewport.height() + origin.imag;

    Complex { real, imag }
}

use crate::core::data::image_dimensions::ImageDimensions;

/// A pixel position with a top-left origin.
///
/// Signed so that pointer positions reported outside the window can be
/// represented before they are clamped onto the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamps the point into `[0, width_px) x [0, height_px)`.
    #[must_use]
    pub fn clamped_to(self, dimensions: ImageDimensions) -> Self {
        let max_x = i32::try_from(dimensions.width_px() - 1).unwrap_or(i32::MAX);
        let max_y = i32::try_from(dimensions.height_px() - 1).unwrap_or(i32::MAX);

        Self {
            x: self.x.clamp(0, max_x),
            y: self.y.clamp(0, max_y),
        }
    }
}

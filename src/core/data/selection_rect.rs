use crate::core::data::point::PixelPoint;

/// The rectangle swept by a drag, in pixel coordinates.
///
/// `start` is where the pointer was pressed and `end` where it currently is;
/// either may be the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SelectionRect {
    pub start: PixelPoint,
    pub end: PixelPoint,
}

impl SelectionRect {
    #[must_use]
    pub const fn new(start: PixelPoint, end: PixelPoint) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn top_left(&self) -> PixelPoint {
        PixelPoint::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y))
    }

    #[must_use]
    pub fn bottom_right(&self) -> PixelPoint {
        PixelPoint::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y))
    }

    /// Horizontal distance between the two corners.
    #[must_use]
    pub fn extent_x(&self) -> u32 {
        self.start.x.abs_diff(self.end.x)
    }

    #[must_use]
    pub fn extent_y(&self) -> u32 {
        self.start.y.abs_diff(self.end.y)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.extent_x() == 0 || self.extent_y() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_normalised() {
        let rect = SelectionRect::new(PixelPoint::new(300, 50), PixelPoint::new(100, 250));

        assert_eq!(rect.top_left(), PixelPoint::new(100, 50));
        assert_eq!(rect.bottom_right(), PixelPoint::new(300, 250));
        assert_eq!(rect.extent_x(), 200);
        assert_eq!(rect.extent_y(), 200);
    }

    #[test]
    fn test_degenerate_when_either_extent_is_zero() {
        let flat = SelectionRect::new(PixelPoint::new(0, 5), PixelPoint::new(10, 5));
        let thin = SelectionRect::new(PixelPoint::new(5, 0), PixelPoint::new(5, 10));
        let square = SelectionRect::new(PixelPoint::new(0, 0), PixelPoint::new(1, 1));

        assert!(flat.is_degenerate());
        assert!(thin.is_degenerate());
        assert!(!square.is_degenerate());
    }
}

//! Frame composition helpers for presentation adapters.

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::selection_rect::SelectionRect;

const BYTES_PER_PIXEL: usize = 4;
const SELECTION_COLOUR: Colour = Colour::OPAQUE_RED;

/// Copies `frame` into the RGBA destination `dst` and draws the selection
/// outline, if any, on top.
///
/// The outline is one pixel wide and red. Edges that fall outside the frame
/// are skipped. `frame` is never modified.
///
/// # Panics
/// Panics if `dst` is not exactly the size of `frame`.
pub fn compose_frame(frame: &PixelBuffer, selection: Option<SelectionRect>, dst: &mut [u8]) {
    let src = frame.buffer();
    assert_eq!(
        dst.len(),
        src.len(),
        "dst length {} does not match frame length {} for {}x{}",
        dst.len(),
        src.len(),
        frame.width(),
        frame.height()
    );

    dst.copy_from_slice(src);

    if let Some(selection) = selection {
        draw_outline(dst, frame.width(), frame.height(), selection);
    }
}

fn draw_outline(dst: &mut [u8], width: u32, height: u32, selection: SelectionRect) {
    if width == 0 || height == 0 {
        return;
    }

    let max_x = i64::from(width) - 1;
    let max_y = i64::from(height) - 1;
    let top_left = selection.top_left();
    let bottom_right = selection.bottom_right();
    let (left, top) = (i64::from(top_left.x), i64::from(top_left.y));
    let (right, bottom) = (i64::from(bottom_right.x), i64::from(bottom_right.y));

    if right < 0 || bottom < 0 || left > max_x || top > max_y {
        return;
    }

    let x_span = left.max(0)..=right.min(max_x);
    let y_span = top.max(0)..=bottom.min(max_y);

    for y in [top, bottom] {
        if (0..=max_y).contains(&y) {
            for x in x_span.clone() {
                put_pixel(dst, width, x, y);
            }
        }
    }

    for x in [left, right] {
        if (0..=max_x).contains(&x) {
            for y in y_span.clone() {
                put_pixel(dst, width, x, y);
            }
        }
    }
}

#[inline]
fn put_pixel(dst: &mut [u8], width: u32, x: i64, y: i64) {
    let index = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
    dst[index..index + BYTES_PER_PIXEL].copy_from_slice(&SELECTION_COLOUR.to_rgba_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::image_dimensions::ImageDimensions;
    use crate::core::data::point::PixelPoint;

    fn grey_frame(width: u32, height: u32) -> PixelBuffer {
        let dimensions = ImageDimensions::new(width, height, 1).unwrap();
        let data = [40, 40, 40, 255].repeat(dimensions.pixel_count());

        PixelBuffer::from_data(dimensions, data).unwrap()
    }

    fn pixel_at(dst: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let index = ((y * width + x) as usize) * BYTES_PER_PIXEL;
        [dst[index], dst[index + 1], dst[index + 2], dst[index + 3]]
    }

    fn red_pixels(dst: &[u8], width: u32, height: u32) -> Vec<(u32, u32)> {
        let mut found = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if pixel_at(dst, width, x, y) == [255, 0, 0, 255] {
                    found.push((x, y));
                }
            }
        }
        found
    }

    #[test]
    fn test_without_selection_copies_frame() {
        let frame = grey_frame(4, 3);
        let mut dst = vec![0; frame.buffer_size()];

        compose_frame(&frame, None, &mut dst);

        assert_eq!(dst, frame.buffer());
    }

    #[test]
    fn test_draws_one_pixel_outline() {
        let frame = grey_frame(6, 6);
        let mut dst = vec![0; frame.buffer_size()];
        let selection = SelectionRect::new(PixelPoint::new(1, 1), PixelPoint::new(3, 4));

        compose_frame(&frame, Some(selection), &mut dst);

        let red = red_pixels(&dst, 6, 6);
        // 3 wide, 4 tall: perimeter of 10 pixels
        assert_eq!(red.len(), 10);
        assert!(red.contains(&(1, 1)));
        assert!(red.contains(&(3, 4)));
        assert!(!red.contains(&(2, 2)), "interior must stay untouched");
        assert_eq!(pixel_at(&dst, 6, 0, 0), [40, 40, 40, 255]);
    }

    #[test]
    fn test_reversed_drag_draws_same_outline() {
        let frame = grey_frame(6, 6);
        let mut forward = vec![0; frame.buffer_size()];
        let mut reversed = vec![0; frame.buffer_size()];

        compose_frame(
            &frame,
            Some(SelectionRect::new(PixelPoint::new(1, 1), PixelPoint::new(4, 3))),
            &mut forward,
        );
        compose_frame(
            &frame,
            Some(SelectionRect::new(PixelPoint::new(4, 3), PixelPoint::new(1, 1))),
            &mut reversed,
        );

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_outline_is_clipped_to_frame() {
        let frame = grey_frame(5, 5);
        let mut dst = vec![0; frame.buffer_size()];
        let selection = SelectionRect::new(PixelPoint::new(-3, 2), PixelPoint::new(9, 7));

        compose_frame(&frame, Some(selection), &mut dst);

        // only the top edge at y = 2 lies inside the frame
        let red = red_pixels(&dst, 5, 5);
        assert_eq!(red, vec![(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_selection_entirely_outside_draws_nothing() {
        let frame = grey_frame(4, 4);
        let mut dst = vec![0; frame.buffer_size()];
        let selection = SelectionRect::new(PixelPoint::new(10, 10), PixelPoint::new(20, 20));

        compose_frame(&frame, Some(selection), &mut dst);

        assert_eq!(dst, frame.buffer());
    }

    #[test]
    fn test_source_frame_is_not_mutated() {
        let frame = grey_frame(4, 4);
        let before = frame.clone();
        let mut dst = vec![0; frame.buffer_size()];

        compose_frame(
            &frame,
            Some(SelectionRect::new(PixelPoint::new(0, 0), PixelPoint::new(3, 3))),
            &mut dst,
        );

        assert_eq!(frame, before);
    }

    #[test]
    #[should_panic(expected = "does not match frame length")]
    fn test_mismatched_destination_panics() {
        let frame = grey_frame(2, 2);
        let mut dst = vec![0; 3];

        compose_frame(&frame, None, &mut dst);
    }
}

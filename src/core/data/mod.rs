pub mod colour;
pub mod complex;
pub mod image_dimensions;
pub mod iteration_buffer;
pub mod pixel_buffer;
pub mod point;
pub mod selection_rect;
pub mod viewport;

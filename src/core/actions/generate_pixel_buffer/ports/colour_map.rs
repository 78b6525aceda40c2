use crate::core::data::colour::Colour;

/// Maps an escape count to a display colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Colour;
}

use crate::core::data::viewport::Viewport;

/// Asks for the image to be recomputed for a new viewport.
///
/// Implementations return immediately; the recompute happens elsewhere.
pub trait RecomputeTrigger {
    /// Returns the generation assigned to the request.
    fn request_recompute(&self, viewport: Viewport) -> u64;
}

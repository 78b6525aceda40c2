use crate::controllers::interactive::events::render::RenderEvent;

/// Receives the outcome of every recompute the render worker finishes.
pub trait RenderEventPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}

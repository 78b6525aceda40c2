pub mod recompute;
pub mod render;

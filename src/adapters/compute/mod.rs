pub mod rayon_context;

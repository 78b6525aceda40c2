pub mod compute_backend;
pub mod fractal_algorithm;

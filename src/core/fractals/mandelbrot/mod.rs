pub mod algorithm;
pub mod colour_table;
pub mod mandelbrot_config;

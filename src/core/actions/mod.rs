pub mod errors;
pub mod ports;
pub mod render_fractal;
pub mod render_minimap;

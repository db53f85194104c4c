pub mod render_minimap;

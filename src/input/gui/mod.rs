//! Windowed viewer: winit for the window and keyboard, pixels for the framebuffer.

mod app;
mod keymap;

pub use app::{GuiError, run_gui};

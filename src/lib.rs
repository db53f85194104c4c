mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::viewer::controller::{LoopControl, ViewerController};
pub use crate::controllers::viewer::events::{InputEvent, Key, ParseKeyError};
pub use crate::core::actions::errors::RenderError;
pub use crate::core::actions::ports::frame_sink::FrameSink;
pub use crate::core::actions::render_fractal::render_fractal::render_fractal;
pub use crate::core::actions::render_minimap::render_minimap::render_minimap;
pub use crate::core::config::{MinimapConfig, ViewerConfig};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::escape_time::{
    EscapeResult, escape, evaluate, intensity,
};
pub use crate::core::navigation::command::NavigationCommand;
pub use crate::core::navigation::state::NavigationState;
pub use crate::core::util::coordinate_mapping::{
    MinimapHighlight, MinimapProjection, viewport_bounds,
};
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::memory::canvas::MemoryCanvas;

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, run_gui};
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::canvas::{PixelsCanvas, PixelsCanvasError};

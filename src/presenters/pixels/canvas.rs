use std::error::Error;
use std::fmt;

use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::window::Window;

use crate::core::actions::ports::frame_sink::FrameSink;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug)]
pub enum PixelsCanvasError {
    PixelOutsideBounds { pixel: Point, side: u32 },
    Render(pixels::Error),
}

impl fmt::Display for PixelsCanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, side } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} canvas",
                    pixel.x, pixel.y, side, side
                )
            }
            Self::Render(err) => write!(f, "failed to present frame: {}", err),
        }
    }
}

impl Error for PixelsCanvasError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelOutsideBounds { .. } => None,
            Self::Render(err) => Some(err),
        }
    }
}

/// Window-backed square canvas. Pixels are written into the `pixels` RGBA
/// frame and reach the screen on [`FrameSink::present`].
pub struct PixelsCanvas {
    pixels: Pixels<'static>,
    side: u32,
}

impl FrameSink for PixelsCanvas {
    type Failure = PixelsCanvasError;

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure> {
        let side = self.side as i64;
        let (x, y) = (i64::from(pixel.x), i64::from(pixel.y));

        if x < 0 || y < 0 || x >= side || y >= side {
            return Err(PixelsCanvasError::PixelOutsideBounds {
                pixel,
                side: self.side,
            });
        }

        let index = (y * side + x) as usize * BYTES_PER_PIXEL;
        let frame = self.pixels.frame_mut();
        frame[index..index + BYTES_PER_PIXEL].copy_from_slice(&[colour.r, colour.g, colour.b, 255]);

        Ok(())
    }

    fn present(&mut self) -> Result<(), Self::Failure> {
        self.pixels.render().map_err(PixelsCanvasError::Render)
    }
}

impl PixelsCanvas {
    /// Creates a `side x side` framebuffer scaled onto the window surface.
    ///
    /// Vsync is off so presenting after every column does not stall on the
    /// display refresh.
    pub fn new(window: &'static Window, side: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let mut pixels = PixelsBuilder::new(side, side, surface_texture)
            .enable_vsync(false)
            .build()?;

        for pixel in pixels.frame_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }

        Ok(Self { pixels, side })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::warn!("failed to resize surface to {}x{}: {}", width, height, err);
        }
    }
}

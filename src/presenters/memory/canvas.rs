use crate::core::actions::ports::frame_sink::FrameSink;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;

/// Off-screen square canvas backed by a [`PixelBuffer`].
#[derive(Debug, Clone)]
pub struct MemoryCanvas {
    buffer: PixelBuffer,
    presents: usize,
}

impl FrameSink for MemoryCanvas {
    type Failure = PixelBufferError;

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure> {
        self.buffer.set_pixel(pixel, colour)
    }

    fn present(&mut self) -> Result<(), Self::Failure> {
        self.presents += 1;
        Ok(())
    }
}

impl MemoryCanvas {
    pub fn new(side: u32) -> Result<Self, PixelRectError> {
        Ok(Self {
            buffer: PixelBuffer::new(PixelRect::square(side)?),
            presents: 0,
        })
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        self.buffer.pixel(pixel)
    }

    /// Number of times the canvas has been presented.
    #[must_use]
    pub fn presents(&self) -> usize {
        self.presents
    }
}

use std::error::Error;

use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Drawing surface the renderers write to.
pub trait FrameSink {
    type Failure: Error;

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure>;

    /// Makes every pixel written since the last call visible.
    fn present(&mut self) -> Result<(), Self::Failure>;
}

//! Mappings between pixel space and the complex plane shared by the main
//! view and the minimap.

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::point::Point;

/// Lower bound of the canonical `[-2, 2] x [-2, 2]` region on both axes.
pub const CANONICAL_MIN: f64 = -2.0;
/// Side length of the canonical region.
pub const CANONICAL_EXTENT: f64 = 4.0;

/// Pan units are divided by this before scaling by the zoom level.
const PAN_DIVISOR: f64 = 5.0;

/// Visible complex region for a zoom level and pan offset.
///
/// `min = (-2 + pan / 5) / 2^zoom` and `max = (2 + pan / 5) / 2^zoom` on each
/// axis, so the region stays square. Fails when the zoom level is extreme
/// enough for the bounds to underflow or overflow, or when a pan offset has
/// overflowed to infinity.
pub fn viewport_bounds(
    zoom_level: i32,
    pan_x: f64,
    pan_y: f64,
) -> Result<ComplexRect, ComplexRectError> {
    let scale = 2f64.powi(zoom_level);
    let half_extent = CANONICAL_EXTENT / 2.0;
    let offset_x = pan_x / PAN_DIVISOR;
    let offset_y = pan_y / PAN_DIVISOR;

    ComplexRect::new(
        Complex {
            real: (-half_extent + offset_x) / scale,
            imag: (-half_extent + offset_y) / scale,
        },
        Complex {
            real: (half_extent + offset_x) / scale,
            imag: (half_extent + offset_y) / scale,
        },
    )
}

/// Inclusive pixel rectangle painted over the minimap for the current viewport.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MinimapHighlight {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl MinimapHighlight {
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (self.top_left.x..=self.bottom_right.x).flat_map(move |x| {
            (self.top_left.y..=self.bottom_right.y).map(move |y| Point { x, y })
        })
    }
}

/// Projection of the canonical region onto a `size x size` minimap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MinimapProjection {
    size: u32,
}

impl MinimapProjection {
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Complex distance between neighbouring minimap pixels.
    #[must_use]
    pub fn step(&self) -> f64 {
        CANONICAL_EXTENT / f64::from(self.size)
    }

    /// Minimap pixels per complex unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        f64::from(self.size) / CANONICAL_EXTENT
    }

    #[must_use]
    pub fn to_pixel(&self, value: f64) -> f64 {
        (value - CANONICAL_MIN) * self.scale()
    }

    #[must_use]
    pub fn to_complex(&self, pixel: f64) -> f64 {
        CANONICAL_MIN + pixel * self.step()
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        Complex {
            real: self.to_complex(f64::from(pixel.x)),
            imag: self.to_complex(f64::from(pixel.y)),
        }
    }

    /// Pixel rectangle covering `viewport`, floored and clipped to `[0, size]`.
    ///
    /// Returns `None` when nothing of the viewport lands on the minimap.
    #[must_use]
    pub fn highlight(&self, viewport: &ComplexRect) -> Option<MinimapHighlight> {
        let limit = i64::from(self.size);
        let to_index = |value: f64| self.to_pixel(value).floor() as i64;

        let left = to_index(viewport.top_left().real).max(0);
        let top = to_index(viewport.top_left().imag).max(0);
        let right = to_index(viewport.bottom_right().real).min(limit);
        let bottom = to_index(viewport.bottom_right().imag).min(limit);

        if left > right || top > bottom {
            return None;
        }

        // all four values are within [0, size] here
        Some(MinimapHighlight {
            top_left: Point {
                x: left as i32,
                y: top as i32,
            },
            bottom_right: Point {
                x: right as i32,
                y: bottom as i32,
            },
        })
    }
}

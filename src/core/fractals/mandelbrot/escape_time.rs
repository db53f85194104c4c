//! Escape-time evaluation of the Mandelbrot recurrence `z = z² + c`.

use crate::core::data::complex::Complex;

/// Iteration stops once `|z|` reaches this modulus.
pub const ESCAPE_RADIUS: f64 = 2.0;

const INTENSITY_SCALE: f64 = 100.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub z: Complex,
    pub iterations: u32,
}

impl EscapeResult {
    #[must_use]
    pub fn escaped(&self) -> bool {
        self.z.magnitude() >= ESCAPE_RADIUS
    }
}

/// Iterates from `z = 0` until `|z| >= 2` or `max_iterations` steps have run.
#[must_use]
pub fn escape(c: Complex, max_iterations: u32) -> EscapeResult {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while iterations < max_iterations && z.magnitude() < ESCAPE_RADIUS {
        z = z * z + c;
        iterations += 1;
    }

    EscapeResult { z, iterations }
}

/// Final `z` of [`escape`]. A zero budget returns the origin.
#[must_use]
pub fn evaluate(c: Complex, max_iterations: u32) -> Complex {
    escape(c, max_iterations).z
}

/// Grey level for a final `z`: `(re² + im²) * 100`, saturated to a byte.
///
/// NaN maps to 0.
#[must_use]
pub fn intensity(z: Complex) -> u8 {
    (z.magnitude_squared() * INTENSITY_SCALE).clamp(0.0, 255.0) as u8
}

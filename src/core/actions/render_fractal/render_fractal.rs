use crate::core::actions::errors::RenderError;
use crate::core::actions::ports::frame_sink::FrameSink;
use crate::core::config::ViewerConfig;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::escape_time::{evaluate, intensity};
use crate::core::navigation::state::NavigationState;

/// Renders the main view as a grey escape-time image over the whole canvas.
///
/// Pixel `(i, j)` samples `(x_min + i * x_step, y_min + j * y_step)`. The sink
/// is presented after every completed column so slow renders fill in from
/// left to right.
///
/// A zoom level extreme enough to collapse the viewport (about 1075 zoom-ins)
/// returns [`RenderError::Viewport`] before any pixel is written, leaving the
/// previous frame on screen instead of drawing black.
pub fn render_fractal<S: FrameSink>(
    sink: &mut S,
    state: &NavigationState,
    config: &ViewerConfig,
) -> Result<(), RenderError<S::Failure>> {
    let viewport = state.viewport()?;
    let width = config.canvas_width;
    let x_step = viewport.width() / f64::from(width);
    let y_step = viewport.height() / f64::from(width);
    let origin = viewport.top_left();

    for i in 0..width {
        let real = origin.real + f64::from(i) * x_step;

        for j in 0..width {
            let c = Complex {
                real,
                imag: origin.imag + f64::from(j) * y_step,
            };
            let z = evaluate(c, state.iteration_budget);
            let pixel = Point {
                x: i as i32,
                y: j as i32,
            };

            sink.set_pixel(pixel, Colour::grey(intensity(z)))
                .map_err(RenderError::Sink)?;
        }

        sink.present().map_err(RenderError::Sink)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex_rect::ComplexRectError;
    use crate::core::navigation::command::NavigationCommand;
    use crate::presenters::memory::canvas::MemoryCanvas;
    use std::convert::Infallible;

    /// Counts pixel writes and records the running total at every present.
    #[derive(Default)]
    struct RecordingSink {
        written: usize,
        writes_at_present: Vec<usize>,
    }

    impl FrameSink for RecordingSink {
        type Failure = Infallible;

        fn set_pixel(&mut self, _pixel: Point, _colour: Colour) -> Result<(), Self::Failure> {
            self.written += 1;
            Ok(())
        }

        fn present(&mut self) -> Result<(), Self::Failure> {
            self.writes_at_present.push(self.written);
            Ok(())
        }
    }

    fn small_config() -> ViewerConfig {
        ViewerConfig::default().with_canvas_width(40)
    }

    #[test]
    fn test_presents_once_per_column() {
        let config = small_config();
        let mut canvas = MemoryCanvas::new(config.canvas_width).unwrap();

        render_fractal(&mut canvas, &NavigationState::default(), &config).unwrap();

        assert_eq!(canvas.presents(), 40);
    }

    #[test]
    fn test_each_present_follows_a_completed_column() {
        let config = ViewerConfig::default().with_canvas_width(10);
        let mut sink = RecordingSink::default();

        render_fractal(&mut sink, &NavigationState::default(), &config).unwrap();

        let expected: Vec<usize> = (1..=10).map(|column| column * 10).collect();
        assert_eq!(sink.writes_at_present, expected);
    }

    #[test]
    fn test_top_left_pixel_samples_viewport_corner() {
        let config = small_config();
        let mut canvas = MemoryCanvas::new(config.canvas_width).unwrap();
        let state = NavigationState::default();

        render_fractal(&mut canvas, &state, &config).unwrap();

        // (-2, -2) escapes on the first step: |z|² = 8
        let expected = Colour::grey(intensity(evaluate(Complex::new(-2.0, -2.0), 10)));
        assert_eq!(expected, Colour::grey(255));
        assert_eq!(canvas.pixel(Point { x: 0, y: 0 }).unwrap(), expected);
    }

    #[test]
    fn test_centre_pixel_is_dark() {
        let config = small_config();
        let mut canvas = MemoryCanvas::new(config.canvas_width).unwrap();

        render_fractal(&mut canvas, &NavigationState::default(), &config).unwrap();

        // pixel (20, 20) samples the origin, which stays at z = 0
        assert_eq!(canvas.pixel(Point { x: 20, y: 20 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_zero_budget_renders_black() {
        let config = small_config();
        let mut canvas = MemoryCanvas::new(config.canvas_width).unwrap();
        let state = NavigationState {
            iteration_budget: 0,
            ..NavigationState::default()
        };

        render_fractal(&mut canvas, &state, &config).unwrap();

        assert!(canvas.buffer().buffer().iter().all(|&b| b == 0));
        assert_eq!(canvas.presents(), 40);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let config = small_config();
        let mut state = NavigationState::default();
        state.apply(NavigationCommand::ZoomIn);
        state.apply(NavigationCommand::PanLeft);
        state.apply(NavigationCommand::DoubleIterations);

        let mut first = MemoryCanvas::new(config.canvas_width).unwrap();
        let mut second = MemoryCanvas::new(config.canvas_width).unwrap();
        render_fractal(&mut first, &state, &config).unwrap();
        render_fractal(&mut second, &state, &config).unwrap();
        render_fractal(&mut second, &state, &config).unwrap();

        assert_eq!(first.buffer(), second.buffer());
    }

    #[test]
    fn test_degenerate_viewport_is_reported_before_drawing() {
        let config = small_config();
        let mut canvas = MemoryCanvas::new(config.canvas_width).unwrap();
        let state = NavigationState {
            zoom_level: 5000,
            ..NavigationState::default()
        };

        let result = render_fractal(&mut canvas, &state, &config);

        assert!(matches!(
            result,
            Err(RenderError::Viewport(ComplexRectError::InvalidSize { .. }))
        ));
        assert_eq!(canvas.presents(), 0);
    }

    #[test]
    fn test_canvas_smaller_than_view_fails_with_sink_error() {
        let config = small_config();
        let mut canvas = MemoryCanvas::new(20).unwrap();

        let result = render_fractal(&mut canvas, &NavigationState::default(), &config);

        assert!(matches!(result, Err(RenderError::Sink(_))));
    }
}

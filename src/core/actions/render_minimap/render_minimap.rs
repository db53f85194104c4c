use crate::core::actions::errors::RenderError;
use crate::core::actions::ports::frame_sink::FrameSink;
use crate::core::config::MinimapConfig;
use crate::core::data::colour::Colour;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::escape_time::{evaluate, intensity};
use crate::core::navigation::state::NavigationState;
use crate::core::util::coordinate_mapping::MinimapProjection;

pub const BORDER_COLOUR: Colour = Colour::RED;
pub const HIGHLIGHT_COLOUR: Colour = Colour::GREEN;

/// Renders the overview of `[-2, 2] x [-2, 2]` in the top-left corner, frames it
/// and paints the area the main view currently shows.
///
/// The passes run in order and each overwrites the previous one: background
/// (presented per column), border, highlight, then a final present.
pub fn render_minimap<S: FrameSink>(
    sink: &mut S,
    state: &NavigationState,
    config: &MinimapConfig,
) -> Result<(), RenderError<S::Failure>> {
    let viewport = state.viewport()?;
    let projection = MinimapProjection::new(config.size);

    draw_background(sink, &projection, config.max_iterations)?;
    draw_border(sink, config.size, config.border_thickness)?;
    draw_highlight(sink, &projection, &viewport)?;

    sink.present().map_err(RenderError::Sink)
}

fn draw_background<S: FrameSink>(
    sink: &mut S,
    projection: &MinimapProjection,
    max_iterations: u32,
) -> Result<(), RenderError<S::Failure>> {
    let size = projection.size() as i32;

    for i in 0..size {
        for j in 0..size {
            let pixel = Point { x: i, y: j };
            let z = evaluate(projection.pixel_to_complex(pixel), max_iterations);

            sink.set_pixel(pixel, Colour::grey(intensity(z)))
                .map_err(RenderError::Sink)?;
        }

        sink.present().map_err(RenderError::Sink)?;
    }

    Ok(())
}

/// Paints every pixel of `[0, size] x [0, size]` lying within `thickness` of an edge.
fn draw_border<S: FrameSink>(
    sink: &mut S,
    size: u32,
    thickness: u32,
) -> Result<(), RenderError<S::Failure>> {
    let size = size as i32;
    let thickness = thickness as i32;
    let on_border = |v: i32| v < thickness || v > size - thickness;

    for i in 0..=size {
        for j in 0..=size {
            if on_border(i) || on_border(j) {
                sink.set_pixel(Point { x: i, y: j }, BORDER_COLOUR)
                    .map_err(RenderError::Sink)?;
            }
        }
    }

    Ok(())
}

fn draw_highlight<S: FrameSink>(
    sink: &mut S,
    projection: &MinimapProjection,
    viewport: &ComplexRect,
) -> Result<(), RenderError<S::Failure>> {
    let Some(highlight) = projection.highlight(viewport) else {
        log::debug!("viewport lies outside the minimap, skipping highlight");
        return Ok(());
    };

    for pixel in highlight.points() {
        sink.set_pixel(pixel, HIGHLIGHT_COLOUR)
            .map_err(RenderError::Sink)?;
    }

    Ok(())
}

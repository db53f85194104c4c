use std::error::Error;
use std::fmt;

use winit::{
    dpi::LogicalSize,
    error::{EventLoopError, OsError},
    event::{ElementState, Event, KeyEvent, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::controllers::viewer::controller::{LoopControl, ViewerController};
use crate::controllers::viewer::events::InputEvent;
use crate::core::actions::errors::RenderError;
use crate::core::config::ViewerConfig;
use crate::input::gui::keymap::key_from_physical;
use crate::presenters::pixels::canvas::{PixelsCanvas, PixelsCanvasError};

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Pixels(pixels::Error),
    Render(RenderError<PixelsCanvasError>),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Pixels(err) => write!(f, "failed to create pixels surface: {}", err),
            Self::Render(err) => write!(f, "{}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Pixels(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

fn window_title(controller: &ViewerController<PixelsCanvas>) -> String {
    format!("{} | {}", controller.config().title, controller.state())
}

/// Opens the viewer window and blocks until it is closed.
///
/// Each key press renders the whole frame synchronously inside the event
/// handler, so input that arrives mid-render waits for the render to finish.
pub fn run_gui(config: ViewerConfig) -> Result<(), GuiError> {
    let event_loop = EventLoop::new().map_err(GuiError::EventLoop)?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let side = f64::from(config.canvas_width);
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(LogicalSize::new(side, side))
        .with_resizable(false)
        .build(&event_loop)
        .map_err(GuiError::Window)?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(window));

    let canvas = PixelsCanvas::new(window, config.canvas_width).map_err(GuiError::Pixels)?;
    let mut controller = ViewerController::new(canvas, config);
    let mut failure = None;

    log::info!("viewer started: {}", controller.state());

    event_loop
        .run(|event, elwt| {
            let outcome = match event {
                Event::NewEvents(StartCause::Init) => {
                    window.set_title(&window_title(&controller));
                    controller.render().map(|()| LoopControl::Continue)
                }
                Event::WindowEvent { event, window_id } if window_id == window.id() => {
                    match event {
                        WindowEvent::CloseRequested => controller.handle_event(InputEvent::Quit),
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    physical_key,
                                    state: ElementState::Pressed,
                                    ..
                                },
                            ..
                        } => {
                            let key = key_from_physical(physical_key);
                            let outcome = controller.handle_event(InputEvent::KeyPressed(key));
                            window.set_title(&window_title(&controller));
                            outcome
                        }
                        WindowEvent::Resized(size) => {
                            controller.sink_mut().resize_surface(size.width, size.height);
                            Ok(LoopControl::Continue)
                        }
                        WindowEvent::RedrawRequested => {
                            controller.refresh().map(|()| LoopControl::Continue)
                        }
                        _ => Ok(LoopControl::Continue),
                    }
                }
                _ => Ok(LoopControl::Continue),
            };

            match outcome {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => elwt.exit(),
                Err(RenderError::Viewport(err)) => {
                    // recoverable by zooming back unless the pan has overflowed to infinity
                    log::warn!("cannot render [{}]: {}", controller.state(), err);
                }
                Err(err) => {
                    log::error!("render failed: {}", err);
                    failure = Some(err);
                    elwt.exit();
                }
            }
        })
        .map_err(GuiError::EventLoop)?;

    match failure {
        Some(err) => Err(GuiError::Render(err)),
        None => Ok(()),
    }
}

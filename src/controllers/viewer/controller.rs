use std::time::Instant;

use crate::controllers::viewer::events::InputEvent;
use crate::core::actions::errors::RenderError;
use crate::core::actions::ports::frame_sink::FrameSink;
use crate::core::actions::render_fractal::render_fractal::render_fractal;
use crate::core::actions::render_minimap::render_minimap::render_minimap;
use crate::core::config::ViewerConfig;
use crate::core::navigation::state::NavigationState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Single-threaded viewer: every key press updates the navigation state and
/// re-renders the main view and the minimap in full.
pub struct ViewerController<S: FrameSink> {
    sink: S,
    state: NavigationState,
    config: ViewerConfig,
}

impl<S: FrameSink> ViewerController<S> {
    pub fn new(sink: S, config: ViewerConfig) -> Self {
        Self {
            sink,
            state: NavigationState::default(),
            config,
        }
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Renders the main view, then the minimap on top of it.
    pub fn render(&mut self) -> Result<(), RenderError<S::Failure>> {
        let start = Instant::now();

        render_fractal(&mut self.sink, &self.state, &self.config)?;
        render_minimap(&mut self.sink, &self.state, &self.config.minimap)?;

        log::debug!("rendered [{}] in {:?}", self.state, start.elapsed());
        Ok(())
    }

    /// Presents the current frame again without recomputing it.
    pub fn refresh(&mut self) -> Result<(), RenderError<S::Failure>> {
        self.sink.present().map_err(RenderError::Sink)
    }

    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Result<LoopControl, RenderError<S::Failure>> {
        match event {
            InputEvent::Quit => {
                log::info!("quit requested");
                Ok(LoopControl::Exit)
            }
            InputEvent::KeyPressed(key) => {
                if let Some(command) = key.command() {
                    self.state.apply(command);
                    log::debug!("{:?} -> {}", command, self.state);
                }

                self.render()?;
                Ok(LoopControl::Continue)
            }
        }
    }

    /// Renders the initial frame, then handles events until a quit event or
    /// the end of the stream.
    pub fn run<I>(&mut self, events: I) -> Result<(), RenderError<S::Failure>>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        self.render()?;

        let mut events = events.into_iter();
        let mut close = false;

        while !close {
            close = match events.next() {
                Some(event) => self.handle_event(event)? == LoopControl::Exit,
                None => true,
            };
        }

        Ok(())
    }
}

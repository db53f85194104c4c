use std::error::Error;
use std::fmt;

use crate::core::data::complex_rect::ComplexRectError;

#[derive(Debug)]
pub enum RenderError<E> {
    Viewport(ComplexRectError),
    Sink(E),
}

impl<E: fmt::Display> fmt::Display for RenderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "viewport cannot be rendered: {}", err),
            Self::Sink(err) => write!(f, "frame sink error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for RenderError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Sink(err) => Some(err),
        }
    }
}

impl<E> From<ComplexRectError> for RenderError<E> {
    fn from(err: ComplexRectError) -> Self {
        Self::Viewport(err)
    }
}

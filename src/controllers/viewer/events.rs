use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::core::navigation::command::NavigationCommand;

/// Symbolic keys the viewer reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    NumpadPlus,
    NumpadMinus,
    NumpadEnter,
    Left,
    Right,
    Up,
    Down,
    Backspace,
    Enter,
    /// Any key without a binding. Still triggers a re-render.
    Other,
}

impl Key {
    #[must_use]
    pub fn command(self) -> Option<NavigationCommand> {
        match self {
            Self::NumpadPlus => Some(NavigationCommand::DoubleIterations),
            Self::NumpadMinus => Some(NavigationCommand::HalveIterations),
            Self::NumpadEnter => Some(NavigationCommand::ResetIterations),
            Self::Left => Some(NavigationCommand::PanLeft),
            Self::Right => Some(NavigationCommand::PanRight),
            Self::Up => Some(NavigationCommand::PanUp),
            Self::Down => Some(NavigationCommand::PanDown),
            Self::Backspace => Some(NavigationCommand::ZoomOut),
            Self::Enter => Some(NavigationCommand::ZoomIn),
            Self::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyError {
    input: String,
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown key '{}', expected one of: plus, minus, kp-enter, left, right, up, down, backspace, enter, other",
            self.input
        )
    }
}

impl Error for ParseKeyError {}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plus" => Ok(Self::NumpadPlus),
            "minus" => Ok(Self::NumpadMinus),
            "kp-enter" => Ok(Self::NumpadEnter),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "backspace" => Ok(Self::Backspace),
            "enter" => Ok(Self::Enter),
            "other" => Ok(Self::Other),
            _ => Err(ParseKeyError {
                input: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyPressed(Key),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(Key::NumpadPlus.command(), Some(NavigationCommand::DoubleIterations));
        assert_eq!(Key::NumpadMinus.command(), Some(NavigationCommand::HalveIterations));
        assert_eq!(Key::NumpadEnter.command(), Some(NavigationCommand::ResetIterations));
        assert_eq!(Key::Left.command(), Some(NavigationCommand::PanLeft));
        assert_eq!(Key::Right.command(), Some(NavigationCommand::PanRight));
        assert_eq!(Key::Up.command(), Some(NavigationCommand::PanUp));
        assert_eq!(Key::Down.command(), Some(NavigationCommand::PanDown));
        assert_eq!(Key::Backspace.command(), Some(NavigationCommand::ZoomOut));
        assert_eq!(Key::Enter.command(), Some(NavigationCommand::ZoomIn));
        assert_eq!(Key::Other.command(), None);
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!("enter".parse::<Key>(), Ok(Key::Enter));
        assert_eq!("KP-ENTER".parse::<Key>(), Ok(Key::NumpadEnter));
        assert_eq!("backspace".parse::<Key>(), Ok(Key::Backspace));
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "f13".parse::<Key>().unwrap_err();

        assert!(err.to_string().starts_with("unknown key 'f13'"));
    }
}

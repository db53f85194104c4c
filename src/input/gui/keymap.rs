use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controllers::viewer::events::Key;

pub fn key_from_physical(key: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = key else {
        return Key::Other;
    };

    match code {
        KeyCode::NumpadAdd => Key::NumpadPlus,
        KeyCode::NumpadSubtract => Key::NumpadMinus,
        KeyCode::NumpadEnter => Key::NumpadEnter,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    fn map(code: KeyCode) -> Key {
        key_from_physical(PhysicalKey::Code(code))
    }

    #[test]
    fn test_numpad_keys_are_distinct_from_main_keys() {
        assert_eq!(map(KeyCode::NumpadEnter), Key::NumpadEnter);
        assert_eq!(map(KeyCode::Enter), Key::Enter);
        assert_eq!(map(KeyCode::NumpadAdd), Key::NumpadPlus);
        assert_eq!(map(KeyCode::Equal), Key::Other);
        assert_eq!(map(KeyCode::NumpadSubtract), Key::NumpadMinus);
        assert_eq!(map(KeyCode::Minus), Key::Other);
    }

    #[test]
    fn test_arrows_and_backspace() {
        assert_eq!(map(KeyCode::ArrowLeft), Key::Left);
        assert_eq!(map(KeyCode::ArrowRight), Key::Right);
        assert_eq!(map(KeyCode::ArrowUp), Key::Up);
        assert_eq!(map(KeyCode::ArrowDown), Key::Down);
        assert_eq!(map(KeyCode::Backspace), Key::Backspace);
    }

    #[test]
    fn test_unidentified_keys_map_to_other() {
        let key = PhysicalKey::Unidentified(NativeKeyCode::Unidentified);

        assert_eq!(key_from_physical(key), Key::Other);
    }
}

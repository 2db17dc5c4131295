//! US keyboard layout.
//!
//! Maps printable ASCII (plus newline and tab) to the key that produces it and
//! whether shift must be held.

use crate::device::Keyboard;
use crate::keycode::KeyCode;
use anyhow::Result;

/// The key and shift state that types `ch`, or `None` if the layout cannot produce it.
pub fn char_to_key(ch: char) -> Option<(KeyCode, bool)> {
    let key = match ch {
        'a'..='z' => return Some((KeyCode(KeyCode::A.0 + (ch as u8 - b'a')), false)),
        'A'..='Z' => return Some((KeyCode(KeyCode::A.0 + (ch as u8 - b'A')), true)),
        '1'..='9' => return Some((KeyCode(KeyCode::ONE.0 + (ch as u8 - b'1')), false)),
        '0' => (KeyCode::ZERO, false),
        ' ' => (KeyCode::SPACEBAR, false),
        '\n' => (KeyCode::ENTER, false),
        '\t' => (KeyCode::TAB, false),
        '-' => (KeyCode::MINUS, false),
        '=' => (KeyCode::EQUALS, false),
        '[' => (KeyCode::LEFT_BRACKET, false),
        ']' => (KeyCode::RIGHT_BRACKET, false),
        '\\' => (KeyCode::BACKSLASH, false),
        ';' => (KeyCode::SEMICOLON, false),
        '\'' => (KeyCode::QUOTE, false),
        '`' => (KeyCode::GRAVE_ACCENT, false),
        ',' => (KeyCode::COMMA, false),
        '.' => (KeyCode::PERIOD, false),
        '/' => (KeyCode::FORWARD_SLASH, false),
        '!' => (KeyCode::ONE, true),
        '@' => (KeyCode::TWO, true),
        '#' => (KeyCode::THREE, true),
        '$' => (KeyCode::FOUR, true),
        '%' => (KeyCode::FIVE, true),
        '^' => (KeyCode::SIX, true),
        '&' => (KeyCode::SEVEN, true),
        '*' => (KeyCode::EIGHT, true),
        '(' => (KeyCode::NINE, true),
        ')' => (KeyCode::ZERO, true),
        '_' => (KeyCode::MINUS, true),
        '+' => (KeyCode::EQUALS, true),
        '{' => (KeyCode::LEFT_BRACKET, true),
        '}' => (KeyCode::RIGHT_BRACKET, true),
        '|' => (KeyCode::BACKSLASH, true),
        ':' => (KeyCode::SEMICOLON, true),
        '"' => (KeyCode::QUOTE, true),
        '~' => (KeyCode::GRAVE_ACCENT, true),
        '<' => (KeyCode::COMMA, true),
        '>' => (KeyCode::PERIOD, true),
        '?' => (KeyCode::FORWARD_SLASH, true),
        _ => return None,
    };
    Some(key)
}

/// Type `text` one character at a time: press the key (with shift if needed),
/// then release everything. Characters the layout cannot produce are skipped.
pub fn type_text<K: Keyboard + ?Sized>(keyboard: &mut K, text: &str) -> Result<()> {
    for ch in text.chars() {
        match char_to_key(ch) {
            Some((key, true)) => keyboard.press(&[KeyCode::LEFT_SHIFT, key])?,
            Some((key, false)) => keyboard.press(&[key])?,
            None => {
                tracing::warn!(?ch, "character not in keyboard layout, skipped");
                continue;
            }
        }
        keyboard.release_all()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<Option<Vec<KeyCode>>>,
    }

    impl Keyboard for Recorder {
        fn press(&mut self, keys: &[KeyCode]) -> Result<()> {
            self.events.push(Some(keys.to_vec()));
            Ok(())
        }

        fn release_all(&mut self) -> Result<()> {
            self.events.push(None);
            Ok(())
        }
    }

    #[test]
    fn test_char_to_key() {
        assert_eq!(char_to_key('a'), Some((KeyCode::A, false)));
        assert_eq!(char_to_key('Z'), Some((KeyCode::Z, true)));
        assert_eq!(char_to_key('1'), Some((KeyCode::ONE, false)));
        assert_eq!(char_to_key('9'), Some((KeyCode::NINE, false)));
        assert_eq!(char_to_key('0'), Some((KeyCode::ZERO, false)));
        assert_eq!(char_to_key('?'), Some((KeyCode::FORWARD_SLASH, true)));
        assert_eq!(char_to_key('\n'), Some((KeyCode::ENTER, false)));
        assert_eq!(char_to_key('é'), None);
    }

    #[test]
    fn test_type_text_presses_then_releases() {
        let mut kbd = Recorder::default();
        type_text(&mut kbd, "Hi").unwrap();
        assert_eq!(
            kbd.events,
            vec![
                Some(vec![KeyCode::LEFT_SHIFT, KeyCode::H]),
                None,
                Some(vec![KeyCode::I]),
                None,
            ]
        );
    }

    #[test]
    fn test_type_text_skips_unmapped() {
        let mut kbd = Recorder::default();
        type_text(&mut kbd, "é!").unwrap();
        assert_eq!(
            kbd.events,
            vec![Some(vec![KeyCode::LEFT_SHIFT, KeyCode::ONE]), None]
        );
    }
}

//! Resolution of script key tokens into key codes.
//!
//! A token is upper-cased, looked up in the script alias table, and on a miss
//! matched by exact name against the canonical key-code set. Anything else is
//! unresolved and gets dropped by the caller.

use crate::keycode::KeyCode;

static ALIASES: &[(&str, KeyCode)] = &[
    ("WINDOWS", KeyCode::WINDOWS),
    ("GUI", KeyCode::GUI),
    ("APP", KeyCode::APPLICATION),
    ("MENU", KeyCode::APPLICATION),
    ("SHIFT", KeyCode::SHIFT),
    ("ALT", KeyCode::ALT),
    ("CONTROL", KeyCode::CONTROL),
    ("CTRL", KeyCode::CONTROL),
    ("DOWNARROW", KeyCode::DOWN_ARROW),
    ("DOWN", KeyCode::DOWN_ARROW),
    ("LEFTARROW", KeyCode::LEFT_ARROW),
    ("LEFT", KeyCode::LEFT_ARROW),
    ("RIGHTARROW", KeyCode::RIGHT_ARROW),
    ("RIGHT", KeyCode::RIGHT_ARROW),
    ("UPARROW", KeyCode::UP_ARROW),
    ("UP", KeyCode::UP_ARROW),
    ("BREAK", KeyCode::PAUSE),
    ("PAUSE", KeyCode::PAUSE),
    ("CAPSLOCK", KeyCode::CAPS_LOCK),
    ("DELETE", KeyCode::DELETE),
    ("END", KeyCode::END),
    ("ESC", KeyCode::ESCAPE),
    ("ESCAPE", KeyCode::ESCAPE),
    ("HOME", KeyCode::HOME),
    ("INSERT", KeyCode::INSERT),
    ("NUMLOCK", KeyCode::KEYPAD_NUMLOCK),
    ("PAGEUP", KeyCode::PAGE_UP),
    ("PAGEDOWN", KeyCode::PAGE_DOWN),
    ("PRINTSCREEN", KeyCode::PRINT_SCREEN),
    ("ENTER", KeyCode::ENTER),
    ("SCROLLLOCK", KeyCode::SCROLL_LOCK),
    ("SPACE", KeyCode::SPACE),
    ("TAB", KeyCode::TAB),
    ("BACKSPACE", KeyCode::BACKSPACE),
    ("A", KeyCode::A),
    ("B", KeyCode::B),
    ("C", KeyCode::C),
    ("D", KeyCode::D),
    ("E", KeyCode::E),
    ("F", KeyCode::F),
    ("G", KeyCode::G),
    ("H", KeyCode::H),
    ("I", KeyCode::I),
    ("J", KeyCode::J),
    ("K", KeyCode::K),
    ("L", KeyCode::L),
    ("M", KeyCode::M),
    ("N", KeyCode::N),
    ("O", KeyCode::O),
    ("P", KeyCode::P),
    ("Q", KeyCode::Q),
    ("R", KeyCode::R),
    ("S", KeyCode::S),
    ("T", KeyCode::T),
    ("U", KeyCode::U),
    ("V", KeyCode::V),
    ("W", KeyCode::W),
    ("X", KeyCode::X),
    ("Y", KeyCode::Y),
    ("Z", KeyCode::Z),
    ("F1", KeyCode::F1),
    ("F2", KeyCode::F2),
    ("F3", KeyCode::F3),
    ("F4", KeyCode::F4),
    ("F5", KeyCode::F5),
    ("F6", KeyCode::F6),
    ("F7", KeyCode::F7),
    ("F8", KeyCode::F8),
    ("F9", KeyCode::F9),
    ("F10", KeyCode::F10),
    ("F11", KeyCode::F11),
    ("F12", KeyCode::F12),
];

/// Resolve a single token, case-insensitively. Returns `None` for unresolved tokens.
pub fn resolve(token: &str) -> Option<KeyCode> {
    let upper = token.to_uppercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == upper)
        .map(|(_, code)| *code)
        .or_else(|| KeyCode::from_name(&upper))
}

/// Split a key-combo line on single spaces, discarding empty fields.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(' ').filter(|token| !token.is_empty())
}

/// Resolve every token on a key-combo line, dropping the unresolved ones.
pub fn resolve_line(line: &str) -> Vec<KeyCode> {
    tokenize(line).filter_map(resolve).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(resolve("CTRL"), Some(KeyCode::LEFT_CONTROL));
        assert_eq!(resolve("CONTROL"), Some(KeyCode::LEFT_CONTROL));
        assert_eq!(resolve("LEFT"), Some(KeyCode::LEFT_ARROW));
        assert_eq!(resolve("LEFTARROW"), Some(KeyCode::LEFT_ARROW));
        assert_eq!(resolve("BREAK"), Some(KeyCode::PAUSE));
        assert_eq!(resolve("MENU"), Some(KeyCode::APPLICATION));
        assert_eq!(resolve("NUMLOCK"), Some(KeyCode::KEYPAD_NUMLOCK));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        for (alias, _) in ALIASES {
            assert_eq!(
                resolve(&alias.to_lowercase()),
                resolve(alias),
                "alias {alias}"
            );
            assert!(resolve(alias).is_some(), "alias {alias}");
        }
    }

    #[test]
    fn test_resolve_falls_back_to_canonical_names() {
        assert_eq!(resolve("F13"), Some(KeyCode::F13));
        assert_eq!(resolve("right_shift"), Some(KeyCode::RIGHT_SHIFT));
        assert_eq!(resolve("KEYPAD_PLUS"), Some(KeyCode::KEYPAD_PLUS));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve("FOO"), None);
        assert_eq!(resolve("CTRLL"), None);
        assert_eq!(resolve("1"), None);
    }

    #[test]
    fn test_tokenize_skips_repeated_spaces() {
        let tokens: Vec<_> = tokenize("  CTRL   ALT  DELETE ").collect();
        assert_eq!(tokens, vec!["CTRL", "ALT", "DELETE"]);
    }

    #[test]
    fn test_tokenize_only_splits_on_spaces() {
        let tokens: Vec<_> = tokenize("CTRL\tALT").collect();
        assert_eq!(tokens, vec!["CTRL\tALT"]);
    }

    #[test]
    fn test_resolve_line_drops_unresolved() {
        assert_eq!(
            resolve_line("GUI nonsense r"),
            vec![KeyCode::LEFT_GUI, KeyCode::R]
        );
        assert!(resolve_line("nope nada").is_empty());
        assert!(resolve_line("").is_empty());
    }
}

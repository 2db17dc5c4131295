//! The canonical key-code set.
//!
//! Every addressable key is a [`KeyCode`] carrying its USB HID usage id from the
//! keyboard/keypad page. [`KeyCode::from_name`] looks a key up by its canonical
//! upper-case name (`LEFT_ARROW`, `KEYPAD_NUMLOCK`, `F13`, ...), which is the
//! fallback used by the key resolver when a token is not a script alias.

use std::fmt;

/// A USB HID keyboard usage id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u8);

impl KeyCode {
    pub const A: Self = Self(0x04);
    pub const B: Self = Self(0x05);
    pub const C: Self = Self(0x06);
    pub const D: Self = Self(0x07);
    pub const E: Self = Self(0x08);
    pub const F: Self = Self(0x09);
    pub const G: Self = Self(0x0A);
    pub const H: Self = Self(0x0B);
    pub const I: Self = Self(0x0C);
    pub const J: Self = Self(0x0D);
    pub const K: Self = Self(0x0E);
    pub const L: Self = Self(0x0F);
    pub const M: Self = Self(0x10);
    pub const N: Self = Self(0x11);
    pub const O: Self = Self(0x12);
    pub const P: Self = Self(0x13);
    pub const Q: Self = Self(0x14);
    pub const R: Self = Self(0x15);
    pub const S: Self = Self(0x16);
    pub const T: Self = Self(0x17);
    pub const U: Self = Self(0x18);
    pub const V: Self = Self(0x19);
    pub const W: Self = Self(0x1A);
    pub const X: Self = Self(0x1B);
    pub const Y: Self = Self(0x1C);
    pub const Z: Self = Self(0x1D);

    pub const ONE: Self = Self(0x1E);
    pub const TWO: Self = Self(0x1F);
    pub const THREE: Self = Self(0x20);
    pub const FOUR: Self = Self(0x21);
    pub const FIVE: Self = Self(0x22);
    pub const SIX: Self = Self(0x23);
    pub const SEVEN: Self = Self(0x24);
    pub const EIGHT: Self = Self(0x25);
    pub const NINE: Self = Self(0x26);
    pub const ZERO: Self = Self(0x27);

    pub const ENTER: Self = Self(0x28);
    pub const ESCAPE: Self = Self(0x29);
    pub const BACKSPACE: Self = Self(0x2A);
    pub const TAB: Self = Self(0x2B);
    pub const SPACEBAR: Self = Self(0x2C);
    pub const MINUS: Self = Self(0x2D);
    pub const EQUALS: Self = Self(0x2E);
    pub const LEFT_BRACKET: Self = Self(0x2F);
    pub const RIGHT_BRACKET: Self = Self(0x30);
    pub const BACKSLASH: Self = Self(0x31);
    pub const POUND: Self = Self(0x32);
    pub const SEMICOLON: Self = Self(0x33);
    pub const QUOTE: Self = Self(0x34);
    pub const GRAVE_ACCENT: Self = Self(0x35);
    pub const COMMA: Self = Self(0x36);
    pub const PERIOD: Self = Self(0x37);
    pub const FORWARD_SLASH: Self = Self(0x38);
    pub const CAPS_LOCK: Self = Self(0x39);

    pub const F1: Self = Self(0x3A);
    pub const F2: Self = Self(0x3B);
    pub const F3: Self = Self(0x3C);
    pub const F4: Self = Self(0x3D);
    pub const F5: Self = Self(0x3E);
    pub const F6: Self = Self(0x3F);
    pub const F7: Self = Self(0x40);
    pub const F8: Self = Self(0x41);
    pub const F9: Self = Self(0x42);
    pub const F10: Self = Self(0x43);
    pub const F11: Self = Self(0x44);
    pub const F12: Self = Self(0x45);

    pub const PRINT_SCREEN: Self = Self(0x46);
    pub const SCROLL_LOCK: Self = Self(0x47);
    pub const PAUSE: Self = Self(0x48);
    pub const INSERT: Self = Self(0x49);
    pub const HOME: Self = Self(0x4A);
    pub const PAGE_UP: Self = Self(0x4B);
    pub const DELETE: Self = Self(0x4C);
    pub const END: Self = Self(0x4D);
    pub const PAGE_DOWN: Self = Self(0x4E);
    pub const RIGHT_ARROW: Self = Self(0x4F);
    pub const LEFT_ARROW: Self = Self(0x50);
    pub const DOWN_ARROW: Self = Self(0x51);
    pub const UP_ARROW: Self = Self(0x52);

    pub const KEYPAD_NUMLOCK: Self = Self(0x53);
    pub const KEYPAD_FORWARD_SLASH: Self = Self(0x54);
    pub const KEYPAD_ASTERISK: Self = Self(0x55);
    pub const KEYPAD_MINUS: Self = Self(0x56);
    pub const KEYPAD_PLUS: Self = Self(0x57);
    pub const KEYPAD_ENTER: Self = Self(0x58);
    pub const KEYPAD_ONE: Self = Self(0x59);
    pub const KEYPAD_TWO: Self = Self(0x5A);
    pub const KEYPAD_THREE: Self = Self(0x5B);
    pub const KEYPAD_FOUR: Self = Self(0x5C);
    pub const KEYPAD_FIVE: Self = Self(0x5D);
    pub const KEYPAD_SIX: Self = Self(0x5E);
    pub const KEYPAD_SEVEN: Self = Self(0x5F);
    pub const KEYPAD_EIGHT: Self = Self(0x60);
    pub const KEYPAD_NINE: Self = Self(0x61);
    pub const KEYPAD_ZERO: Self = Self(0x62);
    pub const KEYPAD_PERIOD: Self = Self(0x63);
    pub const KEYPAD_BACKSLASH: Self = Self(0x64);
    pub const APPLICATION: Self = Self(0x65);
    pub const POWER: Self = Self(0x66);
    pub const KEYPAD_EQUALS: Self = Self(0x67);

    pub const F13: Self = Self(0x68);
    pub const F14: Self = Self(0x69);
    pub const F15: Self = Self(0x6A);
    pub const F16: Self = Self(0x6B);
    pub const F17: Self = Self(0x6C);
    pub const F18: Self = Self(0x6D);
    pub const F19: Self = Self(0x6E);
    pub const F20: Self = Self(0x6F);
    pub const F21: Self = Self(0x70);
    pub const F22: Self = Self(0x71);
    pub const F23: Self = Self(0x72);
    pub const F24: Self = Self(0x73);

    pub const LEFT_CONTROL: Self = Self(0xE0);
    pub const LEFT_SHIFT: Self = Self(0xE1);
    pub const LEFT_ALT: Self = Self(0xE2);
    pub const LEFT_GUI: Self = Self(0xE3);
    pub const RIGHT_CONTROL: Self = Self(0xE4);
    pub const RIGHT_SHIFT: Self = Self(0xE5);
    pub const RIGHT_ALT: Self = Self(0xE6);
    pub const RIGHT_GUI: Self = Self(0xE7);

    // Left-hand synonyms.
    pub const CONTROL: Self = Self::LEFT_CONTROL;
    pub const SHIFT: Self = Self::LEFT_SHIFT;
    pub const ALT: Self = Self::LEFT_ALT;
    pub const OPTION: Self = Self::LEFT_ALT;
    pub const GUI: Self = Self::LEFT_GUI;
    pub const WINDOWS: Self = Self::LEFT_GUI;
    pub const COMMAND: Self = Self::LEFT_GUI;
    pub const RETURN: Self = Self::ENTER;
    pub const SPACE: Self = Self::SPACEBAR;

    /// Look up a key by its canonical name. The match is exact: callers are
    /// expected to upper-case first.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(key_name, _)| *key_name == name)
            .map(|(_, code)| *code)
    }

    /// Usage id as sent on the wire.
    pub fn usage(self) -> u8 {
        self.0
    }

    /// Whether this code is one of the eight modifier keys.
    pub fn is_modifier(self) -> bool {
        (0xE0..=0xE7).contains(&self.0)
    }

    /// Bit of this modifier in the report's modifier byte, if it is a modifier.
    pub fn modifier_bit(self) -> Option<u8> {
        self.is_modifier().then(|| 1 << (self.0 - 0xE0))
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NAMES.iter().find(|(_, code)| code == self) {
            Some((name, _)) => f.write_str(name),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

macro_rules! names {
    ($($name:ident),* $(,)?) => {
        &[$((stringify!($name), KeyCode::$name)),*]
    };
}

/// Every canonical name. Synonyms come after the primary name so `Display`
/// prefers the primary one.
static NAMES: &[(&str, KeyCode)] = names![
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    ONE, TWO, THREE, FOUR, FIVE, SIX, SEVEN, EIGHT, NINE, ZERO,
    ENTER, ESCAPE, BACKSPACE, TAB, SPACEBAR, MINUS, EQUALS, LEFT_BRACKET, RIGHT_BRACKET,
    BACKSLASH, POUND, SEMICOLON, QUOTE, GRAVE_ACCENT, COMMA, PERIOD, FORWARD_SLASH, CAPS_LOCK,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    PRINT_SCREEN, SCROLL_LOCK, PAUSE, INSERT, HOME, PAGE_UP, DELETE, END, PAGE_DOWN,
    RIGHT_ARROW, LEFT_ARROW, DOWN_ARROW, UP_ARROW,
    KEYPAD_NUMLOCK, KEYPAD_FORWARD_SLASH, KEYPAD_ASTERISK, KEYPAD_MINUS, KEYPAD_PLUS,
    KEYPAD_ENTER, KEYPAD_ONE, KEYPAD_TWO, KEYPAD_THREE, KEYPAD_FOUR, KEYPAD_FIVE, KEYPAD_SIX,
    KEYPAD_SEVEN, KEYPAD_EIGHT, KEYPAD_NINE, KEYPAD_ZERO, KEYPAD_PERIOD, KEYPAD_BACKSLASH,
    APPLICATION, POWER, KEYPAD_EQUALS,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
    LEFT_CONTROL, LEFT_SHIFT, LEFT_ALT, LEFT_GUI, RIGHT_CONTROL, RIGHT_SHIFT, RIGHT_ALT, RIGHT_GUI,
    CONTROL, SHIFT, ALT, OPTION, GUI, WINDOWS, COMMAND, RETURN, SPACE,
];

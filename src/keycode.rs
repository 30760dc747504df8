//! Key codes and modifier combinations.
//!
//! [`KeyCode`] follows the HID usage tables for the basic keyboard page, with
//! one extra block for text-macro triggers. [`from_ascii`]/[`to_ascii`]
//! translate between ASCII bytes and `(key, shifted)` pairs assuming an en-us
//! host layout; the macro encoder and the tests are built on them.

use core::ops::BitOr;

use bitfield_struct::bitfield;
use num_enum::FromPrimitive;
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// First key code of the text-macro trigger block.
const MACRO_CODE_START: u16 = 0x500;
/// Last key code of the text-macro trigger block.
const MACRO_CODE_END: u16 = 0x50F;

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, MaxSize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl ModifierCombination {
    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }
}

/// Key codes used in the layer table.
///
/// Values below 0xE8 are plain HID keyboard usages. `Macro0..=Macro15`
/// (0x500..) trigger the text macros defined in
/// [`keyboard_macros`](crate::keyboard_macros).
#[non_exhaustive]
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Reserved, no-key.
    #[num_enum(default)]
    No = 0x0000,
    A = 0x0004,
    B = 0x0005,
    C = 0x0006,
    D = 0x0007,
    E = 0x0008,
    F = 0x0009,
    G = 0x000A,
    H = 0x000B,
    I = 0x000C,
    J = 0x000D,
    K = 0x000E,
    L = 0x000F,
    M = 0x0010,
    N = 0x0011,
    O = 0x0012,
    P = 0x0013,
    Q = 0x0014,
    R = 0x0015,
    S = 0x0016,
    T = 0x0017,
    U = 0x0018,
    V = 0x0019,
    W = 0x001A,
    X = 0x001B,
    Y = 0x001C,
    Z = 0x001D,
    /// `1` and `!`
    Kc1 = 0x001E,
    /// `2` and `@`
    Kc2 = 0x001F,
    /// `3` and `#`
    Kc3 = 0x0020,
    /// `4` and `$`
    Kc4 = 0x0021,
    /// `5` and `%`
    Kc5 = 0x0022,
    /// `6` and `^`
    Kc6 = 0x0023,
    /// `7` and `&`
    Kc7 = 0x0024,
    /// `8` and `*`
    Kc8 = 0x0025,
    /// `9` and `(`
    Kc9 = 0x0026,
    /// `0` and `)`
    Kc0 = 0x0027,
    Enter = 0x0028,
    Escape = 0x0029,
    Backspace = 0x002A,
    Tab = 0x002B,
    Space = 0x002C,
    /// `-` and `_`
    Minus = 0x002D,
    /// `=` and `+`
    Equal = 0x002E,
    /// `[` and `{`
    LeftBracket = 0x002F,
    /// `]` and `}`
    RightBracket = 0x0030,
    /// `\` and `|`
    Backslash = 0x0031,
    /// `;` and `:`
    Semicolon = 0x0033,
    /// `'` and `"`
    Quote = 0x0034,
    /// `` ` `` and `~`
    Grave = 0x0035,
    /// `,` and `<`
    Comma = 0x0036,
    /// `.` and `>`
    Dot = 0x0037,
    /// `/` and `?`
    Slash = 0x0038,
    CapsLock = 0x0039,
    F1 = 0x003A,
    F2 = 0x003B,
    F3 = 0x003C,
    F4 = 0x003D,
    F5 = 0x003E,
    F6 = 0x003F,
    F7 = 0x0040,
    F8 = 0x0041,
    F9 = 0x0042,
    F10 = 0x0043,
    F11 = 0x0044,
    F12 = 0x0045,
    Insert = 0x0049,
    Home = 0x004A,
    PageUp = 0x004B,
    Delete = 0x004C,
    End = 0x004D,
    PageDown = 0x004E,
    Right = 0x004F,
    Left = 0x0050,
    Down = 0x0051,
    Up = 0x0052,
    LCtrl = 0x00E0,
    LShift = 0x00E1,
    LAlt = 0x00E2,
    LGui = 0x00E3,
    RCtrl = 0x00E4,
    RShift = 0x00E5,
    RAlt = 0x00E6,
    RGui = 0x00E7,
    Macro0 = 0x0500,
    Macro1 = 0x0501,
    Macro2 = 0x0502,
    Macro3 = 0x0503,
    Macro4 = 0x0504,
    Macro5 = 0x0505,
    Macro6 = 0x0506,
    Macro7 = 0x0507,
    Macro8 = 0x0508,
    Macro9 = 0x0509,
    Macro10 = 0x050A,
    Macro11 = 0x050B,
    Macro12 = 0x050C,
    Macro13 = 0x050D,
    Macro14 = 0x050E,
    Macro15 = 0x050F,
}

impl KeyCode {
    /// Whether the key code triggers a text macro.
    pub const fn is_macro(self) -> bool {
        let code = self as u16;
        MACRO_CODE_START <= code && code <= MACRO_CODE_END
    }

    /// Index into the macro space for `Macro0..=Macro15`, `None` otherwise.
    pub const fn macro_index(self) -> Option<u8> {
        if self.is_macro() {
            Some((self as u16 - MACRO_CODE_START) as u8)
        } else {
            None
        }
    }

    /// Whether the key code is a modifier key.
    pub const fn is_modifier(self) -> bool {
        let code = self as u16;
        KeyCode::LCtrl as u16 <= code && code <= KeyCode::RGui as u16
    }
}

/// Convert an ascii char to keycode,
/// bool means if the keycode should be shifted.
/// Assumes en-us keyboard mapping.
pub fn from_ascii(ascii: u8) -> (KeyCode, bool) {
    match ascii {
        b'0' => (KeyCode::Kc0, false),
        b'1' => (KeyCode::Kc1, false),
        b'2' => (KeyCode::Kc2, false),
        b'3' => (KeyCode::Kc3, false),
        b'4' => (KeyCode::Kc4, false),
        b'5' => (KeyCode::Kc5, false),
        b'6' => (KeyCode::Kc6, false),
        b'7' => (KeyCode::Kc7, false),
        b'8' => (KeyCode::Kc8, false),
        b'9' => (KeyCode::Kc9, false),
        b'a'..=b'z' => {
            let code = KeyCode::A as u16 + (ascii - b'a') as u16;
            (KeyCode::from_primitive(code), false)
        }
        b'A'..=b'Z' => {
            let code = KeyCode::A as u16 + (ascii - b'A') as u16;
            (KeyCode::from_primitive(code), true)
        }
        b'!' => (KeyCode::Kc1, true),
        b'@' => (KeyCode::Kc2, true),
        b'#' => (KeyCode::Kc3, true),
        b'$' => (KeyCode::Kc4, true),
        b'%' => (KeyCode::Kc5, true),
        b'^' => (KeyCode::Kc6, true),
        b'&' => (KeyCode::Kc7, true),
        b'*' => (KeyCode::Kc8, true),
        b'(' => (KeyCode::Kc9, true),
        b')' => (KeyCode::Kc0, true),
        b'-' => (KeyCode::Minus, false),
        b'_' => (KeyCode::Minus, true),
        b'=' => (KeyCode::Equal, false),
        b'+' => (KeyCode::Equal, true),
        b'[' => (KeyCode::LeftBracket, false),
        b']' => (KeyCode::RightBracket, false),
        b'{' => (KeyCode::LeftBracket, true),
        b'}' => (KeyCode::RightBracket, true),
        b';' => (KeyCode::Semicolon, false),
        b':' => (KeyCode::Semicolon, true),
        b'\'' => (KeyCode::Quote, false),
        b'"' => (KeyCode::Quote, true),
        b'`' => (KeyCode::Grave, false),
        b'~' => (KeyCode::Grave, true),
        b'\\' => (KeyCode::Backslash, false),
        b'|' => (KeyCode::Backslash, true),
        b',' => (KeyCode::Comma, false),
        b'<' => (KeyCode::Comma, true),
        b'.' => (KeyCode::Dot, false),
        b'>' => (KeyCode::Dot, true),
        b'/' => (KeyCode::Slash, false),
        b'?' => (KeyCode::Slash, true),
        b' ' => (KeyCode::Space, false),
        b'\n' => (KeyCode::Enter, false),
        b'\t' => (KeyCode::Tab, false),
        b'\x08' => (KeyCode::Backspace, false),
        b'\x1B' => (KeyCode::Escape, false),
        b'\x7F' => (KeyCode::Delete, false),
        _ => (KeyCode::No, false),
    }
}

/// Convert a keycode back to its ascii char.
/// Assumes en-us keyboard mapping.
pub fn to_ascii(keycode: KeyCode, shifted: bool) -> u8 {
    match (keycode, shifted) {
        (KeyCode::Kc0, false) => b'0',
        (KeyCode::Kc1, false) => b'1',
        (KeyCode::Kc2, false) => b'2',
        (KeyCode::Kc3, false) => b'3',
        (KeyCode::Kc4, false) => b'4',
        (KeyCode::Kc5, false) => b'5',
        (KeyCode::Kc6, false) => b'6',
        (KeyCode::Kc7, false) => b'7',
        (KeyCode::Kc8, false) => b'8',
        (KeyCode::Kc9, false) => b'9',
        (kc, false) if KeyCode::A <= kc && kc <= KeyCode::Z => b'a' + (kc as u16 - KeyCode::A as u16) as u8,
        (kc, true) if KeyCode::A <= kc && kc <= KeyCode::Z => b'A' + (kc as u16 - KeyCode::A as u16) as u8,
        (KeyCode::Kc1, true) => b'!',
        (KeyCode::Kc2, true) => b'@',
        (KeyCode::Kc3, true) => b'#',
        (KeyCode::Kc4, true) => b'$',
        (KeyCode::Kc5, true) => b'%',
        (KeyCode::Kc6, true) => b'^',
        (KeyCode::Kc7, true) => b'&',
        (KeyCode::Kc8, true) => b'*',
        (KeyCode::Kc9, true) => b'(',
        (KeyCode::Kc0, true) => b')',
        (KeyCode::Minus, false) => b'-',
        (KeyCode::Minus, true) => b'_',
        (KeyCode::Equal, false) => b'=',
        (KeyCode::Equal, true) => b'+',
        (KeyCode::LeftBracket, false) => b'[',
        (KeyCode::RightBracket, false) => b']',
        (KeyCode::LeftBracket, true) => b'{',
        (KeyCode::RightBracket, true) => b'}',
        (KeyCode::Semicolon, false) => b';',
        (KeyCode::Semicolon, true) => b':',
        (KeyCode::Quote, false) => b'\'',
        (KeyCode::Quote, true) => b'"',
        (KeyCode::Grave, false) => b'`',
        (KeyCode::Grave, true) => b'~',
        (KeyCode::Backslash, false) => b'\\',
        (KeyCode::Backslash, true) => b'|',
        (KeyCode::Comma, false) => b',',
        (KeyCode::Comma, true) => b'<',
        (KeyCode::Dot, false) => b'.',
        (KeyCode::Dot, true) => b'>',
        (KeyCode::Slash, false) => b'/',
        (KeyCode::Slash, true) => b'?',
        (KeyCode::Space, false) => b' ',
        (KeyCode::Enter, false) => b'\n',
        (KeyCode::Tab, false) => b'\t',
        (KeyCode::Backspace, false) => b'\x08',
        (KeyCode::Escape, false) => b'\x1B',
        (KeyCode::Delete, false) => b'\x7F',
        // not supported keycodes
        (_, _) => b'X',
    }
}

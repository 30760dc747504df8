//! The Planck keymap: 4 layers over a 4×12 ortholinear matrix.
//!
//! Every layer shares the same matrix shape; unused positions hold the
//! explicit `No` sentinel.

use crate::action::KeyAction;
use crate::{a, df, k, layer, mc, mo, shifted, tg};

pub const COL: usize = 12;
pub const ROW: usize = 4;
pub const NUM_LAYER: usize = 4;

/// Layer ordinals, for readability.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Plain qwerty with momentary layer keys on the edges
    Qwerty = 0,
    /// Digits and math symbols
    Number = 1,
    /// Shifted symbol row plus comparison/namespace macros
    Symbol = 2,
    /// Brackets, quotes and the pair/closure macros
    Bracket = 3,
}

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        // Qwerty
        layer!([
            [k!(Tab),    k!(Q),      k!(W),   k!(E),   k!(R),      k!(T),    k!(Y),    k!(U),     k!(I),     k!(O),   k!(P),         k!(Backspace)],
            [mo!(1),     k!(A),      k!(S),   k!(D),   k!(F),      k!(G),    k!(H),    k!(J),     k!(K),     k!(L),   k!(Semicolon), mo!(1)],
            [k!(LShift), k!(Z),      k!(X),   k!(C),   k!(V),      k!(B),    k!(N),    k!(M),     k!(Comma), k!(Dot), k!(Slash),     k!(RShift)],
            [k!(LCtrl),  k!(LAlt),   mo!(2),  mo!(3),  k!(Escape), k!(Space),k!(Space),k!(Enter), tg!(3),    a!(No),  k!(LGui),      df!(0)]
        ]),
        // Number and math symbols
        layer!([
            [k!(Tab),    k!(Kc1),      k!(Kc2),  k!(Kc3),      k!(Kc4),      k!(Kc5),        k!(Kc6),      k!(Kc7),      k!(Kc8),   k!(Kc9), k!(Kc0),       k!(Backspace)],
            [mo!(1),     a!(No),       a!(No),   a!(No),       shifted!(Kc1),a!(No),         a!(No),       a!(No),       a!(No),    a!(No),  k!(Semicolon), mo!(1)],
            [a!(No),     shifted!(Equal), k!(Minus), shifted!(Kc8), k!(Equal), shifted!(Comma), shifted!(Dot), shifted!(Kc5), k!(Comma), k!(Dot), k!(Slash), a!(No)],
            [k!(LCtrl),  k!(LAlt),     a!(Transparent), a!(Transparent), k!(Escape), k!(Space), k!(Space),  k!(Enter),    a!(Transparent), a!(No), k!(LGui),   a!(No)]
        ]),
        // Symbols
        layer!([
            [shifted!(Grave), shifted!(Kc1),   shifted!(Kc2),   shifted!(Kc3),       shifted!(Kc4),   shifted!(Kc5), shifted!(Kc6), shifted!(Kc7), shifted!(Kc8), shifted!(Kc9), shifted!(Kc0),   k!(Backspace)],
            [a!(No),          shifted!(Comma), shifted!(Dot),   shifted!(Semicolon), shifted!(Slash), a!(No),        a!(No),        a!(No),        a!(No),        k!(Minus),     shifted!(Equal), a!(No)],
            [a!(No),          mc!(AnglePair),  mc!(AnglePair),  mc!(NamespaceSep),   a!(No),          a!(No),        a!(No),        a!(No),        k!(Comma),     k!(Dot),       k!(Slash),       a!(No)],
            [k!(LCtrl),       k!(LAlt),        mo!(2),          a!(Transparent),     k!(Escape),      k!(Space),     k!(Space),     k!(Enter),     a!(Transparent), a!(No),      k!(LGui),        a!(No)]
        ]),
        // Brackets, quotes and pair macros
        layer!([
            [k!(Tab),   shifted!(Kc9),  shifted!(Kc0),  shifted!(LeftBracket), shifted!(RightBracket), k!(LeftBracket), k!(RightBracket), shifted!(Quote),      k!(Quote),            k!(Grave),    shifted!(Backslash), k!(Backspace)],
            [a!(No),    mc!(ParenPair), mc!(ParenPair), mc!(CurlyPair),        mc!(CurlyPair),         mc!(SquarePair), mc!(SquarePair),  mc!(DoubleQuotePair), mc!(SingleQuotePair), mc!(TickPair), k!(Backslash),      a!(No)],
            [a!(No),    mc!(AnglePair), mc!(AnglePair), mc!(NamespaceSep),     a!(No),                 a!(No),          a!(No),           mc!(ForLoop),         mc!(SectionRule),     a!(No),       k!(Slash),           a!(No)],
            [k!(LCtrl), k!(LAlt),       mo!(2),         a!(Transparent),       k!(Escape),             k!(Space),       k!(Space),        k!(Enter),            a!(Transparent),      a!(No),       k!(LGui),            a!(No)]
        ]),
    ]
}

//! Text-expansion macros.
//!
//! Each [`TextMacro`] is an ordered pair: a literal text to type, plus an
//! optional follow-up navigation key (move back between a just-typed pair of
//! brackets, or drop to a new line after a section rule). The pairs are
//! serialized once into a flat byte space in the Vial-compatible format and
//! replayed from there by the dispatcher.

use num_enum::FromPrimitive;

use crate::keycode::{KeyCode, from_ascii};

/// Default macro space size,
/// the sum of all macro elements + number of macro elements.
pub const MACRO_SPACE_SIZE: usize = 256;

/// The canned for-loop skeleton.
const FOR_LOOP: &str = "for(unsigned int i = 0 ; i < size ; i++){}";

/// An 80-column rule of `/` for separating function definitions.
const SECTION_RULE: &str =
    "////////////////////////////////////////////////////////////////////////////////";

/// What one text macro emits: the literal text and an optional single
/// follow-up navigation key sent after it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroAction {
    pub text: &'static str,
    pub follow_up: Option<KeyCode>,
}

/// The named text macros, in macro-space order.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextMacro {
    /// `()`, cursor ends up between the parentheses
    ParenPair = 0,
    /// `{}`
    CurlyPair = 1,
    /// `[]`
    SquarePair = 2,
    /// `<>`
    AnglePair = 3,
    /// `""`
    DoubleQuotePair = 4,
    /// `''`
    SingleQuotePair = 5,
    /// `` `' ``
    TickPair = 6,
    /// `::`, no cursor movement
    NamespaceSep = 7,
    /// A for-loop skeleton, cursor ends up inside the body
    ForLoop = 8,
    /// An 80-column `/` rule followed by a new line
    SectionRule = 9,
}

impl TextMacro {
    pub const ALL: [TextMacro; 10] = [
        TextMacro::ParenPair,
        TextMacro::CurlyPair,
        TextMacro::SquarePair,
        TextMacro::AnglePair,
        TextMacro::DoubleQuotePair,
        TextMacro::SingleQuotePair,
        TextMacro::TickPair,
        TextMacro::NamespaceSep,
        TextMacro::ForLoop,
        TextMacro::SectionRule,
    ];

    /// The key code that triggers this macro from the layer table.
    pub const fn keycode(self) -> KeyCode {
        match self {
            TextMacro::ParenPair => KeyCode::Macro0,
            TextMacro::CurlyPair => KeyCode::Macro1,
            TextMacro::SquarePair => KeyCode::Macro2,
            TextMacro::AnglePair => KeyCode::Macro3,
            TextMacro::DoubleQuotePair => KeyCode::Macro4,
            TextMacro::SingleQuotePair => KeyCode::Macro5,
            TextMacro::TickPair => KeyCode::Macro6,
            TextMacro::NamespaceSep => KeyCode::Macro7,
            TextMacro::ForLoop => KeyCode::Macro8,
            TextMacro::SectionRule => KeyCode::Macro9,
        }
    }

    /// The text and follow-up key this macro emits.
    pub const fn action(self) -> MacroAction {
        match self {
            TextMacro::ParenPair => MacroAction { text: "()", follow_up: Some(KeyCode::Left) },
            TextMacro::CurlyPair => MacroAction { text: "{}", follow_up: Some(KeyCode::Left) },
            TextMacro::SquarePair => MacroAction { text: "[]", follow_up: Some(KeyCode::Left) },
            TextMacro::AnglePair => MacroAction { text: "<>", follow_up: Some(KeyCode::Left) },
            TextMacro::DoubleQuotePair => {
                MacroAction { text: "\"\"", follow_up: Some(KeyCode::Left) }
            }
            TextMacro::SingleQuotePair => MacroAction { text: "''", follow_up: Some(KeyCode::Left) },
            TextMacro::TickPair => MacroAction { text: "`'", follow_up: Some(KeyCode::Left) },
            TextMacro::NamespaceSep => MacroAction { text: "::", follow_up: None },
            TextMacro::ForLoop => MacroAction { text: FOR_LOOP, follow_up: Some(KeyCode::Left) },
            TextMacro::SectionRule => {
                MacroAction { text: SECTION_RULE, follow_up: Some(KeyCode::Enter) }
            }
        }
    }
}

/// One operation of a serialized macro sequence.
///
/// Encoded with one or three bytes:
/// - 0x00 marks the end of a macro sequence, added and stripped by
///   [`define_macro_sequences`]
/// - 0x01 0x01 + 1 byte keycode taps a single key
/// - any other byte is a plain ascii character
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroOperation {
    End,
    Tap(KeyCode),
    Text(KeyCode, bool), // bool = shifted
}

impl MacroOperation {
    /// Get the next macro operation starting from given index and offset
    /// (= position in the sequence).
    /// Return current macro operation and the next operation's offset.
    pub(crate) fn get_next_macro_operation(
        macro_sequences: &[u8],
        macro_start_idx: usize,
        offset: usize,
    ) -> (MacroOperation, usize) {
        let idx = macro_start_idx + offset;
        if idx >= macro_sequences.len() - 1 {
            return (MacroOperation::End, offset);
        }
        match (macro_sequences[idx], macro_sequences[idx + 1]) {
            (0, _) => (MacroOperation::End, offset),
            (1, 1) => {
                // SS_QMK_PREFIX + SS_TAP_CODE
                if idx + 2 < macro_sequences.len() {
                    let keycode = KeyCode::from_primitive(macro_sequences[idx + 2] as u16);
                    (MacroOperation::Tap(keycode), offset + 3)
                } else {
                    (MacroOperation::End, offset + 3)
                }
            }
            _ => {
                // Current byte is the ascii code, convert it to keyboard keycode(with caps state)
                let (keycode, is_caps) = from_ascii(macro_sequences[idx]);
                (MacroOperation::Text(keycode, is_caps), offset + 1)
            }
        }
    }

    /// Finds the start of a macro sequence by its index.
    pub(crate) fn get_macro_sequence_start(macro_sequences: &[u8], macro_idx: u8) -> Option<usize> {
        let mut idx = 0;
        // Find idx until the macro start of given index
        let mut remaining = macro_idx;
        loop {
            if remaining == 0 || idx >= macro_sequences.len() {
                break;
            }
            if macro_sequences[idx] == 0 {
                remaining -= 1;
            }
            idx += 1;
        }

        if idx == macro_sequences.len() { None } else { Some(idx) }
    }
}

/// Serializes macro sequences.
/// Macros are filled up with 0 if shorter than MACRO_SPACE_SIZE.
/// Panics if the resulting binary macro sequence is longer than MACRO_SPACE_SIZE.
pub fn define_macro_sequences(
    macro_sequences: &[heapless::Vec<MacroOperation, MACRO_SPACE_SIZE>],
) -> [u8; MACRO_SPACE_SIZE] {
    let mut macro_sequences_linear = fold_to_binary(macro_sequences);

    macro_sequences_linear
        .resize(MACRO_SPACE_SIZE, 0)
        .expect("macro space overflow");
    macro_sequences_linear
        .into_array()
        .expect("as we resized the vector, this can't happen!")
}

/// Convenience function to convert a string into a sequence of MacroOperation::Text.
/// Only u8 ascii is supported.
pub fn to_macro_sequence(text: &str) -> heapless::Vec<MacroOperation, MACRO_SPACE_SIZE> {
    text.as_bytes()
        .iter()
        .map(|character| {
            let (keycode, shifted) = from_ascii(*character);
            MacroOperation::Text(keycode, shifted)
        })
        .collect()
}

/// The macro space holding all ten coder macros, in [`TextMacro`] order.
pub fn default_macro_sequences() -> [u8; MACRO_SPACE_SIZE] {
    let mut sequences: heapless::Vec<heapless::Vec<MacroOperation, MACRO_SPACE_SIZE>, 16> =
        heapless::Vec::new();
    for text_macro in TextMacro::ALL {
        let action = text_macro.action();
        let mut sequence = to_macro_sequence(action.text);
        if let Some(follow_up) = action.follow_up {
            sequence.push(MacroOperation::Tap(follow_up)).expect("macro sequence overflow");
        }
        sequences.push(sequence).expect("more macros than macro slots");
    }
    define_macro_sequences(&sequences)
}

/// Converts macro sequences to binary form and flattens them, still at their
/// minimal length. The caller extends the result with zeros to the full space.
fn fold_to_binary(
    macro_sequences: &[heapless::Vec<MacroOperation, MACRO_SPACE_SIZE>],
) -> heapless::Vec<u8, MACRO_SPACE_SIZE> {
    const TOO_MANY_ELEMENTS_ERROR_TEXT: &str = "Too many Macro Operations! The sum of all Macro Operations of all Macro Sequences cannot be more than MACRO_SPACE_SIZE";

    macro_sequences
        .iter()
        .map(|macro_sequence| {
            let mut vec_seq = macro_sequence
                .iter()
                .filter(|macro_operation| !matches!(macro_operation, MacroOperation::End))
                .map(serialize)
                .fold(heapless::Vec::<u8, MACRO_SPACE_SIZE>::new(), |mut acc, e| {
                    acc.extend_from_slice(&e).expect(TOO_MANY_ELEMENTS_ERROR_TEXT);
                    acc
                });
            vec_seq.push(0x00).expect(TOO_MANY_ELEMENTS_ERROR_TEXT);
            vec_seq
        })
        .fold(heapless::Vec::<u8, MACRO_SPACE_SIZE>::new(), |mut acc, e| {
            acc.extend_from_slice(&e).expect(TOO_MANY_ELEMENTS_ERROR_TEXT);
            acc
        })
}

fn serialize(macro_operation: &MacroOperation) -> heapless::Vec<u8, 3> {
    match macro_operation {
        MacroOperation::End => heapless::Vec::from_slice(&[0x00]).unwrap(),
        MacroOperation::Tap(key_code) => {
            heapless::Vec::from_slice(&[0x01, 0x01, (*key_code as u16).to_be_bytes()[1]]).unwrap()
        }
        MacroOperation::Text(key_code, shifted) => {
            heapless::Vec::from_slice(&[crate::keycode::to_ascii(*key_code, *shifted)]).unwrap()
        }
    }
}

//! Tunable keymap behavior, passed in explicitly instead of living in
//! globals.

use crate::keyboard_macros::{MACRO_SPACE_SIZE, default_macro_sequences};

/// Options for configurable action behavior.
#[derive(Debug, Default)]
pub struct BehaviorConfig {
    pub keyboard_macros: KeyboardMacrosConfig,
}

#[derive(Debug)]
pub struct KeyboardMacrosConfig {
    /// Macros stored in binary format to be compatible with Vial.
    pub macro_sequences: [u8; MACRO_SPACE_SIZE],
}

impl Default for KeyboardMacrosConfig {
    fn default() -> Self {
        Self {
            macro_sequences: default_macro_sequences(),
        }
    }
}

impl KeyboardMacrosConfig {
    pub fn new(macro_sequences: [u8; MACRO_SPACE_SIZE]) -> Self {
        Self { macro_sequences }
    }

    /// A config with no macros defined.
    pub fn empty() -> Self {
        Self {
            macro_sequences: [0; MACRO_SPACE_SIZE],
        }
    }
}

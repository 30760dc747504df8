//! Keyboard actions.
//!
//! An [`Action`] is a single operation the keymap can ask for: sending a key,
//! switching a layer, or persisting the default layer. [`KeyAction`] is the
//! value stored in each cell of the layer table.

use crate::keycode::{KeyCode, ModifierCombination};

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A normal key stroke, including the text-macro trigger codes.
    Key(KeyCode),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while the key is held.
    LayerOn(u8),
    /// Toggle a layer.
    LayerToggle(u8),
    /// Set and persist the default layer.
    DefaultLayer(u8),
}

/// A KeyAction is the action at a keyboard position, stored in the keymap.
///
/// Unused positions hold the explicit [`KeyAction::No`] sentinel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the internal `Action`.
    /// Returns `Action::No` for the `No` and `Transparent` sentinels.
    pub fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) => a,
            _ => Action::No,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }
}

#![cfg_attr(not(test), no_std)]

//! A programmer's keymap layer for the Planck keyboard.
//!
//! Two pieces: an immutable layer table (4 layers over the 4×12 matrix,
//! declared in [`layout`]) and an event handler ([`keyboard`]) that consumes
//! layer-switch keys and a handful of text-expansion macros: bracket pairs
//! with the cursor stepped back inside, the `::` namespace separator, a
//! canned for-loop, an 80-column section rule. Everything below this layer
//! (matrix scanning, HID transport, raw flash, tone hardware) belongs to the
//! firmware framework and is reached through the trait seams in
//! [`keyboard`], [`eeprom`] and [`sound`].

#[macro_use]
mod fmt;

pub mod action;
pub mod config;
#[cfg(feature = "storage")]
pub mod eeprom;
pub mod event;
pub mod keyboard;
pub mod keyboard_macros;
pub mod keycode;
pub mod keymap;
pub mod layout;
pub mod layout_macro;
#[cfg(feature = "audio")]
pub mod sound;

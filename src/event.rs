use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// A raw key event reported by the matrix scanner: a position and an edge.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn press(row: u8, col: u8) -> Self {
        Self { row, col, pressed: true }
    }

    pub const fn release(row: u8, col: u8) -> Self {
        Self { row, col, pressed: false }
    }
}

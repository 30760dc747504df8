//! The layer table and its runtime activation state.
//!
//! The conception of keymap here is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
//!
//! The keymap is bound to the actual pcb matrix definition: hardware key
//! strokes are resolved with the tuple `(layer, row, col)`. The table itself
//! is declared once and never mutated; only the layer activation state
//! changes at runtime.

use crate::action::KeyAction;
use crate::config::BehaviorConfig;
use crate::event::KeyEvent;
use crate::keyboard_macros::MACRO_SPACE_SIZE;

/// Keymap represents the stack of layers over one fixed matrix shape.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer number
    default_layer: u8,
    /// Layer cache, per position: which layer resolved the press
    layer_cache: [[u8; COL]; ROW],
    /// Serialized macro sequences
    pub(crate) macro_cache: [u8; MACRO_SPACE_SIZE],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize>
    KeyMap<'a, ROW, COL, NUM_LAYER>
{
    pub fn new(
        action_map: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER],
        behavior: BehaviorConfig,
    ) -> Self {
        KeyMap {
            layers: action_map,
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
            macro_cache: behavior.keyboard_macros.macro_sequences,
        }
    }

    /// Build a keymap and restore the persisted default layer, if the eeprom
    /// has been enabled before.
    #[cfg(feature = "storage")]
    pub fn new_from_eeprom<F: embedded_storage::Storage, const EEPROM_SIZE: usize>(
        action_map: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER],
        behavior: BehaviorConfig,
        eeprom: &crate::eeprom::Eeprom<F, EEPROM_SIZE>,
    ) -> Self {
        let mut keymap = Self::new(action_map, behavior);
        if eeprom.is_enabled() {
            let layer = eeprom.get_default_layer();
            if (layer as usize) < NUM_LAYER {
                keymap.default_layer = layer;
            } else {
                warn!("Persisted default layer {} is out of range, ignoring", layer);
            }
        }
        keymap
    }

    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    /// Get the default layer number
    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Set the default layer number
    pub fn set_default_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.default_layer = layer_num;
    }

    /// Fetch the action programmed at a position of one layer.
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers[layer_num][row][col]
    }

    /// Resolve the action for a key event against the active layers, with
    /// layer cache: a release uses the layer that resolved the press.
    pub fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                // This layer is activated
                let action = layer[row][col];
                if action == KeyAction::Transparent {
                    continue;
                }

                // Found a valid action in the layer, cache it
                self.save_layer_cache(row, col, layer_idx as u8);

                return action;
            }

            if layer_idx as u8 == self.default_layer {
                // No action
                break;
            }
        }

        KeyAction::No
    }

    pub fn get_activated_layer(&self) -> u8 {
        for (layer_idx, _) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.layer_state[layer_num as usize] = true;
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.layer_state[layer_num as usize] = false;
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }

        self.layer_state[layer_num as usize] = !self.layer_state[layer_num as usize];
    }
}

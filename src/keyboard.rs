//! The per-event handler: resolves key events against the layer table,
//! consumes layer switches and text macros, and leaves everything else to
//! the framework's default key processing.

use crate::action::Action;
use crate::event::KeyEvent;
use crate::keyboard_macros::MacroOperation;
use crate::keycode::KeyCode;
use crate::keymap::KeyMap;

/// The framework's keystroke-injection primitive.
///
/// Emission is fire-and-forget: failures of the underlying transport are not
/// observable at this layer.
pub trait KeystrokeSink {
    /// Inject one keystroke. `shifted` wraps the stroke in a shift press.
    fn send_keystroke(&mut self, key: KeyCode, shifted: bool);
}

/// The keymap event handler.
pub struct Keyboard<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,
    #[cfg(feature = "storage")]
    store: Option<&'a mut dyn crate::eeprom::DefaultLayerStore>,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize>
    Keyboard<'a, ROW, COL, NUM_LAYER>
{
    pub fn new(keymap: KeyMap<'a, ROW, COL, NUM_LAYER>) -> Self {
        Self {
            keymap,
            #[cfg(feature = "storage")]
            store: None,
        }
    }

    /// Attach the persistence seam used by default-layer keys.
    #[cfg(feature = "storage")]
    pub fn with_store(mut self, store: &'a mut dyn crate::eeprom::DefaultLayerStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER> {
        &self.keymap
    }

    pub fn keymap_mut(&mut self) -> &mut KeyMap<'a, ROW, COL, NUM_LAYER> {
        &mut self.keymap
    }

    /// Handle one key event.
    ///
    /// Returns whether the event was consumed. A non-consumed event falls
    /// back to the framework's default key processing.
    pub fn on_key_event<S: KeystrokeSink>(&mut self, event: KeyEvent, sink: &mut S) -> bool {
        let action = self.keymap.get_action_with_layer_cache(event);
        match action.to_action() {
            Action::Key(key) if key.is_macro() => {
                if event.pressed {
                    if let Some(macro_idx) = key.macro_index() {
                        self.run_macro(macro_idx, sink);
                    }
                }
                true
            }
            Action::LayerOn(layer_num) => {
                if event.pressed {
                    self.keymap.activate_layer(layer_num);
                } else {
                    self.keymap.deactivate_layer(layer_num);
                }
                true
            }
            Action::LayerToggle(layer_num) => {
                if event.pressed {
                    self.keymap.toggle_layer(layer_num);
                }
                true
            }
            Action::DefaultLayer(layer_num) => {
                if event.pressed {
                    self.set_default_layer(layer_num);
                }
                true
            }
            // Plain keys, modifiers and empty cells are the framework's business
            _ => false,
        }
    }

    /// Set and persist the default layer.
    fn set_default_layer(&mut self, layer_num: u8) {
        self.keymap.set_default_layer(layer_num);
        #[cfg(feature = "storage")]
        if let Some(store) = self.store.as_mut() {
            store.store_default_layer(self.keymap.get_default_layer());
        }
    }

    /// Replay one serialized macro sequence into the sink.
    fn run_macro<S: KeystrokeSink>(&mut self, macro_idx: u8, sink: &mut S) {
        let Some(macro_start_idx) =
            MacroOperation::get_macro_sequence_start(&self.keymap.macro_cache, macro_idx)
        else {
            warn!("Macro {} is not defined", macro_idx);
            return;
        };

        debug!("Running macro {}", macro_idx);
        let mut offset = 0;
        loop {
            let (operation, next_offset) = MacroOperation::get_next_macro_operation(
                &self.keymap.macro_cache,
                macro_start_idx,
                offset,
            );
            match operation {
                MacroOperation::Text(keycode, shifted) => sink.send_keystroke(keycode, shifted),
                MacroOperation::Tap(keycode) => sink.send_keystroke(keycode, false),
                MacroOperation::End => break,
            }
            offset = next_offset;
        }
    }

    /// Power-up hook, invoked by the framework once after init.
    #[cfg(not(feature = "audio"))]
    pub fn power_up(&mut self) {
        info!("Keyboard up, default layer {}", self.keymap.get_default_layer());
    }

    /// Power-up hook, invoked by the framework once after init.
    #[cfg(feature = "audio")]
    pub fn power_up<P: crate::sound::TonePlayer>(&mut self, player: &mut P) {
        info!("Keyboard up, default layer {}", self.keymap.get_default_layer());
        player.play(crate::sound::STARTUP_MELODY);
    }

    /// Power-down hook, invoked by the framework before going dark.
    #[cfg(not(feature = "audio"))]
    pub fn power_down(&mut self) {
        info!("Keyboard down");
    }

    /// Power-down hook, invoked by the framework before going dark.
    #[cfg(feature = "audio")]
    pub fn power_down<P: crate::sound::TonePlayer>(&mut self, player: &mut P) {
        info!("Keyboard down");
        player.play(crate::sound::GOODBYE_MELODY);
    }
}

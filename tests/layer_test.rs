pub mod common;

use codekeys::config::BehaviorConfig;
use codekeys::event::KeyEvent;
use codekeys::keyboard::Keyboard;
use codekeys::keymap::KeyMap;
use codekeys::layout::{COL, Layer, NUM_LAYER, ROW, get_default_keymap};

use crate::common::TestSink;

#[test]
fn test_every_layer_has_the_same_shape() {
    let keymap = get_default_keymap();
    assert_eq!(keymap.len(), NUM_LAYER);
    for layer in &keymap {
        assert_eq!(layer.len(), ROW);
        for row in layer {
            assert_eq!(row.len(), COL);
        }
    }
}

#[test]
fn test_plain_keys_fall_through_to_default_processing() {
    let mut map = get_default_keymap();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));
    let mut sink = TestSink::new();

    // Q on the qwerty layer
    assert!(!keyboard.on_key_event(KeyEvent::press(0, 1), &mut sink));
    assert!(!keyboard.on_key_event(KeyEvent::release(0, 1), &mut sink));
    assert!(sink.strokes.is_empty());
}

#[test]
fn test_momentary_layer_keys() {
    let mut map = get_default_keymap();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));
    let mut sink = TestSink::new();

    // hold the symbol layer key
    assert!(keyboard.on_key_event(KeyEvent::press(3, 2), &mut sink));
    assert_eq!(keyboard.keymap().get_activated_layer(), Layer::Symbol as u8);

    // the namespace macro lives on the symbol layer
    assert!(keyboard.on_key_event(KeyEvent::press(2, 3), &mut sink));
    assert!(keyboard.on_key_event(KeyEvent::release(2, 3), &mut sink));
    assert_eq!(sink.text(false), "::");

    // releasing the layer key drops back to qwerty
    assert!(keyboard.on_key_event(KeyEvent::release(3, 2), &mut sink));
    assert_eq!(keyboard.keymap().get_activated_layer(), Layer::Qwerty as u8);
}

#[test]
fn test_bracket_layer_pair_macro() {
    let mut map = get_default_keymap();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));
    let mut sink = TestSink::new();

    keyboard.on_key_event(KeyEvent::press(3, 3), &mut sink);
    assert_eq!(keyboard.keymap().get_activated_layer(), Layer::Bracket as u8);

    keyboard.on_key_event(KeyEvent::press(1, 1), &mut sink);
    keyboard.on_key_event(KeyEvent::release(1, 1), &mut sink);
    assert_eq!(sink.text(true), "()");

    keyboard.on_key_event(KeyEvent::release(3, 3), &mut sink);
    assert_eq!(keyboard.keymap().get_activated_layer(), Layer::Qwerty as u8);
}

#[test]
fn test_toggle_layer_key() {
    let mut map = get_default_keymap();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));
    let mut sink = TestSink::new();

    // tap the bracket toggle
    assert!(keyboard.on_key_event(KeyEvent::press(3, 8), &mut sink));
    assert!(keyboard.on_key_event(KeyEvent::release(3, 8), &mut sink));
    assert_eq!(keyboard.keymap().get_activated_layer(), Layer::Bracket as u8);

    // tap it again: back to qwerty
    keyboard.on_key_event(KeyEvent::press(3, 8), &mut sink);
    keyboard.on_key_event(KeyEvent::release(3, 8), &mut sink);
    assert_eq!(keyboard.keymap().get_activated_layer(), Layer::Qwerty as u8);
}

#[test]
fn test_shifted_symbol_keys_are_not_consumed() {
    let mut map = get_default_keymap();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));
    let mut sink = TestSink::new();

    keyboard.on_key_event(KeyEvent::press(3, 2), &mut sink);
    // `~` on the symbol layer is a plain shifted key, owned by the framework
    assert!(!keyboard.on_key_event(KeyEvent::press(0, 0), &mut sink));
    assert!(sink.strokes.is_empty());
}

#[test]
fn test_default_layer_key_is_consumed() {
    let mut map = get_default_keymap();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));
    let mut sink = TestSink::new();

    assert!(keyboard.on_key_event(KeyEvent::press(3, 11), &mut sink));
    assert!(keyboard.on_key_event(KeyEvent::release(3, 11), &mut sink));
    assert_eq!(keyboard.keymap().get_default_layer(), Layer::Qwerty as u8);
}

#[test]
fn test_held_layers_stack_highest_wins() {
    let mut map = get_default_keymap();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));
    let mut sink = TestSink::new();

    // number layer under symbol layer: the higher one wins
    keyboard.on_key_event(KeyEvent::press(1, 0), &mut sink); // mo!(1)
    keyboard.on_key_event(KeyEvent::press(3, 2), &mut sink); // mo!(2)
    assert_eq!(keyboard.keymap().get_activated_layer(), Layer::Symbol as u8);

    keyboard.on_key_event(KeyEvent::release(3, 2), &mut sink);
    assert_eq!(keyboard.keymap().get_activated_layer(), Layer::Number as u8);

    keyboard.on_key_event(KeyEvent::release(1, 0), &mut sink);
    assert_eq!(keyboard.keymap().get_activated_layer(), Layer::Qwerty as u8);
}

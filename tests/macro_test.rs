pub mod common;

use codekeys::config::BehaviorConfig;
use codekeys::event::KeyEvent;
use codekeys::keyboard::Keyboard;
use codekeys::keyboard_macros::TextMacro;
use codekeys::keymap::KeyMap;
use codekeys::{a, action::KeyAction, k, mc};

use crate::common::{TestSink, assert_emission};

/// One row holding every macro key in `TextMacro` order, then a plain key
/// and an empty cell.
fn macro_pad() -> [[[KeyAction; 12]; 1]; 1] {
    [[[
        mc!(ParenPair),
        mc!(CurlyPair),
        mc!(SquarePair),
        mc!(AnglePair),
        mc!(DoubleQuotePair),
        mc!(SingleQuotePair),
        mc!(TickPair),
        mc!(NamespaceSep),
        mc!(ForLoop),
        mc!(SectionRule),
        k!(A),
        a!(No),
    ]]]
}

#[test]
fn test_each_macro_emits_its_text_then_navigation() {
    let mut map = macro_pad();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));

    for (col, text_macro) in TextMacro::ALL.into_iter().enumerate() {
        let mut sink = TestSink::new();
        assert!(keyboard.on_key_event(KeyEvent::press(0, col as u8), &mut sink));
        assert!(keyboard.on_key_event(KeyEvent::release(0, col as u8), &mut sink));
        assert_emission(&sink, &text_macro.action());
    }
}

#[test]
fn test_paren_pair_steps_back_between_the_parens() {
    let mut map = macro_pad();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));

    let mut sink = TestSink::new();
    keyboard.on_key_event(KeyEvent::press(0, 0), &mut sink);
    assert_eq!(sink.text(true), "()");
    assert_eq!(
        sink.strokes.last(),
        Some(&(codekeys::keycode::KeyCode::Left, false))
    );
}

#[test]
fn test_namespace_separator_has_no_navigation() {
    let mut map = macro_pad();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));

    let mut sink = TestSink::new();
    keyboard.on_key_event(KeyEvent::press(0, 7), &mut sink);
    assert_eq!(sink.strokes.len(), 2);
    assert_eq!(sink.text(false), "::");
}

#[test]
fn test_section_rule_is_80_columns_then_new_line() {
    let mut map = macro_pad();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));

    let mut sink = TestSink::new();
    keyboard.on_key_event(KeyEvent::press(0, 9), &mut sink);
    assert_eq!(sink.text(true), "/".repeat(80));
    assert_eq!(
        sink.strokes.last(),
        Some(&(codekeys::keycode::KeyCode::Enter, false))
    );
}

#[test]
fn test_macro_release_is_consumed_silently() {
    let mut map = macro_pad();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));

    let mut sink = TestSink::new();
    keyboard.on_key_event(KeyEvent::press(0, 0), &mut sink);
    let after_press = sink.strokes.len();
    assert!(keyboard.on_key_event(KeyEvent::release(0, 0), &mut sink));
    assert_eq!(sink.strokes.len(), after_press);
}

#[test]
fn test_two_invocations_emit_two_identical_sequences() {
    let mut map = macro_pad();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));

    let mut sink = TestSink::new();
    keyboard.on_key_event(KeyEvent::press(0, 2), &mut sink);
    keyboard.on_key_event(KeyEvent::release(0, 2), &mut sink);
    let first = sink.strokes.clone();

    keyboard.on_key_event(KeyEvent::press(0, 2), &mut sink);
    keyboard.on_key_event(KeyEvent::release(0, 2), &mut sink);
    assert_eq!(sink.strokes.len(), first.len() * 2);
    assert_eq!(&sink.strokes[..first.len()], &first[..]);
    assert_eq!(&sink.strokes[first.len()..], &first[..]);
}

#[test]
fn test_non_macro_keys_are_not_consumed() {
    let mut map = macro_pad();
    let mut keyboard = Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));

    let mut sink = TestSink::new();
    // plain key: the framework's default processing applies
    assert!(!keyboard.on_key_event(KeyEvent::press(0, 10), &mut sink));
    assert!(!keyboard.on_key_event(KeyEvent::release(0, 10), &mut sink));
    // empty cell
    assert!(!keyboard.on_key_event(KeyEvent::press(0, 11), &mut sink));
    assert!(sink.strokes.is_empty());
}

#[test]
fn test_undefined_macro_emits_nothing() {
    // a macro key beyond the ten defined sequences
    let mut map = [[[KeyAction::Single(codekeys::action::Action::Key(
        codekeys::keycode::KeyCode::Macro15,
    ))]]];
    let mut keyboard: Keyboard<1, 1, 1> =
        Keyboard::new(KeyMap::new(&mut map, BehaviorConfig::default()));

    let mut sink = TestSink::new();
    // still consumed, but nothing is injected
    assert!(keyboard.on_key_event(KeyEvent::press(0, 0), &mut sink));
    assert!(sink.strokes.is_empty());
}

//! Declarative helpers for writing the layer table.

/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::A))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::$k))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Create a normal key with modifier action
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::KeyWithModifier(
            $crate::keycode::KeyCode::$x,
            $m,
        ))
    };
}

/// Create a shifted key
#[macro_export]
macro_rules! shifted {
    ($x: ident) => {
        $crate::wm!(
            $x,
            $crate::keycode::ModifierCombination::new_from(false, false, false, true, false)
        )
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1 while held.
#[macro_export]
macro_rules! mo {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerOn($x))
    };
}

/// Create a layer toggle action
#[macro_export]
macro_rules! tg {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerToggle($x))
    };
}

/// Create a switch default layer action, `n` is the layer number
#[macro_export]
macro_rules! df {
    ($x: literal) => {
        $crate::action::KeyAction::Single($crate::action::Action::DefaultLayer($x))
    };
}

/// Create a text macro key. For example, `mc!(ParenPair)` types `()` and
/// steps back between the parentheses.
#[macro_export]
macro_rules! mc {
    ($m: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key(
            $crate::keyboard_macros::TextMacro::$m.keycode(),
        ))
    };
}

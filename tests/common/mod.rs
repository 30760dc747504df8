#![allow(dead_code)]

use codekeys::keyboard::KeystrokeSink;
use codekeys::keyboard_macros::MacroAction;
use codekeys::keycode::{KeyCode, to_ascii};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Records every injected keystroke instead of sending it anywhere.
#[derive(Debug, Default)]
pub struct TestSink {
    pub strokes: Vec<(KeyCode, bool)>,
}

impl KeystrokeSink for TestSink {
    fn send_keystroke(&mut self, key: KeyCode, shifted: bool) {
        self.strokes.push((key, shifted));
    }
}

impl TestSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// The recorded strokes read back as text, excluding a trailing
    /// follow-up key if `follow_up` is set.
    pub fn text(&self, follow_up: bool) -> String {
        let text_strokes = if follow_up {
            &self.strokes[..self.strokes.len() - 1]
        } else {
            &self.strokes[..]
        };
        text_strokes.iter().map(|&(key, shifted)| to_ascii(key, shifted) as char).collect()
    }
}

/// Assert that the sink holds exactly one emission of the given macro action.
pub fn assert_emission(sink: &TestSink, action: &MacroAction) {
    let expected_len = action.text.len() + usize::from(action.follow_up.is_some());
    assert_eq!(sink.strokes.len(), expected_len, "unexpected stroke count: {:?}", sink.strokes);
    assert_eq!(sink.text(action.follow_up.is_some()), action.text);
    if let Some(follow_up) = action.follow_up {
        let &(last, shifted) = sink.strokes.last().unwrap();
        assert_eq!(last, follow_up);
        assert!(!shifted);
    }
}

//! Wizard-level keybindings.
//!
//! The active step body sees every key first; whatever it does not consume
//! is resolved here.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Previous,
    /// Jump to a step by zero-based position
    GoTo(usize),
}

/// Key to action map.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyBindings {
    pub fn resolve(&self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }
        self.global
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut global = HashMap::new();

        global.insert(key_code(KeyCode::Right), Action::Next);
        global.insert(key_code(KeyCode::Enter), Action::Next);
        global.insert(key('l'), Action::Next);

        global.insert(key_code(KeyCode::Left), Action::Previous);
        global.insert(key('h'), Action::Previous);

        global.insert(key('q'), Action::Quit);
        global.insert(key_code(KeyCode::Esc), Action::Quit);

        for (position, digit) in ('1'..='9').enumerate() {
            global.insert(key(digit), Action::GoTo(position));
        }

        Self { global }
    }
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

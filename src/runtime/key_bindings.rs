use crate::runtime::intent::Intent;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Maps host keys to form intents. Unbound keys go to the mounted step view.
#[derive(Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Intent>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut manager = Self::default();
        manager.install_defaults();
        manager
    }

    pub fn bind(&mut self, key: KeyBinding, intent: Intent) {
        self.bindings.insert(key, intent);
    }

    pub fn unbind(&mut self, key: &KeyBinding) {
        self.bindings.remove(key);
    }

    pub fn resolve(&self, event: KeyEvent) -> Intent {
        self.bindings
            .get(&KeyBinding::from_event(event))
            .cloned()
            .unwrap_or(Intent::InputKey(event))
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Intent::Exit);
        self.bind(KeyBinding::key(KeyCode::Enter), Intent::Primary);
        self.bind(KeyBinding::key(KeyCode::Esc), Intent::Back);
        self.bind(KeyBinding::ctrl(KeyCode::Char('b')), Intent::Back);
        self.bind(KeyBinding::ctrl(KeyCode::Char('r')), Intent::Reset);
        self.bind(KeyBinding::ctrl(KeyCode::Char('e')), Intent::RevealErrors);
        for (index, digit) in ('1'..='9').enumerate() {
            self.bind(
                KeyBinding::alt(KeyCode::Char(digit)),
                Intent::IndicatorClick(index),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyBinding, KeyBindings};
    use crate::runtime::intent::Intent;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn defaults_cover_navigation() {
        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.resolve(KeyEvent::plain(KeyCode::Enter)),
            Intent::Primary
        );
        assert_eq!(
            bindings.resolve(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL)),
            Intent::Back
        );
        assert_eq!(
            bindings.resolve(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::ALT)),
            Intent::IndicatorClick(2)
        );
    }

    #[test]
    fn unbound_keys_reach_the_view() {
        let bindings = KeyBindings::new();
        let event = KeyEvent::plain(KeyCode::Char('3'));
        assert_eq!(bindings.resolve(event), Intent::InputKey(event));
    }

    #[test]
    fn unbind_restores_passthrough() {
        let mut bindings = KeyBindings::new();
        bindings.unbind(&KeyBinding::key(KeyCode::Esc));
        let event = KeyEvent::plain(KeyCode::Esc);
        assert_eq!(bindings.resolve(event), Intent::InputKey(event));
    }
}

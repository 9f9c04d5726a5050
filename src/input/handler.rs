use std::collections::{BTreeMap, HashMap};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::AssetError;
use crate::game::{Action, Direction};

/// Data-driven key to action table.
///
/// Letter keys are matched case-insensitively. Ctrl+C always quits and cannot
/// be rebound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    table: HashMap<KeyCode, Action>,
}

impl KeyBindings {
    /// A table with no bindings at all
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Defaults plus overrides given as key name to action name
    pub fn from_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, AssetError> {
        let mut bindings = Self::default();
        for (key, action) in overrides {
            bindings.bind(parse_key(key)?, action.parse()?);
        }
        Ok(bindings)
    }

    /// Map `key` to `action`, replacing any previous mapping of that key
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.table.insert(normalize(key), action);
    }

    /// Remove the mapping for `key`, returning what it was bound to
    pub fn unbind(&mut self, key: KeyCode) -> Option<Action> {
        self.table.remove(&normalize(key))
    }

    /// Restore the default table
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Translate a key press into an action, if it is bound
    pub fn resolve(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        self.table.get(&normalize(key.code)).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();

        // Movement - arrow keys and WASD
        for (arrow, letter, direction) in [
            (KeyCode::Up, 'w', Direction::Up),
            (KeyCode::Down, 's', Direction::Down),
            (KeyCode::Left, 'a', Direction::Left),
            (KeyCode::Right, 'd', Direction::Right),
        ] {
            bindings.bind(arrow, Action::Turn(direction));
            bindings.bind(KeyCode::Char(letter), Action::Turn(direction));
        }

        // Controls
        bindings.bind(KeyCode::Char(' '), Action::Start);
        bindings.bind(KeyCode::Enter, Action::Start);
        bindings.bind(KeyCode::Char('r'), Action::Restart);
        bindings.bind(KeyCode::Char('p'), Action::Pause);
        bindings.bind(KeyCode::Char('m'), Action::ToggleSound);
        bindings.bind(KeyCode::Char('q'), Action::Quit);
        bindings.bind(KeyCode::Esc, Action::Quit);

        bindings
    }
}

fn normalize(key: KeyCode) -> KeyCode {
    match key {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Parse a key name such as `"up"`, `"space"`, `"esc"` or a single character
pub fn parse_key(name: &str) -> Result<KeyCode, AssetError> {
    let lower = name.trim().to_ascii_lowercase();
    let key = match lower.as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        _ => {
            let mut chars = lower.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(AssetError::UnknownKey(name.to_string())),
            }
        }
    };
    Ok(key)
}

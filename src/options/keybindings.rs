use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ToggleFollow` → `"KeyO"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

const DEFAULT_BINDINGS: [(KeyAction, &str); 2] = [
    (KeyAction::ToggleFollow, "KeyO"),
    (KeyAction::ToggleOrbit, "KeyC"),
];

impl Default for KeybindingOptions {
    fn default() -> Self {
        let mut opts = Self {
            bindings: HashMap::new(),
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// Actions missing from `bindings` get their default key back unless
    /// another action already claimed it, so a partial table only changes
    /// what it names.
    pub fn rebuild_reverse_map(&mut self) {
        for (action, key) in DEFAULT_BINDINGS {
            let taken = self.bindings.values().any(|bound| bound == key);
            if !taken {
                let _ =
                    self.bindings.entry(action).or_insert_with(|| key.into());
            }
        }

        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

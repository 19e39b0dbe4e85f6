//! Held-key input surface, polled once per frame.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub trait KeyState {
    /// Whether `key` is held down this frame.
    fn is_down(&self, key: char) -> bool;
}

/// Set of currently held keys, updated by player commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    keys: BTreeSet<char>,
}

impl HeldKeys {
    pub fn press(&mut self, key: char) {
        self.keys.insert(key.to_ascii_lowercase());
    }

    pub fn release(&mut self, key: char) {
        self.keys.remove(&key.to_ascii_lowercase());
    }
}

impl KeyState for HeldKeys {
    fn is_down(&self, key: char) -> bool {
        self.keys.contains(&key.to_ascii_lowercase())
    }
}

//! Level-triggered keyboard state
//!
//! The platform layer owns a `KeyTable` and flips entries on raw
//! key-down/key-up events; the match controller samples it exactly once
//! per frame. No event queue and no debouncing: a key is either held at
//! sample time or it is not.

use crate::sim::TickInput;

/// Raw key-code space covered by the table. Browser `keyCode` values
/// fit comfortably; anything outside reads as "not pressed".
pub const KEY_TABLE_SIZE: usize = 256;

/// Bindings (browser key codes)
pub const KEY_SPACE: usize = 32;
pub const KEY_ARROW_UP: usize = 38;
pub const KEY_ARROW_DOWN: usize = 40;
pub const KEY_S: usize = 83;
pub const KEY_W: usize = 87;

/// Boolean-indexed "is this key currently held" table
#[derive(Debug, Clone)]
pub struct KeyTable {
    held: [bool; KEY_TABLE_SIZE],
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTable {
    pub fn new() -> Self {
        Self {
            held: [false; KEY_TABLE_SIZE],
        }
    }

    /// Record a key-down/key-up transition. Out-of-range codes are
    /// ignored rather than rejected.
    pub fn set(&mut self, code: usize, held: bool) {
        if let Some(entry) = self.held.get_mut(code) {
            *entry = held;
        }
    }

    /// Query a key. Out-of-range codes read as not pressed.
    pub fn held(&self, code: usize) -> bool {
        self.held.get(code).copied().unwrap_or(false)
    }

    /// Drop all held state, e.g. when the window loses focus and key-up
    /// events stop arriving.
    pub fn clear(&mut self) {
        self.held = [false; KEY_TABLE_SIZE];
    }

    /// True if the given control is one this game binds
    pub fn is_bound(code: usize) -> bool {
        matches!(
            code,
            KEY_SPACE | KEY_ARROW_UP | KEY_ARROW_DOWN | KEY_S | KEY_W
        )
    }
}

/// Sample the table into this frame's commands: W/S drive the left
/// paddle, the arrow keys the right one, Space launches.
pub fn sample(keys: &KeyTable) -> TickInput {
    TickInput {
        left_up: keys.held(KEY_W),
        left_down: keys.held(KEY_S),
        right_up: keys.held(KEY_ARROW_UP),
        right_down: keys.held(KEY_ARROW_DOWN),
        launch: keys.held(KEY_SPACE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_query() {
        let mut keys = KeyTable::new();
        assert!(!keys.held(KEY_W));

        keys.set(KEY_W, true);
        assert!(keys.held(KEY_W));

        keys.set(KEY_W, false);
        assert!(!keys.held(KEY_W));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut keys = KeyTable::new();
        keys.set(50_000, true);
        assert!(!keys.held(50_000));
    }

    #[test]
    fn test_clear_drops_all_keys() {
        let mut keys = KeyTable::new();
        keys.set(KEY_SPACE, true);
        keys.set(KEY_ARROW_DOWN, true);
        keys.clear();
        assert!(!keys.held(KEY_SPACE));
        assert!(!keys.held(KEY_ARROW_DOWN));
    }

    #[test]
    fn test_sample_maps_bindings() {
        let mut keys = KeyTable::new();
        keys.set(KEY_S, true);
        keys.set(KEY_ARROW_UP, true);
        keys.set(KEY_SPACE, true);

        let input = sample(&keys);
        assert!(!input.left_up);
        assert!(input.left_down);
        assert!(input.right_up);
        assert!(!input.right_down);
        assert!(input.launch);
    }
}

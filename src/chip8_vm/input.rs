use crate::chip8_vm::config::KEY_COUNT;

/// Held state of the 16 logical keys, refreshed by the host between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    keys: [bool; KEY_COUNT],
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole latch with a fresh poll.
    pub fn refresh(&mut self, keys: [bool; KEY_COUNT]) {
        self.keys = keys;
    }

    pub fn set_key(&mut self, key: usize, is_pressed: bool) {
        if key >= KEY_COUNT {
            return;
        }

        self.keys[key] = is_pressed;
    }

    /// Keys beyond 0xF are never pressed.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys.get(key as usize).copied().unwrap_or(false)
    }

    pub fn first_pressed(&self) -> Option<u8> {
        self.keys
            .iter()
            .position(|pressed| *pressed)
            .map(|key| key as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_replaces_previous_state() {
        let mut latch = InputLatch::new();
        latch.set_key(2, true);

        let mut keys = [false; KEY_COUNT];
        keys[0xB] = true;
        latch.refresh(keys);

        assert!(!latch.is_pressed(2));
        assert!(latch.is_pressed(0xB));
        assert_eq!(latch.first_pressed(), Some(0xB));
    }

    #[test]
    fn out_of_range_keys_are_ignored() {
        let mut latch = InputLatch::new();
        latch.set_key(KEY_COUNT, true);

        assert_eq!(latch.first_pressed(), None);
        assert!(!latch.is_pressed(0x10));
    }
}

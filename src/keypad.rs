use crate::constants::KEY_COUNT;
use crate::error::Chip8Error;

/// # Keypad
/// Latches for the 16 keys of the hexadecimal keypad.
///
/// The host sets and clears them between cycles; instructions only ever read them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: u8, pressed: bool) -> Result<(), Chip8Error> {
        let latch = self
            .keys
            .get_mut(usize::from(key))
            .ok_or(Chip8Error::InvalidKey(key))?;
        *latch = pressed;
        Ok(())
    }

    /// Whether `key` is held. Only the low nibble of `key` is significant.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[usize::from(key & 0x0F)]
    }

    /// The lowest numbered key currently held, if any.
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|&pressed| pressed).map(|key| key as u8)
    }

    pub fn snapshot(&self) -> [bool; KEY_COUNT] {
        self.keys
    }
}

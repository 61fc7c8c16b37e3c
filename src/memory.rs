use crate::constants::{
    ADDRESS_MASK, FONT_START, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET,
};
use crate::error::Chip8Error;
use crate::opcode;

/// # Memory
/// 4096 bytes of addressable memory.
///
/// ```text
/// 0x000 +-----------------+
///       | interpreter     |
/// 0x050 | sprite sheet    |
/// 0x0A0 |                 |
/// 0x200 +-----------------+
///       | program         |
/// 0xFFF +-----------------+
/// ```
///
/// Addresses are 12 bits wide; anything above 0xFFF wraps back around to the start rather than
/// running off the end.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the sprite sheet in place.
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let font = usize::from(FONT_START);
        bytes[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    pub fn read(&self, address: u16) -> u8 {
        self.bytes[usize::from(address) & ADDRESS_MASK]
    }

    pub fn write(&mut self, address: u16, value: u8) {
        self.bytes[usize::from(address) & ADDRESS_MASK] = value;
    }

    /// Reads the big-endian opcode stored at `address` and `address + 1`.
    pub fn read_opcode(&self, address: u16) -> u16 {
        opcode::from_bytes(self.read(address), self.read(address.wrapping_add(1)))
    }

    /// Copies a ROM in at `PROGRAM_START`.
    ///
    /// Nothing is written if the ROM doesn't fit.
    pub fn load_program(&mut self, rom: &[u8]) -> Result<(), Chip8Error> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max_size: MAX_ROM_SIZE,
            });
        }
        let start = usize::from(PROGRAM_START);
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let program = &self.bytes[usize::from(PROGRAM_START)..];
        let used = program.iter().rposition(|&b| b != 0).map_or(0, |last| last + 1);
        f.debug_struct("Memory")
            .field("program_bytes", &used)
            .finish()
    }
}

use crate::frame_buffer::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::timers::Timers;

/// The Chip8 internal state
///
/// ## CPU
/// - 16 8-bit registers, the address register and the program counter
/// - a call stack 16 return addresses deep
/// - 2 8-bit timers (delay & sound), ticked once per cycle
///
/// ## Memory
/// - 4096 bytes of addressable memory with the sprite sheet at 0x050
/// - a 64x32 frame buffer and its redraw flag
///
/// ## Input
/// - latches for the 16 keys 0..F
///
/// ## Output
/// - the beep flag, raised while the sound timer runs and lowered by whoever plays the sound
#[derive(Debug, Clone)]
pub struct State {
    pub registers: Registers,
    pub memory: Memory,
    pub timers: Timers,
    pub frame_buffer: FrameBuffer,
    pub keypad: Keypad,
    pub beep: bool,
}

impl State {
    pub fn new() -> Self {
        State {
            registers: Registers::new(),
            memory: Memory::new(),
            timers: Timers::new(),
            frame_buffer: FrameBuffer::new(),
            keypad: Keypad::new(),
            beep: false,
        }
    }

    /// The register Vx.
    pub fn v(&self, x: usize) -> u8 {
        self.registers.v[x]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

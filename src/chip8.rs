use std::io::Read;
use std::mem;

use log::{debug, error, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::KEY_COUNT;
use crate::error::Chip8Error;
use crate::frame_buffer::FrameBuffer;
use crate::instruction::Instruction;
use crate::operations;
use crate::registers::Registers;
use crate::state::State;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - the machine `state`
///  - the random number generator used by `Cxkk`
///
/// Supplies interfaces for:
/// - resetting and loading roms
/// - pressing and releasing keys
/// - advancing the CPU one cycle at a time
/// - inspecting its frame buffer for rendering by some display
/// - picking up beeps for some speaker
///
/// Nothing here blocks or keeps time. The host decides how often to call `cycle`; the reference
/// rate is `CLOCK_SPEED`, which makes the timers count down at 60Hz.
pub struct Chip8 {
    state: State,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// A machine whose `Cxkk` results are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Chip8 {
            state: State::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Puts the machine back to power-on: zeroed memory and registers with the sprite sheet in
    /// place, an empty stack, no keys held and the PC at the start of the program.
    pub fn reset(&mut self) {
        self.state = State::new();
        debug!("reset");
    }

    /// Resets the machine and copies `rom` in at 0x200.
    ///
    /// # Arguments
    /// * `rom` the raw program; Chip-8 ROMs have no header
    pub fn load(&mut self, rom: &[u8]) -> Result<(), Chip8Error> {
        self.reset();
        if let Err(e) = self.state.memory.load_program(rom) {
            warn!("{}", e);
            return Err(e);
        }
        debug!("loaded {} byte ROM", rom.len());
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), Chip8Error> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load(&rom)
    }

    /// Advances the CPU by a single cycle
    /// - gets and decodes the opcode at the pc
    /// - executes it
    /// - ticks the timers
    ///
    /// If the opcode is unknown or the stack over/underflows the error is returned and nothing
    /// else happens; the pc stays put, so calling this again hits the same opcode.
    pub fn cycle(&mut self) -> Result<(), Chip8Error> {
        let pc = self.state.registers.pc;
        let op = self.get_op();

        let instruction = Instruction::decode(op, pc).map_err(|e| {
            error!("{}", e);
            e
        })?;
        trace!("{:03X}: {:04X} {:?}", pc, op, instruction);

        operations::execute(instruction, &mut self.state, &mut self.rng).map_err(|e| {
            error!("{} at {:03X}", e, pc);
            e
        })?;

        self.advance_timers();
        Ok(())
    }

    /// Steps the pc over the current instruction without running it.
    ///
    /// Lets a host choose to carry on past an unknown opcode rather than halt on it.
    pub fn skip_instruction(&mut self) {
        self.state.registers.advance();
    }

    /// Set the pressed status of a key
    ///
    /// # Arguments
    /// * `key` the key's index, 0x0..=0xF
    /// * `pressed` whether it's held down
    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<(), Chip8Error> {
        self.state.keypad.set(key, pressed)
    }

    pub fn keys(&self) -> [bool; KEY_COUNT] {
        self.state.keypad.snapshot()
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn get_frame(&self) -> Option<&FrameBuffer> {
        if self.state.frame_buffer.needs_redraw() {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Marks the current frame as drawn
    pub fn acknowledge_frame(&mut self) {
        self.state.frame_buffer.acknowledge();
    }

    /// Whether the sound timer ran since this was last called.
    pub fn beep_pending(&mut self) -> bool {
        mem::replace(&mut self.state.beep, false)
    }

    pub fn registers(&self) -> &Registers {
        &self.state.registers
    }

    pub fn pc(&self) -> u16 {
        self.state.registers.pc
    }

    pub fn i(&self) -> u16 {
        self.state.registers.i
    }

    /// The register Vx.
    pub fn v(&self, x: usize) -> u8 {
        self.state.v(x)
    }

    /// Saved return addresses, oldest first.
    pub fn stack(&self) -> &[u16] {
        self.state.registers.stack.as_slice()
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.timers.delay
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.timers.sound
    }

    pub fn memory(&self) -> &[u8] {
        self.state.memory.as_slice()
    }

    /// Ticks both timers; a running sound timer raises the beep flag.
    fn advance_timers(&mut self) {
        if self.state.timers.tick() {
            self.state.beep = true;
        }
    }

    /// Gets the opcode currently pointed at by the pc.
    fn get_op(&self) -> u16 {
        self.state.memory.read_opcode(self.state.registers.pc)
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn chip8_with(rom: &[u8]) -> Chip8 {
        let mut chip8 = Chip8::with_seed(0);
        chip8.load(rom).unwrap();
        chip8
    }

    #[test]
    fn test_chip8_gets_op() {
        let chip8 = chip8_with(&[0xAA, 0xBB]);
        assert_eq!(chip8.get_op(), 0xAABB);
    }

    #[test]
    fn test_cycle_advances_pc() {
        let mut chip8 = chip8_with(&[0x00, 0xE0]);
        chip8.cycle().unwrap();
        assert_eq!(chip8.pc(), 0x202);
    }

    #[test]
    fn test_unknown_opcode_halts_in_place() {
        let mut chip8 = chip8_with(&[0xF0, 0xFF]);
        chip8.state.timers.delay = 3;
        for _ in 0..3 {
            assert!(matches!(
                chip8.cycle(),
                Err(Chip8Error::UnknownOpcode {
                    opcode: 0xF0FF,
                    address: 0x200
                })
            ));
        }
        assert_eq!(chip8.pc(), 0x200);
        assert_eq!(chip8.delay_timer(), 3);
    }

    #[test]
    fn test_skip_instruction_moves_past_unknown_opcode() {
        let mut chip8 = chip8_with(&[0xF0, 0xFF, 0x60, 0x01]);
        assert!(chip8.cycle().is_err());
        chip8.skip_instruction();
        chip8.cycle().unwrap();
        assert_eq!(chip8.v(0), 0x01);
        assert_eq!(chip8.pc(), 0x204);
    }

    #[test]
    fn test_stack_fault_leaves_timers_alone() {
        let mut chip8 = chip8_with(&[0x00, 0xEE]);
        chip8.state.timers.sound = 2;
        assert!(matches!(chip8.cycle(), Err(Chip8Error::StackUnderflow)));
        assert_eq!(chip8.sound_timer(), 2);
        assert!(!chip8.beep_pending());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut chip8 = chip8_with(&[0x60, 0x0A]);
        chip8.cycle().unwrap();
        chip8.set_key(0x4, true).unwrap();
        chip8.reset();
        let memory = chip8.memory().to_vec();
        let registers = chip8.registers().clone();
        chip8.reset();
        assert_eq!(chip8.memory(), &memory[..]);
        assert_eq!(chip8.registers(), &registers);
        assert_eq!(chip8.pc(), 0x200);
        assert_eq!(chip8.v(0), 0);
        assert_eq!(chip8.keys(), [false; 16]);
        assert_eq!(chip8.memory()[0x200], 0);
        assert_eq!(chip8.memory()[0x50], 0xF0);
    }

    #[test]
    fn test_load_resets_first() {
        let mut chip8 = chip8_with(&[0x60, 0x0A, 0x61, 0x0B]);
        chip8.cycle().unwrap();
        chip8.load(&[0x62, 0x0C]).unwrap();
        assert_eq!(chip8.v(0), 0);
        assert_eq!(chip8.pc(), 0x200);
        assert_eq!(chip8.memory()[0x202], 0);
    }

    #[test]
    fn test_load_rejects_oversized_rom() {
        let mut chip8 = Chip8::new();
        let rom = vec![0x12; 0xE01];
        assert!(matches!(
            chip8.load(&rom),
            Err(Chip8Error::RomTooLarge { size: 0xE01, max_size: 0xE00 })
        ));
        assert_eq!(chip8.memory()[0x200], 0);
    }

    #[test]
    fn test_load_rom_from_reader() {
        let mut chip8 = Chip8::new();
        let mut reader: &[u8] = &[0xA2, 0x50];
        chip8.load_rom(&mut reader).unwrap();
        assert_eq!(chip8.memory()[0x200..0x202], [0xA2, 0x50]);
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_load_rom_propagates_read_errors() {
        let mut chip8 = Chip8::new();
        match chip8.load_rom(&mut BrokenReader) {
            Err(Chip8Error::LoadFailure(e)) => assert_eq!(e.to_string(), "disk on fire"),
            other => panic!("expected LoadFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_set_key_rejects_out_of_range() {
        let mut chip8 = Chip8::new();
        assert!(matches!(
            chip8.set_key(16, true),
            Err(Chip8Error::InvalidKey(16))
        ));
        chip8.set_key(15, true).unwrap();
        assert!(chip8.keys()[15]);
    }

    #[test]
    fn test_frame_is_pending_until_acknowledged() {
        let mut chip8 = chip8_with(&[0x00, 0xE0]);
        assert!(chip8.get_frame().is_some());
        chip8.acknowledge_frame();
        assert!(chip8.get_frame().is_none());
        chip8.cycle().unwrap();
        assert!(chip8.get_frame().is_some());
    }

    #[test]
    fn test_beep_pending_clears() {
        // V0 = 2; ST = V0
        let mut chip8 = chip8_with(&[0x60, 0x02, 0xF0, 0x18, 0x00, 0x00]);
        chip8.cycle().unwrap();
        assert!(!chip8.beep_pending());
        chip8.cycle().unwrap();
        // the timer ticks right after it's set
        assert!(chip8.beep_pending());
        assert!(!chip8.beep_pending());
        assert_eq!(chip8.sound_timer(), 1);
    }

    #[test]
    fn test_seeded_machines_agree() {
        let rom = [0xC0, 0xFF, 0xC1, 0xFF, 0xC2, 0xFF];
        let mut a = Chip8::with_seed(42);
        let mut b = Chip8::with_seed(42);
        a.load(&rom).unwrap();
        b.load(&rom).unwrap();
        for _ in 0..3 {
            a.cycle().unwrap();
            b.cycle().unwrap();
        }
        assert_eq!(a.registers().v, b.registers().v);
    }
}

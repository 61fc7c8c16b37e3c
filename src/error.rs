use std::io;

use thiserror::Error;

/// Everything that can go wrong while loading or running a program.
///
/// None of these leave the machine half-updated: a failed `cycle` has not
/// moved the program counter, touched a register or ticked a timer.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("unknown opcode {opcode:#06X} at {address:#05X}")]
    UnknownOpcode { opcode: u16, address: u16 },

    #[error("stack overflow: subroutine call with {depth} return addresses already saved")]
    StackOverflow { depth: usize },

    #[error("stack underflow: return from subroutine with an empty call stack")]
    StackUnderflow,

    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("unable to read ROM")]
    LoadFailure(#[from] io::Error),

    #[error("key {0:#X} is outside the 16 key keypad")]
    InvalidKey(u8),
}

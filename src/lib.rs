pub use chip8::Chip8;
pub use constants::{CLOCK_SPEED, CYCLES_PER_FRAME, DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAME_RATE};
pub use error::Chip8Error;
pub use frame_buffer::{FrameBuffer, Row};
pub use instruction::Instruction;
pub use registers::{Registers, Stack};

mod chip8;
pub mod constants;
mod error;
mod frame_buffer;
mod instruction;
mod keypad;
mod memory;
mod opcode;
mod operations;
mod registers;
mod state;
mod timers;

/// Bytes of addressable memory.
pub const MEMORY_SIZE: usize = 4096;

/// Masks any 16-bit address down to the 4 KiB address space.
pub const ADDRESS_MASK: usize = MEMORY_SIZE - 1;

/// ROMs are loaded here and execution starts here.
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Where the built-in hex font lives in interpreter memory.
pub const FONT_START: u16 = 0x050;

/// Every font glyph is 5 rows tall.
pub const FONT_GLYPH_HEIGHT: u16 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Sprites are always a single byte wide.
pub const SPRITE_WIDTH: usize = 8;

/// Maximum number of nested subroutine calls.
pub const STACK_DEPTH: usize = 16;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// Reference clock: cycles per second. The timers are defined per cycle, so
/// 600Hz gives the conventional 60Hz timer rate at 10 cycles per frame.
pub const CLOCK_SPEED: u32 = 600;

/// Host frames per second.
pub const FRAME_RATE: u32 = 60;

pub const CYCLES_PER_FRAME: u32 = CLOCK_SPEED / FRAME_RATE;

/// # Sprite sheet
/// The hexadecimal digits 0..F, each drawn as a 4x5 sprite.
///
/// ```text
/// 0xF0 ****
/// 0x90 *  *
/// 0x90 *  *
/// 0x90 *  *
/// 0xF0 ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

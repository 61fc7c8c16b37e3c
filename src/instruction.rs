use crate::error::Chip8Error;
use crate::opcode::Opcode;

/// # Instructions
/// A decoded Chip-8 opcode.
///
/// Operands are pulled out of the opcode once, when it's decoded, so each variant only carries the
/// fields its operation actually uses:
/// - `x`, `y` register indices (0..16)
/// - `kk` an 8-bit immediate
/// - `addr` a 12-bit address
/// - `n` a sprite height (0..16)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `0nnn` call a machine code routine; ignored
    Sys { addr: u16 },
    /// `00E0` clear the display
    Clr,
    /// `00EE` PC = STACK.pop()
    Rts,
    /// `1nnn` PC = addr
    Jump { addr: u16 },
    /// `2nnn` STACK.push(PC + 2); PC = addr
    Call { addr: u16 },
    /// `3xkk` skip if Vx == kk
    Ske { x: usize, kk: u8 },
    /// `4xkk` skip if Vx != kk
    Skne { x: usize, kk: u8 },
    /// `5xy0` skip if Vx == Vy
    Skre { x: usize, y: usize },
    /// `6xkk` Vx = kk
    Load { x: usize, kk: u8 },
    /// `7xkk` Vx += kk
    Add { x: usize, kk: u8 },
    /// `8xy0` Vx = Vy
    Mv { x: usize, y: usize },
    /// `8xy1` Vx |= Vy
    Or { x: usize, y: usize },
    /// `8xy2` Vx &= Vy
    And { x: usize, y: usize },
    /// `8xy3` Vx ^= Vy
    Xor { x: usize, y: usize },
    /// `8xy4` Vx += Vy; VF = carry
    Addr { x: usize, y: usize },
    /// `8xy5` Vx -= Vy; VF = !borrow
    Sub { x: usize, y: usize },
    /// `8xy6` Vx >>= 1; VF = lsb
    Shr { x: usize },
    /// `8xy7` Vx = Vy - Vx; VF = !borrow
    Subn { x: usize, y: usize },
    /// `8xyE` Vx <<= 1; VF = msb
    Shl { x: usize },
    /// `9xy0` skip if Vx != Vy
    Skrne { x: usize, y: usize },
    /// `Annn` I = addr
    Loadi { addr: u16 },
    /// `Bnnn` PC = V0 + addr
    Jumpi { addr: u16 },
    /// `Cxkk` Vx = rand() & kk
    Rand { x: usize, kk: u8 },
    /// `Dxyn` draw_sprite(x=Vx y=Vy height=n)
    Draw { x: usize, y: usize, n: u8 },
    /// `Ex9E` skip if key Vx is pressed
    Skpr { x: usize },
    /// `ExA1` skip if key Vx is not pressed
    Skup { x: usize },
    /// `Fx07` Vx = DT
    Moved { x: usize },
    /// `Fx0A` wait for a keypress and put it in Vx
    Keyd { x: usize },
    /// `Fx15` DT = Vx
    Loads { x: usize },
    /// `Fx18` ST = Vx
    Ld { x: usize },
    /// `Fx1E` I += Vx
    Addi { x: usize },
    /// `Fx29` I = address of the font sprite for Vx
    Ldspr { x: usize },
    /// `Fx33` mem[I..I+3] = bcd(Vx)
    Bcd { x: usize },
    /// `Fx55` mem[I..=I+x] = V0..=Vx
    Stor { x: usize },
    /// `Fx65` V0..=Vx = mem[I..=I+x]
    Read { x: usize },
}

impl Instruction {
    /// Selects the Instruction for an opcode.
    ///
    /// Every `0nnn` other than `00E0` and `00EE` is a machine code call, so the only opcodes that fail
    /// to decode are ones in the `5`, `8`, `9`, `E` and `F` categories with an unused low nibble/byte.
    /// `address` is only used to report where an unknown opcode was found.
    pub fn decode(op: u16, address: u16) -> Result<Instruction, Chip8Error> {
        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());

        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Clr,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Rts,
            (0x0, ..) => Instruction::Sys { addr },
            (0x1, ..) => Instruction::Jump { addr },
            (0x2, ..) => Instruction::Call { addr },
            (0x3, ..) => Instruction::Ske { x, kk },
            (0x4, ..) => Instruction::Skne { x, kk },
            (0x5, .., 0x0) => Instruction::Skre { x, y },
            (0x6, ..) => Instruction::Load { x, kk },
            (0x7, ..) => Instruction::Add { x, kk },
            (0x8, .., 0x0) => Instruction::Mv { x, y },
            (0x8, .., 0x1) => Instruction::Or { x, y },
            (0x8, .., 0x2) => Instruction::And { x, y },
            (0x8, .., 0x3) => Instruction::Xor { x, y },
            (0x8, .., 0x4) => Instruction::Addr { x, y },
            (0x8, .., 0x5) => Instruction::Sub { x, y },
            (0x8, .., 0x6) => Instruction::Shr { x },
            (0x8, .., 0x7) => Instruction::Subn { x, y },
            (0x8, .., 0xE) => Instruction::Shl { x },
            (0x9, .., 0x0) => Instruction::Skrne { x, y },
            (0xA, ..) => Instruction::Loadi { addr },
            (0xB, ..) => Instruction::Jumpi { addr },
            (0xC, ..) => Instruction::Rand { x, kk },
            (0xD, ..) => Instruction::Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => Instruction::Skpr { x },
            (0xE, _, 0xA, 0x1) => Instruction::Skup { x },
            (0xF, _, 0x0, 0x7) => Instruction::Moved { x },
            (0xF, _, 0x0, 0xA) => Instruction::Keyd { x },
            (0xF, _, 0x1, 0x5) => Instruction::Loads { x },
            (0xF, _, 0x1, 0x8) => Instruction::Ld { x },
            (0xF, _, 0x1, 0xE) => Instruction::Addi { x },
            (0xF, _, 0x2, 0x9) => Instruction::Ldspr { x },
            (0xF, _, 0x3, 0x3) => Instruction::Bcd { x },
            (0xF, _, 0x5, 0x5) => Instruction::Stor { x },
            (0xF, _, 0x6, 0x5) => Instruction::Read { x },
            _ => {
                return Err(Chip8Error::UnknownOpcode {
                    opcode: op,
                    address,
                })
            }
        };

        Ok(instruction)
    }
}

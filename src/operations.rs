use rand::Rng;

use crate::constants::{FONT_GLYPH_HEIGHT, FONT_START};
use crate::error::Chip8Error;
use crate::instruction::Instruction;
use crate::registers::VF;
use crate::state::State;

/// `n` is a nibble, so sprites are at most 15 rows tall.
const MAX_SPRITE_HEIGHT: usize = 0xF;

/// Applies a decoded instruction to `state`.
///
/// On error nothing has been changed; in particular the program counter still points at the
/// instruction that failed.
pub fn execute<R: Rng>(
    instruction: Instruction,
    state: &mut State,
    rng: &mut R,
) -> Result<(), Chip8Error> {
    match instruction {
        Instruction::Sys { .. } => sys(state),
        Instruction::Clr => clr(state),
        Instruction::Rts => rts(state)?,
        Instruction::Jump { addr } => jump(state, addr),
        Instruction::Call { addr } => call(state, addr)?,
        Instruction::Ske { x, kk } => ske(state, x, kk),
        Instruction::Skne { x, kk } => skne(state, x, kk),
        Instruction::Skre { x, y } => skre(state, x, y),
        Instruction::Load { x, kk } => load(state, x, kk),
        Instruction::Add { x, kk } => add(state, x, kk),
        Instruction::Mv { x, y } => mv(state, x, y),
        Instruction::Or { x, y } => or(state, x, y),
        Instruction::And { x, y } => and(state, x, y),
        Instruction::Xor { x, y } => xor(state, x, y),
        Instruction::Addr { x, y } => addr(state, x, y),
        Instruction::Sub { x, y } => sub(state, x, y),
        Instruction::Shr { x } => shr(state, x),
        Instruction::Subn { x, y } => subn(state, x, y),
        Instruction::Shl { x } => shl(state, x),
        Instruction::Skrne { x, y } => skrne(state, x, y),
        Instruction::Loadi { addr } => loadi(state, addr),
        Instruction::Jumpi { addr } => jumpi(state, addr),
        Instruction::Rand { x, kk } => rand(state, x, kk, rng.gen()),
        Instruction::Draw { x, y, n } => draw(state, x, y, n),
        Instruction::Skpr { x } => skpr(state, x),
        Instruction::Skup { x } => skup(state, x),
        Instruction::Moved { x } => moved(state, x),
        Instruction::Keyd { x } => keyd(state, x),
        Instruction::Loads { x } => loads(state, x),
        Instruction::Ld { x } => ld(state, x),
        Instruction::Addi { x } => addi(state, x),
        Instruction::Ldspr { x } => ldspr(state, x),
        Instruction::Bcd { x } => bcd(state, x),
        Instruction::Stor { x } => stor(state, x),
        Instruction::Read { x } => read(state, x),
    }
    Ok(())
}

/// machine code routine; nothing to run it on
fn sys(state: &mut State) {
    state.registers.advance();
}

/// clear
fn clr(state: &mut State) {
    state.frame_buffer.clear();
    state.registers.advance();
}

/// PC = STACK.pop()
fn rts(state: &mut State) -> Result<(), Chip8Error> {
    state.registers.pc = state.registers.stack.pop()?;
    Ok(())
}

/// PC = addr
fn jump(state: &mut State, addr: u16) {
    state.registers.pc = addr;
}

/// STACK.push(PC + 2); PC = addr
fn call(state: &mut State, addr: u16) -> Result<(), Chip8Error> {
    let registers = &mut state.registers;
    registers.stack.push(registers.pc.wrapping_add(2))?;
    registers.pc = addr;
    Ok(())
}

/// if Vx == kk then skip
fn ske(state: &mut State, x: usize, kk: u8) {
    let condition = state.v(x) == kk;
    state.registers.skip_if(condition);
}

/// if Vx != kk then skip
fn skne(state: &mut State, x: usize, kk: u8) {
    let condition = state.v(x) != kk;
    state.registers.skip_if(condition);
}

/// if Vx == Vy then skip
fn skre(state: &mut State, x: usize, y: usize) {
    let condition = state.v(x) == state.v(y);
    state.registers.skip_if(condition);
}

/// Vx = kk
fn load(state: &mut State, x: usize, kk: u8) {
    state.registers.v[x] = kk;
    state.registers.advance();
}

/// Vx += kk
/// Wraps around without touching VF
fn add(state: &mut State, x: usize, kk: u8) {
    state.registers.v[x] = state.v(x).wrapping_add(kk);
    state.registers.advance();
}

/// Vx = Vy
fn mv(state: &mut State, x: usize, y: usize) {
    state.registers.v[x] = state.v(y);
    state.registers.advance();
}

/// Vx |= Vy
fn or(state: &mut State, x: usize, y: usize) {
    state.registers.v[x] |= state.v(y);
    state.registers.advance();
}

/// Vx &= Vy
fn and(state: &mut State, x: usize, y: usize) {
    state.registers.v[x] &= state.v(y);
    state.registers.advance();
}

/// Vx ^= Vy
fn xor(state: &mut State, x: usize, y: usize) {
    state.registers.v[x] ^= state.v(y);
    state.registers.advance();
}

/// Vx += Vy; VF = overflow
fn addr(state: &mut State, x: usize, y: usize) {
    let (res, over) = state.v(x).overflowing_add(state.v(y));
    state.registers.v[x] = res;
    state.registers.set_flag(over);
    state.registers.advance();
}

/// Vx -= Vy; VF = !underflow
fn sub(state: &mut State, x: usize, y: usize) {
    let (res, under) = state.v(x).overflowing_sub(state.v(y));
    state.registers.v[x] = res;
    state.registers.set_flag(!under);
    state.registers.advance();
}

/// VF = the bit shifted out; Vx >>= 1
/// With x = F the shifted value is what's left in VF
fn shr(state: &mut State, x: usize) {
    let value = state.v(x);
    state.registers.v[VF] = value & 0x1;
    state.registers.v[x] = value >> 1;
    state.registers.advance();
}

/// Vx = Vy - Vx; VF = !underflow
fn subn(state: &mut State, x: usize, y: usize) {
    let (res, under) = state.v(y).overflowing_sub(state.v(x));
    state.registers.v[x] = res;
    state.registers.set_flag(!under);
    state.registers.advance();
}

/// VF = the bit shifted out; Vx <<= 1
fn shl(state: &mut State, x: usize) {
    let value = state.v(x);
    state.registers.v[VF] = (value & 0x80) >> 7;
    state.registers.v[x] = value << 1;
    state.registers.advance();
}

/// if Vx != Vy then skip
fn skrne(state: &mut State, x: usize, y: usize) {
    let condition = state.v(x) != state.v(y);
    state.registers.skip_if(condition);
}

/// I = addr
fn loadi(state: &mut State, addr: u16) {
    state.registers.i = addr;
    state.registers.advance();
}

/// PC = V0 + addr
fn jumpi(state: &mut State, addr: u16) {
    state.registers.pc = addr + u16::from(state.v(0x0));
}

/// Vx = rand_byte & kk
fn rand(state: &mut State, x: usize, kk: u8, rand_byte: u8) {
    state.registers.v[x] = rand_byte & kk;
    state.registers.advance();
}

/// draw_sprite(x=Vx y=Vy height=n)
/// XORs the sprite at mem[I..I+n] onto the frame buffer at (Vx, Vy), wrapping at the edges.
/// Sets VF if any pixels were erased
fn draw(state: &mut State, x: usize, y: usize, n: u8) {
    let i = state.registers.i;
    let mut rows = [0; MAX_SPRITE_HEIGHT];
    let sprite = &mut rows[..usize::from(n)];
    for (offset, byte) in (0..).zip(sprite.iter_mut()) {
        *byte = state.memory.read(i.wrapping_add(offset));
    }

    let (vx, vy) = (state.v(x), state.v(y));
    let collision = state.frame_buffer.draw_sprite(vx, vy, sprite);
    state.registers.set_flag(collision);
    state.registers.advance();
}

/// if key Vx is pressed then skip
fn skpr(state: &mut State, x: usize) {
    let condition = state.keypad.is_pressed(state.v(x));
    state.registers.skip_if(condition);
}

/// if key Vx isn't pressed then skip
fn skup(state: &mut State, x: usize) {
    let condition = !state.keypad.is_pressed(state.v(x));
    state.registers.skip_if(condition);
}

/// Vx = DT
fn moved(state: &mut State, x: usize) {
    state.registers.v[x] = state.timers.delay;
    state.registers.advance();
}

/// await keypress for Vx
/// PC stays on this instruction until a key is held, so it runs again next cycle
fn keyd(state: &mut State, x: usize) {
    if let Some(key) = state.keypad.first_pressed() {
        state.registers.v[x] = key;
        state.registers.advance();
    }
}

/// DT = Vx
fn loads(state: &mut State, x: usize) {
    state.timers.delay = state.v(x);
    state.registers.advance();
}

/// ST = Vx
fn ld(state: &mut State, x: usize) {
    state.timers.sound = state.v(x);
    state.registers.advance();
}

/// I += Vx
fn addi(state: &mut State, x: usize) {
    state.registers.i = state.registers.i.wrapping_add(u16::from(state.v(x)));
    state.registers.advance();
}

/// I = address of the sprite sheet glyph for Vx
fn ldspr(state: &mut State, x: usize) {
    state.registers.i = FONT_START + u16::from(state.v(x)) * FONT_GLYPH_HEIGHT;
    state.registers.advance();
}

/// mem[I..I+3] = bcd(Vx)
fn bcd(state: &mut State, x: usize) {
    let value = state.v(x);
    let i = state.registers.i;
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, &digit) in (0..).zip(digits.iter()) {
        state.memory.write(i.wrapping_add(offset), digit);
    }
    state.registers.advance();
}

/// mem[I..=I+x] = V0..=Vx
fn stor(state: &mut State, x: usize) {
    let i = state.registers.i;
    for (offset, &value) in (0..).zip(state.registers.v[..=x].iter()) {
        state.memory.write(i.wrapping_add(offset), value);
    }
    state.registers.advance();
}

/// V0..=Vx = mem[I..=I+x]
fn read(state: &mut State, x: usize) {
    let i = state.registers.i;
    for (offset, register) in (0..).zip(0..=x) {
        state.registers.v[register] = state.memory.read(i.wrapping_add(offset));
    }
    state.registers.advance();
}

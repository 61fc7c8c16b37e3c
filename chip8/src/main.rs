use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use chip8vm::CYCLES_PER_FRAME;

mod keymap;
mod run;

/// Runs a Chip-8 ROM in an SDL2 window.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Instructions executed per 60Hz frame
    #[arg(short, long, default_value_t = CYCLES_PER_FRAME)]
    cycles_per_frame: u32,

    /// Size multiplier for each pixel
    #[arg(short, long, default_value_t = 10)]
    scale: u32,

    /// Step over unknown opcodes instead of halting on them
    #[arg(long)]
    skip_unknown: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run::run(&args)
}

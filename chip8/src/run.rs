use std::fs::File;
use std::io::BufReader;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use log::{error, info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8vm::{Chip8, Chip8Error, FRAME_RATE};
use display::Display;

use crate::keymap::keymap;
use crate::Args;

/// Whether the machine should keep stepping after a faulted cycle.
enum Step {
    Continue,
    Halt,
}

pub fn run(args: &Args) -> Result<()> {
    let mut chip8 = Chip8::new();

    // Load ROM
    let file = File::open(&args.rom)
        .with_context(|| format!("unable to open {}", args.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", args.rom.display()))?;
    info!("loaded {}", args.rom.display());

    // Get SDL2 context
    let sdl = sdl2::init()
        .map_err(|e| anyhow!(e))
        .context("unable to initialise SDL2")?;
    let mut display = Display::new(&sdl, args.scale)?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    let frame_time = Duration::from_secs(1) / FRAME_RATE;
    let mut halted = false;

    'event: loop {
        let frame_start = Instant::now();

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(index) = keymap(key) {
                        chip8.set_key(index, true)?;
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(index) = keymap(key) {
                        chip8.set_key(index, false)?;
                    }
                }
                _ => continue,
            }
        }

        // Update state
        if !halted {
            for _ in 0..args.cycles_per_frame {
                if let Err(e) = chip8.cycle() {
                    if let Step::Halt = recover(&mut chip8, e, args.skip_unknown)? {
                        halted = true;
                        break;
                    }
                }
            }
        }

        // If the draw flag is set, render the current frame and unset it
        if let Some(frame) = chip8.get_frame() {
            display.render(frame)?;
            chip8.acknowledge_frame();
        }

        if chip8.beep_pending() {
            info!("beep");
        }

        // Handle timing
        let elapsed = frame_start.elapsed();
        if frame_time > elapsed {
            thread::sleep(frame_time - elapsed);
        }
    }

    Ok(())
}

/// Decides what a faulted cycle means for the run loop.
///
/// Unknown opcodes either get stepped over or halt the machine with the window left open; any
/// other fault ends the run.
fn recover(chip8: &mut Chip8, e: Chip8Error, skip_unknown: bool) -> Result<Step> {
    match e {
        Chip8Error::UnknownOpcode { .. } if skip_unknown => {
            warn!("skipping {}", e);
            chip8.skip_instruction();
            Ok(Step::Continue)
        }
        Chip8Error::UnknownOpcode { .. } => {
            error!("halted: {}", e);
            Ok(Step::Halt)
        }
        _ => Err(e.into()),
    }
}

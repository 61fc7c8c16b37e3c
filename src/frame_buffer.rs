use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, SPRITE_WIDTH};

/// A single row of pixels, left to right.
pub type Row = [bool; DISPLAY_WIDTH];

/// # Frame buffer
/// The contents of the 64x32 monochrome display, indexed as [y][x].
///
/// Sprites are XORed onto the buffer. Anything that changes it raises the redraw flag, which stays
/// up until whoever is rendering frames acknowledges it.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [Row; DISPLAY_HEIGHT],
    redraw: bool,
}

impl FrameBuffer {
    /// A blank buffer. It starts out needing a redraw so the first frame gets rendered.
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            redraw: true,
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.redraw = true;
    }

    /// XORs a sprite onto the buffer with its top left corner at (`x`, `y`).
    ///
    /// Each byte of `sprite` is one row, most significant bit leftmost. Pixels that fall off an
    /// edge wrap around to the opposite one.
    ///
    /// Returns whether any pixel was erased.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let mut collision = false;

        for (row, &byte) in sprite.iter().enumerate() {
            let py = (usize::from(y) + row) % DISPLAY_HEIGHT;
            for bit in 0..SPRITE_WIDTH {
                if (byte >> (7 - bit)) & 1 == 0 {
                    continue;
                }
                let px = (usize::from(x) + bit) % DISPLAY_WIDTH;
                let pixel = &mut self.pixels[py][px];
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }

        self.redraw = true;
        collision
    }

    /// Whether the pixel at (`x`, `y`) is lit. Coordinates wrap like sprites do.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.pixels.iter()
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Lowers the redraw flag once a frame has been rendered.
    pub fn acknowledge(&mut self) {
        self.redraw = false;
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|&lit| if lit { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// # Timers
/// Two 8-bit countdown timers that tick once per cycle and stop at 0.
/// - the delay timer can be read back by programs
/// - the sound timer beeps for as long as it's above 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts both timers down by one.
    ///
    /// Returns whether the sound timer was running, i.e. whether this cycle should beep.
    pub fn tick(&mut self) -> bool {
        self.delay = self.delay.saturating_sub(1);

        let beeping = self.sound > 0;
        self.sound = self.sound.saturating_sub(1);
        beeping
    }
}

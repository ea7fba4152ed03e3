//! Hardware abstraction for addressable LED strips.

use palette::Srgb;

/// Trait for abstracting addressable LED strip hardware.
///
/// Implement this for your strip driver (SPI, RMT, bit-banged, etc.) to allow
/// the engine to control it. Writes are buffered: `set` stages a pixel color
/// and `show` pushes the staged frame to the physical strip.
pub trait LedStrip {
    /// Returns the number of LEDs on the strip.
    fn len(&self) -> usize;

    /// Returns true if the strip has no LEDs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stages a color for the LED at `index`.
    ///
    /// Callers guarantee `index < self.len()`. Handle any hardware errors
    /// internally - this method cannot fail.
    fn set(&mut self, index: usize, color: Srgb<u8>);

    /// Stages a color for every LED on the strip.
    fn fill(&mut self, color: Srgb<u8>) {
        for index in 0..self.len() {
            self.set(index, color);
        }
    }

    /// Pushes the staged frame to the physical strip.
    fn show(&mut self);
}

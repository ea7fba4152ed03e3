//! Shared test infrastructure for rgb-fader integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use rgb_fader::{LedStrip, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with manually controllable time
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advances the mock clock by `millis`
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Strip
// ============================================================================

/// Mock strip that snapshots every flushed frame for testing
pub struct MockStrip<const N: usize> {
    pixels: [Srgb<u8>; N],
    pub show_count: usize,
    pub frames: heapless::Vec<[Srgb<u8>; N], 128>,
}

impl<const N: usize> MockStrip<N> {
    pub fn new() -> Self {
        Self {
            // Deliberately not off, so construction clearing is observable
            pixels: [Srgb::new(7, 7, 7); N],
            show_count: 0,
            frames: heapless::Vec::new(),
        }
    }

    /// Returns the staged color of pixel `index`
    pub fn pixel(&self, index: usize) -> Srgb<u8> {
        self.pixels[index]
    }

    /// Returns all staged pixels
    pub fn pixels(&self) -> &[Srgb<u8>; N] {
        &self.pixels
    }

    /// Returns the first pixel of each flushed frame, skipping the
    /// construction flush
    pub fn applied(&self) -> impl Iterator<Item = Srgb<u8>> + '_ {
        self.frames.iter().skip(1).map(|frame| frame[0])
    }
}

impl<const N: usize> LedStrip for MockStrip<N> {
    fn len(&self) -> usize {
        N
    }

    fn set(&mut self, index: usize, color: Srgb<u8>) {
        self.pixels[index] = color;
    }

    fn show(&mut self) {
        self.show_count += 1;
        let _ = self.frames.push(self.pixels);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// The default update cadence in milliseconds
pub const CADENCE_MS: u64 = 20;

/// Helper colors
pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);
pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);
pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);

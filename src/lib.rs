#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TransitionEngine`**: Fades a strip toward target colors and plays timed pulses
//! - **`LedStrip`**: Trait to implement for your strip hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`Mode`**: Playback mode (`Fade`, or the reserved `Sweep` placeholder)
//! - **`LedTarget`**: Which LEDs a direct write addresses (`All` or `Single(index)`)
//! - **`EngineConfig`**: Update cadence and pulse duration
//! - **`EngineAction`**: Commands that can be sent to control engines
//!
//! Colors live as `Srgb<u8>` (0-255 per channel). The caller-facing operations
//! take plain `i32` channels so that out-of-range requests can be rejected with
//! [`ColorError::ChannelOutOfRange`] instead of silently wrapping.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod color;
pub mod command;
pub mod engine;
pub mod strip;
pub mod time;
pub mod types;

pub use color::{Channel, ColorError};
pub use command::{EngineAction, EngineCommand};
pub use engine::{EngineError, EngineState, TransitionEngine};
pub use strip::LedStrip;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{EngineConfig, LedTarget, Mode};

pub const COLOR_OFF: Srgb<u8> = Srgb::new(0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    // Basic compilation tests - actual functionality tests would go here
    #[test]
    fn types_compile() {
        let _ = Mode::Fade;
        let _ = Mode::Sweep;
        let _ = LedTarget::All;
        let _ = LedTarget::Single(0);
    }
}

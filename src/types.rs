//! Core types for engine configuration and addressing.

use crate::time::TimeDuration;

/// Playback mode of a transition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Fade the whole strip toward the target color.
    #[default]
    Fade,

    /// Reserved for per-LED sequential animation. Currently a no-op:
    /// `tick` performs no color updates while this mode is selected.
    Sweep,
}

/// Which LEDs a direct color write addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedTarget {
    /// Every LED on the strip.
    All,

    /// A single LED by index.
    Single(usize),
}

/// Timing configuration for a transition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig<D: TimeDuration> {
    /// Minimum interval between successive playback steps.
    pub update_interval: D,

    /// How long a pulse holds its color before reverting to off.
    pub pulse_timeout: D,
}

impl<D: TimeDuration> EngineConfig<D> {
    /// Creates a config with explicit timings.
    pub fn new(update_interval: D, pulse_timeout: D) -> Self {
        Self {
            update_interval,
            pulse_timeout,
        }
    }
}

impl<D: TimeDuration> Default for EngineConfig<D> {
    /// 20 ms update cadence, 500 ms pulse duration.
    fn default() -> Self {
        Self {
            update_interval: D::from_millis(20),
            pulse_timeout: D::from_millis(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Millis(u64);

    impl TimeDuration for Millis {
        const ZERO: Self = Millis(0);

        fn as_millis(&self) -> u64 {
            self.0
        }

        fn from_millis(millis: u64) -> Self {
            Millis(millis)
        }
    }

    #[test]
    fn default_mode_is_fade() {
        assert_eq!(Mode::default(), Mode::Fade);
    }

    #[test]
    fn default_config_matches_documented_timings() {
        let config = EngineConfig::<Millis>::default();
        assert_eq!(config.update_interval, Millis(20));
        assert_eq!(config.pulse_timeout, Millis(500));
    }
}

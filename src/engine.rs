//! Color transition engine with non-blocking, timer-based playback.
//!
//! Provides [`TransitionEngine`] which fades an addressable LED strip toward
//! requested target colors by precomputing a fixed-length buffer of
//! interpolated steps and playing one step back per update-timer expiry.
//! Pulses reuse the same machinery with a second timer that retargets the
//! strip back to off when it expires.

use crate::color::{self, ColorError};
use crate::strip::LedStrip;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{EngineConfig, LedTarget, Mode};
use crate::COLOR_OFF;
use palette::Srgb;

/// The current state of a transition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineState {
    /// The strip shows the target color; ticks are no-ops until a new
    /// target is set.
    Idle,
    /// A fade is in flight; each update-timer expiry plays the next step.
    Transitioning,
}

/// Errors that can occur during engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// A requested channel value fell outside the 0-255 range.
    InvalidColor(ColorError),

    /// A single-LED write addressed an index beyond the strip.
    LedIndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The number of LEDs on the strip.
        count: usize,
    },
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::InvalidColor(err) => write!(f, "invalid color: {}", err),
            EngineError::LedIndexOutOfRange { index, count } => {
                write!(f, "LED index {} out of range for strip of {}", index, count)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

impl From<ColorError> for EngineError {
    fn from(err: ColorError) -> Self {
        EngineError::InvalidColor(err)
    }
}

/// Drives an addressable LED strip through smooth fades and timed pulses.
///
/// The engine owns the strip sink and borrows a time source. It never blocks:
/// call [`tick`](TransitionEngine::tick) from your control loop at least as
/// often as the configured update cadence, and the engine advances a fade by
/// exactly one step per cadence interval.
///
/// Playback is one-shot: a fade plays the interpolation buffer from start to
/// end once and then halts until a new target arrives. Calling
/// [`set_target`](TransitionEngine::set_target) mid-fade discards the
/// in-flight buffer and recomputes it from the live color, so consecutive
/// applied frames never jump by more than one interpolation step.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Strip implementation type
/// * `T` - Time source implementation type
/// * `STEPS` - Number of interpolation steps per fade (must be at least 2)
pub struct TransitionEngine<'t, I: TimeInstant, S: LedStrip, T: TimeSource<I>, const STEPS: usize> {
    strip: S,
    time_source: &'t T,
    config: EngineConfig<I::Duration>,
    mode: Mode,
    current: Srgb<u8>,
    target: Srgb<u8>,
    transition: [Srgb<u8>; STEPS],
    cursor: usize,
    target_reached: bool,
    update_started: I,
    pulse_started: Option<I>,
}

impl<'t, I, S, T, const STEPS: usize> TransitionEngine<'t, I, S, T, STEPS>
where
    I: TimeInstant,
    S: LedStrip,
    T: TimeSource<I>,
{
    /// Creates a new idle engine with the strip turned off.
    ///
    /// # Panics
    /// Panics if `STEPS` is less than 2 (a fade needs distinct start and end
    /// slots).
    pub fn new(mut strip: S, time_source: &'t T, config: EngineConfig<I::Duration>) -> Self {
        assert!(STEPS >= 2, "a fade needs at least 2 interpolation steps");

        strip.fill(COLOR_OFF);
        strip.show();

        Self {
            strip,
            time_source,
            config,
            mode: Mode::default(),
            current: COLOR_OFF,
            target: COLOR_OFF,
            transition: [COLOR_OFF; STEPS],
            cursor: 0,
            target_reached: true,
            update_started: time_source.now(),
            pulse_started: None,
        }
    }

    /// Records a new target color and restarts interpolation toward it.
    ///
    /// The whole transition buffer is recomputed from the *live* current
    /// color, so retargeting mid-fade never causes a visible jump. The strip
    /// is not touched; playback happens in subsequent [`tick`] calls.
    ///
    /// [`tick`]: TransitionEngine::tick
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidColor`] if any channel lies outside
    /// [0, 255]. The engine state is left unmodified.
    pub fn set_target(&mut self, r: i32, g: i32, b: i32) -> Result<(), EngineError> {
        let target = color::rgb(r, g, b)?;
        self.retarget(target);
        Ok(())
    }

    /// Fades to a color, then automatically fades back to off.
    ///
    /// Equivalent to [`set_target`](TransitionEngine::set_target) plus
    /// starting the pulse timer. Once the configured pulse timeout elapses,
    /// the next [`tick`](TransitionEngine::tick) retargets to (0, 0, 0) with
    /// no further caller involvement.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidColor`] for out-of-range channels; the
    /// pulse timer is not started in that case.
    pub fn pulse(&mut self, r: i32, g: i32, b: i32) -> Result<(), EngineError> {
        let target = color::rgb(r, g, b)?;
        self.retarget(target);
        self.pulse_started = Some(self.time_source.now());
        Ok(())
    }

    /// Sets the strip to a color immediately, bypassing the fade.
    ///
    /// Current and target colors both become `color`, the transition buffer
    /// is refilled, and the frame is pushed to the strip in this call. Any
    /// in-flight fade is abandoned.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidColor`] for out-of-range channels.
    pub fn set_color(&mut self, r: i32, g: i32, b: i32) -> Result<(), EngineError> {
        let color = color::rgb(r, g, b)?;

        self.current = color;
        self.target = color;
        self.transition = [color; STEPS];
        self.cursor = 0;
        self.target_reached = true;

        self.write(color, LedTarget::All);
        Ok(())
    }

    /// Writes a color directly to the strip through the validation funnel.
    ///
    /// This is the single path by which colors reach the sink. The staged
    /// frame is flushed after a successful write. Direct writes do not alter
    /// the engine's current or target color; the next fade step will paint
    /// over them.
    ///
    /// # Errors
    /// * [`EngineError::InvalidColor`] - A channel lies outside [0, 255]
    /// * [`EngineError::LedIndexOutOfRange`] - `LedTarget::Single` index is
    ///   beyond the strip
    ///
    /// In both cases the sink is untouched and nothing is flushed.
    pub fn apply(
        &mut self,
        r: i32,
        g: i32,
        b: i32,
        led: LedTarget,
    ) -> Result<(), EngineError> {
        let color = color::rgb(r, g, b)?;

        if let LedTarget::Single(index) = led {
            if index >= self.strip.len() {
                return Err(EngineError::LedIndexOutOfRange {
                    index,
                    count: self.strip.len(),
                });
            }
        }

        self.write(color, led);
        Ok(())
    }

    /// Advances the engine. Call at least once per update-cadence interval.
    ///
    /// In [`Mode::Fade`]: when the update timer has expired, it is restarted
    /// and one transition step is applied to the strip; when the pulse timer
    /// has expired, the engine retargets to off and clears the pulsing flag.
    /// Between expiries this is a cheap no-op, so the caller's loop may run
    /// as fast as it likes.
    ///
    /// In [`Mode::Sweep`]: no updates are performed (reserved mode).
    pub fn tick(&mut self) {
        match self.mode {
            Mode::Fade => self.tick_fade(),
            Mode::Sweep => {}
        }
    }

    fn tick_fade(&mut self) {
        let now = self.time_source.now();

        if self.expired(self.update_started, self.config.update_interval, now) {
            self.update_started = now;

            if !self.target_reached {
                let step = self.transition[self.cursor];
                self.write(step, LedTarget::All);
                self.current = step;

                if self.cursor < STEPS - 1 {
                    self.cursor += 1;
                } else {
                    self.target_reached = true;
                }
            }
        }

        if let Some(started) = self.pulse_started {
            if self.expired(started, self.config.pulse_timeout, now) {
                self.pulse_started = None;
                self.retarget(COLOR_OFF);
            }
        }
    }

    /// Sets the playback mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Returns the current playback mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns whether the engine is idle or mid-fade.
    pub fn state(&self) -> EngineState {
        if self.target_reached {
            EngineState::Idle
        } else {
            EngineState::Transitioning
        }
    }

    /// Returns true if a pulse is active and has not yet reverted.
    pub fn is_pulsing(&self) -> bool {
        self.pulse_started.is_some()
    }

    /// Returns the last color applied to the strip by the fade machinery.
    pub fn current_color(&self) -> Srgb<u8> {
        self.current
    }

    /// Returns the most recently requested target color.
    pub fn target_color(&self) -> Srgb<u8> {
        self.target
    }

    /// Returns a reference to the strip sink.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns the engine's timing configuration.
    pub fn config(&self) -> EngineConfig<I::Duration> {
        self.config
    }

    /// Rebuilds the transition buffer from the live current color.
    ///
    /// Invariant afterwards: `transition[0] == current` and
    /// `transition[STEPS - 1] == target`, with each channel monotonic in
    /// between.
    fn retarget(&mut self, target: Srgb<u8>) {
        self.target = target;
        self.cursor = 0;
        self.target_reached = false;

        for (index, slot) in self.transition.iter_mut().enumerate() {
            let factor = index as f32 / (STEPS - 1) as f32;
            *slot = color::lerp(self.current, target, factor);
        }
    }

    fn write(&mut self, color: Srgb<u8>, led: LedTarget) {
        match led {
            LedTarget::All => self.strip.fill(color),
            LedTarget::Single(index) => self.strip.set(index, color),
        }
        self.strip.show();
    }

    fn expired(&self, started: I, timeout: I::Duration, now: I) -> bool {
        now.duration_since(started).as_millis() >= timeout.as_millis()
    }
}

//! Time abstraction traits for platform-agnostic timing.
//!
//! The engine never reads a clock directly; it captures instants from a
//! [`TimeSource`] and compares elapsed durations against its configured
//! timeouts. Implementations on wrapping hardware counters must make
//! `duration_since` wraparound-safe (wrapping subtraction on the raw ticks).

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Must be monotonic-safe: on platforms with a wrapping tick counter,
    /// implement this with wrapping subtraction so that a counter rollover
    /// between `earlier` and `self` still yields the correct elapsed time.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

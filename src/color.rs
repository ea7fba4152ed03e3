//! Channel validation and linear color interpolation.
//!
//! All caller-supplied channel values enter the crate as `i32` and are
//! validated into `Srgb<u8>` here. Interpolation happens in `Srgb<f32>` via
//! [`palette::Mix`] and rounds back to 8-bit on the way out, so the endpoints
//! of a fade are always hit exactly.

use palette::{Mix, Srgb};

/// A color channel, used to report which component of a request was invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// Color validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// A channel value fell outside the 0-255 range.
    ChannelOutOfRange {
        /// Which channel was out of range.
        channel: Channel,
        /// The rejected value.
        value: i32,
    },
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::ChannelOutOfRange { channel, value } => {
                write!(f, "{} channel value {} is outside 0-255", channel, value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}

/// Validates raw channel values into an 8-bit RGB color.
///
/// # Errors
/// Returns [`ColorError::ChannelOutOfRange`] naming the first offending
/// channel if any value lies outside [0, 255].
pub fn rgb(r: i32, g: i32, b: i32) -> Result<Srgb<u8>, ColorError> {
    let red = validate_channel(Channel::Red, r)?;
    let green = validate_channel(Channel::Green, g)?;
    let blue = validate_channel(Channel::Blue, b)?;
    Ok(Srgb::new(red, green, blue))
}

fn validate_channel(channel: Channel, value: i32) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange { channel, value })
}

/// Linearly interpolates between two 8-bit colors.
///
/// `factor` is the fractional position between `from` (0.0) and `to` (1.0).
/// The result is rounded to the nearest 8-bit value per channel; `factor`
/// values of exactly 0.0 and 1.0 reproduce `from` and `to` bit-exactly.
pub fn lerp(from: Srgb<u8>, to: Srgb<u8>, factor: f32) -> Srgb<u8> {
    let from: Srgb<f32> = from.into_format();
    let to: Srgb<f32> = to.into_format();
    from.mix(to, factor).into_format()
}

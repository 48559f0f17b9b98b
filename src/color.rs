//! The color engine boundary: wire hex encoding and the working
//! color-space representation.
//!
//! Colors travel on the wire as hex strings (`#rrggbb` or `#rrggbbaa`) and
//! are edited in a cylindrical working space. All colorimetry is delegated
//! to the [`palette`] crate; this module only maps between the wire form,
//! the [`WorkingColor`] wrapper, and named channels.

use std::fmt;
use std::str::FromStr;

use palette::{FromColor, Okhsl, Okhsv, OklabHue, Srgb};

use crate::error::Error;

// ============================================================================
// Color Space
// ============================================================================

/// A cylindrical working space colors are edited in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// Oklab-based hue/saturation/lightness.
    #[default]
    Okhsl,
    /// Oklab-based hue/saturation/value.
    Okhsv,
}

impl ColorSpace {
    /// The channels addressable in this space, in canonical order.
    pub fn channels(self) -> [Channel; 3] {
        match self {
            Self::Okhsl => [Channel::Hue, Channel::Saturation, Channel::Lightness],
            Self::Okhsv => [Channel::Hue, Channel::Saturation, Channel::Value],
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Okhsl => "okhsl",
            Self::Okhsv => "okhsv",
        })
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "okhsl" => Ok(Self::Okhsl),
            "okhsv" => Ok(Self::Okhsv),
            _ => Err(Error::UnknownColorSpace { name: s.to_owned() }),
        }
    }
}

// ============================================================================
// Channel
// ============================================================================

/// A named, float-valued channel of a working-space representation.
///
/// Hue is addressed in degrees; saturation, lightness and value are in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
    Value,
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "h" | "hue" => Ok(Self::Hue),
            "s" | "saturation" => Ok(Self::Saturation),
            "l" | "lightness" => Ok(Self::Lightness),
            "v" | "value" => Ok(Self::Value),
            _ => Err(Error::UnknownChannel { name: s.to_owned() }),
        }
    }
}

// ============================================================================
// Wire encoding
// ============================================================================

/// Parses a `#rrggbb` or `#rrggbbaa` wire string (leading `#` optional).
pub fn parse_hex(hex: &str) -> Result<(Srgb<u8>, u8), Error> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || Error::InvalidHex {
        hex: hex.to_owned(),
    };
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    match digits.len() {
        6 => Ok((Srgb::new(byte(0)?, byte(2)?, byte(4)?), 255)),
        8 => Ok((Srgb::new(byte(0)?, byte(2)?, byte(4)?), byte(6)?)),
        _ => Err(invalid()),
    }
}

/// Formats an sRGB color as a lowercase wire string.
///
/// The alpha byte is only emitted when the color is not fully opaque, so
/// opaque colors round-trip to the common 6-digit form.
pub fn format_hex(rgb: Srgb<u8>, alpha: u8) -> String {
    let (r, g, b) = rgb.into_components();
    if alpha == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{alpha:02x}")
    }
}

// ============================================================================
// WorkingColor
// ============================================================================

/// A color in one of the supported working spaces.
///
/// This is the mutation surface for edits: channels are read and written
/// here, and the result is committed back to the wire encoding by the owner.
/// Conversions between spaces and to/from sRGB go through [`palette`] and
/// are clamped to the sRGB gamut on the way out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkingColor {
    Okhsl(Okhsl<f32>),
    Okhsv(Okhsv<f32>),
}

impl WorkingColor {
    /// Decodes an sRGB color into the given working space.
    pub fn from_srgb(rgb: Srgb<f32>, space: ColorSpace) -> Self {
        match space {
            ColorSpace::Okhsl => Self::Okhsl(Okhsl::from_color(rgb)),
            ColorSpace::Okhsv => Self::Okhsv(Okhsv::from_color(rgb)),
        }
    }

    /// The space this representation currently lives in.
    pub fn space(self) -> ColorSpace {
        match self {
            Self::Okhsl(_) => ColorSpace::Okhsl,
            Self::Okhsv(_) => ColorSpace::Okhsv,
        }
    }

    /// Converts into another working space. A no-op if already there.
    pub fn convert(self, space: ColorSpace) -> Self {
        match (self, space) {
            (Self::Okhsl(c), ColorSpace::Okhsv) => Self::Okhsv(Okhsv::from_color(c)),
            (Self::Okhsv(c), ColorSpace::Okhsl) => Self::Okhsl(Okhsl::from_color(c)),
            (same, _) => same,
        }
    }

    /// Converts back to gamut-clamped sRGB.
    pub fn to_srgb(self) -> Srgb<f32> {
        match self {
            Self::Okhsl(c) => Srgb::from_color(c),
            Self::Okhsv(c) => Srgb::from_color(c),
        }
    }

    /// Reads a channel value.
    ///
    /// Fails with [`Error::ChannelNotInSpace`] when the channel does not
    /// exist in the current space (e.g. `value` in okhsl).
    pub fn get(&self, channel: Channel) -> Result<f32, Error> {
        match (self, channel) {
            (Self::Okhsl(c), Channel::Hue) => Ok(c.hue.into_positive_degrees()),
            (Self::Okhsl(c), Channel::Saturation) => Ok(c.saturation),
            (Self::Okhsl(c), Channel::Lightness) => Ok(c.lightness),
            (Self::Okhsv(c), Channel::Hue) => Ok(c.hue.into_positive_degrees()),
            (Self::Okhsv(c), Channel::Saturation) => Ok(c.saturation),
            (Self::Okhsv(c), Channel::Value) => Ok(c.value),
            _ => Err(Error::ChannelNotInSpace {
                channel,
                space: self.space(),
            }),
        }
    }

    /// Writes a channel value.
    ///
    /// Rejects non-finite values so arithmetic edge cases surface as errors
    /// instead of poisoning the representation.
    pub fn set(&mut self, channel: Channel, value: f32) -> Result<(), Error> {
        if !value.is_finite() {
            return Err(Error::NonFiniteChannel { channel, value });
        }
        let space = self.space();
        match (self, channel) {
            (Self::Okhsl(c), Channel::Hue) => c.hue = OklabHue::from_degrees(value),
            (Self::Okhsl(c), Channel::Saturation) => c.saturation = value,
            (Self::Okhsl(c), Channel::Lightness) => c.lightness = value,
            (Self::Okhsv(c), Channel::Hue) => c.hue = OklabHue::from_degrees(value),
            (Self::Okhsv(c), Channel::Saturation) => c.saturation = value,
            (Self::Okhsv(c), Channel::Value) => c.value = value,
            _ => return Err(Error::ChannelNotInSpace { channel, space }),
        }
        Ok(())
    }
}

impl fmt::Display for WorkingColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Okhsl(c) => write!(
                f,
                "okhsl({:.3} {:.5} {:.5})",
                c.hue.into_positive_degrees(),
                c.saturation,
                c.lightness
            ),
            Self::Okhsv(c) => write!(
                f,
                "okhsv({:.3} {:.5} {:.5})",
                c.hue.into_positive_degrees(),
                c.saturation,
                c.value
            ),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

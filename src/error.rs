//! Error types for palette loading, editing and serialization.

use std::path::PathBuf;

use thiserror::Error;

use crate::color::{Channel, ColorSpace};

/// All failure modes of the palette pipeline.
///
/// Decode errors carry the offending path; errors raised while editing a
/// variant are wrapped in [`Error::Edit`] so they name the variant and color
/// that triggered them.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading an input file failed.
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing an output snapshot failed.
    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The palette JSON document could not be decoded.
    #[error("invalid palette document {path:?}")]
    PaletteDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The edit configuration TOML could not be decoded.
    #[error("invalid edit config {path:?}")]
    ConfigDecode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A wire hex string was not a 6- or 8-digit hex color.
    #[error("invalid hex color {hex:?}")]
    InvalidHex { hex: String },

    /// The configured working space is not one we can convert to.
    #[error("unknown color space {name:?} (expected \"okhsl\" or \"okhsv\")")]
    UnknownColorSpace { name: String },

    /// An edit rule addressed a channel name no space defines.
    #[error("unknown channel {name:?}")]
    UnknownChannel { name: String },

    /// The channel exists but not in the working space in use.
    #[error("channel {channel:?} is not addressable in {space}")]
    ChannelNotInSpace { channel: Channel, space: ColorSpace },

    /// A multiply edit with value 0 under light inversion would divide by zero.
    #[error("multiply edit on {variable:?} has value 0, which is undefined under light inversion")]
    MultiplyByZero { variable: String },

    /// An edit produced a NaN or infinite channel value.
    #[error("channel {channel:?} became non-finite ({value})")]
    NonFiniteChannel { channel: Channel, value: f32 },

    /// Encoding the palette set to JSON failed.
    #[error("JSON encoding failed")]
    Encode(#[from] serde_json::Error),

    /// An edit failed before any color of a variant was touched.
    #[error("variant {variant:?}: {source}")]
    Variant {
        variant: String,
        #[source]
        source: Box<Error>,
    },

    /// An edit failed while processing a specific color of a variant.
    #[error("variant {variant:?}, color {color:?}: {source}")]
    Edit {
        variant: String,
        color: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps an error with the variant it occurred in.
    pub(crate) fn in_variant(self, variant: &str) -> Self {
        Self::Variant {
            variant: variant.to_owned(),
            source: Box::new(self),
        }
    }

    /// Wraps an error with the variant and color it occurred in.
    pub(crate) fn in_color(self, variant: &str, color: &str) -> Self {
        Self::Edit {
            variant: variant.to_owned(),
            color: color.to_owned(),
            source: Box::new(self),
        }
    }
}

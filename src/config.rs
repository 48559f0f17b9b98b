//! TOML edit configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::edit::Edit;
use crate::error::Error;

/// The edit configuration document.
///
/// All fields are optional in the TOML; an empty file is a valid
/// configuration that edits nothing. The working space is kept as the raw
/// identifier here and resolved by the engine, so an unknown space fails
/// with the variant it was about to be applied to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Working space identifier, e.g. `"okhsl"` or `"okhsv"`.
    pub color_space: String,

    /// Flip lightness edits on non-dark variants so one rule list serves
    /// both light and dark themes.
    pub inverse_edit_light: bool,

    /// Edit rules, applied in this order.
    pub edits: Vec<Edit>,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            color_space: "okhsl".to_owned(),
            inverse_edit_light: true,
            edits: Vec::new(),
        }
    }
}

impl EditConfig {
    /// Loads the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| Error::ConfigDecode {
            path: path.to_owned(),
            source,
        })
    }
}

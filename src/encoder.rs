//! JSON snapshot encoding and writing.
//!
//! Two modes: the default flattened snapshot maps each variant's colors to
//! plain `"{hex}ff"` strings, and the detailed snapshot serializes the full
//! model including working-space values for inspection.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::model::PaletteSet;

/// Flattened wire shape: hex-only colors, same four slots.
#[derive(Serialize)]
struct FlatPaletteSet<'a> {
    version: &'a str,
    latte: IndexMap<String, String>,
    frappe: IndexMap<String, String>,
    macchiato: IndexMap<String, String>,
    mocha: IndexMap<String, String>,
}

impl<'a> From<&'a PaletteSet> for FlatPaletteSet<'a> {
    fn from(set: &'a PaletteSet) -> Self {
        Self {
            version: &set.version,
            latte: set.latte.to_hex(),
            frappe: set.frappe.to_hex(),
            macchiato: set.macchiato.to_hex(),
            mocha: set.mocha.to_hex(),
        }
    }
}

/// Encodes palette sets as pretty-printed JSON snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder {
    detailed: bool,
}

impl JsonEncoder {
    /// Creates an encoder; `detailed` selects the full-model snapshot.
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }

    /// Encodes the set to a pretty-printed JSON string.
    pub fn encode(&self, set: &PaletteSet) -> Result<String, Error> {
        let json = if self.detailed {
            serde_json::to_string_pretty(set)?
        } else {
            serde_json::to_string_pretty(&FlatPaletteSet::from(set))?
        };
        Ok(json)
    }

    /// Writes a snapshot to `<base stem>-<suffix>.json` next to `base`.
    ///
    /// Returns the path that was written.
    pub fn write(&self, set: &PaletteSet, base: &Path, suffix: &str) -> Result<PathBuf, Error> {
        let path = snapshot_path(base, suffix);
        let mut json = self.encode(set)?;
        json.push('\n');
        fs::write(&path, json).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), detailed = self.detailed, "wrote snapshot");
        Ok(path)
    }
}

/// Derives the snapshot path: the suffix is inserted before the `.json`
/// extension, replacing any extension `base` already carries.
fn snapshot_path(base: &Path, suffix: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .map_or(Cow::Borrowed("output"), |s| s.to_string_lossy());
    base.with_file_name(format!("{stem}-{suffix}.json"))
}

// ============================================================================
// Tests
// ============================================================================

//! The palette data model: colors, variants and the four-slot palette set.
//!
//! A [`PaletteColor`] carries two surfaces: the wire hex string that is
//! persisted and serialized, and the working-space representation that
//! edits mutate. The working form is derived from the hex at decode time
//! and only flows back into the hex through an explicit [`commit`]
//! (mutate-in-working-space, then commit-to-wire), which is what lets the
//! pre-edit snapshot be taken without a deep copy.
//!
//! [`commit`]: PaletteColor::commit

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use palette::Srgb;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::color::{format_hex, parse_hex, ColorSpace, WorkingColor};
use crate::error::Error;

// ============================================================================
// PaletteColor
// ============================================================================

/// A single named color of a variant.
///
/// Constructed only through decoding or [`PaletteColor::new`], both of
/// which derive the working representation from the wire hex, so a value of
/// this type never holds an unset or placeholder working color.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawColor")]
pub struct PaletteColor {
    hex: String,
    accent: bool,
    alpha: u8,
    working: WorkingColor,
}

/// The wire shape of a color. Unknown fields are ignored.
#[derive(Deserialize)]
struct RawColor {
    hex: String,
    accent: bool,
}

impl TryFrom<RawColor> for PaletteColor {
    type Error = Error;

    fn try_from(raw: RawColor) -> Result<Self, Error> {
        Self::new(&raw.hex, raw.accent)
    }
}

impl PaletteColor {
    /// Builds a color from its wire hex, decoding into the default space.
    pub fn new(hex: &str, accent: bool) -> Result<Self, Error> {
        let (rgb, alpha) = parse_hex(hex)?;
        let working = WorkingColor::from_srgb(rgb.into_format(), ColorSpace::default());
        Ok(Self {
            hex: hex.to_owned(),
            accent,
            alpha,
            working,
        })
    }

    /// The current wire hex string.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Whether this color belongs to the accent group.
    pub fn accent(&self) -> bool {
        self.accent
    }

    /// The working-space representation.
    pub fn working(&self) -> &WorkingColor {
        &self.working
    }

    /// Mutable access to the working-space representation.
    pub fn working_mut(&mut self) -> &mut WorkingColor {
        &mut self.working
    }

    /// Moves the working representation into another space.
    pub fn convert(&mut self, space: ColorSpace) {
        self.working = self.working.convert(space);
    }

    /// Commits the working representation back to the wire hex.
    pub fn commit(&mut self) {
        let rgb: Srgb<u8> = self.working.to_srgb().into_format();
        self.hex = format_hex(rgb, self.alpha);
    }
}

impl Serialize for PaletteColor {
    /// Detailed serialization: the wire fields plus the working-space value
    /// rendered as a display string.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("PaletteColor", 3)?;
        s.serialize_field("hex", &self.hex)?;
        s.serialize_field("accent", &self.accent)?;
        s.serialize_field("working", &self.working.to_string())?;
        s.end()
    }
}

// ============================================================================
// Variant
// ============================================================================

/// One palette variant: a named, dark-or-light set of colors.
///
/// Color iteration order is the document's insertion order, which also
/// fixes the serialization order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub dark: bool,
    pub colors: IndexMap<String, PaletteColor>,
}

impl Variant {
    /// Flattens the colors to `name -> "{hex}ff"` for the compact snapshot.
    ///
    /// The fully-opaque alpha suffix is always appended; the stored hex is
    /// left untouched for further editing.
    pub fn to_hex(&self) -> IndexMap<String, String> {
        self.colors
            .iter()
            .map(|(name, color)| (name.clone(), format!("{}ff", color.hex())))
            .collect()
    }
}

// ============================================================================
// PaletteSet
// ============================================================================

/// Slot names of the four fixed variants, in declaration order.
pub const VARIANT_SLOTS: [&str; 4] = ["latte", "frappe", "macchiato", "mocha"];

/// A versioned set of exactly four variants.
///
/// The four slots are required fields of the input document; a missing slot
/// is a decode error, never a silent default. Traversal order is the
/// declaration order of the slots, both for editing and serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteSet {
    pub version: String,
    pub latte: Variant,
    pub frappe: Variant,
    pub macchiato: Variant,
    pub mocha: Variant,
}

impl PaletteSet {
    /// Loads a palette set from a JSON document.
    ///
    /// Decoding is lenient to unknown fields but strict about the four
    /// variant slots and each color's `hex`/`accent`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = fs::read(path).map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_slice(&raw).map_err(|source| Error::PaletteDecode {
            path: path.to_owned(),
            source,
        })
    }

    /// The four variants in fixed slot order.
    pub fn variants(&self) -> impl Iterator<Item = (&'static str, &Variant)> {
        [
            ("latte", &self.latte),
            ("frappe", &self.frappe),
            ("macchiato", &self.macchiato),
            ("mocha", &self.mocha),
        ]
        .into_iter()
    }

    /// Mutable traversal in the same fixed order.
    pub fn variants_mut(&mut self) -> impl Iterator<Item = (&'static str, &mut Variant)> {
        [
            ("latte", &mut self.latte),
            ("frappe", &mut self.frappe),
            ("macchiato", &mut self.macchiato),
            ("mocha", &mut self.mocha),
        ]
        .into_iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

//! palette-forge: declarative color-space edits for theme palette sets.
//!
//! This crate loads a palette set of four fixed variants (latte, frappe,
//! macchiato, mocha), applies a TOML-configured list of edits to a chosen
//! working color space (okhsl by default), and serializes the result as
//! pretty-printed JSON snapshots.
//!
//! # Example
//!
//! ```
//! use palette_forge::{apply_edits, Edit, EditConfig, EditKind, PaletteSet};
//!
//! let mut set: PaletteSet = serde_json::from_str(r##"{
//!     "version": "1.0.0",
//!     "latte":     { "name": "Latte",     "dark": false, "colors": { "red": { "hex": "#ff0000", "accent": true } } },
//!     "frappe":    { "name": "Frappe",    "dark": true,  "colors": {} },
//!     "macchiato": { "name": "Macchiato", "dark": true,  "colors": {} },
//!     "mocha":     { "name": "Mocha",     "dark": true,  "colors": {} }
//! }"##).unwrap();
//!
//! let config = EditConfig {
//!     edits: vec![Edit {
//!         variable: "lightness".to_owned(),
//!         value: 0.1,
//!         kind: EditKind::Add,
//!         name: None,
//!         accent: Some(true),
//!     }],
//!     ..EditConfig::default()
//! };
//!
//! // latte is a light variant, so the lightness add is inverted to a darken.
//! apply_edits(&mut set.latte, &config).unwrap();
//! assert_ne!(set.latte.colors["red"].hex(), "#ff0000");
//! ```

mod color;
mod config;
mod edit;
mod encoder;
mod engine;
mod error;
mod model;
mod render;

pub use color::{format_hex, parse_hex, Channel, ColorSpace, WorkingColor};
pub use config::EditConfig;
pub use edit::{Edit, EditKind};
pub use encoder::JsonEncoder;
pub use engine::{apply_edits, customize};
pub use error::Error;
pub use model::{PaletteColor, PaletteSet, Variant, VARIANT_SLOTS};
pub use render::render;

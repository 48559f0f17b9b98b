//! Human-readable terminal rendering of a palette set.
//!
//! Printed to stdout after the snapshots are written, with truecolor
//! swatches so the final palette can be eyeballed directly.

use std::fmt::Write;

use colored::Colorize;
use palette::Srgb;

use crate::model::PaletteSet;

/// Renders the set as an indented, swatch-annotated listing.
pub fn render(set: &PaletteSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "palette".bold(), set.version);
    for (slot, variant) in set.variants() {
        let mode = if variant.dark { "dark" } else { "light" };
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({}, {mode})", slot.bold(), variant.name);
        for (name, color) in &variant.colors {
            let rgb: Srgb<u8> = color.working().to_srgb().into_format();
            let (r, g, b) = rgb.into_components();
            let _ = write!(out, "  {name:<12} {} {}", "    ".on_truecolor(r, g, b), color.hex());
            if color.accent() {
                let _ = write!(out, " {}", "accent".italic());
            }
            let _ = writeln!(out);
        }
    }
    out
}

//! The edit engine: applies a configuration's rules to palette variants.
//!
//! Editing is a two-phase protocol per variant: every color is converted
//! into the configured working space and mutated there by the matching
//! rules, and only once the whole variant has been processed are the wire
//! hex strings committed. The light-inversion flag is computed once per
//! variant and passed into [`Edit::apply`] explicitly; the rule list itself
//! is shared and never mutated.
//!
//! Failures are fail-fast within a variant and name the variant and color
//! they occurred in. Variants that were already committed keep their
//! results.

use tracing::debug;

use crate::color::{Channel, ColorSpace};
use crate::config::EditConfig;
use crate::edit::Edit;
use crate::error::Error;
use crate::model::{PaletteColor, PaletteSet, Variant};

/// Applies the configured edits to every variant of the set, in slot order.
pub fn customize(set: &mut PaletteSet, config: &EditConfig) -> Result<(), Error> {
    for (slot, variant) in set.variants_mut() {
        debug!(slot, variant = %variant.name, "applying edits");
        apply_edits(variant, config)?;
    }
    Ok(())
}

/// Applies the configured edits to a single variant.
///
/// Computes `invert = inverse_edit_light && !dark`, runs every matching
/// rule in configuration order against each color's progressively updated
/// channel value, then commits all colors back to their wire hex.
pub fn apply_edits(variant: &mut Variant, config: &EditConfig) -> Result<(), Error> {
    let variant_name = variant.name.clone();
    let space: ColorSpace = config
        .color_space
        .parse()
        .map_err(|err: Error| err.in_variant(&variant_name))?;
    let invert = config.inverse_edit_light && !variant.dark;

    for (name, color) in &mut variant.colors {
        apply_color(name, color, space, invert, &config.edits)
            .map_err(|err| err.in_color(&variant_name, name))?;
    }

    for color in variant.colors.values_mut() {
        color.commit();
    }
    Ok(())
}

fn apply_color(
    name: &str,
    color: &mut PaletteColor,
    space: ColorSpace,
    invert: bool,
    edits: &[Edit],
) -> Result<(), Error> {
    color.convert(space);
    for edit in edits {
        if !edit.matches(name, color.accent()) {
            continue;
        }
        let channel: Channel = edit.variable.parse()?;
        let current = color.working().get(channel)?;
        let next = edit.apply(current, invert)?;
        color.working_mut().set(channel, next)?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::EditKind;
    use crate::model::tests::sample_set_json;

    fn sample_set() -> PaletteSet {
        serde_json::from_str(&sample_set_json()).unwrap()
    }

    fn rule(variable: &str, value: f32, kind: EditKind) -> Edit {
        Edit {
            variable: variable.to_owned(),
            value,
            kind,
            name: None,
            accent: None,
        }
    }

    fn accent_rule(variable: &str, value: f32, kind: EditKind) -> Edit {
        Edit {
            accent: Some(true),
            ..rule(variable, value, kind)
        }
    }

    fn config_with(edits: Vec<Edit>) -> EditConfig {
        EditConfig {
            edits,
            ..EditConfig::default()
        }
    }

    fn lightness(variant: &Variant, name: &str) -> f32 {
        variant.colors[name].working().get(Channel::Lightness).unwrap()
    }

    #[test]
    fn light_variant_inverts_lightness_add() {
        let mut set = sample_set();
        let before = lightness(&set.latte, "red");
        let config = config_with(vec![accent_rule("lightness", 0.1, EditKind::Add)]);

        // latte is dark=false, so invert=true and the delta becomes -0.1.
        apply_edits(&mut set.latte, &config).unwrap();
        let after = lightness(&set.latte, "red");
        assert!((after - (before - 0.1)).abs() < 1e-6, "{before} -> {after}");
        assert_ne!(set.latte.colors["red"].hex(), "#ff0000");
    }

    #[test]
    fn dark_variant_applies_add_unchanged() {
        let mut set = sample_set();
        let before = lightness(&set.mocha, "red");
        let config = config_with(vec![accent_rule("lightness", 0.1, EditKind::Add)]);

        apply_edits(&mut set.mocha, &config).unwrap();
        let after = lightness(&set.mocha, "red");
        assert!((after - (before + 0.1)).abs() < 1e-6, "{before} -> {after}");
    }

    #[test]
    fn inversion_disabled_by_config_flag() {
        let mut set = sample_set();
        let before = lightness(&set.latte, "red");
        let mut config = config_with(vec![accent_rule("lightness", 0.1, EditKind::Add)]);
        config.inverse_edit_light = false;

        apply_edits(&mut set.latte, &config).unwrap();
        let after = lightness(&set.latte, "red");
        assert!((after - (before + 0.1)).abs() < 1e-6);
    }

    #[test]
    fn selectorless_rule_changes_nothing() {
        let mut set = sample_set();
        let config = config_with(vec![rule("lightness", 0.5, EditKind::Set)]);

        customize(&mut set, &config).unwrap();
        for (_, variant) in set.variants() {
            assert_eq!(variant.colors["red"].hex(), "#ff0000");
            assert_eq!(variant.colors["base"].hex(), "#1e1e2e");
        }
    }

    #[test]
    fn non_matching_colors_are_left_alone() {
        let mut set = sample_set();
        let config = config_with(vec![accent_rule("lightness", 0.4, EditKind::Set)]);

        apply_edits(&mut set.mocha, &config).unwrap();
        assert_ne!(set.mocha.colors["red"].hex(), "#ff0000");
        assert_eq!(set.mocha.colors["base"].hex(), "#1e1e2e");
    }

    #[test]
    fn matching_rules_apply_in_config_order() {
        let mut set = sample_set();
        // set to 0.3, then add 0.1: ordered application yields 0.4.
        let config = config_with(vec![
            accent_rule("lightness", 0.3, EditKind::Set),
            accent_rule("lightness", 0.1, EditKind::Add),
        ]);

        apply_edits(&mut set.mocha, &config).unwrap();
        let after = lightness(&set.mocha, "red");
        assert!((after - 0.4).abs() < 1e-6, "expected 0.4, got {after}");
    }

    #[test]
    fn name_selector_targets_single_color() {
        let mut set = sample_set();
        let config = config_with(vec![Edit {
            name: Some("base".into()),
            ..rule("saturation", 0.0, EditKind::Set)
        }]);

        apply_edits(&mut set.mocha, &config).unwrap();
        assert_eq!(
            set.mocha.colors["base"].working().get(Channel::Saturation).unwrap(),
            0.0
        );
        assert_eq!(set.mocha.colors["red"].hex(), "#ff0000");
    }

    #[test]
    fn okhsv_value_channel_edits() {
        let mut set = sample_set();
        let mut config = config_with(vec![accent_rule("value", 0.5, EditKind::Set)]);
        config.color_space = "okhsv".to_owned();

        apply_edits(&mut set.mocha, &config).unwrap();
        let value = set.mocha.colors["red"].working().get(Channel::Value).unwrap();
        assert_eq!(value, 0.5);
    }

    #[test]
    fn unknown_channel_names_variant_and_color() {
        let mut set = sample_set();
        let config = config_with(vec![accent_rule("brightness", 0.1, EditKind::Add)]);

        let err = apply_edits(&mut set.mocha, &config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Mocha"), "{msg}");
        assert!(msg.contains("red"), "{msg}");
        assert!(inner_message(&err).contains("unknown channel"), "{msg}");
    }

    #[test]
    fn unknown_color_space_fails_before_editing() {
        let mut set = sample_set();
        let mut config = config_with(vec![accent_rule("lightness", 0.1, EditKind::Add)]);
        config.color_space = "oklch".to_owned();

        let err = apply_edits(&mut set.mocha, &config).unwrap_err();
        assert!(err.to_string().contains("Mocha"));
        assert_eq!(set.mocha.colors["red"].hex(), "#ff0000", "no partial commit");
    }

    #[test]
    fn multiply_by_zero_on_light_variant_fails() {
        let mut set = sample_set();
        let config = config_with(vec![accent_rule("lightness", 0.0, EditKind::Multiply)]);

        let err = apply_edits(&mut set.latte, &config).unwrap_err();
        assert!(inner_message(&err).contains("undefined under light inversion"));
    }

    /// Unwraps the per-color context to get at the underlying message.
    fn inner_message(err: &Error) -> String {
        match err {
            Error::Edit { source, .. } | Error::Variant { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

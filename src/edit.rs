//! Declarative edit rules applied to palette colors.
//!
//! An [`Edit`] names a working-space channel, an operation and a target
//! value, plus an optional selector (by color name or by accent flag).
//! Rules are decoded from the TOML edit configuration and evaluated as pure
//! functions; the per-variant light-inversion flag is passed in explicitly
//! rather than stored on the rule, so one rule list is shared untouched
//! across all variants.

use serde::Deserialize;

use crate::error::Error;

// ============================================================================
// EditKind
// ============================================================================

/// The three edit operations.
///
/// `value` is accepted as a config alias for `set` for compatibility with
/// older edit files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// Replace the channel with the rule's value.
    #[default]
    #[serde(alias = "value")]
    Set,
    /// Add the rule's value to the channel (sign-flipped under inversion).
    Add,
    /// Multiply the channel by the rule's value (reciprocal under inversion).
    Multiply,
}

// ============================================================================
// Edit
// ============================================================================

/// A single edit rule from the configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Edit {
    /// Channel name, e.g. `"lightness"`, `"l"`, `"saturation"`, `"hue"`.
    pub variable: String,

    /// Operand of the edit operation.
    pub value: f32,

    /// Which operation to perform. Defaults to `set`; the config may also
    /// spell the field `type`.
    #[serde(default, alias = "type")]
    pub kind: EditKind,

    /// Selects colors by exact name.
    #[serde(default)]
    pub name: Option<String>,

    /// Selects colors by their accent classification.
    #[serde(default)]
    pub accent: Option<bool>,
}

impl Edit {
    /// Whether this rule applies to the given color.
    ///
    /// Name and accent selectors are independent and combined with OR; a
    /// rule with neither selector set matches nothing.
    pub fn matches(&self, color_name: &str, accent: bool) -> bool {
        self.name.as_deref() == Some(color_name) || self.accent == Some(accent)
    }

    /// Applies the operation to a current channel value.
    ///
    /// `invert` is the per-variant light-inversion flag; it only takes
    /// effect on lightness-like channels, where it negates an `add` and
    /// takes the reciprocal of a `multiply` so a rule authored for dark
    /// variants darkens light ones instead. A `multiply` by zero under
    /// inversion is a division by zero and fails explicitly.
    pub fn apply(&self, current: f32, invert: bool) -> Result<f32, Error> {
        let inverse = invert && self.is_lightness();
        match self.kind {
            EditKind::Set => Ok(self.value),
            EditKind::Add => {
                let v = if inverse { -self.value } else { self.value };
                Ok(current + v)
            }
            EditKind::Multiply => {
                if inverse {
                    if self.value == 0.0 {
                        return Err(Error::MultiplyByZero {
                            variable: self.variable.clone(),
                        });
                    }
                    Ok(current / self.value)
                } else {
                    Ok(current * self.value)
                }
            }
        }
    }

    fn is_lightness(&self) -> bool {
        matches!(self.variable.as_str(), "l" | "lightness")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(variable: &str, value: f32, kind: EditKind) -> Edit {
        Edit {
            variable: variable.to_owned(),
            value,
            kind,
            name: None,
            accent: None,
        }
    }

    #[test]
    fn set_ignores_current_and_invert() {
        let rule = edit("lightness", 0.4, EditKind::Set);
        assert_eq!(rule.apply(0.9, false).unwrap(), 0.4);
        assert_eq!(rule.apply(0.1, true).unwrap(), 0.4);
    }

    #[test]
    fn add_without_invert() {
        let rule = edit("lightness", 0.1, EditKind::Add);
        assert_eq!(rule.apply(0.5, false).unwrap(), 0.6);
    }

    #[test]
    fn add_inverts_on_lightness_only() {
        let light = edit("lightness", 0.1, EditKind::Add);
        assert_eq!(light.apply(0.5, true).unwrap(), 0.4);
        let short = edit("l", 0.1, EditKind::Add);
        assert_eq!(short.apply(0.5, true).unwrap(), 0.4);
        let sat = edit("saturation", 0.1, EditKind::Add);
        assert_eq!(sat.apply(0.5, true).unwrap(), 0.6);
    }

    #[test]
    fn multiply_without_invert() {
        let rule = edit("lightness", 2.0, EditKind::Multiply);
        assert_eq!(rule.apply(0.3, false).unwrap(), 0.6);
    }

    #[test]
    fn multiply_inverts_to_division_on_lightness() {
        let rule = edit("lightness", 2.0, EditKind::Multiply);
        assert_eq!(rule.apply(0.6, true).unwrap(), 0.3);
        let hue = edit("hue", 2.0, EditKind::Multiply);
        assert_eq!(hue.apply(0.6, true).unwrap(), 1.2);
    }

    #[test]
    fn multiply_by_zero_under_inversion_fails() {
        let rule = edit("lightness", 0.0, EditKind::Multiply);
        assert!(matches!(
            rule.apply(0.5, true),
            Err(Error::MultiplyByZero { .. })
        ));
        // Without inversion a zero multiplier is a plain multiply.
        assert_eq!(rule.apply(0.5, false).unwrap(), 0.0);
    }

    #[test]
    fn selector_is_or_of_name_and_accent() {
        let mut rule = edit("lightness", 0.1, EditKind::Add);
        rule.name = Some("red".into());
        rule.accent = Some(true);
        assert!(rule.matches("red", false)); // name path
        assert!(rule.matches("blue", true)); // accent path
        assert!(!rule.matches("blue", false));
    }

    #[test]
    fn no_selector_matches_nothing() {
        let rule = edit("lightness", 0.1, EditKind::Add);
        assert!(!rule.matches("red", true));
        assert!(!rule.matches("red", false));
    }

    #[test]
    fn accent_false_selector_matches_non_accents() {
        let mut rule = edit("lightness", 0.1, EditKind::Add);
        rule.accent = Some(false);
        assert!(rule.matches("base", false));
        assert!(!rule.matches("base", true));
    }

    #[test]
    fn decodes_from_toml_with_defaults() {
        let rule: Edit = toml::from_str(
            r#"
            variable = "lightness"
            value = 0.1
            "#,
        )
        .unwrap();
        assert_eq!(rule.kind, EditKind::Set);
        assert!(rule.name.is_none());
        assert!(rule.accent.is_none());
    }

    #[test]
    fn decodes_type_and_value_aliases() {
        let rule: Edit = toml::from_str(
            r#"
            variable = "l"
            value = 0.9
            type = "value"
            accent = true
            "#,
        )
        .unwrap();
        assert_eq!(rule.kind, EditKind::Set);
        assert_eq!(rule.accent, Some(true));

        let rule: Edit = toml::from_str(
            r#"
            variable = "saturation"
            value = 1.2
            kind = "multiply"
            name = "red"
            "#,
        )
        .unwrap();
        assert_eq!(rule.kind, EditKind::Multiply);
        assert_eq!(rule.name.as_deref(), Some("red"));
    }
}

//! The stylesheet: named style rules and the cascade resolver.
//!
//! A stylesheet maps selector names to [`Style`] bags, one map per
//! pseudo-class dimension. Resolution is a permissive left-to-right fold:
//! [`Stylesheet::get_style`] splits a space-delimited class list and merges
//! every *known* class onto an accumulator seeded from the always-present
//! `"default"` and `"*"` entries. Unknown classes are skipped silently so
//! utility classes compose freely. There is no specificity scoring; the
//! later class in the list wins ties field by field.
//!
//! The stylesheet performs no locking. Callers mutating it (hot-reload)
//! must serialize against layout passes on the UI thread.

use std::collections::HashMap;
use std::str::FromStr;

use draft_common::warning::warn_once;

use crate::style::{PropertyName, Style};
use crate::value::{Color, PropertyValue, UnitValue};

/// Pseudo-class dimensions a rule can target.
///
/// The cascade engine only ever resolves static class membership; whether a
/// node is actually hovered is tracked by widget code, which asks for the
/// hover overlay explicitly via [`Stylesheet::get_style_pseudo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PseudoClass {
    /// No pseudo-class: the base dimension.
    #[default]
    None,
    /// The `:hover` dimension.
    Hover,
}

impl PseudoClass {
    const COUNT: usize = 2;

    const fn index(self) -> usize {
        match self {
            Self::None => 0,
            Self::Hover => 1,
        }
    }

    /// Parse a pseudo-class name (the text after `:` in a selector).
    /// Unrecognized names fall back to the base dimension.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "hover" => Self::Hover,
            _ => Self::None,
        }
    }
}

/// Named style rules plus the cascade resolver.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Selector name → style, one map per pseudo-class dimension.
    styles: [HashMap<String, Style>; PseudoClass::COUNT],
}

impl Stylesheet {
    /// Create a stylesheet seeded with the `"default"` and `"*"` entries
    /// that base every cascade.
    #[must_use]
    pub fn new() -> Self {
        let mut sheet = Self {
            styles: [HashMap::new(), HashMap::new()],
        };
        sheet.seed();
        sheet
    }

    /// Engine defaults live under `"default"`; `"*"` starts empty and is
    /// the hook for user-defined universal rules.
    fn seed(&mut self) {
        let default_style = Style {
            color: Some(Color::WHITE),
            background_color: Some(Color::rgba(0.2, 0.2, 0.2, 1.0)),
            padding_left: Some(UnitValue::ZERO),
            padding_top: Some(UnitValue::ZERO),
            padding_right: Some(UnitValue::ZERO),
            padding_bottom: Some(UnitValue::ZERO),
            margin_left: Some(UnitValue::ZERO),
            margin_top: Some(UnitValue::ZERO),
            margin_right: Some(UnitValue::ZERO),
            margin_bottom: Some(UnitValue::ZERO),
            visibility: Some(true),
            opacity: Some(1.0),
            font_size: Some(UnitValue::px(22.0)),
            ..Style::default()
        };
        self.add_style("default", default_style);
        self.add_style("*", Style::default());
    }

    /// Register (or replace) a style under a selector name in the base
    /// dimension.
    pub fn add_style(&mut self, name: impl Into<String>, style: Style) {
        let _ = self.styles[PseudoClass::None.index()].insert(name.into(), style);
    }

    /// Remove a style from every pseudo dimension.
    ///
    /// Asking to remove a name that was never registered is a programmer
    /// error, caught in debug builds.
    pub fn remove_style(&mut self, name: &str) {
        let present = self.styles.iter().any(|map| map.contains_key(name));
        debug_assert!(present, "style '{name}' doesn't exist on this stylesheet");
        for map in &mut self.styles {
            let _ = map.remove(name);
        }
    }

    /// Drop every rule and reseed the defaults. Used for hot-reload before
    /// re-parsing; the caller must serialize this against layout passes.
    pub fn clear(&mut self) {
        for map in &mut self.styles {
            map.clear();
        }
        self.seed();
    }

    /// Look up the style registered under an exact selector name.
    #[must_use]
    pub fn style(&self, name: &str, pseudo: PseudoClass) -> Option<&Style> {
        self.styles[pseudo.index()].get(name)
    }

    /// Iterate the selector names registered in one pseudo dimension, in
    /// arbitrary order.
    pub fn selectors(&self, pseudo: PseudoClass) -> impl Iterator<Item = &str> {
        self.styles[pseudo.index()].keys().map(String::as_str)
    }

    /// Set a single property on a rule, creating the rule if needed.
    ///
    /// This is the parser's entry point. A selector chain keys its rule by
    /// the *final* segment; leading segments are accepted but never
    /// evaluated (the format has no combinator concept). Unknown property
    /// names and mismatched value types warn once and are skipped; broken
    /// declarations must never poison the rest of the sheet.
    pub fn set(
        &mut self,
        selectors: &[String],
        pseudo: PseudoClass,
        property: &str,
        value: &PropertyValue,
    ) {
        debug_assert!(!selectors.is_empty(), "cannot have an empty rule");
        let Some(key) = selectors.last() else { return };

        let Ok(name) = PropertyName::from_str(property) else {
            warn_once("CSS", &format!("unknown property '{property}' ignored"));
            return;
        };

        let style = self.styles[pseudo.index()].entry(key.clone()).or_default();
        if !style.apply(name, value) {
            warn_once(
                "CSS",
                &format!("value {value:?} doesn't fit property '{property}'"),
            );
        }
    }

    /// The base of every cascade: `"default"` merged with `"*"`.
    #[must_use]
    pub fn base_style(&self) -> Style {
        let base_dimension = &self.styles[PseudoClass::None.index()];
        let mut accumulator = base_dimension.get("default").cloned().unwrap_or_default();
        if let Some(universal) = base_dimension.get("*") {
            accumulator.merge(universal);
        }
        accumulator
    }

    /// Resolve a space-delimited class list into one cascaded style.
    ///
    /// Classes apply in list order; the later class wins ties per field.
    /// Unknown classes are skipped. An empty list returns the base style.
    #[must_use]
    pub fn get_style(&self, identifiers: &str) -> Style {
        let mut accumulator = self.base_style();
        self.fold(&mut accumulator, identifiers, PseudoClass::None);
        accumulator
    }

    /// Resolve a class list with a pseudo-class overlay: the base cascade
    /// first, then the same fold through the pseudo dimension on top.
    /// Pseudo rules are usually partial bags, so only the fields they set
    /// change.
    #[must_use]
    pub fn get_style_pseudo(&self, identifiers: &str, pseudo: PseudoClass) -> Style {
        let mut style = self.get_style(identifiers);
        if pseudo != PseudoClass::None {
            self.fold(&mut style, identifiers, pseudo);
        }
        style
    }

    /// Merge every known class of `identifiers` from one pseudo dimension
    /// onto the accumulator, in list order.
    fn fold(&self, accumulator: &mut Style, identifiers: &str, pseudo: PseudoClass) {
        let dimension = &self.styles[pseudo.index()];
        for class in identifiers.split_whitespace() {
            if let Some(matched) = dimension.get(class) {
                accumulator.merge(matched);
            }
        }
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_entries_exist() {
        let sheet = Stylesheet::new();
        assert!(sheet.style("default", PseudoClass::None).is_some());
        assert!(sheet.style("*", PseudoClass::None).is_some());
    }

    #[test]
    fn empty_identifiers_yield_base_style() {
        let sheet = Stylesheet::new();
        assert_eq!(sheet.get_style(""), sheet.base_style());
    }

    #[test]
    fn clear_reseeds_defaults() {
        let mut sheet = Stylesheet::new();
        sheet.add_style("btn", Style::default());
        sheet.clear();
        assert!(sheet.style("btn", PseudoClass::None).is_none());
        assert!(sheet.style("default", PseudoClass::None).is_some());
    }
}

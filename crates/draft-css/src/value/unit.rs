//! Dimensions in pixels, percent, or auto.

use serde::Serialize;

/// One CSS-style dimension: an absolute pixel count, a fraction of some
/// reference extent, or `auto`.
///
/// `Percent` stores a *fraction*, not a 0–100 value: `50%` parses to
/// `Percent(0.5)`. `Auto` carries no magnitude; what it means is decided by
/// whoever resolves it (zero for margins and padding, shrink-to-content for
/// widths and heights).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum UnitValue {
    /// An absolute length in pixels. The reference extent is ignored.
    Pixels(f32),
    /// A fraction of the reference extent.
    Percent(f32),
    /// Resolution deferred to the caller's policy.
    Auto,
}

impl UnitValue {
    /// Zero pixels, the default for margins and padding.
    pub const ZERO: Self = Self::Pixels(0.0);

    /// A pixel dimension. Mirrors the `N_pixels` literal suffix.
    #[must_use]
    pub const fn px(value: f32) -> Self {
        Self::Pixels(value)
    }

    /// A percent dimension from a 0–100 value. Mirrors the `N_percent`
    /// literal suffix: `UnitValue::percent(50.0)` stores `0.5`.
    #[must_use]
    pub const fn percent(value: f32) -> Self {
        Self::Percent(value / 100.0)
    }

    /// Resolve against a reference extent. `Auto` resolves to zero; use
    /// [`UnitValue::resolve_or`] where auto has a content-derived meaning.
    #[must_use]
    pub fn resolve(self, reference: f32) -> f32 {
        self.resolve_or(reference, 0.0)
    }

    /// Resolve against a reference extent, with an explicit fallback for
    /// `Auto`.
    #[must_use]
    pub fn resolve_or(self, reference: f32, auto: f32) -> f32 {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(fraction) => fraction * reference,
            Self::Auto => auto,
        }
    }

    /// Whether this value is `auto`.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Whether this value is an absolute pixel length.
    #[must_use]
    pub const fn is_pixels(self) -> bool {
        matches!(self, Self::Pixels(_))
    }

    /// Whether this value is a fraction of the reference extent.
    #[must_use]
    pub const fn is_percent(self) -> bool {
        matches!(self, Self::Percent(_))
    }
}

impl Default for UnitValue {
    fn default() -> Self {
        Self::Auto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_ignore_the_reference() {
        let v = UnitValue::px(24.0);
        assert!((v.resolve(0.0) - 24.0).abs() < f32::EPSILON);
        assert!((v.resolve(1280.0) - 24.0).abs() < f32::EPSILON);
    }

    #[test]
    fn percent_scales_with_the_reference() {
        let v = UnitValue::percent(50.0);
        assert!((v.resolve(200.0) - 100.0).abs() < f32::EPSILON);
        assert!((v.resolve(0.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn auto_takes_the_fallback() {
        assert!((UnitValue::Auto.resolve(640.0)).abs() < f32::EPSILON);
        assert!((UnitValue::Auto.resolve_or(640.0, 42.0) - 42.0).abs() < f32::EPSILON);
    }
}

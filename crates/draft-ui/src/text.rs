//! Text measurement for layout.
//!
//! Labels and buttons need text extents before any glyph is rasterized.
//! Real metrics come from the host's font assets; when a font is missing or
//! still loading, fixed-ratio approximations keep layout stable instead of
//! collapsing text boxes to zero.

use std::sync::Arc;

use draft_assets::Font;

/// Font metrics interface for text measurement during layout.
pub trait FontMetrics {
    /// Total advance width of `text` at the given font size, matching the
    /// cursor advancement the text renderer will use.
    fn text_width(&self, text: &str, font_size: f32) -> f32;

    /// Line height for the given font size.
    fn line_height(&self, font_size: f32) -> f32;
}

/// Approximate font metrics using fixed ratios.
///
/// Without font data we assume the average advance of proportional Latin
/// glyphs, about 0.6× the font size, and a 1.2× line height. Used as the
/// fallback when no font asset is available, and in tests.
pub struct ApproximateFontMetrics;

impl FontMetrics for ApproximateFontMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        const CHAR_WIDTH_RATIO: f32 = 0.6;
        text.chars().count() as f32 * font_size * CHAR_WIDTH_RATIO
    }

    fn line_height(&self, font_size: f32) -> f32 {
        const LINE_HEIGHT_RATIO: f32 = 1.2;
        font_size * LINE_HEIGHT_RATIO
    }
}

/// Metrics backed by a loaded font asset's ratio data.
pub struct AssetFontMetrics {
    font: Arc<Font>,
}

impl AssetFontMetrics {
    /// Wrap a loaded font asset.
    #[must_use]
    pub const fn new(font: Arc<Font>) -> Self {
        Self { font }
    }
}

impl FontMetrics for AssetFontMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.font.char_width_ratio
    }

    fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.font.line_height_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approximate_width_scales_with_length_and_size() {
        let metrics = ApproximateFontMetrics;
        let short = metrics.text_width("ab", 10.0);
        let long = metrics.text_width("abcd", 10.0);
        assert!((long - 2.0 * short).abs() < f32::EPSILON);
        assert!(metrics.text_width("ab", 20.0) > short);
    }

    #[test]
    fn asset_metrics_use_font_ratios() {
        let font = Arc::new(Font { char_width_ratio: 0.5, line_height_ratio: 1.0 });
        let metrics = AssetFontMetrics::new(font);
        assert!((metrics.text_width("abcd", 10.0) - 20.0).abs() < f32::EPSILON);
        assert!((metrics.line_height(10.0) - 10.0).abs() < f32::EPSILON);
    }
}

//! Per-node layout metrics, rebuilt every pass.

use serde::Serialize;

use crate::geometry::{EdgeSizes, Rect, UnitRect};

/// The resolved boxes of one node for one layout pass.
///
/// The fluid half records the style-declared box in semantic units; the
/// concrete half is the pixel result after resolution and clamping. Metrics
/// are rebuilt from scratch on every pass; nothing is diffed or persisted
/// beyond the frame except as input to hover hit-testing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Metrics {
    /// The declared box in pixels/percent/auto, relative to the parent
    /// content box.
    pub fluid: UnitRect,
    /// The pixel result of the concrete phase.
    pub concrete: ConcreteBox,
}

/// Pixel boxes produced by the concrete phase.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ConcreteBox {
    /// The outer (margin) box: position clamped into the parent region,
    /// size clamped into any declared min/max bounds.
    pub outer: Rect,
    /// The inner box: outer inset by margins. Backgrounds fill this box.
    pub inner: Rect,
    /// The content box: inner inset by padding. Children resolve against
    /// this box; text and images are placed at its origin.
    pub content: Rect,
    /// Resolved padding, kept for the paint walk.
    pub padding: EdgeSizes,
}

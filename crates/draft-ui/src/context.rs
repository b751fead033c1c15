//! The per-pass solver context.

use draft_assets::AssetCache;
use draft_css::stylesheet::Stylesheet;

use crate::geometry::Rect;

/// Everything a layout or paint pass needs besides the tree itself.
///
/// Contexts are cheap, borrow-only, and never outlive a pass. The
/// stylesheet and asset cache are read-only for the duration; callers who
/// hot-reload either must do so between passes on the same thread.
pub struct Context<'a> {
    /// The stylesheet nodes resolve against.
    pub stylesheet: &'a Stylesheet,
    /// Asset handles for textures and fonts.
    pub assets: &'a AssetCache,
    /// The window-space pixel bounds the root node fills.
    pub viewport: Rect,
}

impl<'a> Context<'a> {
    /// Build a context over a stylesheet, an asset cache, and a viewport.
    #[must_use]
    pub const fn new(stylesheet: &'a Stylesheet, assets: &'a AssetCache, viewport: Rect) -> Self {
        Self {
            stylesheet,
            assets,
            viewport,
        }
    }
}

//! The two-phase layout solver.
//!
//! One pass fully resolves the tree: a bottom-up *preferred-size* query
//! answers auto widths and heights from content, then a single top-down
//! *concrete* walk converts every declared value to pixels against the
//! parent's content box, clamps, and recurses. There is no convergence
//! loop; work is O(nodes), and a sibling's auto size can never depend on
//! another sibling's resolved size.
//!
//! The solver has no error channel. Degenerate geometry (negative sizes
//! from inverted insets, auto percent against auto) propagates into the
//! metrics and clips or collapses visually; it is never "corrected".

use draft_assets::{Font, Texture};

use crate::context::Context;
use crate::geometry::{Rect, UnitRect};
use crate::metrics::ConcreteBox;
use crate::resolve::{ResolvedStyle, resolve_style};
use crate::text::{ApproximateFontMetrics, AssetFontMetrics, FontMetrics};
use crate::tree::{NodeId, NodeKind, UiTree};

/// Resolve every node's metrics for this pass.
///
/// The root node always takes the viewport as its outer box (its declared
/// position and size are ignored); everything below resolves normally.
pub fn solve(tree: &mut UiTree, ctx: &Context<'_>) {
    let root = tree.root();
    let style = resolve_style(tree, root, ctx.stylesheet);
    let padding = style
        .padding
        .resolve(ctx.viewport.width, ctx.viewport.height);

    let outer = ctx.viewport;
    let content = outer.inset(padding);
    if let Some(node) = tree.get_mut(root) {
        node.metrics.fluid = declared_box(&style);
        node.metrics.concrete = ConcreteBox {
            outer,
            inner: outer,
            content,
            padding,
        };
    }

    solve_children(tree, root, ctx, content);
}

/// The style-declared box, kept in the metrics for inspection.
const fn declared_box(style: &ResolvedStyle) -> UnitRect {
    UnitRect {
        x: style.left,
        y: style.top,
        width: style.width,
        height: style.height,
    }
}

/// Concrete-phase resolution for one node.
///
/// `forced_origin` overrides the node's own anchors (and skips the
/// containment clamp): scroll panes place their children directly.
fn solve_node(
    tree: &mut UiTree,
    id: NodeId,
    ctx: &Context<'_>,
    parent: Rect,
    forced_origin: Option<(f32, f32)>,
) {
    let style = resolve_style(tree, id, ctx.stylesheet);
    let margin = style.margin.resolve(parent.width, parent.height);
    let padding = style.padding.resolve(parent.width, parent.height);

    // The bottom-up query runs only when something is actually auto.
    let (auto_w, auto_h) = if style.width.is_auto() || style.height.is_auto() {
        preferred_outer_size(tree, id, ctx)
    } else {
        (0.0, 0.0)
    };

    let mut outer_w = style.width.resolve_or(parent.width, auto_w);
    let mut outer_h = style.height.resolve_or(parent.height, auto_h);

    // Only declared bounds clamp. Max first, then min, so a contradictory
    // pair resolves in favor of the minimum.
    if let Some(max) = style.max_width {
        outer_w = outer_w.min(max.resolve(parent.width));
    }
    if let Some(min) = style.min_width {
        outer_w = outer_w.max(min.resolve(parent.width));
    }
    if let Some(max) = style.max_height {
        outer_h = outer_h.min(max.resolve(parent.height));
    }
    if let Some(min) = style.min_height {
        outer_h = outer_h.max(min.resolve(parent.height));
    }

    let (x, y) = forced_origin.unwrap_or_else(|| {
        let x = if style.left.is_auto() {
            style.right.map_or(parent.x, |right| {
                parent.right() - right.resolve(parent.width) - outer_w
            })
        } else {
            parent.x + style.left.resolve(parent.width)
        };
        let y = if style.top.is_auto() {
            style.bottom.map_or(parent.y, |bottom| {
                parent.bottom() - bottom.resolve(parent.height) - outer_h
            })
        } else {
            parent.y + style.top.resolve(parent.height)
        };

        // Keep the box inside the parent's region where possible. Upper
        // bound first: an oversized box pins to the parent origin and
        // overflows right/down, where the scissor can clip it.
        let x = x.min(parent.right() - outer_w).max(parent.x);
        let y = y.min(parent.bottom() - outer_h).max(parent.y);
        (x, y)
    });

    let outer = Rect::new(x, y, outer_w, outer_h);
    let inner = outer.inset(margin);
    let content = inner.inset(padding);

    if let Some(node) = tree.get_mut(id) {
        node.metrics.fluid = declared_box(&style);
        node.metrics.concrete = ConcreteBox {
            outer,
            inner,
            content,
            padding,
        };
    }

    solve_children(tree, id, ctx, content);
}

/// Recurse into a node's children with its content box as their frame.
fn solve_children(tree: &mut UiTree, id: NodeId, ctx: &Context<'_>, content: Rect) {
    let kind = tree.get(id).map(|node| node.kind.clone());
    let children: Vec<NodeId> = tree.children(id).to_vec();

    match kind {
        Some(NodeKind::ScrollPane { scroll }) => {
            // Scroll panes ignore their children's declared anchors and
            // stack them vertically by preferred height, shifted by the
            // scroll fraction of whatever overflows the content box.
            let heights: Vec<f32> = children
                .iter()
                .map(|&child| preferred_outer_size(tree, child, ctx).1)
                .collect();
            let total: f32 = heights.iter().sum();
            let overflow = (total - content.height).max(0.0);
            let scroll_offset = scroll.clamp(0.0, 1.0) * overflow;

            let mut cursor = 0.0;
            for (&child, &height) in children.iter().zip(&heights) {
                let origin = (content.x, content.y + cursor - scroll_offset);
                solve_node(tree, child, ctx, content, Some(origin));
                cursor += height;
            }
        }
        _ => {
            for child in children {
                solve_node(tree, child, ctx, content, None);
            }
        }
    }
}

/// Bottom-up preferred outer size, in pixels.
///
/// This is the auto-sizing query: pixel components count as declared,
/// percent components resolve to zero (a fraction of a not-yet-sized
/// parent has no meaningful preferred extent), and auto defers to content:
/// text extents for labels, texture dimensions for pictures, child
/// extents for containers.
fn preferred_outer_size(tree: &UiTree, id: NodeId, ctx: &Context<'_>) -> (f32, f32) {
    let style = resolve_style(tree, id, ctx.stylesheet);
    let margin = style.margin.resolve(0.0, 0.0);
    let padding = style.padding.resolve(0.0, 0.0);

    let kind = tree.get(id).map(|node| &node.kind);
    let (content_w, content_h) = match kind {
        Some(NodeKind::Label { text }) => text_extent(ctx, &style, text),
        Some(NodeKind::Button { label }) => text_extent(ctx, &style, label),
        Some(NodeKind::Picture { image }) => ctx
            .assets
            .get::<Texture>(image, true)
            .get()
            .map_or((0.0, 0.0), |texture| {
                (texture.width as f32, texture.height as f32)
            }),
        Some(NodeKind::ScrollPane { .. }) => {
            let mut width: f32 = 0.0;
            let mut height: f32 = 0.0;
            for &child in tree.children(id) {
                let (w, h) = preferred_outer_size(tree, child, ctx);
                width = width.max(w);
                height += h;
            }
            (width, height)
        }
        Some(NodeKind::Panel | NodeKind::Rectangle) | None => {
            // Max extent of (child offset + child preferred size) over
            // all children.
            let mut width: f32 = 0.0;
            let mut height: f32 = 0.0;
            for &child in tree.children(id) {
                let child_style = resolve_style(tree, child, ctx.stylesheet);
                let (w, h) = preferred_outer_size(tree, child, ctx);
                width = width.max(child_style.left.resolve(0.0) + w);
                height = height.max(child_style.top.resolve(0.0) + h);
            }
            (width, height)
        }
    };

    let outer_w = if style.width.is_auto() {
        content_w + padding.horizontal()
    } else {
        style.width.resolve(0.0)
    };
    let outer_h = if style.height.is_auto() {
        content_h + padding.vertical()
    } else {
        style.height.resolve(0.0)
    };

    (
        outer_w + margin.horizontal(),
        outer_h + margin.vertical(),
    )
}

/// Measure a text run with the node's font, or the fixed-ratio fallback
/// while the font is missing or still loading.
fn text_extent(ctx: &Context<'_>, style: &ResolvedStyle, text: &str) -> (f32, f32) {
    let metrics = font_metrics(ctx, style);
    (
        metrics.text_width(text, style.font_size),
        metrics.line_height(style.font_size),
    )
}

/// The font metrics for a resolved style: the loaded font asset when there
/// is one, approximate ratios otherwise.
pub(crate) fn font_metrics(ctx: &Context<'_>, style: &ResolvedStyle) -> Box<dyn FontMetrics> {
    if let Some(path) = &style.font {
        if let Some(font) = ctx.assets.get::<Font>(path, true).get() {
            return Box::new(AssetFontMetrics::new(font));
        }
    }
    Box::new(ApproximateFontMetrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use draft_assets::AssetCache;

    #[test]
    fn percent_in_preferred_query_counts_as_zero() {
        let sheet = draft_css::parse("wide { width: 50%; }").unwrap();
        let assets = AssetCache::new();
        let ctx = Context::new(&sheet, &assets, Rect::new(0.0, 0.0, 100.0, 100.0));

        let mut tree = UiTree::new();
        let child = tree.alloc(NodeKind::Rectangle, &["wide"]);
        tree.append_child(tree.root(), child);

        assert_eq!(preferred_outer_size(&tree, child, &ctx), (0.0, 0.0));
    }
}

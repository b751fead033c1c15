//! Render-command emission.
//!
//! A second tree walk after the solver: parents emit before children
//! (painter's order), siblings emit in insertion order, and an invisible
//! node prunes its whole subtree. Children that overflow their parent's
//! content box are bracketed in a scissor pair; scroll panes always are.
//!
//! The walk dereferences asset handles here and nowhere earlier: a texture
//! that is missing or still loading emits an untextured sprite (the sink
//! draws it as a solid quad), and a missing font falls back to approximate
//! metrics for text placement.

use draft_assets::{Font, Texture};
use draft_common::warning::warn_once;
use draft_css::value::Color;

use crate::commands::{CommandList, RenderCommand};
use crate::context::Context;
use crate::geometry::Rect;
use crate::resolve::{ResolvedStyle, resolve_style};
use crate::solver::font_metrics;
use crate::tree::{NodeId, NodeKind, UiTree};

/// Emit the full command list for a solved tree.
#[must_use]
pub fn emit_commands(tree: &UiTree, ctx: &Context<'_>) -> CommandList {
    let mut list = CommandList::new();
    emit_node(tree, tree.root(), ctx, &mut list);
    list
}

fn emit_node(tree: &UiTree, id: NodeId, ctx: &Context<'_>, list: &mut CommandList) {
    let Some(node) = tree.get(id) else { return };
    let style = resolve_style(tree, id, ctx.stylesheet);
    if !style.visible {
        return;
    }

    let boxes = node.metrics.concrete;

    match &node.kind {
        NodeKind::Panel | NodeKind::ScrollPane { .. } => {
            list.push(background_sprite(ctx, &style, boxes.inner));
        }
        NodeKind::Rectangle => {
            list.push(RenderCommand::Sprite {
                texture: None,
                texture_path: None,
                position: (boxes.inner.x, boxes.inner.y),
                size: (boxes.inner.width, boxes.inner.height),
                color: tint(style.background_color, style.opacity),
            });
        }
        NodeKind::Picture { image } => {
            let handle = ctx.assets.get::<Texture>(image, true);
            if !handle.is_loaded() {
                warn_once("UI", &format!("texture '{image}' not loaded; drawing solid quad"));
            }
            list.push(RenderCommand::Sprite {
                texture: handle.get(),
                texture_path: Some(image.clone()),
                position: (boxes.inner.x, boxes.inner.y),
                size: (boxes.inner.width, boxes.inner.height),
                // Pictures tint with the foreground color so stylesheets
                // can fade or recolor them.
                color: tint(style.color, style.opacity),
            });
        }
        NodeKind::Label { text } => {
            list.push(text_command(ctx, &style, text, boxes.content.x, boxes.content.y));
        }
        NodeKind::Button { label } => {
            list.push(background_sprite(ctx, &style, boxes.inner));

            // Center the caption in the content box.
            let metrics = font_metrics(ctx, &style);
            let text_w = metrics.text_width(label, style.font_size);
            let text_h = metrics.line_height(style.font_size);
            let x = boxes.content.x + (boxes.content.width - text_w) / 2.0;
            let y = boxes.content.y + (boxes.content.height - text_h) / 2.0;
            list.push(text_command(ctx, &style, label, x, y));
        }
    }

    let children = tree.children(id);
    if children.is_empty() {
        return;
    }

    let clip = matches!(node.kind, NodeKind::ScrollPane { .. })
        || children_overflow(tree, boxes.content, children);
    if clip {
        list.push(RenderCommand::BeginScissor { rect: boxes.content });
    }
    for &child in children {
        emit_node(tree, child, ctx, list);
    }
    if clip {
        list.push(RenderCommand::EndScissor);
    }
}

/// The background quad shared by panel-like kinds: the fill color plus the
/// `background-image` texture when one is declared.
fn background_sprite(ctx: &Context<'_>, style: &ResolvedStyle, inner: Rect) -> RenderCommand {
    let (texture, texture_path) = match &style.background_image {
        Some(path) => (ctx.assets.get::<Texture>(path, true).get(), Some(path.clone())),
        None => (None, None),
    };
    RenderCommand::Sprite {
        texture,
        texture_path,
        position: (inner.x, inner.y),
        size: (inner.width, inner.height),
        color: tint(style.background_color, style.opacity),
    }
}

/// A text command at an explicit position.
fn text_command(
    ctx: &Context<'_>,
    style: &ResolvedStyle,
    text: &str,
    x: f32,
    y: f32,
) -> RenderCommand {
    let font = style
        .font
        .as_ref()
        .and_then(|path| ctx.assets.get::<Font>(path, true).get());
    RenderCommand::Text {
        text: text.to_string(),
        font,
        font_size: style.font_size,
        position: (x, y),
        color: tint(style.color, style.opacity),
    }
}

/// Pre-multiply opacity into a color's alpha.
fn tint(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Whether any child's outer box escapes the parent content box.
fn children_overflow(tree: &UiTree, content: Rect, children: &[NodeId]) -> bool {
    children.iter().any(|&child| {
        tree.get(child).is_some_and(|node| {
            let outer = node.metrics.concrete.outer;
            outer.x < content.x
                || outer.y < content.y
                || outer.right() > content.right()
                || outer.bottom() > content.bottom()
        })
    })
}

/// Outline color for the debug pass.
const DEBUG_OUTLINE: Color = Color { r: 0.5, g: 0.8, b: 0.1, a: 1.0 };

/// Emit one untextured quad per visible node's outer box.
///
/// A diagnostic overlay for a shape-drawing sink; layout inspection only.
#[must_use]
pub fn debug_outlines(tree: &UiTree, ctx: &Context<'_>) -> CommandList {
    let mut list = CommandList::new();
    debug_node(tree, tree.root(), ctx, &mut list);
    list
}

fn debug_node(tree: &UiTree, id: NodeId, ctx: &Context<'_>, list: &mut CommandList) {
    let Some(node) = tree.get(id) else { return };
    if !resolve_style(tree, id, ctx.stylesheet).visible {
        return;
    }
    let outer = node.metrics.concrete.outer;
    list.push(RenderCommand::Sprite {
        texture: None,
        texture_path: None,
        position: (outer.x, outer.y),
        size: (outer.width, outer.height),
        color: DEBUG_OUTLINE,
    });
    for &child in tree.children(id) {
        debug_node(tree, child, ctx, list);
    }
}

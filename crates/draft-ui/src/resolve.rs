//! Per-node style resolution.
//!
//! Turns a node's cascaded [`Style`] bag into the typed inputs the solver
//! and the paint walk consume. Resolution is per node and per pass: the
//! element class cascades first, then the node's own classes in list order,
//! with the `:hover` overlay applied for nodes the last hover point landed
//! in.

use draft_css::style::Style;
use draft_css::stylesheet::{PseudoClass, Stylesheet};
use draft_css::value::{Color, UnitValue};

use crate::geometry::UnitEdges;
use crate::tree::{NodeId, UiTree};

/// Font size used when a node declares none. Percent font sizes resolve
/// against this.
pub const DEFAULT_FONT_SIZE_PX: f32 = 22.0;

/// The solver-facing view of one node's cascaded style.
#[derive(Debug, Clone)]
pub struct ResolvedStyle {
    /// Left-edge anchor, if declared (`None` falls back to the parent
    /// content origin).
    pub left: UnitValue,
    /// Top-edge anchor.
    pub top: UnitValue,
    /// Right-edge anchor; used only when `left` is auto.
    pub right: Option<UnitValue>,
    /// Bottom-edge anchor; used only when `top` is auto.
    pub bottom: Option<UnitValue>,
    /// Declared outer width (auto = shrink to content).
    pub width: UnitValue,
    /// Declared outer height.
    pub height: UnitValue,
    /// Optional clamp bounds on the outer size. Only declared bounds
    /// clamp; nothing defaults.
    pub min_width: Option<UnitValue>,
    /// Upper width bound.
    pub max_width: Option<UnitValue>,
    /// Lower height bound.
    pub min_height: Option<UnitValue>,
    /// Upper height bound.
    pub max_height: Option<UnitValue>,
    /// Declared margins.
    pub margin: UnitEdges,
    /// Declared padding.
    pub padding: UnitEdges,
    /// Whether the subtree renders.
    pub visible: bool,
    /// Foreground (text) color.
    pub color: Color,
    /// Background fill color.
    pub background_color: Color,
    /// Background texture asset path.
    pub background_image: Option<String>,
    /// Opacity multiplier for every command this node emits.
    pub opacity: f32,
    /// Font size in pixels, already resolved.
    pub font_size: f32,
    /// Font asset path (from `font-style: url(...)`).
    pub font: Option<String>,
}

/// Resolve one node's style against the stylesheet.
#[must_use]
pub fn resolve_style(tree: &UiTree, id: NodeId, stylesheet: &Stylesheet) -> ResolvedStyle {
    let identifiers = tree.identifiers(id);
    let hovered = tree.get(id).is_some_and(|node| node.hovered);
    let pseudo = if hovered {
        PseudoClass::Hover
    } else {
        PseudoClass::None
    };
    from_style(&stylesheet.get_style_pseudo(&identifiers, pseudo))
}

/// Lower a cascaded bag into the typed view, filling engine defaults for
/// anything the cascade left unset.
#[must_use]
pub fn from_style(style: &Style) -> ResolvedStyle {
    ResolvedStyle {
        left: style.left.unwrap_or(UnitValue::Auto),
        top: style.top.unwrap_or(UnitValue::Auto),
        right: style.right,
        bottom: style.bottom,
        width: style.width.unwrap_or(UnitValue::Auto),
        height: style.height.unwrap_or(UnitValue::Auto),
        min_width: style.min_width,
        max_width: style.max_width,
        min_height: style.min_height,
        max_height: style.max_height,
        margin: UnitEdges {
            left: style.margin_left.unwrap_or(UnitValue::ZERO),
            top: style.margin_top.unwrap_or(UnitValue::ZERO),
            right: style.margin_right.unwrap_or(UnitValue::ZERO),
            bottom: style.margin_bottom.unwrap_or(UnitValue::ZERO),
        },
        padding: UnitEdges {
            left: style.padding_left.unwrap_or(UnitValue::ZERO),
            top: style.padding_top.unwrap_or(UnitValue::ZERO),
            right: style.padding_right.unwrap_or(UnitValue::ZERO),
            bottom: style.padding_bottom.unwrap_or(UnitValue::ZERO),
        },
        visible: style.visibility.unwrap_or(true),
        color: style.color.unwrap_or(Color::WHITE),
        background_color: style.background_color.unwrap_or(Color::BLACK),
        background_image: style.background_image.clone(),
        opacity: style.opacity.unwrap_or(1.0),
        font_size: style
            .font_size
            .unwrap_or(UnitValue::Auto)
            .resolve_or(DEFAULT_FONT_SIZE_PX, DEFAULT_FONT_SIZE_PX),
        font: style.font_style.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;

    #[test]
    fn element_class_styles_apply() {
        let mut sheet = Stylesheet::new();
        let mut tree = UiTree::new();
        let button = tree.alloc(NodeKind::Button { label: "OK".to_string() }, &[]);
        tree.append_child(tree.root(), button);

        sheet.add_style(
            "button",
            Style {
                width: Some(UnitValue::px(120.0)),
                ..Style::default()
            },
        );

        let resolved = resolve_style(&tree, button, &sheet);
        assert_eq!(resolved.width, UnitValue::px(120.0));
    }

    #[test]
    fn hover_flag_switches_to_the_overlay() {
        let sheet = draft_css::parse(
            "rectangle { background-color: #000; }\nrectangle:hover { background-color: #FFF; }",
        )
        .unwrap();

        let mut tree = UiTree::new();
        let rect = tree.alloc(NodeKind::Rectangle, &[]);
        tree.append_child(tree.root(), rect);

        let base = resolve_style(&tree, rect, &sheet);
        assert_eq!(base.background_color, Color::BLACK);

        tree.get_mut(rect).unwrap().hovered = true;
        let hovered = resolve_style(&tree, rect, &sheet);
        assert_eq!(hovered.background_color, Color::WHITE);
    }

    #[test]
    fn percent_font_size_resolves_against_the_default() {
        let style = Style {
            font_size: Some(UnitValue::percent(50.0)),
            ..Style::default()
        };
        let resolved = from_style(&style);
        assert!((resolved.font_size - DEFAULT_FONT_SIZE_PX * 0.5).abs() < f32::EPSILON);
    }
}

//! The arena node tree.
//!
//! Nodes live in one flat `Vec` and address each other with stable integer
//! ids; parent/child relationships are id pairs, never references. Insertion
//! order of children is significant twice over: it is painter's order at
//! emission time, and cascade order is per-node (a node's own class list),
//! so reordering children changes stacking only.

use crate::metrics::Metrics;

/// A type-safe index into the node tree.
///
/// Ids stay valid for the life of the tree (nodes are never removed from
/// the arena, only detached), so holding a `NodeId` across layout passes
/// is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// The closed set of widget kinds.
///
/// Each kind carries its content inline and is dispatched by `match` in the
/// solver and the paint walk; there is no per-widget virtual surface.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A plain container with a background.
    Panel,
    /// A solid colored quad.
    Rectangle,
    /// A run of text.
    Label {
        /// The text to display.
        text: String,
    },
    /// A textured quad.
    Picture {
        /// Asset path of the texture to draw.
        image: String,
    },
    /// A vertically stacking, always-clipping container.
    ScrollPane {
        /// Scroll position as a fraction of the overflow, 0–1.
        scroll: f32,
    },
    /// A clickable panel with a centered text label.
    Button {
        /// The button caption.
        label: String,
    },
}

impl NodeKind {
    /// The implicit stylesheet class contributed by this kind, cascaded
    /// before the node's own classes.
    #[must_use]
    pub const fn element_class(&self) -> &'static str {
        match self {
            Self::Panel => "panel",
            Self::Rectangle => "rectangle",
            Self::Label { .. } => "label",
            Self::Picture { .. } => "picture",
            Self::ScrollPane { .. } => "scroll-pane",
            Self::Button { .. } => "button",
        }
    }
}

/// One node in the tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// What this node is.
    pub kind: NodeKind,
    /// Stylesheet classes, cascaded in list order after the element class.
    pub classes: Vec<String>,
    /// Whether the last hover point landed inside this node's bounds.
    /// Drives the `:hover` overlay at style-resolution time.
    pub hovered: bool,
    /// Boxes resolved by the last layout pass.
    pub metrics: Metrics,
    /// Parent id, `None` for the root and for detached nodes.
    pub parent: Option<NodeId>,
    /// Child ids in insertion (painter's) order.
    pub children: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, classes: Vec<String>) -> Self {
        Self {
            kind,
            classes,
            hovered: false,
            metrics: Metrics::default(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena-backed UI tree with id-addressed nodes.
#[derive(Debug, Clone)]
pub struct UiTree {
    /// All nodes, indexed by `NodeId`. The root panel is always at index 0.
    nodes: Vec<Node>,
}

impl UiTree {
    /// Create a tree holding only the root panel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Panel, vec!["root".to_string()])],
        }
    }

    /// The root node id.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable node by id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of nodes in the arena (attached or not).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty (never true; the root always exists).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new detached node and return its id.
    pub fn alloc(&mut self, kind: NodeKind, classes: &[&str]) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(
            kind,
            classes.iter().map(|&class| class.to_string()).collect(),
        ));
        id
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// If the child is already attached somewhere it is detached first, so
    /// a node's parent pointer and its parent's child list can never
    /// disagree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Detach a node from its parent, keeping it (and its subtree) in the
    /// arena for re-attachment.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(old_parent) = self.nodes[id.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|&c| c != id);
        }
    }

    /// Child ids of a node, in painter's order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |node| node.children.as_slice())
    }

    /// Parent id of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// The full cascade identifier list for a node: its element class
    /// followed by its own classes, space-joined.
    #[must_use]
    pub fn identifiers(&self, id: NodeId) -> String {
        self.get(id).map_or_else(String::new, |node| {
            let mut ids = node.kind.element_class().to_string();
            for class in &node.classes {
                ids.push(' ');
                ids.push_str(class);
            }
            ids
        })
    }

    /// Update hover flags from a pointer position (in the same pixel space
    /// as the last layout pass), or clear them all with `None`.
    ///
    /// Hit-testing uses each node's last-resolved outer box; call this
    /// between passes, not mid-pass.
    pub fn set_hover_point(&mut self, point: Option<(f32, f32)>) {
        for node in &mut self.nodes {
            node.hovered = match point {
                Some((px, py)) => node.metrics.concrete.outer.contains(px, py),
                None => false,
            };
        }
    }
}

impl Default for UiTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_exists_and_is_a_panel() {
        let tree = UiTree::new();
        let root = tree.get(tree.root()).unwrap();
        assert_eq!(root.kind, NodeKind::Panel);
        assert_eq!(root.classes, vec!["root".to_string()]);
    }

    #[test]
    fn append_keeps_parent_and_children_consistent() {
        let mut tree = UiTree::new();
        let a = tree.alloc(NodeKind::Panel, &["a"]);
        let b = tree.alloc(NodeKind::Panel, &["b"]);
        tree.append_child(tree.root(), a);
        tree.append_child(a, b);

        assert_eq!(tree.parent(b), Some(a));
        assert_eq!(tree.children(a), &[b]);

        // Reparenting detaches from the old parent first.
        tree.append_child(tree.root(), b);
        assert_eq!(tree.parent(b), Some(tree.root()));
        assert!(tree.children(a).is_empty());
        assert_eq!(tree.children(tree.root()), &[a, b]);
    }

    #[test]
    fn identifiers_lead_with_the_element_class() {
        let mut tree = UiTree::new();
        let button = tree.alloc(
            NodeKind::Button { label: "OK".to_string() },
            &["primary", "wide"],
        );
        assert_eq!(tree.identifiers(button), "button primary wide");
    }

    #[test]
    fn hover_flags_follow_last_metrics() {
        let mut tree = UiTree::new();
        let a = tree.alloc(NodeKind::Rectangle, &[]);
        tree.append_child(tree.root(), a);
        tree.get_mut(a).unwrap().metrics.concrete.outer =
            crate::geometry::Rect::new(0.0, 0.0, 10.0, 10.0);

        tree.set_hover_point(Some((5.0, 5.0)));
        assert!(tree.get(a).unwrap().hovered);

        tree.set_hover_point(Some((50.0, 50.0)));
        assert!(!tree.get(a).unwrap().hovered);

        tree.set_hover_point(None);
        assert!(!tree.get(a).unwrap().hovered);
    }
}

//! Integration tests for the two-phase layout solver.

use draft_assets::{AssetCache, Texture};
use draft_css::stylesheet::Stylesheet;
use draft_ui::geometry::Rect;
use draft_ui::tree::{NodeId, NodeKind, UiTree};
use draft_ui::{Context, solve};

const VIEWPORT: Rect = Rect { x: 0.0, y: 0.0, width: 1280.0, height: 720.0 };

fn sheet(css: &str) -> Stylesheet {
    draft_css::parse(css).expect("test stylesheet should parse")
}

fn solved(tree: &mut UiTree, stylesheet: &Stylesheet) {
    let assets = AssetCache::new();
    let ctx = Context::new(stylesheet, &assets, VIEWPORT);
    solve(tree, &ctx);
}

fn outer(tree: &UiTree, id: NodeId) -> Rect {
    tree.get(id).unwrap().metrics.concrete.outer
}

#[test]
fn test_root_fills_the_viewport() {
    let stylesheet = Stylesheet::new();
    let mut tree = UiTree::new();
    solved(&mut tree, &stylesheet);
    assert_eq!(outer(&tree, tree.root()), VIEWPORT);
}

#[test]
fn test_fixed_child_containment() {
    let stylesheet = sheet(
        "parent { left: 0px; top: 0px; width: 100px; height: 100px; }
         child { left: 10px; top: 5px; width: 20px; height: 10px; }",
    );
    let mut tree = UiTree::new();
    let parent = tree.alloc(NodeKind::Panel, &["parent"]);
    let child = tree.alloc(NodeKind::Rectangle, &["child"]);
    tree.append_child(tree.root(), parent);
    tree.append_child(parent, child);
    solved(&mut tree, &stylesheet);

    let child_box = outer(&tree, child);
    assert!((child_box.x - 10.0).abs() < f32::EPSILON);
    assert!((child_box.y - 5.0).abs() < f32::EPSILON);
    assert!((child_box.width - 20.0).abs() < f32::EPSILON);
    assert!((child_box.height - 10.0).abs() < f32::EPSILON);
}

#[test]
fn test_percent_resolves_against_parent_content_box() {
    let stylesheet = sheet(
        "parent { left: 0px; top: 0px; width: 200px; height: 100px; }
         child { left: 25%; top: 0px; width: 50%; height: 100%; }",
    );
    let mut tree = UiTree::new();
    let parent = tree.alloc(NodeKind::Panel, &["parent"]);
    let child = tree.alloc(NodeKind::Rectangle, &["child"]);
    tree.append_child(tree.root(), parent);
    tree.append_child(parent, child);
    solved(&mut tree, &stylesheet);

    let child_box = outer(&tree, child);
    assert!((child_box.x - 50.0).abs() < f32::EPSILON);
    assert!((child_box.width - 100.0).abs() < f32::EPSILON);
    assert!((child_box.height - 100.0).abs() < f32::EPSILON);
}

#[test]
fn test_padding_shifts_child_frame() {
    let stylesheet = sheet(
        "parent { left: 0px; top: 0px; width: 100px; height: 100px; padding: 10px; }
         child { left: 0px; top: 0px; width: 50%; height: 10px; }",
    );
    let mut tree = UiTree::new();
    let parent = tree.alloc(NodeKind::Panel, &["parent"]);
    let child = tree.alloc(NodeKind::Rectangle, &["child"]);
    tree.append_child(tree.root(), parent);
    tree.append_child(parent, child);
    solved(&mut tree, &stylesheet);

    let parent_node = tree.get(parent).unwrap();
    let content = parent_node.metrics.concrete.content;
    assert!((content.x - 10.0).abs() < f32::EPSILON);
    assert!((content.width - 80.0).abs() < f32::EPSILON);

    let child_box = outer(&tree, child);
    assert!((child_box.x - 10.0).abs() < f32::EPSILON);
    // 50% of the 80px content box, not the 100px outer box.
    assert!((child_box.width - 40.0).abs() < f32::EPSILON);
}

#[test]
fn test_margins_inset_the_inner_box() {
    let stylesheet = sheet(
        "boxed { left: 0px; top: 0px; width: 100px; height: 100px; margin: 5px 10px; }",
    );
    let mut tree = UiTree::new();
    let node = tree.alloc(NodeKind::Panel, &["boxed"]);
    tree.append_child(tree.root(), node);
    solved(&mut tree, &stylesheet);

    let metrics = &tree.get(node).unwrap().metrics.concrete;
    // Two-value shorthand: 5px vertical, 10px horizontal.
    assert!((metrics.inner.x - 10.0).abs() < f32::EPSILON);
    assert!((metrics.inner.y - 5.0).abs() < f32::EPSILON);
    assert!((metrics.inner.width - 80.0).abs() < f32::EPSILON);
    assert!((metrics.inner.height - 90.0).abs() < f32::EPSILON);
}

#[test]
fn test_auto_width_grows_to_content() {
    let stylesheet = sheet(
        "auto-box { left: 0px; top: 0px; height: 20px; }
         child { left: 0px; top: 0px; width: 50px; height: 10px; }",
    );
    let mut tree = UiTree::new();
    let parent = tree.alloc(NodeKind::Panel, &["auto-box"]);
    let child = tree.alloc(NodeKind::Rectangle, &["child"]);
    tree.append_child(tree.root(), parent);
    tree.append_child(parent, child);
    solved(&mut tree, &stylesheet);

    assert!(outer(&tree, parent).width >= 50.0);
}

#[test]
fn test_auto_width_includes_child_offset_and_padding() {
    let stylesheet = sheet(
        "auto-box { left: 0px; top: 0px; height: 20px; padding: 4px; }
         child { left: 10px; top: 0px; width: 50px; height: 10px; }",
    );
    let mut tree = UiTree::new();
    let parent = tree.alloc(NodeKind::Panel, &["auto-box"]);
    let child = tree.alloc(NodeKind::Rectangle, &["child"]);
    tree.append_child(tree.root(), parent);
    tree.append_child(parent, child);
    solved(&mut tree, &stylesheet);

    // offset 10 + child 50 + padding 4+4.
    assert!((outer(&tree, parent).width - 68.0).abs() < f32::EPSILON);
}

#[test]
fn test_label_auto_sizes_from_text() {
    let stylesheet = sheet("label { left: 0px; top: 0px; font-size: 10px; }");
    let mut tree = UiTree::new();
    let label = tree.alloc(NodeKind::Label { text: "Hello".to_string() }, &[]);
    tree.append_child(tree.root(), label);
    solved(&mut tree, &stylesheet);

    let label_box = outer(&tree, label);
    // Approximate metrics: 5 chars * 10px * 0.6.
    assert!((label_box.width - 30.0).abs() < 1.0e-3);
    // Line height 1.2 * 10px.
    assert!((label_box.height - 12.0).abs() < 1.0e-3);
}

#[test]
fn test_picture_auto_sizes_from_texture() {
    let stylesheet = sheet("picture { left: 0px; top: 0px; }");
    let assets = AssetCache::new();
    assets.insert("ui/icon.png", Texture { width: 48, height: 24 });

    let mut tree = UiTree::new();
    let picture = tree.alloc(
        NodeKind::Picture { image: "ui/icon.png".to_string() },
        &[],
    );
    tree.append_child(tree.root(), picture);

    let ctx = Context::new(&stylesheet, &assets, VIEWPORT);
    solve(&mut tree, &ctx);

    let picture_box = outer(&tree, picture);
    assert!((picture_box.width - 48.0).abs() < f32::EPSILON);
    assert!((picture_box.height - 24.0).abs() < f32::EPSILON);
}

#[test]
fn test_min_max_clamp_declared_only() {
    let stylesheet = sheet(
        "clamped { left: 0px; top: 0px; width: 500px; height: 5px;
                   max-width: 100px; min-height: 20px; }",
    );
    let mut tree = UiTree::new();
    let node = tree.alloc(NodeKind::Rectangle, &["clamped"]);
    tree.append_child(tree.root(), node);
    solved(&mut tree, &stylesheet);

    let node_box = outer(&tree, node);
    assert!((node_box.width - 100.0).abs() < f32::EPSILON);
    assert!((node_box.height - 20.0).abs() < f32::EPSILON);
}

#[test]
fn test_negative_sizes_propagate_unclamped() {
    let stylesheet = sheet("broken { left: 0px; top: 0px; width: -40px; height: 10px; }");
    let mut tree = UiTree::new();
    let node = tree.alloc(NodeKind::Rectangle, &["broken"]);
    tree.append_child(tree.root(), node);
    solved(&mut tree, &stylesheet);

    assert!((outer(&tree, node).width - -40.0).abs() < f32::EPSILON);
}

#[test]
fn test_right_anchor_positions_from_the_far_edge() {
    let stylesheet = sheet(
        "parent { left: 0px; top: 0px; width: 200px; height: 100px; }
         docked { right: 10px; top: 0px; width: 50px; height: 10px; }",
    );
    let mut tree = UiTree::new();
    let parent = tree.alloc(NodeKind::Panel, &["parent"]);
    let docked = tree.alloc(NodeKind::Rectangle, &["docked"]);
    tree.append_child(tree.root(), parent);
    tree.append_child(parent, docked);
    solved(&mut tree, &stylesheet);

    assert!((outer(&tree, docked).x - 140.0).abs() < f32::EPSILON);
}

#[test]
fn test_position_clamps_into_parent_region() {
    let stylesheet = sheet(
        "parent { left: 0px; top: 0px; width: 100px; height: 100px; }
         runaway { left: 200px; top: 0px; width: 50px; height: 10px; }",
    );
    let mut tree = UiTree::new();
    let parent = tree.alloc(NodeKind::Panel, &["parent"]);
    let runaway = tree.alloc(NodeKind::Rectangle, &["runaway"]);
    tree.append_child(tree.root(), parent);
    tree.append_child(parent, runaway);
    solved(&mut tree, &stylesheet);

    // 200px would escape; clamped so the box ends at the parent edge.
    assert!((outer(&tree, runaway).x - 50.0).abs() < f32::EPSILON);
}

#[test]
fn test_oversized_child_pins_to_origin_and_overflows() {
    let stylesheet = sheet(
        "parent { left: 0px; top: 0px; width: 100px; height: 100px; }
         huge { left: 20px; top: 0px; width: 300px; height: 10px; }",
    );
    let mut tree = UiTree::new();
    let parent = tree.alloc(NodeKind::Panel, &["parent"]);
    let huge = tree.alloc(NodeKind::Rectangle, &["huge"]);
    tree.append_child(tree.root(), parent);
    tree.append_child(parent, huge);
    solved(&mut tree, &stylesheet);

    let huge_box = outer(&tree, huge);
    assert!((huge_box.x - 0.0).abs() < f32::EPSILON);
    assert!((huge_box.width - 300.0).abs() < f32::EPSILON);
}

#[test]
fn test_scroll_pane_stacks_children_vertically() {
    let stylesheet = sheet(
        "scroll-pane { left: 0px; top: 0px; width: 100px; height: 100px; }
         row { width: 50px; height: 50px; }",
    );
    let mut tree = UiTree::new();
    let pane = tree.alloc(NodeKind::ScrollPane { scroll: 0.0 }, &[]);
    let rows: Vec<NodeId> = (0..3)
        .map(|_| tree.alloc(NodeKind::Rectangle, &["row"]))
        .collect();
    tree.append_child(tree.root(), pane);
    for &row in &rows {
        tree.append_child(pane, row);
    }
    solved(&mut tree, &stylesheet);

    assert!((outer(&tree, rows[0]).y - 0.0).abs() < f32::EPSILON);
    assert!((outer(&tree, rows[1]).y - 50.0).abs() < f32::EPSILON);
    assert!((outer(&tree, rows[2]).y - 100.0).abs() < f32::EPSILON);
}

#[test]
fn test_scroll_fraction_shifts_by_overflow() {
    let stylesheet = sheet(
        "scroll-pane { left: 0px; top: 0px; width: 100px; height: 100px; }
         row { width: 50px; height: 50px; }",
    );
    let mut tree = UiTree::new();
    // Three 50px rows in a 100px pane: 50px of overflow.
    let pane = tree.alloc(NodeKind::ScrollPane { scroll: 1.0 }, &[]);
    let rows: Vec<NodeId> = (0..3)
        .map(|_| tree.alloc(NodeKind::Rectangle, &["row"]))
        .collect();
    tree.append_child(tree.root(), pane);
    for &row in &rows {
        tree.append_child(pane, row);
    }
    solved(&mut tree, &stylesheet);

    // Fully scrolled: everything shifts up by the 50px overflow.
    assert!((outer(&tree, rows[0]).y - -50.0).abs() < f32::EPSILON);
    assert!((outer(&tree, rows[2]).y - 50.0).abs() < f32::EPSILON);
}

#[test]
fn test_hover_style_changes_layout_on_next_pass() {
    let stylesheet = sheet(
        "rectangle { left: 0px; top: 0px; width: 40px; height: 40px; }
         rectangle:hover { width: 80px; }",
    );
    let mut tree = UiTree::new();
    let node = tree.alloc(NodeKind::Rectangle, &[]);
    tree.append_child(tree.root(), node);
    solved(&mut tree, &stylesheet);
    assert!((outer(&tree, node).width - 40.0).abs() < f32::EPSILON);

    // Point lands inside the 40px box; the next pass sees the overlay.
    tree.set_hover_point(Some((10.0, 10.0)));
    solved(&mut tree, &stylesheet);
    assert!((outer(&tree, node).width - 80.0).abs() < f32::EPSILON);

    tree.set_hover_point(None);
    solved(&mut tree, &stylesheet);
    assert!((outer(&tree, node).width - 40.0).abs() < f32::EPSILON);
}

#[test]
fn test_relayout_is_stable() {
    let stylesheet = sheet(
        "parent { left: 10px; top: 10px; width: 300px; height: 200px; padding: 8px; }
         child { left: 5%; top: 10%; width: 50%; height: 25%; }",
    );
    let mut tree = UiTree::new();
    let parent = tree.alloc(NodeKind::Panel, &["parent"]);
    let child = tree.alloc(NodeKind::Rectangle, &["child"]);
    tree.append_child(tree.root(), parent);
    tree.append_child(parent, child);

    solved(&mut tree, &stylesheet);
    let first = outer(&tree, child);
    solved(&mut tree, &stylesheet);
    let second = outer(&tree, child);
    assert_eq!(first, second);
}

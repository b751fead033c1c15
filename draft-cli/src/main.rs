//! Draft UI CLI
//!
//! A headless stylesheet linter and layout inspector: parse a stylesheet
//! with real diagnostics, dump the cascaded style for a class list, or lay
//! out a demo scene against the sheet and print the resolved boxes and
//! render commands.

use anyhow::{Context as _, Result};
use clap::Parser;
use owo_colors::OwoColorize;

use draft_assets::{AssetCache, Font, Texture};
use draft_common::file::FileHandle;
use draft_css::stylesheet::{PseudoClass, Stylesheet};
use draft_ui::geometry::Rect;
use draft_ui::tree::{NodeId, NodeKind, UiTree};
use draft_ui::{Context, debug_outlines, emit_commands, solve};

/// Draft UI stylesheet linting and layout inspection
#[derive(Parser, Debug)]
#[command(name = "draft")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Validate a stylesheet and summarize its rules
    draft ui.css

    # Show the cascaded style for a class list
    draft ui.css --classes "button primary"

    # Lay out the demo scene and print resolved boxes
    draft ui.css --demo

    # Dump the demo scene's render commands as JSON
    draft ui.css --demo --commands --width 1920 --height 1080

    # Simulate a hover point before the pass
    draft ui.css --demo --hover 120,40
"#)]
struct Cli {
    /// Path to the stylesheet file
    #[arg(value_name = "FILE")]
    path: String,

    /// Print the cascaded style for a space-separated class list
    #[arg(long, value_name = "CLASSES")]
    classes: Option<String>,

    /// Lay out the built-in demo scene and print resolved boxes
    #[arg(long)]
    demo: bool,

    /// With --demo: dump render commands as JSON
    #[arg(long)]
    commands: bool,

    /// With --demo: dump debug outline commands as JSON
    #[arg(long)]
    outlines: bool,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 720.0)]
    height: f32,

    /// Hover point as "x,y", applied before the layout pass
    #[arg(long, value_name = "X,Y")]
    hover: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let handle = FileHandle::new(&cli.path);
    let mut sheet = Stylesheet::new();
    match draft_css::parse_file(&mut sheet, &handle) {
        Ok(()) => {
            let selector_count = sheet.selectors(PseudoClass::None).count()
                + sheet.selectors(PseudoClass::Hover).count();
            println!(
                "{} {} ({} selectors)",
                "ok".green().bold(),
                cli.path,
                selector_count
            );
        }
        Err(error) => {
            eprintln!("{} {}: {error}", "error".red().bold(), cli.path);
            std::process::exit(1);
        }
    }

    if let Some(classes) = &cli.classes {
        let style = sheet.get_style(classes);
        println!("\n=== Cascade for '{classes}' ===");
        println!(
            "{}",
            serde_json::to_string_pretty(&style).context("serializing cascaded style")?
        );
    }

    if cli.demo {
        run_demo(&cli, &sheet)?;
    }

    Ok(())
}

/// Build the demo scene, solve it, and print what was asked for.
fn run_demo(cli: &Cli, sheet: &Stylesheet) -> Result<()> {
    let assets = demo_assets();
    let mut tree = demo_tree();

    if let Some(hover) = &cli.hover {
        let point = parse_point(hover)
            .with_context(|| format!("invalid --hover value '{hover}', expected X,Y"))?;
        // Hit-testing needs boxes, so resolve once before flagging hover.
        let ctx = Context::new(sheet, &assets, Rect::new(0.0, 0.0, cli.width, cli.height));
        solve(&mut tree, &ctx);
        tree.set_hover_point(Some(point));
    }

    let ctx = Context::new(sheet, &assets, Rect::new(0.0, 0.0, cli.width, cli.height));
    solve(&mut tree, &ctx);

    println!("\n=== Resolved boxes ===");
    print_boxes(&tree, tree.root(), 0);

    if cli.commands {
        let list = emit_commands(&tree, &ctx);
        println!("\n=== Render commands ({}) ===", list.len());
        println!(
            "{}",
            serde_json::to_string_pretty(&list).context("serializing command list")?
        );
    }

    if cli.outlines {
        let list = debug_outlines(&tree, &ctx);
        println!("\n=== Debug outlines ({}) ===", list.len());
        println!(
            "{}",
            serde_json::to_string_pretty(&list).context("serializing outline list")?
        );
    }

    Ok(())
}

/// The demo scene: a sidebar with buttons, a content panel with a label and
/// a picture, and a scroll pane of rows. Every node carries classes so the
/// loaded stylesheet can restyle the whole scene.
fn demo_tree() -> UiTree {
    let mut tree = UiTree::new();

    let sidebar = tree.alloc(NodeKind::Panel, &["sidebar"]);
    tree.append_child(tree.root(), sidebar);
    for (label, class) in [("New Game", "primary"), ("Options", ""), ("Quit", "danger")] {
        let classes: Vec<&str> = if class.is_empty() { vec![] } else { vec![class] };
        let button = tree.alloc(NodeKind::Button { label: label.to_string() }, &classes);
        tree.append_child(sidebar, button);
    }

    let content = tree.alloc(NodeKind::Panel, &["content"]);
    tree.append_child(tree.root(), content);
    let title = tree.alloc(NodeKind::Label { text: "Draft UI".to_string() }, &["title"]);
    tree.append_child(content, title);
    let logo = tree.alloc(
        NodeKind::Picture { image: "ui/logo.png".to_string() },
        &["logo"],
    );
    tree.append_child(content, logo);

    let list = tree.alloc(NodeKind::ScrollPane { scroll: 0.25 }, &["list"]);
    tree.append_child(content, list);
    for index in 0..8 {
        let row = tree.alloc(
            NodeKind::Label { text: format!("Row {index}") },
            &["row"],
        );
        tree.append_child(list, row);
    }

    tree
}

/// Assets the demo scene references, pre-registered so pictures size
/// themselves and text measures with real ratios.
fn demo_assets() -> AssetCache {
    let assets = AssetCache::new();
    assets.insert("ui/logo.png", Texture { width: 128, height: 64 });
    assets.insert("fonts/body.ttf", Font::default());
    assets
}

/// Print the concrete box tree, indented by depth.
fn print_boxes(tree: &UiTree, id: NodeId, depth: usize) {
    let Some(node) = tree.get(id) else { return };
    let outer = node.metrics.concrete.outer;
    let indent = "  ".repeat(depth);
    let classes = if node.classes.is_empty() {
        String::new()
    } else {
        format!(" .{}", node.classes.join(" ."))
    };
    println!(
        "{indent}{}{} [{} {} {}x{}]",
        node.kind.element_class().cyan(),
        classes.dimmed(),
        outer.x,
        outer.y,
        outer.width,
        outer.height
    );
    for &child in tree.children(id) {
        print_boxes(tree, child, depth + 1);
    }
}

/// Parse an "x,y" pair.
fn parse_point(text: &str) -> Option<(f32, f32)> {
    let (x, y) = text.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

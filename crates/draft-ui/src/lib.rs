//! Arena node tree, two-phase layout solver, and render-command emission
//! for the Draft UI engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Node tree**: a `Vec`-backed arena addressed by stable [`NodeId`]
//!   indices, with a closed [`NodeKind`] union of widget kinds dispatched
//!   by `match` (no per-widget virtual surface).
//! - **Style resolution**, per node, per pass: element class plus own
//!   classes through the stylesheet cascade, with the `:hover` overlay for
//!   nodes flagged by hit-testing.
//! - **Two-phase solver**: a bottom-up preferred-size query for auto
//!   dimensions, then a single top-down concrete pass producing pixel
//!   boxes clamped to declared min/max bounds.
//! - **Render-command emission**: a paint walk producing a flat
//!   [`CommandList`] of sprite/text/scissor commands for an external
//!   render sink.
//!
//! The whole pipeline is single-threaded and synchronous: a pass is
//! `set_hover_point` → [`solver::solve`] → [`paint::emit_commands`], all
//! on the UI thread. The only shared state is the read-only stylesheet
//! and asset cache borrowed through [`Context`].

/// Render commands and the command list.
pub mod commands;
/// The per-pass solver context.
pub mod context;
/// Rectangles and edge sizes.
pub mod geometry;
/// Per-node layout metrics.
pub mod metrics;
/// Render-command emission.
pub mod paint;
/// Per-node style resolution.
pub mod resolve;
/// The two-phase layout solver.
pub mod solver;
/// Text measurement.
pub mod text;
/// The arena node tree.
pub mod tree;

// Re-exports for convenience
pub use commands::{CommandList, RenderCommand};
pub use context::Context;
pub use geometry::{EdgeSizes, Rect, UnitEdges, UnitRect};
pub use metrics::{ConcreteBox, Metrics};
pub use paint::{debug_outlines, emit_commands};
pub use resolve::{DEFAULT_FONT_SIZE_PX, ResolvedStyle, resolve_style};
pub use solver::solve;
pub use text::{ApproximateFontMetrics, AssetFontMetrics, FontMetrics};
pub use tree::{Node, NodeId, NodeKind, UiTree};

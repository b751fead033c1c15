//! Render commands, the engine's output.
//!
//! The paint walk emits a flat list of drawing commands in painter's order
//! (parents before children, siblings in insertion order). An external
//! sprite/text sink consumes the list; the layout engine never touches a
//! graphics API. Scissor pairs bracket children that overflow their
//! parent's content box, so the sink can clip without understanding the
//! tree.

use std::sync::Arc;

use draft_assets::{Font, Texture};
use draft_css::value::Color;
use serde::Serialize;

use crate::geometry::Rect;

/// A single drawing command.
#[derive(Debug, Clone, Serialize)]
pub enum RenderCommand {
    /// Draw a textured or solid quad.
    ///
    /// A `None` texture draws as a solid quad in `color`, the sink's
    /// convention for missing or still-loading images.
    Sprite {
        /// Backing texture, if any.
        #[serde(skip)]
        texture: Option<Arc<Texture>>,
        /// Source path of the texture, kept for snapshot dumps.
        texture_path: Option<String>,
        /// Top-left position in pixels.
        position: (f32, f32),
        /// Quad size in pixels.
        size: (f32, f32),
        /// Tint color (opacity pre-multiplied into alpha).
        color: Color,
    },

    /// Draw a run of text.
    Text {
        /// The text content to draw.
        text: String,
        /// Backing font, if loaded.
        #[serde(skip)]
        font: Option<Arc<Font>>,
        /// Font size in pixels.
        font_size: f32,
        /// Baseline-origin position in pixels.
        position: (f32, f32),
        /// Text color (opacity pre-multiplied into alpha).
        color: Color,
    },

    /// Push a clip rectangle. Subsequent commands are clipped to the
    /// intersection of all active scissors until the matching
    /// [`RenderCommand::EndScissor`].
    BeginScissor {
        /// The clip rectangle.
        rect: Rect,
    },

    /// Pop the most recent clip rectangle.
    EndScissor,
}

/// A list of drawing commands in painter's order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandList {
    commands: Vec<RenderCommand>,
}

impl CommandList {
    /// Create an empty command list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// The commands in painter's order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

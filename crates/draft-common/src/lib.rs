//! Shared utilities for the Draft UI engine.
//!
//! Small pieces used by every other crate in the workspace: a deduplicated
//! warning channel for soft failures (the styling pipeline never hard-errors
//! on bad input) and a plain-text file handle for reading stylesheet sources.

/// Plain UTF-8 file handles for stylesheet sources.
pub mod file;
/// Deduplicated warnings with colored terminal output.
pub mod warning;

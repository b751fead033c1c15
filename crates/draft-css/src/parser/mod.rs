//! Parser for the stylesheet text format.

/// Parser implementation.
pub mod css_parser;

pub use css_parser::{parse, parse_file, parse_into};

//! Finite-state tokenizer for the stylesheet text format.

/// Tokenizer implementation.
pub mod css_tokenizer;
/// Token and state types.
pub mod token;

pub use css_tokenizer::CssTokenizer;
pub use token::{FiniteState, Token};

//! The stylesheet tokenizer.

use crate::error::ParseError;

use super::token::{FiniteState, Token};

/// Tokenizer for the stylesheet text format.
///
/// Drives the [`FiniteState`] transition table over the input one character
/// at a time, collecting `(text, state)` tokens. Structural characters
/// (braces, colons, semicolons) and newlines never appear in token text;
/// whitespace delimits selector segments and collapses to single spaces
/// inside values so shorthand values keep their internal structure.
pub struct CssTokenizer {
    /// The input string being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Collected tokens
    tokens: Vec<Token>,
    /// Pending token text
    buf: String,
    /// Source position of the first buffered character
    buf_start: (u32, u32),
    /// Current source line (1-based)
    line: u32,
    /// Current source column (1-based)
    col: u32,
}

impl CssTokenizer {
    /// Create a tokenizer over the given source text.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            tokens: Vec::new(),
            buf: String::new(),
            buf_start: (1, 1),
            line: 1,
            col: 1,
        }
    }

    /// Tokenize the whole input.
    ///
    /// # Errors
    /// Returns [`ParseError`] when the input ends inside a rule block
    /// (missing `}`) or after selectors that never open a block.
    pub fn run(mut self) -> Result<Vec<Token>, ParseError> {
        let mut last_state = FiniteState::Start;
        let mut state = FiniteState::Start;

        while self.position < self.input.len() {
            let ch = self.input[self.position];
            self.position += 1;

            // Structural characters are consumed by the state machine and
            // never land in token text.
            let garbage = matches!(ch, '{' | '}' | ':' | ';');

            state = state.step(ch);

            if state == FiniteState::End {
                // Rule block closed: flush whatever was pending, emit the
                // boundary marker, and fold straight back to selectors.
                self.flush(last_state);
                self.mark_end();
                state = FiniteState::Selectors;
                last_state = FiniteState::Selectors;
                self.advance(ch);
                continue;
            }

            if last_state != state {
                self.flush(last_state);
                last_state = state;
            }

            if state == FiniteState::Selectors && ch.is_whitespace() {
                // Each space-delimited selector segment is its own token.
                self.flush(state);
            }

            if !garbage {
                self.buffer(state, ch);
            }

            self.advance(ch);
        }

        match state {
            FiniteState::Start => Ok(self.tokens),
            FiniteState::Selectors => {
                self.flush(FiniteState::Selectors);
                let dangling = self
                    .tokens
                    .last()
                    .is_some_and(|token| token.state == FiniteState::Selectors);
                if dangling {
                    Err(ParseError::new(
                        self.line,
                        self.col,
                        "selector has no declaration block",
                    ))
                } else {
                    Ok(self.tokens)
                }
            }
            FiniteState::Pseudo | FiniteState::Property | FiniteState::Value => {
                Err(ParseError::new(
                    self.line,
                    self.col,
                    "unexpected end of input inside rule block (missing '}')",
                ))
            }
            FiniteState::End => Ok(self.tokens),
        }
    }

    /// Append a character to the pending token, applying per-state
    /// whitespace policy.
    fn buffer(&mut self, state: FiniteState, ch: char) {
        if ch.is_whitespace() {
            // Values keep interior whitespace (collapsed) so shorthands can
            // be split later; everywhere else whitespace only delimits.
            let keep = state == FiniteState::Value
                && !self.buf.is_empty()
                && !self.buf.ends_with(' ');
            if keep {
                self.buf.push(' ');
            }
            return;
        }

        if state == FiniteState::Start || state == FiniteState::End {
            return;
        }

        if self.buf.is_empty() {
            self.buf_start = (self.line, self.col);
        }
        self.buf.push(ch);
    }

    /// Emit the pending token, if any, classified by `state`.
    fn flush(&mut self, state: FiniteState) {
        let text = self.buf.trim_end();
        if !text.is_empty() {
            self.tokens.push(Token {
                text: text.to_string(),
                state,
                line: self.buf_start.0,
                col: self.buf_start.1,
            });
        }
        self.buf.clear();
    }

    /// Emit a rule-boundary marker.
    fn mark_end(&mut self) {
        self.tokens.push(Token {
            text: String::new(),
            state: FiniteState::End,
            line: self.line,
            col: self.col,
        });
    }

    /// Advance the source position past `ch`.
    fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}

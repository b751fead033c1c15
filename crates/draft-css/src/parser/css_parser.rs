//! The stylesheet parser.
//!
//! Folds the tokenizer's `(text, state)` stream into [`Stylesheet::set`]
//! calls. Structural defects (a value with no property, input ending inside
//! a block) are hard [`ParseError`]s; defective *declarations* inside a
//! well-formed rule warn once and are skipped, matching the permissive
//! cascade contract.

use draft_common::file::FileHandle;
use draft_common::warning::warn_once;

use crate::error::{LoadError, ParseError};
use crate::stylesheet::{PseudoClass, Stylesheet};
use crate::tokenizer::{CssTokenizer, FiniteState, Token};
use crate::value::PropertyValue;

/// Parse stylesheet text into a fresh [`Stylesheet`] (seeded with the
/// `"default"`/`"*"` base entries).
///
/// # Errors
/// Returns [`ParseError`] on structurally malformed input.
pub fn parse(source: &str) -> Result<Stylesheet, ParseError> {
    let mut sheet = Stylesheet::new();
    parse_into(&mut sheet, source)?;
    Ok(sheet)
}

/// Parse stylesheet text into an existing sheet. This is the hot-reload
/// entry point; call [`Stylesheet::clear`] first to drop stale rules.
///
/// # Errors
/// Returns [`ParseError`] on structurally malformed input. The sheet may
/// hold rules parsed before the defect; callers reloading in place should
/// treat an error as "keep the previous sheet".
pub fn parse_into(sheet: &mut Stylesheet, source: &str) -> Result<(), ParseError> {
    let tokens = CssTokenizer::new(source).run()?;
    fold_tokens(sheet, &tokens)
}

/// Read and parse a stylesheet from a file handle.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be read or does not parse.
pub fn parse_file(sheet: &mut Stylesheet, handle: &FileHandle) -> Result<(), LoadError> {
    let source = handle.read_string()?;
    parse_into(sheet, &source)?;
    Ok(())
}

/// Fold the token stream into `Stylesheet::set` calls.
fn fold_tokens(sheet: &mut Stylesheet, tokens: &[Token]) -> Result<(), ParseError> {
    let mut selectors: Vec<String> = Vec::new();
    let mut pseudo = PseudoClass::None;
    let mut property: Option<Token> = None;

    for token in tokens {
        match token.state {
            FiniteState::Selectors => selectors.push(token.text.clone()),

            FiniteState::Pseudo => {
                pseudo = PseudoClass::parse(&token.text);
                if pseudo == PseudoClass::None {
                    warn_once(
                        "CSS",
                        &format!("unknown pseudo-class ':{}' ignored", token.text),
                    );
                }
            }

            FiniteState::Property => {
                if let Some(pending) = property.take() {
                    // The previous property never got a value before this
                    // one started (e.g. `color; left: 1px`).
                    warn_once("CSS", &format!("property '{}' has no value", pending.text));
                }
                property = Some(token.clone());
            }

            FiniteState::Value => {
                let Some(name) = property.take() else {
                    return Err(ParseError::new(
                        token.line,
                        token.col,
                        "declaration value without a property name",
                    ));
                };
                apply_declaration(sheet, &selectors, pseudo, &name.text, &token.text);
            }

            FiniteState::End => {
                if let Some(pending) = property.take() {
                    warn_once("CSS", &format!("property '{}' has no value", pending.text));
                }
                selectors.clear();
                pseudo = PseudoClass::None;
            }

            // The tokenizer never emits Start tokens.
            FiniteState::Start => {}
        }
    }

    Ok(())
}

/// Route one declaration: expand shorthands, sniff the value, hand it to
/// the stylesheet.
fn apply_declaration(
    sheet: &mut Stylesheet,
    selectors: &[String],
    pseudo: PseudoClass,
    property: &str,
    value_text: &str,
) {
    if property == "padding" || property == "margin" {
        expand_shorthand(sheet, selectors, pseudo, property, value_text);
        return;
    }

    match PropertyValue::sniff(value_text) {
        Some(value) => sheet.set(selectors, pseudo, property, &value),
        None => warn_once(
            "CSS",
            &format!("unparseable value '{value_text}' for '{property}'"),
        ),
    }
}

/// Expand a `padding`/`margin` shorthand into its four per-side properties.
///
/// One value sets all four sides. Two values set vertical then horizontal
/// (`v0` top/bottom, `v1` left/right). Four values are explicit per side in
/// **left, top, right, bottom** order. Note this is the engine's own side
/// order, not CSS's clockwise top/right/bottom/left.
fn expand_shorthand(
    sheet: &mut Stylesheet,
    selectors: &[String],
    pseudo: PseudoClass,
    base: &str,
    value_text: &str,
) {
    let pieces: Vec<&str> = value_text.split_whitespace().collect();
    let [left, top, right, bottom] = match pieces[..] {
        [all] => [all, all, all, all],
        [vertical, horizontal] => [horizontal, vertical, horizontal, vertical],
        [left, top, right, bottom] => [left, top, right, bottom],
        _ => {
            warn_once(
                "CSS",
                &format!(
                    "'{base}' shorthand takes 1, 2, or 4 values, got {}",
                    pieces.len()
                ),
            );
            return;
        }
    };

    let sides = [
        ("-left", left),
        ("-top", top),
        ("-right", right),
        ("-bottom", bottom),
    ];
    for (suffix, piece) in sides {
        let property = format!("{base}{suffix}");
        match PropertyValue::sniff(piece) {
            Some(value) => sheet.set(selectors, pseudo, &property, &value),
            None => warn_once(
                "CSS",
                &format!("unparseable value '{piece}' for '{property}'"),
            ),
        }
    }
}

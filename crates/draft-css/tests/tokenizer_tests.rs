//! Integration tests for the stylesheet tokenizer.

use draft_css::tokenizer::{CssTokenizer, FiniteState, Token};

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<Token> {
    CssTokenizer::new(input).run().expect("input should tokenize")
}

#[test]
fn test_simple_rule() {
    let tokens = tokenize("button { color: #FFF; }");
    let kinds: Vec<(&str, FiniteState)> = tokens
        .iter()
        .map(|t| (t.text.as_str(), t.state))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("button", FiniteState::Selectors),
            ("color", FiniteState::Property),
            ("#FFF", FiniteState::Value),
            ("", FiniteState::End),
        ]
    );
}

#[test]
fn test_pseudo_selector() {
    let tokens = tokenize("button:hover { color: #FFF; }");
    assert_eq!(tokens[0].text, "button");
    assert_eq!(tokens[0].state, FiniteState::Selectors);
    assert_eq!(tokens[1].text, "hover");
    assert_eq!(tokens[1].state, FiniteState::Pseudo);
}

#[test]
fn test_descendant_selectors_split_on_whitespace() {
    let tokens = tokenize("side-bar button { left: 1px; }");
    assert_eq!(tokens[0].text, "side-bar");
    assert_eq!(tokens[0].state, FiniteState::Selectors);
    assert_eq!(tokens[1].text, "button");
    assert_eq!(tokens[1].state, FiniteState::Selectors);
}

#[test]
fn test_value_keeps_interior_whitespace() {
    let tokens = tokenize("a { padding: 1px  2px\t3px 4px; }");
    let value = tokens
        .iter()
        .find(|t| t.state == FiniteState::Value)
        .unwrap();
    // Runs of whitespace collapse to single spaces.
    assert_eq!(value.text, "1px 2px 3px 4px");
}

#[test]
fn test_missing_final_semicolon_is_fine() {
    let tokens = tokenize("a { color: #FFF }");
    let value = tokens
        .iter()
        .find(|t| t.state == FiniteState::Value)
        .unwrap();
    assert_eq!(value.text, "#FFF");
}

#[test]
fn test_multiple_rules_reset_at_end_marker() {
    let tokens = tokenize("a { left: 1px; }\nb { top: 2px; }");
    let end_count = tokens
        .iter()
        .filter(|t| t.state == FiniteState::End)
        .count();
    assert_eq!(end_count, 2);

    // The second rule's selector comes after the first End marker.
    let first_end = tokens
        .iter()
        .position(|t| t.state == FiniteState::End)
        .unwrap();
    assert_eq!(tokens[first_end + 1].text, "b");
    assert_eq!(tokens[first_end + 1].state, FiniteState::Selectors);
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("a {\n    left: 10px;\n}");
    let property = tokens
        .iter()
        .find(|t| t.state == FiniteState::Property)
        .unwrap();
    assert_eq!(property.line, 2);
    assert_eq!(property.col, 5);
    let value = tokens
        .iter()
        .find(|t| t.state == FiniteState::Value)
        .unwrap();
    assert_eq!(value.line, 2);
    assert_eq!(value.col, 11);
}

#[test]
fn test_unterminated_block_is_an_error() {
    let err = CssTokenizer::new("a { left: 1px;").run().unwrap_err();
    assert!(err.message.contains("missing '}'"), "got: {err}");
    assert_eq!(err.line, 1);
}

#[test]
fn test_selector_without_block_is_an_error() {
    let err = CssTokenizer::new("dangling-selector").run().unwrap_err();
    assert!(err.message.contains("no declaration block"), "got: {err}");
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \n\t  ").is_empty());
}

#[test]
fn test_empty_rule_body() {
    let tokens = tokenize("a { }");
    assert_eq!(tokens.len(), 2); // selector + end marker
    assert_eq!(tokens[1].state, FiniteState::End);
}

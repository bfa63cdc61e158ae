//! Tests for grammar presets and construction

use super::*;

#[test]
fn test_strict_unescaped_class() {
    let grammar = Grammar::strict();
    let rule = grammar.unescaped();
    for c in [' ', '!', '#', '+', '-', '0', 'A', 'z', '~'] {
        assert!(rule.match_at(&c.to_string(), 0).is_some(), "{c:?} should be accepted");
    }
    for c in ['"', ',', '\r', '\n', '\t', 'é', '\u{7f}'] {
        assert!(rule.match_at(&c.to_string(), 0).is_none(), "{c:?} should be rejected");
    }
}

#[test]
fn test_permissive_accepts_non_ascii() {
    let grammar = Grammar::permissive();
    let content = grammar.unescaped_content();
    assert_eq!(content.match_at("héllo wörld,x", 0), Some("héllo wörld".len()));
    assert_eq!(content.match_at("\"quoted\"", 0), None);
}

#[test]
fn test_escaped_content_accepts_doubled_quotes_and_newlines() {
    let grammar = Grammar::strict();
    let body = "a,b\r\nsaid \"\"hi\"\"";
    let text = format!("{body}\"");
    assert_eq!(grammar.escaped_content().match_at(&text, 0), Some(body.len()));
    assert_eq!(grammar.escaped_content().match_at("\"", 0), Some(0));
}

#[test]
fn test_trailing_skip() {
    let grammar = Grammar::strict();
    assert_eq!(grammar.trailing_skip().match_at("\r\n \n\rx", 0), Some(5));
    assert_eq!(grammar.trailing_skip().match_at("x", 0), Some(0));
}

#[test]
fn test_shared_presets() {
    assert_eq!(STRICT.quote_text(), "\"");
    assert!(PERMISSIVE.unescaped().match_at("ü", 0).is_some());
    assert!(STRICT.unescaped().match_at("ü", 0).is_none());
}

#[test]
fn test_quote_must_be_literal() {
    let err = GrammarOptions::strict()
        .with_quote(Rule::any_of(&['"', '\'']))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidGrammar(_)));

    let err = GrammarOptions::strict().with_quote("").build().unwrap_err();
    assert!(matches!(err, Error::InvalidGrammar(_)));
}

#[test]
fn test_rules_must_consume_input() {
    let err = GrammarOptions::strict()
        .with_end_of_line(Rule::from('\n').at_least(0))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidGrammar("end of line rule matches empty input".to_string())
    );
}

#[test]
fn test_quoted_newlines_must_consume_input() {
    let err = GrammarOptions::strict()
        .with_quoted_newlines(Rule::from('\n').at_least(0))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidGrammar("quoted newline rule matches empty input".to_string())
    );

    // A consuming rule keeps doubled quotes reachable inside quotes
    let grammar = GrammarOptions::strict()
        .with_quoted_newlines(Rule::from('\n').at_least(1))
        .build()
        .unwrap();
    let text = "\"a\"\"b\"";
    assert_eq!(grammar.escaped_content().match_at(text, 1), Some(5));
}

#[test]
fn test_tsv_separator_swap() {
    let grammar = GrammarOptions::tsv().build().unwrap();
    assert!(grammar.unescaped().match_at(",", 0).is_some());
    assert!(grammar.unescaped().match_at("\t", 0).is_none());
    assert_eq!(grammar.separator().match_at("\t", 0), Some(1));
}

#[test]
fn test_custom_quote_text() {
    let grammar = GrammarOptions::strict()
        .with_quote('\'')
        .with_unescaped(CharClass::range('a', 'z'))
        .build()
        .unwrap();
    assert_eq!(grammar.quote_text(), "'");
    assert_eq!(grammar.escaped_content().match_at("it''s'", 0), Some(5));
}

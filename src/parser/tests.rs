//! Tests for whole-document parsing

use std::borrow::Cow;

use super::*;
use crate::cursor::TextPosition;
use crate::error::Error;
use crate::grammar::GrammarOptions;

fn parse(input: &str) -> Result<Document<'_>> {
    Parser::strict().parse(input)
}

#[test]
fn test_parse_empty() {
    assert!(parse("").unwrap().is_empty());
}

#[test]
fn test_blank_lines_only() {
    assert!(parse("\r\n").unwrap().is_empty());
    assert!(parse("\r\n\r\n\n  ").unwrap().is_empty());
}

#[test]
fn test_trailing_end_of_line() {
    let document = parse("a,b,c\r\n").unwrap();
    assert_eq!(document.rows(), vec![vec!["a", "b", "c"]]);

    let document = parse("a,b,c\r\n\r\n").unwrap();
    assert_eq!(document.len(), 1);

    // A bare LF is not an end of line for the strict grammar, only trailing space
    let document = parse("a,b,c\n").unwrap();
    assert_eq!(document.rows(), vec![vec!["a", "b", "c"]]);
}

#[test]
fn test_single_field() {
    assert_eq!(parse("a").unwrap().rows(), vec![vec!["a"]]);
    assert_eq!(parse("\"a\"").unwrap().rows(), vec![vec!["a"]]);
}

#[test]
fn test_basic_rows() {
    assert_eq!(parse("a,b,c").unwrap().rows(), vec![vec!["a", "b", "c"]]);
    assert_eq!(
        parse("\"a\",\"b\",\"c\"").unwrap().rows(),
        vec![vec!["a", "b", "c"]]
    );
    assert_eq!(
        parse("name,age\r\nJohn,25\r\nJane,30").unwrap().rows(),
        vec![vec!["name", "age"], vec!["John", "25"], vec!["Jane", "30"]]
    );
}

#[test]
fn test_empty_fields() {
    assert_eq!(parse(",").unwrap().rows(), vec![vec!["", ""]]);
    assert_eq!(parse(",,").unwrap().rows(), vec![vec!["", "", ""]]);
    assert_eq!(parse("\"\",\"\"").unwrap().rows(), vec![vec!["", ""]]);
    assert_eq!(
        parse("a,,c\r\n,,").unwrap().rows(),
        vec![vec!["a", "", "c"], vec!["", "", ""]]
    );
}

#[test]
fn test_quoted_line_break_is_kept() {
    let document = parse("\"a\",\"b\",\"c\",\"\nd\",\"e\",\"f\"").unwrap();
    assert_eq!(document.rows(), vec![vec!["a", "b", "c", "\nd", "e", "f"]]);
}

#[test]
fn test_unquoted_line_break_is_an_error() {
    // The LF ends the first row's last field; "d" is then left over
    let err = parse("a,b,c,\nd,e,f").unwrap_err();
    assert_eq!(
        err,
        Error::Syntax(TextPosition {
            offset: 7,
            line: 2,
            column: 1
        })
    );
}

#[test]
fn test_doubled_quotes_collapse() {
    let document = parse("\"He said \"\"no\"\"\",x").unwrap();
    assert_eq!(document.rows(), vec![vec!["He said \"no\"", "x"]]);
    assert!(matches!(document[0][0], Cow::Owned(_)));
    assert!(matches!(document[0][1], Cow::Borrowed(_)));

    let document = parse("\"\"\"\"").unwrap();
    assert_eq!(document.rows(), vec![vec!["\""]]);
}

#[test]
fn test_uneven_rows() {
    let err = parse("a,b\r\n1,2\r\n3").unwrap_err();
    assert_eq!(
        err,
        Error::UnevenRowWidth {
            row: 2,
            expected: 2,
            found: 1
        }
    );

    let err = parse("a\r\n1,2").unwrap_err();
    assert!(matches!(err, Error::UnevenRowWidth { row: 1, .. }));
}

#[test]
fn test_strict_rejects_non_ascii_at_exact_offset() {
    let input = "name,city\r\nAnna,Zürich";
    let err = parse(input).unwrap_err();
    let position = err.position().unwrap();
    assert_eq!(position.offset, input.find('ü').unwrap());
    assert_eq!(position.line, 2);
    assert_eq!(position.column, 7);
}

#[test]
fn test_permissive_keeps_non_ascii() {
    let input = "name,city\r\nAnna,Zürich";
    let document = Parser::permissive().parse(input).unwrap();
    assert_eq!(document.rows(), vec![vec!["name", "city"], vec!["Anna", "Zürich"]]);
}

#[test]
fn test_unterminated_quote_reports_opening_quote() {
    let err = parse("a,\"open").unwrap_err();
    assert_eq!(err.position().map(|p| p.offset), Some(2));
}

#[test]
fn test_non_ascii_inside_quotes_is_pinpointed() {
    let err = parse("a,b\r\n\"xéy\",z").unwrap_err();
    let position = err.position().unwrap();
    assert_eq!(position.offset, 7);
    assert_eq!(position.line, 2);
    assert_eq!(position.column, 3);

    // A broken last field is not mistaken for a short row
    let err = parse("a,b,c\r\n1,\"2é\",3").unwrap_err();
    assert_eq!(err.position().map(|p| p.offset), Some(11));
}

#[test]
fn test_text_after_closing_quote() {
    let err = parse("\"a\"b").unwrap_err();
    assert_eq!(err.position().map(|p| p.offset), Some(3));
}

#[test]
fn test_leading_blank_line_before_content() {
    let err = parse("\r\na,b").unwrap_err();
    assert_eq!(err.position().map(|p| p.offset), Some(2));
}

#[test]
fn test_validation_failure_is_reported() {
    let parser = Parser::strict().with_validation(
        ValidationOptions::new()
            .with_expected_columns(["id", "name"])
            .with_non_exhaustive_rows(false),
    );
    assert!(parser.parse("name,id\r\n1,2").is_ok());
    assert_eq!(
        parser.parse("id,name,extra\r\n1,2,3").unwrap_err(),
        Error::AdditionalColumns(vec!["extra".to_string()])
    );
    assert_eq!(
        parser.parse("id\r\n1").unwrap_err(),
        Error::MissingColumns(vec!["name".to_string()])
    );
    // No header row, nothing to validate
    assert!(parser.parse("").unwrap().is_empty());
}

#[test]
fn test_bom_skipping() {
    let input = "\u{FEFF}a,b";
    assert!(parse(input).is_err());

    let document = Parser::strict().with_bom_skipping(true).parse(input).unwrap();
    assert_eq!(document.rows(), vec![vec!["a", "b"]]);

    let err = Parser::strict()
        .with_bom_skipping(true)
        .parse("\u{FEFF}a,é")
        .unwrap_err();
    assert_eq!(err.position().map(|p| p.offset), Some(5));
}

#[test]
fn test_parse_owned_outlives_input() {
    let document = {
        let input = String::from("x,y\r\n1,2");
        Parser::strict().parse_owned(&input).unwrap()
    };
    assert_eq!(document.rows(), vec![vec!["x", "y"], vec!["1", "2"]]);
}

#[test]
fn test_tsv_grammar() {
    let grammar = GrammarOptions::tsv().build().unwrap();
    let document = Parser::new(&grammar)
        .parse("a\tb,c\r\n1\t\"2\t3\"")
        .unwrap();
    assert_eq!(document.rows(), vec![vec!["a", "b,c"], vec!["1", "2\t3"]]);
}

#[test]
fn test_lf_end_of_line_grammar() {
    let grammar = GrammarOptions::permissive().with_end_of_line('\n').build().unwrap();
    let document = Parser::new(&grammar).parse("a,b\n1,2\n").unwrap();
    assert_eq!(document.rows(), vec![vec!["a", "b"], vec!["1", "2"]]);
}

#[test]
fn test_parser_is_reusable() {
    let parser = Parser::strict();
    let first = parser.parse("a,b").unwrap();
    let second = parser.parse("c").unwrap();
    assert_eq!(first.width(), 2);
    assert_eq!(second.width(), 1);
}

//! Unit tests for placeholder tokenization

use crate::template::engine::tokenize::{tokenize, Piece, PieceStream, Placeholder};
use crate::config::consts;
use crate::template::{TemplateError, Value};

fn pieces(format: &str) -> Result<Vec<Piece<'_>>, TemplateError> {
    PieceStream::new(format).collect()
}

fn placeholder(index: Option<usize>, specifier: Option<&str>) -> Piece<'_> {
    Piece::Placeholder(Placeholder { index, specifier })
}

#[test]
fn test_piece_stream_mixed_content() {
    let result = pieces("a {} b {{c}} {1:raw}").unwrap();
    assert_eq!(
        result,
        vec![
            Piece::Text("a "),
            placeholder(None, None),
            Piece::Text(" b "),
            Piece::Text("{"),
            Piece::Text("c"),
            Piece::Text("}"),
            Piece::Text(" "),
            placeholder(Some(1), Some("raw")),
        ]
    );
}

#[test]
fn test_piece_stream_plain_text() {
    assert_eq!(pieces("no placeholders").unwrap(), vec![Piece::Text("no placeholders")]);
    assert_eq!(pieces("").unwrap(), vec![]);
}

#[test]
fn test_piece_stream_keeps_specifier_untrimmed() {
    assert_eq!(pieces("{: raw }").unwrap(), vec![placeholder(None, Some(" raw "))]);
    assert_eq!(pieces("{:}").unwrap(), vec![placeholder(None, Some(""))]);
}

#[test]
fn test_piece_stream_specifier_may_contain_colons() {
    assert_eq!(
        pieces("{0:raw:pretty}").unwrap(),
        vec![placeholder(Some(0), Some("raw:pretty"))]
    );
}

#[test]
fn test_piece_stream_unicode_text() {
    assert_eq!(
        pieces("héllo {} wörld").unwrap(),
        vec![
            Piece::Text("héllo "),
            placeholder(None, None),
            Piece::Text(" wörld"),
        ]
    );
}

#[test]
fn test_piece_stream_unclosed_placeholder() {
    match pieces("abc {") {
        Err(TemplateError::MalformedSyntax { offset, .. }) => assert_eq!(offset, 4),
        other => panic!("Expected MalformedSyntax, got {:?}", other),
    }
    assert!(pieces("abc {0").is_err());
}

#[test]
fn test_piece_stream_lone_closing_brace() {
    match pieces("a } b") {
        Err(TemplateError::MalformedSyntax { offset, .. }) => assert_eq!(offset, 2),
        other => panic!("Expected MalformedSyntax, got {:?}", other),
    }
    assert!(pieces("trailing }").is_err());
}

#[test]
fn test_piece_stream_nested_brace() {
    assert!(matches!(
        pieces("{a{b}"),
        Err(TemplateError::MalformedSyntax { offset: 2, .. })
    ));
}

#[test]
fn test_piece_stream_invalid_index() {
    assert!(matches!(
        pieces("{x}"),
        Err(TemplateError::MalformedSyntax { offset: 0, .. })
    ));
}

#[test]
fn test_piece_stream_stops_after_error() {
    let mut stream = PieceStream::new("} more {}");
    assert!(matches!(stream.next(), Some(Err(_))));
    assert!(stream.next().is_none());
}

#[test]
fn test_tokenize_replaces_in_order() {
    let tokenized = tokenize("x{}y{}", vec![Value::Int(1), Value::Int(2)]).unwrap();
    assert_eq!(tokenized.replacements.len(), 2);

    let (first, first_arg) = &tokenized.replacements[0];
    let (second, second_arg) = &tokenized.replacements[1];
    assert_ne!(first, second);
    assert_eq!(tokenized.text, format!("x{}y{}", first, second));
    assert!(matches!(first_arg.value, Value::Int(1)));
    assert!(matches!(second_arg.value, Value::Int(2)));
}

#[test]
fn test_tokens_are_long_random_identifiers() {
    let tokenized = tokenize("{}", vec![Value::Null]).unwrap();
    let (token, _) = &tokenized.replacements[0];
    assert_eq!(token.len(), consts::token::TOKEN_LEN);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit() || c == '-'));
}

#[test]
fn test_tokenize_records_specifiers() {
    let tokenized = tokenize("{:raw} {: F2 }", vec![Value::Int(1), Value::Int(2)]).unwrap();
    let specifiers: Vec<_> = tokenized
        .replacements
        .iter()
        .map(|(_, arg)| arg.format_specifier.as_deref())
        .collect();
    assert_eq!(specifiers, vec![Some("raw"), Some(" F2 ")]);
}

#[test]
fn test_tokenize_reuses_explicit_index() {
    let tokenized = tokenize("{0}-{0}", vec![Value::from("a")]).unwrap();
    assert_eq!(tokenized.replacements.len(), 2);
    for (_, arg) in &tokenized.replacements {
        assert!(matches!(&arg.value, Value::Str(s) if s == "a"));
    }
}

#[test]
fn test_tokenize_mixes_implicit_and_explicit() {
    let tokenized = tokenize("{1}{}{}", vec![Value::from("a"), Value::from("b")]).unwrap();
    let values: Vec<_> = tokenized
        .replacements
        .iter()
        .map(|(_, arg)| match &arg.value {
            Value::Str(s) => s.as_str(),
            _ => panic!("Expected string"),
        })
        .collect();
    assert_eq!(values, vec!["b", "a", "b"]);
}

#[test]
fn test_tokenize_escaped_braces() {
    let tokenized = tokenize("{{{}}}", vec![Value::Int(5)]).unwrap();
    let (token, _) = &tokenized.replacements[0];
    assert_eq!(tokenized.text, format!("{{{}}}", token));
}

#[test]
fn test_tokenize_missing_argument() {
    let err = tokenize("{} {}", vec![Value::Int(1)]).unwrap_err();
    assert_eq!(err, TemplateError::MissingArgument { index: 1, count: 1 });

    let err = tokenize("{3}", vec![Value::Int(1)]).unwrap_err();
    assert_eq!(err, TemplateError::MissingArgument { index: 3, count: 1 });
}

#[test]
fn test_tokenize_unused_argument() {
    let err = tokenize("{}", vec![Value::Int(1), Value::Int(2)]).unwrap_err();
    assert_eq!(err, TemplateError::UnusedArgument { index: 1 });
}

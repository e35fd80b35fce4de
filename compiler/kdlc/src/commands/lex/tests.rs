use super::*;
use kdl_lexer::{tokenize, LexErrorKind};
use pretty_assertions::assert_eq;

#[test]
fn renders_every_token() {
    let tokens = tokenize("a 1").unwrap();
    let out = render_tokens("doc.kdl", &tokens, &LexOptions::default());
    assert_eq!(
        out,
        "Tokens for 'doc.kdl' (4 tokens):\n\
         \x20 IDENT \"a\" @ 0..1\n\
         \x20 WS \" \" @ 1..2\n\
         \x20 INTEGER 1 @ 2..3\n\
         \x20 EOF @ 3..3\n"
    );
}

#[test]
fn hides_trivia() {
    let tokens = tokenize("a\n  b").unwrap();
    let options = LexOptions { show_trivia: false };
    let out = render_tokens("doc.kdl", &tokens, &options);
    assert_eq!(
        out,
        "Tokens for 'doc.kdl' (3 tokens):\n\
         \x20 IDENT \"a\" @ 0..1\n\
         \x20 IDENT \"b\" @ 4..5\n\
         \x20 EOF @ 5..5\n"
    );
}

#[test]
fn scan_all_matches_tokenize() {
    let source = "node 1 /* c */ \"two\"; r#\"three\"#\n";
    let buffer = SourceBuffer::new(source);
    assert_eq!(scan_all(&buffer).unwrap(), tokenize(source).unwrap());
}

#[test]
fn scan_all_stops_at_first_error() {
    let buffer = SourceBuffer::new("a [ b");
    let err = scan_all(&buffer).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { found: '[' });
    assert_eq!(err.pos, 2);
}

#[test]
fn error_range_covers_offending_char() {
    let buffer = SourceBuffer::new("a [");
    let err = scan_all(&buffer).unwrap_err();
    assert_eq!(error_range(&err, &buffer), 2..3);
}

#[test]
fn error_range_at_end_of_input_is_empty() {
    let buffer = SourceBuffer::new("\"open");
    let err = scan_all(&buffer).unwrap_err();
    assert_eq!(error_range(&err, &buffer), 5..5);
}

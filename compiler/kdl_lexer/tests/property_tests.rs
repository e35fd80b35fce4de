//! Property-based tests for the scanner.
//!
//! Generates documents from well-formed fragments and checks the stream
//! invariants a parser relies on: one EOF, ordered spans, full consumption.
//! Arbitrary input must never panic, only fail with a `LexError`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use kdl_lexer::{tokenize, Scanner, SourceBuffer, TokenKind, TokenValue};
use proptest::prelude::*;

// -- Fragment Strategies --

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_.-]{0,12}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| {
            !matches!(s.as_str(), "true" | "false" | "null") && !s.starts_with('r')
        })
}

fn string_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[a-z ]{0,8}(\\[nrt"\\bf][a-z ]{0,4}){0,3}"#)
        .expect("valid regex")
        .prop_map(|body| format!("\"{body}\""))
}

fn raw_string_strategy() -> impl Strategy<Value = String> {
    // Bodies never contain `#`, so any non-empty fence closes only at the end.
    (1usize..4, prop::string::string_regex("[a-z \"]{0,10}").expect("valid regex")).prop_map(
        |(fence, body)| {
            let hashes = "#".repeat(fence);
            format!("r{hashes}\"{body}\"{hashes}")
        },
    )
}

fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i32>().prop_map(|n| n.to_string()),
        any::<u32>().prop_map(|n| format!("0x{n:X}")),
        any::<u16>().prop_map(|n| format!("0o{n:o}")),
        any::<u16>().prop_map(|n| format!("0b{n:b}")),
        (0u32..1000, 0u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
    ]
}

fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        string_strategy(),
        raw_string_strategy(),
        number_strategy(),
        Just("true".to_string()),
        Just("null".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just("=".to_string()),
        Just(";".to_string()),
        Just("/-".to_string()),
    ]
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("\t".to_string()),
        Just("\n".to_string()),
        Just("\r\n".to_string()),
        Just(" /* c /* d */ */ ".to_string()),
        Just(" // note\n".to_string()),
        Just(" \\\n".to_string()),
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((fragment_strategy(), separator_strategy()), 0..24).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, separator)| fragment + &separator)
            .collect()
    })
}

proptest! {
    #[test]
    fn well_formed_documents_drain(source in document_strategy()) {
        let buffer = SourceBuffer::new(&source);
        let mut scanner = Scanner::new(&buffer);
        let mut eofs = 0;
        let mut last_end = 0;
        while let Some(token) = scanner.next_token().unwrap() {
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.end <= buffer.len());
            last_end = token.span.end;
            if token.kind == TokenKind::Eof {
                eofs += 1;
            }
        }
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(scanner.position(), buffer.len());
        prop_assert_eq!(scanner.next_token(), Ok(None));
    }

    #[test]
    fn arbitrary_input_never_panics(source in any::<String>()) {
        let buffer = SourceBuffer::new(&source);
        let mut scanner = Scanner::new(&buffer);
        loop {
            let Some(result) = scanner.next() else { break };
            prop_assert!(scanner.position() <= buffer.len());
            if result.is_err() {
                prop_assert!(scanner.next().is_none());
                break;
            }
        }
    }

    #[test]
    fn hexadecimal_literals_decode(n in 0..=i64::MAX) {
        let tokens = tokenize(&format!("0x{n:x}")).unwrap();
        prop_assert_eq!(&tokens[0].value, &TokenValue::Int(n));
    }

    #[test]
    fn identifiers_round_trip(name in identifier_strategy()) {
        let tokens = tokenize(&name).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].value, &TokenValue::Str(name.clone()));
    }
}

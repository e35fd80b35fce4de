use super::*;
use crate::LexErrorKind;

#[test]
fn decimal_integers() {
    assert_eq!(parse_decimal("0"), Ok(Number::Integer(0)));
    assert_eq!(parse_decimal("123"), Ok(Number::Integer(123)));
    assert_eq!(parse_decimal("-5"), Ok(Number::Integer(-5)));
    assert_eq!(parse_decimal("+5"), Ok(Number::Integer(5)));
    assert_eq!(parse_decimal("1_000"), Ok(Number::Integer(1000)));
    assert_eq!(parse_decimal("1_000_000"), Ok(Number::Integer(1_000_000)));
}

#[test]
#[allow(
    clippy::approx_constant,
    reason = "testing float parsing, not using mathematical constants"
)]
fn decimal_floats() {
    assert_eq!(parse_decimal("1.5e2"), Ok(Number::Float(150.0)));
    assert_eq!(parse_decimal("3.14"), Ok(Number::Float(3.14)));
    assert_eq!(parse_decimal("-0.5"), Ok(Number::Float(-0.5)));
    assert_eq!(parse_decimal("1_000.5"), Ok(Number::Float(1000.5)));
    assert_eq!(parse_decimal("1e10"), Ok(Number::Float(1e10)));
    assert_eq!(parse_decimal("1E-3"), Ok(Number::Float(0.001)));
    assert_eq!(parse_decimal("2.5E+2"), Ok(Number::Float(250.0)));
}

#[test]
fn malformed_decimals() {
    for text in ["-", "+", "1e", "1.2.3", "1-2", "1.", "1.e3", "--1", "e"] {
        let err = parse_decimal(text).expect_err(text);
        assert!(
            matches!(err.kind, LexErrorKind::InvalidNumber { .. }),
            "{text:?} gave {err:?}"
        );
    }
}

#[test]
fn decimal_overflow() {
    let err = parse_decimal("99999999999999999999999").expect_err("too large for i64");
    assert!(matches!(err.kind, LexErrorKind::NumberOverflow { .. }));

    let err = parse_decimal("1e999").expect_err("infinite float");
    assert!(matches!(err.kind, LexErrorKind::NumberOverflow { .. }));
}

#[test]
fn hexadecimal() {
    assert_eq!(parse_hexadecimal("1A"), Ok(26));
    assert_eq!(parse_hexadecimal("ff"), Ok(255));
    assert_eq!(parse_hexadecimal("dead_beef"), Ok(0xdead_beef));
    assert!(parse_hexadecimal("").is_err());
    let err = parse_hexadecimal("FFFF_FFFF_FFFF_FFFF").expect_err("exceeds i64");
    assert_eq!(
        err.kind,
        LexErrorKind::NumberOverflow {
            text: "FFFF_FFFF_FFFF_FFFF".into(),
            base: NumberBase::Hexadecimal,
        }
    );
}

#[test]
fn octal() {
    assert_eq!(parse_octal("17"), Ok(15));
    assert_eq!(parse_octal("7_7"), Ok(63));
    assert!(parse_octal("").is_err());
}

#[test]
fn binary() {
    assert_eq!(parse_binary("101"), Ok(5));
    assert_eq!(parse_binary("1111_0000"), Ok(240));
    let err = parse_binary("_").expect_err("no digits");
    assert_eq!(
        err.kind,
        LexErrorKind::InvalidNumber {
            text: "_".into(),
            base: NumberBase::Binary,
        }
    );
}

#[test]
fn decode_dispatches_on_base() {
    assert_eq!(decode(NumberBase::Hexadecimal, "10"), Ok(Number::Integer(16)));
    assert_eq!(decode(NumberBase::Octal, "10"), Ok(Number::Integer(8)));
    assert_eq!(decode(NumberBase::Binary, "10"), Ok(Number::Integer(2)));
    assert_eq!(decode(NumberBase::Decimal, "10"), Ok(Number::Integer(10)));
}

#[test]
fn prefix_letters() {
    assert_eq!(NumberBase::from_prefix('x'), Some(NumberBase::Hexadecimal));
    assert_eq!(NumberBase::from_prefix('o'), Some(NumberBase::Octal));
    assert_eq!(NumberBase::from_prefix('b'), Some(NumberBase::Binary));
    assert_eq!(NumberBase::from_prefix('X'), None);
    assert_eq!(NumberBase::from_prefix('d'), None);
}

#[test]
fn accepted_characters() {
    assert!(NumberBase::Decimal.accepts('e'));
    assert!(NumberBase::Decimal.accepts('-'));
    assert!(!NumberBase::Decimal.accepts('x'));
    assert!(NumberBase::Hexadecimal.accepts('F'));
    assert!(!NumberBase::Hexadecimal.accepts('g'));
    assert!(NumberBase::Octal.accepts('7'));
    assert!(!NumberBase::Octal.accepts('8'));
    assert!(NumberBase::Binary.accepts('_'));
    assert!(!NumberBase::Binary.accepts('2'));
}

//! Numeric literal decoders.
//!
//! The scanner accumulates the characters of a literal (without the `0x` /
//! `0o` / `0b` prefix) and hands the text to one of the decoders here.
//! Underscores are separators and are dropped before conversion. Errors are
//! reported at offset 0; the scanner rebases them onto the literal's start.

use std::borrow::Cow;
use std::fmt;
use std::num::IntErrorKind;

use crate::LexError;

/// The four KDL number syntaxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberBase {
    /// `123`, `-4.5e6`: integer or float.
    Decimal,
    /// `0x1F`
    Hexadecimal,
    /// `0o17`
    Octal,
    /// `0b101`
    Binary,
}

impl NumberBase {
    /// Map the letter after a leading `0` to its base (`b`, `o`, `x`).
    pub fn from_prefix(c: char) -> Option<Self> {
        match c {
            'b' => Some(NumberBase::Binary),
            'o' => Some(NumberBase::Octal),
            'x' => Some(NumberBase::Hexadecimal),
            _ => None,
        }
    }

    pub fn radix(self) -> u32 {
        match self {
            NumberBase::Decimal => 10,
            NumberBase::Hexadecimal => 16,
            NumberBase::Octal => 8,
            NumberBase::Binary => 2,
        }
    }

    /// Returns `true` if `c` continues a literal of this base.
    ///
    /// Decimal literals also accept the float and sign characters
    /// (`.`, `e`, `E`, `+`, `-`); validation happens at decode time.
    #[inline]
    pub fn accepts(self, c: char) -> bool {
        match self {
            NumberBase::Decimal => {
                c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | '_' | 'e' | 'E')
            }
            NumberBase::Hexadecimal => c.is_ascii_hexdigit() || c == '_',
            NumberBase::Octal => matches!(c, '0'..='7' | '_'),
            NumberBase::Binary => matches!(c, '0' | '1' | '_'),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NumberBase::Decimal => "decimal",
            NumberBase::Hexadecimal => "hexadecimal",
            NumberBase::Octal => "octal",
            NumberBase::Binary => "binary",
        }
    }
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded numeric literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

/// Drop `_` separators, allocating only when there are any.
#[inline]
fn strip_underscores(text: &str) -> Cow<'_, str> {
    if text.contains('_') {
        Cow::Owned(text.replace('_', ""))
    } else {
        Cow::Borrowed(text)
    }
}

fn parse_integer(text: &str, base: NumberBase) -> Result<i64, LexError> {
    let digits = strip_underscores(text);
    i64::from_str_radix(&digits, base.radix()).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            LexError::number_overflow(0, text, base)
        }
        _ => LexError::invalid_number(0, text, base),
    })
}

/// Decode a decimal literal: a float if the text contains `.`, `e` or `E`,
/// an integer otherwise.
///
/// A `.` must sit between two digits (`1.5`, not `1.` or `1.e3`).
pub fn parse_decimal(text: &str) -> Result<Number, LexError> {
    if !text.contains(['.', 'e', 'E']) {
        return parse_integer(text, NumberBase::Decimal).map(Number::Integer);
    }

    let digits = strip_underscores(text);
    let chars: Vec<char> = digits.chars().collect();
    let dot_is_fractional = |i: usize| {
        i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(char::is_ascii_digit)
    };
    let well_placed_dots = chars
        .iter()
        .enumerate()
        .all(|(i, &c)| c != '.' || dot_is_fractional(i));
    if !well_placed_dots {
        return Err(LexError::invalid_number(0, text, NumberBase::Decimal));
    }

    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Number::Float(value)),
        Ok(_) => Err(LexError::number_overflow(0, text, NumberBase::Decimal)),
        Err(_) => Err(LexError::invalid_number(0, text, NumberBase::Decimal)),
    }
}

/// Decode the digits after `0x`.
pub fn parse_hexadecimal(text: &str) -> Result<i64, LexError> {
    parse_integer(text, NumberBase::Hexadecimal)
}

/// Decode the digits after `0o`.
pub fn parse_octal(text: &str) -> Result<i64, LexError> {
    parse_integer(text, NumberBase::Octal)
}

/// Decode the digits after `0b`.
pub fn parse_binary(text: &str) -> Result<i64, LexError> {
    parse_integer(text, NumberBase::Binary)
}

/// Decode `text` as a literal of `base`.
pub fn decode(base: NumberBase, text: &str) -> Result<Number, LexError> {
    match base {
        NumberBase::Decimal => parse_decimal(text),
        NumberBase::Hexadecimal => parse_hexadecimal(text).map(Number::Integer),
        NumberBase::Octal => parse_octal(text).map(Number::Integer),
        NumberBase::Binary => parse_binary(text).map(Number::Integer),
    }
}

#[cfg(test)]
mod tests;

//! Numeric literals.
//!
//! The grammar is checked byte by byte. Integral literals are accumulated into a `u64` with
//! overflow checks, and then folded into an `i64`. Literals with a fraction or exponent are
//! validated here, and the validated bytes are then handed to a correctly rounding float
//! parser (`lexical` with the `mixed_numerics` feature, `fast-float` without), which avoids
//! the double rounding you'd get by scaling an accumulated mantissa by hand.
use super::Decoder;
use crate::errors::{DecodeResult, Details};
use crate::lexer::{is_digit, is_terminator};
use crate::value::JsonValue;

/// Magnitude of `i64::MIN`, which has no positive counterpart
const I64_MIN_MAGNITUDE: u64 = i64::MAX as u64 + 1;

impl<'a> Decoder<'a> {
    pub(super) fn parse_number(&mut self) -> DecodeResult<JsonValue> {
        let start = self.cursor.offset();
        let negative = self.cursor.peek(0) == Some(b'-');
        if negative {
            self.cursor.bump(1);
        }

        let significand = self.parse_significand()?;

        let mut floating = false;
        if self.cursor.peek(0) == Some(b'.') {
            self.cursor.bump(1);
            self.skip_fraction()?;
            floating = true;
        }
        if let Some(b'e') | Some(b'E') = self.cursor.peek(0) {
            self.cursor.bump(1);
            self.skip_exponent()?;
            floating = true;
        }

        match self.cursor.peek(0) {
            None => (),
            Some(b) if is_terminator(b) => (),
            Some(b'/') if self.options.allow_comments => (),
            Some(_) => return Err(Details::InvalidNumber),
        }

        if floating {
            let literal = &self.cursor.bytes()[start..self.cursor.offset()];
            return parse_float(literal).map(JsonValue::Float);
        }
        fold_integer(significand, negative).map(JsonValue::Integer)
    }

    /// The integer part: a lone zero, or a run of digits without a leading zero
    fn parse_significand(&mut self) -> DecodeResult<u64> {
        match self.cursor.peek(0) {
            Some(b'0') => {
                self.cursor.bump(1);
                match self.cursor.peek(0) {
                    Some(b) if is_digit(b) => Err(Details::InvalidNumber),
                    _ => Ok(0),
                }
            }
            Some(b) if is_digit(b) => {
                let mut significand: u64 = 0;
                while let Some(b) = self.cursor.peek(0) {
                    if !is_digit(b) {
                        break;
                    }
                    significand = significand
                        .checked_mul(10)
                        .and_then(|s| s.checked_add((b - b'0') as u64))
                        .ok_or(Details::NumberOverflow)?;
                    self.cursor.bump(1);
                }
                Ok(significand)
            }
            _ => Err(Details::InvalidNumber),
        }
    }

    /// The digits following a decimal point, of which there must be at least one
    fn skip_fraction(&mut self) -> DecodeResult<()> {
        self.skip_digits()
    }

    /// An optionally signed exponent. Only the shape is checked here, the float parser copes with
    /// any magnitude and decides whether the result is finite
    fn skip_exponent(&mut self) -> DecodeResult<()> {
        if let Some(b'-') | Some(b'+') = self.cursor.peek(0) {
            self.cursor.bump(1);
        }
        self.skip_digits()
    }

    /// A non-empty run of digits
    fn skip_digits(&mut self) -> DecodeResult<()> {
        let digits = self
            .cursor
            .remaining()
            .iter()
            .take_while(|b| is_digit(**b))
            .count();
        if digits == 0 {
            return Err(Details::InvalidNumber);
        }
        self.cursor.bump(digits);
        Ok(())
    }
}

/// Apply the sign to an accumulated magnitude. `i64::MIN` is the one magnitude that only fits
/// when negated
fn fold_integer(significand: u64, negative: bool) -> DecodeResult<i64> {
    match (significand, negative) {
        (s, false) if s <= i64::MAX as u64 => Ok(s as i64),
        (s, true) if s <= i64::MAX as u64 => Ok(-(s as i64)),
        (I64_MIN_MAGNITUDE, true) => Ok(i64::MIN),
        _ => Err(Details::NumberOverflow),
    }
}

/// Convert an already validated float literal. Anything that rounds to infinity is an overflow
fn parse_float(literal: &[u8]) -> DecodeResult<f64> {
    #[cfg(feature = "mixed_numerics")]
    let parsed: Result<f64, _> = lexical::parse(literal).map_err(|_| Details::InvalidNumber);
    #[cfg(not(feature = "mixed_numerics"))]
    let parsed: Result<f64, _> = fast_float::parse(literal).map_err(|_| Details::InvalidNumber);

    let value = parsed?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Details::NumberOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::{fold_integer, parse_float};
    use crate::errors::Details;
    use crate::options::ParserOptions;
    use crate::parser::Parser;
    use crate::value::JsonValue;

    fn number(input: &str) -> Result<JsonValue, Details> {
        Parser::with_options(ParserOptions::default().with_fragments(true))
            .parse_str(input)
            .map_err(|err| err.details)
    }

    #[test]
    fn should_parse_integers() {
        assert_eq!(number("0"), Ok(JsonValue::Integer(0)));
        assert_eq!(number("-0"), Ok(JsonValue::Integer(0)));
        assert_eq!(number("1234567890"), Ok(JsonValue::Integer(1234567890)));
        assert_eq!(number("-17"), Ok(JsonValue::Integer(-17)));
        assert_eq!(
            number("9223372036854775807"),
            Ok(JsonValue::Integer(i64::MAX))
        );
    }

    #[test]
    fn should_handle_the_i64_boundaries() {
        assert_eq!(
            number("-9223372036854775808"),
            Ok(JsonValue::Integer(i64::MIN))
        );
        assert_eq!(number("9223372036854775808"), Err(Details::NumberOverflow));
        assert_eq!(number("-9223372036854775809"), Err(Details::NumberOverflow));
        assert_eq!(number("18446744073709551616"), Err(Details::NumberOverflow));
    }

    #[test]
    fn should_parse_floats() {
        assert_eq!(number("0.5"), Ok(JsonValue::Float(0.5)));
        assert_eq!(number("-1.25"), Ok(JsonValue::Float(-1.25)));
        assert_eq!(number("1e3"), Ok(JsonValue::Float(1000.0)));
        assert_eq!(number("1E+2"), Ok(JsonValue::Float(100.0)));
        assert_eq!(number("25e-2"), Ok(JsonValue::Float(0.25)));
        assert_eq!(number("1.0"), Ok(JsonValue::Float(1.0)));
        assert_eq!(number("0.1"), Ok(JsonValue::Float(0.1)));
        assert_eq!(number("1e-400"), Ok(JsonValue::Float(0.0)));
    }

    #[test]
    fn should_accept_long_exponents_with_finite_values() {
        assert_eq!(number("1e-9999999999"), Ok(JsonValue::Float(0.0)));
        assert_eq!(number("0e9999999999"), Ok(JsonValue::Float(0.0)));
        assert_eq!(number("-2.5E-00000000000000000001"), Ok(JsonValue::Float(-0.25)));
    }

    #[test]
    fn should_round_floats_correctly() {
        assert_eq!(number("0.3"), Ok(JsonValue::Float(0.3)));
        assert_eq!(
            number("2.2250738585072014e-308"),
            Ok(JsonValue::Float(2.2250738585072014e-308))
        );
        assert_eq!(
            number("0.30000000000000004441"),
            Ok(JsonValue::Float(0.30000000000000004))
        );
    }

    #[test]
    fn should_correctly_handle_invalid_numbers() {
        for input in ["01", "-01", "-", "1.", "1.e5", ".5", "1e", "1e+", "-a", "1x", "0x10", "1.5.2", "+1"] {
            let result = number(input);
            assert!(
                matches!(result, Err(Details::InvalidNumber) | Err(Details::InvalidSyntax)),
                "{input} gave {result:?}"
            );
        }
        assert_eq!(number("01"), Err(Details::InvalidNumber));
        assert_eq!(number("1.5.2"), Err(Details::InvalidNumber));
    }

    #[test]
    fn should_report_overflowing_floats() {
        assert_eq!(number("1e400"), Err(Details::NumberOverflow));
        assert_eq!(number("1e99999999999"), Err(Details::NumberOverflow));
    }

    #[test]
    fn should_terminate_numbers_at_structural_bytes() {
        let parsed = Parser::default().parse_str("[1,-2.5,3e1]").unwrap();
        assert_eq!(
            parsed,
            JsonValue::Array(vec![
                JsonValue::Integer(1),
                JsonValue::Float(-2.5),
                JsonValue::Float(30.0)
            ])
        );
        let parsed = Parser::default().parse_str(r#"{"n":7}"#).unwrap();
        assert_eq!(parsed.get("n"), Some(&JsonValue::Integer(7)));
    }

    #[test]
    fn should_only_terminate_numbers_at_slashes_with_comments_enabled() {
        assert_eq!(
            Parser::default().parse_str("[1/*c*/]").unwrap_err().details,
            Details::InvalidNumber
        );
        let parser = Parser::with_options(ParserOptions::default().with_comments(true));
        assert_eq!(
            parser.parse_str("[1/*c*/]"),
            Ok(JsonValue::Array(vec![JsonValue::Integer(1)]))
        );
    }

    #[test]
    fn should_fold_signed_magnitudes() {
        assert_eq!(fold_integer(5, true), Ok(-5));
        assert_eq!(fold_integer(1 << 63, true), Ok(i64::MIN));
        assert_eq!(fold_integer(1 << 63, false), Err(Details::NumberOverflow));
        assert_eq!(fold_integer(u64::MAX, true), Err(Details::NumberOverflow));
        assert_eq!(parse_float(b"-0.0"), Ok(-0.0));
    }
}

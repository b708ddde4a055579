//! Lexical helpers: byte classification and literal matching, built on top of the [Cursor]
use crate::cursor::Cursor;
use crate::errors::{DecodeResult, Details};

/// Sequence of bytes forming a 'null' token
pub const NULL_SEQUENCE: &[u8] = b"null";
/// Sequence of bytes forming a 'true' token
pub const TRUE_SEQUENCE: &[u8] = b"true";
/// Sequence of bytes forming a 'false' token
pub const FALSE_SEQUENCE: &[u8] = b"false";

#[inline(always)]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// JSON whitespace, plus form feed
#[inline(always)]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0c)
}

/// Bytes which legally end a number or literal without being part of it
#[inline(always)]
pub const fn is_terminator(b: u8) -> bool {
    is_whitespace(b) || matches!(b, b',' | b'}' | b']')
}

/// Map a single hex digit onto its value
#[inline(always)]
pub const fn hex_value(b: u8) -> Option<u16> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u16),
        b'a'..=b'f' => Some((b - b'a' + 10) as u16),
        b'A'..=b'F' => Some((b - b'A' + 10) as u16),
        _ => None,
    }
}

/// Consume and match (exactly) a literal byte sequence, the first byte of which the caller has
/// already peeked. Fails with [Details::InvalidLiteral] on the first mismatching byte, or if the
/// input runs out part way through
pub fn match_exact(cursor: &mut Cursor, seq: &[u8]) -> DecodeResult<()> {
    for expected in seq {
        match cursor.peek(0) {
            Some(b) if b == *expected => cursor.bump(1),
            _ => return Err(Details::InvalidLiteral),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_terminators() {
        for b in b" \t\r\n,}]" {
            assert!(is_terminator(*b));
        }
        for b in b"0a.e-:[{\"" {
            assert!(!is_terminator(*b));
        }
    }

    #[test]
    fn should_decode_hex_digits() {
        assert_eq!(hex_value(b'0'), Some(0));
        assert_eq!(hex_value(b'9'), Some(9));
        assert_eq!(hex_value(b'a'), Some(10));
        assert_eq!(hex_value(b'F'), Some(15));
        assert_eq!(hex_value(b'g'), None);
        assert!(is_digit(b'7') && !is_digit(b'a'));
    }

    #[test]
    fn should_match_literals() {
        let mut cursor = Cursor::new(b"null true");
        assert!(match_exact(&mut cursor, NULL_SEQUENCE).is_ok());
        assert_eq!(cursor.offset(), 4);
    }

    #[test]
    fn should_correctly_report_errors_for_booleans() {
        let mut cursor = Cursor::new(b"farse");
        assert_eq!(
            match_exact(&mut cursor, FALSE_SEQUENCE),
            Err(Details::InvalidLiteral)
        );
        assert_eq!(cursor.offset(), 2);

        let mut cursor = Cursor::new(b"tru");
        assert_eq!(
            match_exact(&mut cursor, TRUE_SEQUENCE),
            Err(Details::InvalidLiteral)
        );
    }
}

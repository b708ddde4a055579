//! String literals, escape sequences and UTF-16 surrogate pairs
use super::Decoder;
use crate::errors::{DecodeResult, Details};
use crate::lexer::hex_value;

/// Single character escapes, and the bytes they stand for
const SIMPLE_ESCAPES: [(u8, u8); 8] = [
    (b'"', b'"'),
    (b'\\', b'\\'),
    (b'/', b'/'),
    (b'b', 0x08),
    (b'f', 0x0c),
    (b'n', b'\n'),
    (b'r', b'\r'),
    (b't', b'\t'),
];

#[inline]
fn simple_escape(b: u8) -> Option<u8> {
    SIMPLE_ESCAPES
        .iter()
        .find(|(escape, _)| *escape == b)
        .map(|(_, byte)| *byte)
}

const LEAD_SURROGATES: std::ops::RangeInclusive<u16> = 0xd800..=0xdbff;
const TRAIL_SURROGATES: std::ops::RangeInclusive<u16> = 0xdc00..=0xdfff;

impl<'a> Decoder<'a> {
    /// Decode a string literal, the cursor sitting on the opening quote. Unescaped runs are
    /// copied into the scratch buffer in one go, escapes are translated one at a time
    pub(super) fn parse_string(&mut self) -> DecodeResult<String> {
        self.cursor.bump(1);
        self.scratch.clear();
        loop {
            let run = self
                .cursor
                .remaining()
                .iter()
                .take_while(|b| !matches!(**b, b'"' | b'\\') && **b >= 0x20)
                .count();
            // runs end on an ASCII byte, so a multi-byte sequence never straddles two of them
            let chunk = &self.cursor.remaining()[..run];
            if let Err(err) = std::str::from_utf8(chunk) {
                self.cursor.bump(err.valid_up_to());
                return Err(Details::InvalidUnicode);
            }
            self.scratch.extend_from_slice(chunk);
            self.cursor.bump(run);

            match self.cursor.peek(0) {
                Some(b'"') => {
                    self.cursor.bump(1);
                    break;
                }
                Some(b'\\') => {
                    self.cursor.bump(1);
                    self.parse_escape_sequence()?;
                }
                // raw control characters must be escaped
                Some(_) => return Err(Details::InvalidSyntax),
                None => return Err(Details::EndOfStream),
            }
        }
        match std::str::from_utf8(&self.scratch) {
            Ok(s) => Ok(s.to_owned()),
            Err(_) => Err(Details::InvalidUnicode),
        }
    }

    /// Translate the escape following a backslash
    fn parse_escape_sequence(&mut self) -> DecodeResult<()> {
        let b = self.cursor.pop()?;
        if b == b'u' {
            return self.parse_unicode_escape_sequence();
        }
        match simple_escape(b) {
            Some(byte) => {
                self.scratch.push(byte);
                Ok(())
            }
            None => Err(Details::InvalidEscape),
        }
    }

    /// Decode a `\uXXXX` escape (the `\u` already consumed) to a scalar, pairing up surrogates,
    /// and append the scalar to the scratch buffer as UTF-8
    fn parse_unicode_escape_sequence(&mut self) -> DecodeResult<()> {
        let unit = self.parse_code_unit()?;
        let scalar = if LEAD_SURROGATES.contains(&unit) {
            match (self.cursor.peek(0), self.cursor.peek(1)) {
                (Some(b'\\'), Some(b'u')) => self.cursor.bump(2),
                (None, _) | (Some(b'\\'), None) => return Err(Details::EndOfStream),
                _ => return Err(Details::InvalidUnicode),
            }
            let trail = self.parse_code_unit()?;
            if !TRAIL_SURROGATES.contains(&trail) {
                return Err(Details::InvalidUnicode);
            }
            0x10000 + (((unit as u32) - 0xd800) << 10) + ((trail as u32) - 0xdc00)
        } else {
            unit as u32
        };
        let c = char::from_u32(scalar).ok_or(Details::InvalidUnicode)?;
        let mut encoded = [0u8; 4];
        self.scratch
            .extend_from_slice(c.encode_utf8(&mut encoded).as_bytes());
        Ok(())
    }

    /// Four hex digits, as a UTF-16 code unit
    fn parse_code_unit(&mut self) -> DecodeResult<u16> {
        let mut unit: u16 = 0;
        for _ in 0..4 {
            let b = self.cursor.peek(0).ok_or(Details::EndOfStream)?;
            let digit = hex_value(b).ok_or(Details::InvalidEscape)?;
            unit = (unit << 4) | digit;
            self.cursor.bump(1);
        }
        Ok(unit)
    }
}

//! Objects and arrays
use indexmap::IndexMap;

use super::Decoder;
use crate::errors::{DecodeResult, Details};
use crate::value::JsonValue;

impl<'a> Decoder<'a> {
    /// An object is just a list of comma separated KV pairs
    pub(super) fn parse_object(&mut self) -> DecodeResult<JsonValue> {
        self.cursor.bump(1);
        self.skip_insignificant()?;
        if self.cursor.peek(0) == Some(b'}') {
            self.cursor.bump(1);
            return Ok(JsonValue::Object(IndexMap::new()));
        }

        let mut entries = IndexMap::new();
        // at least one pair read (including any elided nulls)
        let mut seen = false;
        // a comma has been consumed and not yet followed by a pair
        let mut pending_comma = false;
        loop {
            match self.cursor.peek(0) {
                Some(b'"') => {
                    if seen && !pending_comma {
                        return Err(Details::ExpectedComma);
                    }
                    let key = self.parse_string()?;
                    self.skip_insignificant()?;
                    match self.cursor.peek(0) {
                        Some(b':') => self.cursor.bump(1),
                        Some(_) => return Err(Details::ExpectedColon),
                        None => return Err(Details::EndOfStream),
                    }
                    self.skip_insignificant()?;
                    let value = self.parse_value()?;
                    if !(self.options.omit_nulls && value.is_null()) {
                        entries.insert(key, value);
                    }
                    seen = true;
                    pending_comma = false;
                }
                Some(b',') => {
                    if !seen || pending_comma {
                        return Err(Details::InvalidSyntax);
                    }
                    self.cursor.bump(1);
                    pending_comma = true;
                    self.skip_insignificant()?;
                }
                Some(b'}') => {
                    if pending_comma {
                        return Err(Details::TrailingComma);
                    }
                    self.cursor.bump(1);
                    return Ok(JsonValue::Object(entries));
                }
                Some(_) => return Err(Details::InvalidSyntax),
                None => return Err(Details::EndOfStream),
            }
        }
    }

    /// An array is just a list of comma separated values
    pub(super) fn parse_array(&mut self) -> DecodeResult<JsonValue> {
        self.cursor.bump(1);
        self.skip_insignificant()?;
        if self.cursor.peek(0) == Some(b']') {
            self.cursor.bump(1);
            return Ok(JsonValue::Array(Vec::new()));
        }

        let mut values = vec![];
        let mut seen = false;
        let mut pending_comma = false;
        loop {
            match self.cursor.peek(0) {
                Some(b']') => {
                    if pending_comma {
                        return Err(Details::TrailingComma);
                    }
                    self.cursor.bump(1);
                    return Ok(JsonValue::Array(values));
                }
                Some(b',') => {
                    if !seen || pending_comma {
                        return Err(Details::InvalidSyntax);
                    }
                    self.cursor.bump(1);
                    pending_comma = true;
                    self.skip_insignificant()?;
                }
                Some(_) => {
                    if seen && !pending_comma {
                        return Err(Details::ExpectedComma);
                    }
                    let value = self.parse_value()?;
                    if !(self.options.omit_nulls && value.is_null()) {
                        values.push(value);
                    }
                    seen = true;
                    pending_comma = false;
                }
                None => return Err(Details::EndOfStream),
            }
        }
    }
}

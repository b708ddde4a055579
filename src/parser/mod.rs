//! The parser driver and value dispatch.
//!
//! A [Parser] is just a bundle of [ParserOptions]; each call to [Parser::parse] creates a fresh
//! `Decoder` holding the cursor and string scratch buffer for that call alone, so a single
//! [Parser] can be shared freely between threads.
//!
//! The grammar is split across submodules, each adding methods to `Decoder`:
//! - `structure`: objects and arrays
//! - `numbers`: numeric literals
//! - `strings`: string literals and escape sequences
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::errors::{DecodeResult, Details, ParserResult};
use crate::lexer::{match_exact, FALSE_SEQUENCE, NULL_SEQUENCE, TRUE_SEQUENCE};
use crate::options::ParserOptions;
use crate::parser_error;
use crate::value::JsonValue;

mod numbers;
mod strings;
mod structure;

/// Default scratch buffer capacity
const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Maximum number of open containers. The grammar recurses once per level, so anything deeper
/// is rejected with [Details::InvalidSyntax] at the offending `[` or `{`
pub const MAX_NESTING_DEPTH: usize = 128;

/// Main JSON parser struct
#[derive(Debug, Default, Copy, Clone)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Create a new instance of the parser using a specific set of [ParserOptions]
    pub fn with_options(options: ParserOptions) -> Self {
        Parser { options }
    }

    /// The options this parser was configured with
    pub fn options(&self) -> ParserOptions {
        self.options
    }

    pub fn parse_bytes(&self, bytes: &[u8]) -> ParserResult<JsonValue> {
        self.parse(bytes)
    }

    pub fn parse_str(&self, str: &str) -> ParserResult<JsonValue> {
        self.parse(str.as_bytes())
    }

    /// Decode a complete JSON text. On failure the returned error carries the byte offset at
    /// which decoding stopped
    pub fn parse<B: AsRef<[u8]>>(&self, input: B) -> ParserResult<JsonValue> {
        let bytes = input.as_ref();
        trace!(len = bytes.len(), options = %self.options, "decoding json");
        if bytes.is_empty() {
            debug!("refusing to decode zero length input");
            return Err(parser_error!(Details::EmptyStream, bytes, 0));
        }
        let mut decoder = Decoder::new(bytes, self.options);
        decoder.decode().map_err(|details| {
            let err = parser_error!(details, bytes, decoder.cursor.offset());
            debug!(
                offset = err.coords.absolute,
                line = err.coords.line,
                column = err.coords.column,
                reason = %details,
                "json decode failed"
            );
            err
        })
    }
}

/// Convenience wrapper around [Parser::parse]
pub fn parse<B: AsRef<[u8]>>(input: B, options: ParserOptions) -> ParserResult<JsonValue> {
    Parser::with_options(options).parse(input)
}

/// State for a single in-flight parse
pub(crate) struct Decoder<'a> {
    cursor: Cursor<'a>,
    /// Reused by every string decoded during the parse
    scratch: Vec<u8>,
    options: ParserOptions,
    /// Number of currently open containers
    depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(bytes: &'a [u8], options: ParserOptions) -> Self {
        Decoder {
            cursor: Cursor::new(bytes),
            scratch: Vec::with_capacity(DEFAULT_BUFFER_CAPACITY),
            options,
            depth: 0,
        }
    }

    /// Top level: optional fragment check, exactly one value, nothing but whitespace (and
    /// comments, if enabled) afterwards
    fn decode(&mut self) -> DecodeResult<JsonValue> {
        self.skip_insignificant()?;
        if !self.options.allow_fragments {
            match self.cursor.peek(0) {
                Some(b'{') | Some(b'[') => (),
                Some(_) => return Err(Details::FragmentedJson),
                None => return Err(Details::EndOfStream),
            }
        }
        let value = self.parse_value()?;
        self.skip_insignificant()?;
        if !self.cursor.at_end() {
            return Err(Details::InvalidSyntax);
        }
        Ok(value)
    }

    /// Skip whitespace and, when enabled, comments, until the next significant byte
    #[inline]
    fn skip_insignificant(&mut self) -> DecodeResult<()> {
        loop {
            self.cursor.skip_whitespace();
            match self.cursor.peek(0) {
                Some(b'/') if self.options.allow_comments => self.cursor.skip_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Parse a single value, starting on a significant byte. Leaves the cursor on the next
    /// significant byte after the value
    fn parse_value(&mut self) -> DecodeResult<JsonValue> {
        let value = match self.cursor.peek(0) {
            Some(b'{') => self.parse_nested(Self::parse_object)?,
            Some(b'[') => self.parse_nested(Self::parse_array)?,
            Some(b'"') => JsonValue::String(self.parse_string()?),
            Some(b'-') | Some(b'0'..=b'9') => self.parse_number()?,
            Some(b'f') => {
                match_exact(&mut self.cursor, FALSE_SEQUENCE)?;
                JsonValue::Boolean(false)
            }
            Some(b't') => {
                match_exact(&mut self.cursor, TRUE_SEQUENCE)?;
                JsonValue::Boolean(true)
            }
            Some(b'n') => {
                match_exact(&mut self.cursor, NULL_SEQUENCE)?;
                JsonValue::Null
            }
            Some(b'/') if self.options.allow_comments => {
                self.cursor.skip_comment()?;
                self.skip_insignificant()?;
                return self.parse_value();
            }
            Some(_) => return Err(Details::InvalidSyntax),
            None => return Err(Details::EndOfStream),
        };
        self.skip_insignificant()?;
        Ok(value)
    }

    /// Descend into a container, the cursor sitting on its opening byte
    fn parse_nested(
        &mut self,
        parse: fn(&mut Self) -> DecodeResult<JsonValue>,
    ) -> DecodeResult<JsonValue> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Details::InvalidSyntax);
        }
        self.depth += 1;
        let value = parse(self)?;
        self.depth -= 1;
        Ok(value)
    }
}

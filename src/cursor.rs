//! Byte cursor with lookahead.  The cursor is the only component that touches the raw input,
//! everything above it works in terms of [Cursor::peek], [Cursor::pop] and the skip operations.
//!
//! The cursor never allocates, and holds nothing but a borrow of the input and a position.
use crate::errors::{DecodeResult, Details};
use crate::lexer::is_whitespace;

/// A bounds-checked, forward-only cursor over an immutable byte buffer
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The underlying input
    bytes: &'a [u8],
    /// Offset of the next unconsumed byte
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor positioned at the start of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, position: 0 }
    }

    /// The distance, in bytes, between the start of the input and the cursor
    #[inline]
    pub fn offset(&self) -> usize {
        self.position
    }

    /// The full input buffer
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// True once every byte has been consumed
    #[inline]
    pub fn at_end(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// The unconsumed remainder of the input
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.position.min(self.bytes.len())..]
    }

    /// Look at the byte `ahead` positions past the cursor without consuming anything
    #[inline]
    pub fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.position + ahead).copied()
    }

    /// Consume and return the next byte
    #[inline]
    pub fn pop(&mut self) -> DecodeResult<u8> {
        match self.bytes.get(self.position) {
            Some(b) => {
                self.position += 1;
                Ok(*b)
            }
            None => Err(Details::EndOfStream),
        }
    }

    /// Step over `count` bytes that the caller has already inspected via [Cursor::peek] or
    /// [Cursor::remaining]. Internal fast path only: the bounds were established by the caller
    #[inline]
    pub(crate) fn bump(&mut self, count: usize) {
        debug_assert!(self.position + count <= self.bytes.len());
        self.position += count;
    }

    /// Advance past any JSON whitespace (space, tab, CR, LF) and form feeds
    #[inline]
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek(0) {
            if !is_whitespace(b) {
                break;
            }
            self.position += 1;
        }
    }

    /// Consume a single comment. The cursor must be sitting on a `/`. Line comments run up to
    /// and including the next line feed (or the end of the input), block comments up to the
    /// matching `*/`. Whitespace following the comment is skipped too
    pub fn skip_comment(&mut self) -> DecodeResult<()> {
        if self.pop()? != b'/' {
            return Err(Details::InvalidSyntax);
        }
        match self.peek(0) {
            Some(b'/') => {
                self.bump(1);
                match self.remaining().iter().position(|b| *b == b'\n') {
                    Some(nl) => self.bump(nl + 1),
                    None => self.position = self.bytes.len(),
                }
            }
            Some(b'*') => {
                self.bump(1);
                match self.remaining().windows(2).position(|w| w == b"*/") {
                    Some(end) => self.bump(end + 2),
                    None => {
                        self.position = self.bytes.len();
                        return Err(Details::InvalidSyntax);
                    }
                }
            }
            _ => return Err(Details::InvalidSyntax),
        }
        self.skip_whitespace();
        Ok(())
    }
}

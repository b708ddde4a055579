//! General error types for the decoder
use thiserror::Error;

use crate::coords::Coords;

/// Global result type used throughout the public parser API
pub type ParserResult<T> = Result<T, Error>;

/// Result type used by the grammar internals, which only know *what* went wrong. The location
/// is stamped on once, by the driver, on the way out
pub type DecodeResult<T> = Result<T, Details>;

/// The reason a decode failed
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum Details {
    /// Input ran out before the current construct was complete
    #[error("unexpected end of input")]
    EndOfStream,
    /// The supplied buffer was empty
    #[error("zero length input")]
    EmptyStream,
    /// A comma immediately preceded a closing brace or bracket
    #[error("trailing comma")]
    TrailingComma,
    /// Two consecutive values or pairs without a separating comma
    #[error("expected a comma")]
    ExpectedComma,
    /// An object key was not followed by a colon
    #[error("expected a colon")]
    ExpectedColon,
    /// A backslash escape, or a hex digit within a unicode escape, was not recognised
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// Any other grammar violation
    #[error("invalid syntax")]
    InvalidSyntax,
    /// A malformed numeric literal
    #[error("invalid number")]
    InvalidNumber,
    /// A numeric literal outside of the representable range
    #[error("numeric overflow")]
    NumberOverflow,
    /// A malformed `true`, `false` or `null`
    #[error("invalid literal")]
    InvalidLiteral,
    /// A unicode escape that does not decode to a scalar value, or non UTF-8 string content
    #[error("invalid unicode")]
    InvalidUnicode,
    /// A top level scalar was found whilst fragments are disallowed
    #[error("top level value must be an object or array")]
    FragmentedJson,
}

/// A decode failure, together with the location at which it was detected
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("{details} at {coords}")]
pub struct Error {
    /// The reason for the failure
    pub details: Details,
    /// Where in the input the failure was detected
    pub coords: Coords,
}

impl Error {
    /// The byte offset, from the start of the input, at which the failure was detected
    pub fn offset(&self) -> usize {
        self.coords.absolute
    }
}

/// Stamp a [Details] with the location of a byte offset within the input, producing an [Error]
#[macro_export]
macro_rules! parser_error {
    ($details: expr, $bytes: expr, $offset: expr) => {
        $crate::errors::Error {
            details: $details,
            coords: $crate::coords::Coords::locate($bytes, $offset),
        }
    };
}

/// Raised by the typed numeric projections when a value doesn't fit the requested type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert value {value} to target type {target}")]
pub struct ConversionError {
    /// Textual rendering of the offending value
    pub value: String,
    /// Name of the requested type
    pub target: &'static str,
}

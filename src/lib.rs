//! A byte level JSON decoder.
//!
//! Input is decoded directly from a byte slice into a [JsonValue] tree by a hand written
//! recursive descent parser. Integers and floats are kept distinct, unicode escapes (including
//! surrogate pairs) are decoded to UTF-8, and every failure is reported with the exact byte
//! offset at which it was detected.
//!
//! ```
//! use chisel_json_decoder::{JsonValue, Parser, ParserOptions};
//!
//! let parser = Parser::with_options(ParserOptions::default().with_omit_nulls(true));
//! let parsed = parser.parse_str(r#"{"a": [1, null, 2.5]}"#).unwrap();
//! assert_eq!(
//!     parsed.get("a"),
//!     Some(&JsonValue::Array(vec![JsonValue::Integer(1), JsonValue::Float(2.5)]))
//! );
//! ```
pub mod coords;
pub mod cursor;
pub mod errors;
pub mod lexer;
pub mod options;
pub mod parser;
mod projection;
#[cfg(test)]
mod test_macros;
pub mod value;

pub use errors::{ConversionError, Details, Error, ParserResult};
pub use options::ParserOptions;
pub use parser::{parse, Parser, MAX_NESTING_DEPTH};
pub use value::{JsonObject, JsonValue};

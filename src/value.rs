//! The decoded value tree
use std::fmt::{Display, Formatter, Write};

use indexmap::IndexMap;

/// Type used for the entries of a decoded object. Insertion order is preserved, keys are unique
pub type JsonObject = IndexMap<String, JsonValue>;

/// Basic enumeration of different Json values
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// Map of values. Equality ignores key order
    Object(JsonObject),
    /// Array of values
    Array(Vec<JsonValue>),
    /// Canonical string value
    String(String),
    /// Floating point numeric value
    Float(f64),
    /// Integer numeric value
    Integer(i64),
    /// Canonical boolean value
    Boolean(bool),
    /// Canonical null value
    Null,
}

impl JsonValue {
    /// Short name for the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            JsonValue::Object(_) => "object",
            JsonValue::Array(_) => "array",
            JsonValue::String(_) => "string",
            JsonValue::Float(_) => "float",
            JsonValue::Integer(_) => "integer",
            JsonValue::Boolean(_) => "boolean",
            JsonValue::Null => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Floats are returned as is, integers are widened
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Float(f) => Some(*f),
            JsonValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key, if this is an object
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|entries| entries.get(key))
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Boolean(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Integer(value)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Float(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(values: Vec<JsonValue>) -> Self {
        JsonValue::Array(values)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(entries: JsonObject) -> Self {
        JsonValue::Object(entries)
    }
}

/// Write a string literal, quoted and escaped
fn write_string(f: &mut Formatter<'_>, s: &str) -> std::fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0c}' => f.write_str("\\f")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Compact JSON text. Floats use the shortest representation that reads back to the same value,
/// which for finite values always includes a `.` or an exponent, so the numeric kind survives
/// a round trip. Non-finite floats have no JSON representation and are written as `null`
impl Display for JsonValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonValue::Null => f.write_str("null"),
            JsonValue::Boolean(b) => write!(f, "{}", b),
            JsonValue::Integer(i) => write!(f, "{}", i),
            JsonValue::Float(v) if v.is_finite() => write!(f, "{:?}", v),
            JsonValue::Float(_) => f.write_str("null"),
            JsonValue::String(s) => write_string(f, s),
            JsonValue::Array(values) => {
                f.write_char('[')?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_char(']')
            }
            JsonValue::Object(entries) => {
                f.write_char('{')?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_char(',')?;
                    }
                    write_string(f, key)?;
                    write!(f, ":{}", value)?;
                }
                f.write_char('}')
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonObject, JsonValue};

    #[test]
    fn should_encode_scalars() {
        assert_eq!(JsonValue::Null.to_string(), "null");
        assert_eq!(JsonValue::Boolean(true).to_string(), "true");
        assert_eq!(JsonValue::Integer(-42).to_string(), "-42");
        assert_eq!(JsonValue::Float(1.0).to_string(), "1.0");
        assert_eq!(JsonValue::Float(0.5).to_string(), "0.5");
        assert_eq!(JsonValue::Float(1e300).to_string(), "1e300");
        assert_eq!(JsonValue::Float(f64::NAN).to_string(), "null");
    }

    #[test]
    fn should_escape_strings() {
        let value = JsonValue::from("a\"b\\c\nd\u{01}é");
        assert_eq!(value.to_string(), r#""a\"b\\c\nd\u0001é""#);
    }

    #[test]
    fn should_encode_containers() {
        let mut entries = JsonObject::new();
        entries.insert("a".to_string(), JsonValue::Integer(1));
        entries.insert(
            "b".to_string(),
            JsonValue::Array(vec![JsonValue::Null, JsonValue::from("x")]),
        );
        assert_eq!(
            JsonValue::Object(entries).to_string(),
            r#"{"a":1,"b":[null,"x"]}"#
        );
        assert_eq!(JsonValue::Array(vec![]).to_string(), "[]");
    }

    #[test]
    fn objects_should_compare_regardless_of_key_order() {
        let mut left = JsonObject::new();
        left.insert("a".to_string(), JsonValue::Integer(1));
        left.insert("b".to_string(), JsonValue::Integer(2));
        let mut right = JsonObject::new();
        right.insert("b".to_string(), JsonValue::Integer(2));
        right.insert("a".to_string(), JsonValue::Integer(1));
        assert_eq!(JsonValue::Object(left), JsonValue::Object(right));
    }

    #[test]
    fn should_provide_typed_accessors() {
        let mut entries = JsonObject::new();
        entries.insert("n".to_string(), JsonValue::Integer(3));
        let value = JsonValue::Object(entries);
        assert_eq!(value.get("n").and_then(JsonValue::as_i64), Some(3));
        assert_eq!(value.get("n").and_then(JsonValue::as_f64), Some(3.0));
        assert!(value.get("missing").is_none());
        assert_eq!(value.kind(), "object");
        assert!(JsonValue::Null.is_null());
        assert_eq!(JsonValue::from("s").as_str(), Some("s"));
    }
}

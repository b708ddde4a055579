//! Range checked projections of decoded numerics onto fixed width types.
//!
//! Every target type gets a pair of accessors on [JsonValue]: `as_<type>` which returns [None]
//! when the value isn't numeric or doesn't fit, and `to_<type>` which turns that [None] into a
//! [ConversionError]. Integers narrow to a signed type only if in range, and to an unsigned type
//! only if non-negative and in range. Floats narrow to `f32` only if finite and within range.
use crate::errors::ConversionError;
use crate::value::JsonValue;

macro_rules! integer_projection {
    ($as_fn: ident, $to_fn: ident, $target: ty) => {
        #[doc = concat!("Narrow an integer value to `", stringify!($target), "`, if it fits")]
        pub fn $as_fn(&self) -> Option<$target> {
            match self {
                JsonValue::Integer(i) => <$target>::try_from(*i).ok(),
                _ => None,
            }
        }

        #[doc = concat!("Narrow an integer value to `", stringify!($target), "`, or fail")]
        pub fn $to_fn(&self) -> Result<$target, ConversionError> {
            self.$as_fn()
                .ok_or_else(|| self.conversion_error(stringify!($target)))
        }
    };
}

impl JsonValue {
    integer_projection!(as_i8, to_i8, i8);
    integer_projection!(as_i16, to_i16, i16);
    integer_projection!(as_i32, to_i32, i32);
    integer_projection!(as_u8, to_u8, u8);
    integer_projection!(as_u16, to_u16, u16);
    integer_projection!(as_u32, to_u32, u32);
    integer_projection!(as_u64, to_u64, u64);

    pub fn to_i64(&self) -> Result<i64, ConversionError> {
        self.as_i64().ok_or_else(|| self.conversion_error("i64"))
    }

    /// Narrow a float value to `f32`, if finite and within range
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            JsonValue::Float(f) if f.is_finite() && f.abs() <= f32::MAX as f64 => Some(*f as f32),
            _ => None,
        }
    }

    pub fn to_f32(&self) -> Result<f32, ConversionError> {
        self.as_f32().ok_or_else(|| self.conversion_error("f32"))
    }

    pub fn to_f64(&self) -> Result<f64, ConversionError> {
        self.as_f64().ok_or_else(|| self.conversion_error("f64"))
    }

    fn conversion_error(&self, target: &'static str) -> ConversionError {
        ConversionError {
            value: self.to_string(),
            target,
        }
    }
}

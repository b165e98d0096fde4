// used for persistence
use rusqlite::types::{Value, ValueRef};
// used for the JSON codec
use serde::Serialize;
use serde::de::DeserializeOwned;

// used to print out readable forms of a scalar
use std::fmt;
// used to index canonical lists by value
use std::hash::Hash;

use crate::error::{EnumError, Result};

/// The underlying representation of an enum value: something integer-like or string-like.
///
/// Downstream crates may implement this for their own newtypes (a `Priority(u8)` or a
/// `Code(String)`) as long as the storage conversions stay total in one direction and
/// checked in the other.
pub trait Scalar:
    fmt::Display + fmt::Debug + Clone + Eq + Hash + Send + Sync + Serialize + DeserializeOwned + 'static
{
    // static stuff which needs to be implemented downstream
    const KIND: &'static str;
    fn to_storage(&self) -> Value;
    fn from_storage(value: ValueRef<'_>) -> Result<Self>;
    // instance callable with pre-made implementation
    fn kind(&self) -> &'static str {
        Self::KIND
    }
}

macro_rules! integer_scalar {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                const KIND: &'static str = stringify!($t);
                fn to_storage(&self) -> Value {
                    Value::Integer(i64::from(*self))
                }
                fn from_storage(value: ValueRef<'_>) -> Result<$t> {
                    match value {
                        ValueRef::Integer(i) => <$t>::try_from(i).map_err(|_| EnumError::OutOfRange {
                            expected: Self::KIND,
                            value: i,
                        }),
                        other => Err(EnumError::TypeMismatch {
                            expected: Self::KIND,
                            found: other.data_type(),
                        }),
                    }
                }
            }
        )+
    };
}

// u64 and usize are left out, SQLite integers are i64
integer_scalar!(i8, i16, i32, i64, u8, u16, u32);

impl Scalar for String {
    const KIND: &'static str = "String";
    fn to_storage(&self) -> Value {
        Value::Text(self.clone())
    }
    fn from_storage(value: ValueRef<'_>) -> Result<String> {
        match value {
            ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                .map(String::from)
                .map_err(|e| EnumError::InvalidText(e.to_string())),
            other => Err(EnumError::TypeMismatch {
                expected: Self::KIND,
                found: other.data_type(),
            }),
        }
    }
}

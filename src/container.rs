// used for persistence
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
// used for the JSON codec
use serde::{Deserialize, Serialize};

// used to print out readable forms of an enum
use std::fmt;

use crate::error::{EnumError, Result};
use crate::scalar::Scalar;

/// The scalar value container. A family member owns exactly one of these.
///
/// The value is private and there are no setters: after construction the only way to
/// get a different value is to decode a new container. Serde sees straight through the
/// wrapper, so `Enum::new(1)` is `1` in JSON and `Enum::new("passed")` is `"passed"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Enum<T> {
    val: T,
}

impl<T> Enum<T> {
    pub const fn new(val: T) -> Self {
        Self { val }
    }
}

impl<T: Scalar> Enum<T> {
    pub fn value(&self) -> &T {
        &self.val
    }
    pub fn into_value(self) -> T {
        self.val
    }
    pub fn equal_value(&self, other: &T) -> bool {
        self.val == *other
    }
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.val)?)
    }
    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(Self::new(serde_json::from_slice(data)?))
    }
    pub fn to_storage_value(&self) -> Value {
        self.val.to_storage()
    }
    /// Fails when the dynamic type of `value` is not the one `T` is stored as.
    pub fn from_storage_value(value: &Value) -> Result<Self> {
        T::from_storage(ValueRef::from(value)).map(Self::new)
    }
}

impl<T: Scalar> fmt::Display for Enum<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.val)
    }
}

impl<T: Scalar> ToSql for Enum<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(self.val.to_storage()))
    }
}
impl<T: Scalar> FromSql for Enum<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        T::from_storage(value).map(Self::new).map_err(|e| match e {
            EnumError::TypeMismatch { .. } => FromSqlError::InvalidType,
            EnumError::OutOfRange { value, .. } => FromSqlError::OutOfRange(value),
            other => FromSqlError::Other(Box::new(other)),
        })
    }
}

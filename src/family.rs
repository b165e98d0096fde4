//! Family identity and the enum capability contract.
//!
//! A *family* is the set of enum values that may be compared with each other. It is a
//! property of the Rust type that carries the [`Enum`] container, never of the scalar
//! inside it: a `BuildState("passed")` and a `JobState("passed")` wrap the same string
//! but belong to different families.
//!
//! Identity is resolved as follows:
//! * a bare `Enum<T>` is its own family;
//! * a type that owns an `Enum<T>` (by value or behind a `Box`) is the family, not the
//!   container it owns;
//! * `&E`, `Box<E>` and `Arc<E>` are looked through, so the way a value is currently held
//!   never changes the answer.

// used for persistence
use rusqlite::types::Value;

// used to derive an identity from a concrete type
use std::any::{self, TypeId};
// used to print out readable forms of a family
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::container::Enum;
use crate::error::{EnumError, Result};
use crate::scalar::Scalar;

/// Identity token of an enum family. Two tokens are equal iff they were resolved from the
/// same concrete type; the name only exists for messages.
#[derive(Clone, Copy, Debug)]
pub struct Family {
    id: TypeId,
    name: &'static str,
}

impl Family {
    pub fn of<F: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<F>(),
            name: any::type_name::<F>(),
        }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
}
impl PartialEq for Family {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Family {}
impl Hash for Family {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The capability contract every family member provides.
///
/// Implementors only supply `inner` and `family`; the rest delegates to the container.
/// The trait is object safe so heterogeneous lists (`Vec<Box<dyn Enummer<Value = String>>>`)
/// can be checked at run time.
pub trait Enummer: fmt::Display + fmt::Debug {
    type Value: Scalar;
    fn inner(&self) -> &Enum<Self::Value>;
    fn family(&self) -> Family;

    fn value(&self) -> &Self::Value {
        self.inner().value()
    }
    fn text(&self) -> String {
        self.inner().to_string()
    }
    fn equal_value(&self, other: &Self::Value) -> bool {
        self.inner().equal_value(other)
    }
    fn to_json(&self) -> Result<Vec<u8>> {
        self.inner().to_json()
    }
    fn to_storage_value(&self) -> Value {
        self.inner().to_storage_value()
    }
}

/// Decoding side of the contract, split off because it needs `Self: Sized`.
pub trait FromEnum: Enummer + Sized {
    fn from_enum(inner: Enum<Self::Value>) -> Self;

    fn from_json(data: &[u8]) -> Result<Self> {
        Enum::<Self::Value>::from_json(data).map(Self::from_enum)
    }
    fn from_storage_value(value: &Value) -> Result<Self> {
        Enum::<Self::Value>::from_storage_value(value).map(Self::from_enum)
    }
}

impl<T: Scalar> Enummer for Enum<T> {
    type Value = T;
    fn inner(&self) -> &Enum<T> {
        self
    }
    fn family(&self) -> Family {
        Family::of::<Enum<T>>()
    }
}
impl<T: Scalar> FromEnum for Enum<T> {
    fn from_enum(inner: Enum<T>) -> Self {
        inner
    }
}

// one level of indirection is looked through
impl<E: Enummer + ?Sized> Enummer for &E {
    type Value = E::Value;
    fn inner(&self) -> &Enum<E::Value> {
        (**self).inner()
    }
    fn family(&self) -> Family {
        (**self).family()
    }
}
impl<E: Enummer + ?Sized> Enummer for Box<E> {
    type Value = E::Value;
    fn inner(&self) -> &Enum<E::Value> {
        (**self).inner()
    }
    fn family(&self) -> Family {
        (**self).family()
    }
}
impl<E: Enummer + ?Sized> Enummer for Arc<E> {
    type Value = E::Value;
    fn inner(&self) -> &Enum<E::Value> {
        (**self).inner()
    }
    fn family(&self) -> Family {
        (**self).family()
    }
}
impl<E: FromEnum> FromEnum for Box<E> {
    fn from_enum(inner: Enum<E::Value>) -> Self {
        Box::new(E::from_enum(inner))
    }
}
impl<E: FromEnum> FromEnum for Arc<E> {
    fn from_enum(inner: Enum<E::Value>) -> Self {
        Arc::new(E::from_enum(inner))
    }
}

pub fn same_family<A, B>(a: &A, b: &B) -> bool
where
    A: Enummer + ?Sized,
    B: Enummer + ?Sized,
{
    a.family() == b.family()
}

/// Resolves the family shared by all members of a canonical list. Fails on an empty list
/// or on the first member whose family differs from the head of the list.
pub fn list_family<L: Enummer>(list: &[L]) -> Result<Family> {
    let head = list.first().ok_or(EnumError::EmptyList)?.family();
    match list.iter().map(|member| member.family()).find(|f| *f != head) {
        Some(other) => Err(EnumError::FamilyMismatch {
            left: head.name(),
            right: other.name(),
        }),
        None => Ok(head),
    }
}

use crate::error::{fatal, EnumError, Result};
use crate::family::{same_family, Enummer};

/// Value equality between two members of the same family.
///
/// Members of two different families never compare, even when their values match; that is
/// reported as `FamilyMismatch` rather than `false`.
pub fn try_equal<A, B>(a: &A, b: &B) -> Result<bool>
where
    A: Enummer + ?Sized,
    B: Enummer<Value = A::Value> + ?Sized,
{
    if !same_family(a, b) {
        return Err(EnumError::FamilyMismatch {
            left: a.family().name(),
            right: b.family().name(),
        });
    }
    Ok(a.equal_value(b.value()))
}

/// Like [`try_equal`], but comparing across families aborts.
#[track_caller]
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: Enummer + ?Sized,
    B: Enummer<Value = A::Value> + ?Sized,
{
    match try_equal(a, b) {
        Ok(equal) => equal,
        Err(e) => fatal(e),
    }
}

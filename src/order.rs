//! Ordering driven by a caller-declared canonical list.
//!
//! The order of a family is the position of its members in the list, never the natural
//! order of the scalar underneath: `["", "passed", "skipped", "failed"]` makes `failed`
//! the greatest state even though it sorts first lexically.

// custom made ordering for enum values
use std::cmp::Ordering;
// value to position index
use core::hash::BuildHasherDefault;
use std::collections::HashMap;
use seahash::SeaHasher;

use tracing::debug;

use crate::error::{fatal, EnumError, Result};
use crate::family::{list_family, Enummer, Family};

pub type ValueHasher = BuildHasherDefault<SeaHasher>;

/// A canonical list bound for repeated use.
///
/// Binding checks the list once (non-empty, one family) and indexes every value by its
/// first position, so later calls do not rescan the list. The list itself is only
/// borrowed; it must not change while the binding is alive, which the borrow enforces.
#[derive(Debug)]
pub struct CanonicalOrder<'a, L: Enummer> {
    pub(crate) list: &'a [L],
    family: Family,
    pub(crate) positions: HashMap<L::Value, usize, ValueHasher>,
}

impl<'a, L: Enummer> CanonicalOrder<'a, L> {
    pub fn new(list: &'a [L]) -> Result<Self> {
        let family = list_family(list)?;
        let mut positions = HashMap::with_capacity_and_hasher(list.len(), ValueHasher::default());
        for (i, member) in list.iter().enumerate() {
            // the first occurrence of a repeated value wins
            positions.entry(member.value().clone()).or_insert(i);
        }
        debug!(family = %family, members = list.len(), "canonical order bound");
        Ok(Self {
            list,
            family,
            positions,
        })
    }

    /// Binds `list`, aborting when it is empty or mixes families.
    #[track_caller]
    pub fn bind(list: &'a [L]) -> Self {
        match Self::new(list) {
            Ok(order) => order,
            Err(e) => fatal(e),
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }
    pub fn members(&self) -> &'a [L] {
        self.list
    }

    /// Position of `item` in the list. Fails when `item` is from another family or its
    /// value is not listed.
    pub fn position<O>(&self, item: &O) -> Result<usize>
    where
        O: Enummer<Value = L::Value> + ?Sized,
    {
        if item.family() != self.family {
            return Err(EnumError::FamilyMismatch {
                left: self.family.name(),
                right: item.family().name(),
            });
        }
        self.positions
            .get(item.value())
            .copied()
            .ok_or_else(|| EnumError::NotInList(item.text()))
    }

    pub fn compare<A, B>(&self, a: &A, b: &B) -> Result<Ordering>
    where
        A: Enummer<Value = L::Value> + ?Sized,
        B: Enummer<Value = L::Value> + ?Sized,
    {
        Ok(self.position(a)?.cmp(&self.position(b)?))
    }

    pub fn greater_than<A, B>(&self, a: &A, b: &B) -> Result<bool>
    where
        A: Enummer<Value = L::Value> + ?Sized,
        B: Enummer<Value = L::Value> + ?Sized,
    {
        self.compare(a, b).map(Ordering::is_gt)
    }
    pub fn greater_or_equal<A, B>(&self, a: &A, b: &B) -> Result<bool>
    where
        A: Enummer<Value = L::Value> + ?Sized,
        B: Enummer<Value = L::Value> + ?Sized,
    {
        self.compare(a, b).map(Ordering::is_ge)
    }
    pub fn less_than<A, B>(&self, a: &A, b: &B) -> Result<bool>
    where
        A: Enummer<Value = L::Value> + ?Sized,
        B: Enummer<Value = L::Value> + ?Sized,
    {
        self.compare(a, b).map(Ordering::is_lt)
    }
    pub fn less_or_equal<A, B>(&self, a: &A, b: &B) -> Result<bool>
    where
        A: Enummer<Value = L::Value> + ?Sized,
        B: Enummer<Value = L::Value> + ?Sized,
    {
        self.compare(a, b).map(Ordering::is_le)
    }
}

// ------------- Comparators -------------
// Each binds the list once and hands back a comparator that aborts on an operand that is
// not in the list. A bad list aborts right away, before any comparison is made.

#[track_caller]
pub fn greater_than<L: Enummer>(list: &[L]) -> impl Fn(&L, &L) -> bool + '_ {
    comparator(CanonicalOrder::bind(list), Ordering::is_gt)
}
#[track_caller]
pub fn greater_or_equal<L: Enummer>(list: &[L]) -> impl Fn(&L, &L) -> bool + '_ {
    comparator(CanonicalOrder::bind(list), Ordering::is_ge)
}
#[track_caller]
pub fn less_than<L: Enummer>(list: &[L]) -> impl Fn(&L, &L) -> bool + '_ {
    comparator(CanonicalOrder::bind(list), Ordering::is_lt)
}
#[track_caller]
pub fn less_or_equal<L: Enummer>(list: &[L]) -> impl Fn(&L, &L) -> bool + '_ {
    comparator(CanonicalOrder::bind(list), Ordering::is_le)
}

fn comparator<'a, L: Enummer>(
    order: CanonicalOrder<'a, L>,
    holds: fn(Ordering) -> bool,
) -> impl Fn(&L, &L) -> bool + 'a {
    move |a: &L, b: &L| match order.compare(a, b) {
        Ok(ordering) => holds(ordering),
        Err(e) => fatal(e),
    }
}

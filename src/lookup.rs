// custom made lookups of enum values from their raw scalar
use crate::error::{fatal, EnumError, Result};
use crate::family::{list_family, Enummer};
use crate::order::CanonicalOrder;

/// Finds the first member of `list` whose value is `raw`. Absence is a normal outcome.
///
/// The list is checked before the scan; an empty or mixed-family list aborts.
#[track_caller]
pub fn parse<'a, L: Enummer>(list: &'a [L], raw: &L::Value) -> Option<&'a L> {
    if let Err(e) = list_family(list) {
        fatal(e);
    }
    list.iter().find(|member| member.equal_value(raw))
}

/// Like [`parse`], but a value that is not listed aborts.
#[track_caller]
pub fn must_parse<'a, L: Enummer>(list: &'a [L], raw: &L::Value) -> &'a L {
    match parse(list, raw) {
        Some(member) => member,
        None => fatal(EnumError::NotFound(raw.to_string())),
    }
}

impl<'a, L: Enummer> CanonicalOrder<'a, L> {
    pub fn parse(&self, raw: &L::Value) -> Option<&'a L> {
        let list = self.list;
        self.positions.get(raw).map(|&i| &list[i])
    }
    pub fn lookup(&self, raw: &L::Value) -> Result<&'a L> {
        self.parse(raw).ok_or_else(|| EnumError::NotFound(raw.to_string()))
    }
    #[track_caller]
    pub fn must_parse(&self, raw: &L::Value) -> &'a L {
        match self.lookup(raw) {
            Ok(member) => member,
            Err(e) => fatal(e),
        }
    }
}

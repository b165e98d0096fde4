#![allow(dead_code)]

use std::fmt;

use lazy_static::lazy_static;
use structenum::{enum_family, Enum, Enummer, Family, FromEnum};

enum_family! {
    pub struct TestState(String);
    pub struct JobState(String);
    pub struct TestTypeInt(i64);
    pub struct Test2TypeInt(i64);
    pub struct Severity(i8);
}

/// A family whose container sits behind one more indirection.
#[derive(Clone, Debug, PartialEq)]
pub struct Priority(Box<Enum<i32>>);

impl Priority {
    pub fn new(value: i32) -> Self {
        Self(Box::new(Enum::new(value)))
    }
}
impl Enummer for Priority {
    type Value = i32;
    fn inner(&self) -> &Enum<i32> {
        &self.0
    }
    fn family(&self) -> Family {
        Family::of::<Priority>()
    }
}
impl FromEnum for Priority {
    fn from_enum(inner: Enum<i32>) -> Self {
        Self(Box::new(inner))
    }
}
impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

lazy_static! {
    pub static ref TEST_STATES: Vec<TestState> = vec![unknown(), passed(), skipped(), failed()];
}

pub fn state(s: &str) -> TestState {
    TestState::new(s.to_string())
}
pub fn unknown() -> TestState {
    state("")
}
pub fn passed() -> TestState {
    state("passed")
}
pub fn skipped() -> TestState {
    state("skipped")
}
pub fn failed() -> TestState {
    state("failed")
}

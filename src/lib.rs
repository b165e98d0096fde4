//! Structenum – typed, comparable enum values on top of plain scalars.
//!
//! An *enum family* is a Rust type that owns a scalar value container and thereby gains a
//! fixed capability contract:
//! * A [`Enum`] holds one integer-like or string-like [`Scalar`] and never changes after
//!   construction.
//! * A family member (declared with [`enum_family!`] or by hand) implements [`Enummer`] by
//!   delegating to the container it owns.
//! * A [`Family`] token tells whether two values may be compared at all. It is derived from
//!   the concrete type, so two families wrapping the same scalar never collide.
//! * A canonical list, declared once per family by the caller, is the only source of
//!   order: position in the list is the sort key.
//!
//! ## Modules
//! * [`scalar`] – The [`Scalar`] trait and its integer and string implementations.
//! * [`container`] – The [`Enum`] container with its JSON and storage codecs.
//! * [`family`] – [`Family`] identity, the [`Enummer`] / [`FromEnum`] contract and the
//!   indirection rules (`&E`, `Box<E>`, `Arc<E>` resolve to `E`).
//! * [`equal`] – Family-checked equality.
//! * [`order`] – [`CanonicalOrder`] and the four list-driven comparators.
//! * [`lookup`] – Parsing raw scalars back into members of a list.
//! * [`settings`] – Resolving members from a `config` source.
//!
//! ## Errors
//! Every fallible operation has a `Result` form returning [`EnumError`]. Contract
//! violations (comparing across families, an empty or mixed list, `must_parse` of an
//! unlisted value) also have an aborting form that logs the error and panics; use those
//! where the inputs are program constants rather than user data.
//!
//! ## Quick Start
//! ```
//! use structenum::{enum_family, lookup, order};
//!
//! enum_family! {
//!     pub struct TestState(String);
//! }
//!
//! let states = vec![
//!     TestState::new("".into()),
//!     TestState::new("passed".into()),
//!     TestState::new("skipped".into()),
//!     TestState::new("failed".into()),
//! ];
//! let passed = lookup::must_parse(&states, &"passed".to_string());
//! let failed = lookup::must_parse(&states, &"failed".to_string());
//! assert!(order::greater_than(&states)(failed, passed));
//! assert!(lookup::parse(&states, &"xxx".to_string()).is_none());
//! ```
//!
//! ## Concurrency
//! Nothing here holds state between calls. A [`CanonicalOrder`] borrows its list, so the
//! list cannot be mutated while it is bound; lists built lazily and shared between threads
//! need their own synchronization (a `lazy_static` is the usual answer).

pub mod container;
mod declare;
pub mod equal;
pub mod error;
pub mod family;
pub mod lookup;
pub mod order;
pub mod scalar;
pub mod settings;

pub use container::Enum;
pub use equal::{equal, try_equal};
pub use error::{EnumError, Result};
pub use family::{list_family, same_family, Enummer, Family, FromEnum};
pub use lookup::{must_parse, parse};
pub use order::CanonicalOrder;
pub use scalar::Scalar;

#[doc(hidden)]
pub mod __private {
    pub use rusqlite;
    pub use serde;
}

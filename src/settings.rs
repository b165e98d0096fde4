//! Reading enum values out of configuration.
//!
//! Configuration only ever holds the raw scalar (`state = "passed"`, `level = 2`); the
//! member is resolved against a bound canonical list, so an unknown value surfaces as a
//! normal `NotFound` error instead of an abort.

use config::{Config, Environment, File};
use tracing::warn;

use crate::error::Result;
use crate::family::Enummer;
use crate::order::CanonicalOrder;

/// Builds a configuration from an optional file plus environment variables carrying
/// `prefix` (`PREFIX_KEY=value`). Environment variables win over the file, and a missing
/// file is not an error.
pub fn load(path: Option<&str>, prefix: &str) -> Result<Config> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::with_name(path).required(false));
    }
    let cfg = builder
        .add_source(Environment::with_prefix(prefix))
        .build()?;
    Ok(cfg)
}

pub fn member_from_config<'a, L: Enummer>(
    cfg: &Config,
    key: &str,
    order: &CanonicalOrder<'a, L>,
) -> Result<&'a L> {
    let raw: L::Value = cfg.get(key)?;
    let member = order.lookup(&raw);
    if member.is_err() {
        warn!(key, value = %raw, family = %order.family(), "unknown enum value in configuration");
    }
    member
}

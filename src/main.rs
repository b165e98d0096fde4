//! enumgate – compares a build state against a threshold in canonical order.
//!
//! Reads `current` and `threshold` from `enumgate.toml` (or the file given as the first
//! argument) and from `ENUMGATE_CURRENT` / `ENUMGATE_THRESHOLD`. Prints `pass` and exits
//! with 0 when `current` is not worse than `threshold`, prints `fail` and exits with 1
//! otherwise. Unknown states or unreadable configuration exit with 2.
//!
//! ```text
//! ENUMGATE_CURRENT=skipped ENUMGATE_THRESHOLD=passed enumgate
//! ```

use lazy_static::lazy_static;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use structenum::{enum_family, settings, CanonicalOrder};

enum_family! {
    /// State of a build, from least to most severe.
    pub struct BuildState(String);
}

lazy_static! {
    static ref BUILD_STATES: Vec<BuildState> = ["", "passed", "skipped", "failed"]
        .iter()
        .map(|state| BuildState::new(state.to_string()))
        .collect();
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "enumgate".to_string());
    let code = match run(&path) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            error!(error = %e, "enumgate failed");
            2
        }
    };
    std::process::exit(code);
}

fn run(path: &str) -> structenum::Result<bool> {
    let cfg = settings::load(Some(path), "ENUMGATE")?;
    let order = CanonicalOrder::new(BUILD_STATES.as_slice())?;
    let current = settings::member_from_config(&cfg, "current", &order)?;
    let threshold = settings::member_from_config(&cfg, "threshold", &order)?;
    let pass = order.less_or_equal(current, threshold)?;
    info!(current = %current, threshold = %threshold, pass, "gate evaluated");
    println!("{}", if pass { "pass" } else { "fail" });
    Ok(pass)
}

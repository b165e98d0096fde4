use thiserror::Error;

// used to name the dynamic type of a storage value
use rusqlite::types::Type;

#[derive(Error, Debug)]
pub enum EnumError {
    #[error("enum: different types '{left}' and '{right}'")]
    FamilyMismatch { left: &'static str, right: &'static str },
    #[error("enum: list is empty")]
    EmptyList,
    #[error("enum: '{0}' not found in list")]
    NotInList(String),
    #[error("enum: '{0}' not found")]
    NotFound(String),
    #[error("enum: cannot convert '{found}' to '{expected}'")]
    TypeMismatch { expected: &'static str, found: Type },
    #[error("enum: {value} is out of range for '{expected}'")]
    OutOfRange { expected: &'static str, value: i64 },
    #[error("enum: invalid text: {0}")]
    InvalidText(String),
    #[error("enum: json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("enum: storage: {0}")]
    Storage(String),
    #[error("enum: config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EnumError>;

// Helper conversions
impl From<rusqlite::Error> for EnumError {
    fn from(e: rusqlite::Error) -> Self { Self::Storage(e.to_string()) }
}
impl From<config::ConfigError> for EnumError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}

/// Aborts on a contract violation by the caller. The error is logged before the panic
/// so it shows up even when the panic is caught further up.
#[track_caller]
pub(crate) fn fatal(e: EnumError) -> ! {
    tracing::error!(error = %e, "enum contract violated");
    panic!("{e}")
}

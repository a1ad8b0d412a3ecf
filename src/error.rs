//! Library error type.
//!
//! Only construction and parsing seams return errors. Lookups that miss
//! (titles, translations) resolve to fallbacks instead, see [`crate::Resolved`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown locale code: '{0}'")]
    UnknownLocale(String),

    #[error("Locale '{0}' is not enabled")]
    LocaleDisabled(String),

    #[error("Unknown structured data type: '{0}'")]
    UnknownSchemaKind(String),

    #[error("Failed to parse title CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

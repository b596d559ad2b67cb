use crate::{
    config::ConfigError,
    interchange::CsvError,
    store::{ImportError, PersistenceError, StoreError},
};
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// Error
///
/// Caller-facing error with a stable class + origin taxonomy.
/// Module errors stay structured; this flattens them for front ends.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct Error {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.class, ErrorClass::NotFound)
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    #[display("conflict")]
    Conflict,
    #[display("not_found")]
    NotFound,
    #[display("invalid_input")]
    InvalidInput,
    #[display("corruption")]
    Corruption,
    #[display("io")]
    Io,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ErrorOrigin {
    #[display("store")]
    Store,
    #[display("csv")]
    Csv,
    #[display("persistence")]
    Persistence,
    #[display("import")]
    Import,
    #[display("config")]
    Config,
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Self::new(err.class(), ErrorOrigin::Store, err.to_string())
    }
}

impl From<CsvError> for Error {
    fn from(err: CsvError) -> Self {
        Self::new(err.class(), ErrorOrigin::Csv, err.to_string())
    }
}

impl From<PersistenceError> for Error {
    fn from(err: PersistenceError) -> Self {
        Self::new(err.class(), ErrorOrigin::Persistence, err.to_string())
    }
}

impl From<ImportError> for Error {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Csv(inner) => Self::new(inner.class(), ErrorOrigin::Import, inner.to_string()),
            ImportError::Store(inner) => {
                Self::new(inner.class(), ErrorOrigin::Import, inner.to_string())
            }
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(err.class(), ErrorOrigin::Config, err.to_string())
    }
}

///
/// TESTS
///

use crate::error::ErrorClass;
use thiserror::Error as ThisError;

///
/// StoreError
///
/// A mutation was refused. The collection is left exactly as it was.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("duplicate test case id '{id}'")]
    DuplicateId { id: String },

    #[error("test case at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("test case '{id}' has an empty name")]
    EmptyName { id: String },

    #[error("test case '{id}' not found")]
    NotFound { id: String },
}

impl StoreError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::DuplicateId { .. } => ErrorClass::Conflict,
            Self::EmptyId { .. } | Self::EmptyName { .. } => ErrorClass::InvalidInput,
            Self::NotFound { .. } => ErrorClass::NotFound,
        }
    }
}

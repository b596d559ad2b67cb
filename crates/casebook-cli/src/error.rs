use casebook_core::error::Error;
use std::io;
use thiserror::Error as ThisError;

///
/// CliError
///

#[derive(Debug, ThisError)]
pub(crate) enum CliError {
    #[error("{}", .0.display_with_class())]
    Core(#[from] Error),

    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to write '{path}': {source}")]
    Write { path: String, source: io::Error },

    #[error("nothing to change for '{id}'")]
    EmptyEdit { id: String },
}

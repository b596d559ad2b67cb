//! CSV import into a store.
//!
//! Reading an import file is the one slow boundary. Each read is tagged
//! with a ticket from an `ImportGate`; when several reads overlap, only the
//! most recently started one may apply, and older results are dropped.

use crate::{
    interchange::{self, CsvError},
    store::{BlobStore, Store, StoreError},
};
use thiserror::Error as ThisError;
use tracing::{debug, info};

///
/// ImportError
///
/// The import was refused and the store is unchanged.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ImportError {
    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Decode `text` and replace the store's collection with the result.
///
/// Returns the number of imported records.
pub fn import_csv<B: BlobStore>(store: &mut Store<B>, text: &str) -> Result<usize, ImportError> {
    let records = interchange::decode(text)?;
    let count = records.len();
    store.replace_all(records)?;

    info!(records = count, "imported test cases from CSV");

    Ok(count)
}

///
/// ImportTicket
///
/// Identifies one started import. Only the newest ticket may apply.
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct ImportTicket(u64);

///
/// ImportOutcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImportOutcome {
    Applied { count: usize },
    /// A newer import was started; this result was discarded untouched.
    Stale,
}

///
/// ImportGate
///
/// Last-write-wins sequencing for overlapping imports.
///

#[derive(Debug, Default)]
pub struct ImportGate {
    latest: u64,
}

impl ImportGate {
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Start an import, superseding any still in flight.
    pub const fn begin(&mut self) -> ImportTicket {
        self.latest = self.latest.wrapping_add(1);
        ImportTicket(self.latest)
    }

    #[must_use]
    pub const fn is_current(&self, ticket: ImportTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Apply the text read for `ticket`, unless a newer import was started.
    pub fn complete<B: BlobStore>(
        &self,
        ticket: ImportTicket,
        text: &str,
        store: &mut Store<B>,
    ) -> Result<ImportOutcome, ImportError> {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.latest, "dropping stale import");
            return Ok(ImportOutcome::Stale);
        }

        let count = import_csv(store, text)?;

        Ok(ImportOutcome::Applied { count })
    }
}

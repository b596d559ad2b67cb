//! Store: the single authoritative, ordered record collection.
//!
//! The store is an owned value. Reads borrow it; every mutation takes
//! `&mut self` and runs through the `Mutation` transition function, so the
//! order of applied changes is the order they were issued. A host that
//! shares a store across threads wraps it in one mutex or hands it to one
//! task.

mod error;
pub mod import;
mod mutation;
mod persist;


pub use error::StoreError;
pub use import::{ImportError, ImportGate, ImportOutcome, ImportTicket};
pub use mutation::{Applied, Mutation, MutationKind, apply, validate_batch};
pub use persist::{
    BlobStore, FileBlobStore, MemoryBlobStore, PersistenceError, decode_blob, encode_blob,
};

use crate::{
    model::{RunOutcome, TestCase, TestCasePatch, seed::seed_cases},
    obs::{StoreOps, StoreReport},
};
use chrono::{SecondsFormat, Utc};
use tracing::{debug, info, warn};

///
/// Store
///

#[derive(Debug)]
pub struct Store<B: BlobStore> {
    records: Vec<TestCase>,
    loading: bool,
    error: Option<PersistenceError>,
    ops: StoreOps,
    blob: B,
}

impl<B: BlobStore> Store<B> {
    /// Create an empty store that has not loaded anything yet.
    #[must_use]
    pub fn new(blob: B) -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
            ops: StoreOps::default(),
            blob,
        }
    }

    /// Create a store and load it from the blob store.
    ///
    /// Nothing persisted loads the seed collection. An unreadable or corrupt
    /// blob also loads the seed, and the failure is kept in `error()`.
    #[must_use]
    pub fn bootstrap(blob: B) -> Self {
        let mut store = Self::new(blob);

        let initial = match store.read_persisted() {
            Ok(Some(records)) => {
                info!(records = records.len(), "loaded persisted test cases");
                records
            }
            Ok(None) => {
                info!("no persisted test cases, loading seed collection");
                seed_cases()
            }
            Err(err) => {
                warn!(error = %err, "persisted test cases unusable, loading seed collection");
                store.ops.record_seed_fallback();
                store.error = Some(err);
                seed_cases()
            }
        };

        // Both sources were validated above, so this cannot be refused.
        if let Err(err) = store.load(initial) {
            warn!(error = %err, "seed collection rejected");
        }

        store
    }

    fn read_persisted(&self) -> Result<Option<Vec<TestCase>>, PersistenceError> {
        let Some(blob) = self.blob.load()? else {
            return Ok(None);
        };
        let records = decode_blob(&blob)?;
        validate_batch(&records).map_err(|err| PersistenceError::Corrupt(err.to_string()))?;

        Ok(Some(records))
    }

    ///
    /// READS
    ///

    #[must_use]
    pub fn records(&self) -> &[TestCase] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TestCase> {
        self.records.iter().find(|tc| tc.id == id)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True until the first load has completed.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Most recent non-fatal persistence problem, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&PersistenceError> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    #[must_use]
    pub const fn blob_store(&self) -> &B {
        &self.blob
    }

    #[must_use]
    pub fn report(&self) -> StoreReport {
        StoreReport {
            records: self.records.len(),
            ops: self.ops.clone(),
        }
    }

    ///
    /// MUTATIONS
    ///

    /// Apply one mutation and persist the result if anything changed.
    ///
    /// Persistence failures do not fail the mutation; they are logged and
    /// surfaced through `error()`.
    pub fn dispatch(&mut self, mutation: Mutation) -> Result<Applied, StoreError> {
        let kind = mutation.kind();

        let applied = match apply(&mut self.records, mutation) {
            Ok(applied) => applied,
            Err(err) => {
                self.ops.record_rejected();
                debug!(mutation = kind.as_str(), error = %err, "mutation rejected");
                return Err(err);
            }
        };

        if kind == MutationKind::Load {
            self.loading = false;
        }

        if applied.changed() {
            self.ops.record_applied(kind);
            debug!(mutation = kind.as_str(), records = self.records.len(), "mutation applied");
            self.persist();
        }

        Ok(applied)
    }

    /// Replace the whole collection, in the given order.
    pub fn load(&mut self, initial: Vec<TestCase>) -> Result<(), StoreError> {
        self.dispatch(Mutation::Load(initial)).map(drop)
    }

    /// Append a new record. Fails on a duplicate or blank id, or a blank name.
    pub fn add(&mut self, tc: TestCase) -> Result<(), StoreError> {
        self.dispatch(Mutation::Add(tc)).map(drop)
    }

    /// Merge a patch onto the record with `id`.
    pub fn update(&mut self, id: &str, patch: TestCasePatch) -> Result<(), StoreError> {
        self.dispatch(Mutation::Update {
            id: id.to_string(),
            patch,
        })
        .map(drop)
    }

    /// Delete the record with `id`, returning it. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<TestCase> {
        match self.dispatch(Mutation::Remove { id: id.to_string() }) {
            Ok(Applied::Removed(tc)) => Some(tc),
            _ => None,
        }
    }

    /// Atomically replace the collection. The whole batch is validated
    /// first; any invalid record rejects the replacement.
    pub fn replace_all(&mut self, records: Vec<TestCase>) -> Result<(), StoreError> {
        self.dispatch(Mutation::ReplaceAll(records)).map(drop)
    }

    /// Record a manual run at the given timestamp.
    pub fn mark_run(&mut self, id: &str, outcome: RunOutcome, at: &str) -> Result<(), StoreError> {
        self.update(id, TestCasePatch::run(outcome.status(), at))
    }

    /// Record a manual run stamped with the current UTC time.
    pub fn mark_run_now(&mut self, id: &str, outcome: RunOutcome) -> Result<(), StoreError> {
        self.mark_run(id, outcome, &now_timestamp())
    }

    /// Record the same run result for several records, typically the
    /// current view, as one transition with a single write. Unknown ids are
    /// skipped. Returns how many were updated.
    pub fn mark_all_run<I, S>(&mut self, ids: I, outcome: RunOutcome, at: &str) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mutation = Mutation::UpdateMany {
            ids: ids.into_iter().map(|id| id.as_ref().to_string()).collect(),
            patch: TestCasePatch::run(outcome.status(), at),
        };

        match self.dispatch(mutation) {
            Ok(Applied::UpdatedMany { count }) => count,
            _ => 0,
        }
    }

    fn persist(&mut self) {
        let result = encode_blob(&self.records).and_then(|blob| self.blob.save(&blob));
        self.ops.record_persist(result.is_ok());

        if let Err(err) = result {
            warn!(error = %err, records = self.records.len(), "persisting test cases failed");
            self.error = Some(err);
        }
    }
}

/// Current UTC time as RFC 3339, second precision.
#[must_use]
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

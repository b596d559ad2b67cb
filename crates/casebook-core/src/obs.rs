//! Observability: per-store operation counters.
//!
//! Counters live on the store instance itself; there is no process-wide
//! metrics state. Logging goes through `tracing` at the call sites.

use crate::store::MutationKind;
use serde::Serialize;

///
/// StoreReport
///
/// Point-in-time snapshot of store activity since construction.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StoreReport {
    pub records: usize,
    pub ops: StoreOps,
}

///
/// StoreOps
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StoreOps {
    // Mutations by kind
    pub loads: u64,
    pub adds: u64,
    pub updates: u64,
    pub removes: u64,
    pub replacements: u64,
    pub rejected: u64,

    // Persistence
    pub persist_writes: u64,
    pub persist_failures: u64,
    pub seed_fallbacks: u64,
}

impl StoreOps {
    pub(crate) const fn record_applied(&mut self, kind: MutationKind) {
        let slot = match kind {
            MutationKind::Load => &mut self.loads,
            MutationKind::Add => &mut self.adds,
            MutationKind::Update | MutationKind::UpdateMany => &mut self.updates,
            MutationKind::Remove => &mut self.removes,
            MutationKind::ReplaceAll => &mut self.replacements,
        };
        *slot = slot.saturating_add(1);
    }

    pub(crate) const fn record_rejected(&mut self) {
        self.rejected = self.rejected.saturating_add(1);
    }

    pub(crate) const fn record_persist(&mut self, ok: bool) {
        if ok {
            self.persist_writes = self.persist_writes.saturating_add(1);
        } else {
            self.persist_failures = self.persist_failures.saturating_add(1);
        }
    }

    pub(crate) const fn record_seed_fallback(&mut self) {
        self.seed_fallbacks = self.seed_fallbacks.saturating_add(1);
    }
}

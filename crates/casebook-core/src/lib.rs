//! Core runtime for Casebook: the test-case record model, the owned store
//! and its persistence collaborators, the query/paging pipeline, derived
//! statistics, and the CSV interchange codec.
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod interchange;
pub mod model;
pub mod obs;
pub mod query;
pub mod stats;
pub mod store;

///
/// Prelude
///
/// Domain vocabulary only.
/// Errors, stores and codecs are reached through their modules.
///

pub mod prelude {
    pub use crate::{
        model::{CaseKind, RunOutcome, Status, TestCase, TestCasePatch},
        query::{Query, SortKey, View},
        stats::Stats,
    };
}

//! Query pipeline: derives a filtered, searched, sorted view over a record
//! slice. Pure; the source slice is never reordered.
//!
//! Stage order is fixed: status filter, type filter, name search, then sort.

mod filter;
pub mod page;
mod sort;


pub use filter::{Filter, KindFilter, StatusFilter};
pub use page::{Page, Paginator, paginate};
pub use sort::SortKey;

use crate::model::{CaseKind, Status, TestCase};
use derive_more::{Deref, IntoIterator};

/// Sentinel accepted by the string parsers to mean "no filter".
pub const ALL: &str = "all";

///
/// Query
///
/// View parameters. The default query matches everything and keeps store
/// order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Query {
    pub status: StatusFilter,
    pub kind: KindFilter,
    pub search: String,
    pub sort: SortKey,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from the raw control values a front end holds.
    #[must_use]
    pub fn from_params(status: &str, kind: &str, search: &str, sort: &str) -> Self {
        Self {
            status: StatusFilter::parse_with(status, Status::parse),
            kind: KindFilter::parse_with(kind, CaseKind::parse),
            search: search.to_string(),
            sort: SortKey::parse(sort),
        }
    }

    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = Filter::Only(status);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: CaseKind) -> Self {
        self.kind = Filter::Only(kind);
        self
    }

    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    #[must_use]
    pub const fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Run the pipeline over `records`.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [TestCase]) -> View<'a> {
        let needle = (!self.search.trim().is_empty()).then(|| self.search.to_lowercase());

        let mut rows: Vec<&TestCase> = records
            .iter()
            .filter(|tc| self.status.matches(&tc.status))
            .filter(|tc| self.kind.matches(&tc.kind))
            .filter(|tc| {
                needle
                    .as_deref()
                    .is_none_or(|needle| tc.name.to_lowercase().contains(needle))
            })
            .collect();

        self.sort.sort(&mut rows);

        View(rows)
    }
}

/// Run `query` over `records`.
#[must_use]
pub fn query<'a>(records: &'a [TestCase], query: &Query) -> View<'a> {
    query.apply(records)
}

///
/// View
///
/// Non-owning, ordered result of a query.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
pub struct View<'a>(#[into_iterator(owned, ref)] Vec<&'a TestCase>);

impl View<'_> {
    /// Ids in view order, detached from the store borrow.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.0.iter().map(|tc| tc.id.clone()).collect()
    }
}

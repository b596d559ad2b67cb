use crate::{
    model::{TestCase, TestCasePatch},
    store::StoreError,
};
use std::collections::HashSet;

///
/// Mutation
///
/// Closed set of state transitions the store accepts.
/// Every change to the collection goes through `apply`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mutation {
    /// Startup load: replace everything with the given sequence.
    Load(Vec<TestCase>),
    Add(TestCase),
    Update { id: String, patch: TestCasePatch },
    /// The same patch onto every listed record; unknown ids are skipped.
    UpdateMany { ids: Vec<String>, patch: TestCasePatch },
    Remove { id: String },
    /// Import: atomic replacement of the whole collection.
    ReplaceAll(Vec<TestCase>),
}

impl Mutation {
    #[must_use]
    pub const fn kind(&self) -> MutationKind {
        match self {
            Self::Load(_) => MutationKind::Load,
            Self::Add(_) => MutationKind::Add,
            Self::Update { .. } => MutationKind::Update,
            Self::UpdateMany { .. } => MutationKind::UpdateMany,
            Self::Remove { .. } => MutationKind::Remove,
            Self::ReplaceAll(_) => MutationKind::ReplaceAll,
        }
    }
}

///
/// MutationKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MutationKind {
    Load,
    Add,
    Update,
    UpdateMany,
    Remove,
    ReplaceAll,
}

impl MutationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Add => "add",
            Self::Update => "update",
            Self::UpdateMany => "update_many",
            Self::Remove => "remove",
            Self::ReplaceAll => "replace_all",
        }
    }
}

///
/// Applied
///
/// What a successful transition did.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Applied {
    Replaced { count: usize },
    Added,
    Updated,
    UpdatedMany { count: usize },
    Removed(TestCase),
    /// Remove of an absent id, or a batch update matching nothing.
    Unchanged,
}

impl Applied {
    /// True when the collection differs from before, so it must be persisted.
    #[must_use]
    pub const fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Apply one mutation to the collection.
///
/// Validation runs before anything is touched, so an `Err` always leaves
/// `records` as it was.
pub fn apply(records: &mut Vec<TestCase>, mutation: Mutation) -> Result<Applied, StoreError> {
    match mutation {
        Mutation::Load(next) | Mutation::ReplaceAll(next) => {
            validate_batch(&next)?;
            let count = next.len();
            *records = next;

            Ok(Applied::Replaced { count })
        }

        Mutation::Add(tc) => {
            validate_record(&tc, records.len())?;
            if records.iter().any(|existing| existing.id == tc.id) {
                return Err(StoreError::DuplicateId { id: tc.id });
            }
            records.push(tc);

            Ok(Applied::Added)
        }

        Mutation::Update { id, patch } => {
            let Some(target) = records.iter_mut().find(|tc| tc.id == id) else {
                return Err(StoreError::NotFound { id });
            };
            if patch.name.as_deref().is_some_and(is_blank) {
                return Err(StoreError::EmptyName { id });
            }
            target.apply(patch);

            Ok(Applied::Updated)
        }

        Mutation::UpdateMany { ids, patch } => {
            let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
            if patch.name.as_deref().is_some_and(is_blank)
                && let Some(tc) = records.iter().find(|tc| wanted.contains(tc.id.as_str()))
            {
                return Err(StoreError::EmptyName { id: tc.id.clone() });
            }

            let mut count = 0;
            for tc in records
                .iter_mut()
                .filter(|tc| wanted.contains(tc.id.as_str()))
            {
                tc.apply(patch.clone());
                count += 1;
            }

            if count == 0 {
                Ok(Applied::Unchanged)
            } else {
                Ok(Applied::UpdatedMany { count })
            }
        }

        Mutation::Remove { id } => match records.iter().position(|tc| tc.id == id) {
            Some(index) => Ok(Applied::Removed(records.remove(index))),
            None => Ok(Applied::Unchanged),
        },
    }
}

/// Check a whole replacement batch: non-empty ids and names, unique ids.
pub fn validate_batch(records: &[TestCase]) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(records.len());

    for (position, tc) in records.iter().enumerate() {
        validate_record(tc, position)?;
        if !seen.insert(tc.id.as_str()) {
            return Err(StoreError::DuplicateId { id: tc.id.clone() });
        }
    }

    Ok(())
}

fn validate_record(tc: &TestCase, position: usize) -> Result<(), StoreError> {
    if is_blank(&tc.id) {
        return Err(StoreError::EmptyId { position });
    }
    if is_blank(&tc.name) {
        return Err(StoreError::EmptyName { id: tc.id.clone() });
    }

    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

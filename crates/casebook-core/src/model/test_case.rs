use crate::model::{CaseKind, Status};
use serde::{Deserialize, Serialize};

///
/// TestCase
///
/// One test-case record. `id` is the identity and never changes once the
/// record exists; every other field can be patched.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Status,
    #[serde(rename = "type", default)]
    pub kind: CaseKind,
    #[serde(default)]
    pub expected_result: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub last_run_at: Option<String>,
    #[serde(default)]
    pub tester_name: String,
}

impl TestCase {
    /// Create a never-run record with empty descriptive fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: Status,
        kind: CaseKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_expected_result(mut self, expected_result: impl Into<String>) -> Self {
        self.expected_result = expected_result.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_tester_name(mut self, tester_name: impl Into<String>) -> Self {
        self.tester_name = tester_name.into();
        self
    }

    #[must_use]
    pub fn with_last_run_at(mut self, last_run_at: impl Into<String>) -> Self {
        self.last_run_at = Some(last_run_at.into());
        self
    }

    /// True once a run has been recorded.
    #[must_use]
    pub const fn has_run(&self) -> bool {
        self.last_run_at.is_some()
    }

    /// Apply a patch in place, leaving unspecified fields untouched.
    pub fn apply(&mut self, patch: TestCasePatch) {
        let TestCasePatch {
            name,
            status,
            kind,
            expected_result,
            description,
            tester_name,
            last_run_at,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(kind) = kind {
            self.kind = kind;
        }
        if let Some(expected_result) = expected_result {
            self.expected_result = expected_result;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(tester_name) = tester_name {
            self.tester_name = tester_name;
        }
        if let Some(last_run_at) = last_run_at {
            self.last_run_at = last_run_at;
        }
    }
}

///
/// TestCasePatch
///
/// Partial update for one record. `None` means "leave as is"; the id is not
/// part of the patch because it is immutable.
/// `last_run_at: Some(None)` clears the run timestamp.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TestCasePatch {
    pub name: Option<String>,
    pub status: Option<Status>,
    pub kind: Option<CaseKind>,
    pub expected_result: Option<String>,
    pub description: Option<String>,
    pub tester_name: Option<String>,
    pub last_run_at: Option<Option<String>>,
}

impl TestCasePatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: CaseKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn expected_result(mut self, expected_result: impl Into<String>) -> Self {
        self.expected_result = Some(expected_result.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn tester_name(mut self, tester_name: impl Into<String>) -> Self {
        self.tester_name = Some(tester_name.into());
        self
    }

    #[must_use]
    pub fn last_run_at(mut self, last_run_at: Option<String>) -> Self {
        self.last_run_at = Some(last_run_at);
        self
    }

    /// Patch produced by a run action.
    #[must_use]
    pub fn run(status: Status, at: impl Into<String>) -> Self {
        Self::new().status(status).last_run_at(Some(at.into()))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.status.is_none()
            && self.kind.is_none()
            && self.expected_result.is_none()
            && self.description.is_none()
            && self.tester_name.is_none()
            && self.last_run_at.is_none()
    }
}

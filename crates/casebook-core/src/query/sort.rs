use crate::model::TestCase;
use std::{cmp::Ordering, convert::Infallible, str::FromStr};

///
/// SortKey
///
/// Final pipeline stage. All sorts are stable.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortKey {
    /// Keep filtered order.
    #[default]
    Unsorted,
    /// Ascending by name in case-folded code-point order.
    Name,
    /// Ascending by last run timestamp; never-run records first.
    LastRunAt,
}

impl SortKey {
    /// Parse a control value. Anything unrecognized keeps filtered order.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "name" => Self::Name,
            "lastRunAt" => Self::LastRunAt,
            _ => Self::Unsorted,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unsorted => "none",
            Self::Name => "name",
            Self::LastRunAt => "lastRunAt",
        }
    }

    pub(crate) fn sort(self, rows: &mut [&TestCase]) {
        match self {
            Self::Unsorted => {}
            Self::Name => rows.sort_by(|a, b| collate(&a.name, &b.name)),
            Self::LastRunAt => rows.sort_by(|a, b| {
                let a = a.last_run_at.as_deref().unwrap_or_default();
                let b = b.last_run_at.as_deref().unwrap_or_default();
                a.cmp(b)
            }),
        }
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

// Case-folded code-point order: each name is lowercased char by char and the
// results compared, then the raw strings break ties. Accented letters keep
// their own code points, so "\u{c9}" sorts after "z".
pub(crate) fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| a.cmp(b))
}

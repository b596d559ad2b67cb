use crate::{
    model::{CaseKind, Status},
    query::ALL,
};

///
/// Filter
///
/// Equality filter over one enum-valued field, or no filter at all.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

pub type StatusFilter = Filter<Status>;
pub type KindFilter = Filter<CaseKind>;

impl<T: PartialEq> Filter<T> {
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T> Filter<T> {
    /// Parse a control value: the `"all"` sentinel or a field value.
    pub fn parse_with(raw: &str, parse: impl FnOnce(&str) -> T) -> Self {
        if raw == ALL {
            Self::All
        } else {
            Self::Only(parse(raw))
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: From<String>> From<Option<String>> for Filter<T> {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(raw) if raw != ALL => Self::Only(T::from(raw)),
            _ => Self::All,
        }
    }
}

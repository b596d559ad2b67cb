//! Record model: the `TestCase` entity, its closed status/type vocabularies,
//! partial-field patches, and the built-in seed collection.

///
/// wire_enum
///
/// Declares a closed string vocabulary with an `Other(String)` escape hatch.
/// Known names parse to their variant; anything else is preserved verbatim.
///
/// Must stay above the `mod` declarations so child modules see it.
///

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            default $default:ident => $default_wire:literal,
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            #[default]
            $default,
            $($variant,)+
            /// Unrecognized value kept as-is for forward compatibility.
            Other(String),
        }

        impl $name {
            /// Every known variant, in declaration order.
            pub const KNOWN: &'static [Self] = &[Self::$default, $(Self::$variant),+];

            /// Parse a wire string, keeping unknown values in `Other`.
            #[must_use]
            pub fn parse(value: &str) -> Self {
                Self::KNOWN
                    .iter()
                    .find(|known| known.as_str() == value)
                    .cloned()
                    .unwrap_or_else(|| Self::Other(value.to_string()))
            }

            /// Wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    Self::$default => $default_wire,
                    $(Self::$variant => $wire,)+
                    Self::Other(value) => value.as_str(),
                }
            }

            /// True for every variant except `Other`.
            #[must_use]
            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::parse(&value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }
    };
}

mod kind;
pub mod seed;
mod test_case;

#[cfg(test)]
mod tests;

pub use kind::{CaseKind, RunOutcome, Status};
pub use test_case::{TestCase, TestCasePatch};

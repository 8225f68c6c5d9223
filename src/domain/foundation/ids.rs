//! Strongly-typed identifier value objects.
//!
//! Aggregate identities are integers assigned by storage on `add`. A value of
//! zero marks an entity that has not been persisted yet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates the identifier from its raw value.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Whether storage has assigned this identifier.
            pub const fn is_assigned(&self) -> bool {
                self.0 > 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse::<i64>()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

integer_id!(
    /// Identifier of a profile. Also used by other contexts to reference a
    /// profile without owning it.
    ProfileId
);

integer_id!(
    /// Identifier of a content category.
    CategoryId
);

integer_id!(
    /// Identifier of a tutorial.
    TutorialId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_id_is_unassigned() {
        assert!(!CategoryId::default().is_assigned());
        assert!(TutorialId::new(3).is_assigned());
    }

    #[test]
    fn parses_from_string() {
        let id: ProfileId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert!("forty-two".parse::<ProfileId>().is_err());
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&TutorialId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn displays_raw_value() {
        assert_eq!(CategoryId::new(12).to_string(), "12");
    }
}

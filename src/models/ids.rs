//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally joining on the wrong key
//! at compile time (e.g. a store id against an address id).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate integer ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create an ID from its raw key value
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            /// Get the raw key value
            pub const fn get(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(StoreId);
define_id!(StaffId);
define_id!(AddressId);
define_id!(CityId);
define_id!(CountryId);
define_id!(FilmId);
define_id!(CategoryId);
define_id!(InventoryId);
define_id!(CustomerId);
define_id!(RentalId);
define_id!(PaymentId);
define_id!(InvestorId);
define_id!(AdvisorId);
define_id!(ActorId);
define_id!(ActorAwardId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id = StoreId::new(2);
        assert_eq!(id.to_string(), "2");
        assert_eq!(" 2 ".parse::<StoreId>().unwrap(), id);
        assert!("two".parse::<StoreId>().is_err());
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = FilmId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let parsed: Option<FilmId> = serde_json::from_str("null").unwrap();
        assert!(parsed.is_none());
    }
}

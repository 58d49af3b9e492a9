//! Store, staff and the address → city → country chain

use serde::{Deserialize, Serialize};

use super::ids::{AddressId, CityId, CountryId, StaffId, StoreId};

/// A rental store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub store_id: StoreId,
    /// Managing staff member; a store may have none assigned
    #[serde(default)]
    pub manager_staff_id: Option<StaffId>,
    #[serde(default)]
    pub address_id: Option<AddressId>,
}

impl Store {
    pub fn new(store_id: StoreId) -> Self {
        Self {
            store_id,
            manager_staff_id: None,
            address_id: None,
        }
    }
}

/// A staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub staff_id: StaffId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub address_id: Option<AddressId>,
    #[serde(default)]
    pub store_id: Option<StoreId>,
    #[serde(default)]
    pub email: Option<String>,
    /// Stored as a boolean or as the integers 0/1; absent means active
    #[serde(
        default = "default_active",
        deserialize_with = "crate::models::customer::deserialize_flag"
    )]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Staff {
    pub fn new(staff_id: StaffId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            staff_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address_id: None,
            store_id: None,
            email: None,
            active: true,
        }
    }
}

/// A street address; links to its city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address_id: AddressId,
    pub address: String,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub city_id: Option<CityId>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Address {
    pub fn new(address_id: AddressId, address: impl Into<String>) -> Self {
        Self {
            address_id,
            address: address.into(),
            address2: None,
            district: None,
            city_id: None,
            postal_code: None,
            phone: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub city_id: CityId,
    pub city: String,
    #[serde(default)]
    pub country_id: Option<CountryId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub country_id: CountryId,
    pub country: String,
}

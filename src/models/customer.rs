//! Customers, their rentals and the payments made against them

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::{AddressId, CustomerId, InventoryId, PaymentId, RentalId, StaffId, StoreId};
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub store_id: StoreId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address_id: Option<AddressId>,
    /// Stored as a boolean or as the integers 0/1
    #[serde(deserialize_with = "deserialize_flag")]
    pub active: bool,
}

impl Customer {
    pub fn new(
        customer_id: CustomerId,
        store_id: StoreId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            customer_id,
            store_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            address_id: None,
            active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub rental_id: RentalId,
    #[serde(default, deserialize_with = "deserialize_datetime")]
    pub rental_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub inventory_id: Option<InventoryId>,
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    #[serde(default, deserialize_with = "deserialize_datetime")]
    pub return_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub staff_id: Option<StaffId>,
}

impl Rental {
    pub fn new(rental_id: RentalId, customer_id: CustomerId) -> Self {
        Self {
            rental_id,
            rental_date: None,
            inventory_id: None,
            customer_id: Some(customer_id),
            return_date: None,
            staff_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: PaymentId,
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    #[serde(default)]
    pub staff_id: Option<StaffId>,
    #[serde(default)]
    pub rental_id: Option<RentalId>,
    pub amount: Money,
    #[serde(default, deserialize_with = "deserialize_datetime")]
    pub payment_date: Option<NaiveDateTime>,
}

impl Payment {
    pub fn new(payment_id: PaymentId, rental_id: RentalId, amount: Money) -> Self {
        Self {
            payment_id,
            customer_id: None,
            staff_id: None,
            rental_id: Some(rental_id),
            amount,
            payment_date: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
}

/// Accept `true`/`false` as well as the tinyint `1`/`0` form
pub(crate) fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(flag) => Ok(flag),
        RawFlag::Int(0) => Ok(false),
        RawFlag::Int(1) => Ok(true),
        RawFlag::Int(other) => Err(serde::de::Error::custom(format!(
            "expected 0 or 1 for a flag, got {}",
            other
        ))),
    }
}

/// Formats a stored datetime may take; the first is the SQL dump form
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Accept `2005-05-24 22:53:30` as well as `2005-05-24T22:53:30`
pub(crate) fn deserialize_datetime<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error> {
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let text = text.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {}", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_flag_forms() {
        let json = r#"{"customer_id": 1, "store_id": 1, "first_name": "MARY", "last_name": "SMITH", "active": 1}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert!(customer.active);

        let json = r#"{"customer_id": 2, "store_id": 1, "first_name": "A", "last_name": "B", "active": false}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert!(!customer.active);

        let json = r#"{"customer_id": 3, "store_id": 1, "first_name": "A", "last_name": "B", "active": 7}"#;
        assert!(serde_json::from_str::<Customer>(json).is_err());
    }

    #[test]
    fn test_rental_dates() {
        let rental: Rental = serde_json::from_str(
            r#"{"rental_id": 1, "rental_date": "2005-05-24T22:53:30", "customer_id": 130, "return_date": null}"#,
        )
        .unwrap();
        assert!(rental.rental_date.is_some());
        assert!(rental.return_date.is_none());
    }

    #[test]
    fn test_space_separated_dates() {
        let rental: Rental = serde_json::from_str(
            r#"{"rental_id": 1, "rental_date": "2005-05-24 22:53:30", "customer_id": 130, "return_date": "2005-05-26 22:04:30"}"#,
        )
        .unwrap();
        let expected = NaiveDateTime::parse_from_str("2005-05-24T22:53:30", "%Y-%m-%dT%H:%M:%S").unwrap();
        assert_eq!(rental.rental_date, Some(expected));
        assert!(rental.return_date.is_some());

        let payment: Payment = serde_json::from_str(
            r#"{"payment_id": 1, "rental_id": 76, "amount": "2.99", "payment_date": "2005-05-25 11:30:37"}"#,
        )
        .unwrap();
        assert!(payment.payment_date.is_some());

        let json = r#"{"rental_id": 2, "rental_date": "24/05/2005", "customer_id": 1}"#;
        assert!(serde_json::from_str::<Rental>(json).is_err());
    }
}

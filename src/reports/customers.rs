//! Customer Reports
//!
//! Customer listing with resolved location, and rental/payment totals per
//! customer name.

use serde::Serialize;
use tracing::debug;

use super::query::{sort_desc_nulls_last, Groups, Index, MoneyAggregate};
use super::{Cell, ReportKind, TabularReport};
use crate::models::{CustomerId, Money, StoreId};
use crate::storage::Snapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerAddressRow {
    pub customer_id: CustomerId,
    pub store_id: StoreId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub active: bool,
    pub address: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CustomersReport {
    pub rows: Vec<CustomerAddressRow>,
}

impl CustomersReport {
    /// customer ⟕ address ⟕ city ⟕ country
    pub fn generate(snapshot: &Snapshot) -> Self {
        let addresses = Index::by_key(&snapshot.addresses, |a| a.address_id);
        let cities = Index::by_key(&snapshot.cities, |c| c.city_id);
        let countries = Index::by_key(&snapshot.countries, |c| c.country_id);

        let mut rows = Vec::with_capacity(snapshot.customers.len());
        for customer in &snapshot.customers {
            for address in addresses.left_join(customer.address_id) {
                for city in cities.left_join(address.and_then(|a| a.city_id)) {
                    for country in countries.left_join(city.and_then(|c| c.country_id)) {
                        rows.push(CustomerAddressRow {
                            customer_id: customer.customer_id,
                            store_id: customer.store_id,
                            first_name: customer.first_name.clone(),
                            last_name: customer.last_name.clone(),
                            email: customer.email.clone(),
                            active: customer.active,
                            address: address.map(|a| a.address.clone()),
                            district: address.and_then(|a| a.district.clone()),
                            city: city.map(|c| c.city.clone()),
                            country: country.map(|c| c.country.clone()),
                        });
                    }
                }
            }
        }

        debug!(report = "customers", rows = rows.len(), "generated report");
        Self { rows }
    }
}

impl TabularReport for CustomersReport {
    type Row = CustomerAddressRow;

    fn kind(&self) -> ReportKind {
        ReportKind::Customers
    }

    fn rows(&self) -> &[CustomerAddressRow] {
        &self.rows
    }

    fn cells(row: &CustomerAddressRow) -> Vec<Cell> {
        vec![
            Cell::Int(row.customer_id.get().into()),
            Cell::Int(row.store_id.get().into()),
            Cell::Text(row.first_name.clone()),
            Cell::Text(row.last_name.clone()),
            Cell::text(row.email.as_deref()),
            Cell::Bool(row.active),
            Cell::text(row.address.as_deref()),
            Cell::text(row.district.as_deref()),
            Cell::text(row.city.as_deref()),
            Cell::text(row.country.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerPaymentRow {
    pub first_name: String,
    pub last_name: String,
    pub rental_count: u64,
    pub total_payments: Option<Money>,
}

#[derive(Debug, Clone)]
pub struct CustomerPaymentsReport {
    pub rows: Vec<CustomerPaymentRow>,
}

#[derive(Debug, Default)]
struct NameTotals {
    rentals: u64,
    payments: MoneyAggregate,
}

impl CustomerPaymentsReport {
    /// customer ⟕ rental ⟕ payment grouped by (first name, last name)
    ///
    /// Customers sharing a name are merged into one row. `rental_count`
    /// counts joined rows carrying a rental, so a rental paid in two
    /// installments counts twice. Ordered by total payments descending.
    pub fn generate(snapshot: &Snapshot) -> Self {
        let rentals = Index::build(&snapshot.rentals, |r| r.customer_id);
        let payments = Index::build(&snapshot.payments, |p| p.rental_id);

        let mut groups: Groups<(String, String), NameTotals> = Groups::new();
        for customer in &snapshot.customers {
            let key = (customer.first_name.clone(), customer.last_name.clone());
            for rental in rentals.left_join(Some(customer.customer_id)) {
                for payment in payments.left_join(rental.map(|r| r.rental_id)) {
                    let totals = groups.entry(key.clone());
                    if rental.is_some() {
                        totals.rentals += 1;
                    }
                    totals.payments.push(payment.map(|p| p.amount));
                }
            }
        }

        let mut rows: Vec<_> = groups
            .into_vec()
            .into_iter()
            .map(|((first_name, last_name), totals)| CustomerPaymentRow {
                first_name,
                last_name,
                rental_count: totals.rentals,
                total_payments: totals.payments.sum(),
            })
            .collect();
        sort_desc_nulls_last(&mut rows, |row| row.total_payments);

        debug!(report = "customer-payments", rows = rows.len(), "generated report");
        Self { rows }
    }
}

impl TabularReport for CustomerPaymentsReport {
    type Row = CustomerPaymentRow;

    fn kind(&self) -> ReportKind {
        ReportKind::CustomerPayments
    }

    fn rows(&self) -> &[CustomerPaymentRow] {
        &self.rows
    }

    fn cells(row: &CustomerPaymentRow) -> Vec<Cell> {
        vec![
            Cell::Text(row.first_name.clone()),
            Cell::Text(row.last_name.clone()),
            Cell::Int(row.rental_count as i64),
            Cell::money(row.total_payments),
        ]
    }
}

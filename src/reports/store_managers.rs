//! Store Managers Report
//!
//! One row per store with its manager's name and full location. Missing
//! managers and broken address chains yield nulls, never a dropped store.

use serde::Serialize;
use tracing::debug;

use super::query::Index;
use super::{Cell, ReportKind, TabularReport};
use crate::models::StoreId;
use crate::storage::Snapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreManagerRow {
    pub store_id: StoreId,
    pub manager_first_name: Option<String>,
    pub manager_last_name: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StoreManagersReport {
    pub rows: Vec<StoreManagerRow>,
}

impl StoreManagersReport {
    /// store ⟕ staff (manager), store ⟕ address ⟕ city ⟕ country
    pub fn generate(snapshot: &Snapshot) -> Self {
        let staff = Index::by_key(&snapshot.staff, |s| s.staff_id);
        let addresses = Index::by_key(&snapshot.addresses, |a| a.address_id);
        let cities = Index::by_key(&snapshot.cities, |c| c.city_id);
        let countries = Index::by_key(&snapshot.countries, |c| c.country_id);

        let mut rows = Vec::with_capacity(snapshot.stores.len());
        for store in &snapshot.stores {
            for manager in staff.left_join(store.manager_staff_id) {
                for address in addresses.left_join(store.address_id) {
                    for city in cities.left_join(address.and_then(|a| a.city_id)) {
                        for country in countries.left_join(city.and_then(|c| c.country_id)) {
                            rows.push(StoreManagerRow {
                                store_id: store.store_id,
                                manager_first_name: manager.map(|m| m.first_name.clone()),
                                manager_last_name: manager.map(|m| m.last_name.clone()),
                                address: address.map(|a| a.address.clone()),
                                district: address.and_then(|a| a.district.clone()),
                                city: city.map(|c| c.city.clone()),
                                country: country.map(|c| c.country.clone()),
                            });
                        }
                    }
                }
            }
        }

        debug!(report = "store-managers", rows = rows.len(), "generated report");
        Self { rows }
    }
}

impl TabularReport for StoreManagersReport {
    type Row = StoreManagerRow;

    fn kind(&self) -> ReportKind {
        ReportKind::StoreManagers
    }

    fn rows(&self) -> &[StoreManagerRow] {
        &self.rows
    }

    fn cells(row: &StoreManagerRow) -> Vec<Cell> {
        vec![
            Cell::Int(row.store_id.get().into()),
            Cell::text(row.manager_first_name.as_deref()),
            Cell::text(row.manager_last_name.as_deref()),
            Cell::text(row.address.as_deref()),
            Cell::text(row.district.as_deref()),
            Cell::text(row.city.as_deref()),
            Cell::text(row.country.as_deref()),
        ]
    }
}

//! A point-in-time copy of every table the reports read
//!
//! Reports are pure functions of a `Snapshot`; each report invocation works on
//! its own owned copy, so concurrent runs share nothing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tables::Table;
use crate::error::ReportResult;
use crate::models::{
    ActorAward, Address, Advisor, Category, City, Country, Customer, Film, FilmCategory,
    InventoryItem, Investor, Payment, Rental, Staff, Store,
};

/// Anything that can hand back the rows of a named table
pub trait TableSource {
    fn read<T: Table>(&self) -> ReportResult<Vec<T>>;
}

/// All tables of the rental schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "store")]
    pub stores: Vec<Store>,
    pub staff: Vec<Staff>,
    #[serde(rename = "address")]
    pub addresses: Vec<Address>,
    #[serde(rename = "city")]
    pub cities: Vec<City>,
    #[serde(rename = "country")]
    pub countries: Vec<Country>,
    #[serde(rename = "film")]
    pub films: Vec<Film>,
    #[serde(rename = "film_category")]
    pub film_categories: Vec<FilmCategory>,
    #[serde(rename = "category")]
    pub categories: Vec<Category>,
    pub inventory: Vec<InventoryItem>,
    #[serde(rename = "customer")]
    pub customers: Vec<Customer>,
    #[serde(rename = "rental")]
    pub rentals: Vec<Rental>,
    #[serde(rename = "payment")]
    pub payments: Vec<Payment>,
    #[serde(rename = "investor")]
    pub investors: Vec<Investor>,
    #[serde(rename = "advisor")]
    pub advisors: Vec<Advisor>,
    #[serde(rename = "actor_award")]
    pub actor_awards: Vec<ActorAward>,
}

impl Snapshot {
    /// Read every table from a source
    pub fn load<S: TableSource>(source: &S) -> ReportResult<Self> {
        Ok(Self {
            stores: read_logged(source)?,
            staff: read_logged(source)?,
            addresses: read_logged(source)?,
            cities: read_logged(source)?,
            countries: read_logged(source)?,
            films: read_logged(source)?,
            film_categories: read_logged(source)?,
            categories: read_logged(source)?,
            inventory: read_logged(source)?,
            customers: read_logged(source)?,
            rentals: read_logged(source)?,
            payments: read_logged(source)?,
            investors: read_logged(source)?,
            advisors: read_logged(source)?,
            actor_awards: read_logged(source)?,
        })
    }

    /// Row count per table, in load order
    pub fn table_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            (Store::NAME, self.stores.len()),
            (Staff::NAME, self.staff.len()),
            (Address::NAME, self.addresses.len()),
            (City::NAME, self.cities.len()),
            (Country::NAME, self.countries.len()),
            (Film::NAME, self.films.len()),
            (FilmCategory::NAME, self.film_categories.len()),
            (Category::NAME, self.categories.len()),
            (InventoryItem::NAME, self.inventory.len()),
            (Customer::NAME, self.customers.len()),
            (Rental::NAME, self.rentals.len()),
            (Payment::NAME, self.payments.len()),
            (Investor::NAME, self.investors.len()),
            (Advisor::NAME, self.advisors.len()),
            (ActorAward::NAME, self.actor_awards.len()),
        ]
    }
}

fn read_logged<S: TableSource, T: Table>(source: &S) -> ReportResult<Vec<T>> {
    let rows = source.read::<T>()?;
    debug!(table = T::NAME, rows = rows.len(), "read table");
    Ok(rows)
}

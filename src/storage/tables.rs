//! Table names for every row type the reports read

use serde::de::DeserializeOwned;

use crate::models::{
    ActorAward, Address, Advisor, Category, City, Country, Customer, Film, FilmCategory,
    InventoryItem, Investor, Payment, Rental, Staff, Store,
};

/// A row type stored in a named table
pub trait Table: DeserializeOwned {
    /// Table name; also the file stem in a data directory and the key in a bundle
    const NAME: &'static str;
}

macro_rules! impl_table {
    ($($row:ty => $name:literal),* $(,)?) => {
        $(
            impl Table for $row {
                const NAME: &'static str = $name;
            }
        )*

        /// Every table, in load order
        pub const TABLE_NAMES: &[&str] = &[$($name),*];
    };
}

impl_table! {
    Store => "store",
    Staff => "staff",
    Address => "address",
    City => "city",
    Country => "country",
    Film => "film",
    FilmCategory => "film_category",
    Category => "category",
    InventoryItem => "inventory",
    Customer => "customer",
    Rental => "rental",
    Payment => "payment",
    Investor => "investor",
    Advisor => "advisor",
    ActorAward => "actor_award",
}

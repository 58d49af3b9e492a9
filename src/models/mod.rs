//! Core data models for rental-reports
//!
//! Read-only row types for every table of the rental schema: stores and
//! staff, the address chain, the film catalog and inventory, customers with
//! their rentals and payments, investors/advisors and actor awards.

pub mod award;
pub mod customer;
pub mod film;
pub mod ids;
pub mod location;
pub mod money;
pub mod partner;

pub use award::{ActorAward, AwardBucket};
pub use customer::{Customer, Payment, Rental};
pub use film::{Category, Film, FilmCategory, FilmRating, InventoryItem};
pub use ids::{
    ActorAwardId, ActorId, AddressId, AdvisorId, CategoryId, CityId, CountryId, CustomerId,
    FilmId, InventoryId, InvestorId, PaymentId, RentalId, StaffId, StoreId,
};
pub use location::{Address, City, Country, Staff, Store};
pub use money::Money;
pub use partner::{Advisor, Investor};

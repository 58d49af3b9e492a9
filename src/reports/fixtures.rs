//! Shared in-memory dataset for report tests
//!
//! Deliberately irregular: a store without a manager, an address with no
//! city, orphaned and dangling inventory, a film in two categories, two
//! customers named MARY SMITH, a rental paid twice and one never paid.

use crate::models::*;
use crate::storage::Snapshot;

fn money(cents: i64) -> Money {
    Money::from_cents(cents)
}

fn address(id: i32, line: &str, district: Option<&str>, city: Option<i32>) -> Address {
    let mut address = Address::new(AddressId::new(id), line);
    address.district = district.map(str::to_string);
    address.city_id = city.map(CityId::new);
    address
}

fn store(id: i32, manager: Option<i32>, address: Option<i32>) -> Store {
    Store {
        store_id: StoreId::new(id),
        manager_staff_id: manager.map(StaffId::new),
        address_id: address.map(AddressId::new),
    }
}

fn film(id: i32, title: &str, rating: Option<FilmRating>, rate: i64, cost: i64) -> Film {
    let mut film = Film::new(FilmId::new(id), title).with_costs(money(rate), money(cost));
    film.rating = rating;
    film
}

fn item(id: i32, film: Option<i32>, store: i32) -> InventoryItem {
    InventoryItem {
        inventory_id: InventoryId::new(id),
        film_id: film.map(FilmId::new),
        store_id: StoreId::new(store),
    }
}

fn customer(id: i32, store: i32, first: &str, last: &str, address: Option<i32>) -> Customer {
    let mut customer = Customer::new(CustomerId::new(id), StoreId::new(store), first, last);
    customer.address_id = address.map(AddressId::new);
    customer
}

fn payment(id: i32, rental: i32, cents: i64) -> Payment {
    Payment::new(PaymentId::new(id), RentalId::new(rental), money(cents))
}

fn investor(id: i32, first: &str, last: &str, company: Option<&str>) -> Investor {
    Investor {
        investor_id: InvestorId::new(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        company_name: company.map(str::to_string),
    }
}

fn advisor(id: i32, first: &str, last: &str) -> Advisor {
    Advisor {
        advisor_id: AdvisorId::new(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        is_chairman: None,
    }
}

fn award(id: i32, actor: Option<i32>, awards: Option<&str>) -> ActorAward {
    ActorAward::new(ActorAwardId::new(id), actor.map(ActorId::new), awards)
}

pub fn sample() -> Snapshot {
    Snapshot {
        stores: vec![store(1, Some(1), Some(1)), store(2, Some(2), Some(2)), store(3, None, Some(3))],
        staff: vec![
            Staff::new(StaffId::new(1), "Mike", "Hillyer"),
            Staff::new(StaffId::new(2), "Jon", "Stephens"),
        ],
        addresses: vec![
            address(1, "47 MySakila Drive", Some("Alberta"), Some(1)),
            address(2, "28 MySQL Boulevard", Some("QLD"), Some(2)),
            address(3, "1913 Hanoi Way", None, Some(3)),
            address(4, "Nowhere Lane", None, None),
        ],
        cities: vec![
            City { city_id: CityId::new(1), city: "Lethbridge".into(), country_id: Some(CountryId::new(1)) },
            City { city_id: CityId::new(2), city: "Woodridge".into(), country_id: Some(CountryId::new(2)) },
            City { city_id: CityId::new(3), city: "Sasebo".into(), country_id: None },
        ],
        countries: vec![
            Country { country_id: CountryId::new(1), country: "Canada".into() },
            Country { country_id: CountryId::new(2), country: "Australia".into() },
        ],
        films: vec![
            film(1, "ACADEMY DINOSAUR", Some(FilmRating::Pg), 99, 2099),
            film(2, "ACE GOLDFINGER", Some(FilmRating::G), 499, 1299),
            film(3, "ADAPTATION HOLES", Some(FilmRating::Nc17), 299, 1899),
            film(4, "UNRATED REEL", None, 99, 999),
        ],
        film_categories: vec![
            FilmCategory { film_id: FilmId::new(1), category_id: CategoryId::new(1) },
            FilmCategory { film_id: FilmId::new(1), category_id: CategoryId::new(3) },
            FilmCategory { film_id: FilmId::new(2), category_id: CategoryId::new(2) },
            FilmCategory { film_id: FilmId::new(4), category_id: CategoryId::new(2) },
        ],
        categories: vec![
            Category { category_id: CategoryId::new(1), name: "Documentary".into() },
            Category { category_id: CategoryId::new(2), name: "Horror".into() },
            Category { category_id: CategoryId::new(3), name: "Family".into() },
        ],
        inventory: vec![
            item(1, Some(1), 1),
            item(2, Some(1), 1),
            item(3, Some(2), 1),
            item(4, Some(2), 2),
            item(5, Some(3), 2),
            item(6, None, 2),
            item(7, Some(99), 1),
            item(8, Some(4), 2),
        ],
        customers: vec![
            customer(1, 1, "MARY", "SMITH", Some(1)),
            customer(2, 1, "PATRICIA", "JOHNSON", None),
            customer(3, 2, "MARY", "SMITH", Some(2)),
            Customer {
                active: false,
                ..customer(4, 2, "LINDA", "WILLIAMS", Some(4))
            },
        ],
        rentals: vec![
            Rental::new(RentalId::new(1), CustomerId::new(1)),
            Rental::new(RentalId::new(2), CustomerId::new(1)),
            Rental::new(RentalId::new(3), CustomerId::new(2)),
            Rental::new(RentalId::new(4), CustomerId::new(3)),
            Rental::new(RentalId::new(5), CustomerId::new(2)),
        ],
        payments: vec![
            payment(1, 1, 299),
            payment(2, 2, 99),
            payment(3, 3, 599),
            payment(4, 4, 499),
            payment(5, 3, 100),
        ],
        investors: vec![
            investor(1, "Montgomery", "Burns", Some("Springfield Nuclear Power Plant")),
            investor(2, "Anthony", "Hoffman", None),
            investor(3, "Montgomery", "Burns", Some("Springfield Nuclear Power Plant")),
        ],
        advisors: vec![advisor(1, "Barry", "Johnson"), advisor(2, "Anthony", "Hoffman")],
        actor_awards: vec![
            award(1, Some(1), Some("Emmy, Oscar, Tony ")),
            award(2, Some(2), Some("Emmy, Oscar")),
            award(3, Some(3), Some("Oscar, Emmy")),
            award(4, None, Some("Tony")),
            award(5, Some(5), None),
            award(6, Some(6), Some("Oscar, Tony")),
        ],
    }
}

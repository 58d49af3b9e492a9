//! Film catalog, categories and physical inventory

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, FilmId, InventoryId, StoreId};
use super::money::Money;

/// MPAA rating of a film
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilmRating {
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
}

impl FilmRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilmRating::G => "G",
            FilmRating::Pg => "PG",
            FilmRating::Pg13 => "PG-13",
            FilmRating::R => "R",
            FilmRating::Nc17 => "NC-17",
        }
    }
}

impl fmt::Display for FilmRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog film
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub film_id: FilmId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub rental_duration: Option<i32>,
    pub rental_rate: Money,
    #[serde(default)]
    pub length: Option<i32>,
    pub replacement_cost: Money,
    #[serde(default)]
    pub rating: Option<FilmRating>,
}

impl Film {
    pub fn new(film_id: FilmId, title: impl Into<String>) -> Self {
        Self {
            film_id,
            title: title.into(),
            description: None,
            release_year: None,
            rental_duration: None,
            rental_rate: Money::zero(),
            length: None,
            replacement_cost: Money::zero(),
            rating: None,
        }
    }

    pub fn with_rating(mut self, rating: FilmRating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_costs(mut self, rental_rate: Money, replacement_cost: Money) -> Self {
        self.rental_rate = rental_rate;
        self.replacement_cost = replacement_cost;
        self
    }
}

/// Film ↔ category membership (many-to-many)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmCategory {
    pub film_id: FilmId,
    pub category_id: CategoryId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: CategoryId,
    pub name: String,
}

/// One physical copy of a film held by a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub inventory_id: InventoryId,
    #[serde(default)]
    pub film_id: Option<FilmId>,
    pub store_id: StoreId,
}

impl InventoryItem {
    pub fn new(inventory_id: InventoryId, film_id: FilmId, store_id: StoreId) -> Self {
        Self {
            inventory_id,
            film_id: Some(film_id),
            store_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_wire_names() {
        let rating: FilmRating = serde_json::from_str("\"PG-13\"").unwrap();
        assert_eq!(rating, FilmRating::Pg13);
        assert_eq!(serde_json::to_string(&FilmRating::Nc17).unwrap(), "\"NC-17\"");
        assert!(serde_json::from_str::<FilmRating>("\"pg-13\"").is_err());
    }

    #[test]
    fn test_film_from_json() {
        let film: Film = serde_json::from_str(
            r#"{"film_id": 1, "title": "ACADEMY DINOSAUR", "rental_rate": 0.99,
                "replacement_cost": "20.99", "rating": "PG", "special_features": "Deleted Scenes"}"#,
        )
        .unwrap();
        assert_eq!(film.rental_rate.cents(), 99);
        assert_eq!(film.replacement_cost.cents(), 2099);
        assert_eq!(film.rating, Some(FilmRating::Pg));
    }
}

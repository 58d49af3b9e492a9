//! Inventory Reports
//!
//! Three views over inventory ⟕ film: the raw listing, copy counts per
//! store and rating, and replacement-cost exposure per store and category.

use serde::Serialize;
use tracing::debug;

use super::query::{sort_desc_nulls_last, Groups, Index, MoneyAggregate};
use super::{Cell, ReportKind, TabularReport};
use crate::models::{Film, FilmId, FilmRating, InventoryItem, InventoryId, Money, StoreId};
use crate::storage::Snapshot;

/// Each inventory row paired with its film, if the film exists
fn with_films(snapshot: &Snapshot) -> Vec<(&InventoryItem, Option<&Film>)> {
    let films = Index::by_key(&snapshot.films, |f| f.film_id);
    snapshot
        .inventory
        .iter()
        .flat_map(|item| {
            films
                .left_join(item.film_id)
                .into_iter()
                .map(move |film| (item, film))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Inventory by store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    pub inventory_id: InventoryId,
    pub store_id: StoreId,
    pub film_id: Option<FilmId>,
    pub title: Option<String>,
    pub rating: Option<FilmRating>,
    pub rental_rate: Option<Money>,
    pub replacement_cost: Option<Money>,
}

#[derive(Debug, Clone)]
pub struct InventoryByStoreReport {
    pub rows: Vec<InventoryRow>,
}

impl InventoryByStoreReport {
    /// inventory ⟕ film, one row per inventory item
    pub fn generate(snapshot: &Snapshot) -> Self {
        let rows: Vec<_> = with_films(snapshot)
            .into_iter()
            .map(|(item, film)| InventoryRow {
                inventory_id: item.inventory_id,
                store_id: item.store_id,
                film_id: film.map(|f| f.film_id),
                title: film.map(|f| f.title.clone()),
                rating: film.and_then(|f| f.rating),
                rental_rate: film.map(|f| f.rental_rate),
                replacement_cost: film.map(|f| f.replacement_cost),
            })
            .collect();

        debug!(report = "inventory-by-store", rows = rows.len(), "generated report");
        Self { rows }
    }
}

impl TabularReport for InventoryByStoreReport {
    type Row = InventoryRow;

    fn kind(&self) -> ReportKind {
        ReportKind::InventoryByStore
    }

    fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    fn cells(row: &InventoryRow) -> Vec<Cell> {
        vec![
            Cell::Int(row.inventory_id.get().into()),
            Cell::Int(row.store_id.get().into()),
            Cell::int(row.film_id.map(|id| id.get().into())),
            Cell::text(row.title.as_deref()),
            Cell::text(row.rating.map(|r| r.as_str())),
            Cell::money(row.rental_rate),
            Cell::money(row.replacement_cost),
        ]
    }
}

// ---------------------------------------------------------------------------
// Inventory count by store and rating
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingCountRow {
    pub store_id: StoreId,
    pub rating: Option<FilmRating>,
    pub inventory_count: u64,
}

#[derive(Debug, Clone)]
pub struct InventoryCountReport {
    pub rows: Vec<RatingCountRow>,
}

impl InventoryCountReport {
    /// COUNT(*) of inventory ⟕ film grouped by (store, rating)
    ///
    /// Orphaned inventory and unrated films share the null-rating group.
    pub fn generate(snapshot: &Snapshot) -> Self {
        let mut groups: Groups<(StoreId, Option<FilmRating>), u64> = Groups::new();
        for (item, film) in with_films(snapshot) {
            *groups.entry((item.store_id, film.and_then(|f| f.rating))) += 1;
        }

        let rows: Vec<_> = groups
            .into_vec()
            .into_iter()
            .map(|((store_id, rating), inventory_count)| RatingCountRow {
                store_id,
                rating,
                inventory_count,
            })
            .collect();

        debug!(report = "inventory-count", rows = rows.len(), "generated report");
        Self { rows }
    }

    /// Sum of all group counts
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.inventory_count).sum()
    }
}

impl TabularReport for InventoryCountReport {
    type Row = RatingCountRow;

    fn kind(&self) -> ReportKind {
        ReportKind::InventoryCount
    }

    fn rows(&self) -> &[RatingCountRow] {
        &self.rows
    }

    fn cells(row: &RatingCountRow) -> Vec<Cell> {
        vec![
            Cell::Int(row.store_id.get().into()),
            Cell::text(row.rating.map(|r| r.as_str())),
            Cell::Int(row.inventory_count as i64),
        ]
    }
}

// ---------------------------------------------------------------------------
// Replacement-cost exposure by store and category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRiskRow {
    pub store_id: StoreId,
    pub category: Option<String>,
    pub inventory_count: u64,
    pub avg_replacement_cost: Option<f64>,
    pub total_replacement_cost: Option<Money>,
}

#[derive(Debug, Clone)]
pub struct InventoryRiskReport {
    pub rows: Vec<CategoryRiskRow>,
}

impl InventoryRiskReport {
    /// inventory ⟕ film ⟕ film_category ⟕ category grouped by
    /// (store, category name), ordered by total replacement cost descending
    ///
    /// A film in several categories counts its copies once per category.
    pub fn generate(snapshot: &Snapshot) -> Self {
        let memberships = Index::by_key(&snapshot.film_categories, |fc| fc.film_id);
        let categories = Index::by_key(&snapshot.categories, |c| c.category_id);

        let mut groups: Groups<(StoreId, Option<String>), MoneyAggregate> = Groups::new();
        for (item, film) in with_films(snapshot) {
            for membership in memberships.left_join(film.map(|f| f.film_id)) {
                for category in categories.left_join(membership.map(|m| m.category_id)) {
                    let key = (item.store_id, category.map(|c| c.name.clone()));
                    groups.entry(key).push(film.map(|f| f.replacement_cost));
                }
            }
        }

        let mut rows: Vec<_> = groups
            .into_vec()
            .into_iter()
            .map(|((store_id, category), costs)| CategoryRiskRow {
                store_id,
                category,
                inventory_count: costs.rows(),
                avg_replacement_cost: costs.average(),
                total_replacement_cost: costs.sum(),
            })
            .collect();
        sort_desc_nulls_last(&mut rows, |row| row.total_replacement_cost);

        debug!(report = "inventory-risk", rows = rows.len(), "generated report");
        Self { rows }
    }
}

impl TabularReport for InventoryRiskReport {
    type Row = CategoryRiskRow;

    fn kind(&self) -> ReportKind {
        ReportKind::InventoryRisk
    }

    fn rows(&self) -> &[CategoryRiskRow] {
        &self.rows
    }

    fn cells(row: &CategoryRiskRow) -> Vec<Cell> {
        vec![
            Cell::Int(row.store_id.get().into()),
            Cell::text(row.category.as_deref()),
            Cell::Int(row.inventory_count as i64),
            Cell::decimal(row.avg_replacement_cost),
            Cell::money(row.total_replacement_cost),
        ]
    }
}

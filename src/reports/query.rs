//! Relational building blocks shared by the reports
//!
//! In-memory equivalents of hash joins, GROUP BY with first-appearance
//! ordering, and null-aware aggregates.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::Money;

/// Hash index from a join key to every row carrying it
pub struct Index<'a, K, T> {
    rows: HashMap<K, Vec<&'a T>>,
}

impl<'a, K: Eq + Hash, T> Index<'a, K, T> {
    /// Index `rows` by `key`; rows whose key is null are left out and never match
    pub fn build(rows: &'a [T], key: impl Fn(&T) -> Option<K>) -> Self {
        let mut index: HashMap<K, Vec<&'a T>> = HashMap::new();
        for row in rows {
            if let Some(k) = key(row) {
                index.entry(k).or_default().push(row);
            }
        }
        Self { rows: index }
    }

    /// Index rows on a non-nullable key
    pub fn by_key(rows: &'a [T], key: impl Fn(&T) -> K) -> Self {
        Self::build(rows, |row| Some(key(row)))
    }

    /// Rows matching `key` (inner join semantics)
    pub fn matches(&self, key: Option<&K>) -> &[&'a T] {
        key.and_then(|k| self.rows.get(k))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Rows matching `key`, or a single `None` when nothing matches
    ///
    /// A null key and a dangling key both produce the null-extended row.
    pub fn left_join(&self, key: Option<K>) -> Vec<Option<&'a T>> {
        let found = self.matches(key.as_ref());
        if found.is_empty() {
            vec![None]
        } else {
            found.iter().map(|row| Some(*row)).collect()
        }
    }
}

/// GROUP BY accumulator that keeps groups in first-appearance order
pub struct Groups<K, A> {
    positions: HashMap<K, usize>,
    groups: Vec<(K, A)>,
}

impl<K: Clone + Eq + Hash, A: Default> Groups<K, A> {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            groups: Vec::new(),
        }
    }

    /// Accumulator for `key`, created on first sight
    pub fn entry(&mut self, key: K) -> &mut A {
        let position = match self.positions.get(&key) {
            Some(&position) => position,
            None => {
                self.groups.push((key.clone(), A::default()));
                self.positions.insert(key, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[position].1
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_vec(self) -> Vec<(K, A)> {
        self.groups
    }
}

impl<K: Clone + Eq + Hash, A: Default> Default for Groups<K, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// COUNT(*), COUNT(col), SUM(col) and AVG(col) over a nullable money column
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoneyAggregate {
    rows: u64,
    values: u64,
    sum: Option<Money>,
}

impl MoneyAggregate {
    /// Feed one joined row's value
    pub fn push(&mut self, value: Option<Money>) {
        self.rows += 1;
        if let Some(amount) = value {
            self.values += 1;
            self.sum = Some(self.sum.unwrap_or_default() + amount);
        }
    }

    /// COUNT(*)
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// COUNT(col): non-null values only
    pub fn values(&self) -> u64 {
        self.values
    }

    /// SUM(col): null when no value was non-null
    pub fn sum(&self) -> Option<Money> {
        self.sum
    }

    /// AVG(col) in currency units: null when no value was non-null
    pub fn average(&self) -> Option<f64> {
        self.sum
            .filter(|_| self.values > 0)
            .map(|sum| sum.cents() as f64 / self.values as f64 / 100.0)
    }
}

/// Stable descending sort on a nullable key; nulls sort after every value
pub fn sort_desc_nulls_last<T, K: Ord>(rows: &mut [T], key: impl Fn(&T) -> Option<K>) {
    rows.sort_by(|a, b| match (key(a), key(b)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: i32,
        parent: Option<i32>,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, parent: Some(10) },
            Row { id: 2, parent: Some(10) },
            Row { id: 3, parent: None },
        ]
    }

    #[test]
    fn test_left_join_multi_match() {
        let data = rows();
        let index = Index::build(&data, |r| r.parent);

        let joined = index.left_join(Some(10));
        let ids: Vec<_> = joined.iter().map(|row| row.map(|r| r.id)).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_left_join_null_and_dangling_keys() {
        let data = rows();
        let index = Index::build(&data, |r| r.parent);

        assert_eq!(index.left_join(None), vec![None]);
        assert_eq!(index.left_join(Some(99)), vec![None]);
        assert!(index.matches(Some(&99)).is_empty());
    }

    #[test]
    fn test_groups_first_appearance_order() {
        let mut groups: Groups<&str, u32> = Groups::new();
        for key in ["b", "a", "b", "c", "a", "b"] {
            *groups.entry(key) += 1;
        }
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.into_vec(), vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_money_aggregate_null_semantics() {
        let mut agg = MoneyAggregate::default();
        agg.push(None);
        assert_eq!(agg.rows(), 1);
        assert_eq!(agg.sum(), None);
        assert_eq!(agg.average(), None);

        agg.push(Some(Money::from_cents(2099)));
        agg.push(Some(Money::from_cents(1099)));
        assert_eq!(agg.rows(), 3);
        assert_eq!(agg.values(), 2);
        assert_eq!(agg.sum(), Some(Money::from_cents(3198)));
        assert!((agg.average().unwrap() - 15.99).abs() < 1e-9);
    }

    #[test]
    fn test_sort_desc_nulls_last_is_stable() {
        let mut data = vec![(1, Some(5)), (2, None), (3, Some(9)), (4, Some(5)), (5, None)];
        sort_desc_nulls_last(&mut data, |row| row.1);
        let order: Vec<_> = data.iter().map(|row| row.0).collect();
        assert_eq!(order, vec![3, 1, 4, 2, 5]);
    }
}

//! # Record Tables
//!
//! Ordered in-memory tables with auto-incrementing integer primary keys
//! and a hand-written query executor over filter conditions.

use std::collections::BTreeMap;

use serde::Serialize;

use super::condition::{compare_values, Condition};
use super::errors::StoreResult;

/// A row type stored in a [`Table`]
///
/// The table owns primary key assignment: `assign_id` is called once on
/// insert and rows keep that id for life.
pub trait Record: Clone + Serialize {
    /// Primary key of this row
    fn id(&self) -> i64;

    /// Overwrite the primary key (called by the table on insert)
    fn assign_id(&mut self, id: i64);
}

/// An ordered in-memory table of records
#[derive(Debug, Clone)]
pub struct Table<R: Record> {
    rows: BTreeMap<i64, R>,
    next_id: i64,
}

impl<R: Record> Table<R> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Insert a row, assigning the next primary key. Returns the new id.
    pub fn insert(&mut self, mut row: R) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        row.assign_id(id);
        self.rows.insert(id, row);
        id
    }

    /// Get a row by primary key
    pub fn get(&self, id: i64) -> Option<&R> {
        self.rows.get(&id)
    }

    /// Replace a row in place. Returns false if the id does not exist.
    pub fn update(&mut self, id: i64, mut row: R) -> bool {
        if !self.rows.contains_key(&id) {
            return false;
        }
        row.assign_id(id);
        self.rows.insert(id, row);
        true
    }

    /// Remove a row, returning it if it existed
    pub fn remove(&mut self, id: i64) -> Option<R> {
        self.rows.remove(&id)
    }

    /// Iterate rows in primary-key order
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Execute a query against this table.
    ///
    /// Conditions are ANDed. Results are sorted ascending by `order_by`
    /// with the primary key as tie-break, so identical queries paginate
    /// with no overlap and no gap.
    pub fn search(
        &self,
        conditions: &[Condition],
        order_by: &str,
        limit: Option<usize>,
        offset: usize,
    ) -> StoreResult<Vec<R>> {
        let mut matched: Vec<(serde_json::Value, &R)> = Vec::new();

        for row in self.rows.values() {
            let doc = serde_json::to_value(row)?;
            if conditions.iter().all(|c| c.matches(&doc)) {
                matched.push((doc, row));
            }
        }

        matched.sort_by(|(doc_a, a), (doc_b, b)| {
            compare_values(doc_a.get(order_by), doc_b.get(order_by))
                .then_with(|| a.id().cmp(&b.id()))
        });

        let page = matched.into_iter().skip(offset).map(|(_, row)| row.clone());
        Ok(match limit {
            Some(n) => page.take(n).collect(),
            None => page.collect(),
        })
    }

    /// Count rows matching the conditions, ignoring pagination
    pub fn search_count(&self, conditions: &[Condition]) -> StoreResult<usize> {
        let mut count = 0;
        for row in self.rows.values() {
            let doc = serde_json::to_value(row)?;
            if conditions.iter().all(|c| c.matches(&doc)) {
                count += 1;
            }
        }
        Ok(count)
    }
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Serialize)]
    struct Item {
        id: i64,
        name: String,
        price: f64,
    }

    impl Record for Item {
        fn id(&self) -> i64 {
            self.id
        }

        fn assign_id(&mut self, id: i64) {
            self.id = id;
        }
    }

    fn item(name: &str, price: f64) -> Item {
        Item {
            id: 0,
            name: name.to_string(),
            price,
        }
    }

    fn sample_table() -> Table<Item> {
        let mut table = Table::new();
        table.insert(item("desk", 120.0));
        table.insert(item("chair", 45.0));
        table.insert(item("lamp", 30.0));
        table.insert(item("shelf", 80.0));
        table
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut table = Table::new();
        assert_eq!(table.insert(item("a", 1.0)), 1);
        assert_eq!(table.insert(item("b", 2.0)), 2);
        assert_eq!(table.get(1).unwrap().name, "a");
    }

    #[test]
    fn test_update_and_remove() {
        let mut table = sample_table();

        assert!(table.update(2, item("stool", 40.0)));
        assert_eq!(table.get(2).unwrap().name, "stool");
        // Update preserves the primary key
        assert_eq!(table.get(2).unwrap().id, 2);

        assert!(!table.update(99, item("ghost", 0.0)));

        assert!(table.remove(2).is_some());
        assert!(table.remove(2).is_none());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_search_orders_by_field() {
        let table = sample_table();

        let rows = table.search(&[], "name", None, 0).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["chair", "desk", "lamp", "shelf"]);
    }

    #[test]
    fn test_search_tie_break_on_id() {
        let mut table = Table::new();
        table.insert(item("same", 1.0));
        table.insert(item("same", 2.0));
        table.insert(item("same", 3.0));

        let rows = table.search(&[], "name", None, 0).unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_search_pagination_partitions() {
        let table = sample_table();

        let first = table.search(&[], "name", Some(2), 0).unwrap();
        let second = table.search(&[], "name", Some(2), 2).unwrap();

        let mut all: Vec<_> = first.iter().chain(second.iter()).map(|r| r.id).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_search_with_conditions() {
        let table = sample_table();

        let rows = table
            .search(&[Condition::gte("price", json!(45.0))], "name", None, 0)
            .unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["chair", "desk", "shelf"]);
    }

    #[test]
    fn test_search_count_ignores_pagination() {
        let table = sample_table();

        let count = table
            .search_count(&[Condition::lte("price", json!(80.0))])
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let table = sample_table();
        let rows = table.search(&[], "name", Some(10), 100).unwrap();
        assert!(rows.is_empty());
    }
}

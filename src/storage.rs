//! In-memory vector storage

use crate::distance::euclidean_distance;
use crate::vector::Vector;
use serde::Serialize;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// A search result containing the vector ID and distance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub distance: f32,
}

/// A stored identifier-vector pair. Never mutated after insertion.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: String,
    pub vector: Vector,
}

/// Append-only vector storage with brute-force k-NN search.
///
/// All records live behind one reader-writer lock: inserts take the write
/// lock for the append, searches take the read lock for the full scan and
/// sort. Identifiers are not required to be unique.
#[derive(Debug, Default)]
pub struct VectorStore {
    records: RwLock<Vec<Record>>,
}

impl VectorStore {
    /// Create a new empty vector store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Append a vector with the given ID.
    ///
    /// The vector is not validated here; empty vectors are rejected at the
    /// request boundary.
    pub fn insert(&self, id: impl Into<String>, vector: impl Into<Vector>) {
        let record = Record {
            id: id.into(),
            vector: vector.into(),
        };

        let count = {
            let mut records = self.write();
            records.push(record);
            records.len()
        };
        debug!(count, "inserted vector");
    }

    /// Search for the k nearest neighbors of `query`.
    ///
    /// Records whose dimension differs from the query's are skipped. Results
    /// are sorted by ascending distance; equal distances keep insertion order.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<SearchResult> {
        if k == 0 {
            return Vec::new();
        }

        let records = self.read();
        let scanned = records.len();

        let mut ranked: Vec<(usize, f32)> = records
            .iter()
            .enumerate()
            .filter_map(|(i, record)| euclidean_distance(query, &record.vector).map(|d| (i, d)))
            .collect();

        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(k);

        let results: Vec<SearchResult> = ranked
            .into_iter()
            .map(|(i, distance)| SearchResult {
                id: records[i].id.clone(),
                distance,
            })
            .collect();
        drop(records);

        debug!(scanned, returned = results.len(), "searched vectors");
        results
    }

    /// Get the number of records in the store
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave a half-pushed record behind,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Record>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Record>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_insert_and_len() {
        let store = VectorStore::new();
        assert!(store.is_empty());

        store.insert("v1", vec![1.0, 2.0, 3.0]);
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let store = VectorStore::new();
        store.insert("dup", vec![1.0, 0.0]);
        store.insert("dup", vec![0.0, 1.0]);
        store.insert("", vec![1.0, 1.0]);

        assert_eq!(store.len(), 3);
        let results = store.search(&[1.0, 0.0], 10);
        assert_eq!(results.iter().filter(|r| r.id == "dup").count(), 2);
        assert!(results.iter().any(|r| r.id.is_empty()));
    }

    #[test]
    fn test_search() {
        let store = VectorStore::new();
        store.insert("v1", vec![1.0, 0.0, 0.0]);
        store.insert("v2", vec![0.0, 1.0, 0.0]);
        store.insert("v3", vec![1.0, 1.0, 0.0]);

        let results = store.search(&[1.0, 0.0, 0.0], 2);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "v1");
        assert_relative_eq!(results[0].distance, 0.0, epsilon = 1e-6);
        assert_eq!(results[1].id, "v3");
        assert_relative_eq!(results[1].distance, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_search_three_four_five() {
        let store = VectorStore::new();
        store.insert("a", vec![0.0, 0.0]);
        store.insert("b", vec![3.0, 4.0]);

        let top1 = store.search(&[0.0, 0.0], 1);
        assert_eq!(
            top1,
            vec![SearchResult {
                id: "a".to_string(),
                distance: 0.0
            }]
        );

        let top2 = store.search(&[0.0, 0.0], 2);
        assert_eq!(top2.len(), 2);
        assert_eq!(top2[1].id, "b");
        assert_eq!(top2[1].distance, 5.0);
    }

    #[test]
    fn test_search_skips_mismatched_dimensions() {
        let store = VectorStore::new();
        store.insert("two", vec![1.0, 2.0]);
        store.insert("three", vec![1.0, 2.0, 3.0]);

        let results = store.search(&[0.0, 0.0], 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "two");
    }

    #[test]
    fn test_search_empty_query() {
        let store = VectorStore::new();
        store.insert("v1", vec![1.0]);
        assert!(store.search(&[], 3).is_empty());
    }

    #[test]
    fn test_search_k_zero() {
        let store = VectorStore::new();
        store.insert("v1", vec![1.0, 2.0]);
        assert!(store.search(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_search_empty_store() {
        let store = VectorStore::new();
        assert!(store.search(&[1.0, 2.0, 3.0], 5).is_empty());
    }

    #[test]
    fn test_top_k_ids_follow_distance_not_insertion() {
        let store = VectorStore::new();
        store.insert("far", vec![10.0]);
        store.insert("mid", vec![5.0]);
        store.insert("other-dim", vec![0.0, 0.0]);
        store.insert("near", vec![1.0]);

        let results = store.search(&[0.0], 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "near");
        assert_eq!(results[0].distance, 1.0);
        assert_eq!(results[1].id, "mid");
        assert_eq!(results[1].distance, 5.0);
    }

    #[test]
    fn test_search_releases_lock() {
        let store = VectorStore::new();
        store.insert("a", vec![1.0, 2.0]);

        let results = store.search(&[1.0, 2.0], 1);
        assert!(store.records.try_write().is_ok());
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let store = VectorStore::new();
        store.insert("first", vec![1.0, 0.0]);
        store.insert("second", vec![0.0, 1.0]);
        store.insert("third", vec![-1.0, 0.0]);

        let ids: Vec<String> = store
            .search(&[0.0, 0.0], 3)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }
}

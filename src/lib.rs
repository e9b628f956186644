//! # Hermes
//!
//! An in-memory vector similarity store.
//!
//! This library provides:
//! - Euclidean distance between `f32` vectors
//! - An append-only, thread-safe vector store with exact k-NN search
//! - An HTTP boundary layer (insert, search, health, metrics)
//!
//! ## Example
//!
//! ```rust
//! use hermes::storage::VectorStore;
//!
//! let store = VectorStore::new();
//! store.insert("a", vec![0.0, 0.0]);
//! store.insert("b", vec![3.0, 4.0]);
//!
//! let results = store.search(&[0.0, 0.0], 2);
//! assert_eq!(results[0].id, "a");
//! assert_eq!(results[1].distance, 5.0);
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod server;
pub mod storage;
pub mod vector;

pub use config::Config;
pub use distance::euclidean_distance;
pub use error::{Result, VectorDbError};
pub use storage::{Record, SearchResult, VectorStore};
pub use vector::Vector;

//! In-Memory Storage Adapters
//!
//! `InMemoryStore` implements `VehiclePort`, `PolicyPort` and `ClaimsPort`
//! over ordered maps guarded by `tokio::sync::RwLock`. Reads return records
//! ordered by id; inserts assign ids from per-table sequences starting at 1.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_memory::InMemoryStore;
//! use domain_history::HistoryAggregator;
//!
//! let store = Arc::new(InMemoryStore::with_vehicles(vehicles).await?);
//! let history = HistoryAggregator::new(store.clone(), store.clone(), store);
//! ```

pub mod store;

pub use store::InMemoryStore;

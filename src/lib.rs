//! # Catalog Forge - Relational Product Catalog
//!
//! A single-shot batch tool over a SQLite product catalog.
//!
//! Catalog Forge provides:
//! - A two-table relational schema (categories, products) with enforced
//!   referential integrity
//! - SQLite-backed storage with atomic batch inserts
//! - Idempotent seeding of a fixed catalog
//! - A read-side reporter for listings, joins, and aggregate statistics

pub mod model;
pub mod report;
pub mod seed;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use model::{Category, NewProduct, Product};
pub use report::{OverallStats, Reporter};
pub use storage::CatalogStore;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing file is unreadable, unwritable, or a write batch failed.
    /// Batches run inside a transaction, so a failure leaves no partial rows.
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The static seed data referenced a category name that was not part of
    /// the just-inserted category set. A programming bug, never retried.
    #[error("Seed integrity error: {0}")]
    SeedIntegrity(String),

    /// An aggregate query was invoked against a catalog with zero products;
    /// mean and min/max are undefined over an empty set.
    #[error("Catalog is empty: aggregate statistics are undefined")]
    EmptyCatalog,
}

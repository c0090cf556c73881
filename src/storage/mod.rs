//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - categories(id, name)
//! - products(id, name, price, category_id)
//!
//! products.category_id carries a foreign key to categories.id, enforced by
//! the store (`PRAGMA foreign_keys = ON`).

pub mod schema;
pub mod sqlite;

pub use sqlite::CatalogStore;

//! Idempotent catalog seeding
//!
//! Inserts a fixed catalog of categories and products on first run. A store
//! that already contains categories is left untouched, so re-running the tool
//! never duplicates data.

use std::collections::HashMap;

use crate::model::NewProduct;
use crate::storage::CatalogStore;
use crate::{Error, Result};

/// Category names inserted on first run, in display order
pub const CATEGORY_NAMES: [&str; 5] = [
    "Electronics",
    "Clothing",
    "Books",
    "Home & Garden",
    "Sports & Outdoors",
];

/// Product seed rows: (name, price, category name)
pub const PRODUCT_ROWS: [(&str, f64, &str); 17] = [
    ("Smartphone", 699.99, "Electronics"),
    ("Laptop", 1299.99, "Electronics"),
    ("Wireless Headphones", 149.99, "Electronics"),
    ("Smart TV", 599.99, "Electronics"),
    ("T-Shirt", 19.99, "Clothing"),
    ("Jeans", 59.99, "Clothing"),
    ("Running Shoes", 89.99, "Clothing"),
    ("Winter Jacket", 129.99, "Clothing"),
    ("Python Programming Book", 39.99, "Books"),
    ("Data Science Handbook", 49.99, "Books"),
    ("Science Fiction Novel", 14.99, "Books"),
    ("Garden Hose", 24.99, "Home & Garden"),
    ("Lawn Mower", 299.99, "Home & Garden"),
    ("Plant Pot Set", 34.99, "Home & Garden"),
    ("Basketball", 29.99, "Sports & Outdoors"),
    ("Camping Tent", 159.99, "Sports & Outdoors"),
    ("Yoga Mat", 24.99, "Sports & Outdoors"),
];

/// What a seeding pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and received the full seed catalog
    Seeded { categories: usize, products: usize },
    /// The store already held categories; nothing was written
    AlreadyPopulated { categories: usize },
}

/// Seed the catalog if (and only if) the store holds no categories.
///
/// Categories are committed as one batch before any product record is built:
/// product rows reference the generated ids returned by that batch. An
/// unknown category name in [`PRODUCT_ROWS`] is a [`Error::SeedIntegrity`]
/// bug, not a recoverable condition.
pub fn seed_if_empty(store: &mut CatalogStore) -> Result<SeedOutcome> {
    let existing = store.count_categories()?;
    if existing > 0 {
        tracing::info!(
            categories = existing,
            "catalog already seeded, using existing data"
        );
        return Ok(SeedOutcome::AlreadyPopulated {
            categories: existing,
        });
    }

    let categories = store.insert_categories(&CATEGORY_NAMES)?;
    tracing::info!(count = categories.len(), "inserted categories");

    let id_by_name: HashMap<&str, i64> = categories
        .iter()
        .map(|c| (c.name.as_str(), c.id))
        .collect();

    let mut products = Vec::with_capacity(PRODUCT_ROWS.len());
    for (name, price, category_name) in PRODUCT_ROWS {
        let category_id = *id_by_name.get(category_name).ok_or_else(|| {
            Error::SeedIntegrity(format!(
                "product '{name}' references unknown category '{category_name}'"
            ))
        })?;
        products.push(NewProduct::new(name, price, category_id));
    }

    let inserted = store.insert_products(&products)?;
    tracing::info!(count = inserted, "inserted products");

    Ok(SeedOutcome::Seeded {
        categories: categories.len(),
        products: inserted,
    })
}

//! Read-side reporting - listings, joins, and aggregate statistics
//!
//! The reporter never writes; it composes the store's read queries into a
//! formatted report on stdout. Diagnostics stay on the tracing side, so the
//! report body is never interleaved with log output.

use tabled::{Table, Tabled, settings::Style};

use crate::model::{Category, Product};
use crate::storage::CatalogStore;
use crate::ui;
use crate::{Error, Result};

/// Aggregate statistics over the whole catalog
#[derive(Debug, Clone, PartialEq)]
pub struct OverallStats {
    pub total_products: usize,
    pub total_categories: usize,
    pub average_price: f64,
    pub most_expensive: Product,
    pub least_expensive: Product,
}

/// Read-only view over a catalog store
pub struct Reporter<'a> {
    store: &'a CatalogStore,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Category")]
    name: String,
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct ListingRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Category")]
    category: String,
}

fn money(value: f64) -> String {
    format!("${value:.2}")
}

impl<'a> Reporter<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// All categories, ordered by id ascending
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        self.store.list_categories()
    }

    /// All products in one category, in stable (insertion) order
    pub fn products_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        self.store.products_by_category(category_id)
    }

    /// Sum of prices in one category; 0.0 for a productless category
    pub fn category_total_value(&self, category_id: i64) -> Result<f64> {
        self.store.category_total_value(category_id)
    }

    /// Every product paired with its owning category (inner join)
    pub fn joined_listing(&self) -> Result<Vec<(Product, Category)>> {
        self.store.joined_listing()
    }

    /// Catalog-wide aggregates.
    ///
    /// Returns [`Error::EmptyCatalog`] when the catalog holds zero products:
    /// mean and extremes are undefined over an empty set. When several
    /// products share an extreme price, the lowest product id wins.
    pub fn overall_stats(&self) -> Result<OverallStats> {
        let total_products = self.store.count_products()?;
        if total_products == 0 {
            return Err(Error::EmptyCatalog);
        }

        Ok(OverallStats {
            total_products,
            total_categories: self.store.count_categories()?,
            average_price: self.store.average_price()?.ok_or(Error::EmptyCatalog)?,
            most_expensive: self.store.most_expensive()?.ok_or(Error::EmptyCatalog)?,
            least_expensive: self.store.least_expensive()?.ok_or(Error::EmptyCatalog)?,
        })
    }

    /// Render the full report to stdout
    pub fn print_report(&self) -> Result<()> {
        ui::header("Catalog Forge - Product Catalog");

        let categories = self.list_categories()?;
        ui::section(&format!("Categories ({})", categories.len()));
        let rows: Vec<CategoryRow> = categories
            .iter()
            .map(|c| CategoryRow {
                id: c.id,
                name: c.name.clone(),
            })
            .collect();
        if !rows.is_empty() {
            println!("{}", Table::new(rows).with(Style::rounded()));
        }

        for category in &categories {
            let products = self.products_by_category(category.id)?;
            let total = self.category_total_value(category.id)?;

            ui::section(&format!(
                "{} ({} items)",
                category.name.to_uppercase(),
                products.len()
            ));
            let rows: Vec<ProductRow> = products
                .iter()
                .map(|p| ProductRow {
                    name: p.name.clone(),
                    price: money(p.price),
                })
                .collect();
            if !rows.is_empty() {
                println!("{}", Table::new(rows).with(Style::rounded()));
            }
            ui::summary_row("Total category value:", &money(total));
        }

        ui::section("Overall Statistics");
        let stats = self.overall_stats()?;
        println!(
            "{}",
            ui::stats_table(&[
                ("Total products", &stats.total_products.to_string()),
                ("Total categories", &stats.total_categories.to_string()),
                ("Average price", &money(stats.average_price)),
                (
                    "Most expensive",
                    &format!(
                        "{} ({})",
                        stats.most_expensive.name,
                        money(stats.most_expensive.price)
                    ),
                ),
                (
                    "Least expensive",
                    &format!(
                        "{} ({})",
                        stats.least_expensive.name,
                        money(stats.least_expensive.price)
                    ),
                ),
            ])
        );

        ui::section("Detailed Product Listing");
        let rows: Vec<ListingRow> = self
            .joined_listing()?
            .into_iter()
            .map(|(product, category)| ListingRow {
                name: product.name,
                price: money(product.price),
                category: category.name,
            })
            .collect();
        if !rows.is_empty() {
            println!("{}", Table::new(rows).with(Style::rounded()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{self, PRODUCT_ROWS};

    fn seeded_store() -> CatalogStore {
        let mut store = CatalogStore::open_in_memory().unwrap();
        seed::seed_if_empty(&mut store).unwrap();
        store
    }

    #[test]
    fn test_overall_stats_match_seed() {
        let store = seeded_store();
        let reporter = Reporter::new(&store);

        let stats = reporter.overall_stats().unwrap();
        assert_eq!(stats.total_products, 17);
        assert_eq!(stats.total_categories, 5);

        let expected_mean =
            PRODUCT_ROWS.iter().map(|(_, price, _)| price).sum::<f64>() / PRODUCT_ROWS.len() as f64;
        assert!((stats.average_price - expected_mean).abs() < 1e-9);

        assert_eq!(stats.most_expensive.name, "Laptop");
        assert!((stats.most_expensive.price - 1299.99).abs() < 1e-9);
        assert_eq!(stats.least_expensive.name, "Science Fiction Novel");
        assert!((stats.least_expensive.price - 14.99).abs() < 1e-9);
    }

    #[test]
    fn test_electronics_total_value() {
        let store = seeded_store();
        let reporter = Reporter::new(&store);

        let electronics = reporter
            .list_categories()
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Electronics")
            .unwrap();

        let total = reporter.category_total_value(electronics.id).unwrap();
        let expected = 699.99 + 1299.99 + 149.99 + 599.99;
        assert!((total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_joined_listing_is_complete() {
        let store = seeded_store();
        let reporter = Reporter::new(&store);

        let pairs = reporter.joined_listing().unwrap();
        assert_eq!(pairs.len(), 17);

        for (product, category) in &pairs {
            assert_eq!(product.category_id, category.id);
        }

        let smartphone = pairs
            .iter()
            .find(|(p, _)| p.name == "Smartphone")
            .unwrap();
        assert_eq!(smartphone.1.name, "Electronics");
    }

    #[test]
    fn test_products_by_category_is_stable() {
        let store = seeded_store();
        let reporter = Reporter::new(&store);

        let books = reporter
            .list_categories()
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Books")
            .unwrap();

        let first = reporter.products_by_category(books.id).unwrap();
        let second = reporter.products_by_category(books.id).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_empty_store_policy() {
        let store = CatalogStore::open_in_memory().unwrap();
        let reporter = Reporter::new(&store);

        assert!(reporter.list_categories().unwrap().is_empty());
        assert!(matches!(
            reporter.overall_stats(),
            Err(Error::EmptyCatalog)
        ));
    }

    #[test]
    fn test_category_total_value_without_products() {
        let store = CatalogStore::open_in_memory().unwrap();
        let id = store.insert_category("Empty Shelf").unwrap();

        let reporter = Reporter::new(&store);
        assert_eq!(reporter.category_total_value(id).unwrap(), 0.0);
    }
}

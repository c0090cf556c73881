//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::schema;
use crate::Result;
use crate::model::{Category, NewProduct, Product};

/// SQLite-backed storage for the product catalog
pub struct CatalogStore {
    conn: Connection,
}

impl CatalogStore {
    /// Open a database file (creates if doesn't exist) and apply the schema.
    /// Schema application is idempotent; reopening an initialized file is a
    /// no-op for table creation.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema and enable foreign-key enforcement
    fn initialize_schema(&self) -> Result<()> {
        self.conn.pragma_update(None, "foreign_keys", "ON")?;
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Close the connection, releasing file handles and cached statements.
    /// Consumes the store; dropping an unclosed store releases them too.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }

    // ========== Write Operations ==========

    /// Insert a single category, returning its generated id
    pub fn insert_category(&self, name: &str) -> Result<i64> {
        self.conn
            .execute("INSERT INTO categories (name) VALUES (?1)", [name])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a batch of categories in one transaction (all rows or none).
    /// Returns the committed rows with their store-assigned ids.
    pub fn insert_categories(&mut self, names: &[&str]) -> Result<Vec<Category>> {
        let tx = self.conn.transaction()?;
        let mut categories = Vec::with_capacity(names.len());
        for name in names {
            tx.execute("INSERT INTO categories (name) VALUES (?1)", [name])?;
            categories.push(Category {
                id: tx.last_insert_rowid(),
                name: name.to_string(),
            });
        }
        tx.commit()?;
        Ok(categories)
    }

    /// Insert a batch of products in one transaction (all rows or none)
    pub fn insert_products(&mut self, products: &[NewProduct]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for product in products {
            tx.execute(
                "INSERT INTO products (name, price, category_id) VALUES (?1, ?2, ?3)",
                params![product.name, product.price, product.category_id],
            )?;
        }
        tx.commit()?;
        Ok(products.len())
    }

    // ========== Counts ==========

    /// Count all categories
    pub fn count_categories(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count all products
    pub fn count_products(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Read Queries ==========

    /// All categories, ordered by id ascending
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id")?;

        let categories = stmt
            .query_map([], |row| Self::row_to_category(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(categories)
    }

    /// All products in a category, ordered by id ascending
    pub fn products_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, price, category_id FROM products WHERE category_id = ?1 ORDER BY id",
        )?;

        let products = stmt
            .query_map([category_id], |row| Self::row_to_product(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(products)
    }

    /// Sum of product prices in a category; 0.0 when the category has no products
    pub fn category_total_value(&self, category_id: i64) -> Result<f64> {
        let total: f64 = self.conn.query_row(
            "SELECT COALESCE(SUM(price), 0.0) FROM products WHERE category_id = ?1",
            [category_id],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Arithmetic mean of all product prices; None when there are no products
    pub fn average_price(&self) -> Result<Option<f64>> {
        let avg: Option<f64> =
            self.conn
                .query_row("SELECT AVG(price) FROM products", [], |row| row.get(0))?;
        Ok(avg)
    }

    /// The highest-priced product; ties resolve to the lowest id
    pub fn most_expensive(&self) -> Result<Option<Product>> {
        self.conn
            .query_row(
                "SELECT id, name, price, category_id FROM products \
                 ORDER BY price DESC, id ASC LIMIT 1",
                [],
                |row| Self::row_to_product(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// The lowest-priced product; ties resolve to the lowest id
    pub fn least_expensive(&self) -> Result<Option<Product>> {
        self.conn
            .query_row(
                "SELECT id, name, price, category_id FROM products \
                 ORDER BY price ASC, id ASC LIMIT 1",
                [],
                |row| Self::row_to_product(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Every product paired with its owning category (inner join), ordered by
    /// product id ascending
    pub fn joined_listing(&self) -> Result<Vec<(Product, Category)>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.name, p.price, p.category_id, c.id, c.name \
             FROM products p JOIN categories c ON p.category_id = c.id \
             ORDER BY p.id",
        )?;

        let pairs = stmt
            .query_map([], |row| {
                let product = Self::row_to_product(row)?;
                let category = Category {
                    id: row.get(4)?,
                    name: row.get(5)?,
                };
                Ok((product, category))
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(pairs)
    }

    // ========== Row Mappers ==========

    fn row_to_category(row: &rusqlite::Row) -> rusqlite::Result<Category> {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    fn row_to_product(row: &rusqlite::Row) -> rusqlite::Result<Product> {
        Ok(Product {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
            category_id: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_is_idempotent_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");

        {
            let store = CatalogStore::open(&path).unwrap();
            store.insert_category("Electronics").unwrap();
            store.close().unwrap();
        }

        // Reopening applies the schema again without clobbering data
        let store = CatalogStore::open(&path).unwrap();
        assert_eq!(store.count_categories().unwrap(), 1);
        assert_eq!(
            store.list_categories().unwrap()[0].name,
            "Electronics"
        );
    }

    #[test]
    fn test_insert_category_returns_generated_id() {
        let store = CatalogStore::open_in_memory().unwrap();

        let first = store.insert_category("Books").unwrap();
        let second = store.insert_category("Clothing").unwrap();

        assert!(second > first);
        let categories = store.list_categories().unwrap();
        assert_eq!(categories[0].id, first);
        assert_eq!(categories[1].id, second);
    }

    #[test]
    fn test_duplicate_category_name_rejected() {
        let store = CatalogStore::open_in_memory().unwrap();

        store.insert_category("Books").unwrap();
        let err = store.insert_category("Books");
        assert!(matches!(err, Err(crate::Error::Storage(_))));
        assert_eq!(store.count_categories().unwrap(), 1);
    }

    #[test]
    fn test_orphan_product_rejected() {
        let mut store = CatalogStore::open_in_memory().unwrap();

        let err = store.insert_products(&[NewProduct::new("Ghost", 1.0, 999)]);
        assert!(matches!(err, Err(crate::Error::Storage(_))));
        assert_eq!(store.count_products().unwrap(), 0);
    }

    #[test]
    fn test_product_batch_is_atomic() {
        let mut store = CatalogStore::open_in_memory().unwrap();
        let id = store.insert_category("Electronics").unwrap();

        // Second row violates the foreign key; the first must not survive
        let batch = [
            NewProduct::new("Smartphone", 699.99, id),
            NewProduct::new("Ghost", 1.0, 999),
        ];
        assert!(store.insert_products(&batch).is_err());
        assert_eq!(store.count_products().unwrap(), 0);
    }

    #[test]
    fn test_category_total_value_empty_is_zero() {
        let store = CatalogStore::open_in_memory().unwrap();
        let id = store.insert_category("Books").unwrap();
        assert_eq!(store.category_total_value(id).unwrap(), 0.0);
    }

    #[test]
    fn test_extremes_tie_break_on_lowest_id() {
        let mut store = CatalogStore::open_in_memory().unwrap();
        let id = store.insert_category("Books").unwrap();
        store
            .insert_products(&[
                NewProduct::new("First", 9.99, id),
                NewProduct::new("Second", 9.99, id),
            ])
            .unwrap();

        let most = store.most_expensive().unwrap().unwrap();
        let least = store.least_expensive().unwrap().unwrap();
        assert_eq!(most.name, "First");
        assert_eq!(least.name, "First");
    }

    #[test]
    fn test_empty_store_queries() {
        let store = CatalogStore::open_in_memory().unwrap();

        assert!(store.list_categories().unwrap().is_empty());
        assert!(store.joined_listing().unwrap().is_empty());
        assert_eq!(store.average_price().unwrap(), None);
        assert_eq!(store.most_expensive().unwrap(), None);
    }
}

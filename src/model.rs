//! Catalog value records
//!
//! Plain records passed between the seeder/reporter and the store. Ids are
//! always assigned by the store and carried back out of insert operations;
//! nothing here pre-computes them.

/// A named grouping of products
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A sellable item with a name, price, and owning category
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
}

/// A product awaiting insertion (id will be set by the store)
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
}

impl NewProduct {
    pub fn new(name: &str, price: f64, category_id: i64) -> Self {
        Self {
            name: name.to_string(),
            price,
            category_id,
        }
    }
}

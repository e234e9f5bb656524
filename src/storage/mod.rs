#[cfg(test)]
pub mod memory;
pub mod postgres;

#[cfg(test)]
pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A catalog entry as stored in the `product` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available_flag: bool,
}

/// Insert payload; the store assigns the identifier
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available_flag: bool,
}

impl From<Product> for NewProduct {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            available_flag: product.available_flag,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Access to the product catalog.
///
/// Every call acquires its own connection and releases it before returning,
/// on success and on error alike.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products in store-defined order.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Insert a product and return the identifier the store generated.
    async fn create(&self, product: NewProduct) -> Result<i64, StoreError>;

    /// Round-trip to the store without touching the catalog.
    async fn ping(&self) -> Result<(), StoreError>;
}

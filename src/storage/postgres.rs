//! Postgres-backed product store.
//!
//! Columns are cast on the way out so the table may declare `id` as
//! `serial` or `bigserial` and `price` as `numeric` or `double precision`.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

use super::{NewProduct, Product, ProductStore, StoreError};
use crate::config::DatabaseConfig;

const SELECT_PRODUCTS: &str = r#"
    SELECT id::bigint AS id, name, description, price::float8 AS price, available_flag
    FROM product
"#;

const INSERT_PRODUCT: &str = r#"
    INSERT INTO product (name, description, price, available_flag)
    VALUES ($1, $2, $3, $4)
    RETURNING id::bigint
"#;

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    /// Build a lazily-connecting pool from the database settings.
    ///
    /// No connection is opened here; an unreachable database surfaces as a
    /// `StoreError` on the first request instead of failing startup.
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_lazy_with(config.connect_options());

        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let products = sqlx::query_as::<_, Product>(SELECT_PRODUCTS)
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = products.len(), "Fetched products");
        Ok(products)
    }

    async fn create(&self, product: NewProduct) -> Result<i64, StoreError> {
        let id: i64 = sqlx::query_scalar(INSERT_PRODUCT)
            .bind(product.name)
            .bind(product.description)
            .bind(product.price)
            .bind(product.available_flag)
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

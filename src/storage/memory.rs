use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{NewProduct, Product, ProductStore, StoreError};

/// In-process product store, insertion ordered, ids starting at 1
#[derive(Default)]
pub struct MemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn create(&self, product: NewProduct) -> Result<i64, StoreError> {
        let mut products = self.products.write().await;
        let id = products.last().map_or(1, |p| p.id + 1);

        products.push(Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            available_flag: product.available_flag,
        });

        Ok(id)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{name} description"),
            price: 1.5,
            available_flag: true,
        }
    }

    #[tokio::test]
    async fn assigns_increasing_ids() {
        let store = MemoryProductStore::new();

        let first = store.create(new_product("a")).await.unwrap();
        let second = store.create(new_product("b")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn lists_in_insertion_order() {
        let store = MemoryProductStore::new();
        assert!(store.list().await.unwrap().is_empty());

        store.create(new_product("a")).await.unwrap();
        store.create(new_product("b")).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}

//! Product persistence.
//!
//! `ProductStore` is the seam the service layer talks to; `MemoryStore`
//! below is the production store for this service and defines the
//! reference behavior for any future backend: store-assigned integer ids,
//! full-record overwrite on save, id-ascending listings.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use vitrine_common::types::{NewProduct, Product};
use vitrine_common::VitrineError;

/// Persistence operations for product records.
///
/// Errors are genuine store faults. "No such row" outcomes are encoded in
/// the return types (`Option`, dropped matches) rather than the error
/// channel.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new product. The store assigns the id and timestamps.
    async fn insert(&self, draft: NewProduct) -> Result<Product>;

    /// Overwrite an existing record, refreshing `updated_at`.
    async fn save(&self, product: Product) -> Result<Product>;

    /// Fetch one product by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>>;

    /// All products, id-ascending.
    async fn find_all(&self) -> Result<Vec<Product>>;

    /// Products matching the given ids, id-ascending. Ids with no match
    /// are silently dropped; duplicate ids yield one record.
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>>;

    /// Whether a product with this id exists.
    async fn exists(&self, id: i32) -> Result<bool>;

    /// Remove a product by id. Removing an absent id is a no-op.
    async fn delete(&self, id: i32) -> Result<()>;
}

/// Fold a store fault into the service taxonomy.
pub(crate) fn store_err(err: anyhow::Error) -> VitrineError {
    VitrineError::Store(err.to_string())
}

/// In-memory product store backed by a `RwLock`ed map.
pub struct MemoryStore {
    products: RwLock<HashMap<i32, Product>>,
    next_id: AtomicI32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn insert(&self, draft: NewProduct) -> Result<Product> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let product = Product {
            id,
            designation: draft.designation,
            price: draft.price,
            discount: draft.discount,
            discount_rate: draft.discount_rate,
            image: draft.image,
            article: draft.article,
            category: draft.category,
            brand: draft.brand,
            created_at: now,
            updated_at: now,
        };
        self.products.write().await.insert(id, product.clone());
        Ok(product)
    }

    async fn save(&self, mut product: Product) -> Result<Product> {
        product.updated_at = Utc::now();
        self.products
            .write()
            .await
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let mut products: Vec<Product> = self.products.read().await.values().cloned().collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>> {
        let guard = self.products.read().await;
        let mut matched: Vec<Product> = guard
            .values()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect();
        matched.sort_by_key(|p| p.id);
        Ok(matched)
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.products.read().await.contains_key(&id))
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.products.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(designation: &str, price: f64) -> NewProduct {
        NewProduct {
            designation: designation.to_string(),
            price,
            ..NewProduct::default()
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids_and_timestamps() {
        let store = MemoryStore::new();

        let first = store.insert(draft("first", 10.0)).await.unwrap();
        let second = store.insert(draft("second", 20.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn save_overwrites_and_refreshes_updated_at() {
        let store = MemoryStore::new();
        let original = store.insert(draft("desk", 100.0)).await.unwrap();

        let mut changed = original.clone();
        changed.price = 80.0;
        let saved = store.save(changed).await.unwrap();

        assert_eq!(saved.created_at, original.created_at);
        assert!(saved.updated_at >= original.updated_at);

        let fetched = store.find_by_id(original.id).await.unwrap().unwrap();
        assert_eq!(fetched.price, 80.0);
    }

    #[tokio::test]
    async fn find_all_lists_id_ascending() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.insert(draft(&format!("p{i}"), i as f64)).await.unwrap();
        }

        let all = store.find_all().await.unwrap();
        let ids: Vec<i32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn find_by_ids_drops_misses_and_duplicates() {
        let store = MemoryStore::new();
        store.insert(draft("a", 1.0)).await.unwrap();
        store.insert(draft("b", 2.0)).await.unwrap();

        let matched = store.find_by_ids(&[2, 99, 1, 2]).await.unwrap();
        let ids: Vec<i32> = matched.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn delete_removes_and_tolerates_absent_ids() {
        let store = MemoryStore::new();
        let product = store.insert(draft("gone", 5.0)).await.unwrap();

        store.delete(product.id).await.unwrap();
        assert!(!store.exists(product.id).await.unwrap());

        // Deleting again is a no-op, not an error.
        store.delete(product.id).await.unwrap();
    }
}

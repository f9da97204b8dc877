//! Product CRUD orchestration over the store seam.
//!
//! These functions own the absent-id semantics: lookups map a miss to
//! `NotFound`, and updates check existence before touching the store's
//! `save`.

use vitrine_common::types::{NewProduct, Product};
use vitrine_common::VitrineError;

use crate::store::{store_err, ProductStore};

/// Create a product. The store assigns the id and timestamps.
pub async fn create_product<S: ProductStore>(
    store: &S,
    draft: NewProduct,
) -> Result<Product, VitrineError> {
    store.insert(draft).await.map_err(store_err)
}

/// All products, id-ascending.
pub async fn list_products<S: ProductStore>(store: &S) -> Result<Vec<Product>, VitrineError> {
    store.find_all().await.map_err(store_err)
}

/// Fetch one product, or `NotFound`.
pub async fn get_product<S: ProductStore>(store: &S, id: i32) -> Result<Product, VitrineError> {
    store
        .find_by_id(id)
        .await
        .map_err(store_err)?
        .ok_or(VitrineError::NotFound(id))
}

/// Overwrite the client-supplied fields of an existing product.
///
/// The lookup comes first: when the id is unknown the result is
/// `NotFound` and the store's `save` is never called.
pub async fn update_product<S: ProductStore>(
    store: &S,
    id: i32,
    draft: NewProduct,
) -> Result<Product, VitrineError> {
    let mut product = store
        .find_by_id(id)
        .await
        .map_err(store_err)?
        .ok_or(VitrineError::NotFound(id))?;

    product.designation = draft.designation;
    product.price = draft.price;
    product.discount = draft.discount;
    product.discount_rate = draft.discount_rate;
    product.image = draft.image;
    product.article = draft.article;
    product.category = draft.category;
    product.brand = draft.brand;

    store.save(product).await.map_err(store_err)
}

/// Delete a product, or `NotFound` when the id is unknown.
pub async fn delete_product<S: ProductStore>(store: &S, id: i32) -> Result<(), VitrineError> {
    if !store.exists(id).await.map_err(store_err)? {
        return Err(VitrineError::NotFound(id));
    }
    store.delete(id).await.map_err(store_err)
}

//! Blog announcement publishing.
//!
//! The blog service sits behind the [`BlogSink`] seam so tests can stand
//! in a recording double; production wires in [`blog_client::BlogClient`].
//! One product, one post, one attempt.

use async_trait::async_trait;
use blog_client::{BlogClient, BlogError, BlogPost};
use tracing::{error, info};

use vitrine_common::types::Product;
use vitrine_common::VitrineError;

use crate::store::{store_err, ProductStore};

/// Capability of submitting one post to the blog service.
#[async_trait]
pub trait BlogSink: Send + Sync {
    async fn submit(&self, post: &BlogPost) -> blog_client::Result<String>;
}

#[async_trait]
impl BlogSink for BlogClient {
    async fn submit(&self, post: &BlogPost) -> blog_client::Result<String> {
        self.create_post(post).await
    }
}

/// Render the announcement post for a product.
pub fn build_blog_post(product: &Product, posted_by: &str) -> BlogPost {
    BlogPost {
        name: format!("New Product: {}", product.designation),
        content: format!(
            "Discover our latest product: {}. Price: ${}, Discount: {}%, Category: {}, Brand: {}. Article: {}",
            product.designation,
            product.price,
            product.discount,
            product.category,
            product.brand,
            product.article,
        ),
        posted_by: posted_by.to_string(),
        img: product.image.clone(),
    }
}

/// Publish the announcement post for one product.
///
/// Exactly one submission attempt is made; the outcome maps onto the
/// taxonomy as `NotFound`, `BlogRejected`, or `BlogUnavailable`.
pub async fn publish_product<S, B>(
    store: &S,
    blog: &B,
    product_id: i32,
    posted_by: &str,
) -> Result<String, VitrineError>
where
    S: ProductStore,
    B: BlogSink,
{
    let product = store
        .find_by_id(product_id)
        .await
        .map_err(store_err)?
        .ok_or(VitrineError::NotFound(product_id))?;

    let post = build_blog_post(&product, posted_by);
    match blog.submit(&post).await {
        Ok(_) => {
            info!(product_id, "Posted product to blog");
            Ok("Product posted to blog successfully".to_string())
        }
        Err(BlogError::Api { status, message }) => {
            error!(product_id, status, "Blog service rejected the post");
            Err(VitrineError::BlogRejected {
                status,
                body: message,
            })
        }
        Err(BlogError::Network(msg)) => {
            error!(product_id, error = %msg, "Blog service unreachable");
            Err(VitrineError::BlogUnavailable(msg))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_product;

    #[test]
    fn blog_post_follows_the_announcement_template() {
        let mut product = sample_product(3, 120.0, 15.0, 10.0);
        product.designation = "Standing Desk".to_string();
        product.category = "furniture".to_string();
        product.brand = "acme".to_string();
        product.article = "Height adjustable".to_string();

        let post = build_blog_post(&product, "catalog-service");

        assert_eq!(post.name, "New Product: Standing Desk");
        assert_eq!(
            post.content,
            "Discover our latest product: Standing Desk. Price: $120, Discount: 15%, \
             Category: furniture, Brand: acme. Article: Height adjustable"
        );
        assert_eq!(post.posted_by, "catalog-service");
        assert_eq!(post.img, product.image);
    }
}

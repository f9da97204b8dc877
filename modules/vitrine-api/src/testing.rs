// Test doubles for the service seams.
//
// Two doubles matching the two trait boundaries:
// - RecordingStore (ProductStore) — seedable in-memory map, records every
//   save, optional all-failing mode
// - RecordingBlog (BlogSink) — scripted outcome, counts submissions
//
// Plus a sample_product helper for catalog fixtures. Exposed to
// integration tests through the `test-support` feature.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use blog_client::{BlogError, BlogPost};
use chrono::DateTime;

use vitrine_common::types::{NewProduct, Product};

use crate::publish::BlogSink;
use crate::store::ProductStore;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A fully-populated product with deterministic fields derived from `id`
/// and the given criterion values.
pub fn sample_product(id: i32, price: f64, discount: f64, discount_rate: f64) -> Product {
    let ts = DateTime::from_timestamp(0, 0).unwrap();
    Product {
        id,
        designation: format!("product-{id}"),
        price,
        discount,
        discount_rate,
        image: format!("https://img.example/{id}.png"),
        article: "A fine article".to_string(),
        category: "general".to_string(),
        brand: "acme".to_string(),
        created_at: ts,
        updated_at: ts,
    }
}

// ---------------------------------------------------------------------------
// RecordingStore
// ---------------------------------------------------------------------------

/// Seedable store double. Remembers every product passed to `save` and
/// can be built in a mode where every operation fails.
pub struct RecordingStore {
    products: Mutex<HashMap<i32, Product>>,
    saved: Mutex<Vec<Product>>,
    fail: bool,
}

impl RecordingStore {
    pub fn new(seed: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(seed.into_iter().map(|p| (p.id, p)).collect()),
            saved: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A store whose every operation fails, for fault-propagation tests.
    pub fn failing() -> Self {
        Self {
            products: Mutex::new(HashMap::new()),
            saved: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Products passed to `save`, in call order.
    pub fn saved(&self) -> Vec<Product> {
        self.saved.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            bail!("store connection lost");
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for RecordingStore {
    async fn insert(&self, draft: NewProduct) -> Result<Product> {
        self.check()?;
        let mut products = self.products.lock().unwrap();
        let id = products.keys().max().copied().unwrap_or(0) + 1;
        let ts = DateTime::from_timestamp(0, 0).unwrap();
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
            created_at: ts,
            updated_at: ts,
        };
        products.insert(id, product.clone());
        Ok(product)
    }

    async fn save(&self, product: Product) -> Result<Product> {
        self.check()?;
        self.saved.lock().unwrap().push(product.clone());
        self.products
            .lock()
            .unwrap()
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        self.check()?;
        Ok(self.products.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        self.check()?;
        let mut products: Vec<Product> =
            self.products.lock().unwrap().values().cloned().collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>> {
        self.check()?;
        let guard = self.products.lock().unwrap();
        let mut matched: Vec<Product> = guard
            .values()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect();
        matched.sort_by_key(|p| p.id);
        Ok(matched)
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        self.check()?;
        Ok(self.products.lock().unwrap().contains_key(&id))
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.check()?;
        self.products.lock().unwrap().remove(&id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RecordingBlog
// ---------------------------------------------------------------------------

/// Outcome a [`RecordingBlog`] should script.
pub enum BlogOutcome {
    Accept(String),
    Reject { status: u16, body: String },
    Unreachable(String),
}

/// Blog double with a scripted outcome. Counts submissions and keeps the
/// last post for assertions.
pub struct RecordingBlog {
    outcome: BlogOutcome,
    submissions: AtomicUsize,
    last_post: Mutex<Option<BlogPost>>,
}

impl RecordingBlog {
    pub fn with_outcome(outcome: BlogOutcome) -> Self {
        Self {
            outcome,
            submissions: AtomicUsize::new(0),
            last_post: Mutex::new(None),
        }
    }

    pub fn accepting() -> Self {
        Self::with_outcome(BlogOutcome::Accept("created".to_string()))
    }

    /// Number of submission attempts seen.
    pub fn submissions(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }

    /// The most recent post submitted, if any.
    pub fn last_post(&self) -> Option<BlogPost> {
        self.last_post.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlogSink for RecordingBlog {
    async fn submit(&self, post: &BlogPost) -> blog_client::Result<String> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        *self.last_post.lock().unwrap() = Some(post.clone());
        match &self.outcome {
            BlogOutcome::Accept(body) => Ok(body.clone()),
            BlogOutcome::Reject { status, body } => Err(BlogError::Api {
                status: *status,
                message: body.clone(),
            }),
            BlogOutcome::Unreachable(msg) => Err(BlogError::Network(msg.clone())),
        }
    }
}

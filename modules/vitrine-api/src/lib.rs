//! Vitrine catalog service.
//!
//! Product CRUD over an in-process store, weighted comparison scoring, and
//! two outbound integrations: announcement posts to an external blog
//! service over HTTP, and tweets posted through a spawned interpreter
//! script. The REST layer in `rest` is a thin mapping onto the service
//! functions in `catalog`, `scoring`, `publish`, and `social`.

pub mod catalog;
pub mod publish;
pub mod rest;
pub mod scoring;
pub mod social;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

use blog_client::BlogClient;

use crate::social::ScriptPoster;
use crate::store::MemoryStore;

/// State shared by every request handler.
pub struct AppState {
    pub store: MemoryStore,
    pub blog: BlogClient,
    pub poster: ScriptPoster,
}

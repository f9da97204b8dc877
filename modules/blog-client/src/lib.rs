pub mod error;
pub mod types;

pub use error::{BlogError, Result};
pub use types::BlogPost;

use tracing::debug;

pub struct BlogClient {
    client: reqwest::Client,
    base_url: String,
}

impl BlogClient {
    /// Build a client for the blog service at `base_url`. No client-side
    /// timeout is configured and calls are never retried; deadlines are
    /// the caller's concern.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submit one post. A 2xx answer yields the raw response body;
    /// anything else becomes an `Api` error carrying the body.
    pub async fn create_post(&self, post: &BlogPost) -> Result<String> {
        let endpoint = format!("{}/api/blog/posts", self.base_url);
        debug!(endpoint = %endpoint, name = %post.name, "Submitting blog post");

        let resp = self.client.post(&endpoint).json(post).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(BlogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.text().await?)
    }
}

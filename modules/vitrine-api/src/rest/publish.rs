//! Outbound publishing handlers: blog announcements and tweets.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json};
use serde::Deserialize;

use crate::social::{self, SocialPoster};
use crate::{publish, AppState};

use super::error_response;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPublishRequest {
    /// Author name stamped on the announcement post.
    pub posted_by: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetRequest {
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

pub async fn publish_to_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<BlogPublishRequest>,
) -> impl IntoResponse {
    match publish::publish_product(&state.store, &state.blog, id, &req.posted_by).await {
        Ok(message) => message.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn publish_tweet(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TweetRequest>,
) -> impl IntoResponse {
    let text = social::truncate_tweet(&req.title);
    match state
        .poster
        .post_tweet(&text, req.image_url.as_deref())
        .await
    {
        Ok(message) => message.into_response(),
        Err(e) => error_response(e),
    }
}

//! Product CRUD and comparison handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;

use vitrine_common::types::{NewProduct, WeightSpec};

use crate::{catalog, scoring, AppState};

use super::error_response;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub product_ids: Vec<i32>,
    /// Clients may omit weights entirely; missing means no criteria.
    #[serde(default)]
    pub weights: WeightSpec,
}

pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewProduct>,
) -> impl IntoResponse {
    match catalog::create_product(&state.store, draft).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn list_products(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match catalog::list_products(&state.store).await {
        Ok(products) => Json(products).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match catalog::get_product(&state.store, id).await {
        Ok(product) => Json(product).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(draft): Json<NewProduct>,
) -> impl IntoResponse {
    match catalog::update_product(&state.store, id, draft).await {
        Ok(product) => Json(product).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match catalog::delete_product(&state.store, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn compare_products(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CompareRequest>,
) -> impl IntoResponse {
    match scoring::compare_products(&state.store, &req.product_ids, &req.weights).await {
        // An empty scored set means none of the requested ids exist.
        Ok(scored) if scored.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "no matching products"})),
        )
            .into_response(),
        Ok(scored) => Json(scored).into_response(),
        Err(e) => error_response(e),
    }
}

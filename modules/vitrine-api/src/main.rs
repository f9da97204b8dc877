use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blog_client::BlogClient;
use vitrine_api::rest;
use vitrine_api::social::ScriptPoster;
use vitrine_api::store::MemoryStore;
use vitrine_api::AppState;
use vitrine_common::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vitrine=info".parse()?))
        .init();

    let config = Config::from_env();

    let state = Arc::new(AppState {
        store: MemoryStore::new(),
        blog: BlogClient::new(&config.blog_api_url),
        poster: ScriptPoster::new(config.python_bin.clone(), config.resource_dir.clone()),
    });

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Catalog
        .route(
            "/api/products",
            post(rest::products::create_product).get(rest::products::list_products),
        )
        .route(
            "/api/products/{id}",
            get(rest::products::get_product)
                .put(rest::products::update_product)
                .delete(rest::products::delete_product),
        )
        .route("/api/products/compare", post(rest::products::compare_products))
        // Outbound publishing
        .route("/api/products/{id}/blog", post(rest::publish::publish_to_blog))
        .route("/api/social/tweet", post(rest::publish::publish_tweet))
        .with_state(state)
        // CORS: the storefront runs on a different origin
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path + status + latency
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Vitrine catalog API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

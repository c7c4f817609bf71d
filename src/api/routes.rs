use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::catalog::catalog_routes;
use super::health::health_check;
use crate::middleware::{cors_layer, security_headers_layer};
use crate::services::CatalogService;
use crate::store::EntityStore;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

pub fn create_routes(store: Arc<dyn EntityStore>) -> Router {
    let state = AppState {
        catalog: CatalogService::new(store),
    };

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", catalog_routes())
        .with_state(state)
        .layer(security_headers_layer())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};

use super::errors::ApiError;
use super::routes::AppState;
use crate::models::{GymResponse, PackageResponse, ProductResponse, WorkoutDataResponse};
use crate::services::{GymQuery, ProductQuery};

/// Read-only catalog routes. Each path answers with and without the
/// trailing slash.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(get_products))
        .route("/products/", get(get_products))
        .route("/gyms", get(get_gyms))
        .route("/gyms/", get(get_gyms))
        .route("/packages", get(get_packages))
        .route("/packages/", get(get_packages))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/", get(get_dashboard))
}

/// List products, optionally restricted to one category
///
/// A repeated key uses its last value. A query string that cannot be
/// decoded is treated as absent.
#[tracing::instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let products = state
        .catalog
        .list_products(ProductQuery::from_pairs(&pairs))
        .await?;
    Ok(Json(products))
}

/// List gyms, trainers and classes, optionally searching name and location
#[tracing::instrument(skip(state))]
pub async fn get_gyms(
    State(state): State<AppState>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Json<Vec<GymResponse>>, ApiError> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let gyms = state.catalog.list_gyms(GymQuery::from_pairs(&pairs)).await?;
    Ok(Json(gyms))
}

/// List home-gym packages
#[tracing::instrument(skip(state))]
pub async fn get_packages(
    State(state): State<AppState>,
) -> Result<Json<Vec<PackageResponse>>, ApiError> {
    let packages = state.catalog.list_packages().await?;
    Ok(Json(packages))
}

/// Workout chart data
#[tracing::instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkoutDataResponse>>, ApiError> {
    let sessions = state.catalog.dashboard().await?;
    Ok(Json(sessions))
}

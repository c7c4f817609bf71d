use std::sync::Arc;

use crate::models::{
    project_all, GymResponse, PackageResponse, ProductResponse, WorkoutDataResponse,
};
use crate::services::filters::{DashboardWindow, GymFilter, GymQuery, ProductFilter, ProductQuery};
use crate::store::{EntityStore, StoreError};

/// Runs the query → store → projection pipeline for every catalog listing.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn EntityStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn list_products(&self, query: ProductQuery) -> Result<Vec<ProductResponse>, StoreError> {
        let filter = ProductFilter::from(query);
        let products = self.store.list_products(&filter).await?;
        tracing::debug!(?filter, count = products.len(), "Listed products");

        Ok(project_all(products))
    }

    pub async fn list_gyms(&self, query: GymQuery) -> Result<Vec<GymResponse>, StoreError> {
        let filter = GymFilter::from(query);
        let gyms = self.store.list_gyms(&filter).await?;
        tracing::debug!(?filter, count = gyms.len(), "Listed gyms");

        Ok(project_all(gyms))
    }

    pub async fn list_packages(&self) -> Result<Vec<PackageResponse>, StoreError> {
        let packages = self.store.list_packages().await?;
        tracing::debug!(count = packages.len(), "Listed packages");

        Ok(project_all(packages))
    }

    /// Workout data for the dashboard chart. Not scoped to any user.
    pub async fn dashboard(&self) -> Result<Vec<WorkoutDataResponse>, StoreError> {
        let window = DashboardWindow::default();
        let sessions = self.store.list_workout_sessions(window).await?;
        tracing::debug!(limit = window.limit(), count = sessions.len(), "Loaded dashboard");

        Ok(project_all(sessions))
    }

    pub async fn check_store(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}

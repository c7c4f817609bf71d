// Entity store: read access to the persisted catalog

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Gym, Package, Product, WorkoutSession};
use crate::services::filters::{DashboardWindow, GymFilter, ProductFilter};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

/// Read-only view over the four catalog tables.
///
/// Every listing returns records in ascending identifier order, which is the
/// order they were created in. Implementations never mutate the underlying
/// data.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError>;

    /// Each gym appears at most once, even when both its name and its
    /// location match the search term.
    async fn list_gyms(&self, filter: &GymFilter) -> Result<Vec<Gym>, StoreError>;

    async fn list_packages(&self) -> Result<Vec<Package>, StoreError>;

    async fn list_workout_sessions(
        &self,
        window: DashboardWindow,
    ) -> Result<Vec<WorkoutSession>, StoreError>;

    /// Cheap connectivity check used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

use async_trait::async_trait;
use sqlx::PgPool;

use super::{EntityStore, StoreError};
use crate::models::{Gym, Package, Product, WorkoutSession};
use crate::services::filters::{DashboardWindow, GymFilter, ProductFilter};

/// PostgreSQL-backed store.
#[derive(Debug, Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        let products = match filter {
            ProductFilter::All => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, name, category, price, image, rating, description FROM products ORDER BY id",
                )
                .fetch_all(&self.db)
                .await?
            }
            ProductFilter::Category(category) => {
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT id, name, category, price, image, rating, description
                    FROM products
                    WHERE category = $1
                    ORDER BY id
                    "#,
                )
                .bind(category)
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(products)
    }

    async fn list_gyms(&self, filter: &GymFilter) -> Result<Vec<Gym>, StoreError> {
        // One OR predicate keeps each row once, however many columns match.
        let gyms = match filter.like_pattern() {
            None => {
                sqlx::query_as::<_, Gym>(
                    "SELECT id, name, location, gym_type, price_per_session, rating, image, features FROM gyms ORDER BY id",
                )
                .fetch_all(&self.db)
                .await?
            }
            Some(pattern) => {
                sqlx::query_as::<_, Gym>(
                    r#"
                    SELECT id, name, location, gym_type, price_per_session, rating, image, features
                    FROM gyms
                    WHERE name ILIKE $1 OR location ILIKE $1
                    ORDER BY id
                    "#,
                )
                .bind(pattern)
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(gyms)
    }

    async fn list_packages(&self) -> Result<Vec<Package>, StoreError> {
        let packages = sqlx::query_as::<_, Package>(
            "SELECT id, name, tier, price, items, description, image FROM packages ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(packages)
    }

    async fn list_workout_sessions(
        &self,
        window: DashboardWindow,
    ) -> Result<Vec<WorkoutSession>, StoreError> {
        let limit = i64::try_from(window.limit()).unwrap_or(i64::MAX);

        let sessions = sqlx::query_as::<_, WorkoutSession>(
            "SELECT id, user_id, day, calories, duration FROM workout_sessions ORDER BY id LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(sessions)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }
}

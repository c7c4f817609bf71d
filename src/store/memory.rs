use async_trait::async_trait;

use super::{EntityStore, StoreError};
use crate::config::seeding::DemoCatalog;
use crate::models::{
    Gym, NewGym, NewPackage, NewProduct, NewWorkoutSession, Package, Product, WorkoutSession,
};
use crate::services::filters::{DashboardWindow, GymFilter, ProductFilter};

/// In-memory store with the same listing semantics as [`PgStore`].
///
/// Identifiers are assigned sequentially per table, starting at 1, as
/// records are added.
///
/// [`PgStore`]: super::PgStore
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    products: Vec<Product>,
    gyms: Vec<Gym>,
    packages: Vec<Package>,
    workout_sessions: Vec<WorkoutSession>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: DemoCatalog) -> Self {
        Self::new()
            .with_products(catalog.products)
            .with_gyms(catalog.gyms)
            .with_packages(catalog.packages)
            .with_workout_sessions(catalog.workout_sessions)
    }

    /// Store preloaded with the demo catalog.
    pub fn demo() -> Self {
        Self::from_catalog(DemoCatalog::demo())
    }

    pub fn with_products(mut self, products: impl IntoIterator<Item = NewProduct>) -> Self {
        for product in products {
            let id = next_id(self.products.len());
            self.products.push(product.into_product(id));
        }
        self
    }

    pub fn with_gyms(mut self, gyms: impl IntoIterator<Item = NewGym>) -> Self {
        for gym in gyms {
            let id = next_id(self.gyms.len());
            self.gyms.push(gym.into_gym(id));
        }
        self
    }

    pub fn with_packages(mut self, packages: impl IntoIterator<Item = NewPackage>) -> Self {
        for package in packages {
            let id = next_id(self.packages.len());
            self.packages.push(package.into_package(id));
        }
        self
    }

    pub fn with_workout_sessions(
        mut self,
        sessions: impl IntoIterator<Item = NewWorkoutSession>,
    ) -> Self {
        for session in sessions {
            let id = next_id(self.workout_sessions.len());
            self.workout_sessions.push(session.into_session(id));
        }
        self
    }
}

fn next_id(len: usize) -> i64 {
    len as i64 + 1
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .products
            .iter()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect())
    }

    async fn list_gyms(&self, filter: &GymFilter) -> Result<Vec<Gym>, StoreError> {
        Ok(self
            .gyms
            .iter()
            .filter(|gym| filter.matches(gym))
            .cloned()
            .collect())
    }

    async fn list_packages(&self) -> Result<Vec<Package>, StoreError> {
        Ok(self.packages.clone())
    }

    async fn list_workout_sessions(
        &self,
        window: DashboardWindow,
    ) -> Result<Vec<WorkoutSession>, StoreError> {
        Ok(self
            .workout_sessions
            .iter()
            .take(window.limit())
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GymType;
    use rust_decimal::Decimal;

    fn new_gym(name: &str, location: &str) -> NewGym {
        NewGym {
            name: name.to_string(),
            location: location.to_string(),
            gym_type: GymType::Class,
            price_per_session: Decimal::new(1850, 2),
            rating: 4.0,
            image: String::new(),
            features: Vec::new(),
        }
    }

    fn session(day: &str) -> NewWorkoutSession {
        NewWorkoutSession {
            user_id: None,
            day: day.to_string(),
            calories: 300,
            duration: 30,
        }
    }

    #[tokio::test]
    async fn test_ids_follow_insertion_order() {
        let store = MemoryStore::new().with_gyms(vec![
            new_gym("Iron Pulse", "Downtown"),
            new_gym("Zen Yoga", "Iron District"),
        ]);

        let gyms = store.list_gyms(&GymFilter::All).await.unwrap();
        let ids: Vec<i64> = gyms.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_search_returns_each_gym_once() {
        let store = MemoryStore::new().with_gyms(vec![
            new_gym("Iron Pulse", "Iron Hill"),
            new_gym("Zen Yoga", "Uptown"),
        ]);

        let gyms = store
            .list_gyms(&GymFilter::Search("IRON".to_string()))
            .await
            .unwrap();
        assert_eq!(gyms.len(), 1);
        assert_eq!(gyms[0].name, "Iron Pulse");
    }

    #[tokio::test]
    async fn test_workout_window_takes_leading_sessions() {
        let days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun", "Mon", "Tue"];
        let store = MemoryStore::new().with_workout_sessions(days.iter().map(|d| session(d)));

        let sessions = store
            .list_workout_sessions(DashboardWindow::default())
            .await
            .unwrap();
        assert_eq!(sessions.len(), 7);
        assert_eq!(sessions.first().map(|s| s.id), Some(1));
        assert_eq!(sessions.last().map(|s| s.day.as_str()), Some("Sun"));
    }

    #[tokio::test]
    async fn test_demo_store_is_populated() {
        let store = MemoryStore::demo();
        assert!(!store.list_products(&ProductFilter::All).await.unwrap().is_empty());
        assert!(!store.list_gyms(&GymFilter::All).await.unwrap().is_empty());
        assert!(!store.list_packages().await.unwrap().is_empty());
        assert!(!store
            .list_workout_sessions(DashboardWindow::default())
            .await
            .unwrap()
            .is_empty());
    }
}

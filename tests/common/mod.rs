#![allow(dead_code)]

use std::sync::{Arc, Once};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use fitnexus::api::create_routes;
use fitnexus::models::*;
use fitnexus::services::{DashboardWindow, GymFilter, ProductFilter};
use fitnexus::store::{EntityStore, MemoryStore, StoreError};

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Store whose every call fails, as when the database is down.
pub struct FailingStore;

#[async_trait]
impl EntityStore for FailingStore {
    async fn list_products(&self, _filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list_gyms(&self, _filter: &GymFilter) -> Result<Vec<Gym>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list_packages(&self) -> Result<Vec<Package>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list_workout_sessions(
        &self,
        _window: DashboardWindow,
    ) -> Result<Vec<WorkoutSession>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Mock data generators
pub struct MockDataGenerator;

impl MockDataGenerator {
    pub fn product(name: &str, category: &str, price: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            category: category.to_string(),
            price: price.parse::<Decimal>().unwrap(),
            image: format!("https://images.example.com/{}.jpg", name.to_lowercase().replace(' ', "-")),
            rating: 4.0,
            description: format!("{name} for testing"),
        }
    }

    pub fn gym(name: &str, location: &str) -> NewGym {
        NewGym {
            name: name.to_string(),
            location: location.to_string(),
            gym_type: GymType::Gym,
            price_per_session: Decimal::new(1500, 2),
            rating: 4.5,
            image: "https://images.example.com/gym.jpg".to_string(),
            features: vec!["Sauna".to_string()],
        }
    }

    pub fn package(name: &str, tier: PackageTier) -> NewPackage {
        NewPackage {
            name: name.to_string(),
            tier,
            price: Decimal::new(19900, 2),
            items: vec!["Yoga Mat".to_string(), "Kettlebell".to_string()],
            description: "Test package".to_string(),
            image: "https://images.example.com/package.jpg".to_string(),
        }
    }

    pub fn workout_sessions(count: usize) -> Vec<NewWorkoutSession> {
        const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

        (0..count)
            .map(|i| NewWorkoutSession {
                user_id: Some(uuid::Uuid::new_v4()),
                day: DAYS[i % DAYS.len()].to_string(),
                calories: 300 + i as i32 * 10,
                duration: 30 + i as i32,
            })
            .collect()
    }
}

/// Router over an in-memory store
pub fn test_app(store: MemoryStore) -> Router {
    create_routes(Arc::new(store))
}

pub fn failing_app() -> Router {
    create_routes(Arc::new(FailingStore))
}

/// Issue a GET and decode the JSON body
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

pub fn names(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("response should be a JSON array")
        .iter()
        .map(|item| item["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

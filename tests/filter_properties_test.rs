mod common;

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use common::MockDataGenerator;
use fitnexus::models::Projection;
use fitnexus::services::{CatalogService, GymQuery, ProductQuery};
use fitnexus::store::MemoryStore;

const CATEGORIES: [&str; 4] = ["Supplements", "Equipment", "Apparel", "supplements"];

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

fn catalog(store: MemoryStore) -> CatalogService {
    CatalogService::new(Arc::new(store))
}

/// ASCII case-insensitive substring test, kept separate from the filter code.
fn contains_ascii_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

fn category_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CATEGORIES.to_vec())
}

proptest! {
    #[test]
    fn prop_category_filter_selects_exact_subset(
        categories in prop::collection::vec(category_strategy(), 0..20),
        wanted in category_strategy(),
    ) {
        let store = MemoryStore::new().with_products(
            categories
                .iter()
                .enumerate()
                .map(|(i, c)| MockDataGenerator::product(&format!("Item {i}"), c, "10.00")),
        );
        let service = catalog(store);

        let all = block_on(service.list_products(ProductQuery::default())).unwrap();
        let explicit_all = block_on(service.list_products(ProductQuery {
            category: Some("All".to_string()),
        }))
        .unwrap();
        let filtered = block_on(service.list_products(ProductQuery {
            category: Some(wanted.to_string()),
        }))
        .unwrap();

        prop_assert_eq!(all.len(), categories.len());
        prop_assert_eq!(&all, &explicit_all);
        prop_assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        let expected: Vec<i64> = all
            .iter()
            .filter(|p| p.category == wanted)
            .map(|p| p.id)
            .collect();
        let actual: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_gym_search_returns_each_match_once(
        gyms in prop::collection::vec(("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}"), 0..15),
        term in "[a-zA-Z]{1,3}",
    ) {
        let store = MemoryStore::new().with_gyms(
            gyms.iter().map(|(name, location)| MockDataGenerator::gym(name, location)),
        );
        let service = catalog(store);

        let found = block_on(service.list_gyms(GymQuery { search: Some(term.clone()) })).unwrap();
        let everything = block_on(service.list_gyms(GymQuery { search: Some(String::new()) })).unwrap();
        prop_assert_eq!(everything.len(), gyms.len());

        let expected: Vec<i64> = gyms
            .iter()
            .enumerate()
            .filter(|(_, (name, location))| {
                contains_ascii_ci(name, &term) || contains_ascii_ci(location, &term)
            })
            .map(|(i, _)| i as i64 + 1)
            .collect();
        let actual: Vec<i64> = found.iter().map(|g| g.id).collect();

        let mut deduped = actual.clone();
        deduped.dedup();
        prop_assert_eq!(&deduped, &actual);
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_dashboard_never_exceeds_window(count in 0usize..30) {
        let store = MemoryStore::new()
            .with_workout_sessions(MockDataGenerator::workout_sessions(count));
        let sessions = block_on(catalog(store).dashboard()).unwrap();

        prop_assert_eq!(sessions.len(), count.min(7));
    }

    #[test]
    fn prop_price_per_session_survives_serialization(cents in 0i64..9_999_999_999) {
        let mut new_gym = MockDataGenerator::gym("Iron Pulse", "Downtown");
        new_gym.price_per_session = Decimal::new(cents, 2);
        let stored = new_gym.clone().into_gym(1);

        let json = serde_json::to_value(stored.clone().project()).unwrap();
        let read_back: Decimal = json["pricePerSession"].as_str().unwrap().parse().unwrap();

        prop_assert_eq!(read_back, stored.price_per_session);
    }
}

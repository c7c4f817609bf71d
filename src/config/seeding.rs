use anyhow::Result;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::*;

/// Demo catalog shared by the database seeder and the in-memory store.
#[derive(Debug, Clone, Default)]
pub struct DemoCatalog {
    pub products: Vec<NewProduct>,
    pub gyms: Vec<NewGym>,
    pub packages: Vec<NewPackage>,
    pub workout_sessions: Vec<NewWorkoutSession>,
}

impl DemoCatalog {
    pub fn demo() -> Self {
        Self {
            products: demo_products(),
            gyms: demo_gyms(),
            packages: demo_packages(),
            workout_sessions: demo_workout_sessions(),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn demo_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Whey Isolate 2kg".to_string(),
            category: "Supplements".to_string(),
            price: Decimal::new(5999, 2),
            image: "https://images.unsplash.com/photo-1593095948071-474c5cc2989d".to_string(),
            rating: 4.8,
            description: "Cold-filtered whey isolate, 27g protein per serving.".to_string(),
        },
        NewProduct {
            name: "Adjustable Dumbbells".to_string(),
            category: "Equipment".to_string(),
            price: Decimal::new(34900, 2),
            image: "https://images.unsplash.com/photo-1583454110551-21f2fa2afe61".to_string(),
            rating: 4.6,
            description: "Pair of dial-adjustable dumbbells from 2.5kg to 24kg.".to_string(),
        },
        NewProduct {
            name: "Compression Tee".to_string(),
            category: "Apparel".to_string(),
            price: Decimal::new(3450, 2),
            image: "https://images.unsplash.com/photo-1581655353564-df123a1eb820".to_string(),
            rating: 4.2,
            description: "Breathable training top with flatlock seams.".to_string(),
        },
        NewProduct {
            name: "Creatine Monohydrate".to_string(),
            category: "Supplements".to_string(),
            price: Decimal::new(2499, 2),
            image: "https://images.unsplash.com/photo-1579722820308-d74e571900a9".to_string(),
            rating: 4.9,
            description: "Micronized creatine, 100 servings.".to_string(),
        },
        NewProduct {
            name: "Smart Jump Rope".to_string(),
            category: "Accessories".to_string(),
            price: Decimal::new(4500, 2),
            image: "https://images.unsplash.com/photo-1434682881908-b43d0467b798".to_string(),
            rating: 4.1,
            description: "Counts jumps and calories, syncs over Bluetooth.".to_string(),
        },
    ]
}

fn demo_gyms() -> Vec<NewGym> {
    vec![
        NewGym {
            name: "Iron Pulse".to_string(),
            location: "Downtown".to_string(),
            gym_type: GymType::Gym,
            price_per_session: Decimal::new(1500, 2),
            rating: 4.7,
            image: "https://images.unsplash.com/photo-1534438327276-14e5300c3a48".to_string(),
            features: strings(&["24/7 Access", "Sauna", "Free Weights"]),
        },
        NewGym {
            name: "Zen Yoga Loft".to_string(),
            location: "Iron District".to_string(),
            gym_type: GymType::Class,
            price_per_session: Decimal::new(2200, 2),
            rating: 4.9,
            image: "https://images.unsplash.com/photo-1545205597-3d9d02c29597".to_string(),
            features: strings(&["Hot Yoga", "Mats Provided"]),
        },
        NewGym {
            name: "Coach Maya Reyes".to_string(),
            location: "Riverside".to_string(),
            gym_type: GymType::Trainer,
            price_per_session: Decimal::new(6000, 2),
            rating: 5.0,
            image: "https://images.unsplash.com/photo-1571019614242-c5c5dee9f50b".to_string(),
            features: strings(&["Strength Programming", "Nutrition Plan"]),
        },
        NewGym {
            name: "Summit Climbing Hall".to_string(),
            location: "Northside".to_string(),
            gym_type: GymType::Gym,
            price_per_session: Decimal::new(1850, 2),
            rating: 4.4,
            image: "https://images.unsplash.com/photo-1522163182402-834f871fd851".to_string(),
            features: Vec::new(),
        },
    ]
}

fn demo_packages() -> Vec<NewPackage> {
    vec![
        NewPackage {
            name: "Apartment Starter".to_string(),
            tier: PackageTier::Starter,
            price: Decimal::new(19900, 2),
            items: strings(&["Yoga Mat", "Resistance Bands", "Kettlebell 12kg"]),
            description: "Quiet, compact kit for small spaces.".to_string(),
            image: "https://images.unsplash.com/photo-1518611012118-696072aa579a".to_string(),
        },
        NewPackage {
            name: "Garage Pro".to_string(),
            tier: PackageTier::Pro,
            price: Decimal::new(89900, 2),
            items: strings(&["Squat Rack", "Olympic Barbell", "100kg Plate Set", "Flat Bench"]),
            description: "A full strength setup for the garage.".to_string(),
            image: "https://images.unsplash.com/photo-1576678927484-cc907957088c".to_string(),
        },
        NewPackage {
            name: "Elite Performance Lab".to_string(),
            tier: PackageTier::Elite,
            price: Decimal::new(249900, 2),
            items: strings(&[
                "Power Rack",
                "Competition Plates",
                "Air Bike",
                "Rowing Machine",
                "Recovery Gun",
            ]),
            description: "Everything a serious athlete needs at home.".to_string(),
            image: "https://images.unsplash.com/photo-1540497077202-7c8a3999166f".to_string(),
        },
    ]
}

fn demo_workout_sessions() -> Vec<NewWorkoutSession> {
    [
        ("Mon", 420, 45),
        ("Tue", 380, 40),
        ("Wed", 510, 60),
        ("Thu", 300, 30),
        ("Fri", 620, 70),
        ("Sat", 700, 80),
        ("Sun", 250, 25),
    ]
    .into_iter()
    .map(|(day, calories, duration)| NewWorkoutSession {
        user_id: None,
        day: day.to_string(),
        calories,
        duration,
    })
    .collect()
}

/// Writes the demo catalog into empty tables.
pub struct DatabaseSeeder {
    pool: PgPool,
    catalog: DemoCatalog,
}

impl DatabaseSeeder {
    pub fn new(pool: PgPool) -> Self {
        Self::with_catalog(pool, DemoCatalog::demo())
    }

    pub fn with_catalog(pool: PgPool, catalog: DemoCatalog) -> Self {
        Self { pool, catalog }
    }

    pub async fn seed_all(&self) -> Result<()> {
        tracing::info!("Starting database seeding...");

        self.seed_products().await?;
        self.seed_gyms().await?;
        self.seed_packages().await?;
        self.seed_workout_sessions().await?;

        tracing::info!("Database seeding completed!");
        Ok(())
    }

    async fn is_empty(&self, table: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(count == 0)
    }

    async fn seed_products(&self) -> Result<()> {
        if !self.is_empty("products").await? {
            return Ok(());
        }

        for product in &self.catalog.products {
            sqlx::query(
                r#"
                INSERT INTO products (name, category, price, image, rating, description)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(&product.name)
            .bind(&product.category)
            .bind(product.price)
            .bind(&product.image)
            .bind(product.rating)
            .bind(&product.description)
            .execute(&self.pool)
            .await?;
        }

        tracing::info!(count = self.catalog.products.len(), "Created demo products");
        Ok(())
    }

    async fn seed_gyms(&self) -> Result<()> {
        if !self.is_empty("gyms").await? {
            return Ok(());
        }

        for gym in &self.catalog.gyms {
            sqlx::query(
                r#"
                INSERT INTO gyms (name, location, gym_type, price_per_session, rating, image, features)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(&gym.name)
            .bind(&gym.location)
            .bind(gym.gym_type)
            .bind(gym.price_per_session)
            .bind(gym.rating)
            .bind(&gym.image)
            .bind(&gym.features)
            .execute(&self.pool)
            .await?;
        }

        tracing::info!(count = self.catalog.gyms.len(), "Created demo gyms");
        Ok(())
    }

    async fn seed_packages(&self) -> Result<()> {
        if !self.is_empty("packages").await? {
            return Ok(());
        }

        for package in &self.catalog.packages {
            sqlx::query(
                r#"
                INSERT INTO packages (name, tier, price, items, description, image)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(&package.name)
            .bind(package.tier)
            .bind(package.price)
            .bind(&package.items)
            .bind(&package.description)
            .bind(&package.image)
            .execute(&self.pool)
            .await?;
        }

        tracing::info!(count = self.catalog.packages.len(), "Created demo packages");
        Ok(())
    }

    async fn seed_workout_sessions(&self) -> Result<()> {
        if !self.is_empty("workout_sessions").await? {
            return Ok(());
        }

        for session in &self.catalog.workout_sessions {
            sqlx::query(
                r#"
                INSERT INTO workout_sessions (user_id, day, calories, duration)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(session.user_id)
            .bind(&session.day)
            .bind(session.calories)
            .bind(session.duration)
            .execute(&self.pool)
            .await?;
        }

        tracing::info!(
            count = self.catalog.workout_sessions.len(),
            "Created demo workout sessions"
        );
        Ok(())
    }
}

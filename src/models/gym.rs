use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

use super::projection::{money, Projection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "gym_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum GymType {
    Gym,
    Trainer,
    Class,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Gym {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub gym_type: GymType,
    pub price_per_session: Decimal,
    pub rating: f64,
    pub image: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGym {
    pub name: String,
    pub location: String,
    pub gym_type: GymType,
    pub price_per_session: Decimal,
    #[serde(default)]
    pub rating: f64,
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl NewGym {
    pub fn into_gym(self, id: i64) -> Gym {
        Gym {
            id,
            name: self.name,
            location: self.location,
            gym_type: self.gym_type,
            price_per_session: self.price_per_session,
            rating: self.rating,
            image: self.image,
            features: self.features,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymResponse {
    pub id: i64,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub gym_type: GymType,
    #[serde(rename = "pricePerSession")]
    pub price_per_session: Decimal,
    pub rating: f64,
    pub image: String,
    pub features: Vec<String>,
}

impl Projection for Gym {
    type Output = GymResponse;

    // Storage keeps snake_case columns; the client contract uses `type` and
    // `pricePerSession`.
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "location",
        "type",
        "pricePerSession",
        "rating",
        "image",
        "features",
    ];

    fn project(self) -> GymResponse {
        GymResponse {
            id: self.id,
            name: self.name,
            location: self.location,
            gym_type: self.gym_type,
            price_per_session: money(self.price_per_session),
            rating: self.rating,
            image: self.image,
            features: self.features,
        }
    }
}

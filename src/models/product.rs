use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::projection::{money, Projection};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
    pub rating: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    pub description: String,
}

impl NewProduct {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            image: self.image,
            rating: self.rating,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
    pub rating: f64,
    pub description: String,
}

impl Projection for Product {
    type Output = ProductResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "category",
        "price",
        "image",
        "rating",
        "description",
    ];

    fn project(self) -> ProductResponse {
        ProductResponse {
            id: self.id,
            name: self.name,
            category: self.category,
            price: money(self.price),
            image: self.image,
            rating: self.rating,
            description: self.description,
        }
    }
}

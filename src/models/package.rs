use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

use super::projection::{money, Projection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "package_tier", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PackageTier {
    Starter,
    Pro,
    Elite,
}

/// A home-gym bundle sold as a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Package {
    pub id: i64,
    pub name: String,
    pub tier: PackageTier,
    pub price: Decimal,
    pub items: Vec<String>,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPackage {
    pub name: String,
    pub tier: PackageTier,
    pub price: Decimal,
    #[serde(default)]
    pub items: Vec<String>,
    pub description: String,
    pub image: String,
}

impl NewPackage {
    pub fn into_package(self, id: i64) -> Package {
        Package {
            id,
            name: self.name,
            tier: self.tier,
            price: self.price,
            items: self.items,
            description: self.description,
            image: self.image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageResponse {
    pub id: i64,
    pub name: String,
    pub tier: PackageTier,
    pub price: Decimal,
    pub items: Vec<String>,
    pub description: String,
    pub image: String,
}

impl Projection for Package {
    type Output = PackageResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "tier",
        "price",
        "items",
        "description",
        "image",
    ];

    fn project(self) -> PackageResponse {
        PackageResponse {
            id: self.id,
            name: self.name,
            tier: self.tier,
            price: money(self.price),
            items: self.items,
            description: self.description,
            image: self.image,
        }
    }
}
